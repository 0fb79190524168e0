//! Enterprise Management v1: enterprises, account groups and accounts

pub mod models;
pub mod params;

pub use models::*;
pub use params::*;
