//! CLI module for `iamctl`
//!
//! Lists IAM and enterprise resources, walking every page:
//! - `api-keys`, `service-ids`, `profiles`: IAM Identity
//! - `access-groups`: IAM Access Groups
//! - `enterprises`, `accounts`, `account-groups`: Enterprise Management

pub mod list;

use clap::{Args, Parser, Subcommand};
use tracing::debug;

use crate::config::AppConfig;
use crate::infrastructure::logging::init_logging;
use crate::infrastructure::observability::{init_tracing, shutdown_tracing};

/// iamctl - query IBM Cloud IAM and Enterprise Management
#[derive(Parser)]
#[command(name = "iamctl")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// IAM API keys
    #[command(subcommand)]
    ApiKeys(ApiKeysCommand),

    /// IAM service IDs
    #[command(subcommand)]
    ServiceIds(ServiceIdsCommand),

    /// Trusted profiles of an account
    #[command(subcommand)]
    Profiles(ProfilesCommand),

    /// Access groups of an account
    #[command(subcommand)]
    AccessGroups(AccessGroupsCommand),

    /// Enterprises visible to the caller
    #[command(subcommand)]
    Enterprises(EnterprisesCommand),

    /// Accounts of an enterprise
    #[command(subcommand)]
    Accounts(AccountsCommand),

    /// Account groups of an enterprise
    #[command(subcommand)]
    AccountGroups(AccountGroupsCommand),
}

macro_rules! list_command {
    ($($name:ident($args:ty)),+ $(,)?) => {
        $(
            #[derive(Subcommand)]
            pub enum $name {
                /// List every resource, following pagination
                List($args),
            }

            impl $name {
                pub fn into_args(self) -> $args {
                    match self {
                        Self::List(args) => args,
                    }
                }
            }
        )+
    };
}

list_command!(
    ApiKeysCommand(ApiKeysArgs),
    ServiceIdsCommand(ServiceIdsArgs),
    ProfilesCommand(AccountArgs),
    AccessGroupsCommand(AccessGroupsArgs),
    EnterprisesCommand(EnterprisesArgs),
    AccountsCommand(EnterpriseChildrenArgs),
    AccountGroupsCommand(EnterpriseChildrenArgs),
);

#[derive(Args, Debug, Clone)]
pub struct ApiKeysArgs {
    #[arg(long)]
    pub account_id: Option<String>,
    /// Only keys owned by this IAM id
    #[arg(long)]
    pub iam_id: Option<String>,
    #[arg(long)]
    pub page_size: Option<i64>,
}

#[derive(Args, Debug, Clone)]
pub struct ServiceIdsArgs {
    #[arg(long)]
    pub account_id: Option<String>,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub page_size: Option<i64>,
}

#[derive(Args, Debug, Clone)]
pub struct AccountArgs {
    #[arg(long)]
    pub account_id: String,
    #[arg(long)]
    pub page_size: Option<i64>,
}

#[derive(Args, Debug, Clone)]
pub struct AccessGroupsArgs {
    #[arg(long)]
    pub account_id: String,
    /// Only groups this IAM id is a member of
    #[arg(long)]
    pub iam_id: Option<String>,
    #[arg(long)]
    pub page_size: Option<i64>,
}

#[derive(Args, Debug, Clone)]
pub struct EnterprisesArgs {
    #[arg(long)]
    pub enterprise_account_id: Option<String>,
    #[arg(long)]
    pub account_id: Option<String>,
    #[arg(long)]
    pub page_size: Option<i64>,
}

#[derive(Args, Debug, Clone)]
pub struct EnterpriseChildrenArgs {
    #[arg(long)]
    pub enterprise_id: Option<String>,
    /// CRN of the parent enterprise or account group
    #[arg(long)]
    pub parent: Option<String>,
    #[arg(long)]
    pub page_size: Option<i64>,
}

/// Load configuration, install logging and run the selected command
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    init_observability(&config);
    debug!("Configuration loaded");

    let result = list::run(&config, cli.command).await;

    if config.observability.tracing.enabled {
        shutdown_tracing();
    }

    result
}

fn init_observability(config: &AppConfig) {
    if config.observability.tracing.enabled {
        init_tracing(&config.logging, &config.observability.tracing);
    } else {
        init_logging(&config.logging);
    }
}
