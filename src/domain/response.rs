use serde::{Deserialize, Serialize};

/// A decoded API response together with its HTTP metadata
#[derive(Debug, Clone)]
pub struct DetailedResponse<T> {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub result: T,
}

impl<T> DetailedResponse<T> {
    pub fn new(status: u16, headers: Vec<(String, String)>, result: T) -> Self {
        Self {
            status,
            headers,
            result,
        }
    }

    /// Look up a response header, case-insensitively
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn into_result(self) -> T {
        self.result
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> DetailedResponse<U> {
        DetailedResponse {
            status: self.status,
            headers: self.headers,
            result: f(self.result),
        }
    }
}

/// Result type for operations that return no meaningful body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyObject {}
