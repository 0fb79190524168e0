//! Request construction shared by every service operation
//!
//! An [`ApiRequest`] carries everything an operation knows about the call it
//! wants to make: method, path template and path params, query pairs, the
//! JSON body, and two header layers (operation defaults, then caller
//! overrides). The base service resolves it against a service URL.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

use super::error::SdkError;

/// Caller-supplied request headers. Applied last, so they override defaults.
pub type Headers = BTreeMap<String, String>;

pub const APPLICATION_JSON: &str = "application/json";

/// HTTP verbs used by the IAM APIs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Head => "HEAD",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Values that can be rendered into a query string
pub trait QueryValue {
    fn to_query_value(&self) -> String;
}

impl QueryValue for str {
    fn to_query_value(&self) -> String {
        self.to_string()
    }
}

impl QueryValue for String {
    fn to_query_value(&self) -> String {
        self.clone()
    }
}

impl QueryValue for bool {
    fn to_query_value(&self) -> String {
        String::from(if *self { "true" } else { "false" })
    }
}

impl QueryValue for i32 {
    fn to_query_value(&self) -> String {
        self.to_string()
    }
}

impl QueryValue for i64 {
    fn to_query_value(&self) -> String {
        self.to_string()
    }
}

impl QueryValue for u32 {
    fn to_query_value(&self) -> String {
        self.to_string()
    }
}

impl QueryValue for u64 {
    fn to_query_value(&self) -> String {
        self.to_string()
    }
}

/// Lists are sent comma-separated
impl QueryValue for Vec<String> {
    fn to_query_value(&self) -> String {
        self.join(",")
    }
}

impl<T: QueryValue + ?Sized> QueryValue for &T {
    fn to_query_value(&self) -> String {
        (**self).to_query_value()
    }
}

/// Insert or replace a header, matching names case-insensitively
pub fn merge_header(headers: &mut Vec<(String, String)>, name: &str, value: &str) {
    match headers
        .iter_mut()
        .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
    {
        Some(entry) => {
            entry.0 = name.to_string();
            entry.1 = value.to_string();
        }
        None => headers.push((name.to_string(), value.to_string())),
    }
}

/// A fully described, not yet resolved, API call
#[derive(Debug, Clone)]
pub struct ApiRequest {
    operation_id: &'static str,
    method: HttpMethod,
    path_template: &'static str,
    path_params: Vec<(&'static str, String)>,
    query: Vec<(String, String)>,
    body: Option<Map<String, Value>>,
    body_error: Option<String>,
    default_headers: Vec<(String, String)>,
    caller_headers: Headers,
}

impl ApiRequest {
    pub fn new(method: HttpMethod, path_template: &'static str, operation_id: &'static str) -> Self {
        Self {
            operation_id,
            method,
            path_template,
            path_params: Vec::new(),
            query: Vec::new(),
            body: None,
            body_error: None,
            default_headers: Vec::new(),
            caller_headers: Headers::new(),
        }
    }

    pub fn get(path_template: &'static str, operation_id: &'static str) -> Self {
        Self::new(HttpMethod::Get, path_template, operation_id)
    }

    pub fn post(path_template: &'static str, operation_id: &'static str) -> Self {
        Self::new(HttpMethod::Post, path_template, operation_id)
    }

    pub fn put(path_template: &'static str, operation_id: &'static str) -> Self {
        Self::new(HttpMethod::Put, path_template, operation_id)
    }

    pub fn patch(path_template: &'static str, operation_id: &'static str) -> Self {
        Self::new(HttpMethod::Patch, path_template, operation_id)
    }

    pub fn delete(path_template: &'static str, operation_id: &'static str) -> Self {
        Self::new(HttpMethod::Delete, path_template, operation_id)
    }

    pub fn head(path_template: &'static str, operation_id: &'static str) -> Self {
        Self::new(HttpMethod::Head, path_template, operation_id)
    }

    /// Bind a `{name}` placeholder of the path template
    pub fn path_param(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.path_params.push((name, value.into()));
        self
    }

    pub fn query<T: QueryValue>(mut self, name: &str, value: T) -> Self {
        self.query.push((name.to_string(), value.to_query_value()));
        self
    }

    /// Add a query pair only when a value is present
    pub fn query_opt<T: QueryValue>(self, name: &str, value: Option<T>) -> Self {
        match value {
            Some(value) => self.query(name, value),
            None => self,
        }
    }

    /// Set a top-level field of the JSON body
    pub fn body_field<T: Serialize + ?Sized>(mut self, name: &str, value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(value) => {
                self.body
                    .get_or_insert_with(Map::new)
                    .insert(name.to_string(), value);
            }
            Err(e) => {
                self.body_error
                    .get_or_insert_with(|| format!("field '{}': {}", name, e));
            }
        }
        self
    }

    /// Set a body field only when a value is present
    pub fn body_field_opt<T: Serialize>(self, name: &str, value: Option<T>) -> Self {
        match value {
            Some(value) => self.body_field(name, &value),
            None => self,
        }
    }

    pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        merge_header(&mut self.default_headers, name, &value.into());
        self
    }

    /// Conditional headers such as `If-Match` or `Transaction-Id`
    pub fn header_opt<V: AsRef<str>>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.header(name, value.as_ref()),
            None => self,
        }
    }

    pub fn accept_json(self) -> Self {
        self.header("Accept", APPLICATION_JSON)
    }

    /// Mark the request as carrying a JSON body, even if every field is unset
    pub fn content_type_json(mut self) -> Self {
        self.body.get_or_insert_with(Map::new);
        self.header("Content-Type", APPLICATION_JSON)
    }

    pub fn caller_headers(mut self, headers: &Headers) -> Self {
        self.caller_headers
            .extend(headers.iter().map(|(k, v)| (k.clone(), v.clone())));
        self
    }

    pub fn operation_id(&self) -> &'static str {
        self.operation_id
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn path_template(&self) -> &'static str {
        self.path_template
    }

    pub fn path_params(&self) -> &[(&'static str, String)] {
        &self.path_params
    }

    pub fn path_param_value(&self, name: &str) -> Option<&str> {
        self.path_params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn body(&self) -> Option<&Map<String, Value>> {
        self.body.as_ref()
    }

    /// Operation defaults overlaid with caller headers
    pub fn headers(&self) -> Vec<(String, String)> {
        let mut merged = self.default_headers.clone();
        for (name, value) in &self.caller_headers {
            merge_header(&mut merged, name, value);
        }
        merged
    }

    pub fn header_value(&self, name: &str) -> Option<String> {
        self.headers()
            .into_iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    }

    /// Path segments with placeholders replaced by their raw values.
    ///
    /// A trailing slash in the template yields a trailing empty segment.
    pub fn path_segments(&self) -> Result<Vec<String>, SdkError> {
        self.path_template
            .trim_start_matches('/')
            .split('/')
            .map(|segment| {
                match segment
                    .strip_prefix('{')
                    .and_then(|s| s.strip_suffix('}'))
                {
                    Some(name) => {
                        let value = self.path_param_value(name).ok_or_else(|| {
                            SdkError::invalid_parameter(format!(
                                "path parameter '{}' is not bound for {}",
                                name, self.operation_id
                            ))
                        })?;
                        // URL normalization would drop or pop these segments
                        if value == "." || value == ".." {
                            return Err(SdkError::invalid_parameter(format!(
                                "path parameter '{}' cannot be '{}'",
                                name, value
                            )));
                        }
                        Ok(value.to_string())
                    }
                    None => Ok(segment.to_string()),
                }
            })
            .collect()
    }

    /// Human-readable path, used in logs
    pub fn render_path(&self) -> Result<String, SdkError> {
        Ok(format!("/{}", self.path_segments()?.join("/")))
    }

    /// Serialized body, if the operation sends one
    pub fn body_bytes(&self) -> Result<Option<Vec<u8>>, SdkError> {
        if let Some(ref error) = self.body_error {
            return Err(SdkError::serialization(error.clone()));
        }

        self.body
            .as_ref()
            .map(|body| {
                serde_json::to_vec(body).map_err(|e| SdkError::serialization(e.to_string()))
            })
            .transpose()
    }
}

/// Fail-fast check for required parameters.
///
/// Empty or whitespace-only strings and empty lists count as missing; every
/// missing name is reported in one error.
#[derive(Debug, Default)]
pub struct RequiredParams {
    missing: Vec<&'static str>,
}

impl RequiredParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn string(mut self, name: &'static str, value: &str) -> Self {
        if value.trim().is_empty() {
            self.missing.push(name);
        }
        self
    }

    pub fn list<T>(mut self, name: &'static str, value: &[T]) -> Self {
        if value.is_empty() {
            self.missing.push(name);
        }
        self
    }

    pub fn check(self) -> Result<(), SdkError> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(SdkError::missing_parameters(self.missing))
        }
    }
}
