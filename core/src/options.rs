//! The request options model.
//!
//! # Design
//! `RequestOptions` is a plain value rebuilt on every form change; nothing
//! mutates it in place. The serde shape is the camelCase document the form
//! stores, with every field optional so partial documents are accepted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormError;
use crate::http::{Header, Method};

pub const DEFAULT_COOKIE_FILE: &str = "cookies.txt";
pub const DEFAULT_OUTPUT_FILE: &str = "output.txt";

/// How the request body is handed to curl.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataFormat {
    /// Sends data as-is.
    #[default]
    Raw,
    /// Sends data exactly as specified with no extra processing.
    Binary,
    /// URL-encodes the data before sending.
    Urlencoded,
}

impl DataFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataFormat::Raw => "raw",
            DataFormat::Binary => "binary",
            DataFormat::Urlencoded => "urlencoded",
        }
    }

    /// The curl flag that carries the body in this format.
    pub fn flag(&self) -> &'static str {
        match self {
            DataFormat::Raw => "-d",
            DataFormat::Binary => "--data-binary",
            DataFormat::Urlencoded => "--data-urlencode",
        }
    }
}

impl fmt::Display for DataFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataFormat {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "raw" => Ok(DataFormat::Raw),
            "binary" => Ok(DataFormat::Binary),
            "urlencoded" => Ok(DataFormat::Urlencoded),
            _ => Err(FormError::UnknownDataFormat(s.to_string())),
        }
    }
}

/// Every user-configurable request parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequestOptions {
    pub method: Method,
    pub url: String,
    pub headers: Vec<Header>,
    pub data: String,
    pub data_format: DataFormat,
    pub insecure: bool,
    pub compressed: bool,
    pub verbose: bool,
    pub include_cookies: bool,
    pub cookie_input_file: String,
    pub cookie_output_file: String,
    pub output_file: String,
    pub use_output_file: bool,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::Get,
            url: String::new(),
            headers: Vec::new(),
            data: String::new(),
            data_format: DataFormat::Raw,
            insecure: false,
            compressed: false,
            verbose: false,
            include_cookies: false,
            cookie_input_file: DEFAULT_COOKIE_FILE.to_string(),
            cookie_output_file: DEFAULT_COOKIE_FILE.to_string(),
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
            use_output_file: false,
        }
    }
}

impl RequestOptions {
    /// The state a fresh form starts in.
    pub fn example() -> Self {
        Self {
            url: "https://api.example.com".to_string(),
            headers: vec![Header::new("Content-Type", "application/json")],
            data: "{\n  \"example\": \"data\"\n}".to_string(),
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, FormError> {
        serde_json::from_str(json).map_err(|e| FormError::DeserializationError(e.to_string()))
    }

    /// Headers that will actually be emitted, in order.
    pub fn complete_headers(&self) -> impl Iterator<Item = &Header> {
        self.headers.iter().filter(|h| h.is_complete())
    }

    /// The body, if the method sends one and it is non-empty.
    pub fn body(&self) -> Option<&str> {
        if self.method.carries_body() && !self.data.is_empty() {
            Some(&self.data)
        } else {
            None
        }
    }
}
