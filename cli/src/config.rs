//! Optional TOML defaults for `curlgen build`.
//!
//! ```toml
//! [defaults]
//! method = "POST"
//! data_format = "binary"
//! compressed = true
//! headers = [{ key = "Accept", value = "application/json" }]
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use curlgen_core::{DataFormat, Header, Method, RequestOptions};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Defaults {
    pub method: Option<Method>,
    pub headers: Vec<Header>,
    pub data_format: Option<DataFormat>,
    pub insecure: bool,
    pub compressed: bool,
    pub verbose: bool,
    pub include_cookies: bool,
    pub cookie_input_file: Option<String>,
    pub cookie_output_file: Option<String>,
    pub use_output_file: bool,
    pub output_file: Option<String>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// The options `build` starts from before its flags apply.
    pub fn seed(&self) -> RequestOptions {
        let d = &self.defaults;
        let mut options = RequestOptions {
            headers: d.headers.clone(),
            insecure: d.insecure,
            compressed: d.compressed,
            verbose: d.verbose,
            include_cookies: d.include_cookies,
            use_output_file: d.use_output_file,
            ..RequestOptions::default()
        };
        if let Some(method) = d.method {
            options.method = method;
        }
        if let Some(format) = d.data_format {
            options.data_format = format;
        }
        if let Some(path) = &d.cookie_input_file {
            options.cookie_input_file = path.clone();
        }
        if let Some(path) = &d.cookie_output_file {
            options.cookie_output_file = path.clone();
        }
        if let Some(path) = &d.output_file {
            options.output_file = path.clone();
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_seeds_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.seed(), RequestOptions::default());
    }

    #[test]
    fn defaults_table_is_applied() {
        let config = Config::parse(
            r#"
            [defaults]
            method = "PUT"
            data_format = "binary"
            compressed = true
            include_cookies = true
            cookie_output_file = "jar.txt"
            headers = [{ key = "Accept", value = "application/json" }]
            "#,
        )
        .unwrap();
        let seed = config.seed();
        assert_eq!(seed.method, Method::Put);
        assert_eq!(seed.data_format, DataFormat::Binary);
        assert!(seed.compressed);
        assert!(!seed.insecure);
        assert!(seed.include_cookies);
        assert_eq!(seed.cookie_input_file, "cookies.txt");
        assert_eq!(seed.cookie_output_file, "jar.txt");
        assert_eq!(seed.headers, vec![Header::new("Accept", "application/json")]);
        assert!(seed.url.is_empty());
    }

    #[test]
    fn method_name_is_case_insensitive() {
        let config = Config::parse("[defaults]\nmethod = \"put\"\n").unwrap();
        assert_eq!(config.seed().method, Method::Put);
        assert!(Config::parse("[defaults]\nmethod = \"fetch\"\n").is_err());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(Config::parse("[defaults]\nretries = 3\n").is_err());
        assert!(Config::parse("[server]\nport = 1\n").is_err());
    }

    #[test]
    fn load_reports_missing_file() {
        let err = Config::load(Path::new("/nonexistent/curlgen.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("reading config"));
    }
}
