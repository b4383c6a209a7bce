//! Maps `RequestOptions` to a curl command line.
//!
//! # Design
//! Fragments are pushed in a fixed order and joined with single spaces, so
//! the output is stable no matter in which order the user toggled fields.
//! Only the body gets escaping (`'` becomes `\'`). Paths, header text and the
//! URL are wrapped in double quotes verbatim; an embedded `"` in the URL is
//! passed through unchanged.

use crate::http::Method;
use crate::options::RequestOptions;

pub const BASE_COMMAND: &str = "curl";

/// Render the curl invocation for `options`. Never fails.
pub fn format_command(options: &RequestOptions) -> String {
    let mut parts: Vec<String> = vec![BASE_COMMAND.to_string()];

    if options.insecure {
        parts.push("-k".to_string());
    }
    if options.verbose {
        parts.push("-v".to_string());
    }
    if options.compressed {
        parts.push("--compressed".to_string());
    }

    if options.include_cookies {
        if !options.cookie_input_file.is_empty() {
            parts.push(format!("-b {}", double_quoted(&options.cookie_input_file)));
        }
        if !options.cookie_output_file.is_empty() {
            parts.push(format!("-c {}", double_quoted(&options.cookie_output_file)));
        }
    }

    if options.use_output_file && !options.output_file.is_empty() {
        parts.push(format!("-o {}", double_quoted(&options.output_file)));
    }

    if options.method != Method::Get {
        parts.push(format!("-X {}", options.method));
    }

    for header in options.complete_headers() {
        parts.push(format!("-H \"{}: {}\"", header.key, header.value));
    }

    if let Some(body) = options.body() {
        parts.push(format!("{} {}", options.data_format.flag(), single_quoted(body)));
    }

    parts.push(double_quoted(&options.url));

    parts.join(" ")
}

fn double_quoted(s: &str) -> String {
    format!("\"{s}\"")
}

fn single_quoted(s: &str) -> String {
    format!("'{}'", s.replace('\'', "\\'"))
}
