//! Form state container: options plus the command derived from them.
//!
//! # Design
//! Every field change is a `FormAction`. `apply` is a pure transition from
//! one options value to the next; `FormState` runs it and re-derives the
//! command right after, so `command()` always matches `options()`. A failed
//! action leaves both untouched.

use tracing::debug;

use crate::error::FormError;
use crate::format::format_command;
use crate::http::{Header, Method};
use crate::options::{DataFormat, RequestOptions};

/// Boolean toggles on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    Insecure,
    Compressed,
    Verbose,
    IncludeCookies,
    UseOutputFile,
}

/// Which side of a header row an update targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderField {
    Key,
    Value,
}

/// A single user edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    SetMethod(Method),
    SetUrl(String),
    SetData(String),
    SetDataFormat(DataFormat),
    SetFlag(Flag, bool),
    SetCookieInputFile(String),
    SetCookieOutputFile(String),
    SetOutputFile(String),
    /// Append an empty header row.
    AddHeader,
    UpdateHeader {
        index: usize,
        field: HeaderField,
        value: String,
    },
    RemoveHeader(usize),
}

/// Compute the options that result from applying `action` to `options`.
pub fn apply(options: &RequestOptions, action: FormAction) -> Result<RequestOptions, FormError> {
    let mut next = options.clone();
    match action {
        FormAction::SetMethod(method) => next.method = method,
        FormAction::SetUrl(url) => next.url = url,
        FormAction::SetData(data) => next.data = data,
        FormAction::SetDataFormat(format) => next.data_format = format,
        FormAction::SetFlag(flag, on) => match flag {
            Flag::Insecure => next.insecure = on,
            Flag::Compressed => next.compressed = on,
            Flag::Verbose => next.verbose = on,
            Flag::IncludeCookies => next.include_cookies = on,
            Flag::UseOutputFile => next.use_output_file = on,
        },
        FormAction::SetCookieInputFile(path) => next.cookie_input_file = path,
        FormAction::SetCookieOutputFile(path) => next.cookie_output_file = path,
        FormAction::SetOutputFile(path) => next.output_file = path,
        FormAction::AddHeader => next.headers.push(Header::default()),
        FormAction::UpdateHeader { index, field, value } => {
            let len = next.headers.len();
            let header = next
                .headers
                .get_mut(index)
                .ok_or(FormError::HeaderIndexOutOfRange { index, len })?;
            match field {
                HeaderField::Key => header.key = value,
                HeaderField::Value => header.value = value,
            }
        }
        FormAction::RemoveHeader(index) => {
            let len = next.headers.len();
            if index >= len {
                return Err(FormError::HeaderIndexOutOfRange { index, len });
            }
            next.headers.remove(index);
        }
    }
    Ok(next)
}

/// Current options and the command formatted from them.
#[derive(Debug, Clone)]
pub struct FormState {
    options: RequestOptions,
    command: String,
}

impl FormState {
    pub fn new(options: RequestOptions) -> Self {
        let command = format_command(&options);
        Self { options, command }
    }

    pub fn options(&self) -> &RequestOptions {
        &self.options
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    /// Apply one edit and re-derive the command. Returns the new command.
    pub fn dispatch(&mut self, action: FormAction) -> Result<&str, FormError> {
        debug!(?action, "form_action");
        let next = apply(&self.options, action)?;
        self.command = format_command(&next);
        self.options = next;
        debug!(command = %self.command, "command_derived");
        Ok(&self.command)
    }
}

impl Default for FormState {
    /// Starts from the example form, like a freshly opened page.
    fn default() -> Self {
        Self::new(RequestOptions::example())
    }
}
