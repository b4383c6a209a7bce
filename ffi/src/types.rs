//! `#[repr(C)]` types for the FFI boundary.
//!
//! # Design
//! Each enum mirrors a core enum with explicit discriminants so C hosts can
//! use plain integer constants. Conversions live here to keep `lib.rs`
//! focused on the `extern "C"` surface.

use std::ffi::CString;
use std::os::raw::c_char;

use curlgen_core::{DataFormat, Flag, FormError, FormState, HeaderField, Method};

/// Opaque handle to a `FormState`. C callers receive a pointer to this and
/// pass it back into every `curl_form_*` function.
pub struct FfiCurlForm {
    pub(crate) inner: FormState,
}

// ---------------------------------------------------------------------------
// Field enums
// ---------------------------------------------------------------------------

/// HTTP method as a C enum.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiMethod {
    Get = 0,
    Post = 1,
    Put = 2,
    Delete = 3,
    Patch = 4,
    Head = 5,
    Options = 6,
}

impl From<FfiMethod> for Method {
    fn from(m: FfiMethod) -> Self {
        match m {
            FfiMethod::Get => Method::Get,
            FfiMethod::Post => Method::Post,
            FfiMethod::Put => Method::Put,
            FfiMethod::Delete => Method::Delete,
            FfiMethod::Patch => Method::Patch,
            FfiMethod::Head => Method::Head,
            FfiMethod::Options => Method::Options,
        }
    }
}

/// Body transmission format as a C enum.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiDataFormat {
    Raw = 0,
    Binary = 1,
    Urlencoded = 2,
}

impl From<FfiDataFormat> for DataFormat {
    fn from(f: FfiDataFormat) -> Self {
        match f {
            FfiDataFormat::Raw => DataFormat::Raw,
            FfiDataFormat::Binary => DataFormat::Binary,
            FfiDataFormat::Urlencoded => DataFormat::Urlencoded,
        }
    }
}

/// Boolean form toggle as a C enum.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiFlag {
    Insecure = 0,
    Compressed = 1,
    Verbose = 2,
    IncludeCookies = 3,
    UseOutputFile = 4,
}

impl From<FfiFlag> for Flag {
    fn from(f: FfiFlag) -> Self {
        match f {
            FfiFlag::Insecure => Flag::Insecure,
            FfiFlag::Compressed => Flag::Compressed,
            FfiFlag::Verbose => Flag::Verbose,
            FfiFlag::IncludeCookies => Flag::IncludeCookies,
            FfiFlag::UseOutputFile => Flag::UseOutputFile,
        }
    }
}

/// Header row side as a C enum.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiHeaderField {
    Key = 0,
    Value = 1,
}

impl From<FfiHeaderField> for HeaderField {
    fn from(f: FfiHeaderField) -> Self {
        match f {
            FfiHeaderField::Key => HeaderField::Key,
            FfiHeaderField::Value => HeaderField::Value,
        }
    }
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Status codes returned by setters and carried in `FfiFormatResult`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiErrorCode {
    Ok = 0,
    NullArg = 1,
    InvalidUtf8 = 2,
    HeaderIndexOutOfRange = 3,
    Deserialization = 4,
    Panic = 5,
    /// The output contains a NUL byte and cannot be a C string.
    InteriorNul = 6,
}

impl From<&FormError> for FfiErrorCode {
    fn from(err: &FormError) -> Self {
        match err {
            FormError::HeaderIndexOutOfRange { .. } => FfiErrorCode::HeaderIndexOutOfRange,
            FormError::DeserializationError(_)
            | FormError::UnknownMethod(_)
            | FormError::UnknownDataFormat(_)
            | FormError::MalformedHeader(_) => FfiErrorCode::Deserialization,
        }
    }
}

/// Result envelope for `curl_format_json`.
///
/// On success `error_code` is `Ok`, `error_message` is null and `command`
/// holds the formatted command. On failure `command` is null and
/// `error_message` is a human-readable C string.
#[repr(C)]
pub struct FfiFormatResult {
    pub error_code: FfiErrorCode,
    pub error_message: *mut c_char,
    pub command: *mut c_char,
}

impl FfiFormatResult {
    pub(crate) fn ok(command: String) -> *mut Self {
        match into_c_string(command) {
            Some(command) => Box::into_raw(Box::new(FfiFormatResult {
                error_code: FfiErrorCode::Ok,
                error_message: std::ptr::null_mut(),
                command,
            })),
            None => Self::failure(
                FfiErrorCode::InteriorNul,
                "command contains a NUL byte".to_string(),
            ),
        }
    }

    pub(crate) fn from_error(err: FormError) -> *mut Self {
        Self::failure((&err).into(), err.to_string())
    }

    pub(crate) fn null_arg(name: &str) -> *mut Self {
        Self::failure(FfiErrorCode::NullArg, format!("null argument: {name}"))
    }

    pub(crate) fn invalid_utf8(name: &str) -> *mut Self {
        Self::failure(FfiErrorCode::InvalidUtf8, format!("invalid UTF-8 in argument: {name}"))
    }

    pub(crate) fn panic(msg: &str) -> *mut Self {
        Self::failure(FfiErrorCode::Panic, msg.to_string())
    }

    fn failure(error_code: FfiErrorCode, msg: String) -> *mut Self {
        Box::into_raw(Box::new(FfiFormatResult {
            error_code,
            error_message: message_c_string(msg),
            command: std::ptr::null_mut(),
        }))
    }
}

/// Hand a Rust string to C. `None` if it holds a NUL byte.
pub(crate) fn into_c_string(s: String) -> Option<*mut c_char> {
    CString::new(s).ok().map(CString::into_raw)
}

/// Error text may echo user input; NULs in it are spelled out as `\0`.
fn message_c_string(msg: String) -> *mut c_char {
    into_c_string(msg.replace('\0', "\\0")).unwrap_or(std::ptr::null_mut())
}
