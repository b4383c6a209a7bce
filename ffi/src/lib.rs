//! C-ABI wrapper around `curlgen-core`.
//!
//! # Overview
//! Lets a native UI host keep a curl form behind an opaque handle, push field
//! edits into it, and read back the derived command line. The host owns all
//! I/O, including the clipboard write behind its copy button.
//!
//! # Design
//! - Every `extern "C"` function wraps its body in `catch_unwind` so panics
//!   never cross the FFI boundary.
//! - Setters map 1:1 onto core `FormAction`s and return an `FfiErrorCode`;
//!   a failed edit leaves the form unchanged.
//! - `curl_format_json` is a stateless one-shot path for hosts that keep the
//!   options themselves as a JSON document.
//! - The C caller owns all returned pointers and must call the matching
//!   `curl_free_*` / `curl_form_free` function to release them.

pub mod types;

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::panic::catch_unwind;

use curlgen_core::{format_command, FormAction, FormState, RequestOptions};

use types::*;

/// Copy a C string argument into an owned `String`.
fn read_str(ptr: *const c_char) -> Result<String, FfiErrorCode> {
    if ptr.is_null() {
        return Err(FfiErrorCode::NullArg);
    }
    unsafe { CStr::from_ptr(ptr) }
        .to_str()
        .map(str::to_string)
        .map_err(|_| FfiErrorCode::InvalidUtf8)
}

/// Apply `action` to the form behind `form`.
fn dispatch(form: *mut FfiCurlForm, action: FormAction) -> FfiErrorCode {
    if form.is_null() {
        return FfiErrorCode::NullArg;
    }
    let form = unsafe { &mut *form };
    match form.inner.dispatch(action) {
        Ok(_) => FfiErrorCode::Ok,
        Err(e) => (&e).into(),
    }
}

/// Read `value` and dispatch the action built from it.
fn dispatch_str(
    form: *mut FfiCurlForm,
    value: *const c_char,
    make: impl FnOnce(String) -> FormAction,
) -> FfiErrorCode {
    if form.is_null() {
        return FfiErrorCode::NullArg;
    }
    match read_str(value) {
        Ok(v) => dispatch(form, make(v)),
        Err(code) => code,
    }
}

// ---------------------------------------------------------------------------
// Form lifecycle
// ---------------------------------------------------------------------------

/// Create a form in its starting state (the example request).
///
/// The caller must free the returned pointer with `curl_form_free`.
#[unsafe(no_mangle)]
pub extern "C" fn curl_form_new() -> *mut FfiCurlForm {
    catch_unwind(|| {
        Box::into_raw(Box::new(FfiCurlForm {
            inner: FormState::default(),
        }))
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Create a form seeded from a camelCase JSON options document.
///
/// Returns null if `json` is null, not UTF-8, or not a valid document.
#[unsafe(no_mangle)]
pub extern "C" fn curl_form_from_json(json: *const c_char) -> *mut FfiCurlForm {
    catch_unwind(|| {
        let Ok(text) = read_str(json) else {
            return std::ptr::null_mut();
        };
        match RequestOptions::from_json(&text) {
            Ok(options) => Box::into_raw(Box::new(FfiCurlForm {
                inner: FormState::new(options),
            })),
            Err(_) => std::ptr::null_mut(),
        }
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Free a form created by `curl_form_new` or `curl_form_from_json`.
/// Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn curl_form_free(form: *mut FfiCurlForm) {
    if !form.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { Box::from_raw(form) });
        });
    }
}

// ---------------------------------------------------------------------------
// Field setters
// ---------------------------------------------------------------------------

#[unsafe(no_mangle)]
pub extern "C" fn curl_form_set_method(form: *mut FfiCurlForm, method: FfiMethod) -> FfiErrorCode {
    catch_unwind(|| dispatch(form, FormAction::SetMethod(method.into())))
        .unwrap_or(FfiErrorCode::Panic)
}

#[unsafe(no_mangle)]
pub extern "C" fn curl_form_set_url(form: *mut FfiCurlForm, url: *const c_char) -> FfiErrorCode {
    catch_unwind(|| dispatch_str(form, url, FormAction::SetUrl)).unwrap_or(FfiErrorCode::Panic)
}

/// Set the request body. It is only emitted for POST, PUT and PATCH.
#[unsafe(no_mangle)]
pub extern "C" fn curl_form_set_data(form: *mut FfiCurlForm, data: *const c_char) -> FfiErrorCode {
    catch_unwind(|| dispatch_str(form, data, FormAction::SetData)).unwrap_or(FfiErrorCode::Panic)
}

#[unsafe(no_mangle)]
pub extern "C" fn curl_form_set_data_format(
    form: *mut FfiCurlForm,
    format: FfiDataFormat,
) -> FfiErrorCode {
    catch_unwind(|| dispatch(form, FormAction::SetDataFormat(format.into())))
        .unwrap_or(FfiErrorCode::Panic)
}

#[unsafe(no_mangle)]
pub extern "C" fn curl_form_set_flag(form: *mut FfiCurlForm, flag: FfiFlag, on: bool) -> FfiErrorCode {
    catch_unwind(|| dispatch(form, FormAction::SetFlag(flag.into(), on)))
        .unwrap_or(FfiErrorCode::Panic)
}

#[unsafe(no_mangle)]
pub extern "C" fn curl_form_set_cookie_input_file(
    form: *mut FfiCurlForm,
    path: *const c_char,
) -> FfiErrorCode {
    catch_unwind(|| dispatch_str(form, path, FormAction::SetCookieInputFile))
        .unwrap_or(FfiErrorCode::Panic)
}

#[unsafe(no_mangle)]
pub extern "C" fn curl_form_set_cookie_output_file(
    form: *mut FfiCurlForm,
    path: *const c_char,
) -> FfiErrorCode {
    catch_unwind(|| dispatch_str(form, path, FormAction::SetCookieOutputFile))
        .unwrap_or(FfiErrorCode::Panic)
}

#[unsafe(no_mangle)]
pub extern "C" fn curl_form_set_output_file(
    form: *mut FfiCurlForm,
    path: *const c_char,
) -> FfiErrorCode {
    catch_unwind(|| dispatch_str(form, path, FormAction::SetOutputFile))
        .unwrap_or(FfiErrorCode::Panic)
}

// ---------------------------------------------------------------------------
// Header rows
// ---------------------------------------------------------------------------

/// Append an empty header row.
#[unsafe(no_mangle)]
pub extern "C" fn curl_form_add_header(form: *mut FfiCurlForm) -> FfiErrorCode {
    catch_unwind(|| dispatch(form, FormAction::AddHeader)).unwrap_or(FfiErrorCode::Panic)
}

/// Set the key or value of header row `index`.
///
/// Returns `HeaderIndexOutOfRange` if the row does not exist.
#[unsafe(no_mangle)]
pub extern "C" fn curl_form_update_header(
    form: *mut FfiCurlForm,
    index: u32,
    field: FfiHeaderField,
    value: *const c_char,
) -> FfiErrorCode {
    catch_unwind(|| {
        dispatch_str(form, value, |value| FormAction::UpdateHeader {
            index: index as usize,
            field: field.into(),
            value,
        })
    })
    .unwrap_or(FfiErrorCode::Panic)
}

#[unsafe(no_mangle)]
pub extern "C" fn curl_form_remove_header(form: *mut FfiCurlForm, index: u32) -> FfiErrorCode {
    catch_unwind(|| dispatch(form, FormAction::RemoveHeader(index as usize)))
        .unwrap_or(FfiErrorCode::Panic)
}

/// Number of header rows, including incomplete ones. Returns 0 for null.
#[unsafe(no_mangle)]
pub extern "C" fn curl_form_header_count(form: *const FfiCurlForm) -> u32 {
    catch_unwind(|| {
        if form.is_null() {
            return 0;
        }
        let form = unsafe { &*form };
        form.inner.options().headers.len() as u32
    })
    .unwrap_or(0)
}

// ---------------------------------------------------------------------------
// Derived output
// ---------------------------------------------------------------------------

/// The command for the form's current state.
///
/// Returns null if `form` is null or the command holds a NUL byte. Free
/// with `curl_free_string`.
#[unsafe(no_mangle)]
pub extern "C" fn curl_form_command(form: *const FfiCurlForm) -> *mut c_char {
    catch_unwind(|| {
        if form.is_null() {
            return std::ptr::null_mut();
        }
        let form = unsafe { &*form };
        into_c_string(form.inner.command().to_string()).unwrap_or(std::ptr::null_mut())
    })
    .unwrap_or(std::ptr::null_mut())
}

/// The form's current options as a camelCase JSON document.
///
/// Returns null if `form` is null. Free with `curl_free_string`.
#[unsafe(no_mangle)]
pub extern "C" fn curl_form_options_json(form: *const FfiCurlForm) -> *mut c_char {
    catch_unwind(|| {
        if form.is_null() {
            return std::ptr::null_mut();
        }
        let form = unsafe { &*form };
        match serde_json::to_string(form.inner.options()) {
            Ok(json) => into_c_string(json).unwrap_or(std::ptr::null_mut()),
            Err(_) => std::ptr::null_mut(),
        }
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Format a camelCase JSON options document without creating a form.
///
/// Always returns a result; free it with `curl_free_result`.
#[unsafe(no_mangle)]
pub extern "C" fn curl_format_json(json: *const c_char) -> *mut FfiFormatResult {
    catch_unwind(|| {
        let text = match read_str(json) {
            Ok(text) => text,
            Err(FfiErrorCode::NullArg) => return FfiFormatResult::null_arg("json"),
            Err(_) => return FfiFormatResult::invalid_utf8("json"),
        };
        match RequestOptions::from_json(&text) {
            Ok(options) => FfiFormatResult::ok(format_command(&options)),
            Err(e) => FfiFormatResult::from_error(e),
        }
    })
    .unwrap_or_else(|_| FfiFormatResult::panic("panic in curl_format_json"))
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Free an `FfiFormatResult` returned by `curl_format_json`. Safe to call
/// with null.
#[unsafe(no_mangle)]
pub extern "C" fn curl_free_result(result: *mut FfiFormatResult) {
    if result.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let result = unsafe { Box::from_raw(result) };
        if !result.error_message.is_null() {
            drop(unsafe { CString::from_raw(result.error_message) });
        }
        if !result.command.is_null() {
            drop(unsafe { CString::from_raw(result.command) });
        }
    });
}

/// Free a C string allocated by this library. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn curl_free_string(s: *mut c_char) {
    if !s.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { CString::from_raw(s) });
        });
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;

    /// Take ownership of a returned command string.
    fn command_of(form: *const FfiCurlForm) -> String {
        let ptr = curl_form_command(form);
        assert!(!ptr.is_null());
        let s = unsafe { CStr::from_ptr(ptr) }.to_str().unwrap().to_string();
        curl_free_string(ptr);
        s
    }

    fn blank_form(url: &str) -> *mut FfiCurlForm {
        let json = CString::new(format!(r#"{{"url":"{url}"}}"#)).unwrap();
        let form = curl_form_from_json(json.as_ptr());
        assert!(!form.is_null());
        form
    }

    #[test]
    fn form_new_and_free() {
        let form = curl_form_new();
        assert!(!form.is_null());
        assert_eq!(
            command_of(form),
            r#"curl -H "Content-Type: application/json" "https://api.example.com""#
        );
        assert_eq!(curl_form_header_count(form), 1);
        curl_form_free(form);
    }

    #[test]
    fn form_free_null_is_safe() {
        curl_form_free(std::ptr::null_mut());
    }

    #[test]
    fn form_from_invalid_json_returns_null() {
        let json = CString::new("{not json").unwrap();
        assert!(curl_form_from_json(json.as_ptr()).is_null());
        assert!(curl_form_from_json(std::ptr::null()).is_null());
    }

    #[test]
    fn setters_update_command() {
        let form = blank_form("https://x.test");
        let data = CString::new("it's").unwrap();

        assert_eq!(curl_form_set_method(form, FfiMethod::Post), FfiErrorCode::Ok);
        assert_eq!(curl_form_set_data(form, data.as_ptr()), FfiErrorCode::Ok);
        assert_eq!(
            curl_form_set_data_format(form, FfiDataFormat::Binary),
            FfiErrorCode::Ok
        );
        assert_eq!(curl_form_set_flag(form, FfiFlag::Insecure, true), FfiErrorCode::Ok);

        assert_eq!(
            command_of(form),
            r#"curl -k -X POST --data-binary 'it\'s' "https://x.test""#
        );
        curl_form_free(form);
    }

    #[test]
    fn file_setters() {
        let form = blank_form("u");
        let jar_in = CString::new("in.txt").unwrap();
        let jar_out = CString::new("out.txt").unwrap();
        let output = CString::new("body.bin").unwrap();

        assert_eq!(curl_form_set_flag(form, FfiFlag::IncludeCookies, true), FfiErrorCode::Ok);
        assert_eq!(curl_form_set_flag(form, FfiFlag::UseOutputFile, true), FfiErrorCode::Ok);
        assert_eq!(curl_form_set_cookie_input_file(form, jar_in.as_ptr()), FfiErrorCode::Ok);
        assert_eq!(curl_form_set_cookie_output_file(form, jar_out.as_ptr()), FfiErrorCode::Ok);
        assert_eq!(curl_form_set_output_file(form, output.as_ptr()), FfiErrorCode::Ok);

        assert_eq!(
            command_of(form),
            r#"curl -b "in.txt" -c "out.txt" -o "body.bin" "u""#
        );
        curl_form_free(form);
    }

    #[test]
    fn header_rows() {
        let form = blank_form("u");
        let key = CString::new("Accept").unwrap();
        let value = CString::new("*/*").unwrap();

        assert_eq!(curl_form_add_header(form), FfiErrorCode::Ok);
        assert_eq!(curl_form_header_count(form), 1);
        assert_eq!(command_of(form), r#"curl "u""#);

        assert_eq!(
            curl_form_update_header(form, 0, FfiHeaderField::Key, key.as_ptr()),
            FfiErrorCode::Ok
        );
        assert_eq!(
            curl_form_update_header(form, 0, FfiHeaderField::Value, value.as_ptr()),
            FfiErrorCode::Ok
        );
        assert_eq!(command_of(form), r#"curl -H "Accept: */*" "u""#);

        assert_eq!(curl_form_remove_header(form, 0), FfiErrorCode::Ok);
        assert_eq!(curl_form_header_count(form), 0);
        assert_eq!(command_of(form), r#"curl "u""#);
        curl_form_free(form);
    }

    #[test]
    fn header_index_out_of_range() {
        let form = blank_form("u");
        let value = CString::new("x").unwrap();
        assert_eq!(
            curl_form_update_header(form, 3, FfiHeaderField::Value, value.as_ptr()),
            FfiErrorCode::HeaderIndexOutOfRange
        );
        assert_eq!(curl_form_remove_header(form, 0), FfiErrorCode::HeaderIndexOutOfRange);
        curl_form_free(form);
    }

    #[test]
    fn null_arguments() {
        let url = CString::new("u").unwrap();
        assert_eq!(
            curl_form_set_url(std::ptr::null_mut(), url.as_ptr()),
            FfiErrorCode::NullArg
        );
        assert_eq!(
            curl_form_set_method(std::ptr::null_mut(), FfiMethod::Get),
            FfiErrorCode::NullArg
        );
        let form = blank_form("u");
        assert_eq!(curl_form_set_url(form, std::ptr::null()), FfiErrorCode::NullArg);
        assert_eq!(command_of(form), r#"curl "u""#);
        curl_form_free(form);

        assert!(curl_form_command(std::ptr::null()).is_null());
        assert!(curl_form_options_json(std::ptr::null()).is_null());
        assert_eq!(curl_form_header_count(std::ptr::null()), 0);
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        let form = blank_form("u");
        let bad = CString::new(vec![0xffu8, 0xfe]).unwrap();
        assert_eq!(curl_form_set_url(form, bad.as_ptr()), FfiErrorCode::InvalidUtf8);
        assert_eq!(command_of(form), r#"curl "u""#);
        curl_form_free(form);
    }

    #[test]
    fn options_json_reflects_edits() {
        let form = blank_form("u");
        curl_form_set_method(form, FfiMethod::Delete);
        let ptr = curl_form_options_json(form);
        let json = unsafe { CStr::from_ptr(ptr) }.to_str().unwrap();
        let value: serde_json::Value = serde_json::from_str(json).unwrap();
        assert_eq!(value["method"], "DELETE");
        assert_eq!(value["url"], "u");
        curl_free_string(ptr);
        curl_form_free(form);
    }

    #[test]
    fn format_json_success() {
        let json = CString::new(
            r#"{"method":"POST","url":"https://x.test","headers":[{"key":"Content-Type","value":"application/json"}],"data":"{\"a\":1}","dataFormat":"raw"}"#,
        )
        .unwrap();
        let result = curl_format_json(json.as_ptr());
        let r = unsafe { &*result };
        assert_eq!(r.error_code, FfiErrorCode::Ok);
        assert!(r.error_message.is_null());
        let cmd = unsafe { CStr::from_ptr(r.command) }.to_str().unwrap();
        assert_eq!(
            cmd,
            r#"curl -X POST -H "Content-Type: application/json" -d '{"a":1}' "https://x.test""#
        );
        curl_free_result(result);
    }

    #[test]
    fn format_json_matches_vectors() {
        let raw = include_str!("../../test-vectors/format.json");
        let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();
        for case in vectors["cases"].as_array().unwrap() {
            let name = case["name"].as_str().unwrap();
            let json = CString::new(case["input"].to_string()).unwrap();
            let result = curl_format_json(json.as_ptr());
            let r = unsafe { &*result };
            assert_eq!(r.error_code, FfiErrorCode::Ok, "{name}");
            let cmd = unsafe { CStr::from_ptr(r.command) }.to_str().unwrap();
            assert_eq!(cmd, case["expected"].as_str().unwrap(), "{name}");
            curl_free_result(result);
        }
    }

    #[test]
    fn format_json_bad_document() {
        let json = CString::new(r#"{"dataFormat":"multipart"}"#).unwrap();
        let result = curl_format_json(json.as_ptr());
        let r = unsafe { &*result };
        assert_eq!(r.error_code, FfiErrorCode::Deserialization);
        assert!(!r.error_message.is_null());
        assert!(r.command.is_null());
        curl_free_result(result);
    }

    #[test]
    fn format_json_nul_in_body_is_an_error() {
        let json =
            CString::new(r#"{"method":"POST","url":"https://x.test","data":"a\u0000b"}"#).unwrap();
        let result = curl_format_json(json.as_ptr());
        let r = unsafe { &*result };
        assert_eq!(r.error_code, FfiErrorCode::InteriorNul);
        assert!(r.command.is_null());
        assert!(!r.error_message.is_null());
        curl_free_result(result);
    }

    #[test]
    fn form_with_nul_in_body_has_no_command() {
        let json =
            CString::new(r#"{"method":"PUT","url":"u","data":"a\u0000b"}"#).unwrap();
        let form = curl_form_from_json(json.as_ptr());
        assert!(!form.is_null());
        assert!(curl_form_command(form).is_null());

        let json = curl_form_options_json(form);
        assert!(!json.is_null());
        let text = unsafe { CStr::from_ptr(json) }.to_str().unwrap();
        assert!(text.contains(r#"a\u0000b"#), "{text}");
        curl_free_string(json);

        let empty = CString::new("").unwrap();
        assert_eq!(curl_form_set_data(form, empty.as_ptr()), FfiErrorCode::Ok);
        assert_eq!(command_of(form), r#"curl -X PUT "u""#);
        curl_form_free(form);
    }

    #[test]
    fn format_json_unknown_method_with_nul_keeps_message() {
        let json = CString::new(r#"{"method":"x\u0000y"}"#).unwrap();
        let result = curl_format_json(json.as_ptr());
        let r = unsafe { &*result };
        assert_eq!(r.error_code, FfiErrorCode::Deserialization);
        let msg = unsafe { CStr::from_ptr(r.error_message) }.to_str().unwrap();
        assert!(msg.contains(r"x\0y"), "{msg}");
        curl_free_result(result);
    }

    #[test]
    fn format_json_null_arg() {
        let result = curl_format_json(std::ptr::null());
        let r = unsafe { &*result };
        assert_eq!(r.error_code, FfiErrorCode::NullArg);
        curl_free_result(result);
    }

    #[test]
    fn free_result_null_is_safe() {
        curl_free_result(std::ptr::null_mut());
    }

    #[test]
    fn free_string_null_is_safe() {
        curl_free_string(std::ptr::null_mut());
    }
}
