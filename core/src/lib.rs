//! Curl command builder core.
//!
//! # Overview
//! Turns a structured `RequestOptions` value into the equivalent `curl`
//! command line. Nothing here touches the network or the clipboard; hosts
//! (the CLI, the C ABI) own all I/O and call into this crate for the text.
//!
//! # Design
//! - `format_command` is a total, side-effect-free function.
//! - `FormState` holds the current options; each edit is a `FormAction`
//!   applied by the pure `apply` transition, after which the command is
//!   re-derived.
//! - Types use owned `String` / `Vec` fields so they map directly onto the
//!   FFI layer and the JSON options document.

pub mod error;
pub mod form;
pub mod format;
pub mod http;
pub mod options;

pub use error::FormError;
pub use form::{apply, Flag, FormAction, FormState, HeaderField};
pub use format::{format_command, BASE_COMMAND};
pub use http::{Header, Method};
pub use options::{DataFormat, RequestOptions};
