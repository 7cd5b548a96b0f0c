//! Core types shared by the capi-versions binary and library: the error
//! type, operator-facing error hints, and semantic version ordering.

pub mod core;

pub use core::error::{VersionsError, VersionsResult};
pub use core::error_help::{format_error_with_help, ErrorHelp};
pub use core::version::Version;
