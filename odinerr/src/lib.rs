//! Classified errors.
//!
//! An [`Error`] carries a short classification code, a human-readable message, an optional
//! wrapped cause and the file name and line it was constructed at:
//!
//! ```
//! use odinerr::Error;
//!
//! let err = Error::msg("NOT_FOUND", "no such bucket");
//! assert_eq!(err.code(), "NOT_FOUND");
//! assert!(err.to_string().ends_with("(code:NOT_FOUND) (msg:no such bucket) (err:)"));
//! ```
//!
//! [`sprint_error`] renders the same information in a multi-line form without building an error
//! value.

#![no_std]
extern crate alloc;

mod context;
mod error;
mod error_code;
mod location;
mod sprint;

pub use context::ResultExt;
pub use error::{BoxError, Classified, Error};
pub use error_code::{ErrorCode, ErrorCodeInfo};
pub use location::SourceLocation;
pub use sprint::sprint_error;

#[cfg(feature = "derive")]
pub use odinerr_derive::ErrorCode;

/// A `Result` whose error type is [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;
