use crate::error::{BoxError, Error};
use crate::error_code::ErrorCode;
use alloc::borrow::Cow;

/// Extension methods for classifying the error of a `Result`.
///
/// ```
/// use odinerr::ResultExt;
///
/// fn parse(port: &str) -> odinerr::Result<u16> {
///     port.parse::<u16>().classify("BAD_PORT", "port is not a number")
/// }
///
/// let err = parse("http").unwrap_err();
/// assert_eq!(err.code(), "BAD_PORT");
/// assert!(err.orig_err().is_some());
/// ```
pub trait ResultExt<T> {
    /// Wraps the error in an [`Error`] with the given code and message. The location recorded is
    /// that of the caller.
    fn classify(
        self,
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Result<T, Error>;

    /// Wraps the error in an [`Error`] built from a typed code.
    fn classify_with<C: ErrorCode>(self, code: C) -> Result<T, Error>;
}
impl<T, E: Into<BoxError>> ResultExt<T> for Result<T, E> {
    #[track_caller]
    fn classify(
        self,
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Result<T, Error> {
        // Not `map_err`: the closure would not forward the caller location.
        match self {
            Ok(v) => Ok(v),
            Err(e) => Err(Error::wrap(code, message, e)),
        }
    }

    #[track_caller]
    fn classify_with<C: ErrorCode>(self, code: C) -> Result<T, Error> {
        match self {
            Ok(v) => Ok(v),
            Err(e) => Err(Error::coded(code, Some(e.into()))),
        }
    }
}
