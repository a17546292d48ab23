use crate::error_code::ErrorCode;
use crate::location::SourceLocation;
use crate::sprint::sprint_error;
use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::String;
use core::fmt::{Display, Formatter};

/// The type used to hold the original error wrapped by an [`Error`].
pub type BoxError = Box<dyn core::error::Error + Send + Sync + 'static>;

/// The capabilities of an error that carries a classification code.
pub trait Classified: core::error::Error {
    /// Returns the short phrase depicting the classification of the error.
    fn code(&self) -> &str;

    /// Returns the error details message.
    fn message(&self) -> &str;

    /// Returns the original error if one was set.
    fn orig_err(&self) -> Option<&(dyn core::error::Error + Send + Sync + 'static)>;
}

/// An error with a classification code, a message, an optional original error and the location
/// it was created at.
///
/// Rendered by [`Display`] as:
///
/// ```text
/// (<file>:<line>) (code:<code>) (msg:<message>) (err:<original error, or nothing>)
/// ```
///
/// Nothing about an error can be changed once it is built.
#[derive(Debug)]
pub struct Error {
    code: Cow<'static, str>,
    message: Cow<'static, str>,
    orig_err: Option<BoxError>,
    location: SourceLocation,
}
impl Error {
    /// Creates an error from a code, a message and an optional original error.
    ///
    /// `code` is a short, whitespace-free phrase classifying the error. `message` is free-form
    /// detail. Neither is validated. The location recorded is that of the caller.
    ///
    /// ```
    /// use odinerr::Error;
    ///
    /// let cause = std::io::Error::other("disk full");
    /// let err = Error::new("WRITE_FAILED", "could not flush", Some(cause.into()));
    /// assert!(err.to_string().ends_with("(code:WRITE_FAILED) (msg:could not flush) (err:disk full)"));
    /// ```
    #[track_caller]
    pub fn new(
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
        orig_err: Option<BoxError>,
    ) -> Self {
        Error::at(SourceLocation::caller(), code, message, orig_err)
    }

    /// Creates an error at an explicitly given location.
    ///
    /// ```
    /// use odinerr::{Error, SourceLocation};
    ///
    /// let err = Error::at(SourceLocation::new("src/main.rs", 7), "E1", "boom", None);
    /// assert_eq!(err.to_string(), "(main.rs:7) (code:E1) (msg:boom) (err:)");
    /// ```
    pub fn at(
        location: SourceLocation,
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
        orig_err: Option<BoxError>,
    ) -> Self {
        Error { code: code.into(), message: message.into(), orig_err, location }
    }

    /// Creates an error without an original error.
    #[track_caller]
    pub fn msg(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Error::at(SourceLocation::caller(), code, message, None)
    }

    /// Creates an error wrapping `err`.
    #[track_caller]
    pub fn wrap(
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
        err: impl Into<BoxError>,
    ) -> Self {
        Error::at(SourceLocation::caller(), code, message, Some(err.into()))
    }

    /// Creates an error from a typed code, using its default message if it has one.
    #[track_caller]
    pub fn coded<T: ErrorCode>(code: T, orig_err: Option<BoxError>) -> Self {
        let info = code.info();
        Error::at(SourceLocation::caller(), info.code, info.message.unwrap_or(""), orig_err)
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn orig_err(&self) -> Option<&(dyn core::error::Error + Send + Sync + 'static)> {
        self.orig_err.as_deref()
    }

    pub fn location(&self) -> SourceLocation {
        self.location
    }

    /// Returns whether this error has a given error code.
    pub fn is_code<T: ErrorCode>(&self, value: T) -> bool {
        self.code == value.code()
    }

    /// Returns whether this error's code is exactly `code`.
    pub fn has_code(&self, code: &str) -> bool {
        self.code == code
    }

    /// Renders this error with [`sprint_error`].
    pub fn sprint(&self, extra: &str) -> String {
        sprint_error(
            &self.code,
            &self.message,
            extra,
            self.orig_err.as_deref().map(|e| e as &dyn core::error::Error),
        )
    }

    /// Emits this error as an `ERROR` level `tracing` event.
    #[cfg(feature = "tracing")]
    pub fn trace(&self) {
        match &self.orig_err {
            Some(cause) => tracing::error!(
                code = %self.code,
                file = self.location.file(),
                line = self.location.line(),
                cause = %cause,
                "{}",
                self.message
            ),
            None => tracing::error!(
                code = %self.code,
                file = self.location.file(),
                line = self.location.line(),
                "{}",
                self.message
            ),
        }
    }
}
impl Classified for Error {
    fn code(&self) -> &str {
        &self.code
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn orig_err(&self) -> Option<&(dyn core::error::Error + Send + Sync + 'static)> {
        self.orig_err.as_deref()
    }
}
impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}) (code:{}) (msg:{}) (err:", self.location, self.code, self.message)?;
        if let Some(err) = &self.orig_err {
            write!(f, "{err}")?;
        }
        f.write_str(")")
    }
}
impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match &self.orig_err {
            Some(err) => Some(&**err),
            None => None,
        }
    }
}
