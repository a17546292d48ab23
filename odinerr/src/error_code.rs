//! Typed classification codes.

/// Represents the info underlying an error code.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ErrorCodeInfo {
    /// The classification code itself, e.g. `NOT_FOUND`.
    pub code: &'static str,

    /// The name of the type underlying this error code.
    pub type_name: &'static str,

    /// The name of the variant this error code was taken from.
    pub variant_name: &'static str,

    /// The message used when an error is built from this code alone.
    pub message: Option<&'static str>,
}

/// A type that can be used as a classification code for [`Error`](crate::Error).
///
/// Usually derived:
///
/// ```
/// # #[cfg(feature = "derive")] {
/// use odinerr::ErrorCode;
///
/// #[derive(ErrorCode)]
/// enum StoreCode {
///     NotFound,
///     #[code = "E_PERM"]
///     #[message = "permission denied"]
///     Permission,
/// }
///
/// assert_eq!(StoreCode::NotFound.code(), "NOT_FOUND");
/// assert_eq!(StoreCode::Permission.info().message, Some("permission denied"));
/// # }
/// ```
pub trait ErrorCode: 'static {
    /// Returns the static info for this code.
    fn info(&self) -> &'static ErrorCodeInfo;

    /// Returns the classification code string.
    fn code(&self) -> &'static str {
        self.info().code
    }
}
impl ErrorCode for &'static ErrorCodeInfo {
    fn info(&self) -> &'static ErrorCodeInfo {
        *self
    }
}
