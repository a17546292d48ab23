use alloc::string::String;
use core::fmt::Write;

/// Returns `code` and `message` formatted as `"<code>: <message>"`, followed by `extra` and
/// `orig_err` on their own lines.
///
/// Both `extra` and `orig_err` are optional. An empty `extra` or a `None` cause omits its line.
///
/// ```
/// let cause = std::io::Error::other("disk full");
/// assert_eq!(
///     odinerr::sprint_error("E1", "boom", "detail", Some(&cause)),
///     "E1: boom\n\tdetail\ncaused by: disk full",
/// );
/// ```
pub fn sprint_error(
    code: &str,
    message: &str,
    extra: &str,
    orig_err: Option<&dyn core::error::Error>,
) -> String {
    let mut msg = String::new();
    // Writing into a `String` cannot fail.
    let _ = write!(msg, "{code}: {message}");
    if !extra.is_empty() {
        let _ = write!(msg, "\n\t{extra}");
    }
    if let Some(err) = orig_err {
        let _ = write!(msg, "\ncaused by: {err}");
    }
    msg
}
