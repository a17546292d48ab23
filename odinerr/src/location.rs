use core::fmt::{Display, Formatter};
use core::panic::Location;

/// The place in the source an error was constructed at.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    file: &'static str,
    line: u32,
}
impl SourceLocation {
    /// The location used when none could be determined.
    pub const UNKNOWN: SourceLocation = SourceLocation { file: "", line: 0 };

    /// Creates a location from a file path and a line. Only the base name of `file` is kept.
    ///
    /// Meant to be fed from `file!()` and `line!()` when a location is passed by hand.
    pub fn new(file: &'static str, line: u32) -> Self {
        SourceLocation { file: base_name(file), line }
    }

    /// Returns the location of the caller.
    ///
    /// Returns [`SourceLocation::UNKNOWN`] when the `location` feature is disabled.
    #[track_caller]
    #[inline]
    pub fn caller() -> Self {
        if cfg!(feature = "location") { Location::caller().into() } else { SourceLocation::UNKNOWN }
    }

    /// The base name of the file, without any directories.
    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns `false` for [`SourceLocation::UNKNOWN`].
    pub fn is_known(&self) -> bool {
        !self.file.is_empty() || self.line != 0
    }
}
impl From<&'static Location<'static>> for SourceLocation {
    fn from(value: &'static Location<'static>) -> Self {
        SourceLocation::new(value.file(), value.line())
    }
}
impl Display for SourceLocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

// `Location::file` uses the host separator, so both are stripped.
fn base_name(path: &'static str) -> &'static str {
    match path.rfind(|c| c == '/' || c == '\\') {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_directories() {
        assert_eq!(base_name("src/bucket/store.rs"), "store.rs");
        assert_eq!(base_name("src\\bucket\\store.rs"), "store.rs");
        assert_eq!(base_name("store.rs"), "store.rs");
        assert_eq!(base_name("src/"), "");
        assert_eq!(base_name(""), "");
    }

    #[test]
    fn new_keeps_line() {
        let loc = SourceLocation::new("a/b/c.rs", 42);
        assert_eq!(loc.file(), "c.rs");
        assert_eq!(loc.line(), 42);
        assert!(loc.is_known());
        assert_eq!(alloc::format!("{loc}"), "c.rs:42");
    }

    #[test]
    fn unknown_is_empty() {
        assert_eq!(SourceLocation::UNKNOWN, SourceLocation::default());
        assert!(!SourceLocation::UNKNOWN.is_known());
        assert_eq!(alloc::format!("{}", SourceLocation::UNKNOWN), ":0");
    }

    #[cfg(feature = "location")]
    #[test]
    fn caller_is_this_file() {
        let loc = SourceLocation::caller();
        let line = line!() - 1;
        assert_eq!(loc.file(), "location.rs");
        assert_eq!(loc.line(), line);
    }

    #[cfg(not(feature = "location"))]
    #[test]
    fn caller_is_unknown_without_location() {
        assert_eq!(SourceLocation::caller(), SourceLocation::UNKNOWN);
    }
}
