use std::fmt;
use std::io;
use std::string::FromUtf8Error;

/// Errors that can occur around a sanitization pass.
///
/// The policy engine and tree walker themselves are total and never fail;
/// errors only arise at the rendering boundary after sanitization. On any
/// error the caller should discard the output and re-parse from the raw
/// input rather than retry over a partially-mutated tree.
#[derive(Debug)]
pub enum Error {
    /// Serializing the sanitized tree failed. The in-memory tree itself is
    /// not corrupted by this error.
    Render(io::Error),
    /// The serialized bytes were not valid UTF-8.
    Utf8(FromUtf8Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Render(err) => write!(f, "rendering sanitized tree: {err}"),
            Error::Utf8(err) => write!(f, "sanitized output is not valid UTF-8: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Render(err) => Some(err),
            Error::Utf8(err) => Some(err),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Render(err)
    }
}

impl From<FromUtf8Error> for Error {
    fn from(err: FromUtf8Error) -> Self {
        Error::Utf8(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_error_display() {
        let err = Error::from(io::Error::new(io::ErrorKind::Other, "broken pipe"));

        let out = format!("{err}");
        assert!(out.contains("rendering sanitized tree"));
        assert!(out.contains("broken pipe"));
    }

    #[test]
    fn utf8_error_display_and_source() {
        let err = Error::from(String::from_utf8(vec![0xFF]).unwrap_err());

        assert!(format!("{err}").contains("not valid UTF-8"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
