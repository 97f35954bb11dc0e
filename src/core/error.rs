//! Purpose: Internal error model for the native application core.
//! Exports: `Error`, `ErrorKind`, `to_status_code`.
//! Role: Typed failures propagated with `?` inside the crate; never crosses the C ABI.
//! Invariants: Every failure carries a kind; message and source are optional context.
//! Invariants: Kind-to-code mapping is stable and additive-only.
use std::error::Error as StdError;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Internal,
    Usage,
}

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: Option<String>,
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
            source: None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.kind)?;
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        if let Some(source) = &self.source {
            write!(f, " ({source})")?;
        }
        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|source| source.as_ref() as &(dyn StdError + 'static))
    }
}

pub fn to_status_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::Internal => 1,
        ErrorKind::Usage => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::{Error, ErrorKind, to_status_code};
    use std::error::Error as StdError;

    #[test]
    fn status_code_mapping_is_stable() {
        let cases = [(ErrorKind::Internal, 1), (ErrorKind::Usage, 2)];

        for (kind, code) in cases {
            assert_eq!(to_status_code(kind), code);
        }
    }

    #[test]
    fn display_includes_message_and_source() {
        let source = serde_json::from_str::<serde_json::Value>("{").expect_err("parse error");
        let err = Error::new(ErrorKind::Usage)
            .with_message("invalid app config")
            .with_source(source);

        let text = err.to_string();
        assert!(text.starts_with("Usage: invalid app config ("));
        assert!(err.source().is_some());
        assert_eq!(err.message(), Some("invalid app config"));
    }

    #[test]
    fn bare_error_displays_kind_only() {
        let err = Error::new(ErrorKind::Internal);
        assert_eq!(err.to_string(), "Internal");
        assert!(err.source().is_none());
    }
}
