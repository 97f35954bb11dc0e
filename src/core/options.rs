//! Purpose: Construction parameters for a native application instance.
//! Exports: `AppOptions`, `MAX_LABEL_BYTES`, `MAX_WORKERS`.
//! Role: Validated input to `App::create`; decoded from JSON at the C ABI edge.
//! Invariants: `validate` is the single gate; an `App` never holds invalid options.
//! Invariants: JSON fields are optional and unknown fields are rejected.
use serde::{Deserialize, Serialize};

use crate::core::error::{Error, ErrorKind};
use crate::core::host::cpu_count;

pub const DEFAULT_LABEL: &str = "sls-app";
pub const MAX_LABEL_BYTES: usize = 64;
pub const MAX_WORKERS: u32 = 1024;

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppOptions {
    pub label: String,
    pub workers: u32,
}

impl AppOptions {
    pub fn new() -> Self {
        Self {
            label: DEFAULT_LABEL.to_string(),
            workers: cpu_count().min(MAX_WORKERS),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_workers(mut self, workers: u32) -> Self {
        self.workers = workers;
        self
    }

    pub fn from_json(text: &str) -> Result<Self, Error> {
        serde_json::from_str(text).map_err(|err| {
            Error::new(ErrorKind::Usage)
                .with_message("invalid app config json")
                .with_source(err)
        })
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.label.is_empty() {
            return Err(Error::new(ErrorKind::Usage).with_message("label must not be empty"));
        }
        if self.label.len() > MAX_LABEL_BYTES {
            return Err(Error::new(ErrorKind::Usage)
                .with_message(format!("label exceeds {MAX_LABEL_BYTES} bytes")));
        }
        if self.label.contains('\0') {
            return Err(Error::new(ErrorKind::Usage).with_message("label contains NUL"));
        }
        if self.workers == 0 || self.workers > MAX_WORKERS {
            return Err(Error::new(ErrorKind::Usage)
                .with_message(format!("workers must be in 1..={MAX_WORKERS}")));
        }
        Ok(())
    }
}

impl Default for AppOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{AppOptions, DEFAULT_LABEL, MAX_LABEL_BYTES, MAX_WORKERS};
    use crate::core::error::ErrorKind;
    use crate::core::host::cpu_count;

    #[test]
    fn defaults_are_valid() {
        let options = AppOptions::new();
        assert_eq!(options.label, DEFAULT_LABEL);
        assert_eq!(options.workers, cpu_count().min(MAX_WORKERS));
        options.validate().expect("defaults valid");
    }

    #[test]
    fn json_fields_are_optional() {
        let options = AppOptions::from_json("{}").expect("parse");
        assert_eq!(options, AppOptions::default());

        let options = AppOptions::from_json(r#"{"workers": 3}"#).expect("parse");
        assert_eq!(options.workers, 3);
        assert_eq!(options.label, DEFAULT_LABEL);
    }

    #[test]
    fn json_rejects_unknown_fields() {
        let err = AppOptions::from_json(r#"{"gpu": true}"#).expect_err("err");
        assert_eq!(err.kind(), ErrorKind::Usage);
    }

    #[test]
    fn json_rejects_malformed_input() {
        let err = AppOptions::from_json(r#"{"workers": "#).expect_err("err");
        assert_eq!(err.kind(), ErrorKind::Usage);
        let err = AppOptions::from_json(r#"{"workers": -1}"#).expect_err("err");
        assert_eq!(err.kind(), ErrorKind::Usage);
    }

    #[test]
    fn validate_rejects_out_of_range_workers() {
        for workers in [0, MAX_WORKERS + 1] {
            let err = AppOptions::new()
                .with_workers(workers)
                .validate()
                .expect_err("err");
            assert_eq!(err.kind(), ErrorKind::Usage);
        }
        AppOptions::new()
            .with_workers(MAX_WORKERS)
            .validate()
            .expect("upper bound valid");
    }

    #[test]
    fn validate_rejects_bad_labels() {
        let long = "x".repeat(MAX_LABEL_BYTES + 1);
        for label in ["", "a\0b", long.as_str()] {
            let err = AppOptions::new()
                .with_label(label)
                .validate()
                .expect_err("err");
            assert_eq!(err.kind(), ErrorKind::Usage);
        }
    }
}
