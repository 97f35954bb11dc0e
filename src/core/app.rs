//! Purpose: The native application object owned by foreign callers.
//! Exports: `App`, `AppSnapshot`.
//! Role: Plain Rust ownership; the C ABI only boxes and unboxes it.
//! Invariants: An `App` is fully constructed or not at all; no partial state escapes `create`.
//! Invariants: Accessors take `&self` and never mutate the instance.
use serde::Serialize;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::core::error::{Error, ErrorKind};
use crate::core::options::AppOptions;

#[derive(Debug)]
pub struct App {
    options: AppOptions,
    created_at: OffsetDateTime,
}

/// Serializable view of an instance, used by `sls_app_describe_json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppSnapshot {
    pub label: String,
    pub workers: u32,
    pub created_at: String,
}

impl App {
    pub fn create(options: AppOptions) -> Result<Self, Error> {
        options.validate()?;
        let app = Self {
            options,
            created_at: OffsetDateTime::now_utc(),
        };
        tracing::debug!(label = %app.options.label, workers = app.options.workers, "app created");
        Ok(app)
    }

    pub fn label(&self) -> &str {
        &self.options.label
    }

    pub fn workers(&self) -> u32 {
        self.options.workers
    }

    /// Numeric property reported across the C ABI.
    pub fn num(&self) -> i32 {
        i32::try_from(self.options.workers).unwrap_or(i32::MAX)
    }

    pub fn created_at(&self) -> OffsetDateTime {
        self.created_at
    }

    pub fn snapshot(&self) -> Result<AppSnapshot, Error> {
        let created_at = self.created_at.format(&Rfc3339).map_err(|err| {
            Error::new(ErrorKind::Internal)
                .with_message("timestamp format failed")
                .with_source(err)
        })?;
        Ok(AppSnapshot {
            label: self.options.label.clone(),
            workers: self.options.workers,
            created_at,
        })
    }

    pub fn snapshot_json(&self) -> Result<Vec<u8>, Error> {
        let snapshot = self.snapshot()?;
        serde_json::to_vec(&snapshot).map_err(|err| {
            Error::new(ErrorKind::Internal)
                .with_message("failed to serialize app snapshot")
                .with_source(err)
        })
    }
}

impl Drop for App {
    fn drop(&mut self) {
        tracing::debug!(label = %self.options.label, "app released");
    }
}
