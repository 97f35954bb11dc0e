//! Purpose: Define the stable public Rust API boundary for the application core.
//! Exports: Core types and operations used by the C ABI and by Rust embedders.
//! Role: Public, additive-only surface; hides internal module layout.
//! Invariants: This module is the only public path to core types.

pub use crate::core::app::{App, AppSnapshot};
#[doc(hidden)]
pub use crate::core::error::to_status_code;
pub use crate::core::error::{Error, ErrorKind};
pub use crate::core::host::cpu_count;
pub use crate::core::options::{AppOptions, MAX_LABEL_BYTES, MAX_WORKERS};
pub use crate::core::point::Point;
