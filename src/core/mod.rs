// Core modules: the native application object, its options, host queries, and errors.
pub mod app;
pub mod error;
pub mod host;
pub mod options;
pub mod point;
