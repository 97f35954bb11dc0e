//! Purpose: Native library behind the iOS host's application lifecycle boundary.
//! Exports: `api` (stable Rust surface), `abi` (C ABI consumed via the generated header).
//! Role: Owns the native application object; the host holds only opaque handles.
//! Invariants: Core modules use ordinary ownership; raw pointers are confined to `abi`.
//! Invariants: The C ABI is additive-only once published.
pub mod abi;
pub mod api;
mod core;
mod logging;
