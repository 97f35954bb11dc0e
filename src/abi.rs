//! Purpose: C ABI bridge for the iOS host (header generated by cbindgen).
//! Exports: `AppResult`, `AppError`, `Buf`, and the `sls_*`, `get_cpu_count`, `make_point` functions.
//! Role: Stable ABI surface; the only place raw pointers and manual ownership appear.
//! Invariants: Construction failures are returned as data, never as null handles or aborts.
//! Invariants: `AppError` values are fixed once published; new variants are appended.
//! Invariants: Handles are opaque; callers release each non-null handle exactly once.
//! Notes: Misuse (double release, use after release, foreign pointers) is undefined and not detected.
use std::ffi::{CStr, c_char};
use std::panic::{self, AssertUnwindSafe};
use std::ptr;

use crate::core::app::App;
use crate::core::error::{Error, ErrorKind, to_status_code};
use crate::core::host::cpu_count;
use crate::core::options::AppOptions;
use crate::core::point::Point;

/// Reason an application handle could not be produced.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AppError {
    CouldNotCreate = 0,
}

/// Outcome of a constructor call: an owned handle or an error code.
///
/// The tag must be checked before reading the payload.
#[repr(C)]
#[derive(Debug)]
pub enum AppResult {
    Ok(*mut App),
    Err(AppError),
}

impl AppResult {
    pub fn is_ok(&self) -> bool {
        matches!(self, AppResult::Ok(_))
    }

    pub fn into_result(self) -> Result<*mut App, AppError> {
        match self {
            AppResult::Ok(app) => Ok(app),
            AppResult::Err(err) => Err(err),
        }
    }
}

impl From<Result<Box<App>, AppError>> for AppResult {
    fn from(result: Result<Box<App>, AppError>) -> Self {
        match result {
            Ok(app) => AppResult::Ok(Box::into_raw(app)),
            Err(err) => AppResult::Err(err),
        }
    }
}

/// Library-owned byte buffer; release with `sls_buf_free`.
#[repr(C)]
#[derive(Debug)]
pub struct Buf {
    data: *mut u8,
    len: usize,
}

impl Buf {
    pub const fn empty() -> Self {
        Self {
            data: ptr::null_mut(),
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_bytes(&self) -> &[u8] {
        if self.data.is_null() || self.len == 0 {
            return &[];
        }
        unsafe { std::slice::from_raw_parts(self.data, self.len) }
    }
}

impl Default for Buf {
    fn default() -> Self {
        Self::empty()
    }
}

/// Creates an application with default options.
#[unsafe(no_mangle)]
pub extern "C" fn sls_app_make() -> AppResult {
    make_app(|| Ok(AppOptions::new()))
}

/// Creates an application from a JSON options document.
///
/// `config` may be null, which selects the defaults. Any decoding or
/// validation failure yields `CouldNotCreate`.
///
/// # Safety
///
/// A non-null `config` must point to a NUL-terminated string that stays
/// valid for the duration of the call.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn sls_app_make_with_config(config: *const c_char) -> AppResult {
    make_app(|| {
        if config.is_null() {
            return Ok(AppOptions::new());
        }
        let text = unsafe { CStr::from_ptr(config) }.to_str().map_err(|err| {
            Error::new(ErrorKind::Usage)
                .with_message("config is not valid UTF-8")
                .with_source(err)
        })?;
        AppOptions::from_json(text)
    })
}

/// Releases an application handle. Null is ignored.
///
/// # Safety
///
/// A non-null `app` must have come from `sls_app_make` or
/// `sls_app_make_with_config` and must not have been released already.
/// No other call may be using `app` concurrently, and `app` must not be used
/// after this returns.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn sls_app_release(app: *mut App) {
    if app.is_null() {
        return;
    }
    unsafe {
        drop(Box::from_raw(app));
    }
}

/// Returns the instance's numeric property (its worker count).
///
/// # Panics
///
/// Aborts the process if called with a null pointer.
///
/// # Safety
///
/// `app` must be a live handle returned by one of the constructors.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn sls_app_num(app: *const App) -> i32 {
    let app = unsafe { borrow_app(app, "sls_app_num") };
    app.num()
}

/// Writes a JSON snapshot of the instance into `out`.
///
/// Returns `0` on success and `-1` if `out` is null or the snapshot fails.
/// Any buffer previously held by `out` is overwritten, not freed.
///
/// # Panics
///
/// Aborts the process if `app` is null.
///
/// # Safety
///
/// `app` must be a live handle; a non-null `out` must be valid for writes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn sls_app_describe_json(app: *const App, out: *mut Buf) -> i32 {
    let app = unsafe { borrow_app(app, "sls_app_describe_json") };
    if out.is_null() {
        return -1;
    }
    match app.snapshot_json() {
        Ok(json) => {
            unsafe { write_buf(out, json) };
            0
        }
        Err(err) => {
            tracing::warn!(code = to_status_code(err.kind()), error = %err, "app describe failed");
            -1
        }
    }
}

/// Frees a buffer filled by the library and resets it to empty. Null is ignored.
///
/// # Safety
///
/// A non-null `buf` must be valid for reads and writes and hold either an
/// empty buffer or one produced by this library that has not been freed.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn sls_buf_free(buf: *mut Buf) {
    if buf.is_null() {
        return;
    }
    let buf = unsafe { &mut *buf };
    if !buf.data.is_null() && buf.len != 0 {
        unsafe {
            drop(Box::from_raw(ptr::slice_from_raw_parts_mut(buf.data, buf.len)));
        }
    }
    buf.data = ptr::null_mut();
    buf.len = 0;
}

/// Installs a stderr log subscriber filtered by `RUST_LOG` (default `warn`).
///
/// Returns `1` if this call installed it, `0` if one was already present.
#[unsafe(no_mangle)]
pub extern "C" fn sls_logging_init() -> i32 {
    i32::from(crate::logging::init_tracing())
}

/// Number of CPUs available to the process; always at least 1.
#[unsafe(no_mangle)]
pub extern "C" fn get_cpu_count() -> i32 {
    i32::try_from(cpu_count()).unwrap_or(i32::MAX)
}

#[unsafe(no_mangle)]
pub extern "C" fn make_point(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

fn make_app<F>(options: F) -> AppResult
where
    F: FnOnce() -> Result<AppOptions, Error>,
{
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| options().and_then(App::create)));
    let result = match outcome {
        Ok(Ok(app)) => Ok(Box::new(app)),
        Ok(Err(err)) => {
            tracing::warn!(code = to_status_code(err.kind()), error = %err, "app construction failed");
            Err(AppError::CouldNotCreate)
        }
        Err(_) => {
            tracing::warn!("app construction panicked");
            Err(AppError::CouldNotCreate)
        }
    };
    AppResult::from(result)
}

unsafe fn borrow_app<'a>(app: *const App, caller: &str) -> &'a App {
    assert!(!app.is_null(), "called `{caller}` with null pointer");
    unsafe { &*app }
}

unsafe fn write_buf(out: *mut Buf, bytes: Vec<u8>) {
    let out = unsafe { &mut *out };
    if bytes.is_empty() {
        *out = Buf::empty();
        return;
    }
    let data = bytes.into_boxed_slice();
    out.len = data.len();
    out.data = Box::into_raw(data).cast::<u8>();
}
