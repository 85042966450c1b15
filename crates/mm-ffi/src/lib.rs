mod error;
mod types;

pub use error::*;
pub use types::*;

use std::ffi::CString;
use std::os::raw::c_char;
use std::panic::{self, UnwindSafe};

use mm_engine::{EngineConfig, Matrix, Mode};

/// Run the body of entry point `name`. An `Err` is recorded through
/// [`report`]; a panic is caught and reported as `ErrorInternal`.
fn guard<F>(name: &'static str, f: F) -> MMStatus
where
    F: FnOnce() -> Result<(), FfiError> + UnwindSafe,
{
    match panic::catch_unwind(f) {
        Ok(Ok(())) => MMStatus::Ok,
        Ok(Err(err)) => report(err),
        Err(_) => report(FfiError::Panic(name)),
    }
}

unsafe fn handle_ref<'a>(m: *const MMMatrix, arg: &'static str) -> Result<&'a MMMatrix, FfiError> {
    unsafe { m.as_ref() }.ok_or(FfiError::NullArgument(arg))
}

unsafe fn handle_mut<'a>(m: *mut MMMatrix, arg: &'static str) -> Result<&'a mut MMMatrix, FfiError> {
    unsafe { m.as_mut() }.ok_or(FfiError::NullArgument(arg))
}

fn check_bound(max_value: f64) -> Result<(), FfiError> {
    if max_value.is_finite() && max_value >= 0.0 {
        Ok(())
    } else {
        Err(FfiError::InvalidBound(max_value))
    }
}

/// Install the `env_logger` backend so `RUST_LOG` controls engine logging.
///
/// Calling this more than once is harmless.
#[no_mangle]
pub extern "C" fn mm_init_logging() -> MMStatus {
    let _ = env_logger::try_init();
    MMStatus::Ok
}

/// Allocate a zero-filled `rows x cols` matrix.
///
/// On success, writes a heap-allocated `MMMatrix` pointer into `*out`.
/// The caller must later call `mm_matrix_destroy` to free it.
#[no_mangle]
pub unsafe extern "C" fn mm_matrix_create(
    rows: usize,
    cols: usize,
    out: *mut *mut MMMatrix,
) -> MMStatus {
    guard("mm_matrix_create", || {
        if out.is_null() {
            return Err(FfiError::NullArgument("out"));
        }
        let m = Matrix::zeros(rows, cols)?;
        unsafe { *out = MMMatrix::new(m).into_raw() };
        Ok(())
    })
}

/// Destroy a matrix previously returned by this library.
///
/// Passing a null pointer is a no-op and returns `MMStatus::Ok`.
#[no_mangle]
pub unsafe extern "C" fn mm_matrix_destroy(m: *mut MMMatrix) -> MMStatus {
    if !m.is_null() {
        drop(unsafe { Box::from_raw(m) });
    }
    MMStatus::Ok
}

/// Number of rows, or 0 for a null handle.
#[no_mangle]
pub unsafe extern "C" fn mm_matrix_rows(m: *const MMMatrix) -> usize {
    unsafe { m.as_ref() }.map_or(0, |m| m.inner.rows())
}

/// Number of columns, or 0 for a null handle.
#[no_mangle]
pub unsafe extern "C" fn mm_matrix_cols(m: *const MMMatrix) -> usize {
    unsafe { m.as_ref() }.map_or(0, |m| m.inner.cols())
}

/// Borrow the row-major storage (`rows * cols` doubles).
///
/// The pointer stays valid until the matrix is modified or destroyed.
/// Returns null for a null handle.
#[no_mangle]
pub unsafe extern "C" fn mm_matrix_data(m: *const MMMatrix) -> *const f64 {
    unsafe { m.as_ref() }.map_or(std::ptr::null(), |m| m.inner.data().as_ptr())
}

/// Fill the matrix with its row-major indices.
#[no_mangle]
pub unsafe extern "C" fn mm_matrix_init_sequential(m: *mut MMMatrix) -> MMStatus {
    guard("mm_matrix_init_sequential", || {
        let m = unsafe { handle_mut(m, "m") }?;
        mm_engine::init_sequential(&mut m.inner);
        Ok(())
    })
}

/// Fill the matrix with unseeded uniform values in `[0, max_value)`.
#[no_mangle]
pub unsafe extern "C" fn mm_matrix_init_random(m: *mut MMMatrix, max_value: f64) -> MMStatus {
    guard("mm_matrix_init_random", || {
        let m = unsafe { handle_mut(m, "m") }?;
        check_bound(max_value)?;
        mm_engine::init_random(&mut m.inner, max_value);
        Ok(())
    })
}

/// Fill the matrix with uniform values in `[0, max_value)` drawn from a
/// generator seeded with `seed`.
#[no_mangle]
pub unsafe extern "C" fn mm_matrix_init_random_seeded(
    m: *mut MMMatrix,
    max_value: f64,
    seed: u64,
) -> MMStatus {
    guard("mm_matrix_init_random_seeded", || {
        let m = unsafe { handle_mut(m, "m") }?;
        check_bound(max_value)?;
        mm_engine::init_random_seeded(&mut m.inner, max_value, seed);
        Ok(())
    })
}

/// Multiply `a @ b` with the given `MMMode` and the default worker count.
///
/// On success, writes a new matrix into `*out`; the caller owns it and must
/// free it with `mm_matrix_destroy`. Nothing is written on failure.
#[no_mangle]
pub unsafe extern "C" fn mm_multiply(
    a: *const MMMatrix,
    b: *const MMMatrix,
    mode: u32,
    out: *mut *mut MMMatrix,
) -> MMStatus {
    unsafe { mm_multiply_threads(a, b, mode, mm_engine::NUM_THREADS, out) }
}

/// Like `mm_multiply`, with an explicit worker count for `MMMode::Parallel`.
#[no_mangle]
pub unsafe extern "C" fn mm_multiply_threads(
    a: *const MMMatrix,
    b: *const MMMatrix,
    mode: u32,
    threads: usize,
    out: *mut *mut MMMatrix,
) -> MMStatus {
    guard("mm_multiply", || {
        let a = unsafe { handle_ref(a, "a") }?;
        let b = unsafe { handle_ref(b, "b") }?;
        if out.is_null() {
            return Err(FfiError::NullArgument("out"));
        }
        let mode: Mode = MMMode::try_from(mode).map_err(FfiError::UnknownMode)?.into();

        let config = EngineConfig::new().with_threads(threads);
        let c = mm_engine::multiply_with(&a.inner, &b.inner, mode, &config)?;
        unsafe { *out = MMMatrix::new(c).into_raw() };
        Ok(())
    })
}

/// Retrieve the last error message.
///
/// Returns a pointer to a C string describing the most recent error, or
/// null if no error has occurred. The caller must free the returned string
/// with `mm_free_string`.
#[no_mangle]
pub extern "C" fn mm_last_error() -> *const c_char {
    match error::take_last_error() {
        Some(e) => e.into_raw(),
        None => std::ptr::null(),
    }
}

/// Free a string previously returned by `mm_last_error`.
#[no_mangle]
pub unsafe extern "C" fn mm_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}
