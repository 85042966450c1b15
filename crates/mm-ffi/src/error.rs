use std::cell::RefCell;
use std::ffi::CString;

use mm_engine::MatmulError;
use thiserror::Error;

use crate::types::MMStatus;

/// Everything an `mm_*` entry point can fail with.
#[derive(Debug, Error)]
pub enum FfiError {
    #[error("null argument: {0}")]
    NullArgument(&'static str),

    #[error("unknown multiplication mode: {0}")]
    UnknownMode(u32),

    #[error("max_value must be finite and non-negative, got {0}")]
    InvalidBound(f64),

    #[error("internal panic in {0}")]
    Panic(&'static str),

    #[error(transparent)]
    Engine(#[from] MatmulError),
}

impl FfiError {
    /// The status code a C caller sees for this error.
    pub fn status(&self) -> MMStatus {
        match self {
            FfiError::NullArgument(_) | FfiError::UnknownMode(_) | FfiError::InvalidBound(_) => {
                MMStatus::ErrorInvalidArgument
            }
            FfiError::Panic(_) => MMStatus::ErrorInternal,
            FfiError::Engine(e) => match e {
                MatmulError::Allocation { .. } => MMStatus::ErrorOutOfMemory,
                MatmulError::ShapeMismatch { .. } => MMStatus::ErrorShapeMismatch,
                MatmulError::InvalidConfiguration(_) => MMStatus::ErrorInvalidConfiguration,
                MatmulError::EmptyMatrix { .. }
                | MatmulError::DataLength { .. }
                | MatmulError::UnknownMode(_)
                | MatmulError::UnknownMatrixKind(_) => MMStatus::ErrorInvalidArgument,
                MatmulError::WorkerFailed { .. } | MatmulError::ThreadSpawn(_) => {
                    MMStatus::ErrorInternal
                }
            },
        }
    }
}

thread_local! {
    // Per calling thread, so concurrent C callers never see each other's errors.
    static LAST_ERROR: RefCell<Option<FfiError>> = const { RefCell::new(None) };
}

/// Record `err` as the calling thread's last error and return its status.
pub fn report(err: FfiError) -> MMStatus {
    let status = err.status();
    log::debug!("ffi call failed with {:?}: {}", status, err);
    LAST_ERROR.with(|e| *e.borrow_mut() = Some(err));
    status
}

/// Take the last error message, leaving nothing in its place.
pub fn take_last_error() -> Option<CString> {
    LAST_ERROR
        .with(|e| e.borrow_mut().take())
        .and_then(|err| CString::new(err.to_string()).ok())
}
