use mm_engine::{Matrix, Mode};

/// Status codes returned by all FFI functions.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MMStatus {
    Ok = 0,
    ErrorInvalidArgument = 1,
    ErrorShapeMismatch = 2,
    ErrorOutOfMemory = 3,
    ErrorInvalidConfiguration = 4,
    ErrorInternal = 5,
}

/// Multiplication algorithm selector.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MMMode {
    Naive = 0,
    Transpose = 1,
    Parallel = 2,
}

impl From<MMMode> for Mode {
    fn from(mode: MMMode) -> Self {
        match mode {
            MMMode::Naive => Mode::Naive,
            MMMode::Transpose => Mode::Transpose,
            MMMode::Parallel => Mode::Parallel,
        }
    }
}

/// Opaque matrix handle owned by the caller.
pub struct MMMatrix {
    pub inner: Matrix,
}

impl MMMatrix {
    pub fn new(inner: Matrix) -> Self {
        Self { inner }
    }

    /// Move the matrix to the heap and hand ownership to the caller.
    pub fn into_raw(self) -> *mut MMMatrix {
        Box::into_raw(Box::new(self))
    }
}

impl TryFrom<u32> for MMMode {
    type Error = u32;

    /// Values outside the declared discriminants are returned as the error.
    fn try_from(raw: u32) -> Result<Self, u32> {
        match raw {
            0 => Ok(MMMode::Naive),
            1 => Ok(MMMode::Transpose),
            2 => Ok(MMMode::Parallel),
            other => Err(other),
        }
    }
}
