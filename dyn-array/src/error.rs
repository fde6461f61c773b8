use core::fmt;

/// Errors returned by the fallible [`DynArray`](crate::DynArray) operations.
///
/// Every check happens before the array is touched, so an `Err` always
/// leaves the array as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArrayError {
    /// Capacity passed to [`with_capacity`](crate::DynArray::with_capacity) was zero.
    InvalidArgument { capacity: usize },
    /// Index lies past the accepted range for the operation.
    IndexOutOfRange { index: usize, len: usize },
}

impl ArrayError {
    pub fn is_index_out_of_range(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { capacity } => write!(f, "incorrect capacity: {capacity}"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ArrayError {}

pub type Result<T> = core::result::Result<T, ArrayError>;
