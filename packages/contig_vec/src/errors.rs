use std::any;
use std::borrow::Cow;

use thiserror::Error;

/// Errors that can occur when a container acquires storage or duplicates
/// elements into it.
///
/// Every operation that can return one of these errors leaves the container
/// it was called on exactly as it was before the call - a reported failure
/// never costs existing elements or storage.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A contiguous storage block of the requested capacity could not be
    /// acquired from the global allocator.
    ///
    /// This also covers capacity requests so large that their byte size
    /// cannot be expressed as a valid memory layout.
    #[error("failed to allocate contiguous storage for {capacity} elements")]
    Allocation {
        /// The capacity, in elements, of the block that was requested.
        capacity: usize,
    },

    /// An element could not be duplicated while filling a new storage block.
    ///
    /// Duplicates already placed in the new block have been destroyed and
    /// the block released before this error was reported.
    #[error("failed to duplicate element {index} into new storage")]
    Duplication {
        /// Position of the element whose duplication failed.
        index: usize,

        /// The element's own account of the failure.
        #[source]
        source: DuplicateError,
    },
}

/// Error reported by [`Relocate::try_duplicate`][crate::Relocate::try_duplicate]
/// when an element cannot produce a duplicate of itself.
#[derive(Debug, Error)]
#[error("element duplication failed: {reason}")]
pub struct DuplicateError {
    reason: Cow<'static, str>,
}

impl DuplicateError {
    /// Creates an error carrying a caller-provided reason.
    #[must_use]
    pub fn new(reason: impl Into<Cow<'static, str>>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Creates the error reported by element types that opted out of
    /// duplication entirely.
    #[must_use]
    pub fn unsupported<T>() -> Self {
        Self::new(format!(
            "`{}` does not support duplication",
            any::type_name::<T>()
        ))
    }
}

/// A specialized `Result` type for container operations, returning the
/// crate's [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;
