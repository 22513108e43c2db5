use core::fmt::{self, Display};

use smallvec::CollectionAllocErr;

use crate::types::alloc_type::TryReserveError;

/// An allocation failure inside the list itself.
///
/// These never describe the errors a list stores. They only surface from the
/// `try_*` operations; the infallible ones absorb them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum AllocError {
    /// The message storage could not grow.
    Storage,
    /// A message could not be copied into the list.
    Message,
    /// The rendered output could not be allocated.
    Render,
}

impl Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            AllocError::Storage => "message storage could not grow",
            AllocError::Message => "message could not be copied",
            AllocError::Render => "rendered output could not be allocated",
        };
        f.write_str(reason)
    }
}

impl core::error::Error for AllocError {}

impl From<CollectionAllocErr> for AllocError {
    #[inline]
    fn from(_: CollectionAllocErr) -> Self {
        AllocError::Storage
    }
}

impl From<TryReserveError> for AllocError {
    #[inline]
    fn from(_: TryReserveError) -> Self {
        AllocError::Message
    }
}
