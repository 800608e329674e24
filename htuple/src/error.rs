#[cfg(feature = "std")]
use thiserror::Error;

/// When attempting to access a slot of a container by a runtime index, with
/// [`DynAccess`](crate::dynamic::DynAccess), this error is returned when the index is not less than
/// the container's arity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(Error))]
pub struct OutOfBoundsIndexError {
    index: usize,
    arity: usize,
}

impl OutOfBoundsIndexError {
    pub(crate) fn new(index: usize, arity: usize) -> Self {
        OutOfBoundsIndexError { index, arity }
    }

    /// The index which was out of bounds.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The arity of the container it was used on.
    pub fn arity(&self) -> usize {
        self.arity
    }
}

impl core::fmt::Display for OutOfBoundsIndexError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "index {} is out of bounds for a container of arity {}",
            self.index, self.arity
        )
    }
}
