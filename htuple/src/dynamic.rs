//! Access to slots by an index only known at runtime.
//!
//! The type of a slot chosen at runtime can't be known statically, so slots are returned as
//! [`Any`] trait objects, to be downcast by the caller. This requires every slot to be `'static`.
//!
//! ```
//! use htuple::prelude::*;
//!
//! let mut t = tuple![1u8, String::from("two")];
//! assert_eq!(t.get_dyn(0)?.downcast_ref::<u8>(), Some(&1));
//! assert_eq!(t.get_dyn(1)?.downcast_ref::<u8>(), None);
//!
//! if let Some(s) = t.get_dyn_mut(1)?.downcast_mut::<String>() {
//!     s.push('!');
//! }
//! assert_eq!(t.tail.head, "two!");
//!
//! let error = t.get_dyn(2).unwrap_err();
//! assert_eq!((error.index(), error.arity()), (2, 2));
//! # Ok::<(), htuple::OutOfBoundsIndexError>(())
//! ```

use core::any::Any;

use crate::reflect::Size;
use crate::{Cons, Nil, OutOfBoundsIndexError};

/// Access to the slots of a container by runtime index.
pub trait DynAccess {
    /// Borrow the slot at `index`, or fail if `index` is not less than the arity.
    fn get_dyn(&self, index: usize) -> Result<&dyn Any, OutOfBoundsIndexError>;

    /// Mutably borrow the slot at `index`, or fail if `index` is not less than the arity.
    fn get_dyn_mut(&mut self, index: usize) -> Result<&mut dyn Any, OutOfBoundsIndexError>;
}

impl DynAccess for Nil {
    fn get_dyn(&self, index: usize) -> Result<&dyn Any, OutOfBoundsIndexError> {
        Err(OutOfBoundsIndexError::new(index, 0))
    }

    fn get_dyn_mut(&mut self, index: usize) -> Result<&mut dyn Any, OutOfBoundsIndexError> {
        Err(OutOfBoundsIndexError::new(index, 0))
    }
}

impl<H: Any, T: DynAccess + Size> DynAccess for Cons<H, T> {
    fn get_dyn(&self, index: usize) -> Result<&dyn Any, OutOfBoundsIndexError> {
        match index.checked_sub(1) {
            None => Ok(&self.head as &dyn Any),
            Some(rest) => self
                .tail
                .get_dyn(rest)
                .map_err(|_| OutOfBoundsIndexError::new(index, Self::SIZE)),
        }
    }

    fn get_dyn_mut(&mut self, index: usize) -> Result<&mut dyn Any, OutOfBoundsIndexError> {
        match index.checked_sub(1) {
            None => Ok(&mut self.head as &mut dyn Any),
            Some(rest) => self
                .tail
                .get_dyn_mut(rest)
                .map_err(|_| OutOfBoundsIndexError::new(index, Self::SIZE)),
        }
    }
}

impl<T: Any, const N: usize> DynAccess for [T; N] {
    fn get_dyn(&self, index: usize) -> Result<&dyn Any, OutOfBoundsIndexError> {
        self.get(index)
            .map(|slot| slot as &dyn Any)
            .ok_or_else(|| OutOfBoundsIndexError::new(index, N))
    }

    fn get_dyn_mut(&mut self, index: usize) -> Result<&mut dyn Any, OutOfBoundsIndexError> {
        self.get_mut(index)
            .map(|slot| slot as &mut dyn Any)
            .ok_or_else(|| OutOfBoundsIndexError::new(index, N))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three() -> Cons<u8, Cons<&'static str, Cons<char, Nil>>> {
        Cons::new(1, Cons::new("two", Cons::new('3', Nil)))
    }

    #[test]
    fn in_bounds() {
        let t = three();
        assert_eq!(t.get_dyn(0).unwrap().downcast_ref::<u8>(), Some(&1));
        assert_eq!(t.get_dyn(1).unwrap().downcast_ref::<&str>(), Some(&"two"));
        assert_eq!(t.get_dyn(2).unwrap().downcast_ref::<char>(), Some(&'3'));
    }

    #[test]
    fn out_of_bounds_reports_the_whole_arity() {
        let mut t = three();
        assert_eq!(t.get_dyn(3).unwrap_err(), OutOfBoundsIndexError::new(3, 3));
        assert_eq!(t.get_dyn_mut(100).unwrap_err(), OutOfBoundsIndexError::new(100, 3));
        assert_eq!(Nil.get_dyn(0).unwrap_err(), OutOfBoundsIndexError::new(0, 0));
        assert_eq!(
            t.get_dyn(7).unwrap_err().to_string(),
            "index 7 is out of bounds for a container of arity 3"
        );
    }

    #[test]
    fn arrays() {
        let mut a = [1u32, 2, 3];
        if let Some(slot) = a.get_dyn_mut(1).unwrap().downcast_mut::<u32>() {
            *slot = 20;
        }
        assert_eq!(a, [1, 20, 3]);
        assert_eq!(a.get_dyn(3).unwrap_err(), OutOfBoundsIndexError::new(3, 3));
    }
}
