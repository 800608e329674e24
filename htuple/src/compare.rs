//! Equality and lexicographic ordering between containers of the same arity.
//!
//! Two containers may be compared when they have the same number of slots and each pair of
//! corresponding slots is comparable; the slot types themselves do not have to match. Comparing
//! containers of different arities does not compile:
//!
//! ```compile_fail
//! use htuple::prelude::*;
//!
//! let _ = tuple![1, 2] == tuple![1, 2, 3];
//! ```
//!
//! Equality compares slots from first to last and stops at the first pair which is not equal:
//!
//! ```
//! use htuple::prelude::*;
//! use std::cell::Cell;
//!
//! struct Counted<'a>(u8, &'a Cell<usize>);
//!
//! impl PartialEq for Counted<'_> {
//!     fn eq(&self, other: &Self) -> bool {
//!         self.1.set(self.1.get() + 1);
//!         self.0 == other.0
//!     }
//! }
//!
//! let calls = Cell::new(0);
//! let a = tuple![Counted(1, &calls), Counted(2, &calls), Counted(3, &calls)];
//! let b = tuple![Counted(1, &calls), Counted(9, &calls), Counted(3, &calls)];
//! assert!(a != b);
//! assert_eq!(calls.get(), 2);
//! ```
//!
//! Ordering is lexicographic, and uses nothing but `<` on the slots: at each position, the left
//! container is less if its slot is less than the right one; otherwise, unless the right slot is
//! less than the left, the decision moves on to the next position. Empty containers are never
//! less than each other. The remaining operators are defined from `<` the usual way: `a > b` is
//! `b < a`, `a <= b` is `!(b < a)`, and `a >= b` is `!(a < b)`.
//!
//! ```
//! use htuple::prelude::*;
//!
//! assert!(tuple![1, 2] < tuple![1, 3]);
//! assert!(!(tuple![2, 1] < tuple![1, 9]));
//! assert!(!(tuple![1, 2] < tuple![1, 2]));
//! assert!(tuple![1, 2] <= tuple![1, 2]);
//! assert!(tuple![1u8, "b"] > tuple![1u8, "a"]);
//! assert!(!(tuple![] < tuple![]));
//! ```

use core::cmp::Ordering;

use crate::{Cons, Nil};

impl PartialEq for Nil {
    #[inline]
    fn eq(&self, _: &Nil) -> bool {
        true
    }
}

impl Eq for Nil {}

impl<H, T, H2, T2> PartialEq<Cons<H2, T2>> for Cons<H, T>
where
    H: PartialEq<H2>,
    T: PartialEq<T2>,
{
    #[inline]
    fn eq(&self, other: &Cons<H2, T2>) -> bool {
        self.head == other.head && self.tail == other.tail
    }
}

impl<H: Eq, T: Eq> Eq for Cons<H, T> {}

/// Lexicographic "less than" between two containers, using only `<` on their slots.
pub trait LexLess<Rhs = Self> {
    /// Is `self` lexicographically less than `other`?
    fn lex_less(&self, other: &Rhs) -> bool;
}

impl LexLess for Nil {
    #[inline]
    fn lex_less(&self, _: &Nil) -> bool {
        false
    }
}

impl<H, T, H2, T2> LexLess<Cons<H2, T2>> for Cons<H, T>
where
    H: PartialOrd<H2>,
    H2: PartialOrd<H>,
    T: LexLess<T2>,
{
    #[inline]
    fn lex_less(&self, other: &Cons<H2, T2>) -> bool {
        self.head < other.head || (!(other.head < self.head) && self.tail.lex_less(&other.tail))
    }
}

impl PartialOrd for Nil {
    #[inline]
    fn partial_cmp(&self, _: &Nil) -> Option<Ordering> {
        Some(Ordering::Equal)
    }
}

impl Ord for Nil {
    #[inline]
    fn cmp(&self, _: &Nil) -> Ordering {
        Ordering::Equal
    }
}

impl<H, T, H2, T2> PartialOrd<Cons<H2, T2>> for Cons<H, T>
where
    H: PartialOrd<H2>,
    H2: PartialOrd<H>,
    T: PartialEq<T2> + LexLess<T2>,
    T2: LexLess<T>,
{
    fn partial_cmp(&self, other: &Cons<H2, T2>) -> Option<Ordering> {
        if self.lex_less(other) {
            Some(Ordering::Less)
        } else if other.lex_less(self) {
            Some(Ordering::Greater)
        } else if self == other {
            Some(Ordering::Equal)
        } else {
            None
        }
    }

    #[inline]
    fn lt(&self, other: &Cons<H2, T2>) -> bool {
        self.lex_less(other)
    }

    #[inline]
    fn le(&self, other: &Cons<H2, T2>) -> bool {
        !other.lex_less(self)
    }

    #[inline]
    fn gt(&self, other: &Cons<H2, T2>) -> bool {
        other.lex_less(self)
    }

    #[inline]
    fn ge(&self, other: &Cons<H2, T2>) -> bool {
        !self.lex_less(other)
    }
}

impl<H: Ord, T: Ord + LexLess> Ord for Cons<H, T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.head
            .cmp(&other.head)
            .then_with(|| self.tail.cmp(&other.tail))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn pair<A, B>(a: A, b: B) -> Cons<A, Cons<B, Nil>> {
        Cons::new(a, Cons::new(b, Nil))
    }

    #[test]
    fn lexicographic_less() {
        assert!(pair(1, 2) < pair(1, 3));
        assert!(!(pair(2, 1) < pair(1, 9)));
        assert!(!(pair(1, 2) < pair(1, 2)));
        assert!(!Nil.lex_less(&Nil));
        assert!(!(Nil < Nil));
    }

    #[test]
    fn derived_operators() {
        assert!(pair(1, 2) <= pair(1, 2));
        assert!(pair(1, 2) >= pair(1, 2));
        assert!(pair(3, 0) > pair(2, 100));
        assert!(pair(1, 2) != pair(1, 3));
        assert_eq!(pair(1, 2).partial_cmp(&pair(1, 3)), Some(Ordering::Less));
        assert_eq!(pair(1, 2).cmp(&pair(1, 2)), Ordering::Equal);
        assert_eq!(pair('b', 0).cmp(&pair('a', 9)), Ordering::Greater);
    }

    #[test]
    fn heterogeneous_slots() {
        let owned = pair(String::from("a"), 1u8);
        let borrowed = pair("a", 1u8);
        assert!(owned == borrowed);
        assert!(!(owned != borrowed));
    }

    #[test]
    fn incomparable_slots() {
        let nan = pair(f64::NAN, 1.0);
        let one = pair(1.0, 1.0);
        assert_eq!(nan.partial_cmp(&one), None);
        assert!(!(nan < one));
        assert!(!(one < nan));
        // Neither side is less than the other, so both of these hold
        assert!(nan <= one);
        assert!(nan >= one);
    }

    #[test]
    fn less_uses_only_less_than() {
        #[derive(PartialEq)]
        struct OnlyLess<'a>(u8, &'a Cell<usize>);

        impl PartialOrd for OnlyLess<'_> {
            fn partial_cmp(&self, _: &Self) -> Option<Ordering> {
                panic!("only `<` should be used")
            }

            fn lt(&self, other: &Self) -> bool {
                self.1.set(self.1.get() + 1);
                self.0 < other.0
            }
        }

        let calls = Cell::new(0);
        let a = pair(OnlyLess(1, &calls), OnlyLess(2, &calls));
        let b = pair(OnlyLess(1, &calls), OnlyLess(3, &calls));
        assert!(a < b);
        // head: a < b, then b < a, then tail: a < b
        assert_eq!(calls.get(), 3);
    }
}
