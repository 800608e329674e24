//! The product container itself: an inductive list of slots.
//!
//! A container of arity `n` is `n` nested [`Cons`] cells ending in [`Nil`]. Each cell holds one
//! slot, so the type of every slot, their order, and the arity are all part of the container's
//! type. Spelling these types out by hand is tedious; the [`Tuple!`](crate::Tuple) and
//! [`tuple!`](crate::tuple) macros write them for you.
//!
//! Construction, cloning, moving and dropping are all member-wise, derived from the slots:
//! a container is [`Default`] exactly when all of its slots are, [`Clone`] exactly when all of
//! them are, and so on.

use core::fmt::{self, Debug, DebugTuple, Formatter};
use core::mem;

/// The empty product container.
///
/// `Nil` is a unit type: constructing, cloning, assigning, and [swapping](Swap) it all do nothing.
///
/// # Examples
///
/// ```
/// use htuple::{Nil, Swap};
///
/// let mut a = Nil;
/// let mut b = Nil::default();
/// a.swap(&mut b);
/// assert_eq!(a, b);
/// assert_eq!(format!("{:?}", a), "()");
/// ```
#[derive(Clone, Copy, Hash, Default)]
pub struct Nil;

/// A non-empty product container: the slot `head`, followed by the container `tail`.
///
/// # Examples
///
/// ```
/// use htuple::prelude::*;
/// use htuple::{Cons, Nil};
///
/// let t: Cons<u8, Cons<&str, Nil>> = Cons::new(1, Cons::new("one", Nil));
/// assert_eq!(t, tuple![1, "one"]);
/// assert_eq!(format!("{:?}", t), r#"(1, "one")"#);
///
/// // Every slot is value-initialized by `Default`
/// let d: Tuple![u8, String, bool] = Default::default();
/// assert_eq!(d, tuple![0, String::new(), false]);
/// ```
#[derive(Clone, Copy, Hash, Default)]
pub struct Cons<H, T> {
    /// The first slot.
    pub head: H,
    /// The remaining slots.
    pub tail: T,
}

impl<H, T> Cons<H, T> {
    /// Put `head` in front of the container `tail`.
    #[inline]
    pub const fn new(head: H, tail: T) -> Self {
        Cons { head, tail }
    }

    /// Separate the first slot from the rest of the container.
    #[inline]
    pub fn split(self) -> (H, T) {
        (self.head, self.tail)
    }
}

/// Exchange the contents of two containers of the same type, slot by slot.
///
/// Swapping a slot moves its bytes and never runs user code, so this cannot panic whatever the
/// slot types are. Swapping a container with itself is statically impossible: it would need two
/// mutable borrows of the same value.
///
/// # Examples
///
/// ```
/// use htuple::prelude::*;
///
/// let mut a = tuple![1, String::from("a"), 'a'];
/// let mut b = tuple![2, String::from("b"), 'b'];
/// a.swap(&mut b);
/// assert_eq!(a, tuple![2, String::from("b"), 'b']);
/// assert_eq!(b, tuple![1, String::from("a"), 'a']);
/// ```
pub trait Swap {
    /// Exchange every slot of `self` with the corresponding slot of `other`.
    fn swap(&mut self, other: &mut Self);
}

impl Swap for Nil {
    #[inline]
    fn swap(&mut self, _: &mut Self) {}
}

impl<H, T: Swap> Swap for Cons<H, T> {
    #[inline]
    fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.head, &mut other.head);
        self.tail.swap(&mut other.tail);
    }
}

/// Exchange the contents of two containers of the same type, slot by slot.
#[inline]
pub fn swap<L: Swap>(x: &mut L, y: &mut L) {
    x.swap(y)
}

impl Debug for Nil {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("()")
    }
}

impl<H: Debug, T: DebugSlots> Debug for Cons<H, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut tuple = f.debug_tuple("");
        let _ = tuple.field(&self.head);
        self.tail.debug_slots(&mut tuple);
        tuple.finish()
    }
}

/// Formatting the slots of a container as the fields of a tuple.
pub trait DebugSlots {
    /// Add each slot, in order, as a field.
    fn debug_slots(&self, tuple: &mut DebugTuple<'_, '_>);
}

impl DebugSlots for Nil {
    fn debug_slots(&self, _: &mut DebugTuple<'_, '_>) {}
}

impl<H: Debug, T: DebugSlots> DebugSlots for Cons<H, T> {
    fn debug_slots(&self, tuple: &mut DebugTuple<'_, '_>) {
        let _ = tuple.field(&self.head);
        self.tail.debug_slots(tuple);
    }
}
