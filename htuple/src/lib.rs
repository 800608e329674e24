/*!
[![license: MIT](https://img.shields.io/github/license/boltlabs-inc/htuple)](https://github.com/boltlabs-inc/htuple)
[![crates.io](https://img.shields.io/crates/v/htuple)](https://crates.io/crates/htuple)
[![docs.rs documentation](https://docs.rs/htuple/badge.svg)](https://docs.rs/htuple)

Fixed-size heterogeneous product containers, with every slot's type known at compile time.

A product container holds zero or more values, each of its own type, in a fixed order. Rust's
built-in tuples are such containers, but generic code can't recurse over them: there's no way to
ask for "the third element of any tuple", or to join two tuples of unknown arity into one. This
crate represents a container as an inductive list, [`Cons`] cells ending in [`Nil`], so that all
of these become ordinary trait resolution:

- **Reflection**: the [size](reflect::Size) of a container and the [type](reflect::Element) of
  any of its slots, for lists, flat tuples and arrays alike;
- **Access** to any slot by a constant index, [borrowed](Access::at), [mutably
  borrowed](Access::at_mut) or [moved out](Access::take), where an index that is out of range
  doesn't compile;
- **Comparison**: [equality](compare) which stops at the first mismatch, and a lexicographic
  ordering which only ever uses `<` on the slots;
- **Concatenation** of any number of containers with [`concat()`], and [`locate()`] to find an
  element of the concatenation without building it;
- **Helpers**: [`tie!`] to assign a whole container to several variables at once (skipping any
  written as `_`), [`forward_as_tuple`] to bundle arguments, and [`Apply`](helpers::Apply) to
  spread a container back out into a function call.

## Quick reference

| Operation | Example |
| :-------- | :------ |
| Name a container type | `Tuple![u8, String, bool]` |
| Build a container | `tuple![1, String::new(), true]` |
| Number of slots | `size_of::<Tuple![u8, bool]>() == 2` |
| Type of a slot | `ElementOf<1, Tuple![u8, bool]>` is `bool` |
| Borrow a slot | `t.at::<1>()`, `get::<1, _>(&t)` |
| Move a slot out | `t.take::<1>()` |
| Compare | `tuple![1, 2] < tuple![1, 3]` |
| Concatenate | `concat((tuple![1], (2, 3), [4, 5]))` |
| Assign to several variables | `tie!(a, _, c).assign((1, 2, 3))` |
| Call a function | `tuple![1, 2].apply(i32::max)` |

```
use htuple::prelude::*;

let mut t: Tuple![u8, String, bool] = tuple![1, String::from("two"), true];
t.at_mut::<1>().push('!');
assert_eq!(t.at::<1>(), "two!");

let (mut n, mut flag) = (0, false);
tie!(n, _, flag).assign(t);
assert_eq!((n, flag), (1, true));

let joined = htuple::concat((tuple![1, 2], (3,), [4, 5]));
assert!(joined < tuple![1, 2, 3, 4, 6]);
```

Everything is `#[inline]` and nothing allocates, so the library works without the standard
library: turn off the default `std` feature to build it for `no_std` targets, including
accelerators.

## Large indices

Indices and sizes are supported up to 256, but resolving a type-level number walks it one step at
a time. Past about 128 this exceeds the compiler's default recursion limit, so a crate which uses
larger indices needs to raise it:

```
#![recursion_limit = "256"]
# use htuple::prelude::*;

let bytes = [7u8; 200];
assert_eq!(*bytes.at::<199>(), 7);
```
*/
#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![recursion_limit = "256"]
#![allow(clippy::type_complexity)]
#![warn(missing_docs)]
#![warn(missing_copy_implementations, missing_debug_implementations)]
#![warn(unused_qualifications, unused_results)]
#![warn(future_incompatible)]
#![warn(unused)]
#![forbid(broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// The macros refer to this crate as `::htuple`, including from inside it.
#[allow(unused_extern_crates)]
extern crate self as htuple;

pub mod access;
pub mod compare;
pub mod concat;
pub mod dynamic;
pub mod helpers;
pub mod reflect;
pub mod tuple;
pub mod unary;

mod error;
mod list;

pub use access::{get, get_by, get_mut, take, Access};
pub use concat::{concat, locate, locate_mut};
pub use error::OutOfBoundsIndexError;
pub use helpers::{forward_as_tuple, Ignore, IGNORE};
pub use htuple_macro::{tie, tuple, Tuple};
pub use list::{swap, Cons, Nil, Swap};

#[doc(hidden)]
pub use list::DebugSlots;
pub use reflect::size_of;

/// The prelude module for quickly getting started with htuple.
///
/// This module is designed to be imported as `use htuple::prelude::*;`, which brings into scope the
/// macros, and every trait whose methods are called on containers.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::access::Access;
    #[doc(no_inline)]
    pub use crate::concat::{Append, Concat};
    #[doc(no_inline)]
    pub use crate::dynamic::DynAccess;
    #[doc(no_inline)]
    pub use crate::helpers::{Apply, Assign, Ignore, IGNORE};
    #[doc(no_inline)]
    pub use crate::list::Swap;
    #[doc(no_inline)]
    pub use crate::tuple::{List, Tuple};
    #[doc(no_inline)]
    pub use htuple_macro::{tie, tuple, Tuple};
}
