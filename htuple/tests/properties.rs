use htuple::prelude::*;
use htuple::reflect::{size_of, ElementOf, Size};
use htuple::{Cons, Nil};
use static_assertions::{assert_not_impl_any, assert_type_eq_all};
use std::cell::Cell;

type Mixed = Tuple![u8, String, Vec<char>];

// Borrowing a container borrows its slots in the same way
assert_type_eq_all!(ElementOf<0, Mixed>, u8);
assert_type_eq_all!(ElementOf<1, &Mixed>, &String);
assert_type_eq_all!(ElementOf<2, &mut Mixed>, &mut Vec<char>);
assert_type_eq_all!(ElementOf<1, &&mut Mixed>, &&mut String);

// Indices past the end name no element
assert_not_impl_any!(Mixed: htuple::reflect::Element<htuple::unary::UnaryOf<3>>);

fn mixed() -> Mixed {
    tuple![1, String::from("two"), vec!['3']]
}

#[test]
fn get_returns_the_slot_type() {
    let mut t = mixed();
    let a: &ElementOf<0, Mixed> = t.at::<0>();
    assert_eq!(*a, 1);
    let b: &mut ElementOf<1, Mixed> = t.at_mut::<1>();
    b.push('!');
    let c: ElementOf<2, Mixed> = t.take::<2>();
    assert_eq!(c, vec!['3']);
}

struct Counted<'a> {
    value: u8,
    comparisons: &'a Cell<usize>,
}

impl PartialEq for Counted<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.comparisons.set(self.comparisons.get() + 1);
        self.value == other.value
    }
}

#[test]
fn equality_stops_at_the_first_mismatch() {
    let comparisons = Cell::new(0);
    let counted = |value| Counted {
        value,
        comparisons: &comparisons,
    };

    let a = tuple![counted(1), counted(2), counted(3), counted(4)];
    let b = tuple![counted(9), counted(2), counted(3), counted(4)];
    assert!(a != b);
    assert_eq!(comparisons.get(), 1);

    comparisons.set(0);
    let c = tuple![counted(1), counted(2), counted(3), counted(4)];
    assert!(a == c);
    assert_eq!(comparisons.get(), 4);
}

#[test]
fn lexicographic_law() {
    assert!(tuple![1, 2] < tuple![1, 3]);
    assert!(!(tuple![2, 1] < tuple![1, 9]));
    assert!(!(tuple![1, 2] < tuple![1, 2]));
    assert!(!(tuple![] < tuple![]));
    assert!(tuple![] == tuple![]);
}

#[test]
fn concatenation() {
    let joined = htuple::concat((tuple![1, 2], tuple![3], [4, 5]));
    assert_eq!(joined, tuple![1, 2, 3, 4, 5]);
    assert_type_eq_all!(
        htuple::concat::Concatenated<Tuple![Tuple![u8, u16], Tuple![u32], [u64; 2]]>,
        Tuple![u8, u16, u32, u64, u64]
    );

    fn size<C: Size>(_: &C) -> usize {
        size_of::<C>()
    }
    assert_eq!(size(&joined), 5);

    assert_eq!(htuple::concat(()), Nil);
    assert_eq!(htuple::concat((tuple![], tuple!['a', 'b'])), tuple!['a', 'b']);
    assert_eq!(htuple::concat((tuple!['a', 'b'], ())), tuple!['a', 'b']);
}

#[test]
fn locate_agrees_with_concatenation() {
    let inputs = tuple![tuple![1u8, 2u8], ('c', "d"), [5i64; 2]];
    let joined = inputs.clone().concat();
    assert_eq!(htuple::locate::<1, _>(&inputs), joined.at::<1>());
    assert_eq!(htuple::locate::<2, _>(&inputs), joined.at::<2>());
    assert_eq!(htuple::locate::<3, _>(&inputs), joined.at::<3>());
    assert_eq!(htuple::locate::<5, _>(&inputs), joined.at::<5>());
}

#[test]
fn tie_assigns_and_ignores() {
    let (mut a, mut b) = (0, 0);
    tie!(a, b).assign((10, 20));
    assert_eq!((a, b), (10, 20));

    let (mut a, mut b) = (0, 0);
    tie!(_, b).assign((10, 20));
    assert_eq!((a, b), (0, 20));

    tie!(a, _).assign(tuple![30, "ignored"]);
    assert_eq!(a, 30);
}

#[test]
fn move_only_elements_move_out() {
    struct MoveOnly(Box<u8>);

    let t = tuple![MoveOnly(Box::new(1)), MoveOnly(Box::new(2))];
    let MoveOnly(second) = t.take::<1>();
    assert_eq!(*second, 2);

    let pair = (MoveOnly(Box::new(3)), 'x');
    let MoveOnly(first) = htuple::take::<0, _>(pair);
    assert_eq!(*first, 3);
}

#[test]
fn swap_exchanges_every_slot() {
    let mut a = tuple![1, String::from("a"), vec![1.0]];
    let mut b = tuple![2, String::from("b"), vec![]];
    htuple::swap(&mut a, &mut b);
    assert_eq!(a, tuple![2, String::from("b"), vec![]]);
    assert_eq!(b, tuple![1, String::from("a"), vec![1.0]]);

    let mut c = a.clone();
    a.swap(&mut c);
    assert_eq!(a, c);
}

#[test]
fn forwarded_arguments_keep_their_categories() {
    let owned = String::from("owned");
    let mut counter = 0u32;
    let args: Cons<&String, Cons<&mut u32, Cons<u8, Nil>>> =
        htuple::forward_as_tuple((&owned, &mut counter, 7u8));
    let total = args.apply(|s: &String, c: &mut u32, n: u8| {
        *c += 1;
        s.len() + usize::from(n)
    });
    assert_eq!(total, 12);
    assert_eq!(counter, 1);
}

#[test]
fn runtime_indexing() {
    let t = tuple![1u8, 'b'];
    assert_eq!(t.get_dyn(1).unwrap().downcast_ref::<char>(), Some(&'b'));
    let error = t.get_dyn(2).unwrap_err();
    assert_eq!(error.index(), 2);
    assert_eq!(error.arity(), 2);
}
