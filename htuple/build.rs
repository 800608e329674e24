use std::fmt::{self, Display, Formatter};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::{env, error::Error};

/// Largest arity of flat tuple for which the library generates conversions.
const MAX_ARITY: usize = 64;

/// Largest total size for which every way of splitting a list into concatenation inputs is tested.
const MAX_SPLIT: usize = 8;

fn main() -> Result<(), Box<dyn Error>> {
    // We auto-generate unit tests for every supported arity, because the impls for each arity are
    // themselves generated, and an off-by-one in the generator would otherwise go unnoticed.
    let out_dir = env::var("OUT_DIR")?;
    let dest_path = Path::new(&out_dir).join("arities.rs");
    let mut f = File::create(&dest_path)?;

    writeln!(f, "#[allow(unused_imports)] use crate::prelude::*;")?;
    writeln!(f, "#[allow(unused_imports)] use crate::concat::{{Concatenated, TotalSize}};")?;
    writeln!(f, "#[allow(unused_imports)] use crate::reflect::{{ElementOf, Size, SizeOf}};")?;
    writeln!(f, "use crate::unary::UnaryOf;")?;
    writeln!(f, "use static_assertions::assert_type_eq_all;")?;
    writeln!(f)?;

    // Type-level properties of each arity
    for arity in 0..=MAX_ARITY {
        let shape = Shape::new(0, arity);
        writeln!(f, "assert_type_eq_all!(<{} as Tuple>::AsList, {});", shape.flat(), shape.list())?;
        writeln!(f, "assert_type_eq_all!(<{} as List>::AsTuple, {});", shape.list(), shape.flat())?;
        writeln!(f, "assert_type_eq_all!(SizeOf<{}>, UnaryOf<{}>);", shape.flat(), arity)?;
        writeln!(f, "assert_type_eq_all!(SizeOf<{}>, UnaryOf<{}>);", shape.list(), arity)?;
        if let Some(last) = arity.checked_sub(1) {
            writeln!(
                f,
                "assert_type_eq_all!(ElementOf<{}, {}>, {});",
                last,
                shape.list(),
                Shape::element(last)
            )?;
        }
    }
    writeln!(f)?;

    // Splitting a list into two inputs and concatenating them gives back the same list
    for total in 0..=MAX_SPLIT {
        for split in 0..=total {
            let left = Shape::new(0, split);
            let right = Shape::new(split, total);
            writeln!(
                f,
                "assert_type_eq_all!(Concatenated<Tuple![{}, {}]>, {});",
                left.list(),
                right.flat(),
                Shape::new(0, total).list()
            )?;
            writeln!(
                f,
                "assert_type_eq_all!(<Tuple![{}, {}] as TotalSize>::Len, UnaryOf<{}>);",
                left.flat(),
                right.list(),
                total
            )?;
        }
    }
    writeln!(f)?;

    // Value-level round trips through every arity
    writeln!(f, "#[test]")?;
    writeln!(f, "fn all_arities_round_trip() {{")?;
    for arity in 0..=MAX_ARITY {
        let shape = Shape::new(0, arity);
        writeln!(f, "    {{")?;
        writeln!(f, "        let list: {} = Default::default();", shape.list())?;
        writeln!(f, "        let flat: {} = list.clone().into_tuple();", shape.flat())?;
        writeln!(f, "        assert_eq!(<{} as Size>::SIZE, {});", shape.flat(), arity)?;
        writeln!(f, "        assert_eq!(flat.into_list(), list);")?;
        writeln!(f, "    }}")?;
    }
    writeln!(f, "}}")?;
    Ok(())
}

/// The elements `start..end` of a canonical sequence of element types, cycling through a handful
/// of primitive and owned types.
#[derive(Clone, Copy, Debug)]
struct Shape {
    start: usize,
    end: usize,
}

impl Shape {
    fn new(start: usize, end: usize) -> Shape {
        Shape { start, end }
    }

    fn element(index: usize) -> &'static str {
        const ELEMENTS: &[&str] = &["u8", "String", "bool", "char", "Vec<u16>", "i64", "()"];
        ELEMENTS[index % ELEMENTS.len()]
    }

    fn elements(&self) -> impl Iterator<Item = &'static str> {
        (self.start..self.end).map(Shape::element)
    }

    /// The shape as a flat tuple type.
    fn flat(&self) -> Flat {
        Flat(*self)
    }

    /// The shape as a list type, written with the `Tuple!` macro.
    fn list(&self) -> ListOf {
        ListOf(*self)
    }
}

struct Flat(Shape);

struct ListOf(Shape);

impl Display for Flat {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let count = self.0.end - self.0.start;
        write!(f, "(")?;
        for (i, e) in self.0.elements().enumerate() {
            write!(f, "{}", e)?;
            if i + 1 < count {
                write!(f, ", ")?;
            }
        }
        if count == 1 {
            write!(f, ",")?;
        }
        write!(f, ")")
    }
}

impl Display for ListOf {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "Tuple![")?;
        for (i, e) in self.0.elements().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", e)?;
        }
        write!(f, "]")
    }
}
