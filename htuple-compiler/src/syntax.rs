use syn::{Expr, Type};

use crate::{
    collect_errors,
    target::{Slot, Target, ValueTarget},
    CompileError, Spanned,
};

/// The surface syntax of a `Tuple![...]` invocation: a comma-separated list of element types,
/// optionally ending in a `..Rest` splice.
#[derive(Debug, Clone)]
pub struct Invocation {
    /// The elements, in order.
    pub items: Vec<Spanned<Item>>,
}

/// One element of a `Tuple![...]` invocation.
#[derive(Debug, Clone)]
pub enum Item {
    /// A single element type.
    Type(Type),
    /// `..Rest`: an existing list type spliced in as the tail.
    Spread(Type),
}

/// The surface syntax of a `tuple![...]` or `tie!(...)` invocation.
#[derive(Debug, Clone)]
pub struct ValueInvocation {
    /// The elements, in order.
    pub items: Vec<Spanned<ValueItem>>,
}

/// One element of a `tuple![...]` or `tie!(...)` invocation.
#[derive(Debug, Clone)]
pub enum ValueItem {
    /// An element expression.
    Expr(Expr),
    /// `_`, the placeholder that discards whatever is assigned to it.
    Ignore,
    /// `..rest`: an existing list value spliced in as the tail.
    Spread(Expr),
}

/// Which value macro is being compiled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// `tuple![...]`: every expression is moved into its slot.
    Tuple,
    /// `tie!(...)`: every expression is borrowed mutably, and `_` becomes `Ignore`.
    Tie,
}

impl Invocation {
    /// Compile this invocation into its nested `Cons`/`Nil` form.
    pub fn to_target(&self) -> Result<Target, syn::Error> {
        let mut errors = Vec::new();
        let (elements, tail) = split_tail(&self.items, &mut errors, |item| match item {
            Item::Spread(ty) => Some(ty.clone()),
            Item::Type(_) => None,
        });
        collect_errors(errors)?;

        let mut target = match tail {
            Some(ty) => Target::Rest(ty),
            None => Target::Nil,
        };
        for item in elements.iter().rev() {
            if let Item::Type(ty) = &item.inner {
                target = Target::Cons(ty.clone(), Box::new(target));
            }
        }
        Ok(target)
    }
}

impl ValueInvocation {
    /// Compile this invocation into its nested `Cons::new`/`Nil` form.
    pub fn to_target(&self, mode: Mode) -> Result<ValueTarget, syn::Error> {
        let mut errors = Vec::new();
        let (elements, tail) = split_tail(&self.items, &mut errors, |item| match item {
            ValueItem::Spread(expr) => Some(expr.clone()),
            _ => None,
        });

        if mode == Mode::Tie {
            if let Some(last) = self.items.last() {
                if tail.is_some() {
                    errors.push(Spanned::new(CompileError::UnexpectedSpread, last.span));
                }
            }
        }

        let mut slots = Vec::with_capacity(elements.len());
        for item in elements {
            match (&item.inner, mode) {
                (ValueItem::Expr(expr), Mode::Tuple) => slots.push(Slot::Value(expr.clone())),
                (ValueItem::Expr(expr), Mode::Tie) => slots.push(Slot::MutRef(expr.clone())),
                (ValueItem::Ignore, Mode::Tie) => slots.push(Slot::Ignore),
                (ValueItem::Ignore, Mode::Tuple) => {
                    errors.push(Spanned::new(CompileError::UnexpectedIgnore, item.span))
                }
                // Misplaced splices were already reported by `split_tail`
                (ValueItem::Spread(_), _) => {}
            }
        }
        collect_errors(errors)?;

        let mut target = match tail {
            Some(expr) => ValueTarget::Rest(expr),
            None => ValueTarget::Nil,
        };
        for slot in slots.into_iter().rev() {
            target = ValueTarget::Cons(slot, Box::new(target));
        }
        Ok(target)
    }
}

/// Separate a trailing splice from the elements before it, reporting any splice which is not in
/// the last position.
fn split_tail<'a, I, T>(
    items: &'a [Spanned<I>],
    errors: &mut Vec<Spanned<CompileError>>,
    spread: impl Fn(&I) -> Option<T>,
) -> (&'a [Spanned<I>], Option<T>) {
    let (elements, tail) = match items.split_last() {
        Some((last, init)) => match spread(&last.inner) {
            Some(tail) => (init, Some(tail)),
            None => (items, None),
        },
        None => (items, None),
    };

    for item in elements {
        if spread(&item.inner).is_some() {
            errors.push(Spanned::new(CompileError::SpreadNotLast, item.span));
        }
    }

    (elements, tail)
}
