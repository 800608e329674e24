//! The compiler behind the macros of the `htuple` crate.
//!
//! This crate is not meant to be used directly: `htuple-macro` wraps it in procedural macros, and
//! `htuple` re-exports those. It lives in its own crate so that the parser and the code generator
//! can be tested without a procedural macro context.
//!
//! The pipeline mirrors the surface of the macros:
//!
//! - [`Invocation`] / [`ValueInvocation`] are the parsed surface syntax of `Tuple![...]` and of
//!   `tuple![...]` / `tie!(...)`;
//! - [`Target`] / [`ValueTarget`] are the fully nested `Cons`/`Nil` forms they compile to;
//! - [`impls`] generates the arity-indexed trait implementations that the library cannot write
//!   generically.

use {
    lazy_static::lazy_static,
    proc_macro2::{Ident, Span},
    proc_macro_crate::FoundCrate,
    std::{fmt, ops},
    thiserror::Error,
};

pub mod impls;
pub mod parse;
mod syntax;
mod target;

pub use syntax::{Invocation, Item, Mode, ValueInvocation, ValueItem};
pub use target::{Slot, Target, ValueTarget};

/// A value annotated with the span of the source it was parsed from.
#[derive(Debug, Clone)]
pub struct Spanned<T> {
    /// The annotated value.
    pub inner: T,
    /// Where it came from.
    pub span: Span,
}

impl<T> Spanned<T> {
    /// Annotate a value with a span.
    pub fn new(inner: T, span: Span) -> Self {
        Spanned { inner, span }
    }
}

impl<T> ops::Deref for Spanned<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.inner
    }
}

impl<T> ops::DerefMut for Spanned<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.inner
    }
}

impl<T: fmt::Display> fmt::Display for Spanned<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.inner.fmt(f)
    }
}

/// Semantic errors found after parsing a macro invocation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// A `..Rest` splice was followed by more elements.
    #[error("a `..` splice is only allowed as the last element of a tuple")]
    SpreadNotLast,
    /// A `_` placeholder was used outside of `tie!`.
    #[error("`_` is only meaningful inside `tie!`, where it discards the assigned value")]
    UnexpectedIgnore,
    /// A `..rest` splice was used inside `tie!`.
    #[error("`tie!` cannot splice an existing tuple, list each variable explicitly")]
    UnexpectedSpread,
    /// An arity bound larger than the generators support.
    #[error("arity bound {found} exceeds the supported maximum of {max}")]
    ArityOutOfRange {
        /// The requested bound.
        found: usize,
        /// The largest bound accepted.
        max: usize,
    },
}

impl CompileError {
    /// Attach a span to this error, producing a diagnostic.
    pub fn at(&self, span: Span) -> syn::Error {
        syn::Error::new(span, self)
    }
}

/// Combine a list of spanned errors into a single diagnostic, or succeed if there are none.
pub(crate) fn collect_errors(errors: Vec<Spanned<CompileError>>) -> Result<(), syn::Error> {
    let mut combined: Option<syn::Error> = None;
    for error in errors {
        let error = error.inner.at(error.span);
        match &mut combined {
            None => combined = Some(error),
            Some(existing) => existing.combine(error),
        }
    }
    match combined {
        None => Ok(()),
        Some(error) => Err(error),
    }
}

/// The identifier under which generated code refers to the `htuple` crate.
///
/// Generated paths are absolute (`::htuple::Cons`), so inside `htuple` itself this relies on the
/// crate declaring `extern crate self as htuple;`.
pub fn crate_ident() -> Ident {
    lazy_static! {
        static ref CRATE_NAME: String = match proc_macro_crate::crate_name("htuple") {
            Ok(FoundCrate::Name(name)) => name,
            Ok(FoundCrate::Itself) | Err(_) => "htuple".to_owned(),
        };
    }

    Ident::new(&**CRATE_NAME, Span::call_site())
}
