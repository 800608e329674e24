//! Procedural macros used by and exported from the `htuple` crate. Use them through `htuple`
//! rather than depending on this crate directly.

extern crate proc_macro;

use {
    htuple_compiler::{impls, parse::Bound, Invocation, Mode, ValueInvocation},
    proc_macro::TokenStream,
    quote::ToTokens,
    syn::parse_macro_input,
};

/// Spell out a product container type from a list of element types.
///
/// `Tuple![A, B, C]` expands to `Cons<A, Cons<B, Cons<C, Nil>>>`, and `Tuple![]` to `Nil`. A
/// trailing `..Rest` uses some other list type as the tail, so `Tuple![A, ..Tuple![B, C]]` is
/// the same type as `Tuple![A, B, C]`.
///
/// # Examples
///
/// ```
/// use htuple::prelude::*;
/// use htuple::{Cons, Nil};
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(Tuple![], Nil);
/// assert_type_eq_all!(Tuple![u8, bool], Cons<u8, Cons<bool, Nil>>);
/// assert_type_eq_all!(Tuple![u8, ..Tuple![bool, char]], Tuple![u8, bool, char]);
/// ```
///
/// A splice must come last:
///
/// ```compile_fail
/// use htuple::prelude::*;
///
/// type Bad = Tuple![..Tuple![u8], bool];
/// ```
#[proc_macro]
#[allow(non_snake_case)]
pub fn Tuple(input: TokenStream) -> TokenStream {
    let invocation = parse_macro_input!(input as Invocation);
    match invocation.to_target() {
        Ok(target) => target.into_token_stream().into(),
        Err(error) => error.to_compile_error().into(),
    }
}

/// Construct a product container from a list of element expressions.
///
/// Every expression is moved into its slot. A trailing `..rest` uses an existing container as the
/// tail.
///
/// # Examples
///
/// ```
/// use htuple::prelude::*;
///
/// let t: Tuple![u8, &str, bool] = tuple![1, "two", true];
/// assert_eq!(t.into_tuple(), (1, "two", true));
///
/// let rest = tuple![2.5, 'c'];
/// let t = tuple![1, ..rest];
/// assert_eq!(t, tuple![1, 2.5, 'c']);
/// ```
#[proc_macro]
pub fn tuple(input: TokenStream) -> TokenStream {
    let invocation = parse_macro_input!(input as ValueInvocation);
    match invocation.to_target(Mode::Tuple) {
        Ok(target) => target.into_token_stream().into(),
        Err(error) => error.to_compile_error().into(),
    }
}

/// Tie a list of variables together so that a whole container can be assigned to them at once.
///
/// Each argument is borrowed mutably; a `_` in any position becomes [`Ignore`], which discards the
/// element assigned to it. The result is assigned to with `Assign::assign`.
///
/// # Examples
///
/// ```
/// use htuple::prelude::*;
///
/// let (mut a, mut b) = (0, 0);
/// tie!(a, b).assign((10, 20));
/// assert_eq!((a, b), (10, 20));
///
/// tie!(_, b).assign((30, 40));
/// assert_eq!((a, b), (10, 40));
/// ```
///
/// [`Ignore`]: https://docs.rs/htuple/latest/htuple/struct.Ignore.html
#[proc_macro]
pub fn tie(input: TokenStream) -> TokenStream {
    let invocation = parse_macro_input!(input as ValueInvocation);
    match invocation.to_target(Mode::Tie) {
        Ok(target) => target.into_token_stream().into(),
        Err(error) => error.to_compile_error().into(),
    }
}

#[doc(hidden)]
#[proc_macro]
pub fn impl_tuples(input: TokenStream) -> TokenStream {
    let bound = parse_macro_input!(input as Bound);
    match impls::impl_tuples(&bound) {
        Ok(tokens) => tokens.into(),
        Err(error) => error.to_compile_error().into(),
    }
}

#[doc(hidden)]
#[proc_macro]
pub fn generate_unary_conversion_impls(input: TokenStream) -> TokenStream {
    let bound = parse_macro_input!(input as Bound);
    match impls::unary_conversions(&bound) {
        Ok(tokens) => tokens.into(),
        Err(error) => error.to_compile_error().into(),
    }
}
