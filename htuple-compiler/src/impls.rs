//! Generators for the trait implementations which must be written once per arity.
//!
//! Rust has no variadic generics, so every impl relating flat tuples `(T0, ..., Tn)` or arrays
//! `[T; n]` to the inductive `Cons`/`Nil` lists is generated here for each `n` up to a bound. The
//! generated code refers to the library through `crate::` paths, because these generators are only
//! ever invoked from inside the `htuple` crate itself.

use {
    proc_macro2::{Ident, Literal, TokenStream},
    quote::{format_ident, quote},
};

use crate::{parse::Bound, CompileError};

/// The largest arity for which flat tuple impls can be generated.
pub const MAX_TUPLE_ARITY: usize = 128;

/// The largest number for which unary conversions can be generated.
pub const MAX_UNARY: usize = 512;

/// Generate the flat tuple and array impls for every arity from 0 to `bound`, inclusive.
pub fn impl_tuples(bound: &Bound) -> Result<TokenStream, syn::Error> {
    check(bound, MAX_TUPLE_ARITY)?;
    Ok((0..=bound.value).map(tuple_impls).collect())
}

/// Generate the conversions between `Number<N>` and unary numbers for every `N` from 0 to `bound`,
/// inclusive.
pub fn unary_conversions(bound: &Bound) -> Result<TokenStream, syn::Error> {
    check(bound, MAX_UNARY)?;

    let mut tokens = TokenStream::new();
    let mut unary = quote!(crate::unary::Z);
    for n in 0..=bound.value {
        let constant = Literal::usize_unsuffixed(n);
        tokens.extend(quote! {
            impl crate::unary::ToUnary for crate::unary::Number<#constant> {
                type AsUnary = #unary;
            }

            impl crate::unary::ToConstant for #unary {
                type AsConstant = crate::unary::Number<#constant>;
            }
        });
        unary = quote!(crate::unary::S<#unary>);
    }
    Ok(tokens)
}

fn check(bound: &Bound, max: usize) -> Result<(), syn::Error> {
    if bound.value > max {
        Err(CompileError::ArityOutOfRange {
            found: bound.value,
            max,
        }
        .at(bound.span))
    } else {
        Ok(())
    }
}

/// All the impls for a single arity `n`.
fn tuple_impls(n: usize) -> TokenStream {
    let params: Vec<Ident> = (0..n).map(|i| format_ident!("T{}", i)).collect();
    let vars: Vec<Ident> = (0..n).map(|i| format_ident!("t{}", i)).collect();
    let element = format_ident!("T");
    let repeated: Vec<Ident> = (0..n).map(|_| element.clone()).collect();

    let list = list_type(&params);
    let array_list = list_type(&repeated);
    let construct = list_expr(&vars);
    let pattern = list_pattern(&vars);
    let len = unary(n);
    let size = Literal::usize_unsuffixed(n);

    quote! {
        impl<#(#params),*> crate::tuple::Tuple for (#(#params,)*) {
            type AsList = #list;

            #[inline]
            fn into_list(self) -> Self::AsList {
                let (#(#vars,)*) = self;
                #construct
            }
        }

        impl<#(#params),*> crate::tuple::List for #list {
            type AsTuple = (#(#params,)*);

            #[inline]
            fn into_tuple(self) -> Self::AsTuple {
                let #pattern = self;
                (#(#vars,)*)
            }
        }

        impl<#(#params),*> crate::reflect::Size for (#(#params,)*) {
            type Len = #len;
            const SIZE: usize = #size;
        }

        impl<#(#params),*> crate::concat::IntoProduct for (#(#params,)*) {
            type Product = #list;

            #[inline]
            fn into_product(self) -> Self::Product {
                crate::tuple::Tuple::into_list(self)
            }
        }

        impl<#element> crate::concat::IntoProduct for [#element; #size] {
            type Product = #array_list;

            #[inline]
            fn into_product(self) -> Self::Product {
                let [#(#vars),*] = self;
                #construct
            }
        }

        impl<__F, __R, #(#params),*> crate::helpers::Apply<__F> for #list
        where
            __F: FnOnce(#(#params),*) -> __R,
        {
            type Output = __R;

            #[inline]
            fn apply(self, f: __F) -> __R {
                let #pattern = self;
                f(#(#vars),*)
            }
        }
    }
}

/// `Cons<T0, Cons<T1, ... Nil>>`
fn list_type(params: &[Ident]) -> TokenStream {
    params.iter().rev().fold(quote!(crate::Nil), |tail, head| {
        quote!(crate::Cons<#head, #tail>)
    })
}

/// `Cons::new(t0, Cons::new(t1, ... Nil))`
fn list_expr(vars: &[Ident]) -> TokenStream {
    vars.iter().rev().fold(quote!(crate::Nil), |tail, head| {
        quote!(crate::Cons::new(#head, #tail))
    })
}

/// `Cons { head: t0, tail: Cons { head: t1, tail: ... Nil } }`
fn list_pattern(vars: &[Ident]) -> TokenStream {
    vars.iter().rev().fold(quote!(crate::Nil), |tail, head| {
        quote!(crate::Cons { head: #head, tail: #tail })
    })
}

/// `S<S<... Z>>`, with `n` successors.
fn unary(n: usize) -> TokenStream {
    (0..n).fold(quote!(crate::unary::Z), |inner, _| {
        quote!(crate::unary::S<#inner>)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proc_macro2::Span;

    fn bound(value: usize) -> Bound {
        Bound {
            value,
            span: Span::call_site(),
        }
    }

    #[test]
    fn unary_nesting() {
        assert_eq!(unary(0).to_string(), "crate :: unary :: Z");
        assert_eq!(
            unary(2).to_string(),
            "crate :: unary :: S < crate :: unary :: S < crate :: unary :: Z > >"
        );
    }

    #[test]
    fn list_shapes() {
        let vars = [format_ident!("a"), format_ident!("b")];
        assert_eq!(
            list_expr(&vars).to_string(),
            "crate :: Cons :: new (a , crate :: Cons :: new (b , crate :: Nil))"
        );
        assert_eq!(list_pattern(&[]).to_string(), "crate :: Nil");
    }

    #[test]
    fn bounds_are_enforced() {
        assert!(impl_tuples(&bound(MAX_TUPLE_ARITY)).is_ok());
        let error = impl_tuples(&bound(MAX_TUPLE_ARITY + 1)).unwrap_err();
        assert_eq!(
            error.to_string(),
            CompileError::ArityOutOfRange {
                found: MAX_TUPLE_ARITY + 1,
                max: MAX_TUPLE_ARITY,
            }
            .to_string()
        );
        assert!(unary_conversions(&bound(MAX_UNARY + 1)).is_err());
    }

    #[test]
    fn one_impl_block_per_trait_per_arity() {
        let tokens = impl_tuples(&bound(3)).unwrap().to_string();
        assert_eq!(tokens.matches("crate :: tuple :: Tuple for").count(), 4);
        assert_eq!(tokens.matches("crate :: helpers :: Apply < __F > for").count(), 4);
    }
}
