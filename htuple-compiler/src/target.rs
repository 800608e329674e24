//! The target language of the macros: fully nested `Cons`/`Nil` types and constructors.

use {
    proc_macro2::TokenStream,
    quote::{quote, ToTokens},
    std::fmt,
    syn::{Expr, Type},
};

use crate::crate_ident;

/// A product container type, spelled out as an inductive list.
///
/// This is a one-to-one mapping to what you would write without the `Tuple!` macro, except for
/// [`Target::Rest`], which embeds some list type defined elsewhere as the tail.
#[derive(Clone, Debug)]
pub enum Target {
    /// The empty container: `Nil`.
    Nil,
    /// One slot in front of the rest: `Cons<T, Rest>`.
    Cons(Type, Box<Target>),
    /// An arbitrary list type referenced by name.
    Rest(Type),
}

/// The value-level counterpart of [`Target`]: a nested constructor expression.
#[derive(Clone, Debug)]
pub enum ValueTarget {
    /// The empty container: `Nil`.
    Nil,
    /// `Cons::new(slot, rest)`.
    Cons(Slot, Box<ValueTarget>),
    /// An arbitrary list value used as the tail.
    Rest(Expr),
}

/// What goes into one slot of a constructed value.
#[derive(Clone, Debug)]
pub enum Slot {
    /// The expression itself, moved in.
    Value(Expr),
    /// A mutable borrow of the expression.
    MutRef(Expr),
    /// The `Ignore` placeholder.
    Ignore,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Target::*;
        match self {
            Nil => write!(f, "Nil"),
            Cons(t, rest) => write!(f, "Cons<{}, {}>", t.to_token_stream(), rest),
            Rest(t) => write!(f, "{}", t.to_token_stream()),
        }
    }
}

impl fmt::Display for ValueTarget {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use ValueTarget::*;
        match self {
            Nil => write!(f, "Nil"),
            Cons(slot, rest) => write!(f, "Cons::new({}, {})", slot, rest),
            Rest(e) => write!(f, "{}", e.to_token_stream()),
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Slot::Value(e) => write!(f, "{}", e.to_token_stream()),
            Slot::MutRef(e) => write!(f, "&mut {}", e.to_token_stream()),
            Slot::Ignore => write!(f, "Ignore"),
        }
    }
}

impl ToTokens for Target {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let c = crate_ident();
        match self {
            Target::Nil => quote! { ::#c::Nil }.to_tokens(tokens),
            Target::Cons(t, rest) => quote! { ::#c::Cons<#t, #rest> }.to_tokens(tokens),
            Target::Rest(t) => t.to_tokens(tokens),
        }
    }
}

impl ToTokens for ValueTarget {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let c = crate_ident();
        match self {
            ValueTarget::Nil => quote! { ::#c::Nil }.to_tokens(tokens),
            ValueTarget::Cons(slot, rest) => {
                quote! { ::#c::Cons::new(#slot, #rest) }.to_tokens(tokens)
            }
            ValueTarget::Rest(e) => e.to_tokens(tokens),
        }
    }
}

impl ToTokens for Slot {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let c = crate_ident();
        match self {
            Slot::Value(e) => e.to_tokens(tokens),
            Slot::MutRef(e) => quote! { &mut #e }.to_tokens(tokens),
            Slot::Ignore => quote! { ::#c::Ignore }.to_tokens(tokens),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_display() {
        let target = Target::Cons(
            syn::parse_str("u8").unwrap(),
            Box::new(Target::Cons(
                syn::parse_str("bool").unwrap(),
                Box::new(Target::Nil),
            )),
        );
        assert_eq!(target.to_string(), "Cons<u8, Cons<bool, Nil>>");
    }

    #[test]
    fn tokens_use_absolute_paths() {
        let target = Target::Cons(syn::parse_str("u8").unwrap(), Box::new(Target::Nil));
        let tokens = target.to_token_stream().to_string();
        assert!(tokens.starts_with(":: htuple :: Cons"), "{}", tokens);
        assert!(tokens.ends_with(":: htuple :: Nil >"), "{}", tokens);
    }

    #[test]
    fn ignore_slot_tokens() {
        let tokens = Slot::Ignore.to_token_stream().to_string();
        assert_eq!(tokens, ":: htuple :: Ignore");
    }
}
