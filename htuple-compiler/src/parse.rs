use {
    proc_macro2::Span,
    syn::{
        parse::{Parse, ParseStream, Result},
        punctuated::Punctuated,
        LitInt, Token,
    },
};

use crate::{Invocation, Item, Spanned, ValueInvocation, ValueItem};

impl<T: Parse> Parse for Spanned<T> {
    fn parse(input: ParseStream) -> Result<Self> {
        let span = input.span();
        let inner = input.parse::<T>()?;
        Ok(Spanned { inner, span })
    }
}

impl Parse for Item {
    fn parse(input: ParseStream) -> Result<Self> {
        if input.peek(Token![..]) {
            // Item::Spread: ..<type>
            input.parse::<Token![..]>()?;
            Ok(Item::Spread(input.parse()?))
        } else {
            // Item::Type: <type>
            Ok(Item::Type(input.parse()?))
        }
    }
}

impl Parse for Invocation {
    fn parse(input: ParseStream) -> Result<Self> {
        let items = Punctuated::<Spanned<Item>, Token![,]>::parse_terminated(input)?
            .into_iter()
            .collect();
        Ok(Invocation { items })
    }
}

impl Parse for ValueItem {
    fn parse(input: ParseStream) -> Result<Self> {
        // A bare `_` is the ignore placeholder, but `_` may also begin a longer expression
        if input.peek(Token![_]) {
            let ahead = input.fork();
            ahead.parse::<Token![_]>()?;
            if ahead.is_empty() || ahead.peek(Token![,]) {
                input.parse::<Token![_]>()?;
                return Ok(ValueItem::Ignore);
            }
        }

        if input.peek(Token![..]) {
            // ValueItem::Spread: ..<expr>
            input.parse::<Token![..]>()?;
            Ok(ValueItem::Spread(input.parse()?))
        } else {
            // ValueItem::Expr: <expr>
            Ok(ValueItem::Expr(input.parse()?))
        }
    }
}

impl Parse for ValueInvocation {
    fn parse(input: ParseStream) -> Result<Self> {
        let items = Punctuated::<Spanned<ValueItem>, Token![,]>::parse_terminated(input)?
            .into_iter()
            .collect();
        Ok(ValueInvocation { items })
    }
}

/// The single integer argument to the arity-indexed generators, e.g. the `64` in
/// `impl_tuples!(64)`.
#[derive(Debug, Clone, Copy)]
pub struct Bound {
    /// The inclusive upper bound.
    pub value: usize,
    /// Where the literal was written.
    pub span: Span,
}

impl Parse for Bound {
    fn parse(input: ParseStream) -> Result<Self> {
        let literal = input.parse::<LitInt>()?;
        let value = literal.base10_parse::<usize>()?;
        Ok(Bound {
            value,
            span: literal.span(),
        })
    }
}
