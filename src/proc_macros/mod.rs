//! Crate not intended for direct use.
//! Use https://docs.rs/resumable instead.
#![allow(nonstandard_style)]

use ::core::{
    ops::Not as _,
};
use ::proc_macro::{
    TokenStream,
};
use ::proc_macro2::{
    Literal,
    TokenStream as TokenStream2,
};
use ::quote::{
    quote,
};
use ::syn::{*,
    Result, // Explicitly shadow it
};

/// Implements `::resumable::Label` for a fieldless `enum` whose variants are
/// the yield points of a body, in textual order.
#[proc_macro_derive(Label)] pub
fn derive_Label (
    input: TokenStream,
) -> TokenStream
{
    derive_Label_impl(input.into())
        .unwrap_or_else(|err| {
            let mut errors =
                err .into_iter()
                    .map(|err| Error::new(
                        err.span(),
                        format_args!("`#[derive(resumable::Label)]`: {}", err),
                    ))
            ;
            let mut err = errors.next().unwrap();
            errors.for_each(|cur| err.combine(cur));
            err.to_compile_error()
        })
        .into()
}

fn derive_Label_impl (
    input: TokenStream2,
) -> Result<TokenStream2>
{
    let input: DeriveInput = parse2(input)?;
    let DeriveInput {
        ident: ref EnumName,
        ref generics,
        ref data,
        ..
    } = input;

    let variants = match *data {
        | Data::Enum(DataEnum { ref variants, .. }) => variants,
        | Data::Struct(DataStruct { struct_token, .. }) => return Err(
            Error::new_spanned(struct_token, "expected an `enum`")
        ),
        | Data::Union(DataUnion { union_token, .. }) => return Err(
            Error::new_spanned(union_token, "expected an `enum`")
        ),
    };
    if generics.params.is_empty().not() {
        return Err(Error::new_spanned(
            &generics.params,
            "generic labels are not supported",
        ));
    }
    if variants.is_empty() {
        return Err(Error::new_spanned(
            EnumName,
            "a body needs at least one yield point",
        ));
    }

    let mut errors = None::<Error>;
    let mut push_error = |err: Error| match errors {
        | Some(ref mut errors) => errors.combine(err),
        | None => errors = Some(err),
    };
    for variant in variants {
        if let Fields::Named(_) | Fields::Unnamed(_) = variant.fields {
            push_error(Error::new_spanned(
                &variant.fields,
                "yield points cannot carry fields; keep locals in the body",
            ));
        }
        if let Some((_, ref discriminant)) = variant.discriminant {
            push_error(Error::new_spanned(
                discriminant,
                "explicit discriminants are not supported: \
                 ordinals follow declaration order",
            ));
        }
    }
    if let Some(errors) = errors {
        return Err(errors);
    }

    let count = Literal::usize_unsuffixed(variants.len());
    let Variant = variants.iter().map(|v| &v.ident).collect::<Vec<_>>();
    let ordinal = (0 .. variants.len()).map(Literal::usize_unsuffixed);
    let name = Variant.iter().map(|ident| LitStr::new(
        &ident.to_string(),
        ident.span(),
    ));

    Ok(quote!(
        impl ::resumable::Label for #EnumName {
            const COUNT: ::core::primitive::usize = #count;

            type Counters = [::core::primitive::u64; #count];

            #[inline]
            fn counters ()
              -> Self::Counters
            {
                [0; #count]
            }

            #[inline]
            fn ordinal (self: Self)
              -> ::core::primitive::usize
            {
                match self {
                    #(
                        | Self::#Variant => #ordinal,
                    )*
                }
            }

            #[inline]
            fn name (self: Self)
              -> &'static ::core::primitive::str
            {
                match self {
                    #(
                        | Self::#Variant => #name,
                    )*
                }
            }
        }
    ))
}
