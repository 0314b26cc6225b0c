use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Variant};

use crate::common::{parse_side_attr, SideAttr};

/// #[derive(IntoEither)] on a two-variant enum.
///
/// Each variant must be a one-field tuple variant. The first variant maps to
/// `Left` and the second to `Right` unless `#[either(left | right)]` says
/// otherwise. Generates both `From` directions.
pub fn expand_derive_into_either(input: DeriveInput) -> TokenStream2 {
    match try_expand(&input) {
        Ok(tokens) => tokens,
        Err(e) => e.to_compile_error(),
    }
}

fn try_expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    let data = match &input.data {
        Data::Enum(data) => data,
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "IntoEither can only be derived for enums",
            ));
        }
    };

    let variants: Vec<&Variant> = data.variants.iter().collect();
    let &[first, second] = variants.as_slice() else {
        return Err(syn::Error::new_spanned(
            input,
            "IntoEither requires exactly two variants",
        ));
    };

    let (left, right) = assign_sides(first, second)?;
    let left_ty = single_field_type(left)?;
    let right_ty = single_field_type(right)?;
    let left_ident = &left.ident;
    let right_ident = &right.ident;

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::core::convert::From<#name #ty_generics>
            for ::tola_either::Either<#left_ty, #right_ty> #where_clause
        {
            #[inline]
            fn from(value: #name #ty_generics) -> Self {
                match value {
                    #name::#left_ident(inner) => ::tola_either::Either::Left(inner),
                    #name::#right_ident(inner) => ::tola_either::Either::Right(inner),
                }
            }
        }

        impl #impl_generics ::core::convert::From<::tola_either::Either<#left_ty, #right_ty>>
            for #name #ty_generics #where_clause
        {
            #[inline]
            fn from(value: ::tola_either::Either<#left_ty, #right_ty>) -> Self {
                match value {
                    ::tola_either::Either::Left(inner) => #name::#left_ident(inner),
                    ::tola_either::Either::Right(inner) => #name::#right_ident(inner),
                }
            }
        }
    })
}

/// Order the two variants as (left, right).
fn assign_sides<'a>(first: &'a Variant, second: &'a Variant) -> syn::Result<(&'a Variant, &'a Variant)> {
    let a = parse_side_attr(&first.attrs)?;
    let b = parse_side_attr(&second.attrs)?;

    let first_side = match (a, b) {
        (Some(x), Some(y)) if x == y => {
            return Err(syn::Error::new_spanned(
                second,
                "both variants are marked with the same `either` side",
            ));
        }
        (Some(x), _) => x,
        (None, Some(y)) => y.opposite(),
        (None, None) => SideAttr::Left,
    };

    Ok(match first_side {
        SideAttr::Left => (first, second),
        SideAttr::Right => (second, first),
    })
}

fn single_field_type(variant: &Variant) -> syn::Result<&syn::Type> {
    match &variant.fields {
        Fields::Unnamed(fields) if fields.unnamed.len() == 1 => Ok(&fields.unnamed[0].ty),
        _ => Err(syn::Error::new_spanned(
            variant,
            "IntoEither variants must have exactly one unnamed field",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_expands_both_directions() {
        let input: DeriveInput = parse_quote! {
            enum Lookup { Missing(u32), Found(String) }
        };
        let out: String = try_expand(&input).unwrap().to_string().split_whitespace().collect();
        assert!(out.contains("Either<u32,String>"));
        assert_eq!(out.matches("impl").count(), 2);
    }

    #[test]
    fn test_attribute_overrides_order() {
        let input: DeriveInput = parse_quote! {
            enum Lookup { #[either(right)] Found(String), Missing(u32) }
        };
        let out: String = try_expand(&input).unwrap().to_string().split_whitespace().collect();
        assert!(out.contains("Either<u32,String>"));
    }

    #[test]
    fn test_rejects_struct() {
        let input: DeriveInput = parse_quote! { struct S(u8); };
        assert!(try_expand(&input).is_err());
    }

    #[test]
    fn test_rejects_wrong_arity() {
        let input: DeriveInput = parse_quote! { enum E { A(u8), B(u8), C(u8) } };
        assert!(try_expand(&input).is_err());

        let input: DeriveInput = parse_quote! { enum E { A(u8, u8), B(u8) } };
        assert!(try_expand(&input).is_err());

        let input: DeriveInput = parse_quote! { enum E { A { x: u8 }, B(u8) } };
        assert!(try_expand(&input).is_err());
    }

    #[test]
    fn test_rejects_conflicting_sides() {
        let input: DeriveInput = parse_quote! {
            enum E { #[either(left)] A(u8), #[either(left)] B(u8) }
        };
        let err = try_expand(&input).unwrap_err();
        assert!(err.to_string().contains("same `either` side"));
    }

    #[test]
    fn test_rejects_two_sides_in_one_attribute() {
        let input: DeriveInput = parse_quote! {
            enum E { #[either(left, right)] A(u8), B(u8) }
        };
        assert!(try_expand(&input).is_err());
    }
}
