//! `#[either(left)]` / `#[either(right)]` variant attribute parsing.

use syn::{Attribute, Ident};

/// Which `Either` side a variant was pinned to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SideAttr {
    Left,
    Right,
}

impl SideAttr {
    pub fn opposite(self) -> SideAttr {
        match self {
            SideAttr::Left => SideAttr::Right,
            SideAttr::Right => SideAttr::Left,
        }
    }
}

/// Read the `#[either(..)]` attribute of a variant, if present.
///
/// Rejects unknown keywords and repeated attributes.
pub fn parse_side_attr(attrs: &[Attribute]) -> syn::Result<Option<SideAttr>> {
    let mut found: Option<SideAttr> = None;

    for attr in attrs.iter().filter(|a| a.path().is_ident("either")) {
        let mut side = None;
        attr.parse_nested_meta(|meta| {
            if side.is_some() {
                return Err(meta.error("expected a single `left` or `right`"));
            }
            let ident: &Ident = meta
                .path
                .get_ident()
                .ok_or_else(|| meta.error("expected `left` or `right`"))?;
            side = Some(match ident.to_string().as_str() {
                "left" => SideAttr::Left,
                "right" => SideAttr::Right,
                _ => return Err(meta.error("expected `left` or `right`")),
            });
            Ok(())
        })?;

        let side = side.ok_or_else(|| syn::Error::new_spanned(attr, "expected `left` or `right`"))?;
        if found.is_some() {
            return Err(syn::Error::new_spanned(attr, "duplicate `either` attribute"));
        }
        found = Some(side);
    }

    Ok(found)
}
