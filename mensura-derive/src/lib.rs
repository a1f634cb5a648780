//! Derive macro implementation used by `mensura-core`.
//!
//! `mensura-derive` is an implementation detail of this workspace. The `Unit` derive expands in
//! terms of `crate::Unit` and `crate::Conversion`, so it is intended to be used by `mensura-core`
//! (or by crates that expose an identical crate-root API).
//!
//! Most users should depend on `mensura` instead and use the predefined dimensions.
//!
//! # Generated impls
//!
//! For a unit enumeration `MyUnit`, the derive implements `crate::Unit for MyUnit`: the `BASE`
//! associated constant plus exhaustive `match`-based `conversion` and `symbol` methods.
//!
//! # Attributes
//!
//! The enum itself takes a required `#[unit(base = Variant)]` naming the base unit. Every variant
//! takes a required `#[unit(...)]` with:
//!
//! - `symbol = "m"`: displayed unit symbol
//! - exactly one conversion rule:
//!   - `ratio = 1000.0`: multiplicative factor from this unit to the base unit
//!   - `per_base = 0.001`: multiplicative factor from the base unit to this unit
//!   - `to_base = f, from_base = g`: function pair for affine conversions

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, Data, DeriveInput, Expr, Fields, Ident, LitStr, Token,
};

/// Derive `crate::Unit` for a per-dimension unit enumeration.
///
/// The derive must be paired with `#[unit(base = ...)]` on the enum and a `#[unit(...)]`
/// attribute on every variant providing `symbol` and one conversion rule.
///
/// This macro is intended for use by `mensura-core`.
#[proc_macro_derive(Unit, attributes(unit))]
pub fn derive_unit(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_unit_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_unit_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    let data = match &input.data {
        Data::Enum(data) => data,
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Unit can only be derived for enums",
            ));
        }
    };

    // Parse the enum-level #[unit(base = ...)] attribute
    let enum_attr = parse_enum_attribute(&input.attrs)?;
    let base = &enum_attr.base;

    if !data.variants.iter().any(|v| v.ident == *base) {
        return Err(syn::Error::new(
            base.span(),
            format!("`{}` is not a variant of `{}`", base, name),
        ));
    }

    let mut conversion_arms = Vec::new();
    let mut symbol_arms = Vec::new();

    for variant in &data.variants {
        let ident = &variant.ident;

        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                ident,
                "unit variants must not carry fields",
            ));
        }

        let attr = parse_variant_attribute(variant)?;
        let symbol = &attr.symbol;
        let rule = match &attr.rule {
            ConversionRule::Linear(factor) => quote! { crate::Conversion::Linear(#factor) },
            ConversionRule::PerBase(factor) => quote! { crate::Conversion::PerBase(#factor) },
            ConversionRule::Affine { to_base, from_base } => quote! {
                crate::Conversion::Affine { to_base: #to_base, from_base: #from_base }
            },
        };

        conversion_arms.push(quote! { Self::#ident => #rule, });
        symbol_arms.push(quote! { Self::#ident => #symbol, });
    }

    let expanded = quote! {
        impl crate::Unit for #name {
            const BASE: Self = Self::#base;

            fn conversion(self) -> crate::Conversion {
                match self {
                    #(#conversion_arms)*
                }
            }

            fn symbol(self) -> &'static str {
                match self {
                    #(#symbol_arms)*
                }
            }
        }
    };

    Ok(expanded)
}

/// Parsed contents of the enum-level `#[unit(base = ...)]` attribute.
#[derive(Debug)]
struct EnumAttribute {
    base: Ident,
}

impl Parse for EnumAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut base: Option<Ident> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "base" => {
                    base = Some(input.parse()?);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let base = base
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `base`"))?;

        Ok(EnumAttribute { base })
    }
}

/// Conversion rule selected by a variant's attribute.
#[derive(Debug)]
enum ConversionRule {
    Linear(Expr),
    PerBase(Expr),
    Affine { to_base: Expr, from_base: Expr },
}

/// Parsed contents of a variant-level `#[unit(...)]` attribute.
#[derive(Debug)]
struct VariantAttribute {
    symbol: LitStr,
    rule: ConversionRule,
}

impl Parse for VariantAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut symbol: Option<LitStr> = None;
        let mut ratio: Option<Expr> = None;
        let mut per_base: Option<Expr> = None;
        let mut to_base: Option<Expr> = None;
        let mut from_base: Option<Expr> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "symbol" => {
                    symbol = Some(input.parse()?);
                }
                "ratio" => {
                    ratio = Some(input.parse()?);
                }
                "per_base" => {
                    per_base = Some(input.parse()?);
                }
                "to_base" => {
                    to_base = Some(input.parse()?);
                }
                "from_base" => {
                    from_base = Some(input.parse()?);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let symbol = symbol
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `symbol`"))?;

        let rule = match (ratio, per_base, to_base, from_base) {
            (Some(factor), None, None, None) => ConversionRule::Linear(factor),
            (None, Some(factor), None, None) => ConversionRule::PerBase(factor),
            (None, None, Some(to_base), Some(from_base)) => {
                ConversionRule::Affine { to_base, from_base }
            }
            (None, None, Some(_), None) | (None, None, None, Some(_)) => {
                return Err(syn::Error::new(
                    input.span(),
                    "affine conversions require both `to_base` and `from_base`",
                ));
            }
            (None, None, None, None) => {
                return Err(syn::Error::new(
                    input.span(),
                    "missing conversion rule: expected `ratio`, `per_base`, or `to_base`/`from_base`",
                ));
            }
            _ => {
                return Err(syn::Error::new(
                    input.span(),
                    "conflicting conversion rules: use exactly one of `ratio`, `per_base`, or `to_base`/`from_base`",
                ));
            }
        };

        Ok(VariantAttribute { symbol, rule })
    }
}

fn parse_enum_attribute(attrs: &[Attribute]) -> syn::Result<EnumAttribute> {
    for attr in attrs {
        if attr.path().is_ident("unit") {
            return attr.parse_args::<EnumAttribute>();
        }
    }

    Err(syn::Error::new(
        proc_macro2::Span::call_site(),
        "missing #[unit(base = ...)] attribute",
    ))
}

fn parse_variant_attribute(variant: &syn::Variant) -> syn::Result<VariantAttribute> {
    for attr in &variant.attrs {
        if attr.path().is_ident("unit") {
            return attr.parse_args::<VariantAttribute>();
        }
    }

    Err(syn::Error::new_spanned(
        &variant.ident,
        format!("variant `{}` is missing its #[unit(...)] attribute", variant.ident),
    ))
}
