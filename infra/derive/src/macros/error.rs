use fxhash::FxHashSet;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{
    Attribute, Data, DeriveInput, Field, Fields, GenericArgument, Ident, PathArguments, Type,
    Variant,
};

struct ErrorVariant<'a> {
    ident: &'a Ident,
    source: Option<&'a Field>,
    has_context: bool,
    cfg: Vec<&'a Attribute>,
}

impl<'a> ErrorVariant<'a> {
    fn parse(variant: &'a Variant) -> syn::Result<Self> {
        let Fields::Named(fields) = &variant.fields else {
            return Err(syn::Error::new_spanned(
                variant,
                "swb_error requires named fields for source/context handling",
            ));
        };

        let mut has_context = false;
        for field in &fields.named {
            if !field.ident.as_ref().is_some_and(|ident| ident == "context") {
                continue;
            }
            if !is_context_type(&field.ty) {
                return Err(syn::Error::new_spanned(
                    &field.ty,
                    "context field must be Option<Cow<'static, str>>",
                ));
            }
            has_context = true;
        }

        let source = fields.named.iter().find(|field| is_source_field(field));
        if source.is_some() && !has_context {
            return Err(syn::Error::new_spanned(
                &variant.ident,
                "swb_error requires `context: Option<Cow<'static, str>>` for variants with a source",
            ));
        }

        Ok(Self {
            ident: &variant.ident,
            source,
            has_context,
            cfg: variant.attrs.iter().filter(|attr| attr.path().is_ident("cfg")).collect(),
        })
    }

    fn is_internal(&self) -> bool {
        self.ident == "Internal"
    }
}

pub fn expand(input: DeriveInput) -> TokenStream {
    expand_enum(&input).unwrap_or_else(syn::Error::into_compile_error)
}

fn expand_enum(input: &DeriveInput) -> syn::Result<TokenStream> {
    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(&input.ident, "swb_error can only be applied to enums"));
    };
    let variants =
        data.variants.iter().map(ErrorVariant::parse).collect::<syn::Result<Vec<_>>>()?;

    let name = &input.ident;
    let ext = format_ident!("{name}Ext");

    let derives = missing_derives(input)?;
    let context_trait = context_trait(name, &ext, &variants);
    let source_impls = variants
        .iter()
        .filter(|v| !v.is_internal())
        .filter_map(|v| source_impls(name, &ext, v));
    let internal_impls = variants.iter().find(|v| v.is_internal()).map(|v| internal_impls(name, v));

    Ok(quote! {
        #[allow(non_shorthand_field_patterns)]
        #derives
        #input

        #context_trait
        #(#source_impls)*
        #internal_impls

        #[allow(dead_code)]
        fn format_context(context: &Option<std::borrow::Cow<'static, str>>) -> std::borrow::Cow<'static, str> {
            context.as_ref().map_or(std::borrow::Cow::Borrowed(""), |c| std::borrow::Cow::Owned(format!(" ({c})")))
        }
    })
}

fn context_trait(name: &Ident, ext: &Ident, variants: &[ErrorVariant<'_>]) -> TokenStream {
    let arms = variants.iter().filter(|v| v.has_context).map(|v| {
        let ErrorVariant { ident, cfg, .. } = v;
        quote! { #(#cfg)* #name::#ident { context: slot, .. } => *slot = Some(context.into()), }
    });

    quote! {
        pub trait #ext<T> {
            fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> ::core::result::Result<T, #name>;
        }

        #[automatically_derived]
        impl<T> #ext<T> for ::core::result::Result<T, #name> {
            #[inline]
            #[allow(unreachable_patterns, unused_variables)]
            fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> Self {
                self.map_err(|mut err| {
                    match &mut err {
                        #(#arms)*
                        _ => {}
                    }
                    err
                })
            }
        }
    }
}

fn source_impls(name: &Ident, ext: &Ident, variant: &ErrorVariant<'_>) -> Option<TokenStream> {
    let field = variant.source?;
    let binding = field.ident.as_ref()?;
    let ty = &field.ty;
    let ErrorVariant { ident, cfg, .. } = variant;

    Some(quote! {
        #(#cfg)*
        #[automatically_derived]
        impl From<#ty> for #name {
            #[inline]
            fn from(#binding: #ty) -> Self { Self::#ident { #binding, context: None } }
        }

        #(#cfg)*
        #[automatically_derived]
        impl<T> #ext<T> for ::core::result::Result<T, #ty> {
            #[inline]
            fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> ::core::result::Result<T, #name> {
                self.map_err(|#binding| #name::#ident { #binding, context: Some(context.into()) })
            }
        }
    })
}

fn internal_impls(name: &Ident, variant: &ErrorVariant<'_>) -> TokenStream {
    let cfg = &variant.cfg;

    quote! {
        #(#cfg)*
        #[automatically_derived]
        impl From<&'static str> for #name {
            #[inline]
            fn from(s: &'static str) -> Self { Self::Internal { message: std::borrow::Cow::Borrowed(s), context: None } }
        }

        #(#cfg)*
        #[automatically_derived]
        impl From<String> for #name {
            #[inline]
            fn from(s: String) -> Self { Self::Internal { message: std::borrow::Cow::Owned(s), context: None } }
        }
    }
}

fn missing_derives(input: &DeriveInput) -> syn::Result<TokenStream> {
    let mut derived = FxHashSet::default();
    for attr in input.attrs.iter().filter(|attr| attr.path().is_ident("derive")) {
        attr.parse_nested_meta(|meta| {
            if let Some(segment) = meta.path.segments.last() {
                derived.insert(segment.ident.to_string());
            }
            Ok(())
        })?;
    }

    let mut missing = Vec::new();
    if !derived.contains("Debug") {
        missing.push(quote! { Debug });
    }
    if !derived.contains("Error") {
        missing.push(quote! { ::thiserror::Error });
    }

    Ok(if missing.is_empty() { TokenStream::new() } else { quote! { #[derive(#(#missing),*)] } })
}

fn is_source_field(field: &Field) -> bool {
    field.ident.as_ref().is_some_and(|ident| ident == "source")
        || field.attrs.iter().any(|attr| attr.path().is_ident("source"))
}

/// Matches `Option<Cow<'static, str>>`, with or without path qualifiers.
fn is_context_type(ty: &Type) -> bool {
    let Some((ident, args)) = last_segment(ty) else {
        return false;
    };
    if ident != "Option" {
        return false;
    }
    let [GenericArgument::Type(inner)] = args.as_slice() else {
        return false;
    };
    let Some((ident, args)) = last_segment(inner) else {
        return false;
    };
    if ident != "Cow" {
        return false;
    }
    let [GenericArgument::Lifetime(lifetime), GenericArgument::Type(target)] = args.as_slice()
    else {
        return false;
    };
    lifetime.ident == "static" && last_segment(target).is_some_and(|(ident, _)| ident == "str")
}

fn last_segment(ty: &Type) -> Option<(&Ident, Vec<&GenericArgument>)> {
    let Type::Path(path) = ty else {
        return None;
    };
    let segment = path.path.segments.last()?;
    let args = match &segment.arguments {
        PathArguments::AngleBracketed(bracketed) => bracketed.args.iter().collect(),
        _ => Vec::new(),
    };
    Some((&segment.ident, args))
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn expand_err(input: DeriveInput) -> String {
        match expand_enum(&input) {
            Ok(_) => panic!("expansion should fail"),
            Err(err) => err.to_string(),
        }
    }

    #[test]
    fn rejects_structs() {
        let input = parse_quote! { pub struct NotAnEnum { message: String } };
        assert_eq!(expand_err(input), "swb_error can only be applied to enums");
    }

    #[test]
    fn rejects_tuple_variants() {
        let input = parse_quote! {
            pub enum DemoError {
                #[error("IO error: {0}")]
                Io(std::io::Error),
            }
        };
        assert!(expand_err(input).contains("named fields"));
    }

    #[test]
    fn rejects_source_without_context() {
        let input = parse_quote! {
            pub enum DemoError {
                #[error("IO error: {source}")]
                Io { #[source] source: std::io::Error },
            }
        };
        assert!(expand_err(input).contains("requires `context"));
    }

    #[test]
    fn rejects_badly_typed_context() {
        let input = parse_quote! {
            pub enum DemoError {
                #[error("IO error: {source}")]
                Io { source: std::io::Error, context: Option<String> },
            }
        };
        assert_eq!(expand_err(input), "context field must be Option<Cow<'static, str>>");
    }

    #[test]
    fn accepts_qualified_context_type() {
        let ty: Type = parse_quote! { std::option::Option<std::borrow::Cow<'static, str>> };
        assert!(is_context_type(&ty));

        let ty: Type = parse_quote! { Option<Cow<'a, str>> };
        assert!(!is_context_type(&ty));
    }

    #[test]
    fn skips_derives_already_present() {
        let input: DeriveInput = parse_quote! {
            #[derive(Debug)]
            pub enum DemoError {
                #[error("boom")]
                Boom { context: Option<Cow<'static, str>> },
            }
        };
        let derives = missing_derives(&input).expect("well-formed derive").to_string();
        assert!(!derives.contains("Debug"));
        assert!(derives.contains("thiserror"));
    }

    #[test]
    fn rejects_malformed_derive() {
        let input = parse_quote! {
            #[derive = "Debug"]
            pub enum DemoError {
                #[error("boom")]
                Boom { context: Option<Cow<'static, str>> },
            }
        };
        assert!(!expand_err(input).is_empty());
    }
}
