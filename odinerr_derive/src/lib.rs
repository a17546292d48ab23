//! The procedural macro behind `odinerr`'s `#[derive(ErrorCode)]`. Not public API.

use proc_macro2::{Literal, Span, TokenStream, TokenTree};
use quote::{quote, quote_spanned};
use venial::{Attribute, Enum, Item};

#[proc_macro_derive(ErrorCode, attributes(code, message))]
pub fn derive_error_code(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    match derive_impl(input.into()) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

struct DeriveError {
    span: Span,
    message: String,
}
impl DeriveError {
    fn new(span: Span, message: impl Into<String>) -> Self {
        DeriveError { span, message: message.into() }
    }

    fn into_compile_error(self) -> TokenStream {
        let message = self.message;
        quote_spanned!(self.span=> compile_error!(#message);)
    }
}

fn derive_impl(input: TokenStream) -> Result<TokenStream, DeriveError> {
    let item = venial::parse_item(input.clone())
        .map_err(|e| DeriveError::new(Span::call_site(), e.to_string()))?;
    match item {
        Item::Enum(e) => derive_enum(&e),
        _ => Err(DeriveError::new(
            first_span(input),
            "`ErrorCode` can only be derived for enums",
        )),
    }
}

fn derive_enum(e: &Enum) -> Result<TokenStream, DeriveError> {
    let name = &e.name;
    if e.generic_params.is_some() {
        return Err(DeriveError::new(name.span(), "`ErrorCode` cannot be derived for generic enums"));
    }
    if e.variants.inner.is_empty() {
        return Err(DeriveError::new(name.span(), "`ErrorCode` cannot be derived for empty enums"));
    }

    let type_name = name.to_string();
    let mut arms = Vec::new();
    for (variant, _) in &e.variants.inner {
        let variant_ident = &variant.name;
        let variant_name = variant_ident.to_string();

        let mut code = None;
        let mut message = None;
        for attr in &variant.attributes {
            let Some(path) = attr.get_single_path_segment() else { continue };
            if path == "code" {
                set_once(&mut code, attr, "code")?;
            } else if path == "message" {
                set_once(&mut message, attr, "message")?;
            }
        }

        let code = code.unwrap_or_else(|| Literal::string(&screaming_snake_case(&variant_name)));
        let message = match message {
            Some(msg) => quote!(::core::option::Option::Some(#msg)),
            None => quote!(::core::option::Option::None),
        };
        arms.push(quote! {
            #name::#variant_ident { .. } => {
                static INFO: ::odinerr::ErrorCodeInfo = ::odinerr::ErrorCodeInfo {
                    code: #code,
                    type_name: #type_name,
                    variant_name: #variant_name,
                    message: #message,
                };
                &INFO
            }
        });
    }

    Ok(quote! {
        impl ::odinerr::ErrorCode for #name {
            fn info(&self) -> &'static ::odinerr::ErrorCodeInfo {
                match self {
                    #(#arms)*
                }
            }
        }
    })
}

fn set_once(slot: &mut Option<Literal>, attr: &Attribute, name: &str) -> Result<(), DeriveError> {
    let span = attr.tk_hash.span();
    if slot.is_some() {
        return Err(DeriveError::new(span, format!("duplicate `#[{name}]` attribute")));
    }
    *slot = Some(string_value(attr, name)?);
    Ok(())
}

/// Returns the string literal in `#[name = "..."]`.
fn string_value(attr: &Attribute, name: &str) -> Result<Literal, DeriveError> {
    let expected = || format!("expected `#[{name} = \"...\"]`");
    match attr.get_value_tokens() {
        [TokenTree::Literal(lit)] if is_plain_string(lit) => Ok(lit.clone()),
        [tt, ..] => Err(DeriveError::new(tt.span(), expected())),
        [] => Err(DeriveError::new(attr.tk_hash.span(), expected())),
    }
}

// Raw strings and byte strings are rejected; a code has no use for either.
fn is_plain_string(lit: &Literal) -> bool {
    let repr = lit.to_string();
    repr.len() >= 2 && repr.starts_with('"') && repr.ends_with('"')
}

fn first_span(input: TokenStream) -> Span {
    input.into_iter().next().map_or_else(Span::call_site, |tt| tt.span())
}

/// Converts a variant name to `SCREAMING_SNAKE_CASE`, keeping acronyms together.
fn screaming_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c == '_' {
            if !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
            continue;
        }
        if c.is_uppercase() && i > 0 && !out.ends_with('_') {
            let prev = chars[i - 1];
            let next_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_lower)
            {
                out.push('_');
            }
        }
        out.extend(c.to_uppercase());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snake_case_words() {
        assert_eq!(screaming_snake_case("NotFound"), "NOT_FOUND");
        assert_eq!(screaming_snake_case("Timeout"), "TIMEOUT");
        assert_eq!(screaming_snake_case("A"), "A");
    }

    #[test]
    fn snake_case_acronyms() {
        assert_eq!(screaming_snake_case("HTTPTimeout"), "HTTP_TIMEOUT");
        assert_eq!(screaming_snake_case("BadHTTP"), "BAD_HTTP");
        assert_eq!(screaming_snake_case("IOError"), "IO_ERROR");
    }

    #[test]
    fn snake_case_digits_and_underscores() {
        assert_eq!(screaming_snake_case("Http2Reset"), "HTTP2_RESET");
        assert_eq!(screaming_snake_case("Not_Found"), "NOT_FOUND");
        assert_eq!(screaming_snake_case("ALREADY_DONE"), "ALREADY_DONE");
    }

    #[test]
    fn plain_strings_only() {
        assert!(is_plain_string(&Literal::string("E_PERM")));
        assert!(!is_plain_string(&Literal::u32_unsuffixed(3)));
        assert!(!is_plain_string(&Literal::byte_string(b"E_PERM")));
    }

    #[test]
    fn rejects_structs() {
        let input = quote!(struct NotAnEnum;);
        let err = derive_impl(input).err().map(|e| e.message);
        assert_eq!(err.as_deref(), Some("`ErrorCode` can only be derived for enums"));
    }

    #[test]
    fn rejects_empty_enums() {
        let err = derive_impl(quote!(enum Never {})).err().map(|e| e.message);
        assert_eq!(err.as_deref(), Some("`ErrorCode` cannot be derived for empty enums"));
    }

    #[test]
    fn rejects_duplicate_codes() {
        let input = quote! {
            enum Code {
                #[code = "A"]
                #[code = "B"]
                Twice,
            }
        };
        let err = derive_impl(input).err().map(|e| e.message);
        assert_eq!(err.as_deref(), Some("duplicate `#[code]` attribute"));
    }

    #[test]
    fn rejects_non_string_code() {
        let input = quote! {
            enum Code {
                #[code = 3]
                Three,
            }
        };
        let err = derive_impl(input).err().map(|e| e.message);
        assert_eq!(err.as_deref(), Some("expected `#[code = \"...\"]`"));
    }

    #[test]
    fn expands_default_and_custom_codes() {
        let input = quote! {
            enum StoreCode {
                NotFound,
                #[code = "E_PERM"]
                #[message = "permission denied"]
                Permission(u32),
            }
        };
        let out = derive_impl(input).ok().map(|t| t.to_string()).unwrap_or_default();
        assert!(out.contains("\"NOT_FOUND\""));
        assert!(out.contains("\"E_PERM\""));
        assert!(out.contains("\"permission denied\""));
        assert!(out.contains("\"Permission\""));
    }
}
