//! Implementation of the collection-utils procedural macros.
//!
//! Use these through `collection-utils-macros`, which re-exports the crates the expanded code
//! refers to.

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{parse_macro_input, Ident, ItemFn, LitStr};

const LEVELS: [&str; 5] = ["TRACE", "DEBUG", "INFO", "WARN", "ERROR"];

/// Run a test with a `tracing` subscriber that writes to the test output.
///
/// The maximum level defaults to `DEBUG` and can be set with a string literal, for example
/// `#[test_traced("INFO")]`.
///
/// # Example
/// ```rust,ignore
/// use collection_utils_macros::test_traced;
/// use tracing::{debug, info};
///
/// #[test_traced("INFO")]
/// fn test_info_level() {
///     info!("This is an info log");
///     debug!("This is a debug log (won't be shown)");
///     assert_eq!(2 + 2, 4);
/// }
/// ```
#[proc_macro_attribute]
pub fn test_traced(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);

    let level = if attr.is_empty() {
        "DEBUG".to_string()
    } else {
        let literal = parse_macro_input!(attr as LitStr);
        let level = literal.value().to_uppercase();
        if !LEVELS.contains(&level.as_str()) {
            return syn::Error::new(
                literal.span(),
                format!("level must be one of {}", LEVELS.join(", ")),
            )
            .to_compile_error()
            .into();
        }
        level
    };
    let level = Ident::new(&level, Span::call_site());

    let attrs = &input.attrs;
    let vis = &input.vis;
    let sig = &input.sig;
    let block = &input.block;

    let expanded = quote! {
        #[test]
        #(#attrs)*
        #vis #sig {
            let subscriber = ::collection_utils_macros::tracing_subscriber::fmt()
                .with_test_writer()
                .with_max_level(::collection_utils_macros::tracing::Level::#level)
                .with_line_number(true)
                .finish();
            let dispatch = ::collection_utils_macros::tracing::Dispatch::new(subscriber);
            ::collection_utils_macros::tracing::dispatcher::with_default(&dispatch, || #block)
        }
    };
    TokenStream::from(expanded)
}
