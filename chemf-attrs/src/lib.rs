mod error_kind;

use error_kind::ErrorKindTarget;
use proc_macro::TokenStream;
use quote::ToTokens;
use syn::{parse_macro_input, DeriveInput};

/// Derives the [`ErrorKind`] trait for the given struct.
///
/// This trait can be derived for any struct with named fields, or for unit structs. Each tag may
/// be given at most once, and `message` is required.
///
/// The information of the error can be customized using the `error` attribute by adding the
/// corresponding tags to it:
/// ```ignore
/// use chemf_attrs::ErrorKind;
/// use chemf_error::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(message = "unclosed group", labels = ["this bracket is never closed"])]
/// pub struct Foo;
/// ```
///
/// The following tags are available:
///
/// | Tag         | Description                                                                  |
/// | ----------- | ---------------------------------------------------------------------------- |
/// | `message`   | The message displayed at the top of the error when it is displayed.          |
/// | `labels`    | An array of label texts, one for each span of the error, in order.           |
/// | `help`      | Optional help text for the error, describing what the user can do to fix it. |
///
/// Each tag accepts an expression. For structs with named fields, the expression is evaluated
/// with references to the members of the struct in scope, so they can be used in the
/// expression (tuple structs are not supported).
///
/// The generated code refers to the `ariadne` and `chemf_error` crates, so both must be
/// dependencies of the crate using the derive.
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    match ErrorKindTarget::try_from(input) {
        Ok(target) => target.into_token_stream().into(),
        Err(err) => err.to_compile_error().into(),
    }
}
