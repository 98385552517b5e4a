use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, ToTokens};
use syn::{punctuated::Punctuated, Attribute, Data, DeriveInput, Expr, Fields, Ident, MetaNameValue, Result, Token};

/// The tags of an `error` attribute.
struct Tags {
    message: Expr,
    labels: Option<Expr>,
    help: Option<Expr>,
}

impl Tags {
    /// Reads the tags from the `error` attribute among `attrs`.
    fn from_attrs(name: &Ident, attrs: &[Attribute]) -> Result<Self> {
        let Some(attr) = attrs.iter().find(|attr| attr.path().is_ident("error")) else {
            return Err(syn::Error::new_spanned(name, "missing `error` attribute"));
        };

        let (mut message, mut labels, mut help) = (None, None, None);
        let tags = attr.parse_args_with(Punctuated::<MetaNameValue, Token![,]>::parse_terminated)?;
        for tag in tags {
            let slot = if tag.path.is_ident("message") {
                &mut message
            } else if tag.path.is_ident("labels") {
                &mut labels
            } else if tag.path.is_ident("help") {
                &mut help
            } else {
                return Err(syn::Error::new_spanned(tag.path, "expected `message`, `labels` or `help`"));
            };

            if slot.replace(tag.value).is_some() {
                return Err(syn::Error::new_spanned(tag.path, "tag given more than once"));
            }
        }

        let Some(message) = message else {
            return Err(syn::Error::new_spanned(attr, "missing `message` tag in `error` attribute"));
        };
        Ok(Self { message, labels, help })
    }
}

/// A struct to derive [`ErrorKind`] for.
pub struct ErrorKindTarget {
    name: Ident,
    fields: Fields,
    tags: Tags,
}

impl TryFrom<DeriveInput> for ErrorKindTarget {
    type Error = syn::Error;

    fn try_from(input: DeriveInput) -> Result<Self> {
        let Data::Struct(data) = input.data else {
            return Err(syn::Error::new_spanned(input.ident, "`ErrorKind` can only be derived for structs"));
        };
        if let Fields::Unnamed(_) = data.fields {
            return Err(syn::Error::new_spanned(input.ident, "`ErrorKind` cannot be derived for tuple structs"));
        }

        let tags = Tags::from_attrs(&input.ident, &input.attrs)?;
        Ok(Self { name: input.ident, fields: data.fields, tags })
    }
}

impl ToTokens for ErrorKindTarget {
    fn to_tokens(&self, tokens: &mut TokenStream2) {
        let name = &self.name;

        // fields are bound by name so tag expressions can refer to them
        let bindings = match &self.fields {
            Fields::Named(fields) => {
                let names = fields.named.iter().map(|field| &field.ident);
                quote! { let #name { #(#names),* } = self; }
            },
            _ => quote! {},
        };

        let message = &self.tags.message;
        let labels = self.tags.labels
            .as_ref()
            .map_or_else(|| quote! { [""] }, |labels| quote! { #labels });
        let help = self.tags.help.as_ref().map(|help| quote! { builder.set_help(#help); });

        tokens.extend(quote! {
            impl ErrorKind for #name {
                fn build_report<'a>(
                    &self,
                    src_id: &'a str,
                    spans: &[std::ops::Range<usize>],
                    report_kind: ariadne::ReportKind<'a>,
                ) -> ariadne::Report<'a, (&'a str, std::ops::Range<usize>)> {
                    #[allow(unused_variables)]
                    #bindings

                    let start = spans.first().map_or(0, |span| span.start);
                    let labels = #labels
                        .into_iter()
                        .zip(spans.iter())
                        .map(|(text, span)| {
                            let label = ariadne::Label::new((src_id, span.clone()))
                                .with_color(chemf_error::EXPR);
                            if text.is_empty() {
                                label
                            } else {
                                label.with_message(text)
                            }
                        })
                        .collect::<Vec<_>>();

                    let mut builder = ariadne::Report::build(report_kind, src_id, start)
                        .with_message(#message)
                        .with_labels(labels);
                    #help
                    builder.finish()
                }
            }
        });
    }
}
