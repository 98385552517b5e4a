//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages, and the [`Error`] type that ties a kind to the regions of a formula it came from.

// lets `#[derive(ErrorKind)]` resolve `chemf_error::EXPR` in this crate's own tests
#[cfg(test)]
extern crate self as chemf_error;

use ariadne::{Color, Report, ReportKind, Source};
use std::{fmt::Debug, io, ops::Range};

/// The color to use to highlight parts of a formula.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur while reading a formula.
pub trait ErrorKind: Debug + Send {
    /// Builds the report for this error. `report_kind` is [`ReportKind::Error`] for errors that
    /// stopped the formula from being read, and [`ReportKind::Warning`] for those that did not.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
        report_kind: ReportKind<'a>,
    ) -> Report<'a, (&'a str, Range<usize>)>;
}

/// Returns the source to render a report against. `ariadne` cannot place a label in an empty
/// source, so an empty input is rendered as a single space.
fn source(input: &str) -> Source {
    if input.is_empty() {
        Source::from(" ")
    } else {
        Source::from(input)
    }
}

/// An error associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<'a, (&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans, ReportKind::Error)
    }

    /// Build a report from this error kind, presenting it as a warning.
    pub fn build_warning<'a>(&self, src_id: &'a str) -> Report<'a, (&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans, ReportKind::Warning)
    }

    /// Report this error to stderr.
    ///
    /// The `ariadne` crate's [`Report`] type does not have a `Display` implementation, so we
    /// can only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self, src_id: &str, input: &str) -> io::Result<()> {
        self.build_report(src_id).eprint((src_id, source(input)))
    }

    /// Report this error to stderr as a warning.
    pub fn warn_to_stderr(&self, src_id: &str, input: &str) -> io::Result<()> {
        self.build_warning(src_id).eprint((src_id, source(input)))
    }

    /// Renders the report for this error into a [`String`], including any ANSI color codes.
    pub fn report_to_string(&self, src_id: &str, input: &str) -> io::Result<String> {
        let mut buf = Vec::new();
        self.build_report(src_id).write((src_id, source(input)), &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chemf_attrs::ErrorKind;

    #[derive(Debug, ErrorKind)]
    #[error(
        message = "unknown element",
        labels = [format!("`{}` is not an element", text)],
        help = "element symbols start with an uppercase letter",
    )]
    struct Unknown {
        text: String,
    }

    #[derive(Debug, ErrorKind)]
    #[error(message = "nothing to read", labels = [""])]
    struct Nothing;

    fn render(err: &Error, input: &str) -> String {
        let report = err.report_to_string("input", input).unwrap();
        String::from_utf8(strip_ansi_escapes::strip(report)).unwrap()
    }

    #[test]
    fn report_contains_message_label_and_help() {
        let err = Error::new(vec![2..4], Unknown { text: "Xx".to_string() });
        let out = render(&err, "H2XxO");

        assert!(out.contains("unknown element"), "{}", out);
        assert!(out.contains("`Xx` is not an element"), "{}", out);
        assert!(out.contains("element symbols start with an uppercase letter"), "{}", out);
    }

    #[test]
    fn report_without_label_text() {
        let err = Error::new(vec![0..0], Nothing);
        let out = render(&err, "");

        assert!(out.contains("nothing to read"), "{}", out);
    }

    #[test]
    fn labelled_report_for_empty_input() {
        let err = Error::new(vec![0..0], Unknown { text: String::new() });
        let out = render(&err, "");

        assert!(out.contains("unknown element"), "{}", out);
        assert!(out.contains("`` is not an element"), "{}", out);
    }

    #[test]
    fn warning_report() {
        let err = Error::new(vec![0..2], Unknown { text: "Xx".to_string() });
        let mut buf = Vec::new();
        err.build_warning("input")
            .write(("input", Source::from("Xx")), &mut buf)
            .unwrap();
        let out = String::from_utf8(strip_ansi_escapes::strip(buf)).unwrap();

        assert!(out.contains("Warning"), "{}", out);
        assert!(out.contains("unknown element"), "{}", out);
    }
}
