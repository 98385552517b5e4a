use chemf_error::Error;
use std::io;

/// Utility enum to package the errors that can stop a formula from being converted.
#[derive(Debug)]
pub enum ReplError {
    /// Errors found while reading the formula.
    Many(Vec<Error>),

    /// The formula could not be read from stdin.
    Io(io::Error),
}

impl ReplError {
    /// Report the errors in this [`ReplError`] to stderr.
    ///
    /// The `ariadne` crate's [`Report`] type actually does not have a `Display` implementation, so
    /// we can only use its `eprint` method to print to stderr.
    ///
    /// [`Report`]: https://docs.rs/ariadne/latest/ariadne/struct.Report.html
    pub fn report_to_stderr(&self, src_id: &str, input: &str) -> io::Result<()> {
        match self {
            Self::Many(errs) => errs.iter().try_for_each(|err| err.report_to_stderr(src_id, input)),
            Self::Io(err) => {
                eprintln!("error: {}", err);
                Ok(())
            },
        }
    }
}

impl From<Vec<Error>> for ReplError {
    fn from(errs: Vec<Error>) -> Self {
        Self::Many(errs)
    }
}

impl From<io::Error> for ReplError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
