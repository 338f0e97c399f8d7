#[cfg(feature = "std")]
use thiserror::Error;

#[cfg(feature = "std")]
use std::io;

/// Why a line of build info text was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatCause {
    /// A `mod` or `dep` line did not have 2 or 3 columns.
    ModuleColumns { got: usize },
    /// A `=>` line did not have exactly 3 columns.
    ReplaceColumns { got: usize },
    /// A `=>` line that does not directly follow a `mod` or `dep` line.
    OrphanReplace,
    /// A `path`, `mod`, `dep` or `=>` line in byte input is not UTF-8.
    /// Unrecognized lines are never decoded and cannot raise this.
    InvalidUtf8,
}

impl core::fmt::Display for FormatCause {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FormatCause::ModuleColumns { got } => {
                write!(f, "expected 2 or 3 columns; got {}", got)
            }
            FormatCause::ReplaceColumns { got } => {
                write!(f, "expected 3 columns for replacement; got {}", got)
            }
            FormatCause::OrphanReplace => f.write_str("replacement with no module on previous line"),
            FormatCause::InvalidUtf8 => f.write_str("invalid UTF-8"),
        }
    }
}

#[cfg(feature = "std")]
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("could not parse build info: line {line}: {cause}")]
    Format { line: usize, cause: FormatCause },
}

#[cfg(not(feature = "std"))]
#[derive(Debug)]
pub enum Error {
    Format { line: usize, cause: FormatCause },
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Format { line, cause } => {
                write!(f, "could not parse build info: line {}: {}", line, cause)
            }
        }
    }
}

impl Error {
    pub(crate) fn format(line: usize, cause: FormatCause) -> Self {
        Error::Format { line, cause }
    }

    /// 1-based line of the offending input, if this is a format error.
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Format { line, .. } => Some(*line),
            #[cfg(feature = "std")]
            Error::Io(_) => None,
        }
    }

    pub fn cause(&self) -> Option<FormatCause> {
        match self {
            Error::Format { cause, .. } => Some(*cause),
            #[cfg(feature = "std")]
            Error::Io(_) => None,
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
