//! Crate-specific error and result types.
//!
//! Nothing in the keydown dispatch path can fail. Errors only arise when a
//! host hands us free-form strings (key identifiers, `dir` attributes, etc)
//! which must be mapped onto the closed vocabularies of this crate.

use ::std::fmt::{self, Display};
use ::thiserror::Error as ThisError;

/// Result type returned by the fallible parsing functions of this crate.
pub type Result<T> = ::std::result::Result<T, Error>;

/// The underlying reason for an [`Error`].
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum ErrorKind {
    /// The string is not one of the key identifiers in the [`Key`] table.
    /// Matching is case-sensitive, so `"enter"` is not `"Enter"`.
    ///
    /// [`Key`]: crate::input::keyboard::Key
    #[error("unknown key identifier {0:?}")]
    UnknownKey(String),

    /// The string is neither `"ltr"` nor `"rtl"`.
    #[error("invalid direction {0:?}, expected \"ltr\" or \"rtl\"")]
    InvalidDirection(String),

    /// The string is neither `"horizontal"` nor `"vertical"`.
    #[error("invalid orientation {0:?}, expected \"horizontal\" or \"vertical\"")]
    InvalidOrientation(String),
}

/// Error type for the parsing functions of this crate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Error {
    /// What went wrong.
    kind: ErrorKind,

    /// An optional context information which describes what was happening
    /// at the time error.
    context: Option<String>,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { kind, context } = &self;

        if let Some(context) = context {
            write!(f, "{context}\nCaused by:\n    {kind}")
        } else {
            write!(f, "{kind}")
        }
    }
}

impl ::std::error::Error for Error {}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }
}

impl Error {
    /// Returns the reason for the error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Returns the context message attached to the error, if any.
    pub fn context_message(&self) -> Option<&str> {
        self.context.as_deref()
    }
}

/// A crate-private trait which allows context information to be attached to
/// fallible types.
pub(crate) trait Context<T> {
    /// Attach a context message to a fallible type and return crate error.
    fn context(self, ctx: impl AsRef<str>) -> Result<T>
    where
        Self: Sized;
}

impl<T> Context<T> for Result<T> {
    fn context(mut self, ctx: impl AsRef<str>) -> Result<T> {
        if let Err(err) = &mut self {
            err.context = Some(ctx.as_ref().to_owned());
        }
        self
    }
}

impl<T> Context<T> for ::std::result::Result<T, ErrorKind> {
    fn context(self, ctx: impl AsRef<str>) -> Result<T> {
        self.map_err(|kind| Error {
            kind,
            context: Some(ctx.as_ref().to_owned()),
        })
    }
}
