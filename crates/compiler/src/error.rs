use std::{error::Error as StdError, fmt, io, sync::Arc};

use codemap::{Span, SpanLoc};

pub type MossResult<T> = Result<T, Box<MossError>>;

/// `MossError`s can be either a structured error specific to `moss` or an
/// `io::Error`.
///
/// In the former case, the best way to interact with the error is to format it
/// with `Display` or to inspect [`MossError::kind`] and [`MossError::location`].
#[derive(Debug, Clone)]
pub struct MossError {
    kind: MossErrorKind,
}

/// The broad category of a compilation failure.
///
/// Every error the compiler itself produces carries one of these; the source
/// position is attached separately and resolved against the file at the public
/// API boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A malformed literal, e.g. a hex color with an illegal digit count
    Lex,
    /// A grammar violation: unexpected token, bad indentation, an empty block
    Syntax,
    /// A name used as an arithmetic operand that resolves to nothing
    UndefinedVariable,
    /// Arithmetic over two different non-empty units
    UnitMismatch,
    /// An operation the value types do not support, e.g. division by zero
    Arithmetic,
    /// A mixin call whose argument count its parameter list cannot satisfy
    MixinArity,
    /// An error reading input, only ever produced by the I/O wrapper
    Io,
}

#[derive(Debug, Clone)]
enum MossErrorKind {
    /// A raw error still carrying a `Span` rather than a resolved location
    Raw(ErrorKind, String, Span),
    Formatted {
        kind: ErrorKind,
        message: String,
        loc: SpanLoc,
    },
    Io(Arc<io::Error>),
}

impl MossError {
    pub(crate) fn new(kind: ErrorKind, message: impl Into<String>, span: Span) -> Box<Self> {
        Box::new(MossError {
            kind: MossErrorKind::Raw(kind, message.into(), span),
        })
    }

    pub(crate) fn from_loc(kind: ErrorKind, message: String, loc: SpanLoc) -> Self {
        MossError {
            kind: MossErrorKind::Formatted { kind, message, loc },
        }
    }

    /// Resolve a raw error's span against the `CodeMap` it was produced
    /// from. Errors that already carry a location (or have none) are
    /// returned unchanged.
    pub(crate) fn resolve_span(self, map: &codemap::CodeMap) -> MossError {
        match self.kind {
            MossErrorKind::Raw(kind, message, span) => {
                MossError::from_loc(kind, message, map.look_up_span(span))
            }
            kind => MossError { kind },
        }
    }

    /// The category of this error
    pub fn kind(&self) -> ErrorKind {
        match &self.kind {
            MossErrorKind::Raw(kind, ..) | MossErrorKind::Formatted { kind, .. } => *kind,
            MossErrorKind::Io(..) => ErrorKind::Io,
        }
    }

    /// The resolved source location of this error, when one exists.
    ///
    /// Errors returned from the public entry points always carry a location
    /// unless they are I/O errors.
    pub fn location(&self) -> Option<&SpanLoc> {
        match &self.kind {
            MossErrorKind::Formatted { loc, .. } => Some(loc),
            _ => None,
        }
    }
}

impl fmt::Display for MossError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            MossErrorKind::Raw(_, message, _) | MossErrorKind::Formatted { message, .. } => {
                write!(f, "Error: {}", message)
            }
            MossErrorKind::Io(err) => write!(f, "Error: {}", err),
        }
    }
}

impl StdError for MossError {}

impl From<(&str, Span)> for Box<MossError> {
    fn from((message, span): (&str, Span)) -> Box<MossError> {
        MossError::new(ErrorKind::Syntax, message, span)
    }
}

impl From<(String, Span)> for Box<MossError> {
    fn from((message, span): (String, Span)) -> Box<MossError> {
        MossError::new(ErrorKind::Syntax, message, span)
    }
}

impl From<io::Error> for Box<MossError> {
    fn from(error: io::Error) -> Box<MossError> {
        Box::new(MossError {
            kind: MossErrorKind::Io(Arc::new(error)),
        })
    }
}
