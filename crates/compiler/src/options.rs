use crate::{Logger, StdLogger};

pub(crate) const DEFAULT_INDENT_WIDTH: usize = 4;

/// Configuration for compilation
///
/// The simplest usage is `moss::Options::default()`; however, a builder
/// pattern is also exposed to offer more control.
#[derive(Debug)]
pub struct Options<'a> {
    pub(crate) logger: &'a dyn Logger,
    pub(crate) quiet: bool,
    pub(crate) indent_width: usize,
}

impl Default for Options<'_> {
    #[inline]
    fn default() -> Self {
        Self {
            logger: &StdLogger,
            quiet: false,
            indent_width: DEFAULT_INDENT_WIDTH,
        }
    }
}

impl<'a> Options<'a> {
    /// This option allows you to define how warnings should be handled
    ///
    /// By default, [`StdLogger`] is used, which writes all events to standard
    /// error.
    #[must_use]
    #[inline]
    pub fn logger(mut self, logger: &'a dyn Logger) -> Self {
        self.logger = logger;
        self
    }

    /// Silence all warnings, regardless of the configured logger
    ///
    /// By default, this value is `false` and warnings are emitted.
    #[must_use]
    #[inline]
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// The number of spaces used to indent declarations inside an emitted
    /// rule
    ///
    /// By default, this value is `4`.
    #[must_use]
    #[inline]
    pub const fn indent_width(mut self, indent_width: usize) -> Self {
        self.indent_width = indent_width;
        self
    }
}
