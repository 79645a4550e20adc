use codemap::{Span, Spanned};

use crate::{
    common::Identifier,
    error::{ErrorKind, MossError, MossResult},
};

use super::AstExpr;

#[derive(Debug, Clone)]
pub(crate) struct Param {
    pub name: Identifier,
    /// Evaluated in the mixin's definition scope when the caller omits the
    /// trailing argument
    pub default: Option<Spanned<AstExpr>>,
}

/// The declared parameters of a mixin, in order
#[derive(Debug, Clone)]
pub(crate) struct ParamList {
    pub params: Vec<Param>,
}

impl ParamList {
    /// Check that `num_args` positional arguments can be bound to this list,
    /// with defaults covering any trailing gap.
    pub fn verify(&self, num_args: usize, span: Span) -> MossResult<()> {
        if num_args > self.params.len() {
            let message = format!(
                "Only {} argument{} allowed, but {} {} passed.",
                self.params.len(),
                if self.params.len() == 1 { "" } else { "s" },
                num_args,
                if num_args == 1 { "was" } else { "were" },
            );
            return Err(MossError::new(ErrorKind::MixinArity, message, span));
        }

        for param in &self.params[num_args..] {
            if param.default.is_none() {
                return Err(MossError::new(
                    ErrorKind::MixinArity,
                    format!("Missing argument {}.", param.name),
                    span,
                ));
            }
        }

        Ok(())
    }
}
