use crate::evaluate::Scopes;

use super::AstMixin;

/// A mixin definition bound to the environment it was declared in.
///
/// The captured environment shares its frames with the declaring scope, which
/// is what makes mixins lexically scoped: the body sees the definition site's
/// variables, never the caller's.
#[derive(Debug, Clone)]
pub(crate) struct Mixin {
    pub declaration: AstMixin,
    pub env: Scopes,
}
