use codemap::{Span, Spanned};

use crate::{common::Identifier, selector::SelectorList};

use super::{AstExpr, ParamList};

#[derive(Debug, Clone)]
pub(crate) struct StyleSheet {
    pub body: Vec<AstStmt>,
}

#[derive(Debug, Clone)]
pub(crate) enum AstStmt {
    VariableDecl(AstVariableDecl),
    RuleSet(AstRuleSet),
    Style(AstStyle),
    Mixin(AstMixin),
    Include(AstInclude),
}

/// `name = expr`, at the top level or inside a rule body
#[derive(Debug, Clone)]
pub(crate) struct AstVariableDecl {
    pub name: Identifier,
    pub value: Spanned<AstExpr>,
}

/// `selector, selector:` and its indented body
#[derive(Debug, Clone)]
pub(crate) struct AstRuleSet {
    pub selector: SelectorList,
    pub body: Vec<AstStmt>,
}

/// `name: expr` inside a rule body
#[derive(Debug, Clone)]
pub(crate) struct AstStyle {
    pub name: String,
    pub value: Spanned<AstExpr>,
    pub span: Span,
}

/// `@name(params):` and its indented body
#[derive(Debug, Clone)]
pub(crate) struct AstMixin {
    pub name: Identifier,
    pub name_span: Span,
    pub params: ParamList,
    pub body: Vec<AstStmt>,
}

/// `@name(args)` wherever a property or nested rule may appear
#[derive(Debug, Clone)]
pub(crate) struct AstInclude {
    pub name: Spanned<Identifier>,
    pub args: Vec<Spanned<AstExpr>>,
    pub span: Span,
}
