use std::sync::Arc;

use codemap::Spanned;

use crate::{
    color::Color,
    common::{BinaryOp, Identifier},
    unit::Unit,
    value::Number,
};

/// An unevaluated expression, as written on the right-hand side of a property
/// or assignment.
#[derive(Debug, Clone)]
pub(crate) enum AstExpr {
    BinaryOp(Arc<BinaryOpExpr>),
    Number {
        n: Number,
        unit: Unit,
    },
    Color(Color),
    /// A quoted string, quotes stripped and escapes resolved
    String(String),
    /// A bare word: resolved against the scope chain at evaluation time,
    /// falling back to itself
    Ident(Identifier),
    FunctionCall(FunctionCallExpr),
    /// Two or more space-separated expressions
    List(Vec<Spanned<AstExpr>>),
    Paren(Arc<Spanned<AstExpr>>),
}

#[derive(Debug, Clone)]
pub(crate) struct BinaryOpExpr {
    pub lhs: Spanned<AstExpr>,
    pub op: BinaryOp,
    pub rhs: Spanned<AstExpr>,
}

/// A CSS function call such as `url("a.png")`.
///
/// The language defines no functions of its own; calls are evaluated by
/// evaluating each argument and reassembling the call for the output.
#[derive(Debug, Clone)]
pub(crate) struct FunctionCallExpr {
    pub name: Identifier,
    pub args: Vec<Spanned<AstExpr>>,
}
