pub(crate) use args::*;
pub(crate) use expr::*;
pub(crate) use mixin::Mixin;
pub(crate) use stmt::*;

mod args;
mod expr;
mod mixin;
mod stmt;
