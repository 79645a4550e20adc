pub(crate) use css_tree::CssRule;
pub(crate) use scope::Scopes;
pub(crate) use visitor::Visitor;

mod bin_op;
mod css_tree;
mod scope;
mod visitor;
