use crate::{
    color::Color,
    common::{Identifier, QuoteKind},
    serializer::serialize_value,
    unit::Unit,
};

pub(crate) use number::Number;

mod number;

/// The result of evaluating an expression.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Value {
    /// A number and its (possibly empty) unit
    Dimension(Number, Unit),
    Color(Color),
    /// String contents plus whether the source spelled them quoted
    String(String, QuoteKind),
    /// A bare word that resolved to no variable and passes through verbatim
    Ident(Identifier),
    /// A space-separated list
    List(Vec<Value>),
}

impl Value {
    /// The value as it will appear in the emitted CSS
    pub fn to_css_string(&self) -> String {
        serialize_value(self)
    }

    /// The value as it was written in source, keeping string quotes. Used
    /// when a function call is reassembled into pass-through text and in
    /// error messages.
    pub fn inspect(&self) -> String {
        match self {
            Value::String(s, QuoteKind::Quoted) => format!("\"{}\"", s),
            Value::List(items) => items
                .iter()
                .map(Value::inspect)
                .collect::<Vec<_>>()
                .join(" "),
            _ => self.to_css_string(),
        }
    }
}
