use codemap::Span;

use crate::{
    common::{BinaryOp, Identifier},
    error::{ErrorKind, MossError, MossResult},
    unit::combine_units,
    value::Value,
};

pub(crate) fn binary_op(left: Value, op: BinaryOp, right: Value, span: Span) -> MossResult<Value> {
    // a bare word in arithmetic means a variable lookup failed somewhere
    if let Some(name) = first_ident(&left, &right) {
        return Err(MossError::new(
            ErrorKind::UndefinedVariable,
            format!("Undefined variable: {}.", name),
            span,
        ));
    }

    match op {
        BinaryOp::Plus => add(left, right, span),
        BinaryOp::Minus => sub(left, right, span),
        BinaryOp::Mul => mul(left, right, span),
        BinaryOp::Div => div(left, right, span),
    }
}

fn first_ident(left: &Value, right: &Value) -> Option<Identifier> {
    match (left, right) {
        (Value::Ident(name), _) | (_, Value::Ident(name)) => Some(*name),
        _ => None,
    }
}

fn unsupported(left: &Value, op: BinaryOp, right: &Value, span: Span) -> Box<MossError> {
    MossError::new(
        ErrorKind::Arithmetic,
        format!(
            "Undefined operation \"{} {} {}\".",
            left.inspect(),
            op,
            right.inspect()
        ),
        span,
    )
}

fn add(left: Value, right: Value, span: Span) -> MossResult<Value> {
    Ok(match (left, right) {
        (Value::Dimension(n1, u1), Value::Dimension(n2, u2)) => {
            Value::Dimension(n1 + n2, combine_units(u1, u2, span)?)
        }
        (Value::Color(c1), Value::Color(c2)) => Value::Color(c1.channelwise(c2, |a, b| a + b)),
        (Value::String(s1, q), Value::String(s2, _)) => Value::String(format!("{}{}", s1, s2), q),
        (Value::String(s, q), right) => {
            Value::String(format!("{}{}", s, right.to_css_string()), q)
        }
        (left, Value::String(s, q)) => {
            Value::String(format!("{}{}", left.to_css_string(), s), q)
        }
        (left, right) => return Err(unsupported(&left, BinaryOp::Plus, &right, span)),
    })
}

fn sub(left: Value, right: Value, span: Span) -> MossResult<Value> {
    Ok(match (left, right) {
        (Value::Dimension(n1, u1), Value::Dimension(n2, u2)) => {
            Value::Dimension(n1 - n2, combine_units(u1, u2, span)?)
        }
        (Value::Color(c1), Value::Color(c2)) => Value::Color(c1.channelwise(c2, |a, b| a - b)),
        (left, right) => return Err(unsupported(&left, BinaryOp::Minus, &right, span)),
    })
}

fn mul(left: Value, right: Value, span: Span) -> MossResult<Value> {
    Ok(match (left, right) {
        (Value::Dimension(n1, u1), Value::Dimension(n2, u2)) => {
            Value::Dimension(n1 * n2, combine_units(u1, u2, span)?)
        }
        (Value::Color(c1), Value::Color(c2)) => Value::Color(c1.channelwise(c2, |a, b| a * b)),
        (left, right) => return Err(unsupported(&left, BinaryOp::Mul, &right, span)),
    })
}

fn div(left: Value, right: Value, span: Span) -> MossResult<Value> {
    let division_by_zero = || MossError::new(ErrorKind::Arithmetic, "Division by zero.", span);

    Ok(match (left, right) {
        (Value::Dimension(n1, u1), Value::Dimension(n2, u2)) => {
            if n2.is_zero() {
                return Err(division_by_zero());
            }

            Value::Dimension(n1 / n2, combine_units(u1, u2, span)?)
        }
        (Value::Color(c1), Value::Color(c2)) => {
            if c2.red() == 0 || c2.green() == 0 || c2.blue() == 0 {
                return Err(division_by_zero());
            }

            Value::Color(c1.channelwise(c2, |a, b| a / b))
        }
        (left, right) => return Err(unsupported(&left, BinaryOp::Div, &right, span)),
    })
}
