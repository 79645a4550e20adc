use std::sync::Arc;

use codemap::Spanned;

use crate::{
    ast::{AstExpr, BinaryOpExpr, FunctionCallExpr},
    color::Color,
    common::{BinaryOp, Identifier},
    error::MossResult,
    unit::Unit,
    utils::is_name_start,
    value::Number,
    Token,
};

use super::{BaseParser, StylesheetParser};

/// Parses the expression grammar: space lists of sums of products of
/// operands.
///
/// `+` and `-` are ambiguous between binary arithmetic and a signed literal
/// starting the next list element. The rule, matching how stylesheets are
/// actually written: an operator glued to its left operand (`2+4`) or
/// surrounded by whitespace (`5 - 1`) is binary; one preceded by whitespace
/// but glued to what follows (`0 -10px`) starts a new list element.
pub(crate) struct ValueParser;

impl ValueParser {
    pub fn parse_expression(parser: &mut StylesheetParser) -> MossResult<Spanned<AstExpr>> {
        let start = parser.toks.cursor();
        let mut items = vec![Self::parse_sum(parser)?];

        loop {
            parser.spaces();

            if !Self::looking_at_operand(parser) {
                break;
            }

            items.push(Self::parse_sum(parser)?);
        }

        if items.len() == 1 {
            // a bare expression rather than a list
            match items.pop() {
                Some(single) => Ok(single),
                None => unreachable!(),
            }
        } else {
            let span = parser.toks.span_from(start);
            Ok(Spanned {
                node: AstExpr::List(items),
                span,
            })
        }
    }

    fn parse_sum(parser: &mut StylesheetParser) -> MossResult<Spanned<AstExpr>> {
        let start = parser.toks.cursor();
        let mut lhs = Self::parse_product(parser)?;

        loop {
            let whitespace_before = parser.spaces();

            let op = match parser.toks.peek() {
                Some(Token { kind: '+', .. }) => BinaryOp::Plus,
                Some(Token { kind: '-', .. }) => BinaryOp::Minus,
                _ => break,
            };

            if whitespace_before && Self::starts_signed_operand(parser) {
                // the sign belongs to the next list element
                break;
            }

            parser.toks.next();
            parser.spaces();
            let rhs = Self::parse_product(parser)?;

            let span = parser.toks.span_from(start);
            lhs = Spanned {
                node: AstExpr::BinaryOp(Arc::new(BinaryOpExpr { lhs, op, rhs })),
                span,
            };
        }

        Ok(lhs)
    }

    /// Whether the `+`/`-` at the cursor is glued to an operand on its right
    fn starts_signed_operand(parser: &StylesheetParser) -> bool {
        match parser.toks.peek_n(1) {
            Some(tok) => tok.kind.is_ascii_digit() || tok.kind == '.' || is_name_start(tok.kind),
            None => false,
        }
    }

    fn parse_product(parser: &mut StylesheetParser) -> MossResult<Spanned<AstExpr>> {
        let start = parser.toks.cursor();
        let mut lhs = Self::parse_operand(parser)?;

        loop {
            parser.spaces();

            let op = match parser.toks.peek() {
                Some(Token { kind: '*', .. }) => BinaryOp::Mul,
                Some(Token { kind: '/', .. }) => BinaryOp::Div,
                _ => break,
            };

            parser.toks.next();
            parser.spaces();
            let rhs = Self::parse_operand(parser)?;

            let span = parser.toks.span_from(start);
            lhs = Spanned {
                node: AstExpr::BinaryOp(Arc::new(BinaryOpExpr { lhs, op, rhs })),
                span,
            };
        }

        Ok(lhs)
    }

    fn looking_at_operand(parser: &StylesheetParser) -> bool {
        match parser.toks.peek() {
            Some(Token { kind, .. }) => match kind {
                '(' | '"' | '\'' | '#' => true,
                '.' => matches!(
                    parser.toks.peek_n(1),
                    Some(tok) if tok.kind.is_ascii_digit()
                ),
                '-' | '+' => matches!(
                    parser.toks.peek_n(1),
                    Some(tok) if tok.kind.is_ascii_digit() || tok.kind == '.' || is_name_start(tok.kind)
                ),
                c if c.is_ascii_digit() => true,
                c => is_name_start(c),
            },
            None => false,
        }
    }

    fn parse_operand(parser: &mut StylesheetParser) -> MossResult<Spanned<AstExpr>> {
        parser.spaces();
        let start = parser.toks.cursor();

        match parser.toks.peek() {
            Some(Token { kind: '(', .. }) => {
                parser.toks.next();
                parser.spaces();
                let inner = Self::parse_expression(parser)?;
                parser.spaces();
                parser.expect_char(')')?;

                let span = parser.toks.span_from(start);
                Ok(Spanned {
                    node: AstExpr::Paren(Arc::new(inner)),
                    span,
                })
            }
            Some(Token { kind: '#', .. }) => Self::parse_hex_color(parser),
            Some(Token {
                kind: '"' | '\'', ..
            }) => {
                let string = parser.parse_string()?;
                let span = parser.toks.span_from(start);
                Ok(Spanned {
                    node: AstExpr::String(string),
                    span,
                })
            }
            Some(tok) if tok.kind.is_ascii_digit() || tok.kind == '.' => {
                Self::parse_number(parser)
            }
            Some(Token {
                kind: '+' | '-', ..
            }) if matches!(
                parser.toks.peek_n(1),
                Some(tok) if tok.kind.is_ascii_digit() || tok.kind == '.'
            ) =>
            {
                Self::parse_number(parser)
            }
            Some(tok) if is_name_start(tok.kind) || tok.kind == '-' => {
                let name = Identifier::from(parser.parse_identifier()?);

                if parser.toks.next_char_is('(') {
                    let args = Self::parse_call_args(parser)?;
                    let span = parser.toks.span_from(start);
                    Ok(Spanned {
                        node: AstExpr::FunctionCall(FunctionCallExpr { name, args }),
                        span,
                    })
                } else {
                    let span = parser.toks.span_from(start);
                    Ok(Spanned {
                        node: AstExpr::Ident(name),
                        span,
                    })
                }
            }
            Some(..) | None => {
                Err(("Expected expression.", parser.toks.current_span()).into())
            }
        }
    }

    fn parse_call_args(
        parser: &mut StylesheetParser,
    ) -> MossResult<Vec<Spanned<AstExpr>>> {
        parser.expect_char('(')?;
        let mut args = Vec::new();

        loop {
            parser.spaces();

            if parser.scan_char(')') {
                break;
            }

            args.push(Self::parse_expression(parser)?);
            parser.spaces();

            if !parser.scan_char(',') {
                parser.expect_char(')')?;
                break;
            }
        }

        Ok(args)
    }

    fn parse_hex_color(parser: &mut StylesheetParser) -> MossResult<Spanned<AstExpr>> {
        let start = parser.toks.cursor();
        parser.expect_char('#')?;

        let mut digits = String::new();
        while let Some(tok) = parser.toks.peek() {
            if !tok.kind.is_ascii_hexdigit() {
                break;
            }

            digits.push(tok.kind);
            parser.toks.next();
        }

        let span = parser.toks.span_from(start);
        let color = Color::from_hex(&digits, span)?;

        Ok(Spanned {
            node: AstExpr::Color(color),
            span,
        })
    }

    fn parse_number(parser: &mut StylesheetParser) -> MossResult<Spanned<AstExpr>> {
        let start = parser.toks.cursor();

        let mut buffer = String::new();

        if let Some(Token {
            kind: kind @ ('+' | '-'),
            ..
        }) = parser.toks.peek()
        {
            buffer.push(kind);
            parser.toks.next();
        }

        while let Some(tok) = parser.toks.peek() {
            if !tok.kind.is_ascii_digit() {
                break;
            }

            buffer.push(tok.kind);
            parser.toks.next();
        }

        if parser.toks.next_char_is('.')
            && matches!(parser.toks.peek_n(1), Some(tok) if tok.kind.is_ascii_digit())
        {
            buffer.push('.');
            parser.toks.next();

            while let Some(tok) = parser.toks.peek() {
                if !tok.kind.is_ascii_digit() {
                    break;
                }

                buffer.push(tok.kind);
                parser.toks.next();
            }
        }

        let span = parser.toks.span_from(start);

        let n: f64 = match buffer.parse() {
            Ok(n) => n,
            Err(..) => return Err(("Expected digit.", span).into()),
        };

        let unit = Self::parse_unit(parser);
        let span = parser.toks.span_from(start);

        Ok(Spanned {
            node: AstExpr::Number {
                n: Number(n),
                unit,
            },
            span,
        })
    }

    fn parse_unit(parser: &mut StylesheetParser) -> Unit {
        if parser.scan_char('%') {
            return Unit::Percent;
        }

        let mut buffer = String::new();
        while let Some(tok) = parser.toks.peek() {
            if !tok.kind.is_alphabetic() {
                break;
            }

            buffer.push(tok.kind);
            parser.toks.next();
        }

        if buffer.is_empty() {
            Unit::None
        } else {
            Unit::from(buffer)
        }
    }
}
