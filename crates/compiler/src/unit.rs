use std::fmt;

use codemap::Span;

use crate::error::{ErrorKind, MossError, MossResult};

/// The unit suffix carried by a numeric value.
///
/// Units are opaque tags: arithmetic never converts between them. Two values
/// may be combined when at most one of them carries a unit, or when both carry
/// the same one.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Unit {
    // absolute lengths
    Px,
    Mm,
    Cm,
    In,
    Q,
    Pt,
    Pc,

    // font-relative lengths
    Em,
    Rem,
    Ex,
    Ch,

    // viewport-relative lengths
    Vw,
    Vh,
    Vmin,
    Vmax,

    // angles
    Deg,
    Grad,
    Rad,
    Turn,

    // time
    S,
    Ms,

    // frequency
    Hz,
    Khz,

    // resolution
    Dpi,
    Dpcm,
    Dppx,

    Percent,

    /// Unknown unit, passed through to the output verbatim
    Unknown(String),

    /// Unitless
    None,
}

/// The unit of the result of arithmetic over `lhs` and `rhs`, or a
/// `UnitMismatch` error when the two are different and both non-empty.
pub(crate) fn combine_units(lhs: Unit, rhs: Unit, span: Span) -> MossResult<Unit> {
    match (lhs, rhs) {
        (Unit::None, rhs) => Ok(rhs),
        (lhs, Unit::None) => Ok(lhs),
        (lhs, rhs) if lhs == rhs => Ok(lhs),
        (lhs, rhs) => Err(MossError::new(
            ErrorKind::UnitMismatch,
            format!("Incompatible units {} and {}.", rhs, lhs),
            span,
        )),
    }
}

impl From<String> for Unit {
    fn from(unit: String) -> Self {
        match unit.to_ascii_lowercase().as_str() {
            "px" => Unit::Px,
            "mm" => Unit::Mm,
            "cm" => Unit::Cm,
            "in" => Unit::In,
            "q" => Unit::Q,
            "pt" => Unit::Pt,
            "pc" => Unit::Pc,
            "em" => Unit::Em,
            "rem" => Unit::Rem,
            "ex" => Unit::Ex,
            "ch" => Unit::Ch,
            "vw" => Unit::Vw,
            "vh" => Unit::Vh,
            "vmin" => Unit::Vmin,
            "vmax" => Unit::Vmax,
            "deg" => Unit::Deg,
            "grad" => Unit::Grad,
            "rad" => Unit::Rad,
            "turn" => Unit::Turn,
            "s" => Unit::S,
            "ms" => Unit::Ms,
            "hz" => Unit::Hz,
            "khz" => Unit::Khz,
            "dpi" => Unit::Dpi,
            "dpcm" => Unit::Dpcm,
            "dppx" => Unit::Dppx,
            "%" => Unit::Percent,
            _ => Unit::Unknown(unit),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Px => write!(f, "px"),
            Unit::Mm => write!(f, "mm"),
            Unit::Cm => write!(f, "cm"),
            Unit::In => write!(f, "in"),
            Unit::Q => write!(f, "q"),
            Unit::Pt => write!(f, "pt"),
            Unit::Pc => write!(f, "pc"),
            Unit::Em => write!(f, "em"),
            Unit::Rem => write!(f, "rem"),
            Unit::Ex => write!(f, "ex"),
            Unit::Ch => write!(f, "ch"),
            Unit::Vw => write!(f, "vw"),
            Unit::Vh => write!(f, "vh"),
            Unit::Vmin => write!(f, "vmin"),
            Unit::Vmax => write!(f, "vmax"),
            Unit::Deg => write!(f, "deg"),
            Unit::Grad => write!(f, "grad"),
            Unit::Rad => write!(f, "rad"),
            Unit::Turn => write!(f, "turn"),
            Unit::S => write!(f, "s"),
            Unit::Ms => write!(f, "ms"),
            Unit::Hz => write!(f, "Hz"),
            Unit::Khz => write!(f, "kHz"),
            Unit::Dpi => write!(f, "dpi"),
            Unit::Dpcm => write!(f, "dpcm"),
            Unit::Dppx => write!(f, "dppx"),
            Unit::Percent => write!(f, "%"),
            Unit::Unknown(s) => write!(f, "{}", s),
            Unit::None => Ok(()),
        }
    }
}
