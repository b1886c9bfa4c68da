//! Exact numeric values extracted from literal text
//!
//! Comparison semantics require exact arithmetic: a literal is parsed into
//! an arbitrary-precision integer or an exact scaled decimal, never routed
//! through a machine float.

use std::cmp::Ordering;

use num_bigint::BigInt;
use num_traits::{Pow, Zero};

/// The kind of a numeric constant
///
/// Values of different kinds are never compared to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstantKind {
    Integer,
    Decimal,
}

/// An exact numeric constant
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumericConstant {
    Integer(BigInt),
    Decimal(DecimalValue),
}

impl NumericConstant {
    /// Parse an integer literal: decimal, `0x`/`0o`/`0b`, `_` separators.
    ///
    /// Leading zeros are tolerated (`007` equals `7`); unparseable text is
    /// simply not a constant.
    pub fn from_integer_literal(text: &str) -> Option<Self> {
        let cleaned = text.replace('_', "");
        // Literal text is unsigned; a sign would be a separate prefix node
        if cleaned.starts_with(['+', '-']) {
            return None;
        }
        let parsed = if let Some(hex) = cleaned
            .strip_prefix("0x")
            .or_else(|| cleaned.strip_prefix("0X"))
        {
            BigInt::parse_bytes(hex.as_bytes(), 16)
        } else if let Some(oct) = cleaned
            .strip_prefix("0o")
            .or_else(|| cleaned.strip_prefix("0O"))
        {
            BigInt::parse_bytes(oct.as_bytes(), 8)
        } else if let Some(bin) = cleaned
            .strip_prefix("0b")
            .or_else(|| cleaned.strip_prefix("0B"))
        {
            BigInt::parse_bytes(bin.as_bytes(), 2)
        } else {
            BigInt::parse_bytes(cleaned.as_bytes(), 10)
        };
        parsed.map(NumericConstant::Integer)
    }

    /// Parse a non-integer numeric literal (`1.5`, `.5`, `1.`, `1e10`).
    pub fn from_decimal_literal(text: &str) -> Option<Self> {
        DecimalValue::parse(text).map(NumericConstant::Decimal)
    }

    /// Negate the constant, preserving its kind
    pub fn negated(self) -> Self {
        match self {
            NumericConstant::Integer(value) => NumericConstant::Integer(-value),
            NumericConstant::Decimal(value) => NumericConstant::Decimal(value.negated()),
        }
    }

    /// The kind tag of this constant
    pub fn kind(&self) -> ConstantKind {
        match self {
            NumericConstant::Integer(_) => ConstantKind::Integer,
            NumericConstant::Decimal(_) => ConstantKind::Decimal,
        }
    }

    /// Exact three-way comparison, defined only within one kind.
    ///
    /// Returns `None` for mixed-kind operands: integer and decimal constants
    /// are deliberately not coerced into a common type.
    pub fn compare(&self, other: &NumericConstant) -> Option<Ordering> {
        match (self, other) {
            (NumericConstant::Integer(a), NumericConstant::Integer(b)) => Some(a.cmp(b)),
            (NumericConstant::Decimal(a), NumericConstant::Decimal(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

/// Exponent magnitudes past this bound make a literal "not a constant"
/// rather than materializing an arbitrarily large power of ten.
const MAX_EXPONENT: i64 = 10_000;

/// An exact decimal: `unscaled * 10^(-scale)`.
///
/// Normalized so every value has a unique representation: no trailing zeros
/// in `unscaled` while `scale > 0`, and zero is always `(0, 0)`. That makes
/// the derived equality agree with numeric equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalValue {
    unscaled: BigInt,
    scale: i64,
}

impl DecimalValue {
    /// Parse decimal literal text: point, trailing-point, leading-dot, and
    /// exponent forms, with `_` separators.
    pub fn parse(text: &str) -> Option<Self> {
        let cleaned = text.replace('_', "");

        let (mantissa, exponent) = match cleaned.find(['e', 'E']) {
            Some(idx) => {
                let (m, e) = cleaned.split_at(idx);
                let exponent: i64 = e[1..].parse().ok()?;
                if exponent.abs() > MAX_EXPONENT {
                    return None;
                }
                (m, exponent)
            }
            None => (cleaned.as_str(), 0),
        };

        let (int_part, frac_part) = match mantissa.find('.') {
            Some(idx) => {
                let (i, f) = mantissa.split_at(idx);
                (i, &f[1..])
            }
            None => (mantissa, ""),
        };

        let digits: String = [int_part, frac_part].concat();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let unscaled = BigInt::parse_bytes(digits.as_bytes(), 10)?;
        let scale = frac_part.len() as i64 - exponent;
        Some(Self::normalized(unscaled, scale))
    }

    /// Reduce to the canonical representation
    fn normalized(mut unscaled: BigInt, mut scale: i64) -> Self {
        if unscaled.is_zero() {
            return Self {
                unscaled,
                scale: 0,
            };
        }
        let ten = BigInt::from(10);
        while scale > 0 && (&unscaled % &ten).is_zero() {
            unscaled /= &ten;
            scale -= 1;
        }
        Self { unscaled, scale }
    }

    /// Negate the value
    pub fn negated(self) -> Self {
        Self {
            unscaled: -self.unscaled,
            scale: self.scale,
        }
    }

    /// Exact three-way comparison via scale alignment
    pub fn cmp(&self, other: &DecimalValue) -> Ordering {
        // Sign comparison first avoids aligning scales in the common case
        let sign_cmp = sign_of(&self.unscaled).cmp(&sign_of(&other.unscaled));
        if sign_cmp != Ordering::Equal {
            return sign_cmp;
        }

        match self.scale.cmp(&other.scale) {
            Ordering::Equal => self.unscaled.cmp(&other.unscaled),
            Ordering::Less => {
                // self has the smaller scale: scale it up to match
                let shift = (other.scale - self.scale) as u64;
                (&self.unscaled * pow10(shift)).cmp(&other.unscaled)
            }
            Ordering::Greater => {
                let shift = (self.scale - other.scale) as u64;
                self.unscaled.cmp(&(&other.unscaled * pow10(shift)))
            }
        }
    }
}

fn sign_of(value: &BigInt) -> i8 {
    match value.sign() {
        num_bigint::Sign::Minus => -1,
        num_bigint::Sign::NoSign => 0,
        num_bigint::Sign::Plus => 1,
    }
}

fn pow10(exponent: u64) -> BigInt {
    Pow::pow(BigInt::from(10), exponent)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(text: &str) -> NumericConstant {
        NumericConstant::from_integer_literal(text).unwrap()
    }

    fn dec(text: &str) -> NumericConstant {
        NumericConstant::from_decimal_literal(text).unwrap()
    }

    // ── integer literals ──────────────────────────────────────────────────

    #[test]
    fn test_integer_decimal() {
        assert_eq!(int("42"), NumericConstant::Integer(BigInt::from(42)));
        assert_eq!(int("0"), NumericConstant::Integer(BigInt::from(0)));
    }

    #[test]
    fn test_integer_radix_prefixes() {
        assert_eq!(int("0xff"), int("255"));
        assert_eq!(int("0XFF"), int("255"));
        assert_eq!(int("0o17"), int("15"));
        assert_eq!(int("0b1010"), int("10"));
    }

    #[test]
    fn test_integer_underscores_and_leading_zeros() {
        assert_eq!(int("1_000"), int("1000"));
        assert_eq!(int("007"), int("7"));
    }

    #[test]
    fn test_integer_larger_than_machine_words() {
        let a = int("1000000000000000000000000000000");
        let b = int("1000000000000000000000000000001");
        assert_eq!(a.compare(&b), Some(Ordering::Less));
        assert_ne!(a, b);
    }

    #[test]
    fn test_integer_invalid_returns_none() {
        assert!(NumericConstant::from_integer_literal("").is_none());
        assert!(NumericConstant::from_integer_literal("abc").is_none());
        assert!(NumericConstant::from_integer_literal("1.5").is_none());
    }

    // ── decimal literals ──────────────────────────────────────────────────

    #[test]
    fn test_decimal_forms() {
        assert_eq!(dec("1.5"), dec("1.50"));
        assert_eq!(dec(".5"), dec("0.5"));
        assert_eq!(dec("1."), dec("1.0"));
        assert_eq!(dec("1e3"), dec("1000.0"));
        assert_eq!(dec("1.5e-3"), dec("0.0015"));
        assert_eq!(dec("1_0.5"), dec("10.5"));
    }

    #[test]
    fn test_decimal_equality_is_by_value_not_spelling() {
        assert_eq!(dec("1.50"), dec("1.5"));
        assert_eq!(dec("0.0"), dec("0.000"));
        assert_eq!(dec("2.5e1"), dec("25.0"));
    }

    #[test]
    fn test_decimal_comparison() {
        assert_eq!(dec("1.5").compare(&dec("1.6")), Some(Ordering::Less));
        assert_eq!(dec("2.0").compare(&dec("1.9999")), Some(Ordering::Greater));
        assert_eq!(dec("0.1").compare(&dec("0.1")), Some(Ordering::Equal));

        // Signed values only arise through negation, never from literal text
        let minus_1_5 = dec("1.5").negated();
        let minus_1_4 = dec("1.4").negated();
        assert_eq!(minus_1_5.compare(&dec("1.5")), Some(Ordering::Less));
        assert_eq!(minus_1_5.compare(&minus_1_4), Some(Ordering::Less));
    }

    #[test]
    fn test_signed_text_is_not_a_literal() {
        assert!(NumericConstant::from_decimal_literal("-1.5").is_none());
        assert!(NumericConstant::from_integer_literal("-5").is_none());
    }

    #[test]
    fn test_decimal_precision_beyond_f64() {
        // These differ in the 20th significant digit; f64 would conflate them
        let a = dec("0.10000000000000000001");
        let b = dec("0.10000000000000000002");
        assert_eq!(a.compare(&b), Some(Ordering::Less));
    }

    #[test]
    fn test_decimal_huge_exponent_is_not_a_constant() {
        assert!(NumericConstant::from_decimal_literal("1e999999999").is_none());
        assert!(NumericConstant::from_decimal_literal("1e-999999999").is_none());
    }

    #[test]
    fn test_decimal_invalid_returns_none() {
        assert!(NumericConstant::from_decimal_literal("").is_none());
        assert!(NumericConstant::from_decimal_literal("abc").is_none());
        assert!(NumericConstant::from_decimal_literal("1.5j").is_none());
    }

    // ── negation and kinds ────────────────────────────────────────────────

    #[test]
    fn test_negation_preserves_kind() {
        let neg = int("3").negated();
        assert_eq!(neg.kind(), ConstantKind::Integer);
        assert_eq!(neg.compare(&int("3")), Some(Ordering::Less));

        let neg = dec("1.5").negated();
        assert_eq!(neg.kind(), ConstantKind::Decimal);
        assert_eq!(neg.compare(&dec("-1.5")), Some(Ordering::Equal));
    }

    #[test]
    fn test_mixed_kind_comparison_is_undefined() {
        assert_eq!(int("3").compare(&dec("3.0")), None);
        assert_eq!(dec("3.0").compare(&int("3")), None);
    }
}
