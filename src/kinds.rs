//! Built-in value kinds: Integer, Word, Point, Fraction.

use std::cmp::Ordering;
use std::fmt;

use crate::errors::{ParseResult, ParseValueError};
use crate::value::TreeValue;

/// Machine integers are the Integer kind.
impl TreeValue for i64 {
    const TYPE_NAME: &'static str = "Integer";

    fn parse(text: &str) -> ParseResult<Self> {
        text.parse()
            .map_err(|_| ParseValueError::new(Self::TYPE_NAME, text, "expected an integer"))
    }

    fn example() -> Self {
        0
    }
}

/// Single word: non-empty, no whitespace.
///
/// Keeping the rendering delimiter-free lets the codec split value lines
/// on whitespace.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Word(String);

impl Word {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TreeValue for Word {
    const TYPE_NAME: &'static str = "Word";

    fn parse(text: &str) -> ParseResult<Self> {
        if text.is_empty() {
            return Err(ParseValueError::new(Self::TYPE_NAME, text, "empty input"));
        }
        if text.chars().any(char::is_whitespace) {
            return Err(ParseValueError::new(
                Self::TYPE_NAME,
                text,
                "whitespace is not allowed",
            ));
        }
        Ok(Self(text.to_string()))
    }

    fn example() -> Self {
        Self("word".to_string())
    }
}

/// Integer point on the plane, rendered as `x,y`.
///
/// Ordered by squared distance from the origin, ties broken by `(x, y)`
/// so order-equality coincides with structural equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    fn norm_squared(&self) -> u128 {
        let x = u128::from(self.x.unsigned_abs());
        let y = u128::from(self.y.unsigned_abs());
        x * x + y * y
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        self.norm_squared()
            .cmp(&other.norm_squared())
            .then_with(|| (self.x, self.y).cmp(&(other.x, other.y)))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl TreeValue for Point {
    const TYPE_NAME: &'static str = "Point";

    fn parse(text: &str) -> ParseResult<Self> {
        let invalid = |reason: &str| ParseValueError::new(Self::TYPE_NAME, text, reason);
        let (x, y) = text.split_once(',').ok_or_else(|| invalid("expected x,y"))?;
        if y.contains(',') {
            return Err(invalid("expected exactly two fields"));
        }
        let x = x.parse().map_err(|_| invalid("x is not an integer"))?;
        let y = y.parse().map_err(|_| invalid("y is not an integer"))?;
        Ok(Self { x, y })
    }

    fn example() -> Self {
        Self { x: 0, y: 0 }
    }
}

/// Rational with positive denominator, stored as entered (never reduced).
///
/// Comparison cross-multiplies exactly, so 1/2 and 2/4 are equal while
/// rendering differently. Rendered improper as `numer/denom`; parsing also
/// accepts the mixed form `w/n/d` meaning (w*d + n)/d.
#[derive(Debug, Clone, Copy)]
pub struct Fraction {
    numer: i64,
    denom: i64,
}

impl Fraction {
    /// Returns `None` when `denom` is zero or moving the sign onto the
    /// numerator overflows.
    pub fn new(numer: i64, denom: i64) -> Option<Self> {
        if denom == 0 {
            return None;
        }
        if denom < 0 {
            return Some(Self {
                numer: numer.checked_neg()?,
                denom: denom.checked_neg()?,
            });
        }
        Some(Self { numer, denom })
    }

    pub fn numer(&self) -> i64 {
        self.numer
    }

    pub fn denom(&self) -> i64 {
        self.denom
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = i128::from(self.numer) * i128::from(other.denom);
        let rhs = i128::from(other.numer) * i128::from(self.denom);
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Fraction {}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numer, self.denom)
    }
}

impl TreeValue for Fraction {
    const TYPE_NAME: &'static str = "Fraction";

    fn parse(text: &str) -> ParseResult<Self> {
        let invalid = |reason: &str| ParseValueError::new(Self::TYPE_NAME, text, reason);
        let int = |field: &str| {
            field
                .parse::<i64>()
                .map_err(|_| ParseValueError::new(Self::TYPE_NAME, text, "expected integer fields"))
        };
        let fields: Vec<&str> = text.split('/').collect();
        let (numer, denom) = match fields[..] {
            [n, d] => (int(n)?, int(d)?),
            [w, n, d] => {
                let (w, n, d) = (int(w)?, int(n)?, int(d)?);
                let numer = w
                    .checked_mul(d)
                    .and_then(|wd| wd.checked_add(n))
                    .ok_or_else(|| invalid("value out of range"))?;
                (numer, d)
            }
            _ => return Err(invalid("expected n/d or w/n/d")),
        };
        if denom == 0 {
            return Err(invalid("denominator must not be zero"));
        }
        Self::new(numer, denom).ok_or_else(|| invalid("value out of range"))
    }

    fn example() -> Self {
        Self { numer: 0, denom: 1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_normalizes_sign_onto_numerator() {
        let f = Fraction::new(1, -2).unwrap();
        assert_eq!((f.numer(), f.denom()), (-1, 2));
    }

    #[test]
    fn test_fraction_mixed_form_folds_whole_part() {
        let f = Fraction::parse("1/1/2").unwrap();
        assert_eq!(f.to_string(), "3/2");
    }

    #[test]
    fn test_fraction_equality_ignores_representation() {
        let half = Fraction::new(1, 2).unwrap();
        let quarters = Fraction::new(2, 4).unwrap();
        assert_eq!(half, quarters);
        assert_ne!(half.to_string(), quarters.to_string());
    }

    #[test]
    fn test_fraction_rejects_zero_denominator() {
        assert!(Fraction::parse("1/0").is_err());
        assert!(Fraction::new(1, 0).is_none());
    }

    #[test]
    fn test_point_rejects_extra_fields() {
        assert!(Point::parse("1,2,3").is_err());
        assert!(Point::parse("1").is_err());
    }

    #[test]
    fn test_point_distance_order_breaks_ties_structurally() {
        let a = Point::new(0, 5);
        let b = Point::new(3, 4);
        assert_eq!(a.norm_squared(), b.norm_squared());
        assert_eq!(a.cmp(&b), Ordering::Less, "equal distance falls back to coordinates");
        assert_ne!(a, b);
    }

    #[test]
    fn test_point_extreme_coordinates_compare_cleanly() {
        let far = Point::new(i64::MIN, i64::MIN);
        let near = Point::new(i64::MAX, i64::MAX);
        assert_eq!(far.cmp(&near), Ordering::Greater);
    }

    #[test]
    fn test_word_rejects_whitespace_and_empty() {
        assert!(Word::parse("").is_err());
        assert!(Word::parse("two words").is_err());
        assert!(Word::parse("word").is_ok());
    }
}
