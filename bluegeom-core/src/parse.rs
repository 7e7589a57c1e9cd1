/// Text notation for selectors and component literals
use nom::{
    branch::alt,
    bytes::complete::tag_no_case,
    character::complete::{char, multispace0},
    combinator::{all_consuming, map, opt, value},
    sequence::{delimited, tuple},
    IResult,
};

use crate::error::{GeomError, Result};
use crate::precision::Precision;
use crate::selector::{Axis, Side};

/// Parse an axis name such as `x` or `YZ`, ignoring case
pub fn parse_axis(input: &str) -> Result<Axis> {
    finish(all_consuming(padded(axis))(input), "axis", input)
}

/// Parse a side name such as `left` or `VERTICAL`, ignoring case
pub fn parse_side(input: &str) -> Result<Side> {
    finish(all_consuming(padded(side))(input), "side", input)
}

/// Parse three components, e.g. `(1, 2, 3)` or `1.5,0,-2`.
///
/// Float literals spelled `NaN` are recognized and then rejected.
pub fn parse_triple<T: Precision>(input: &str) -> Result<[T; 3]> {
    let [x, y, z] = finish(all_consuming(enclosed(triple::<T>))(input), "triple", input)?;
    Ok([x.check("x")?, y.check("y")?, z.check("z")?])
}

/// Parse offset sides `left, right, top, bottom`, or one value for all four.
pub fn parse_offset(input: &str) -> Result<[i32; 4]> {
    finish(all_consuming(enclosed(sides))(input), "offset", input)
}

fn finish<O>(result: IResult<&str, O>, what: &str, input: &str) -> Result<O> {
    match result {
        Ok((_, out)) => Ok(out),
        Err(e) => {
            tracing::debug!(what, input, error = ?e, "rejected notation");
            Err(GeomError::InvalidArgument(format!(
                "malformed {}: {:?}",
                what, input
            )))
        }
    }
}

fn axis(input: &str) -> IResult<&str, Axis> {
    // Pairs first so "xy" is not read as "x" followed by garbage.
    alt((
        value(Axis::XY, tag_no_case("xy")),
        value(Axis::XZ, tag_no_case("xz")),
        value(Axis::YZ, tag_no_case("yz")),
        value(Axis::X, tag_no_case("x")),
        value(Axis::Y, tag_no_case("y")),
        value(Axis::Z, tag_no_case("z")),
    ))(input)
}

fn side(input: &str) -> IResult<&str, Side> {
    alt((
        value(Side::Left, tag_no_case("left")),
        value(Side::Right, tag_no_case("right")),
        value(Side::Top, tag_no_case("top")),
        value(Side::Bottom, tag_no_case("bottom")),
        value(Side::Vertical, tag_no_case("vertical")),
        value(Side::Horizontal, tag_no_case("horizontal")),
    ))(input)
}

fn separator(input: &str) -> IResult<&str, ()> {
    value((), tuple((multispace0, char(','), multispace0)))(input)
}

fn triple<T: Precision>(input: &str) -> IResult<&str, [T; 3]> {
    let (input, x) = T::literal(input)?;
    let (input, _) = separator(input)?;
    let (input, y) = T::literal(input)?;
    let (input, _) = separator(input)?;
    let (input, z) = T::literal(input)?;
    Ok((input, [x, y, z]))
}

fn four(input: &str) -> IResult<&str, [i32; 4]> {
    let (input, left) = i32::literal(input)?;
    let (input, _) = separator(input)?;
    let (input, right) = i32::literal(input)?;
    let (input, _) = separator(input)?;
    let (input, top) = i32::literal(input)?;
    let (input, _) = separator(input)?;
    let (input, bottom) = i32::literal(input)?;
    Ok((input, [left, right, top, bottom]))
}

fn sides(input: &str) -> IResult<&str, [i32; 4]> {
    alt((four, map(i32::literal, |v| [v; 4])))(input)
}

fn padded<'a, O, F>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    delimited(multispace0, inner, multispace0)
}

/// Surrounding whitespace and an optional pair of parentheses.
fn enclosed<'a, O, F>(mut inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    move |input: &'a str| {
        let (input, _) = multispace0(input)?;
        let (input, open) = opt(char('('))(input)?;
        let (input, _) = multispace0(input)?;
        let (input, out) = inner(input)?;
        let (input, _) = multispace0(input)?;
        let (input, _) = match open {
            Some(_) => char(')')(input)?,
            None => (input, ')'),
        };
        let (input, _) = multispace0(input)?;
        Ok((input, out))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_axis() {
        assert_eq!(parse_axis("x"), Ok(Axis::X));
        assert_eq!(parse_axis(" YZ "), Ok(Axis::YZ));
        assert_eq!(parse_axis("xZ"), Ok(Axis::XZ));
        assert!(parse_axis("XYZ").is_err());
        assert!(parse_axis("").is_err());
    }

    #[test]
    fn test_parse_side() {
        assert_eq!(parse_side("left"), Ok(Side::Left));
        assert_eq!(parse_side("Vertical"), Ok(Side::Vertical));
        assert!(parse_side("middle").is_err());
    }

    #[test]
    fn test_parse_triple_int() {
        let parsed = parse_triple::<i32>("(1, -2, 3)").unwrap();
        assert_eq!(parsed, [1, -2, 3]);

        let parsed = parse_triple::<i32>("4,5,6").unwrap();
        assert_eq!(parsed, [4, 5, 6]);

        assert!(parse_triple::<i32>("1.5, 2, 3").is_err());
        assert!(parse_triple::<i32>("(1, 2, 3").is_err());
        assert!(parse_triple::<i32>("1, 2").is_err());
    }

    #[test]
    fn test_parse_triple_float() {
        let parsed = parse_triple::<f32>(" (0.5, -1e2, 3) ").unwrap();
        assert_eq!(parsed, [0.5, -100.0, 3.0]);

        let parsed = parse_triple::<f64>("1.25,0,-2").unwrap();
        assert_eq!(parsed, [1.25, 0.0, -2.0]);
    }

    #[test]
    fn test_parse_triple_rejects_nan() {
        let err = parse_triple::<f64>("1, NaN, 3").unwrap_err();
        assert!(matches!(err, GeomError::InvalidArgument(_)));
    }

    #[test]
    fn test_parse_offset() {
        assert_eq!(parse_offset("1, 2, 3, 4"), Ok([1, 2, 3, 4]));
        assert_eq!(parse_offset("(7)"), Ok([7, 7, 7, 7]));
        assert!(parse_offset("1, 2").is_err());
        assert!(parse_offset("left").is_err());
    }
}
