//! CSS length tokens
//!
//! The slide gap is specified as a CSS length (`10px`, `1rem`, `5%`). The
//! adapter may hand the token straight to a CSS engine, while native
//! renderers resolve it to pixels with [`Length::to_px`].

use std::fmt;
use std::str::FromStr;

use nom::{
    branch::alt,
    bytes::complete::tag_no_case,
    character::complete::{char, digit0, digit1, multispace0},
    combinator::{all_consuming, map_res, opt, recognize, value},
    sequence::{delimited, pair, tuple},
    IResult,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::SliderError;

/// Root font size used to resolve `rem` and `em` units
pub const ROOT_FONT_SIZE: f32 = 16.0;

/// A CSS length value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    /// Absolute pixels
    Px(f32),
    /// Multiple of the root font size
    Rem(f32),
    /// Multiple of the element font size (resolved against the root size)
    Em(f32),
    /// Percentage of the reference extent
    Pct(f32),
}

impl Default for Length {
    fn default() -> Self {
        Length::Px(10.0)
    }
}

impl Length {
    /// Resolve to pixels. `reference` is the extent percentages refer to.
    pub fn to_px(&self, reference: f32) -> f32 {
        let px = match *self {
            Length::Px(v) => v,
            Length::Rem(v) | Length::Em(v) => v * ROOT_FONT_SIZE,
            Length::Pct(v) => reference * v / 100.0,
        };
        if px.is_finite() {
            px
        } else {
            0.0
        }
    }

    /// Parse a length token such as `10px`, `1.5rem` or `0`
    pub fn parse(input: &str) -> Result<Self, SliderError> {
        match all_consuming(delimited(multispace0, parse_length, multispace0))(input) {
            Ok((_, length)) => Ok(length),
            Err(_) => Err(SliderError::InvalidLength(input.to_string())),
        }
    }
}

#[derive(Clone, Copy)]
enum Unit {
    Px,
    Rem,
    Em,
    Pct,
}

fn parse_unit(input: &str) -> IResult<&str, Unit> {
    alt((
        value(Unit::Px, tag_no_case("px")),
        value(Unit::Rem, tag_no_case("rem")),
        value(Unit::Em, tag_no_case("em")),
        value(Unit::Pct, char('%')),
    ))(input)
}

/// Signed decimal without exponent, so `2em` is not read as scientific notation
fn parse_number(input: &str) -> IResult<&str, f32> {
    map_res(
        recognize(tuple((
            opt(alt((char('+'), char('-')))),
            alt((
                recognize(pair(digit1, opt(pair(char('.'), digit0)))),
                recognize(pair(char('.'), digit1)),
            )),
        ))),
        str::parse::<f32>,
    )(input)
}

fn parse_length(input: &str) -> IResult<&str, Length> {
    let (input, number) = parse_number(input)?;
    let (input, unit) = opt(parse_unit)(input)?;

    // Unitless values are only valid for zero
    let length = match unit {
        Some(Unit::Px) => Length::Px(number),
        Some(Unit::Rem) => Length::Rem(number),
        Some(Unit::Em) => Length::Em(number),
        Some(Unit::Pct) => Length::Pct(number),
        None if number == 0.0 => Length::Px(0.0),
        None => {
            return Err(nom::Err::Error(nom::error::Error::new(
                input,
                nom::error::ErrorKind::Tag,
            )))
        }
    };

    Ok((input, length))
}

impl FromStr for Length {
    type Err = SliderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Length::parse(s)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Px(v) => write!(f, "{}px", v),
            Length::Rem(v) => write!(f, "{}rem", v),
            Length::Em(v) => write!(f, "{}em", v),
            Length::Pct(v) => write!(f, "{}%", v),
        }
    }
}

impl Serialize for Length {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Length {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Length::parse(&raw).map_err(serde::de::Error::custom)
    }
}
