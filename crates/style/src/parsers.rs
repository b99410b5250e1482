//! nom parsers for the string forms of sizing values.
//!
//! Policies (`"max"`, `"flex(2)"`), lengths (`"30"`, `"30px"`), spacing pairs,
//! track keys and border shorthands all go through here so that documents and
//! the builder API accept exactly the same spellings.

use crate::error::ConfigError;
use crate::sizing::SizingPolicy;
use crate::spacing::Borders;
use crate::track::TrackKey;
use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::{char, i64 as parse_i64, space0, space1};
use nom::combinator::{map, opt, value};
use nom::multi::separated_list1;
use nom::number::complete::float;
use nom::sequence::{delimited, preceded};
use nom::{IResult, Parser};
use thiserror::Error;

/// Errors that can occur during style parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleParseError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid value for '{property}': {value}")]
    InvalidValue { property: String, value: String },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

type NomError<'a> = nom::error::Error<&'a str>;

fn ws<'a, O, F>(inner: F) -> impl Parser<&'a str, Output = O, Error = NomError<'a>>
where
    F: Parser<&'a str, Output = O, Error = NomError<'a>>,
{
    delimited(space0, inner, space0)
}

/// Parses a length in pixels. A trailing `px` is accepted and ignored.
pub fn parse_length(input: &str) -> IResult<&str, f32> {
    let (input, length) = float(input)?;
    let (input, _) = opt(tag_no_case("px")).parse(input)?;
    Ok((input, length))
}

fn parse_factor(input: &str) -> IResult<&str, f32> {
    float(input)
}

fn parse_flex(input: &str) -> IResult<&str, SizingPolicy> {
    let (input, _) = tag_no_case("flex").parse(input)?;
    let (input, factor) =
        opt(delimited(ws(char('(')), ws(parse_factor), char(')'))).parse(input)?;
    Ok((input, SizingPolicy::Flex(factor.unwrap_or(1.0))))
}

/// Parses a sizing policy keyword, case-insensitively.
pub fn parse_policy(input: &str) -> IResult<&str, SizingPolicy> {
    alt((
        value(SizingPolicy::Fixed, tag_no_case("fixed")),
        value(SizingPolicy::Fit, tag_no_case("fit")),
        value(SizingPolicy::Min, tag_no_case("min")),
        value(SizingPolicy::Max, tag_no_case("max")),
        value(SizingPolicy::Auto, tag_no_case("auto")),
        parse_flex,
    ))
    .parse(input)
}

/// Parses `"h"` or `"h v"` into a (horizontal, vertical) spacing pair.
pub fn parse_spacing(input: &str) -> IResult<&str, (f32, f32)> {
    let (input, horizontal) = parse_length(input)?;
    let (input, vertical) = opt(preceded(space1, parse_length)).parse(input)?;
    Ok((input, (horizontal, vertical.unwrap_or(horizontal))))
}

fn parse_raw_track_key(input: &str) -> IResult<&str, Option<i64>> {
    alt((value(None, char('*')), map(parse_i64, Some))).parse(input)
}

/// Parses a track override key: `"*"` for every track or a zero-based index.
pub fn parse_track_key(s: &str) -> Result<TrackKey, StyleParseError> {
    match run_parser(parse_raw_track_key, s)? {
        None => Ok(TrackKey::All),
        Some(index) if index < 0 => Err(ConfigError::NegativeTrackIndex(index).into()),
        Some(index) => Ok(TrackKey::Index(index as usize)),
    }
}

/// Parses 1, 2, or 4 whitespace-separated lengths into plot borders.
pub fn parse_shorthand_borders(input: &str) -> Result<Borders, StyleParseError> {
    let parts_res = separated_list1(space1, parse_length).parse(input.trim());

    let borders = match parts_res {
        Ok(("", parts)) => match parts.as_slice() {
            [all] => Borders::all(*all),
            [vertical, horizontal] => Borders::new(*vertical, *horizontal, *vertical, *horizontal),
            [top, right, bottom, left] => Borders::new(*top, *right, *bottom, *left),
            _ => {
                return Err(StyleParseError::Parse(format!(
                    "Invalid number of values for borders shorthand: got {}, expected 1, 2, or 4.",
                    parts.len()
                )));
            }
        },
        _ => {
            return Err(StyleParseError::Parse(format!(
                "Failed to parse borders value: '{}'",
                input
            )));
        }
    };

    for (name, value) in [
        ("border top", borders.top),
        ("border right", borders.right),
        ("border bottom", borders.bottom),
        ("border left", borders.left),
    ] {
        if value < 0.0 {
            return Err(ConfigError::NegativeBound { name, value }.into());
        }
    }
    Ok(borders)
}

/// Helper to run a nom parser and convert its result to a `Result<T, StyleParseError>`.
pub fn run_parser<'a, T, F>(mut parser: F, input: &'a str) -> Result<T, StyleParseError>
where
    F: Parser<&'a str, Output = T, Error = NomError<'a>>,
{
    match parser.parse(input.trim()) {
        Ok(("", result)) => Ok(result),
        Ok((rem, _)) => Err(StyleParseError::Parse(format!(
            "Parser did not consume all input. Remainder: '{}'",
            rem
        ))),
        Err(e) => Err(StyleParseError::Parse(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_length() {
        assert_eq!(run_parser(parse_length, "30").unwrap(), 30.0);
        assert_eq!(run_parser(parse_length, " 12.5px ").unwrap(), 12.5);
        assert!(run_parser(parse_length, "12pt").is_err());
        assert!(run_parser(parse_length, "abc").is_err());
    }

    #[test]
    fn test_parse_policy() {
        assert_eq!(run_parser(parse_policy, "max").unwrap(), SizingPolicy::Max);
        assert_eq!(run_parser(parse_policy, "Fit").unwrap(), SizingPolicy::Fit);
        assert_eq!(run_parser(parse_policy, "flex").unwrap(), SizingPolicy::Flex(1.0));
        assert_eq!(
            run_parser(parse_policy, "flex(0.5)").unwrap(),
            SizingPolicy::Flex(0.5)
        );
        assert!(run_parser(parse_policy, "flex(").is_err());
        assert!(run_parser(parse_policy, "maximum").is_err());
    }

    #[test]
    fn test_parse_spacing() {
        assert_eq!(run_parser(parse_spacing, "5").unwrap(), (5.0, 5.0));
        assert_eq!(run_parser(parse_spacing, "5 10").unwrap(), (5.0, 10.0));
        assert!(run_parser(parse_spacing, "5 10 15").is_err());
    }

    #[test]
    fn test_parse_track_key() {
        assert_eq!(parse_track_key("*").unwrap(), TrackKey::All);
        assert_eq!(parse_track_key(" 3 ").unwrap(), TrackKey::Index(3));
        assert_eq!(
            parse_track_key("-1"),
            Err(StyleParseError::Config(ConfigError::NegativeTrackIndex(-1)))
        );
        assert!(parse_track_key("first").is_err());
    }

    #[test]
    fn test_parse_shorthand_borders() {
        assert_eq!(parse_shorthand_borders("5").unwrap(), Borders::all(5.0));
        assert_eq!(
            parse_shorthand_borders("5 30").unwrap(),
            Borders::new(5.0, 30.0, 5.0, 30.0)
        );
        assert_eq!(
            parse_shorthand_borders("5 30 5 5").unwrap(),
            Borders::new(5.0, 30.0, 5.0, 5.0)
        );
        assert!(parse_shorthand_borders("5 30 5").is_err());
        assert!(parse_shorthand_borders("5 -1").is_err());
    }
}
