//! Per-axis sizing policies.
use crate::parsers::{parse_policy, run_parser};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// How a box chooses its extent along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SizingPolicy {
    /// Exactly the explicit size.
    Fixed,
    /// The content's natural size, clamped to the bounds.
    Fit,
    /// The minimum bound.
    Min,
    /// All available space, clamped to the bounds.
    Max,
    /// Like `Max`, weighted by a factor against competing siblings.
    Flex(f32),
    /// Explicit size when present, otherwise the content's natural size.
    #[default]
    Auto,
}

impl SizingPolicy {
    pub fn flex(factor: f32) -> Self {
        SizingPolicy::Flex(factor)
    }

    pub fn is_stretchable(&self) -> bool {
        matches!(self, SizingPolicy::Max | SizingPolicy::Flex(_))
    }
}

impl fmt::Display for SizingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizingPolicy::Fixed => f.write_str("fixed"),
            SizingPolicy::Fit => f.write_str("fit"),
            SizingPolicy::Min => f.write_str("min"),
            SizingPolicy::Max => f.write_str("max"),
            SizingPolicy::Flex(factor) => write!(f, "flex({})", factor),
            SizingPolicy::Auto => f.write_str("auto"),
        }
    }
}

impl FromStr for SizingPolicy {
    type Err = crate::parsers::StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        run_parser(parse_policy, s)
    }
}

impl Serialize for SizingPolicy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SizingPolicy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_round_trips_through_display() {
        for policy in [
            SizingPolicy::Fixed,
            SizingPolicy::Fit,
            SizingPolicy::Min,
            SizingPolicy::Max,
            SizingPolicy::Flex(2.5),
            SizingPolicy::Auto,
        ] {
            assert_eq!(policy.to_string().parse::<SizingPolicy>().unwrap(), policy);
        }
    }

    #[test]
    fn test_policy_deserialize() {
        let p: SizingPolicy = serde_json::from_str("\"flex\"").unwrap();
        assert_eq!(p, SizingPolicy::Flex(1.0));
        let p: SizingPolicy = serde_json::from_str("\"FLEX( 2 )\"").unwrap();
        assert_eq!(p, SizingPolicy::Flex(2.0));
        assert!(serde_json::from_str::<SizingPolicy>("\"stretchy\"").is_err());
    }
}
