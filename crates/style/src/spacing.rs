//! Gaps between packed children and insets around a plot frame.
use crate::align::Axis;
use crate::error::ConfigError;
use crate::parsers::{parse_shorthand_borders, parse_spacing, run_parser};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::hash::{Hash, Hasher};

/// Gap inserted between adjacent children: `horizontal` between columns,
/// `vertical` between rows.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Spacing {
    pub horizontal: f32,
    pub vertical: f32,
}

impl Spacing {
    pub fn new(horizontal: f32, vertical: f32) -> Result<Self, ConfigError> {
        let spacing = Self {
            horizontal,
            vertical,
        };
        spacing.validate()?;
        Ok(spacing)
    }

    /// Both gaps must be non-negative. The fields are public, so containers
    /// re-check at construction.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for value in [self.horizontal, self.vertical] {
            if value < 0.0 || value.is_nan() {
                return Err(ConfigError::NegativeSpacing(value));
            }
        }
        Ok(())
    }

    pub fn uniform(value: f32) -> Result<Self, ConfigError> {
        Self::new(value, value)
    }

    pub fn along(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.horizontal,
            Axis::Vertical => self.vertical,
        }
    }
}

impl Serialize for Spacing {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        [self.horizontal, self.vertical].serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Spacing {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum SpacingDef {
            Scalar(f32),
            Pair([f32; 2]),
            Str(String),
        }

        let (h, v) = match SpacingDef::deserialize(deserializer)? {
            SpacingDef::Scalar(s) => (s, s),
            SpacingDef::Pair([h, v]) => (h, v),
            SpacingDef::Str(s) => run_parser(parse_spacing, &s).map_err(de::Error::custom)?,
        };
        Spacing::new(h, v).map_err(de::Error::custom)
    }
}

/// Insets around a plot frame, reserved for axes, titles and in-plot toolbars.
#[derive(Serialize, Debug, Default, Clone, Copy, PartialEq)]
pub struct Borders {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Hash for Borders {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.top.to_bits().hash(state);
        self.right.to_bits().hash(state);
        self.bottom.to_bits().hash(state);
        self.left.to_bits().hash(state);
    }
}

impl Eq for Borders {}

impl Borders {
    pub fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

impl<'de> Deserialize<'de> for Borders {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BordersVisitor;
        impl<'de> de::Visitor<'de> for BordersVisitor {
            type Value = Borders;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a number, a string like '5' or '5 30 5 5', or a map")
            }

            fn visit_f64<E>(self, value: f64) -> Result<Borders, E>
            where
                E: de::Error,
            {
                Ok(Borders::all(value as f32))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Borders, E>
            where
                E: de::Error,
            {
                Ok(Borders::all(value as f32))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Borders, E>
            where
                E: de::Error,
            {
                Ok(Borders::all(value as f32))
            }

            fn visit_str<E>(self, value: &str) -> Result<Borders, E>
            where
                E: de::Error,
            {
                parse_shorthand_borders(value).map_err(E::custom)
            }

            fn visit_map<A>(self, mut map: A) -> Result<Borders, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut borders = Borders::default();
                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "top" => borders.top = map.next_value()?,
                        "right" => borders.right = map.next_value()?,
                        "bottom" => borders.bottom = map.next_value()?,
                        "left" => borders.left = map.next_value()?,
                        _ => {
                            let _: de::IgnoredAny = map.next_value()?;
                        }
                    }
                }
                Ok(borders)
            }
        }
        deserializer.deserialize_any(BordersVisitor)
    }
}
