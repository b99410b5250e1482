//! Per-row and per-column override tables for grids.
//!
//! A table holds one wildcard record that applies to every track and a set of
//! records keyed by track index. [`TrackOverrides::resolve`] merges them field
//! by field: an exact index wins over the wildcard, and anything still unset
//! falls back to `auto` sizing with `start` alignment.
use crate::align::Align;
use crate::error::ConfigError;
use crate::parsers::{parse_track_key, StyleParseError};
use crate::sizing::SizingPolicy;
use serde::{de, Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TrackKey {
    All,
    Index(usize),
}

impl FromStr for TrackKey {
    type Err = StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_track_key(s)
    }
}

/// A partial track record. Unset fields are inherited from the wildcard
/// record or the defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TrackOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy: Option<SizingPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,
}

impl TrackOverride {
    pub fn policy(policy: SizingPolicy) -> Self {
        Self {
            policy: Some(policy),
            ..Default::default()
        }
    }

    pub fn fixed(size: f32) -> Self {
        Self {
            policy: Some(SizingPolicy::Fixed),
            size: Some(size),
            align: None,
        }
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    /// Sizes and flex factors must be non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(value) = self.size
            && (value < 0.0 || value.is_nan())
        {
            return Err(ConfigError::NegativeBound {
                name: "track size",
                value,
            });
        }
        if let Some(SizingPolicy::Flex(value)) = self.policy
            && (value < 0.0 || value.is_nan())
        {
            return Err(ConfigError::NegativeBound {
                name: "flex factor",
                value,
            });
        }
        Ok(())
    }
}

impl<'de> Deserialize<'de> for TrackOverride {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(deny_unknown_fields)]
        struct Record {
            #[serde(default)]
            policy: Option<SizingPolicy>,
            #[serde(default, alias = "width", alias = "height")]
            size: Option<f32>,
            #[serde(default)]
            align: Option<Align>,
            #[serde(default)]
            factor: Option<f32>,
        }

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum OverrideDef {
            Size(f32),
            Policy(SizingPolicy),
            Record(Record),
        }

        let track = match OverrideDef::deserialize(deserializer)? {
            OverrideDef::Size(size) => TrackOverride::fixed(size),
            OverrideDef::Policy(policy) => TrackOverride::policy(policy),
            OverrideDef::Record(record) => {
                // A bare factor implies flex; "policy": "flex" takes the factor from it.
                let policy = match (record.policy, record.factor) {
                    (None, Some(f)) | (Some(SizingPolicy::Flex(_)), Some(f)) => {
                        Some(SizingPolicy::Flex(f))
                    }
                    (policy, _) => policy,
                };
                TrackOverride {
                    policy,
                    size: record.size,
                    align: record.align,
                }
            }
        };
        track.validate().map_err(de::Error::custom)?;
        Ok(track)
    }
}

/// The fully merged record for one track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrackPolicy {
    pub policy: SizingPolicy,
    pub size: Option<f32>,
    pub align: Align,
}

impl Default for TrackPolicy {
    fn default() -> Self {
        Self {
            policy: SizingPolicy::Auto,
            size: None,
            align: Align::Start,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TrackOverrides {
    pub all: TrackOverride,
    pub by_index: BTreeMap<usize, TrackOverride>,
}

impl TrackOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_all(mut self, record: TrackOverride) -> Self {
        self.all = record;
        self
    }

    pub fn with_index(mut self, index: usize, record: TrackOverride) -> Self {
        self.by_index.insert(index, record);
        self
    }

    pub fn insert(&mut self, key: TrackKey, record: TrackOverride) {
        match key {
            TrackKey::All => self.all = record,
            TrackKey::Index(index) => {
                self.by_index.insert(index, record);
            }
        }
    }

    /// Looks up the record for `index`: exact index > wildcard > default.
    pub fn resolve(&self, index: usize) -> TrackPolicy {
        let exact = self.by_index.get(&index).copied().unwrap_or_default();
        let defaults = TrackPolicy::default();
        TrackPolicy {
            policy: exact.policy.or(self.all.policy).unwrap_or(defaults.policy),
            size: exact.size.or(self.all.size),
            align: exact.align.or(self.all.align).unwrap_or(defaults.align),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.all == TrackOverride::default() && self.by_index.is_empty()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.all.validate()?;
        self.by_index.values().try_for_each(TrackOverride::validate)
    }
}

impl<'de> Deserialize<'de> for TrackOverrides {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum OverridesDef {
            Uniform(TrackOverride),
            Table(HashMap<String, TrackOverride>),
        }

        let mut overrides = TrackOverrides::new();
        match OverridesDef::deserialize(deserializer)? {
            OverridesDef::Uniform(record) => overrides.all = record,
            OverridesDef::Table(table) => {
                for (key, record) in table {
                    let key: TrackKey = key.parse().map_err(de::Error::custom)?;
                    overrides.insert(key, record);
                }
            }
        }
        Ok(overrides)
    }
}
