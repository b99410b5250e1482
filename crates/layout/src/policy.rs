//! Per-axis sizing: the natural size used by the measure pass and the
//! resolution against offered space used by the arrange pass.
use crate::LayoutError;
use plotbox_style::{Axis, ConfigError, SizingPolicy};

/// Sizing of a box along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisSizing {
    pub policy: SizingPolicy,
    pub size: Option<f32>,
    pub min: Option<f32>,
    pub max: Option<f32>,
}

/// The outcome of resolving an [`AxisSizing`] against offered space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedExtent {
    pub size: f32,
    pub stretchable: bool,
}

/// Whether a measured box may absorb leftover space along an axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Stretch {
    #[default]
    None,
    Max,
    Flex(f32),
}

impl Stretch {
    pub fn is_stretchable(self) -> bool {
        !matches!(self, Stretch::None)
    }

    pub fn is_flex(self) -> bool {
        matches!(self, Stretch::Flex(_))
    }

    /// Share weight among siblings. A plain `Max` only competes when no
    /// sibling carries an explicit flex factor.
    pub fn weight(self, siblings_have_flex: bool) -> f32 {
        match self {
            Stretch::None => 0.0,
            Stretch::Max if siblings_have_flex => 0.0,
            Stretch::Max => 1.0,
            Stretch::Flex(factor) => factor.max(0.0),
        }
    }

    /// The stronger of two stretches: any flex beats max, larger factors win.
    pub fn merge(self, other: Stretch) -> Stretch {
        match (self, other) {
            (Stretch::Flex(a), Stretch::Flex(b)) => Stretch::Flex(a.max(b)),
            (Stretch::Flex(f), _) | (_, Stretch::Flex(f)) => Stretch::Flex(f),
            (Stretch::Max, _) | (_, Stretch::Max) => Stretch::Max,
            _ => Stretch::None,
        }
    }
}

impl From<SizingPolicy> for Stretch {
    fn from(policy: SizingPolicy) -> Self {
        match policy {
            SizingPolicy::Max => Stretch::Max,
            SizingPolicy::Flex(factor) => Stretch::Flex(factor),
            _ => Stretch::None,
        }
    }
}

impl AxisSizing {
    pub fn new(policy: SizingPolicy) -> Self {
        Self {
            policy,
            ..Default::default()
        }
    }

    pub fn fixed(size: f32) -> Self {
        Self {
            policy: SizingPolicy::Fixed,
            size: Some(size),
            ..Default::default()
        }
    }

    pub fn fit() -> Self {
        Self::new(SizingPolicy::Fit)
    }

    pub fn max() -> Self {
        Self::new(SizingPolicy::Max)
    }

    pub fn flex(factor: f32) -> Self {
        Self::new(SizingPolicy::Flex(factor))
    }

    pub fn auto() -> Self {
        Self::new(SizingPolicy::Auto)
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_min(mut self, min: f32) -> Self {
        self.min = Some(min);
        self
    }

    pub fn with_max(mut self, max: f32) -> Self {
        self.max = Some(max);
        self
    }

    /// Checks the declaration on its own, before any layout runs.
    pub fn validate(&self, axis: Axis) -> Result<(), ConfigError> {
        if self.policy == SizingPolicy::Fixed && self.size.is_none() {
            return Err(ConfigError::MissingFixedSize(axis));
        }
        for (name, value) in [("size", self.size), ("min", self.min), ("max", self.max)] {
            if let Some(value) = value
                && (value < 0.0 || value.is_nan())
            {
                return Err(ConfigError::NegativeBound { name, value });
            }
        }
        if let SizingPolicy::Flex(value) = self.policy
            && (value < 0.0 || value.is_nan())
        {
            return Err(ConfigError::NegativeBound {
                name: "flex factor",
                value,
            });
        }
        if let (Some(min), Some(max)) = (self.min, self.max)
            && min > max
        {
            return Err(ConfigError::InvertedBounds { axis, min, max });
        }
        Ok(())
    }

    /// Clamps `value` into `[min, max]`, never below zero.
    pub fn clamp(&self, value: f32) -> f32 {
        let mut value = value;
        if let Some(max) = self.max {
            value = value.min(max);
        }
        if let Some(min) = self.min {
            value = value.max(min);
        }
        value.max(0.0)
    }

    pub fn stretch(&self) -> Stretch {
        Stretch::from(self.policy)
    }

    /// Size used by the measure pass, given the content's natural size.
    pub fn natural(&self, content: f32) -> f32 {
        match self.policy {
            SizingPolicy::Fixed => self.size.unwrap_or(content).max(0.0),
            SizingPolicy::Fit => self.clamp(content),
            SizingPolicy::Min => self.clamp(self.min.unwrap_or(0.0)),
            SizingPolicy::Max | SizingPolicy::Flex(_) | SizingPolicy::Auto => {
                self.clamp(self.size.unwrap_or(content))
            }
        }
    }

    /// Resolves the final extent along `axis` inside `available` space.
    pub fn resolve(
        &self,
        axis: Axis,
        content: f32,
        available: f32,
    ) -> Result<ResolvedExtent, LayoutError> {
        let stretchable = self.policy.is_stretchable();
        if available <= 0.0 {
            return Ok(ResolvedExtent {
                size: 0.0,
                stretchable,
            });
        }
        let size = match self.policy {
            SizingPolicy::Fixed => match self.size {
                Some(size) => size.max(0.0),
                None => return Err(ConfigError::MissingFixedSize(axis).into()),
            },
            SizingPolicy::Max | SizingPolicy::Flex(_) => self.clamp(available),
            _ => self.natural(content),
        };
        Ok(ResolvedExtent { size, stretchable })
    }
}
