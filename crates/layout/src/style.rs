use crate::policy::AxisSizing;
use plotbox_style::{Align, Axis, ConfigError, SizingPolicy};
use plotbox_types::Color;

/// Declared sizing and presentation of one box.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoxStyle {
    pub width: AxisSizing,
    pub height: AxisSizing,
    /// Cross-axis placement inside a row or column when the box does not
    /// stretch.
    pub align: Align,
    pub name: Option<String>,
    pub background: Option<Color>,
}

impl BoxStyle {
    pub fn new(width: AxisSizing, height: AxisSizing) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Both axes fixed to the given size.
    pub fn fixed(width: f32, height: f32) -> Self {
        Self::new(AxisSizing::fixed(width), AxisSizing::fixed(height))
    }

    pub fn policies(width: SizingPolicy, height: SizingPolicy) -> Self {
        Self::new(AxisSizing::new(width), AxisSizing::new(height))
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn sizing(&self, axis: Axis) -> &AxisSizing {
        match axis {
            Axis::Horizontal => &self.width,
            Axis::Vertical => &self.height,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.width.validate(Axis::Horizontal)?;
        self.height.validate(Axis::Vertical)
    }
}
