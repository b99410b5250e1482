//! Leaf content and the measurement interface leaves expose to the engine.
use crate::config::LayoutConfig;
use plotbox_style::{Axis, Borders, Location};
use plotbox_types::{Rect, Size};
use std::fmt;
use std::sync::Arc;

/// Anything that can report a natural size for a leaf box.
pub trait Measurable: fmt::Debug {
    fn natural_size(&self, config: &LayoutConfig) -> Size;
}

/// A plot leaf: a data frame surrounded by borders reserved for axes,
/// titles and labels.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlotContent {
    pub frame_width: Option<f32>,
    pub frame_height: Option<f32>,
    /// Explicit borders. When unset every side gets `plot_min_border`.
    pub borders: Option<Borders>,
    pub tools: Vec<String>,
}

impl PlotContent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_frame(mut self, width: f32, height: f32) -> Self {
        self.frame_width = Some(width);
        self.frame_height = Some(height);
        self
    }

    pub fn with_borders(mut self, borders: Borders) -> Self {
        self.borders = Some(borders);
        self
    }

    pub fn with_tools(mut self, tools: &str) -> Self {
        self.tools = parse_tools(tools);
        self
    }

    pub fn borders(&self, config: &LayoutConfig) -> Borders {
        self.borders
            .unwrap_or_else(|| Borders::all(config.plot_min_border))
    }

    /// The frame rectangle of a plot arranged at `rect`.
    pub fn frame(&self, rect: &Rect, config: &LayoutConfig) -> Rect {
        let b = self.borders(config);
        rect.inset(b.top, b.right, b.bottom, b.left)
    }
}

impl Measurable for PlotContent {
    fn natural_size(&self, config: &LayoutConfig) -> Size {
        let b = self.borders(config);
        Size::new(
            self.frame_width
                .map(|w| w + b.horizontal())
                .unwrap_or(config.default_plot_size.width),
            self.frame_height
                .map(|h| h + b.vertical())
                .unwrap_or(config.default_plot_size.height),
        )
    }
}

/// A toolbar leaf. It owns its placement only; the tools are opaque names.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolbarContent {
    pub tools: Vec<String>,
    pub location: Location,
}

impl ToolbarContent {
    pub fn new(tools: Vec<String>, location: Location) -> Self {
        Self { tools, location }
    }

    /// Builds a toolbar from a comma separated list such as `"pan,reset,help"`.
    pub fn from_tools_str(tools: &str, location: Location) -> Self {
        Self::new(parse_tools(tools), location)
    }

    /// Axis along which the buttons are laid out.
    pub fn orientation(&self) -> Axis {
        self.location.packing_axis().cross()
    }
}

impl Measurable for ToolbarContent {
    fn natural_size(&self, config: &LayoutConfig) -> Size {
        let thickness = config.toolbar_button_size;
        let length = thickness * self.tools.len() as f32;
        match self.orientation() {
            Axis::Horizontal => Size::new(length, thickness),
            Axis::Vertical => Size::new(thickness, length),
        }
    }
}

fn parse_tools(tools: &str) -> Vec<String> {
    tools
        .split(',')
        .map(str::trim)
        .filter(|tool| !tool.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone)]
pub enum LeafContent {
    /// Empty content; a spacer is sized by its own policies alone.
    Spacer,
    Plot(PlotContent),
    Toolbar(ToolbarContent),
    Custom(Arc<dyn Measurable + Send + Sync>),
}

impl LeafContent {
    pub fn natural_size(&self, config: &LayoutConfig) -> Size {
        match self {
            LeafContent::Spacer => Size::zero(),
            LeafContent::Plot(plot) => plot.natural_size(config),
            LeafContent::Toolbar(toolbar) => toolbar.natural_size(config),
            LeafContent::Custom(content) => content.natural_size(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_natural_size_is_frame_plus_borders() {
        let config = LayoutConfig::default();
        let plot = PlotContent::new().with_frame(300.0, 300.0);
        assert_eq!(plot.natural_size(&config), Size::new(310.0, 310.0));

        let plot = PlotContent::new()
            .with_frame(300.0, 200.0)
            .with_borders(Borders::new(5.0, 30.0, 5.0, 5.0));
        assert_eq!(plot.natural_size(&config), Size::new(335.0, 210.0));
        assert_eq!(
            plot.frame(&Rect::new(0.0, 0.0, 335.0, 210.0), &config),
            Rect::new(5.0, 5.0, 300.0, 200.0)
        );
    }

    #[test]
    fn test_plot_without_frame_uses_default_size() {
        let config = LayoutConfig::default();
        assert_eq!(
            PlotContent::new().natural_size(&config),
            Size::new(600.0, 600.0)
        );
    }

    #[test]
    fn test_toolbar_size_follows_orientation() {
        let config = LayoutConfig::default();
        let above = ToolbarContent::from_tools_str("pan, reset,help", Location::Above);
        assert_eq!(above.tools.len(), 3);
        assert_eq!(above.natural_size(&config), Size::new(90.0, 30.0));

        let right = ToolbarContent::from_tools_str("pan,reset,help", Location::Right);
        assert_eq!(right.natural_size(&config), Size::new(30.0, 90.0));
    }
}
