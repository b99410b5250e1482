use plotbox_types::Size;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    /// Edge length of one toolbar button. A toolbar is one button thick and
    /// one button long per tool.
    ///
    /// Defaults to `30`.
    pub toolbar_button_size: f32,

    /// Border reserved on every side of a plot frame when the plot does not
    /// declare its own borders.
    ///
    /// Defaults to `5`.
    pub plot_min_border: f32,

    /// Outer size of a plot that declares neither an explicit size nor a
    /// frame size.
    ///
    /// Defaults to `600 x 600`.
    pub default_plot_size: Size,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            toolbar_button_size: 30.0,
            plot_min_border: 5.0,
            default_plot_size: Size::new(600.0, 600.0),
        }
    }
}
