pub mod align;
pub mod error;
pub mod parsers;
pub mod sizing;
pub mod spacing;
pub mod track;

pub use align::{Align, Axis, Location};
pub use error::ConfigError;
pub use parsers::StyleParseError;
pub use sizing::SizingPolicy;
pub use spacing::{Borders, Spacing};
pub use track::{TrackKey, TrackOverride, TrackOverrides, TrackPolicy};
