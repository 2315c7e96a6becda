// File: crates/scatter-core/src/lib.rs
// Summary: Core library entry point; exports the figure model and PNG rendering.

pub mod axis;
pub mod error;
pub mod figure;
pub mod geometry;
pub mod grid;
pub mod legend;
pub mod scale;
pub mod series;
pub mod text;
pub mod theme;
pub mod types;
pub mod view;

pub use axis::Axis;
pub use error::FigureError;
pub use figure::{Figure, RenderOptions};
pub use legend::{Legend, LegendEntry};
pub use series::{Marker, Series};
pub use theme::Theme;
pub use view::ViewState;
