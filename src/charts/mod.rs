//! Charts module - figure layout and rendering

mod layout;
mod renderer;

pub use layout::{ChartBox, FigureLayout, Rect, TableGrid};
pub use renderer::{render_figure, RenderError};
