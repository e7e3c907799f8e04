//! Charts module - Radar chart geometry and rendering

mod plotter;
mod radar;
mod renderer;

pub use plotter::ChartPlotter;
pub use radar::RadarSeries;
pub use renderer::StaticChartRenderer;
