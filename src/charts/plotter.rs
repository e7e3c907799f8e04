//! Chart Plotter Module
//! Interactive radar chart using egui_plot.

use crate::charts::radar::{ring, to_cartesian, RadarSeries, RADAR_MAX, RING_STEPS};
use egui::{Color32, RichText, Stroke};
use egui_plot::{Line, Plot, PlotPoint, PlotPoints, Polygon, Text};

pub const RADAR_COLOR: Color32 = Color32::from_rgb(0, 255, 255); // Cyan
pub const GRID_COLOR: Color32 = Color32::from_gray(90);

/// Label distance from the centre, past the outer ring.
const LABEL_RADIUS: f64 = RADAR_MAX * 1.18;

/// Draws radar charts with egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Draw the six-axis skill radar for one player.
    pub fn draw_radar_chart(ui: &mut egui::Ui, id: &str, series: &RadarSeries, size: f32) {
        let extent = LABEL_RADIUS * 1.15;

        Plot::new(format!("radar_{}", id))
            .width(size)
            .height(size)
            .data_aspect(1.0)
            .show_axes(false)
            .show_grid(false)
            .show_x(false)
            .show_y(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .include_x(-extent)
            .include_x(extent)
            .include_y(-extent)
            .include_y(extent)
            .show(ui, |plot_ui| {
                // Grid rings and spokes
                for radius in RING_STEPS {
                    plot_ui.line(
                        Line::new(PlotPoints::from(ring(radius)))
                            .color(GRID_COLOR)
                            .width(0.8),
                    );
                }
                for theta in RadarSeries::angles() {
                    let spoke = vec![[0.0, 0.0], to_cartesian(theta, RADAR_MAX)];
                    plot_ui.line(
                        Line::new(PlotPoints::from(spoke))
                            .color(GRID_COLOR)
                            .width(0.8),
                    );
                }

                // Skill polygon
                let outline = series.closed_cartesian();
                plot_ui.polygon(
                    Polygon::new(PlotPoints::from(outline.clone()))
                        .fill_color(RADAR_COLOR.gamma_multiply(0.4))
                        .stroke(Stroke::NONE),
                );
                plot_ui.line(
                    Line::new(PlotPoints::from(outline))
                        .color(RADAR_COLOR)
                        .width(2.0),
                );

                // Axis labels
                for (theta, (label, value)) in RadarSeries::angles()
                    .iter()
                    .zip(series.labels.iter().zip(series.values.iter()))
                {
                    let [x, y] = to_cartesian(*theta, LABEL_RADIUS);
                    plot_ui.text(Text::new(
                        PlotPoint::new(x, y),
                        RichText::new(format!("{}\n{:.0}", label, value)).size(12.0),
                    ));
                }
            });
    }
}
