//! Static Chart Renderer
//! Renders a player's skill radar to a PNG file with plotters.
//!
//! Layout:
//! 1. Title: "{name} - Skill Overview" centered
//! 2. Grid rings at 20/40/60/80/100 with one spoke per skill
//! 3. Filled cyan skill polygon with a solid outline
//! 4. Skill name and value next to each spoke

use crate::charts::radar::{ring, to_cartesian, RadarSeries, RADAR_MAX, RING_STEPS};
use crate::data::PlayerRecord;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;
use thiserror::Error;

const GRID: RGBColor = RGBColor(200, 200, 200);
const RADAR: RGBColor = RGBColor(0, 200, 200);
const LABEL_RADIUS: f64 = RADAR_MAX * 1.15;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Drawing failed: {0}")]
    Draw(String),
}

fn as_tuples(points: Vec<[f64; 2]>) -> Vec<(f64, f64)> {
    points.into_iter().map(|[x, y]| (x, y)).collect()
}

fn draw_err<E: std::fmt::Display>(e: E) -> RenderError {
    RenderError::Draw(e.to_string())
}

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Suggested file name for a player's radar export.
    pub fn default_file_name(player_name: &str) -> String {
        let stem: String = player_name
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { '_' })
            .collect();
        let stem = stem.trim_matches('_');
        if stem.is_empty() {
            "player_radar.png".to_string()
        } else {
            format!("{}_radar.png", stem)
        }
    }

    /// Render the radar chart of `player` as a square PNG at `path`.
    pub fn render_radar_png(
        player: &PlayerRecord,
        path: &Path,
        size: u32,
    ) -> Result<(), RenderError> {
        let series = RadarSeries::from_skills(&player.skills);
        let extent = LABEL_RADIUS * 1.1;

        let root = BitMapBackend::new(path, (size, size)).into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(
                format!("{} - Skill Overview", player.name()),
                ("sans-serif", 24),
            )
            .margin(20)
            .build_cartesian_2d(-extent..extent, -extent..extent)
            .map_err(draw_err)?;

        for radius in RING_STEPS {
            chart
                .draw_series(std::iter::once(PathElement::new(
                    as_tuples(ring(radius)),
                    GRID.stroke_width(1),
                )))
                .map_err(draw_err)?;
        }
        for theta in RadarSeries::angles() {
            let [x, y] = to_cartesian(theta, RADAR_MAX);
            chart
                .draw_series(std::iter::once(PathElement::new(
                    vec![(0.0, 0.0), (x, y)],
                    GRID.stroke_width(1),
                )))
                .map_err(draw_err)?;
        }

        let outline = as_tuples(series.closed_cartesian());
        chart
            .draw_series(std::iter::once(Polygon::new(
                outline.clone(),
                RADAR.mix(0.4).filled(),
            )))
            .map_err(draw_err)?;
        chart
            .draw_series(std::iter::once(PathElement::new(
                outline,
                RADAR.stroke_width(2),
            )))
            .map_err(draw_err)?;

        let label_style = TextStyle::from(("sans-serif", 16).into_font())
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Center));
        for (theta, (label, value)) in RadarSeries::angles()
            .iter()
            .zip(series.labels.iter().zip(series.values.iter()))
        {
            let [x, y] = to_cartesian(*theta, LABEL_RADIUS);
            chart
                .draw_series(std::iter::once(Text::new(
                    format!("{} {:.0}", label, value),
                    (x, y),
                    label_style.clone(),
                )))
                .map_err(draw_err)?;
        }

        root.present().map_err(draw_err)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_file_name() {
        assert_eq!(
            StaticChartRenderer::default_file_name("L. Messi"),
            "L__Messi_radar.png"
        );
        assert_eq!(
            StaticChartRenderer::default_file_name("K. Mbappé"),
            "K__Mbappé_radar.png"
        );
        assert_eq!(StaticChartRenderer::default_file_name("..."), "player_radar.png");
    }
}
