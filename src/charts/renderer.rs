//! Static Chart Renderer
//! Composes the two-panel figure and writes it as a PNG.
//!
//! Layout:
//! 1. Left panel: degree distribution line plot with circle markers,
//!    square plot box, titled "Degree Distribution".
//! 2. Right panel: no axes, the network metrics rendered as a bordered
//!    table with centered cells.

use std::ops::Range;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use thiserror::Error;

use crate::charts::layout::{FigureLayout, AXIS_FONT_PT, TABLE_FONT_PT, TITLE_FONT_PT};

/// Marker radius for the data points, half the default 6pt marker size.
const MARKER_RADIUS_PT: f64 = 3.0;

/// Fraction of the data range added on each side of an axis.
const AXIS_PADDING: f64 = 0.05;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Metrics row {row} has {found} cells, expected {expected}")]
    RaggedTable {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),
    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),
    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),
}

/// Render the degree distribution series and the metrics rows into a single
/// PNG at `output`.
///
/// The file is written only after both panels composed successfully. An
/// empty series produces a valid plot with no points; metrics rows with
/// unequal cell counts are rejected before anything is drawn.
pub fn render_figure(
    series: &[(f64, f64)],
    metrics: &[Vec<String>],
    output: &Path,
) -> Result<(), RenderError> {
    let expected = metrics.first().map(Vec::len).unwrap_or(0);
    for (row, cells) in metrics.iter().enumerate() {
        if cells.len() != expected {
            return Err(RenderError::RaggedTable {
                row,
                expected,
                found: cells.len(),
            });
        }
    }

    let layout = FigureLayout::new();
    let root = BitMapBackend::new(output, (layout.width, layout.height)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| RenderError::DrawingArea(e.to_string()))?;

    draw_distribution_panel(&root, &layout, series)?;
    draw_metrics_table(&root, &layout, metrics)?;

    root.present()
        .map_err(|e| RenderError::Drawing(e.to_string()))?;
    Ok(())
}

fn draw_distribution_panel(
    root: &DrawingArea<BitMapBackend, Shift>,
    layout: &FigureLayout,
    series: &[(f64, f64)],
) -> Result<(), RenderError> {
    let chart_box = layout.plot_box();
    let area = root.margin(
        chart_box.area.y0,
        layout.height - chart_box.area.y1,
        chart_box.area.x0,
        layout.width - chart_box.area.x1,
    );

    let title_px = FigureLayout::pt_to_px(TITLE_FONT_PT);
    let axis_px = FigureLayout::pt_to_px(AXIS_FONT_PT);

    let mut chart = ChartBuilder::on(&area)
        .caption("Degree Distribution", ("sans-serif", title_px))
        .x_label_area_size(chart_box.x_label_area)
        .y_label_area_size(chart_box.y_label_area)
        .build_cartesian_2d(
            padded_range(series.iter().map(|p| p.0)),
            padded_range(series.iter().map(|p| p.1)),
        )
        .map_err(|e| RenderError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc("K")
        .y_desc("Frequency")
        .axis_desc_style(("sans-serif", axis_px))
        .label_style(("sans-serif", axis_px))
        .draw()
        .map_err(|e| RenderError::Drawing(e.to_string()))?;

    chart
        .draw_series(LineSeries::new(series.iter().copied(), &BLUE))
        .map_err(|e| RenderError::Drawing(e.to_string()))?;

    let marker_px = FigureLayout::pt_to_px(MARKER_RADIUS_PT) as i32;
    chart
        .draw_series(
            series
                .iter()
                .map(|&(x, y)| Circle::new((x, y), marker_px, BLUE.filled())),
        )
        .map_err(|e| RenderError::Drawing(e.to_string()))?;

    Ok(())
}

fn draw_metrics_table(
    root: &DrawingArea<BitMapBackend, Shift>,
    layout: &FigureLayout,
    metrics: &[Vec<String>],
) -> Result<(), RenderError> {
    let cols = metrics.first().map(Vec::len).unwrap_or(0);
    if metrics.is_empty() || cols == 0 {
        return Ok(());
    }

    let grid = layout.table_grid(metrics.len(), cols);
    let font_px = FigureLayout::pt_to_px(TABLE_FONT_PT);
    let text_style = TextStyle::from(("sans-serif", font_px).into_font())
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));

    for (row, cells) in metrics.iter().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            let rect = grid.cell(row, col);

            root.draw(&Rectangle::new(
                [
                    (rect.x0 as i32, rect.y0 as i32),
                    (rect.x1 as i32, rect.y1 as i32),
                ],
                BLACK.stroke_width(1),
            ))
            .map_err(|e| RenderError::Drawing(e.to_string()))?;

            let center = (
                ((rect.x0 + rect.x1) / 2) as i32,
                ((rect.y0 + rect.y1) / 2) as i32,
            );
            root.draw(&Text::new(cell.as_str(), center, text_style.clone()))
                .map_err(|e| RenderError::Drawing(e.to_string()))?;
        }
    }

    Ok(())
}

/// Axis range from the data with a small padding on both sides. An empty or
/// constant series falls back to a unit range so the chart still builds.
fn padded_range(values: impl Iterator<Item = f64>) -> Range<f64> {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });

    if !min.is_finite() || !max.is_finite() {
        return 0.0..1.0;
    }
    if min == max {
        return (min - 0.5)..(max + 0.5);
    }

    let pad = (max - min) * AXIS_PADDING;
    (min - pad)..(max + pad)
}
