//! Figure Layout Module
//! Pixel geometry for the two-panel figure: outer margins, the 1:1.7 panel
//! split, the square plot box and the metrics table grid. Pure math, no
//! rendering backend involved.

/// Figure size in inches, matching the original 12x6 design.
pub const FIGURE_WIDTH_IN: f64 = 12.0;
pub const FIGURE_HEIGHT_IN: f64 = 6.0;
pub const DPI: f64 = 300.0;

/// Horizontal span of the content: 7% from the left edge to 99% of the
/// figure width. Vertical margins stay at the engine defaults.
const MARGIN_LEFT: f64 = 0.07;
const MARGIN_RIGHT: f64 = 0.99;
const MARGIN_BOTTOM: f64 = 0.11;
const MARGIN_TOP: f64 = 0.88;

/// Panel width ratio (plot : table) and the gap between them as a fraction
/// of the mean panel width.
const WIDTH_RATIO_PLOT: f64 = 1.0;
const WIDTH_RATIO_TABLE: f64 = 1.7;
const WSPACE: f64 = 0.05;

pub const TITLE_FONT_PT: f64 = 12.0;
pub const AXIS_FONT_PT: f64 = 10.0;
/// Table text size is fixed; it always wins over any auto-fit.
pub const TABLE_FONT_PT: f64 = 9.8;

/// Table rows are drawn at twice the default cell height.
const TABLE_ROW_SCALE: f64 = 2.0;
const TABLE_LINE_HEIGHT: f64 = 1.2;

/// Pixel rectangle, origin at the top-left of the figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl Rect {
    pub fn width(&self) -> u32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> u32 {
        self.y1 - self.y0
    }
}

/// Outer drawing area for the line chart plus the label areas carved out of
/// it, sized so the remaining inner plot box is square.
#[derive(Debug, Clone, Copy)]
pub struct ChartBox {
    pub area: Rect,
    /// Bottom strip for tick labels and the x-axis description.
    pub x_label_area: u32,
    /// Left strip for tick labels and the y-axis description.
    pub y_label_area: u32,
    /// Top strip reserved for the caption.
    pub caption_area: u32,
}

/// Cell geometry for the metrics table, centered in the table panel.
#[derive(Debug, Clone, Copy)]
pub struct TableGrid {
    pub x0: u32,
    pub y0: u32,
    pub col_width: u32,
    pub row_height: u32,
    pub rows: usize,
    pub cols: usize,
}

impl TableGrid {
    pub fn cell(&self, row: usize, col: usize) -> Rect {
        let x0 = self.x0 + col as u32 * self.col_width;
        let y0 = self.y0 + row as u32 * self.row_height;
        Rect {
            x0,
            y0,
            x1: x0 + self.col_width,
            y1: y0 + self.row_height,
        }
    }
}

/// Full figure geometry derived from the constants above.
#[derive(Debug, Clone, Copy)]
pub struct FigureLayout {
    pub width: u32,
    pub height: u32,
    pub plot_panel: Rect,
    pub table_panel: Rect,
}

impl Default for FigureLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl FigureLayout {
    pub fn new() -> Self {
        let width = (FIGURE_WIDTH_IN * DPI) as u32;
        let height = (FIGURE_HEIGHT_IN * DPI) as u32;

        let content_x0 = (MARGIN_LEFT * width as f64).round();
        let content_x1 = (MARGIN_RIGHT * width as f64).round();
        let content_y0 = ((1.0 - MARGIN_TOP) * height as f64).round();
        let content_y1 = ((1.0 - MARGIN_BOTTOM) * height as f64).round();

        // wspace is a fraction of the mean panel width, so the gap scales
        // with the ratio units: content = w1 + w2 + gap.
        let content_w = content_x1 - content_x0;
        let ratio_sum = WIDTH_RATIO_PLOT + WIDTH_RATIO_TABLE;
        let gap_units = WSPACE * ratio_sum / 2.0;
        let unit = content_w / (ratio_sum + gap_units);

        let plot_w = (unit * WIDTH_RATIO_PLOT).round();
        let gap = (unit * gap_units).round();

        let plot_panel = Rect {
            x0: content_x0 as u32,
            y0: content_y0 as u32,
            x1: (content_x0 + plot_w) as u32,
            y1: content_y1 as u32,
        };
        let table_panel = Rect {
            x0: (content_x0 + plot_w + gap) as u32,
            y0: content_y0 as u32,
            x1: content_x1 as u32,
            y1: content_y1 as u32,
        };

        Self {
            width,
            height,
            plot_panel,
            table_panel,
        }
    }

    /// Convert a point size to pixels at the figure DPI.
    pub fn pt_to_px(pt: f64) -> u32 {
        (pt * DPI / 72.0).round() as u32
    }

    /// Chart area for the left panel with a square inner plot box, centered
    /// within the panel.
    pub fn plot_box(&self) -> ChartBox {
        let x_label_area = Self::pt_to_px(AXIS_FONT_PT) * 3;
        let y_label_area = Self::pt_to_px(AXIS_FONT_PT) * 3;
        let caption_area = Self::pt_to_px(TITLE_FONT_PT) * 2;

        let panel = self.plot_panel;
        let side = (panel.width() - y_label_area).min(panel.height() - x_label_area - caption_area);

        let outer_w = side + y_label_area;
        let outer_h = side + x_label_area + caption_area;
        let x0 = panel.x0 + (panel.width() - outer_w) / 2;
        let y0 = panel.y0 + (panel.height() - outer_h) / 2;

        ChartBox {
            area: Rect {
                x0,
                y0,
                x1: x0 + outer_w,
                y1: y0 + outer_h,
            },
            x_label_area,
            y_label_area,
            caption_area,
        }
    }

    /// Cell grid for the metrics table: columns evenly divide the panel
    /// width, rows run at the scaled height, the block sits centered.
    pub fn table_grid(&self, rows: usize, cols: usize) -> TableGrid {
        let panel = self.table_panel;
        let font_px = Self::pt_to_px(TABLE_FONT_PT);
        let row_height = (font_px as f64 * TABLE_LINE_HEIGHT * TABLE_ROW_SCALE).round() as u32;
        let col_width = if cols == 0 { 0 } else { panel.width() / cols as u32 };

        let table_height = row_height * rows as u32;
        let y0 = panel.y0 + panel.height().saturating_sub(table_height) / 2;
        let x0 = panel.x0 + (panel.width() - col_width * cols as u32) / 2;

        TableGrid {
            x0,
            y0,
            col_width,
            row_height,
            rows,
            cols,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn figure_is_12_by_6_inches_at_300_dpi() {
        let layout = FigureLayout::new();
        assert_eq!(layout.width, 3600);
        assert_eq!(layout.height, 1800);
    }

    #[test]
    fn pt_to_px_uses_dpi() {
        assert_eq!(FigureLayout::pt_to_px(72.0), 300);
    }

    #[test]
    fn content_spans_declared_margins() {
        let layout = FigureLayout::new();
        assert_eq!(layout.plot_panel.x0, 252); // 7% of 3600
        assert_eq!(layout.table_panel.x1, 3564); // 99% of 3600
    }

    #[test]
    fn panel_width_ratio_is_one_to_one_point_seven() {
        let layout = FigureLayout::new();
        let ratio = layout.table_panel.width() as f64 / layout.plot_panel.width() as f64;
        assert!((ratio - 1.7).abs() < 0.01, "ratio was {ratio}");
    }

    #[test]
    fn panel_gap_matches_wspace() {
        let layout = FigureLayout::new();
        let gap = (layout.table_panel.x0 - layout.plot_panel.x1) as f64;
        let mean_width =
            (layout.plot_panel.width() + layout.table_panel.width()) as f64 / 2.0;
        assert!((gap / mean_width - 0.05).abs() < 0.005, "gap was {gap}");
    }

    #[test]
    fn panels_share_vertical_extent() {
        let layout = FigureLayout::new();
        assert_eq!(layout.plot_panel.y0, layout.table_panel.y0);
        assert_eq!(layout.plot_panel.y1, layout.table_panel.y1);
    }

    #[test]
    fn plot_box_inner_area_is_square() {
        let layout = FigureLayout::new();
        let chart_box = layout.plot_box();
        let inner_w = chart_box.area.width() - chart_box.y_label_area;
        let inner_h =
            chart_box.area.height() - chart_box.x_label_area - chart_box.caption_area;
        assert_eq!(inner_w, inner_h);
    }

    #[test]
    fn plot_box_stays_within_panel() {
        let layout = FigureLayout::new();
        let area = layout.plot_box().area;
        let panel = layout.plot_panel;
        assert!(area.x0 >= panel.x0 && area.x1 <= panel.x1);
        assert!(area.y0 >= panel.y0 && area.y1 <= panel.y1);
    }

    #[test]
    fn table_grid_centers_rows_in_panel() {
        let layout = FigureLayout::new();
        let grid = layout.table_grid(7, 2);
        let panel = layout.table_panel;

        let table_h = grid.row_height * 7;
        assert!(table_h <= panel.height());

        let top_gap = grid.y0 - panel.y0;
        let bottom_gap = panel.y1 - (grid.y0 + table_h);
        assert!(top_gap.abs_diff(bottom_gap) <= 1);
    }

    #[test]
    fn table_columns_divide_panel_width() {
        let layout = FigureLayout::new();
        let grid = layout.table_grid(2, 2);
        assert_eq!(grid.col_width, layout.table_panel.width() / 2);

        let last = grid.cell(1, 1);
        assert!(last.x1 <= layout.table_panel.x1);
        assert!(last.y1 <= layout.table_panel.y1);
    }

    #[test]
    fn table_rows_are_double_the_default_height() {
        let layout = FigureLayout::new();
        let grid = layout.table_grid(1, 1);
        let font_px = FigureLayout::pt_to_px(TABLE_FONT_PT) as f64;
        assert_eq!(grid.row_height, (font_px * 1.2 * 2.0).round() as u32);
    }
}
