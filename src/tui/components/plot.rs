//! # Plot Component
//!
//! The live line chart: one dataset drawn from the window, scrolling left
//! as new samples arrive.
//!
//! ## Axes
//!
//! - **X** uses absolute sample indices. The bounds always span the whole
//!   window capacity, so the line fills in from the left until the window
//!   is full and then scrolls.
//! - **Y** follows the window's min and max unless a bound is fixed in the
//!   config. A flat window is padded so the axis never collapses to a point.
//!
//! The legend carries the window statistics
//! (`Cur: 1.000 Min: 0.000 Max: 2.000 Avg: 1.000`).

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Axis, Block, Chart, Dataset, GraphType, LegendPosition};

use crate::core::window::{WindowBuffer, WindowStats};
use crate::tui::PlotStyle;
use crate::tui::component::Component;

const LABEL_COUNT: usize = 5;

pub struct PlotChart<'a> {
    pub window: &'a WindowBuffer,
    /// Absolute index of the oldest sample in the window
    pub first_index: u64,
    pub input_closed: bool,
    pub style: &'a PlotStyle,
}

impl<'a> PlotChart<'a> {
    pub fn new(
        window: &'a WindowBuffer,
        first_index: u64,
        input_closed: bool,
        style: &'a PlotStyle,
    ) -> Self {
        Self {
            window,
            first_index,
            input_closed,
            style,
        }
    }

    fn title(&self) -> String {
        if self.input_closed {
            format!("{} (end of input)", self.style.title)
        } else {
            self.style.title.clone()
        }
    }

    fn points(&self) -> Vec<(f64, f64)> {
        self.window
            .iter()
            .enumerate()
            .map(|(i, v)| ((self.first_index + i as u64) as f64, v))
            .collect()
    }
}

impl Component for PlotChart<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let stats = self.window.stats();
        let points = self.points();
        let x = x_bounds(self.first_index, self.window.capacity());
        let y = y_bounds(stats, self.style.y_min, self.style.y_max);

        let mut dataset = Dataset::default()
            .marker(self.style.marker)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(self.style.color))
            .data(&points);
        if let Some(stats) = stats {
            dataset = dataset.name(legend_label(&stats));
        }

        let axis_style = Style::default().fg(Color::DarkGray);
        let chart = Chart::new(vec![dataset])
            .block(Block::bordered().title(self.title()))
            .x_axis(
                Axis::default()
                    .style(axis_style)
                    .bounds(x)
                    .labels(labels(x, |v| format!("{v:.0}"))),
            )
            .y_axis(
                Axis::default()
                    .style(axis_style)
                    .bounds(y)
                    .labels(labels(y, format_value)),
            )
            .legend_position(Some(LegendPosition::TopLeft))
            .hidden_legend_constraints((Constraint::Ratio(1, 1), Constraint::Ratio(1, 4)));

        frame.render_widget(chart, area);
    }
}

/// X bounds covering the full window capacity starting at the oldest sample.
pub fn x_bounds(first_index: u64, capacity: usize) -> [f64; 2] {
    let start = first_index as f64;
    let span = capacity.max(2) as f64 - 1.0;
    [start, start + span]
}

/// Y bounds from the window statistics and the configured overrides.
pub fn y_bounds(stats: Option<WindowStats>, y_min: Option<f64>, y_max: Option<f64>) -> [f64; 2] {
    let lo = y_min.or(stats.map(|s| s.min)).unwrap_or(0.0);
    let hi = y_max.or(stats.map(|s| s.max)).unwrap_or(1.0);

    match (hi > lo, y_min, y_max) {
        (true, _, _) => [lo, hi],
        // Samples all below a fixed minimum
        (false, Some(_), None) => [lo, lo + 1.0],
        // Samples all above a fixed maximum
        (false, None, Some(_)) => [hi - 1.0, hi],
        // Flat window
        _ => [lo - 1.0, hi + 1.0],
    }
}

fn labels(bounds: [f64; 2], format: impl Fn(f64) -> String) -> Vec<String> {
    let step = (bounds[1] - bounds[0]) / (LABEL_COUNT - 1) as f64;
    (0..LABEL_COUNT)
        .map(|i| format(bounds[0] + step * i as f64))
        .collect()
}

/// Compact number formatting for labels and the legend.
pub fn format_value(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-3..1e6).contains(&magnitude) {
        format!("{value:.2e}")
    } else {
        format!("{value:.3}")
    }
}

pub fn legend_label(stats: &WindowStats) -> String {
    format!(
        "Cur: {} Min: {} Max: {} Avg: {}",
        format_value(stats.current),
        format_value(stats.min),
        format_value(stats.max),
        format_value(stats.mean)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{buffer_text, test_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_text(width: u16, height: u16, chart: &mut PlotChart) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| chart.render(f, f.area())).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_x_bounds_span_capacity() {
        assert_eq!(x_bounds(0, 80), [0.0, 79.0]);
        assert_eq!(x_bounds(120, 80), [120.0, 199.0]);
        // Degenerate capacities still give a usable axis
        assert_eq!(x_bounds(5, 1), [5.0, 6.0]);
        assert_eq!(x_bounds(0, 0), [0.0, 1.0]);
    }

    #[test]
    fn test_y_bounds_follow_window() {
        let stats = WindowStats {
            current: 2.0,
            min: -1.0,
            max: 3.0,
            mean: 1.0,
        };
        assert_eq!(y_bounds(Some(stats), None, None), [-1.0, 3.0]);
        assert_eq!(y_bounds(Some(stats), Some(-5.0), None), [-5.0, 3.0]);
        assert_eq!(y_bounds(Some(stats), None, Some(10.0)), [-1.0, 10.0]);
        assert_eq!(y_bounds(Some(stats), Some(0.0), Some(1.0)), [0.0, 1.0]);
    }

    #[test]
    fn test_y_bounds_never_collapse() {
        let flat = WindowStats {
            current: 4.0,
            min: 4.0,
            max: 4.0,
            mean: 4.0,
        };
        assert_eq!(y_bounds(Some(flat), None, None), [3.0, 5.0]);
        assert_eq!(y_bounds(Some(flat), Some(10.0), None), [10.0, 11.0]);
        assert_eq!(y_bounds(Some(flat), None, Some(-2.0)), [-3.0, -2.0]);
        assert_eq!(y_bounds(None, None, None), [0.0, 1.0]);
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(0.0), "0.000");
        assert_eq!(format_value(1.5), "1.500");
        assert_eq!(format_value(-42.25), "-42.250");
        assert_eq!(format_value(1234567.0), "1.23e6");
        assert_eq!(format_value(0.0001), "1.00e-4");
    }

    #[test]
    fn test_labels_are_evenly_spaced() {
        assert_eq!(
            labels([0.0, 8.0], |v| format!("{v:.0}")),
            vec!["0", "2", "4", "6", "8"]
        );
    }

    #[test]
    fn test_legend_label() {
        let stats = WindowStats {
            current: 3.0,
            min: 1.0,
            max: 3.0,
            mean: 2.0,
        };
        assert_eq!(
            legend_label(&stats),
            "Cur: 3.000 Min: 1.000 Max: 3.000 Avg: 2.000"
        );
    }

    #[test]
    fn test_renders_title() {
        let app = test_app(60, &[1.0, 2.0, 3.0]);
        let style = PlotStyle::default();
        let mut chart = PlotChart::new(&app.window, app.first_index(), false, &style);
        let text = render_text(60, 20, &mut chart);
        assert!(text.contains("ploot"));
        assert!(!text.contains("(end of input)"));
    }

    #[test]
    fn test_renders_end_of_input_marker() {
        let app = test_app(60, &[1.0]);
        let style = PlotStyle::default();
        let mut chart = PlotChart::new(&app.window, app.first_index(), true, &style);
        let text = render_text(60, 20, &mut chart);
        assert!(text.contains("ploot (end of input)"));
    }

    #[test]
    fn test_empty_window_renders() {
        let app = test_app(40, &[]);
        let style = PlotStyle::default();
        let mut chart = PlotChart::new(&app.window, app.first_index(), true, &style);
        let text = render_text(40, 10, &mut chart);
        assert!(text.contains("ploot"));
    }

    #[test]
    fn test_small_area_does_not_panic() {
        let app = test_app(2, &[1.0, 5.0, 2.0]);
        let style = PlotStyle::default();
        let mut chart = PlotChart::new(&app.window, app.first_index(), false, &style);
        render_text(20, 6, &mut chart);
    }
}
