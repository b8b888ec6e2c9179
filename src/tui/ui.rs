use ratatui::Frame;

use crate::core::state::App;
use crate::tui::PlotStyle;
use crate::tui::component::Component;
use crate::tui::components::{PlotChart, WaitingScreen};

/// Draw one full frame. The plot always takes the whole terminal.
pub fn draw_ui(frame: &mut Frame, app: &App, style: &PlotStyle) {
    let area = frame.area();

    if app.samples_seen == 0 && !app.input_closed {
        WaitingScreen::new(&style.title).render(frame, area);
    } else {
        PlotChart::new(&app.window, app.first_index(), app.input_closed, style)
            .render(frame, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::test_support::{buffer_text, test_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &App) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| draw_ui(f, app, &PlotStyle::default()))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_waiting_before_first_sample() {
        let app = test_app(80, &[]);
        assert!(draw(&app).contains("Waiting for data..."));
    }

    #[test]
    fn test_chart_after_first_sample() {
        let app = test_app(80, &[1.0]);
        let text = draw(&app);
        assert!(!text.contains("Waiting for data..."));
        assert!(text.contains("ploot"));
    }

    #[test]
    fn test_empty_input_shows_end_of_input() {
        let mut app = test_app(80, &[]);
        update(&mut app, Action::InputClosed);
        assert!(draw(&app).contains("(end of input)"));
    }
}
