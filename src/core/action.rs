//! # Actions
//!
//! Everything that can happen to the plot becomes an `Action`.
//! A number arrives on stdin? That's `Action::Sample(value)`.
//! The terminal is resized? That's `Action::Resize { .. }`.
//!
//! The `update()` function applies one action to the state and returns the
//! `Effect` the caller must carry out. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info};

use crate::core::state::{App, Viewport};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Quit key or interrupt
    Quit,
    /// Terminal resized to the given size in cells
    Resize { width: u16, height: u16 },
    /// A parsed number from the input stream
    Sample(f64),
    /// The input stream reached its end
    InputClosed,
}

/// What the event loop must do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Render,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Quit => Effect::Quit,
        Action::Resize { width, height } => {
            app.viewport = Viewport { width, height };
            let capacity = app.window_capacity();
            debug!("Resized to {}x{}, window capacity {}", width, height, capacity);
            app.window.resize(capacity);
            Effect::Render
        }
        Action::Sample(value) => {
            app.window.append(value);
            app.samples_seen += 1;
            Effect::Render
        }
        Action::InputClosed => {
            info!("Input closed after {} samples", app.samples_seen);
            app.input_closed = true;
            Effect::Render
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resized(fixed_width: Option<usize>, width: u16) -> App {
        let mut app = App::new(fixed_width);
        update(&mut app, Action::Resize { width, height: 24 });
        app
    }

    #[test]
    fn test_quit() {
        let mut app = resized(None, 80);
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }

    #[test]
    fn test_sample_appends_and_renders() {
        let mut app = resized(None, 80);
        assert_eq!(update(&mut app, Action::Sample(1.5)), Effect::Render);
        assert_eq!(app.window.to_vec(), vec![1.5]);
        assert_eq!(app.samples_seen, 1);
    }

    #[test]
    fn test_resize_sets_viewport_and_capacity() {
        let mut app = App::new(None);
        let effect = update(
            &mut app,
            Action::Resize {
                width: 120,
                height: 40,
            },
        );
        assert_eq!(effect, Effect::Render);
        assert_eq!(
            app.viewport,
            Viewport {
                width: 120,
                height: 40
            }
        );
        assert_eq!(app.window.capacity(), 120);
    }

    #[test]
    fn test_resize_shrink_trims_window() {
        let mut app = resized(None, 10);
        for v in 1..=8 {
            update(&mut app, Action::Sample(v as f64));
        }
        update(&mut app, Action::Resize { width: 3, height: 24 });
        assert_eq!(app.window.to_vec(), vec![6.0, 7.0, 8.0]);
        // Total count is unaffected by eviction
        assert_eq!(app.samples_seen, 8);
        assert_eq!(app.first_index(), 5);
    }

    #[test]
    fn test_fixed_width_ignores_terminal_width() {
        let mut app = resized(Some(2), 80);
        for v in [1.0, 2.0, 3.0] {
            update(&mut app, Action::Sample(v));
        }
        assert_eq!(app.window.to_vec(), vec![2.0, 3.0]);

        update(&mut app, Action::Resize { width: 1, height: 5 });
        assert_eq!(app.window.to_vec(), vec![2.0, 3.0]);
    }

    #[test]
    fn test_samples_before_first_resize_use_initial_capacity() {
        let mut app = App::new(None);
        update(&mut app, Action::Sample(1.0));
        update(&mut app, Action::Sample(2.0));
        assert_eq!(app.window.to_vec(), vec![2.0]);
    }

    #[test]
    fn test_input_closed_keeps_window() {
        let mut app = resized(None, 80);
        update(&mut app, Action::Sample(4.0));
        assert_eq!(update(&mut app, Action::InputClosed), Effect::Render);
        assert!(app.input_closed);
        assert_eq!(app.window.to_vec(), vec![4.0]);
    }
}
