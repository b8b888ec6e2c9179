//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use ratatui::buffer::Buffer;

use crate::core::action::{Action, update};
use crate::core::state::App;

/// Creates an App sized to `width` columns with `samples` already appended.
pub fn test_app(width: u16, samples: &[f64]) -> App {
    let mut app = App::new(None);
    update(&mut app, Action::Resize { width, height: 24 });
    for &sample in samples {
        update(&mut app, Action::Sample(sample));
    }
    app
}

/// All symbols of a rendered buffer, concatenated row by row.
pub fn buffer_text(buffer: &Buffer) -> String {
    buffer.content().iter().map(|c| c.symbol()).collect()
}
