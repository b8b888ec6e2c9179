//! # Application State
//!
//! Core plot state. No terminal types live here; presentation settings
//! (title, marker, colors) belong to the `tui` module.
//!
//! ```text
//! App
//! ├── window: WindowBuffer      // newest samples, oldest first
//! ├── viewport: Viewport        // terminal size in cells
//! ├── fixed_width: Option       // window size override
//! ├── samples_seen: u64         // total samples ever appended
//! └── input_closed: bool        // stdin reached end of stream
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::window::WindowBuffer;

/// Window capacity before the first terminal size is known.
pub const INITIAL_CAPACITY: usize = 1;

/// Terminal size in character cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

#[derive(Debug)]
pub struct App {
    pub window: WindowBuffer,
    pub viewport: Viewport,
    pub fixed_width: Option<usize>,
    pub samples_seen: u64,
    pub input_closed: bool,
}

impl App {
    pub fn new(fixed_width: Option<usize>) -> Self {
        Self {
            window: WindowBuffer::new(INITIAL_CAPACITY),
            viewport: Viewport::default(),
            fixed_width,
            samples_seen: 0,
            input_closed: false,
        }
    }

    /// Number of samples the window should hold for the current viewport.
    pub fn window_capacity(&self) -> usize {
        self.fixed_width
            .unwrap_or(usize::from(self.viewport.width))
    }

    /// Absolute index of the oldest sample in the window.
    pub fn first_index(&self) -> u64 {
        self.samples_seen.saturating_sub(self.window.len() as u64)
    }
}
