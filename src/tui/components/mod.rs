//! # TUI Components
//!
//! Stateless, props-based components. Each receives everything it draws as
//! struct fields and renders into the `Rect` it is given:
//!
//! - `PlotChart`: the scrolling line chart of the sample window
//! - `WaitingScreen`: placeholder until the first sample arrives
//!
//! ```text
//! components/
//! ├── mod.rs      (this file)
//! ├── plot.rs     (line chart, axes, legend)
//! └── waiting.rs  (startup placeholder)
//! ```

pub mod plot;
pub mod waiting;

pub use plot::PlotChart;
pub use waiting::WaitingScreen;
