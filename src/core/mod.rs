//! # Core Plot Logic
//!
//! The windowing state of the plot and the reducer that mutates it.
//! It knows nothing about terminals, threads or channels.
//!
//! ```text
//!        stdin thread                 terminal
//!     ┌──────────────┐          ┌──────────────┐
//!     │   ingest     │          │  EventStream │
//!     │ (tokens→f64) │          │ (keys,resize)│
//!     └──────┬───────┘          └──────┬───────┘
//!            │ Sample / InputClosed    │ Quit / Resize
//!            └───────────┬─────────────┘
//!                        ▼
//!            ┌─────────────────────────┐
//!            │         CORE            │
//!            │  (this module)          │
//!            │                         │
//!            │  • App (window, size)   │
//!            │  • Action (events)      │
//!            │  • update() (reducer)   │
//!            └───────────┬─────────────┘
//!                        ▼
//!                 ratatui Chart
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct — window, viewport and input status
//! - [`action`]: The `Action` enum and `update()`
//! - [`window`]: The bounded sliding window of samples
//! - [`config`]: Settings file and override resolution

pub mod action;
pub mod config;
pub mod state;
pub mod window;
