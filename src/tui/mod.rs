//! # TUI Adapter
//!
//! The ratatui-specific layer. Owns the terminal, runs the event loop, and
//! translates terminal events and incoming samples into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! Two independent producers feed the loop:
//!
//! - the ingestion thread, through the bounded sample channel
//! - crossterm's `EventStream` (keys and resizes)
//!
//! The loop waits on whichever is ready first, applies exactly one action
//! through `update()` and draws once per action. It is the only place the
//! window is mutated or drawn, so no locking is involved.
//!
//! The `select!` is biased toward terminal events: a pending quit is always
//! handled before pending samples, however fast the producer is writing.
//! When the sample channel closes its branch is disabled and the last
//! window stays on screen until the user quits.

mod component;
pub mod components;
mod event;
mod ui;

use futures::{Stream, StreamExt};
use log::{error, info, warn};
use ratatui::DefaultTerminal;
use ratatui::style::Color;
use ratatui::symbols::Marker;
use std::io::{self, BufReader};
use std::str::FromStr;
use tokio::sync::mpsc;

use crossterm::event::{Event, EventStream};

use crate::MarkerKind;
use crate::core::action::{Action, Effect, update};
use crate::core::config::{DEFAULT_TITLE, ResolvedConfig};
use crate::core::state::App;
use crate::ingest::{SAMPLE_CHANNEL_CAPACITY, spawn_ingestor};

pub use event::translate;

/// Presentation settings for the chart (not part of the core state)
#[derive(Debug, Clone)]
pub struct PlotStyle {
    pub title: String,
    pub marker: Marker,
    pub color: Color,
    pub y_min: Option<f64>,
    pub y_max: Option<f64>,
}

impl PlotStyle {
    pub fn from_config(config: &ResolvedConfig) -> Self {
        let color = Color::from_str(&config.color).unwrap_or_else(|_| {
            warn!("Unknown color '{}', using cyan", config.color);
            Color::Cyan
        });
        Self {
            title: config.title.clone(),
            marker: marker_symbol(config.marker),
            color,
            y_min: config.y_min,
            y_max: config.y_max,
        }
    }
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            marker: Marker::Braille,
            color: Color::Cyan,
            y_min: None,
            y_max: None,
        }
    }
}

fn marker_symbol(kind: MarkerKind) -> Marker {
    match kind {
        MarkerKind::Braille => Marker::Braille,
        MarkerKind::Dot => Marker::Dot,
        MarkerKind::Block => Marker::Block,
        MarkerKind::HalfBlock => Marker::HalfBlock,
    }
}

/// Puts the terminal in raw mode on the alternate screen for as long as it
/// lives; restores it on drop, including on early `?` returns.
struct TerminalGuard {
    terminal: DefaultTerminal,
}

impl TerminalGuard {
    fn new() -> io::Result<Self> {
        let terminal = ratatui::try_init()?;
        info!("Terminal initialized");
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        match ratatui::try_restore() {
            Ok(()) => info!("Terminal restored"),
            Err(e) => warn!("Failed to restore terminal: {}", e),
        }
    }
}

pub async fn run(config: ResolvedConfig) -> io::Result<()> {
    let style = PlotStyle::from_config(&config);
    let mut app = App::new(config.fixed_width);

    let mut guard = TerminalGuard::new().inspect_err(|e| {
        error!("Terminal initialization failed: {}", e);
    })?;
    let size = guard.terminal.size()?;
    update(
        &mut app,
        Action::Resize {
            width: size.width,
            height: size.height,
        },
    );

    let mut samples = spawn_ingestor(BufReader::new(io::stdin()), SAMPLE_CHANNEL_CAPACITY)?;
    let mut events = EventStream::new();

    let terminal = &mut guard.terminal;
    let result = run_loop(&mut app, &mut events, &mut samples, |app: &App| {
        terminal
            .draw(|f| ui::draw_ui(f, app, &style))
            .map(|_| ())
    })
    .await;

    info!("Event loop finished after {} samples", app.samples_seen);
    result
}

/// Drive the plot until a quit action.
///
/// `render` is called once up front and then once after every state change,
/// in the same order as the changes.
pub async fn run_loop<S, F>(
    app: &mut App,
    events: &mut S,
    samples: &mut mpsc::Receiver<f64>,
    mut render: F,
) -> io::Result<()>
where
    S: Stream<Item = io::Result<Event>> + Unpin,
    F: FnMut(&App) -> io::Result<()>,
{
    render(app)?;

    loop {
        let action = tokio::select! {
            biased;

            event = events.next() => match event {
                Some(Ok(event)) => match translate(&event) {
                    Some(action) => action,
                    None => continue,
                },
                Some(Err(e)) => {
                    error!("Terminal event stream failed: {}", e);
                    return Err(e);
                }
                None => {
                    warn!("Terminal event stream ended");
                    Action::Quit
                }
            },
            sample = samples.recv(), if !app.input_closed => match sample {
                Some(value) => Action::Sample(value),
                None => Action::InputClosed,
            },
        };

        match update(app, action) {
            Effect::Quit => {
                info!("Quit requested");
                return Ok(());
            }
            Effect::Render => render(app)?,
        }
    }
}
