//! # Token Ingestion
//!
//! Reads the piped input on a dedicated thread, splits it into
//! whitespace-delimited tokens and forwards every token that parses as a
//! finite `f64` over the sample channel. Anything else is dropped without a
//! trace: a noisy producer must never interrupt the plot.
//!
//! The thread is a plain OS thread rather than a tokio blocking task. A read
//! on stdin can't be cancelled, and the runtime would otherwise wait for it
//! on shutdown. The thread is simply abandoned when the process exits.
//!
//! Backpressure comes from the bounded channel: when the event loop falls
//! behind, `blocking_send` parks the reader until there is room again.

use log::{debug, info, warn};
use std::io::{self, BufRead};
use std::thread;
use tokio::sync::mpsc;

/// Samples buffered between the reader thread and the event loop.
pub const SAMPLE_CHANNEL_CAPACITY: usize = 256;

const THREAD_NAME: &str = "ploot-ingest";

/// Longest token kept while waiting for its closing whitespace. Nothing this
/// long is a number, so longer tokens are dropped instead of buffered.
pub const MAX_TOKEN_LEN: usize = 64 * 1024;

/// Parse one token. Only finite decimal numbers are samples.
pub fn parse_sample(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// All samples in a chunk of raw input, in order.
///
/// Works on bytes so a stray invalid UTF-8 sequence only costs the token
/// it appears in.
pub fn parse_samples(bytes: &[u8]) -> impl Iterator<Item = f64> + '_ {
    bytes
        .split(|b| b.is_ascii_whitespace())
        .filter(|token| !token.is_empty())
        .filter_map(|token| std::str::from_utf8(token).ok())
        .filter_map(parse_sample)
}

/// Read `reader` to end of stream, sending every sample on `tx`.
///
/// Tokens are forwarded as soon as the whitespace after them arrives, so a
/// producer that never writes a newline is still plotted live. The token
/// still open at the end of a read is carried into the next one and flushed
/// at end of stream.
///
/// Returns the number of samples forwarded. Stops early if the receiver is
/// dropped. A read error is treated as the end of the input.
pub fn ingest<R: BufRead>(mut reader: R, tx: &mpsc::Sender<f64>) -> usize {
    let mut partial = Vec::new();
    let mut oversized = false;
    let mut forwarded = 0usize;

    loop {
        let (complete, used) = match reader.fill_buf() {
            Ok([]) => break,
            Ok(chunk) => {
                let complete = match chunk.iter().rposition(u8::is_ascii_whitespace) {
                    Some(end) => {
                        // An oversized token runs up to the first whitespace
                        let start = if oversized {
                            chunk.iter().position(u8::is_ascii_whitespace).unwrap_or(end)
                        } else {
                            0
                        };
                        oversized = false;
                        partial.extend_from_slice(&chunk[start..end]);
                        std::mem::replace(&mut partial, chunk[end + 1..].to_vec())
                    }
                    None => {
                        if !oversized {
                            partial.extend_from_slice(chunk);
                        }
                        Vec::new()
                    }
                };
                (complete, chunk.len())
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                warn!("Input read failed, treating as end of input: {}", e);
                break;
            }
        };

        reader.consume(used);

        if partial.len() > MAX_TOKEN_LEN {
            debug!("Discarding token longer than {} bytes", MAX_TOKEN_LEN);
            partial.clear();
            oversized = true;
        }
        if !forward(&complete, tx, &mut forwarded) {
            return forwarded;
        }
    }

    // The last token has no whitespace after it
    if !forward(&partial, tx, &mut forwarded) {
        return forwarded;
    }
    info!("End of input reached, {} samples forwarded", forwarded);
    forwarded
}

/// Send every sample in `bytes`. Returns false once the receiver is gone.
fn forward(bytes: &[u8], tx: &mpsc::Sender<f64>, forwarded: &mut usize) -> bool {
    for sample in parse_samples(bytes) {
        if tx.blocking_send(sample).is_err() {
            debug!("Sample receiver dropped after {} samples", forwarded);
            return false;
        }
        *forwarded += 1;
    }
    true
}

/// Start the reader thread and return the receiving end of the sample channel.
///
/// The channel closes when the input reaches end of stream.
pub fn spawn_ingestor<R>(reader: R, capacity: usize) -> io::Result<mpsc::Receiver<f64>>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::channel(capacity);
    thread::Builder::new()
        .name(THREAD_NAME.into())
        .spawn(move || ingest(reader, &tx))?;
    info!("Ingestion thread started");
    Ok(rx)
}

/// Whether stdin is fed by a pipe.
#[cfg(unix)]
pub fn stdin_is_pipe() -> io::Result<bool> {
    use std::os::fd::AsFd;
    use std::os::unix::fs::FileTypeExt;

    let fd = io::stdin().as_fd().try_clone_to_owned()?;
    let metadata = std::fs::File::from(fd).metadata()?;
    Ok(metadata.file_type().is_fifo())
}

/// Whether stdin is fed by a pipe.
#[cfg(not(unix))]
pub fn stdin_is_pipe() -> io::Result<bool> {
    use std::io::IsTerminal;

    Ok(!io::stdin().is_terminal())
}
