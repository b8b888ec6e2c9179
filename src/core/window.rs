//! # Window Buffer
//!
//! The most recent samples, oldest first. Capacity follows the plot width;
//! anything older than the newest `capacity` samples is dropped.
//!
//! Both mutations trim in one batch, since a resize can shrink the capacity
//! by any amount at once.

use std::collections::VecDeque;

/// Summary of the samples currently in the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowStats {
    pub current: f64,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

#[derive(Debug, Clone)]
pub struct WindowBuffer {
    samples: VecDeque<f64>,
    capacity: usize,
}

impl WindowBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a sample, evicting the oldest ones if the window overflows.
    pub fn append(&mut self, sample: f64) {
        self.samples.push_back(sample);
        self.trim();
    }

    /// Change the capacity. Shrinking keeps the newest samples; growing
    /// leaves the contents untouched.
    pub fn resize(&mut self, capacity: usize) {
        self.capacity = capacity;
        self.trim();
    }

    fn trim(&mut self) {
        let len = self.samples.len();
        if len > self.capacity {
            self.samples.drain(..len - self.capacity);
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn latest(&self) -> Option<f64> {
        self.samples.back().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.iter().collect()
    }

    /// Current, min, max and mean of the window. `None` when empty.
    pub fn stats(&self) -> Option<WindowStats> {
        let current = self.latest()?;
        let (min, max, sum) = self.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY, 0.0),
            |(min, max, sum), v| (min.min(v), max.max(v), sum + v),
        );
        Some(WindowStats {
            current,
            min,
            max,
            mean: sum / self.len() as f64,
        })
    }
}
