//! Sliding window of system snapshots behind the live health view
//!
//! Seeded from hourly history, then extended one live reading at a time.
//! The window keeps its seeded length: every append evicts the oldest entry.

use std::collections::VecDeque;
use std::sync::{PoisonError, RwLock};

use crate::synth::{RandomSource, Synthesizer, SystemMetricsSnapshot};

struct Window {
    entries: VecDeque<SystemMetricsSnapshot>,
    capacity: usize,
}

/// Fixed-size, oldest-first buffer of [`SystemMetricsSnapshot`]s
pub struct LiveFeed {
    window: RwLock<Window>,
}

impl LiveFeed {
    /// Empty feed holding at most `capacity` snapshots (at least one).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            window: RwLock::new(Window {
                entries: VecDeque::with_capacity(capacity),
                capacity,
            }),
        }
    }

    /// Feed pre-filled with `history`; its length becomes the capacity.
    pub fn seeded(history: Vec<SystemMetricsSnapshot>) -> Self {
        let feed = Self::new(history.len());
        feed.reseed(history);
        feed
    }

    /// Replace the contents with `history` and resize to its length.
    pub fn reseed(&self, history: Vec<SystemMetricsSnapshot>) {
        let mut window = self.window.write().unwrap_or_else(PoisonError::into_inner);
        window.capacity = history.len().max(1);
        window.entries = history.into();
        while window.entries.len() > window.capacity {
            window.entries.pop_front();
        }
    }

    /// Append `snapshot`, evicting and returning the oldest entry when full.
    pub fn push(&self, snapshot: SystemMetricsSnapshot) -> Option<SystemMetricsSnapshot> {
        let mut window = self.window.write().unwrap_or_else(PoisonError::into_inner);
        let evicted = if window.entries.len() >= window.capacity {
            window.entries.pop_front()
        } else {
            None
        };
        window.entries.push_back(snapshot);
        evicted
    }

    /// Generate one live reading and append it. Returns the new reading.
    pub fn tick(&self, synth: &Synthesizer, rng: &mut dyn RandomSource) -> SystemMetricsSnapshot {
        let snapshot = synth.live_system_snapshot(rng);
        self.push(snapshot.clone());
        snapshot
    }

    /// Copy of the window, oldest first.
    pub fn snapshot(&self) -> Vec<SystemMetricsSnapshot> {
        self.read(|w| w.entries.iter().cloned().collect())
    }

    pub fn latest(&self) -> Option<SystemMetricsSnapshot> {
        self.read(|w| w.entries.back().cloned())
    }

    pub fn len(&self) -> usize {
        self.read(|w| w.entries.len())
    }

    pub fn is_empty(&self) -> bool {
        self.read(|w| w.entries.is_empty())
    }

    pub fn capacity(&self) -> usize {
        self.read(|w| w.capacity)
    }

    fn read<T>(&self, f: impl FnOnce(&Window) -> T) -> T {
        let window = self.window.read().unwrap_or_else(PoisonError::into_inner);
        f(&window)
    }
}
