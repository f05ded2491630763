//! Pauses between the phases of a turn.

use core::time::Duration;

/// A phase of a turn that is followed by a pause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// The computer is picking a rank.
    Think,
    /// The ask has been announced.
    Ask,
    /// The defender's answer has been revealed.
    Reveal,
    /// The ask has been resolved.
    Settle,
}

/// Waits out the pause after a phase.
pub trait Pacer: Send + Sync {
    /// Blocks for `duration`. Never called with a zero duration.
    fn pause(&self, phase: Phase, duration: Duration);
}

/// Sleeps the current thread.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadPacer;

#[cfg(feature = "std")]
impl Pacer for ThreadPacer {
    fn pause(&self, _phase: Phase, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Returns immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPacing;

impl Pacer for NoPacing {
    fn pause(&self, _phase: Phase, _duration: Duration) {}
}
