#[cfg(feature = "std")]
pub struct Mutex<T>(std::sync::Mutex<T>);

#[cfg(feature = "std")]
impl<T> Mutex<T> {
    pub const fn new(value: T) -> Self {
        Self(std::sync::Mutex::new(value))
    }

    pub fn lock(&self) -> std::sync::MutexGuard<'_, T> {
        self.0
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
pub use spin::Mutex;

/// Allows at most one turn in flight per game.
///
/// Every new game bumps the epoch. A guard taken under an older epoch no
/// longer blocks anything and can no longer commit.
pub struct TurnLock {
    inner: Mutex<LockState>,
}

struct LockState {
    epoch: u64,
    in_flight: Option<u64>,
}

impl TurnLock {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(LockState {
                epoch: 0,
                in_flight: None,
            }),
        }
    }

    /// Claims the turn, or returns `None` if one is already in flight.
    pub fn try_acquire(&self) -> Option<TurnGuard<'_>> {
        let mut state = self.inner.lock();
        if state.in_flight == Some(state.epoch) {
            return None;
        }
        state.in_flight = Some(state.epoch);
        Some(TurnGuard {
            lock: self,
            epoch: state.epoch,
        })
    }

    /// Starts a new epoch, orphaning any in-flight guard.
    pub fn reset(&self) {
        let mut state = self.inner.lock();
        state.epoch = state.epoch.wrapping_add(1);
        state.in_flight = None;
    }

    pub fn is_held(&self) -> bool {
        let state = self.inner.lock();
        state.in_flight == Some(state.epoch)
    }
}

pub struct TurnGuard<'a> {
    lock: &'a TurnLock,
    epoch: u64,
}

impl TurnGuard<'_> {
    /// Whether the game this turn started in is still the current one.
    pub fn is_current(&self) -> bool {
        self.lock.inner.lock().epoch == self.epoch
    }
}

impl Drop for TurnGuard<'_> {
    fn drop(&mut self) {
        let mut state = self.lock.inner.lock();
        if state.in_flight == Some(self.epoch) {
            state.in_flight = None;
        }
    }
}
