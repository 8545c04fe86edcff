// crates/city-picker-core/src/timer.rs
use log::trace;
use std::time::Duration;

/// Identifies one scheduled firing of a [`Debouncer`].
///
/// Handles are never reused, so a stale handle can be compared against the
/// debouncer to find out whether that particular firing is still pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug)]
struct Pending<T> {
    handle: TimerHandle,
    deadline: Duration,
    payload: T,
}

/// A cancelable single-shot timer that coalesces bursts.
///
/// Scheduling while a firing is pending cancels the pending one and arms a
/// new one; payloads are never queued. The debouncer does not own a thread:
/// the host polls it with the current time and receives the payload once the
/// deadline has passed.
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    next_id: u64,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            next_id: 0,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Arm the timer to fire `delay` after `now`, replacing any pending firing.
    pub fn schedule(&mut self, now: Duration, payload: T) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        if let Some(prev) = self.pending.take() {
            trace!("debounce: {:?} superseded by {:?}", prev.handle, handle);
        }
        self.pending = Some(Pending {
            handle,
            deadline: now.saturating_add(self.delay),
            payload,
        });
        handle
    }

    /// Drop the pending firing, if any. Returns whether something was dropped.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether the firing identified by `handle` is still armed.
    pub fn is_armed(&self, handle: TimerHandle) -> bool {
        self.pending.as_ref().is_some_and(|p| p.handle == handle)
    }

    pub fn deadline(&self) -> Option<Duration> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// Fire if the deadline has been reached.
    pub fn poll(&mut self, now: Duration) -> Option<T> {
        match &self.pending {
            Some(p) if now >= p.deadline => self.pending.take().map(|p| p.payload),
            _ => None,
        }
    }

    /// Fire immediately regardless of the deadline.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn fires_once_after_delay() {
        let mut d = Debouncer::new(ms(200));
        d.schedule(ms(0), "a");
        assert_eq!(d.poll(ms(199)), None);
        assert_eq!(d.poll(ms(200)), Some("a"));
        assert_eq!(d.poll(ms(1_000)), None);
    }

    #[test]
    fn rescheduling_restarts_window_and_keeps_latest() {
        let mut d = Debouncer::new(ms(200));
        let first = d.schedule(ms(0), "a");
        let second = d.schedule(ms(150), "ab");
        assert!(!d.is_armed(first));
        assert!(d.is_armed(second));
        assert_eq!(d.poll(ms(250)), None);
        assert_eq!(d.poll(ms(350)), Some("ab"));
    }

    #[test]
    fn cancel_and_flush() {
        let mut d = Debouncer::new(ms(16));
        d.schedule(ms(0), 1);
        assert!(d.cancel());
        assert!(!d.cancel());
        assert_eq!(d.poll(ms(100)), None);

        d.schedule(ms(0), 2);
        assert_eq!(d.deadline(), Some(ms(16)));
        assert_eq!(d.flush(), Some(2));
        assert!(!d.is_pending());
    }

    #[test]
    fn deadline_saturates_at_the_end_of_time() {
        let mut d = Debouncer::new(ms(200));
        d.schedule(Duration::MAX, "late");
        assert_eq!(d.deadline(), Some(Duration::MAX));
        assert_eq!(d.poll(Duration::MAX), Some("late"));
    }
}
