//! Buffering state for synchronized updates (DEC private mode 2026).
use std::time::{Duration, Instant};

/// Maximum time a synchronized update may hold input back before it is
/// forced through the parser.
pub const SYNC_UPDATE_TIMEOUT: Duration = Duration::from_millis(150);

/// Wire sequence a program emits to begin a synchronized update.
pub const BEGIN_SYNCHRONIZED_UPDATE: &[u8] = b"\x1b[?2026h";
/// Wire sequence a program emits to end a synchronized update.
pub const END_SYNCHRONIZED_UPDATE: &[u8] = b"\x1b[?2026l";

/// The synchronized-update gate: a plain buffer plus a deadline, polled
/// from `advance`. No timers or threads are involved.
#[derive(Debug)]
pub(crate) struct SyncState {
    buffer: Vec<u8>,
    started_at: Option<Instant>,
    timeout: Duration,
}

impl Default for SyncState {
    fn default() -> Self {
        Self {
            buffer: Vec::new(),
            started_at: None,
            timeout: SYNC_UPDATE_TIMEOUT,
        }
    }
}

impl SyncState {
    pub(crate) fn is_enabled(&self) -> bool {
        self.started_at.is_some()
    }

    /// Arm the gate and drop anything left in the buffer.
    pub(crate) fn begin(&mut self) {
        self.buffer.clear();
        self.started_at = Some(Instant::now());
    }

    pub(crate) fn push(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
    }

    pub(crate) fn timed_out(&self) -> bool {
        self.started_at
            .is_some_and(|started_at| started_at.elapsed() > self.timeout)
    }

    /// Disarm the gate and hand back whatever was buffered.
    pub(crate) fn finish(&mut self) -> Vec<u8> {
        self.started_at = None;
        std::mem::take(&mut self.buffer)
    }

    pub(crate) fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
    }

    pub(crate) fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begins_disarmed_with_default_timeout() {
        let sync = SyncState::default();
        assert!(!sync.is_enabled());
        assert!(!sync.timed_out());
        assert_eq!(sync.timeout(), SYNC_UPDATE_TIMEOUT);
    }

    #[test]
    fn finish_disarms_and_drains() {
        let mut sync = SyncState::default();
        sync.begin();
        sync.push(b"abc");
        sync.push(b"def");

        assert!(sync.is_enabled());
        assert_eq!(sync.finish(), b"abcdef");
        assert!(!sync.is_enabled());
        assert_eq!(sync.finish(), b"");
    }

    #[test]
    fn begin_drops_stale_buffer() {
        let mut sync = SyncState::default();
        sync.begin();
        sync.push(b"stale");
        sync.finish();

        sync.begin();
        sync.push(b"fresh");
        assert_eq!(sync.finish(), b"fresh");
    }

    #[test]
    fn zero_timeout_expires_immediately() {
        let mut sync = SyncState::default();
        sync.set_timeout(Duration::ZERO);
        sync.begin();
        std::thread::sleep(Duration::from_millis(1));
        assert!(sync.timed_out());
    }
}
