//! Client session lifecycle states.

/// Lifecycle state of a client session.
///
/// A session moves `Idle → Connecting → Handshaking → Open` during
/// `connect`, then to `Closed` on disconnect or `Failed` on any connect or
/// handshake error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum SessionState {
    /// No transport activity yet.
    #[default]
    Idle,
    /// Transport connection in progress.
    Connecting,
    /// Upgrade request sent; awaiting and verifying the response.
    Handshaking,
    /// Handshake verified; frames may flow.
    Open,
    /// Session disconnected by the caller.
    Closed,
    /// Connect or handshake failed; the session is unusable.
    Failed,
}

impl SessionState {
    /// Check if frames may be sent and received.
    #[must_use]
    #[inline]
    pub const fn is_open(&self) -> bool {
        matches!(self, SessionState::Open)
    }

    /// Check if the session can still be connected.
    #[must_use]
    #[inline]
    pub const fn is_idle(&self) -> bool {
        matches!(self, SessionState::Idle)
    }

    /// Get a human-readable name for this state.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            SessionState::Idle => "Idle",
            SessionState::Connecting => "Connecting",
            SessionState::Handshaking => "Handshaking",
            SessionState::Open => "Open",
            SessionState::Closed => "Closed",
            SessionState::Failed => "Failed",
        }
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        assert_eq!(SessionState::default(), SessionState::Idle);
    }

    #[test]
    fn test_is_open_in_each_state() {
        assert!(!SessionState::Idle.is_open());
        assert!(!SessionState::Connecting.is_open());
        assert!(!SessionState::Handshaking.is_open());
        assert!(SessionState::Open.is_open());
        assert!(!SessionState::Closed.is_open());
        assert!(!SessionState::Failed.is_open());
    }

    #[test]
    fn test_is_idle() {
        assert!(SessionState::Idle.is_idle());
        assert!(!SessionState::Open.is_idle());
        assert!(!SessionState::Failed.is_idle());
    }

    #[test]
    fn test_state_display() {
        assert_eq!(SessionState::Idle.to_string(), "Idle");
        assert_eq!(SessionState::Handshaking.to_string(), "Handshaking");
        assert_eq!(SessionState::Failed.to_string(), "Failed");
    }
}
