//! Transient status messages with a frame countdown.

/// Loop iterations a success message stays visible (about 3 s at 50 fps).
pub const SUCCESS_FRAMES: u32 = 150;
/// Loop iterations an error message stays visible (about 4 s at 50 fps).
pub const ERROR_FRAMES: u32 = 200;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationKind {
    #[default]
    None,
    Success,
    Error,
}

impl NotificationKind {
    const fn frames(self) -> u32 {
        match self {
            Self::None => 0,
            Self::Success => SUCCESS_FRAMES,
            Self::Error => ERROR_FRAMES,
        }
    }
}

/// The single on-screen notification slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Notification {
    kind: NotificationKind,
    message: String,
    frames: u32,
}

impl Notification {
    #[must_use]
    pub fn kind(&self) -> NotificationKind {
        self.kind
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Loop iterations left before the message clears.
    #[must_use]
    pub fn frames_remaining(&self) -> u32 {
        self.frames
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.kind != NotificationKind::None
    }

    /// Replace any current message.
    pub fn set(&mut self, kind: NotificationKind, message: impl Into<String>) {
        self.kind = kind;
        self.message = message.into();
        self.frames = kind.frames();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Count down one iteration. Returns true when this tick cleared it.
    pub fn tick(&mut self) -> bool {
        if !self.is_visible() {
            return false;
        }
        self.frames = self.frames.saturating_sub(1);
        if self.frames == 0 {
            self.clear();
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_countdown() {
        let mut n = Notification::default();
        n.set(NotificationKind::Success, "Saved");
        for _ in 0..149 {
            assert!(!n.tick());
        }
        assert!(n.is_visible());
        assert_eq!(n.frames_remaining(), 1);
        assert!(n.tick());
        assert!(!n.is_visible());
        assert_eq!(n.message(), "");
    }

    #[test]
    fn test_error_lasts_longer() {
        let mut n = Notification::default();
        n.set(NotificationKind::Error, "Failed");
        for _ in 0..199 {
            n.tick();
        }
        assert_eq!(n.kind(), NotificationKind::Error);
        assert!(n.tick());
    }

    #[test]
    fn test_set_replaces() {
        let mut n = Notification::default();
        n.set(NotificationKind::Error, "first");
        n.tick();
        n.set(NotificationKind::Success, "second");
        assert_eq!(n.message(), "second");
        assert_eq!(n.frames_remaining(), SUCCESS_FRAMES);
    }

    #[test]
    fn test_tick_when_empty() {
        let mut n = Notification::default();
        assert!(!n.tick());
    }
}
