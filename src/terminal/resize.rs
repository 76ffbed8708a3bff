//! SIGWINCH notification flag.
//!
//! The signal handler only stores `true` into a shared [`AtomicBool`]; the
//! main loop swaps it back to `false` and re-queries the size itself.

use signal_hook::SigId;
use signal_hook::consts::signal::SIGWINCH;
use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Pending-resize flag, optionally wired to SIGWINCH.
#[derive(Debug, Default)]
pub struct ResizeFlag {
    pending: Arc<AtomicBool>,
    registration: Option<SigId>,
}

impl ResizeFlag {
    /// A flag not attached to any signal (tests, headless mode).
    #[must_use]
    pub fn detached() -> Self {
        Self::default()
    }

    /// Install a SIGWINCH handler that raises this flag.
    pub fn install() -> io::Result<Self> {
        let pending = Arc::new(AtomicBool::new(false));
        let id = signal_hook::flag::register(SIGWINCH, Arc::clone(&pending))?;
        tracing::debug!("SIGWINCH handler installed");
        Ok(Self {
            pending,
            registration: Some(id),
        })
    }

    /// Raise the flag by hand.
    pub fn raise(&self) {
        self.pending.store(true, Ordering::SeqCst);
    }

    /// Consume a pending notification.
    pub fn take(&self) -> bool {
        self.pending.swap(false, Ordering::SeqCst)
    }

    /// Whether the flag is attached to SIGWINCH.
    #[must_use]
    pub fn is_installed(&self) -> bool {
        self.registration.is_some()
    }

    /// Detach from SIGWINCH. Safe to call more than once.
    pub fn uninstall(&mut self) {
        if let Some(id) = self.registration.take() {
            signal_hook::low_level::unregister(id);
            tracing::debug!("SIGWINCH handler removed");
        }
    }
}

impl Drop for ResizeFlag {
    fn drop(&mut self) {
        self.uninstall();
    }
}
