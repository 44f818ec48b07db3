//! Process-wide "reboot witnessed" marker.

use std::sync::atomic::{AtomicBool, Ordering};

static REBOOT_WITNESSED: AtomicBool = AtomicBool::new(false);

/// Records that a configuration change needs a restart to take effect.
pub trait RebootRecorder {
    /// Marks a pending reboot.
    fn record_reboot(&self);
}

/// [`RebootRecorder`] that sets the process-wide marker.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRebootFlag;

impl RebootRecorder for ProcessRebootFlag {
    fn record_reboot(&self) {
        REBOOT_WITNESSED.store(true, Ordering::SeqCst);
    }
}

/// Returns true once any component has recorded a pending reboot.
#[must_use]
pub fn reboot_witnessed() -> bool {
    REBOOT_WITNESSED.load(Ordering::SeqCst)
}
