use std::sync::atomic::{AtomicBool, Ordering};

/// Process-wide fault-injection flag, owned by one router instance.
///
/// Two states (normal / chaotic) and two idempotent transitions. Reads and
/// writes are atomic so concurrent toggles never lose an update.
#[derive(Debug, Default)]
pub struct ChaosSwitch {
    enabled: AtomicBool,
}

impl ChaosSwitch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }

    /// Turn chaos mode on. Returns the previous state.
    pub fn enable(&self) -> bool {
        self.enabled.swap(true, Ordering::AcqRel)
    }

    /// Turn chaos mode off. Returns the previous state.
    pub fn disable(&self) -> bool {
        self.enabled.swap(false, Ordering::AcqRel)
    }
}
