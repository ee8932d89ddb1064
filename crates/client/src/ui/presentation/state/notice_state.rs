//! Transient notices (the "maximum power" warning)

use dioxus::prelude::*;

/// Warning shown when increment is pressed on a full gauge
pub const MAX_POWER_WARNING: &str = "This character already has maximum power";

/// The current warning plus a generation counter.
///
/// Every `show` bumps the generation; a hide timer only clears the warning
/// it was started for.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WarningSlot {
    message: Option<String>,
    generation: u64,
}

impl WarningSlot {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Show a warning and return the generation its timer should carry
    pub fn show(&mut self, message: impl Into<String>) -> u64 {
        self.message = Some(message.into());
        self.generation += 1;
        self.generation
    }

    /// Hide the warning if no newer one has been shown since `generation`
    pub fn dismiss_if_current(&mut self, generation: u64) -> bool {
        if self.generation == generation && self.message.is_some() {
            self.message = None;
            true
        } else {
            false
        }
    }
}

#[derive(Clone, Copy)]
pub struct NoticeState {
    pub warning: Signal<WarningSlot>,
}

impl NoticeState {
    pub fn new() -> Self {
        Self {
            warning: Signal::new(WarningSlot::default()),
        }
    }

    pub fn show_warning(&mut self, message: impl Into<String>) {
        self.warning.write().show(message);
    }

    pub fn dismiss_if_current(&mut self, generation: u64) {
        self.warning.write().dismiss_if_current(generation);
    }
}

impl Default for NoticeState {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the NoticeState from context
pub fn use_notice_state() -> NoticeState {
    use_context::<NoticeState>()
}
