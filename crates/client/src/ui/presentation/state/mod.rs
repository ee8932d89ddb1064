//! UI state held in Dioxus signals

mod notice_state;
mod roster_state;

pub use notice_state::{use_notice_state, NoticeState, WarningSlot, MAX_POWER_WARNING};
pub use roster_state::{
    use_roster_state, LoadStatus, RosterModel, RosterState, NOT_FOUND_MESSAGE,
};
