//! Value objects - immutable values valid by construction

mod audio;
mod power;

pub use audio::AudioState;
pub use power::{Power, PowerChange, MAX_POWER, POWER_STEP};
