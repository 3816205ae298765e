//! Semantic action IDs for Snow Clicker click targets.
//!
//! Registered during render and dispatched via `InputEvent::Click`.

pub const CLICK_SNOW: u16 = 0;
pub const BUY_AUTO_SNOW: u16 = 1;
pub const BUY_MULTIPLIER: u16 = 2;
pub const EXPORT_TO_HOST: u16 = 3;
pub const DISMISS_NOTICE: u16 = 4;
