mod baker;
mod breads;

pub use baker::{AwardOutcome, Baker, FocusLog, FOCUS_LOG_CAP};
pub use breads::{default_selectable, find_bread, is_unlocked, Bread, BREADS};
