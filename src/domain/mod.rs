pub mod mode;
pub mod outcome;
pub mod text;

pub use mode::{Mode, ModeSwitch};
pub use outcome::{Decision, SkipReason};
