pub mod app;
pub mod config;
pub mod domain;
pub mod input;
pub mod substitution;
pub mod util;

pub use domain::{Decision, Mode, ModeSwitch, SkipReason, text::KeyMap};
pub use input::{ChangeEvent, ContextId, EditProvenance, MemorySurface, TextSurface};
pub use substitution::SubstitutionEngine;

#[cfg(test)]
mod tests;
