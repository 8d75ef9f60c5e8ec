//! Dependency-free building blocks for kana-remap: the static key table and
//! the code-point arithmetic for voiced and semi-voiced marks.

pub mod text;

pub use text::layout::{SEMI_VOICED_MARK_KEY, VOICED_MARK_KEY};
pub use text::voicing::{add_semi_voiced_mark, add_voiced_mark};
