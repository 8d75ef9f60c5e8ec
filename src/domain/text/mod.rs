pub mod mapping;

pub use mapping::{KeyMap, MarkKind};
