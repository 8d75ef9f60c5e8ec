pub mod layout;
pub mod voicing;
