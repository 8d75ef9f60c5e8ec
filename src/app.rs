//! Wires the pieces together for a single editing session.
//!
//! `App` owns the mode switch (the UI side), one in-memory text field and the
//! engine attached to it. The terminal driver types into it line by line.

use std::sync::Arc;

use crate::{
    config::Config,
    domain::{Mode, ModeSwitch, text::KeyMap},
    input::{ContextId, MemorySurface},
    substitution::SubstitutionEngine,
};

pub struct App {
    mode: ModeSwitch,
    surface: MemorySurface,
    engine: SubstitutionEngine,
    next_context: u64,
}

impl App {
    pub fn new(keymap: Arc<KeyMap>, initial_mode: Mode) -> Self {
        let mode = ModeSwitch::new(initial_mode);
        let context = ContextId(1);
        let mut engine = SubstitutionEngine::new(keymap, mode.clone());
        engine.attach(context);

        Self {
            mode,
            surface: MemorySurface::new(context),
            engine,
            next_context: context.0 + 1,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(Arc::new(cfg.key_map()), cfg.initial_mode())
    }

    pub fn mode(&self) -> Mode {
        self.mode.get()
    }

    /// Handle for the UI layer.
    pub fn mode_switch(&self) -> ModeSwitch {
        self.mode.clone()
    }

    pub fn toggle_mode(&self) -> Mode {
        self.mode.toggle()
    }

    /// Types `keys` one keystroke at a time and returns the field's text.
    pub fn type_keys(&mut self, keys: &str) -> String {
        self.surface.type_keys_to(keys, &mut self.engine);
        self.surface.text()
    }

    pub fn backspace(&mut self) -> String {
        self.surface.backspace();
        self.surface.dispatch_pending_to(&mut self.engine);
        self.surface.text()
    }

    pub fn text(&self) -> String {
        self.surface.text()
    }

    /// Hands back the field's text and moves on to a fresh, empty field.
    pub fn commit(&mut self) -> String {
        let text = self.surface.text();
        let context = ContextId(self.next_context);
        self.next_context += 1;

        self.surface.switch_context(context);
        self.engine.attach(context);
        text
    }

    pub fn engine(&self) -> &SubstitutionEngine {
        &self.engine
    }
}
