mod engine_tests;

use std::sync::Arc;

use crate::{
    domain::{Mode, ModeSwitch, text::KeyMap},
    input::{ChangeEvent, ContextId},
    substitution::SubstitutionEngine,
};

const CTX: ContextId = ContextId(7);

fn engine_in(mode: Mode) -> SubstitutionEngine {
    let mut engine = SubstitutionEngine::new(Arc::new(KeyMap::oadg_109()), ModeSwitch::new(mode));
    engine.attach(CTX);
    engine
}

fn kana_engine() -> SubstitutionEngine {
    engine_in(Mode::Kana)
}

/// User keystroke with the cursor at the end of `before`.
fn typed(before: &str) -> ChangeEvent {
    ChangeEvent::user(CTX, before, "")
}
