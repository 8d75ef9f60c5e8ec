//! Turns keystrokes observed through a text field into kana.
//!
//! The engine watches surrounding-text notifications. When the text grew and
//! the char left of the cursor is a mapped key, it replaces that key with its
//! glyph. A mark key right after a kana with a voiced or semi-voiced form
//! replaces both chars with the composed kana instead.
//!
//! Growth is the only signal that a key was typed: a notification whose text
//! is not longer than the last processed one is treated as a deletion or a
//! cursor move and skipped.

use std::sync::Arc;

use crate::{
    domain::{Decision, Mode, ModeSwitch, SkipReason, text::KeyMap},
    input::{ChangeEvent, ChangeListener, ContextId, TextSurface},
};

/// Per-field state, reset whenever a different field is attached.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct CompositionState {
    context: ContextId,
    previous_observed_length: usize,
}

impl CompositionState {
    const fn new(context: ContextId) -> Self {
        Self {
            context,
            previous_observed_length: 0,
        }
    }
}

#[derive(Debug)]
pub struct SubstitutionEngine {
    keymap: Arc<KeyMap>,
    mode: ModeSwitch,
    state: Option<CompositionState>,
}

impl SubstitutionEngine {
    /// Creates an engine with no field attached.
    pub fn new(keymap: Arc<KeyMap>, mode: ModeSwitch) -> Self {
        Self {
            keymap,
            mode,
            state: None,
        }
    }

    pub fn attach(&mut self, context: ContextId) {
        tracing::debug!(context = context.0, "text field attached");
        self.state = Some(CompositionState::new(context));
    }

    pub fn detach(&mut self) {
        if let Some(state) = self.state.take() {
            tracing::debug!(context = state.context.0, "text field detached");
        }
    }

    pub fn attached_context(&self) -> Option<ContextId> {
        self.state.map(|s| s.context)
    }

    pub fn previous_observed_length(&self) -> Option<usize> {
        self.state.map(|s| s.previous_observed_length)
    }

    /// Decides what to do with `event` and applies the replacement, if any,
    /// to `surface`.
    ///
    /// Never fails: a rejected edit is logged and the decision is still
    /// returned.
    pub fn on_text_changed(
        &mut self,
        event: &ChangeEvent,
        surface: &mut dyn TextSurface,
    ) -> Decision {
        let decision = self.decide(event);

        if let Some(text) = decision.replacement()
            && let Err(e) =
                surface.replace_range(text, decision.start_offset(), decision.range_len())
        {
            tracing::warn!(error = %e, reason = e.as_str(), "replace_range failed");
        }

        decision
    }

    /// Computes the decision for `event` without touching any surface.
    ///
    /// Updates the observed length when the event counts as new input.
    pub fn decide(&mut self, event: &ChangeEvent) -> Decision {
        let decision = self.decide_inner(event);
        match &decision {
            Decision::NoOp(reason) => {
                tracing::trace!(reason = %reason.as_str(), "substitution skip");
            }
            Decision::DirectReplace(glyph) => {
                tracing::trace!(glyph = %glyph, "substitution direct");
            }
            Decision::MergedReplace(glyph) => {
                tracing::trace!(glyph = %glyph, "substitution merged");
            }
        }
        decision
    }

    fn decide_inner(&mut self, event: &ChangeEvent) -> Decision {
        let Some(state) = self.state.as_mut() else {
            return Decision::NoOp(SkipReason::NoContext);
        };

        if state.context != event.context {
            tracing::debug!(
                from = state.context.0,
                to = event.context.0,
                "text field changed"
            );
            *state = CompositionState::new(event.context);
        }

        if self.mode.get() == Mode::Latin {
            return Decision::NoOp(SkipReason::LatinMode);
        }

        if event.is_own_edit() {
            return Decision::NoOp(SkipReason::OwnEdit);
        }

        let current_length = event.surrounding_len();
        if current_length <= state.previous_observed_length {
            return Decision::NoOp(SkipReason::NotGrown);
        }
        state.previous_observed_length = current_length;

        let mut tail = event.before_text.chars().rev();
        let Some(key) = tail.next() else {
            return Decision::NoOp(SkipReason::EmptyWindow);
        };

        let Some(glyph) = self.keymap.glyph(key) else {
            return Decision::NoOp(SkipReason::UnmappedCharacter);
        };

        if let Some(mark) = self.keymap.mark_for(key)
            && let Some(base) = tail.next()
        {
            if let Some(merged) = mark.apply(base) {
                return Decision::MergedReplace(merged.to_string());
            }
            tracing::trace!(
                base = %base,
                mark = mark.as_str(),
                "no composed form, inserting standalone mark"
            );
        }

        Decision::DirectReplace(glyph.to_string())
    }
}

impl ChangeListener for SubstitutionEngine {
    fn on_text_changed(&mut self, event: &ChangeEvent, surface: &mut dyn TextSurface) {
        SubstitutionEngine::on_text_changed(self, event, surface);
    }
}
