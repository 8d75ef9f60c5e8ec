use std::sync::Arc;

use tracing_test::traced_test;

use super::{CTX, engine_in, kana_engine, typed};
use crate::{
    domain::{Decision, Mode, ModeSwitch, SkipReason, text::KeyMap},
    input::{ChangeEvent, ContextId, MemorySurface},
    substitution::SubstitutionEngine,
};

fn direct(glyph: &str) -> Decision {
    Decision::DirectReplace(glyph.to_string())
}

fn merged(glyph: &str) -> Decision {
    Decision::MergedReplace(glyph.to_string())
}

#[test]
fn single_key_is_replaced_by_its_glyph() {
    let mut engine = kana_engine();
    let decision = engine.decide(&typed("t"));

    assert_eq!(decision, direct("か"));
    assert_eq!(decision.range_len(), 1);
    assert_eq!(decision.start_offset(), -1);
    assert_eq!(engine.previous_observed_length(), Some(1));
}

#[test]
fn voiced_mark_merges_with_preceding_kana() {
    let mut engine = kana_engine();
    let decision = engine.decide(&typed("か@"));

    assert_eq!(decision, merged("が"));
    assert_eq!(decision.range_len(), 2);
    assert_eq!(decision.start_offset(), -2);
}

#[test]
fn voiced_mark_on_t_row() {
    let mut engine = kana_engine();
    assert_eq!(engine.decide(&typed("た@")), merged("だ"));
}

#[test]
fn semi_voiced_mark_merges_with_h_row() {
    let mut engine = kana_engine();
    assert_eq!(engine.decide(&typed("は[")), merged("ぱ"));
}

#[test]
fn voiced_mark_without_voiced_form_becomes_standalone_mark() {
    let mut engine = kana_engine();
    assert_eq!(engine.decide(&typed("あ@")), direct("゛"));
}

#[test]
fn mark_after_already_voiced_kana_is_absorbed() {
    let mut engine = kana_engine();
    let decision = engine.decide(&typed("が@"));

    assert_eq!(decision, merged("が"));
    assert_eq!(decision.range_len(), 2);

    assert_eq!(kana_engine().decide(&typed("ば[")), merged("ば"));
    assert_eq!(kana_engine().decide(&typed("ぱ@")), merged("ぱ"));
    assert_eq!(kana_engine().decide(&typed("ぽ[")), merged("ぽ"));
}

#[test]
fn absorbed_mark_leaves_only_the_voiced_kana() {
    let mut engine = kana_engine();
    let mut surface = MemorySurface::with_text(CTX, "が@", "");

    engine.on_text_changed(&typed("が@"), &mut surface);

    assert_eq!(surface.text(), "が");
    assert_eq!(surface.cursor(), 1);
}

#[test]
fn semi_voiced_mark_outside_h_row_becomes_standalone_mark() {
    let mut engine = kana_engine();
    assert_eq!(engine.decide(&typed("か[")), direct("゜"));
}

#[test]
fn mark_key_at_start_of_field_is_replaced_directly() {
    let mut engine = kana_engine();
    assert_eq!(engine.decide(&typed("@")), direct("゛"));
}

#[test]
fn only_the_char_before_the_mark_is_composed() {
    let mut engine = kana_engine();
    assert_eq!(engine.decide(&typed("ふふふか@")), merged("が"));
}

#[test]
fn latin_mode_never_substitutes() {
    let mut engine = engine_in(Mode::Latin);

    assert_eq!(engine.decide(&typed("t")), Decision::NoOp(SkipReason::LatinMode));
    assert_eq!(engine.decide(&typed("か@")), Decision::NoOp(SkipReason::LatinMode));
    assert_eq!(engine.previous_observed_length(), Some(0));
}

#[test]
fn mode_switch_is_read_on_every_event() {
    let mode = ModeSwitch::new(Mode::Kana);
    let mut engine = SubstitutionEngine::new(Arc::new(KeyMap::oadg_109()), mode.clone());
    engine.attach(CTX);

    mode.set(Mode::Latin);
    assert_eq!(engine.decide(&typed("t")), Decision::NoOp(SkipReason::LatinMode));

    mode.set(Mode::Kana);
    assert_eq!(engine.decide(&typed("t")), direct("か"));
}

#[test]
fn own_edits_are_ignored_and_leave_length_alone() {
    let mut engine = kana_engine();
    assert_eq!(engine.decide(&typed("xt")), direct("か"));
    assert_eq!(engine.previous_observed_length(), Some(2));

    let own = ChangeEvent::own(CTX, "さかかかか", "");
    assert_eq!(engine.decide(&own), Decision::NoOp(SkipReason::OwnEdit));
    assert_eq!(engine.previous_observed_length(), Some(2));
}

#[test]
fn text_that_did_not_grow_is_skipped() {
    let mut engine = kana_engine();
    assert_eq!(engine.decide(&typed("xt")), direct("か"));

    // backspace
    assert_eq!(engine.decide(&typed("x")), Decision::NoOp(SkipReason::NotGrown));
    // cursor moved left
    let moved = ChangeEvent::user(CTX, "x", "t");
    assert_eq!(engine.decide(&moved), Decision::NoOp(SkipReason::NotGrown));
    // same length as the high-water mark
    assert_eq!(engine.decide(&typed("xt")), Decision::NoOp(SkipReason::NotGrown));
    assert_eq!(engine.previous_observed_length(), Some(2));
}

#[test]
fn text_after_cursor_counts_toward_length() {
    let mut engine = kana_engine();
    let event = ChangeEvent::user(CTX, "t", "abc");

    assert_eq!(engine.decide(&event), direct("か"));
    assert_eq!(engine.previous_observed_length(), Some(4));
}

#[test]
fn length_is_counted_in_chars_not_bytes() {
    let mut engine = kana_engine();
    engine.decide(&typed("かかt"));
    assert_eq!(engine.previous_observed_length(), Some(3));
}

#[test]
fn unmapped_key_is_skipped_but_still_counts_as_growth() {
    let mut engine = kana_engine();

    assert_eq!(
        engine.decide(&typed("A")),
        Decision::NoOp(SkipReason::UnmappedCharacter)
    );
    assert_eq!(engine.previous_observed_length(), Some(1));
}

#[test]
fn growth_after_the_cursor_only_has_an_empty_window() {
    let mut engine = kana_engine();
    let event = ChangeEvent::user(CTX, "", "t");

    assert_eq!(engine.decide(&event), Decision::NoOp(SkipReason::EmptyWindow));
    assert_eq!(engine.previous_observed_length(), Some(1));
}

#[test]
fn unattached_engine_does_nothing() {
    let mut engine = SubstitutionEngine::new(
        Arc::new(KeyMap::oadg_109()),
        ModeSwitch::new(Mode::Kana),
    );
    assert_eq!(engine.decide(&typed("t")), Decision::NoOp(SkipReason::NoContext));
    assert_eq!(engine.previous_observed_length(), None);

    engine.attach(CTX);
    assert_eq!(engine.decide(&typed("t")), direct("か"));

    engine.detach();
    assert_eq!(engine.attached_context(), None);
    assert_eq!(engine.decide(&typed("tt")), Decision::NoOp(SkipReason::NoContext));
}

#[test]
fn new_field_starts_from_zero_length() {
    let mut engine = kana_engine();
    assert_eq!(engine.decide(&typed("xxxx")), direct("さ"));
    assert_eq!(engine.previous_observed_length(), Some(4));

    let other = ContextId(99);
    let event = ChangeEvent::user(other, "t", "");
    assert_eq!(engine.decide(&event), direct("か"));
    assert_eq!(engine.attached_context(), Some(other));
    assert_eq!(engine.previous_observed_length(), Some(1));
}

#[test]
fn reattaching_resets_length() {
    let mut engine = kana_engine();
    engine.decide(&typed("xxxx"));

    engine.attach(CTX);
    assert_eq!(engine.previous_observed_length(), Some(0));
    assert_eq!(engine.decide(&typed("t")), direct("か"));
}

#[test]
fn injected_layout_replaces_the_builtin_one() {
    let keymap = KeyMap::from_entries([('a', "あ"), ('@', "゛")]).unwrap();
    let mut engine = SubstitutionEngine::new(Arc::new(keymap), ModeSwitch::new(Mode::Kana));
    engine.attach(CTX);

    assert_eq!(engine.decide(&typed("a")), direct("あ"));
    assert_eq!(
        engine.decide(&typed("at")),
        Decision::NoOp(SkipReason::UnmappedCharacter)
    );
}

#[test]
fn mark_keys_can_be_moved() {
    let keymap = KeyMap::oadg_109().with_mark_keys('[', '@');
    let mut engine = SubstitutionEngine::new(Arc::new(keymap), ModeSwitch::new(Mode::Kana));
    engine.attach(CTX);

    assert_eq!(engine.decide(&typed("か[")), merged("が"));
    assert_eq!(engine.decide(&typed("か[は@")), merged("ぱ"));
}

#[test]
fn decision_is_applied_to_the_surface() {
    let mut engine = kana_engine();
    let mut surface = MemorySurface::with_text(CTX, "t", "");

    let decision = engine.on_text_changed(&typed("t"), &mut surface);

    assert_eq!(decision, direct("か"));
    assert_eq!(surface.text(), "か");
    assert_eq!(surface.cursor(), 1);
    // the edit queued its own notification
    assert_eq!(surface.pending_len(), 1);
}

#[test]
fn merge_is_applied_around_the_cursor() {
    let mut engine = kana_engine();
    let mut surface = MemorySurface::with_text(CTX, "xか@", "end");

    let event = ChangeEvent::user(CTX, "xか@", "end");
    assert_eq!(engine.on_text_changed(&event, &mut surface), merged("が"));

    assert_eq!(surface.text(), "xがend");
    assert_eq!(surface.cursor(), 2);
}

#[test]
fn noop_leaves_the_surface_untouched() {
    let mut engine = engine_in(Mode::Latin);
    let mut surface = MemorySurface::with_text(CTX, "t", "");

    engine.on_text_changed(&typed("t"), &mut surface);

    assert_eq!(surface.text(), "t");
    assert_eq!(surface.pending_len(), 0);
}

#[traced_test]
#[test]
fn rejected_edit_is_logged_and_not_fatal() {
    let mut engine = kana_engine();
    let mut surface = MemorySurface::new(CTX);

    let decision = engine.on_text_changed(&typed("か@"), &mut surface);

    assert_eq!(decision, merged("が"));
    assert_eq!(surface.text(), "");
    assert!(logs_contain("replace_range failed"));
}

#[traced_test]
#[test]
fn skip_reason_is_traced() {
    let mut engine = kana_engine();
    engine.decide(&typed("A"));

    assert!(logs_contain("unmapped_character"));
}

#[traced_test]
#[test]
fn missing_composed_form_is_traced() {
    let mut engine = kana_engine();
    engine.decide(&typed("あ@"));

    assert!(logs_contain("no composed form"));
}
