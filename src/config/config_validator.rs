use std::{collections::HashSet, fmt::Write as _};

use crate::config::Config;

/// Collects every problem with the key settings, or `None` if there are none.
pub fn find_binding_problems(config: &Config) -> Option<String> {
    let mut problems: Vec<String> = Vec::new();

    let mut seen = HashSet::new();
    for binding in &config.extra_bindings {
        if binding.glyph.is_empty() {
            problems.push(format!("key {:?} is bound to an empty glyph", binding.key));
        }
        if !seen.insert(binding.key) {
            problems.push(format!("key {:?} is bound more than once", binding.key));
        }
    }

    if config.voiced_mark_key == config.semi_voiced_mark_key {
        problems.push(format!(
            "voiced and semi-voiced marks share the key {:?}",
            config.voiced_mark_key
        ));
    }

    let keymap = config.key_map();
    for (name, key) in [
        ("voiced mark", config.voiced_mark_key),
        ("semi-voiced mark", config.semi_voiced_mark_key),
    ] {
        if !keymap.contains(key) {
            problems.push(format!("{name} key {key:?} has no glyph in the layout"));
        }
    }

    if problems.is_empty() {
        None
    } else {
        let mut error = String::from("Invalid key settings:\n\n");

        for problem in &problems {
            // `String` implements `fmt::Write` infallibly.
            let _ = writeln!(error, "• {problem}");
        }

        Some(error)
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(error) = find_binding_problems(self) {
            Err(error)
        } else {
            Ok(())
        }
    }
}
