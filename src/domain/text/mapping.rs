use std::collections::HashMap;

use kana_remap_core::text::{
    layout::{SEMI_VOICED_MARK_KEY, ShiftLayer, VOICED_MARK_KEY, oadg_109_layer},
    voicing::{add_semi_voiced_mark, add_voiced_mark},
};

/// Diacritic a mark key composes onto the preceding kana.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MarkKind {
    Voiced,
    SemiVoiced,
}

impl MarkKind {
    /// Composes the mark onto `base`, or `None` if `base` has no such form.
    pub const fn apply(self, base: char) -> Option<char> {
        match self {
            MarkKind::Voiced => add_voiced_mark(base),
            MarkKind::SemiVoiced => add_semi_voiced_mark(base),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MarkKind::Voiced => "voiced",
            MarkKind::SemiVoiced => "semi_voiced",
        }
    }
}

/// Immutable key to glyph table plus the two mark keys.
///
/// Built once and shared with every engine; tests inject their own layouts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyMap {
    glyphs: HashMap<char, String>,
    voiced_mark_key: char,
    semi_voiced_mark_key: char,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::oadg_109()
    }
}

impl KeyMap {
    /// The built-in modified OADG 109 kana layout.
    pub fn oadg_109() -> Self {
        let glyphs = ShiftLayer::ALL
            .into_iter()
            .flat_map(oadg_109_layer)
            .map(|(key, glyph)| (*key, (*glyph).to_string()))
            .collect();

        Self {
            glyphs,
            voiced_mark_key: VOICED_MARK_KEY,
            semi_voiced_mark_key: SEMI_VOICED_MARK_KEY,
        }
    }

    /// Builds a table from explicit entries, rejecting duplicate keys and empty glyphs.
    ///
    /// Mark keys default to `@` and `[`; use [`KeyMap::with_mark_keys`] to move them.
    pub fn from_entries<'a, I>(entries: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = (char, &'a str)>,
    {
        let mut glyphs = HashMap::new();
        for (key, glyph) in entries {
            if glyph.is_empty() {
                return Err(format!("key {key:?} maps to an empty glyph"));
            }
            if glyphs.insert(key, glyph.to_string()).is_some() {
                return Err(format!("key {key:?} is mapped more than once"));
            }
        }

        Ok(Self {
            glyphs,
            voiced_mark_key: VOICED_MARK_KEY,
            semi_voiced_mark_key: SEMI_VOICED_MARK_KEY,
        })
    }

    /// Adds or overrides a single binding.
    #[must_use]
    pub fn with_binding(mut self, key: char, glyph: impl Into<String>) -> Self {
        self.glyphs.insert(key, glyph.into());
        self
    }

    #[must_use]
    pub fn with_mark_keys(mut self, voiced: char, semi_voiced: char) -> Self {
        self.voiced_mark_key = voiced;
        self.semi_voiced_mark_key = semi_voiced;
        self
    }

    pub fn glyph(&self, key: char) -> Option<&str> {
        self.glyphs.get(&key).map(String::as_str)
    }

    pub fn contains(&self, key: char) -> bool {
        self.glyphs.contains_key(&key)
    }

    /// Which diacritic `key` composes, if it is one of the mark keys.
    pub fn mark_for(&self, key: char) -> Option<MarkKind> {
        if key == self.voiced_mark_key {
            Some(MarkKind::Voiced)
        } else if key == self.semi_voiced_mark_key {
            Some(MarkKind::SemiVoiced)
        } else {
            None
        }
    }

    pub fn voiced_mark_key(&self) -> char {
        self.voiced_mark_key
    }

    pub fn semi_voiced_mark_key(&self) -> char {
        self.semi_voiced_mark_key
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}
