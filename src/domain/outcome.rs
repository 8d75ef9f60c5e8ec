/// What the engine decided to do with one change notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    NoOp(SkipReason),
    /// Replace the key just typed with its glyph.
    DirectReplace(String),
    /// Replace the preceding kana and the mark key with the composed kana.
    MergedReplace(String),
}

impl Decision {
    /// Number of characters before the cursor the replacement covers.
    pub const fn range_len(&self) -> usize {
        match self {
            Decision::NoOp(_) => 0,
            Decision::DirectReplace(_) => 1,
            Decision::MergedReplace(_) => 2,
        }
    }

    pub const fn start_offset(&self) -> isize {
        match self {
            Decision::NoOp(_) => 0,
            Decision::DirectReplace(_) => -1,
            Decision::MergedReplace(_) => -2,
        }
    }

    pub fn replacement(&self) -> Option<&str> {
        match self {
            Decision::NoOp(_) => None,
            Decision::DirectReplace(text) | Decision::MergedReplace(text) => Some(text.as_str()),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    NoContext,
    LatinMode,
    OwnEdit,
    NotGrown,
    EmptyWindow,
    UnmappedCharacter,
}

impl SkipReason {
    pub fn as_str(self) -> &'static str {
        match self {
            SkipReason::NoContext => "no_context",
            SkipReason::LatinMode => "latin_mode",
            SkipReason::OwnEdit => "own_edit",
            SkipReason::NotGrown => "not_grown",
            SkipReason::EmptyWindow => "empty_window",
            SkipReason::UnmappedCharacter => "unmapped_character",
        }
    }
}
