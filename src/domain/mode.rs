use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

/// Whether typed keys are remapped to kana.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Latin,
    Kana,
}

impl Mode {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Mode::Latin => Mode::Kana,
            Mode::Kana => Mode::Latin,
        }
    }

    /// Single glyph shown on the mode toggle.
    pub const fn indicator(self) -> char {
        match self {
            Mode::Latin => 'Ａ',
            Mode::Kana => 'か',
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Latin => "latin",
            Mode::Kana => "kana",
        }
    }
}

/// Shared mode flag. The UI layer owns and flips it; the engine only reads it.
#[derive(Clone, Debug, Default)]
pub struct ModeSwitch {
    kana: Arc<AtomicBool>,
}

impl ModeSwitch {
    pub fn new(mode: Mode) -> Self {
        Self {
            kana: Arc::new(AtomicBool::new(mode == Mode::Kana)),
        }
    }

    pub fn get(&self) -> Mode {
        if self.kana.load(Ordering::Acquire) {
            Mode::Kana
        } else {
            Mode::Latin
        }
    }

    pub fn set(&self, mode: Mode) {
        self.kana.store(mode == Mode::Kana, Ordering::Release);
    }

    /// Flips the mode and returns the new one.
    pub fn toggle(&self) -> Mode {
        let was_kana = self.kana.fetch_xor(true, Ordering::AcqRel);
        let mode = if was_kana { Mode::Latin } else { Mode::Kana };
        tracing::debug!(mode = mode.as_str(), "mode changed");
        mode
    }
}
