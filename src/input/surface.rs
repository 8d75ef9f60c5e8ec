//! Interface between the substitution engine and a host text field.
//!
//! A host reports every change of the text around the cursor as a
//! [`ChangeEvent`] and accepts replace-range edits through [`TextSurface`].
//! Edits the engine requests must come back tagged [`EditProvenance::Own`]
//! so the engine can ignore its own work.

use std::fmt;

/// Identity of an attached text field. A new id means a new field.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ContextId(pub u64);

/// Who caused a change to the surrounding text.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum EditProvenance {
    User,
    Own,
}

/// Normalized surrounding-text change notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChangeEvent {
    pub context: ContextId,
    pub before_text: String,
    pub after_text: String,
    pub provenance: EditProvenance,
}

impl ChangeEvent {
    pub fn user(context: ContextId, before_text: &str, after_text: &str) -> Self {
        Self {
            context,
            before_text: before_text.to_string(),
            after_text: after_text.to_string(),
            provenance: EditProvenance::User,
        }
    }

    pub fn own(context: ContextId, before_text: &str, after_text: &str) -> Self {
        Self {
            provenance: EditProvenance::Own,
            ..Self::user(context, before_text, after_text)
        }
    }

    pub fn is_own_edit(&self) -> bool {
        self.provenance == EditProvenance::Own
    }

    /// Characters on both sides of the cursor.
    pub fn surrounding_len(&self) -> usize {
        self.before_text.chars().count() + self.after_text.chars().count()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SurfaceError {
    /// The requested range does not lie inside the surrounding text.
    OutOfRange { start: isize, length: usize },
}

impl SurfaceError {
    pub fn as_str(self) -> &'static str {
        match self {
            SurfaceError::OutOfRange { .. } => "out_of_range",
        }
    }
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceError::OutOfRange { start, length } => write!(
                f,
                "range of {length} chars at cursor offset {start} is outside the text"
            ),
        }
    }
}

impl std::error::Error for SurfaceError {}

/// Editable text field as seen from the engine.
pub trait TextSurface {
    fn context(&self) -> ContextId;

    fn text_before_cursor(&self) -> String;

    fn text_after_cursor(&self) -> String;

    /// Replaces `length` chars starting `start_offset_from_cursor` chars from the
    /// cursor with `text`. The resulting notification must be tagged
    /// [`EditProvenance::Own`].
    fn replace_range(
        &mut self,
        text: &str,
        start_offset_from_cursor: isize,
        length: usize,
    ) -> Result<(), SurfaceError>;
}

/// Receives change notifications, one at a time.
pub trait ChangeListener {
    fn on_text_changed(&mut self, event: &ChangeEvent, surface: &mut dyn TextSurface);
}
