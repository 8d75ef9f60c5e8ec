use std::collections::VecDeque;

use super::surface::{
    ChangeEvent, ChangeListener, ContextId, EditProvenance, SurfaceError, TextSurface,
};

/// In-memory text field that behaves like a host editing context.
///
/// Every mutation queues a change notification; nothing is delivered until
/// [`MemorySurface::dispatch_pending`] runs, and notifications go out one at
/// a time in order, including the ones caused by the listener's own edits.
pub struct MemorySurface {
    context: ContextId,
    text: Vec<char>,
    cursor: usize,
    pending: VecDeque<ChangeEvent>,
    listener: Option<Box<dyn ChangeListener>>,
}

impl MemorySurface {
    pub fn new(context: ContextId) -> Self {
        Self {
            context,
            text: Vec::new(),
            cursor: 0,
            pending: VecDeque::new(),
            listener: None,
        }
    }

    /// Starts with `before` left of the cursor and `after` right of it. No
    /// notification is queued for the initial text.
    pub fn with_text(context: ContextId, before: &str, after: &str) -> Self {
        let mut surface = Self::new(context);
        surface.text = before.chars().chain(after.chars()).collect();
        surface.cursor = before.chars().count();
        surface
    }

    pub fn subscribe(&mut self, listener: Box<dyn ChangeListener>) {
        self.listener = Some(listener);
    }

    pub fn unsubscribe(&mut self) -> Option<Box<dyn ChangeListener>> {
        self.listener.take()
    }

    pub fn text(&self) -> String {
        self.text.iter().collect()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Replaces the field with a new, empty one.
    pub fn switch_context(&mut self, context: ContextId) {
        self.context = context;
        self.text.clear();
        self.cursor = 0;
        self.pending.clear();
    }

    /// Inserts `text` at the cursor as one user edit (a keystroke or a paste).
    pub fn insert(&mut self, text: &str) {
        let chars: Vec<char> = text.chars().collect();
        let n = chars.len();
        self.text.splice(self.cursor..self.cursor, chars);
        self.cursor += n;
        self.notify(EditProvenance::User);
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        self.text.remove(self.cursor);
        self.notify(EditProvenance::User);
    }

    pub fn delete_forward(&mut self) {
        if self.cursor >= self.text.len() {
            return;
        }
        self.text.remove(self.cursor);
        self.notify(EditProvenance::User);
    }

    /// Moves the cursor by `delta` chars, clamped to the text.
    pub fn move_cursor(&mut self, delta: isize) {
        let target = self
            .cursor
            .saturating_add_signed(delta)
            .min(self.text.len());
        if target == self.cursor {
            return;
        }
        self.cursor = target;
        self.notify(EditProvenance::User);
    }

    /// Types each char of `keys` as its own keystroke, delivering
    /// notifications to the subscribed listener after each one.
    pub fn type_keys(&mut self, keys: &str) {
        let mut buf = [0u8; 4];
        for ch in keys.chars() {
            self.insert(ch.encode_utf8(&mut buf));
            self.dispatch_pending();
        }
    }

    /// Same as [`MemorySurface::type_keys`] but delivers to `listener`.
    pub fn type_keys_to(&mut self, keys: &str, listener: &mut dyn ChangeListener) {
        let mut buf = [0u8; 4];
        for ch in keys.chars() {
            self.insert(ch.encode_utf8(&mut buf));
            self.dispatch_pending_to(listener);
        }
    }

    /// Delivers queued notifications to the subscribed listener. Without a
    /// listener they are dropped. Returns how many were delivered.
    pub fn dispatch_pending(&mut self) -> usize {
        let Some(mut listener) = self.listener.take() else {
            self.pending.clear();
            return 0;
        };
        let delivered = self.dispatch_pending_to(listener.as_mut());
        self.listener = Some(listener);
        delivered
    }

    pub fn dispatch_pending_to(&mut self, listener: &mut dyn ChangeListener) -> usize {
        let mut delivered = 0;
        while let Some(event) = self.pending.pop_front() {
            listener.on_text_changed(&event, &mut *self);
            delivered += 1;
        }
        delivered
    }

    fn notify(&mut self, provenance: EditProvenance) {
        let event = ChangeEvent {
            context: self.context,
            before_text: self.text_before_cursor(),
            after_text: self.text_after_cursor(),
            provenance,
        };
        self.pending.push_back(event);
    }
}

impl TextSurface for MemorySurface {
    fn context(&self) -> ContextId {
        self.context
    }

    fn text_before_cursor(&self) -> String {
        self.text[..self.cursor].iter().collect()
    }

    fn text_after_cursor(&self) -> String {
        self.text[self.cursor..].iter().collect()
    }

    fn replace_range(
        &mut self,
        text: &str,
        start_offset_from_cursor: isize,
        length: usize,
    ) -> Result<(), SurfaceError> {
        let out_of_range = SurfaceError::OutOfRange {
            start: start_offset_from_cursor,
            length,
        };
        let start = self
            .cursor
            .checked_add_signed(start_offset_from_cursor)
            .ok_or(out_of_range)?;
        let end = start.checked_add(length).ok_or(out_of_range)?;
        if end > self.text.len() {
            return Err(out_of_range);
        }

        let inserted: Vec<char> = text.chars().collect();
        let n = inserted.len();
        self.text.splice(start..end, inserted);

        // The cursor follows the inserted text when the range touched it.
        if end <= self.cursor {
            self.cursor = self.cursor - length + n;
        } else if start < self.cursor {
            self.cursor = start + n;
        }

        self.notify(EditProvenance::Own);
        Ok(())
    }
}
