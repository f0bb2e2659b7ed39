//! Six-slot one-time-code entry state, shared by both auth wizards.

pub const OTP_LEN: usize = 6;

/// The six single-character slots plus the focused slot index.
///
/// Typing into a slot auto-advances focus to the next one; backspace on an
/// empty slot retreats to (and clears) the previous one, mirroring the
/// storefront's per-digit inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OtpEntry {
    slots: [Option<char>; OTP_LEN],
    cursor: usize,
}

impl Default for OtpEntry {
    fn default() -> Self {
        Self {
            slots: [None; OTP_LEN],
            cursor: 0,
        }
    }
}

impl OtpEntry {
    /// Writes a character into the focused slot and advances focus.
    /// Non-alphanumeric input is ignored.
    pub fn input(&mut self, c: char) {
        if !c.is_ascii_alphanumeric() {
            return;
        }
        self.slots[self.cursor] = Some(c);
        if self.cursor + 1 < OTP_LEN {
            self.cursor += 1;
        }
    }

    /// Clears the focused slot, or retreats and clears the previous slot
    /// when the focused one is already empty.
    pub fn backspace(&mut self) {
        if self.slots[self.cursor].is_some() {
            self.slots[self.cursor] = None;
        } else if self.cursor > 0 {
            self.cursor -= 1;
            self.slots[self.cursor] = None;
        }
    }

    /// Empties all slots and resets focus (used on resend).
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// The entered code, available only once all six slots are filled.
    pub fn code(&self) -> Option<String> {
        self.is_complete()
            .then(|| self.slots.iter().flatten().collect())
    }

    pub fn slots(&self) -> &[Option<char>; OTP_LEN] {
        &self.slots
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(code: &str) -> OtpEntry {
        let mut entry = OtpEntry::default();
        for c in code.chars() {
            entry.input(c);
        }
        entry
    }

    #[test]
    fn input_auto_advances() {
        let entry = typed("12");
        assert_eq!(entry.cursor(), 2);
        assert_eq!(entry.slots()[0], Some('1'));
        assert_eq!(entry.slots()[1], Some('2'));
    }

    #[test]
    fn cursor_stops_at_last_slot() {
        let mut entry = typed("123456");
        assert_eq!(entry.cursor(), OTP_LEN - 1);
        // Further input overwrites the last slot rather than panicking.
        entry.input('9');
        assert_eq!(entry.slots()[5], Some('9'));
    }

    #[test]
    fn non_alphanumeric_input_is_ignored() {
        let mut entry = OtpEntry::default();
        entry.input(' ');
        entry.input('-');
        assert_eq!(entry.cursor(), 0);
        assert!(entry.slots().iter().all(Option::is_none));
    }

    #[test]
    fn backspace_clears_then_retreats() {
        let mut entry = typed("123");
        // Cursor sits on the empty slot 3: backspace retreats and clears 2.
        entry.backspace();
        assert_eq!(entry.slots()[2], None);
        assert_eq!(entry.cursor(), 2);
        entry.backspace();
        assert_eq!(entry.cursor(), 1);
        assert_eq!(entry.slots()[1], None);
    }

    #[test]
    fn code_requires_all_six_slots() {
        assert_eq!(typed("12345").code(), None);
        assert_eq!(typed("123456").code().as_deref(), Some("123456"));
    }

    #[test]
    fn clear_resets_everything() {
        let mut entry = typed("123456");
        entry.clear();
        assert!(!entry.is_complete());
        assert_eq!(entry.cursor(), 0);
    }
}
