use crate::types::{Activity, ActivityId};

/// Top-level screens, one per nav tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Agenda,
    Activities,
    Form,
}

/// Which half of the activities screen receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivitiesFocus {
    Filters,
    Cards,
}

/// Modal showing one activity, opened from the agenda or the card grid.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailState {
    pub activity: Activity,
    pub origin: View,
    pub confirm_delete: bool,
    /// First field line shown; the renderer clamps it to the content.
    pub scroll: u16,
}

impl DetailState {
    pub fn new(activity: Activity, origin: View) -> Self {
        Self {
            activity,
            origin,
            confirm_delete: false,
            scroll: 0,
        }
    }

    pub fn activity_id(&self) -> ActivityId {
        self.activity.id
    }
}

/// A text input with mid-string cursor support and an optional length cap.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextInput {
    pub value: String,
    pub cursor: usize,
    max_chars: Option<usize>,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_chars(max_chars: usize) -> Self {
        Self {
            max_chars: Some(max_chars),
            ..Self::default()
        }
    }

    /// Replace the content, keeping the cap. Overlong values are truncated.
    pub fn set(&mut self, s: &str) {
        self.value = match self.max_chars {
            Some(max) => s.chars().take(max).collect(),
            None => s.to_string(),
        };
        self.cursor = self.value.len();
    }

    /// Insert a character at the cursor. Returns false when the cap is reached.
    pub fn insert(&mut self, c: char) -> bool {
        if self
            .max_chars
            .is_some_and(|max| self.value.chars().count() >= max)
        {
            return false;
        }
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
        true
    }

    /// Delete the character immediately before the cursor (backspace).
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let new_cursor = self.prev_boundary(self.cursor);
        self.value.drain(new_cursor..self.cursor);
        self.cursor = new_cursor;
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.prev_boundary(self.cursor);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.value.len() {
            self.cursor = self.next_boundary(self.cursor);
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.value.len();
    }

    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    /// Returns the string split at the cursor: (before, after).
    pub fn split_at_cursor(&self) -> (&str, &str) {
        (&self.value[..self.cursor], &self.value[self.cursor..])
    }

    fn prev_boundary(&self, pos: usize) -> usize {
        let mut p = pos;
        loop {
            p -= 1;
            if self.value.is_char_boundary(p) {
                return p;
            }
        }
    }

    fn next_boundary(&self, pos: usize) -> usize {
        let mut p = pos + 1;
        while p <= self.value.len() && !self.value.is_char_boundary(p) {
            p += 1;
        }
        p
    }
}

/// Step through `None` and every option of a closed set.
pub fn cycle_optional<T: Copy + PartialEq>(all: &[T], current: Option<T>, forward: bool) -> Option<T> {
    let len = all.len();
    if len == 0 {
        return None;
    }
    let position = current.and_then(|c| all.iter().position(|v| *v == c));
    match (position, forward) {
        (None, true) => Some(all[0]),
        (None, false) => Some(all[len - 1]),
        (Some(i), true) if i + 1 < len => Some(all[i + 1]),
        (Some(i), false) if i > 0 => Some(all[i - 1]),
        _ => None,
    }
}

/// Step through a closed set, wrapping around.
pub fn cycle_required<T: Copy + PartialEq>(all: &[T], current: T, forward: bool) -> T {
    let len = all.len();
    let i = all.iter().position(|v| *v == current).unwrap_or(0);
    let next = if forward { (i + 1) % len } else { (i + len - 1) % len };
    all[next]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, Status};

    #[test]
    fn text_input_edits_at_cursor() {
        let mut input = TextInput::new();
        for c in "praa".chars() {
            input.insert(c);
        }
        input.move_left();
        input.insert('i');
        assert_eq!(input.value, "praia");
        assert_eq!(input.split_at_cursor(), ("prai", "a"));

        input.end();
        input.backspace();
        assert_eq!(input.value, "prai");
    }

    #[test]
    fn text_input_handles_multibyte_chars() {
        let mut input = TextInput::new();
        input.set("açaí");
        input.backspace();
        input.move_left();
        input.backspace();
        assert_eq!(input.value, "aa");
    }

    #[test]
    fn text_input_respects_cap() {
        let mut input = TextInput::with_max_chars(3);
        assert!(input.insert('a'));
        assert!(input.insert('b'));
        assert!(input.insert('ç'));
        assert!(!input.insert('d'));
        assert_eq!(input.value, "abç");

        input.set("abcdef");
        assert_eq!(input.value, "abc");
    }

    #[test]
    fn optional_cycle_passes_through_none() {
        let all = Status::ALL;
        let mut current = None;
        let mut seen = Vec::new();
        for _ in 0..4 {
            current = cycle_optional(&all, current, true);
            seen.push(current);
        }
        assert_eq!(
            seen,
            vec![
                Some(Status::Pendente),
                Some(Status::Concluida),
                Some(Status::Cancelada),
                None
            ]
        );
        assert_eq!(cycle_optional(&all, None, false), Some(Status::Cancelada));
    }

    #[test]
    fn required_cycle_wraps() {
        assert_eq!(
            cycle_required(&Category::ALL, Category::Outro, true),
            Category::Alimentacao
        );
        assert_eq!(
            cycle_required(&Category::ALL, Category::Alimentacao, false),
            Category::Outro
        );
    }
}
