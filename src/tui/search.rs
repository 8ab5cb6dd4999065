//! Search input state for the TUI
//!
//! Owns the query text, the cursor, and the debounce clock. The clock is
//! armed on every qualifying edit and read back by the app's tick loop;
//! only the final text of a burst of edits ever produces a request.

use std::time::{Duration, Instant};

/// Search input state
pub struct SearchBox {
    pub query: String,
    pub cursor_pos: usize,
    pub focused: bool,
    dirty_since: Option<Instant>,
}

impl Default for SearchBox {
    fn default() -> Self {
        Self {
            query: String::new(),
            cursor_pos: 0,
            focused: true,
            dirty_since: None,
        }
    }
}

impl SearchBox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restart the debounce clock. Each call supersedes the previous one,
    /// so rapid edits coalesce into a single due query.
    pub fn mark_dirty(&mut self, now: Instant) {
        self.dirty_since = Some(now);
    }

    /// Cancel any pending debounce without touching the text.
    pub fn clear_pending(&mut self) {
        self.dirty_since = None;
    }

    pub fn is_pending(&self) -> bool {
        self.dirty_since.is_some()
    }

    /// Return the trimmed query once the quiet period has elapsed, clearing
    /// the clock. Returns `None` while the clock is unarmed or still running.
    pub fn take_due_query(&mut self, quiet: Duration, now: Instant) -> Option<String> {
        let armed_at = self.dirty_since?;
        if now.duration_since(armed_at) < quiet {
            return None;
        }
        self.dirty_since = None;
        Some(self.query.trim().to_string())
    }

    /// Bypass the quiet period (Enter in the search box).
    pub fn take_query_now(&mut self) -> String {
        self.dirty_since = None;
        self.query.trim().to_string()
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.cursor_pos = 0;
        self.dirty_since = None;
    }

    // --- Cursor-aware editing ---

    pub fn insert_char(&mut self, c: char) {
        self.query.insert(self.cursor_pos, c);
        self.cursor_pos += c.len_utf8();
    }

    /// Delete the character before the cursor. Returns false at the start.
    pub fn backspace(&mut self) -> bool {
        if self.cursor_pos == 0 {
            return false;
        }
        // Find the previous character boundary
        let prev = self.query[..self.cursor_pos]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0);
        self.query.remove(prev);
        self.cursor_pos = prev;
        true
    }

    /// Delete the character under the cursor. Returns false at the end.
    pub fn delete_forward(&mut self) -> bool {
        if self.cursor_pos >= self.query.len() {
            return false;
        }
        self.query.remove(self.cursor_pos);
        true
    }

    pub fn move_left(&mut self) {
        if self.cursor_pos > 0 {
            let prev = self.query[..self.cursor_pos]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.cursor_pos = prev;
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor_pos < self.query.len() {
            let next = self.query[self.cursor_pos..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor_pos + i)
                .unwrap_or(self.query.len());
            self.cursor_pos = next;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor_pos = self.query.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUIET: Duration = Duration::from_millis(300);

    #[test]
    fn debounce_fires_after_quiet_period() {
        let mut search = SearchBox::new();
        let t0 = Instant::now();

        search.query = "matrix".to_string();
        search.mark_dirty(t0);

        assert_eq!(search.take_due_query(QUIET, t0 + Duration::from_millis(299)), None);
        assert_eq!(
            search.take_due_query(QUIET, t0 + Duration::from_millis(300)),
            Some("matrix".to_string())
        );
        // Clock is cleared after firing
        assert_eq!(search.take_due_query(QUIET, t0 + Duration::from_secs(10)), None);
    }

    #[test]
    fn rapid_edits_coalesce_into_one_query() {
        let mut search = SearchBox::new();
        let t0 = Instant::now();

        search.query = "mat".to_string();
        search.mark_dirty(t0);

        // A further edit 100ms later restarts the clock
        let t1 = t0 + Duration::from_millis(100);
        search.query = "matrix".to_string();
        search.mark_dirty(t1);

        // 300ms past the FIRST edit is only 200ms past the second: not due
        assert_eq!(search.take_due_query(QUIET, t0 + Duration::from_millis(300)), None);

        // 300ms past the second edit: exactly one query, the final text
        assert_eq!(
            search.take_due_query(QUIET, t1 + Duration::from_millis(300)),
            Some("matrix".to_string())
        );
        assert!(!search.is_pending());
    }

    #[test]
    fn due_query_is_trimmed() {
        let mut search = SearchBox::new();
        let t0 = Instant::now();

        search.query = "  blade runner  ".to_string();
        search.mark_dirty(t0);

        assert_eq!(
            search.take_due_query(QUIET, t0 + QUIET),
            Some("blade runner".to_string())
        );
    }

    #[test]
    fn unarmed_clock_never_fires() {
        let mut search = SearchBox::new();
        search.query = "matrix".to_string();

        assert_eq!(search.take_due_query(QUIET, Instant::now()), None);
    }

    #[test]
    fn clear_pending_cancels_the_clock() {
        let mut search = SearchBox::new();
        let t0 = Instant::now();

        search.query = "matrix".to_string();
        search.mark_dirty(t0);
        search.clear_pending();

        assert_eq!(search.take_due_query(QUIET, t0 + Duration::from_secs(1)), None);
    }

    #[test]
    fn editing_respects_char_boundaries() {
        let mut search = SearchBox::new();
        for c in "héllo".chars() {
            search.insert_char(c);
        }
        assert_eq!(search.query, "héllo");

        search.backspace();
        search.backspace();
        search.backspace();
        search.backspace();
        assert_eq!(search.query, "h");
        assert_eq!(search.cursor_pos, 1);

        assert!(search.backspace());
        assert!(!search.backspace());
        assert_eq!(search.query, "");
    }

    #[test]
    fn cursor_moves_over_multibyte_chars() {
        let mut search = SearchBox::new();
        for c in "né".chars() {
            search.insert_char(c);
        }

        search.move_left();
        assert_eq!(search.cursor_pos, 1);
        search.move_left();
        assert_eq!(search.cursor_pos, 0);
        search.move_right();
        assert_eq!(search.cursor_pos, 1);
        search.move_right();
        assert_eq!(search.cursor_pos, search.query.len());
    }
}
