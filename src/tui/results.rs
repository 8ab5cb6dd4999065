//! Suggestion list state for the TUI
//!
//! The panel is visible only while it has something to show: either a
//! non-empty batch of suggestions or a one-line failure notice. Hiding
//! retains the last batch so refocusing the search box can bring it back.

use crate::api::Suggestion;

/// Results panel state
pub struct ResultsPanel {
    suggestions: Vec<Suggestion>,
    notice: Option<String>,
    visible: bool,
    pub selected: Option<usize>,
    pub scroll_offset: usize,
    pub visible_rows: usize,
}

impl Default for ResultsPanel {
    fn default() -> Self {
        Self {
            suggestions: Vec::new(),
            notice: None,
            visible: false,
            selected: None,
            scroll_offset: 0,
            visible_rows: 10,
        }
    }
}

impl ResultsPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the panel content with a fresh batch, in the order received.
    /// An empty batch clears and hides the panel.
    pub fn show(&mut self, suggestions: Vec<Suggestion>) {
        self.notice = None;
        self.selected = None;
        self.scroll_offset = 0;
        self.visible = !suggestions.is_empty();
        self.suggestions = suggestions;
    }

    /// Drop all content and hide the panel.
    pub fn clear(&mut self) {
        self.suggestions.clear();
        self.notice = None;
        self.selected = None;
        self.scroll_offset = 0;
        self.visible = false;
    }

    /// Hide the panel but keep the current batch for a later re-show.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Re-show the retained batch, if any. Returns whether the panel is
    /// now visible.
    pub fn reshow(&mut self) -> bool {
        if !self.suggestions.is_empty() {
            self.visible = true;
        }
        self.visible
    }

    /// Replace the content with a one-line failure notice.
    pub fn set_notice(&mut self, text: impl Into<String>) {
        self.suggestions.clear();
        self.selected = None;
        self.scroll_offset = 0;
        self.notice = Some(text.into());
        self.visible = true;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn len(&self) -> usize {
        self.suggestions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }

    pub fn selected_suggestion(&self) -> Option<&Suggestion> {
        self.selected.and_then(|i| self.suggestions.get(i))
    }

    // --- Selection ---

    pub fn select_next(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        let i = match self.selected {
            Some(i) => (i + 1).min(self.suggestions.len() - 1),
            None => 0,
        };
        self.selected = Some(i);
        self.ensure_visible(i);
    }

    pub fn select_prev(&mut self) {
        let i = match self.selected {
            Some(0) | None => 0,
            Some(i) => i - 1,
        };
        self.selected = Some(i);
        self.ensure_visible(i);
    }

    /// Select the row at an absolute index (mouse click). Returns false if
    /// the index is out of range.
    pub fn select_index(&mut self, index: usize) -> bool {
        if index >= self.suggestions.len() {
            return false;
        }
        self.selected = Some(index);
        self.ensure_visible(index);
        true
    }

    fn ensure_visible(&mut self, index: usize) {
        if index < self.scroll_offset {
            self.scroll_offset = index;
        } else if self.visible_rows > 0 && index >= self.scroll_offset + self.visible_rows {
            self.scroll_offset = index - self.visible_rows + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suggestion(title: &str, url: &str) -> Suggestion {
        Suggestion {
            title: title.to_string(),
            url: url.to_string(),
        }
    }

    #[test]
    fn show_preserves_order_and_becomes_visible() {
        let mut panel = ResultsPanel::new();
        panel.show(vec![
            suggestion("Matrix", "/movie/1"),
            suggestion("Matrix Reloaded", "/movie/2"),
            suggestion("Matrix Revolutions", "/movie/3"),
        ]);

        assert!(panel.is_visible());
        assert_eq!(panel.len(), 3);
        let titles: Vec<_> = panel.suggestions().iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["Matrix", "Matrix Reloaded", "Matrix Revolutions"]);
    }

    #[test]
    fn empty_batch_hides_the_panel() {
        let mut panel = ResultsPanel::new();
        panel.show(vec![suggestion("Matrix", "/movie/1")]);
        panel.show(Vec::new());

        assert!(!panel.is_visible());
        assert!(panel.is_empty());
    }

    #[test]
    fn show_replaces_prior_content() {
        let mut panel = ResultsPanel::new();
        panel.show(vec![suggestion("Old", "/movie/9")]);
        panel.show(vec![suggestion("New", "/movie/10")]);

        assert_eq!(panel.len(), 1);
        assert_eq!(panel.suggestions()[0].title, "New");
    }

    #[test]
    fn hide_retains_content_for_reshow() {
        let mut panel = ResultsPanel::new();
        panel.show(vec![suggestion("Matrix", "/movie/1")]);
        panel.hide();

        assert!(!panel.is_visible());
        assert!(panel.reshow());
        assert!(panel.is_visible());
        assert_eq!(panel.len(), 1);
    }

    #[test]
    fn reshow_with_nothing_retained_stays_hidden() {
        let mut panel = ResultsPanel::new();
        assert!(!panel.reshow());
    }

    #[test]
    fn notice_is_visible_without_suggestions() {
        let mut panel = ResultsPanel::new();
        panel.show(vec![suggestion("Matrix", "/movie/1")]);
        panel.set_notice("Couldn't load suggestions");

        assert!(panel.is_visible());
        assert!(panel.is_empty());
        assert_eq!(panel.notice(), Some("Couldn't load suggestions"));
        // A fresh batch clears the notice
        panel.show(vec![suggestion("Matrix", "/movie/1")]);
        assert_eq!(panel.notice(), None);
    }

    #[test]
    fn selection_clamps_at_both_ends() {
        let mut panel = ResultsPanel::new();
        panel.show(vec![
            suggestion("A", "/a"),
            suggestion("B", "/b"),
        ]);

        panel.select_prev();
        assert_eq!(panel.selected, Some(0));
        panel.select_next();
        panel.select_next();
        panel.select_next();
        assert_eq!(panel.selected, Some(1));
        assert_eq!(panel.selected_suggestion().unwrap().title, "B");
    }

    #[test]
    fn select_index_rejects_out_of_range() {
        let mut panel = ResultsPanel::new();
        panel.show(vec![suggestion("A", "/a")]);

        assert!(panel.select_index(0));
        assert!(!panel.select_index(1));
        assert_eq!(panel.selected, Some(0));
    }

    #[test]
    fn scrolling_follows_the_selection() {
        let mut panel = ResultsPanel::new();
        panel.show((0..20).map(|i| suggestion(&format!("S{i}"), "/s")).collect());
        panel.visible_rows = 5;

        for _ in 0..10 {
            panel.select_next();
        }
        assert_eq!(panel.selected, Some(9));
        assert_eq!(panel.scroll_offset, 5);

        for _ in 0..10 {
            panel.select_prev();
        }
        assert_eq!(panel.scroll_offset, 0);
    }
}
