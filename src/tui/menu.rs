//! Profile dropdown menu state
//!
//! One trigger in the menu bar, one popup below it. Opening and closing is
//! driven by the app's event routing: the trigger toggles, a click outside
//! the trigger+menu region closes, item activation opens the matching page.

use ratatui::layout::Rect;

/// The account pages reachable from the profile menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileAction {
    Profile,
    Watchlists,
    Settings,
    LogOut,
}

impl ProfileAction {
    pub fn label(&self) -> &'static str {
        match self {
            ProfileAction::Profile => "Profile",
            ProfileAction::Watchlists => "Watchlists",
            ProfileAction::Settings => "Settings",
            ProfileAction::LogOut => "Log out",
        }
    }

    /// Server-relative path of the page this item opens
    pub fn path(&self) -> &'static str {
        match self {
            ProfileAction::Profile => "profile",
            ProfileAction::Watchlists => "my_lists",
            ProfileAction::Settings => "settings",
            ProfileAction::LogOut => "logout",
        }
    }
}

/// Profile dropdown state
pub struct ProfileMenu {
    pub open: bool,
    pub items: Vec<(&'static str, ProfileAction)>,
    pub selected: usize,
}

impl ProfileMenu {
    pub fn new() -> Self {
        Self {
            open: false,
            items: vec![
                ("Profile", ProfileAction::Profile),
                ("Watchlists", ProfileAction::Watchlists),
                ("Settings", ProfileAction::Settings),
                ("Log out", ProfileAction::LogOut),
            ],
            selected: 0,
        }
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
        self.selected = 0;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn move_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn move_down(&mut self) {
        if self.selected < self.items.len() - 1 {
            self.selected += 1;
        }
    }

    pub fn selected_action(&self) -> ProfileAction {
        self.items[self.selected].1
    }
}

impl Default for ProfileMenu {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether a terminal cell lies inside a rect. Zero-sized rects contain
/// nothing, so unrendered widgets never swallow clicks.
pub fn hit(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_open_state() {
        let mut menu = ProfileMenu::new();
        assert!(!menu.open);
        menu.toggle();
        assert!(menu.open);
        menu.toggle();
        assert!(!menu.open);
    }

    #[test]
    fn selection_clamps_to_items() {
        let mut menu = ProfileMenu::new();
        menu.move_up();
        assert_eq!(menu.selected, 0);

        for _ in 0..10 {
            menu.move_down();
        }
        assert_eq!(menu.selected, menu.items.len() - 1);
        assert_eq!(menu.selected_action(), ProfileAction::LogOut);
    }

    #[test]
    fn hit_testing_respects_bounds() {
        let rect = Rect::new(10, 2, 5, 3);

        assert!(hit(rect, 10, 2));
        assert!(hit(rect, 14, 4));
        assert!(!hit(rect, 15, 2));
        assert!(!hit(rect, 9, 2));
        assert!(!hit(rect, 10, 5));
    }

    #[test]
    fn zero_rect_contains_nothing() {
        let rect = Rect::default();
        assert!(!hit(rect, 0, 0));
    }
}
