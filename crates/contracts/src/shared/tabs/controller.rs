/// Navigation intent decoded from a key press on a tab control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Next,
    Previous,
    First,
    Last,
}

impl NavKey {
    /// Maps a DOM `KeyboardEvent.key` value. `jump_modifier` is the platform
    /// modifier (Meta) that turns left/right into first/last.
    pub fn from_key(key: &str, jump_modifier: bool) -> Option<NavKey> {
        match key {
            "Home" => Some(NavKey::First),
            "End" => Some(NavKey::Last),
            "ArrowLeft" | "Left" if jump_modifier => Some(NavKey::First),
            "ArrowRight" | "Right" if jump_modifier => Some(NavKey::Last),
            "ArrowLeft" | "Left" => Some(NavKey::Previous),
            "ArrowRight" | "Right" => Some(NavKey::Next),
            _ => None,
        }
    }
}

/// Which panels are exposed to the accessibility tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelVisibility {
    /// Only the panel at the active index.
    #[default]
    FollowActive,
    /// Only the first panel, regardless of selection. Matches the earliest
    /// tab group, which hid every panel past index 0; kept selectable until
    /// it is confirmed whether that was intended.
    FirstOnly,
}

/// Attribute values of one tab control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabAttrs {
    /// `aria-selected`
    pub aria_selected: &'static str,
    /// `tabindex` of the tab button
    pub tab_index: i32,
}

/// Attribute values of one panel. A hidden panel has no `tabindex`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelAttrs {
    pub hidden: bool,
    pub tab_index: Option<i32>,
}

/// Selection state of one tab group plus roving-focus arithmetic.
///
/// Focus and selection are independent: arrow keys only move focus, a tab
/// becomes active through [`TabListController::select`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabListController {
    active_index: usize,
    tab_count: usize,
}

impl TabListController {
    pub fn new(tab_count: usize) -> Self {
        Self {
            active_index: 0,
            tab_count,
        }
    }

    /// `None` for an empty group.
    pub fn active(&self) -> Option<usize> {
        (self.tab_count > 0).then_some(self.active_index)
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.active() == Some(index)
    }

    /// Out-of-range indices are ignored. Returns whether `index` was taken.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.tab_count {
            self.active_index = index;
            true
        } else {
            false
        }
    }

    /// Index of the tab that should receive focus after `key` is pressed on
    /// the tab at `current`. Wraps around at both ends.
    pub fn next_focus_index(&self, current: usize, key: NavKey) -> Option<usize> {
        let n = self.tab_count;
        if n == 0 {
            return None;
        }
        let current = current.min(n - 1);
        let target = match key {
            NavKey::Next => (current + 1) % n,
            NavKey::Previous => (current + n - 1) % n,
            NavKey::First => 0,
            NavKey::Last => n - 1,
        };
        Some(target)
    }

    /// Roving tabindex: only the active tab is in the sequential order.
    pub fn tab_index(&self, index: usize) -> i32 {
        if self.is_selected(index) {
            0
        } else {
            -1
        }
    }

    pub fn panel_exposed(&self, index: usize, visibility: PanelVisibility) -> bool {
        match visibility {
            PanelVisibility::FollowActive => self.is_selected(index),
            PanelVisibility::FirstOnly => index == 0 && index < self.tab_count,
        }
    }

    pub fn tab_attrs(&self, index: usize) -> TabAttrs {
        TabAttrs {
            aria_selected: if self.is_selected(index) { "true" } else { "false" },
            tab_index: self.tab_index(index),
        }
    }

    pub fn panel_attrs(&self, index: usize, visibility: PanelVisibility) -> PanelAttrs {
        let exposed = self.panel_exposed(index, visibility);
        PanelAttrs {
            hidden: !exposed,
            tab_index: exposed.then_some(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let controller = TabListController::new(3);
        assert_eq!(controller.active(), Some(0));
        assert_eq!(controller.tab_index(0), 0);
        assert_eq!(controller.tab_index(1), -1);
    }

    #[test]
    fn test_select_valid_and_invalid() {
        let mut controller = TabListController::new(3);
        assert!(controller.select(2));
        assert_eq!(controller.active(), Some(2));

        assert!(!controller.select(3));
        assert!(!controller.select(usize::MAX));
        assert_eq!(controller.active(), Some(2));
    }

    #[test]
    fn test_select_exposes_only_selected_panel() {
        let mut controller = TabListController::new(3);
        controller.select(2);
        let exposed: Vec<bool> = (0..3)
            .map(|i| controller.panel_exposed(i, PanelVisibility::FollowActive))
            .collect();
        assert_eq!(exposed, vec![false, false, true]);
        assert_eq!(
            (0..3).map(|i| controller.tab_index(i)).collect::<Vec<_>>(),
            vec![-1, -1, 0]
        );
    }

    #[test]
    fn test_first_only_ignores_selection() {
        let mut controller = TabListController::new(3);
        controller.select(1);
        assert!(controller.panel_exposed(0, PanelVisibility::FirstOnly));
        assert!(!controller.panel_exposed(1, PanelVisibility::FirstOnly));
    }

    #[test]
    fn test_wraparound() {
        let controller = TabListController::new(4);
        assert_eq!(controller.next_focus_index(3, NavKey::Next), Some(0));
        assert_eq!(controller.next_focus_index(0, NavKey::Previous), Some(3));
        assert_eq!(controller.next_focus_index(1, NavKey::Next), Some(2));
        assert_eq!(controller.next_focus_index(2, NavKey::Previous), Some(1));
    }

    #[test]
    fn test_home_end_from_any_index() {
        let controller = TabListController::new(5);
        for current in 0..5 {
            assert_eq!(controller.next_focus_index(current, NavKey::First), Some(0));
            assert_eq!(controller.next_focus_index(current, NavKey::Last), Some(4));
        }
    }

    #[test]
    fn test_focus_does_not_select() {
        let controller = TabListController::new(3);
        let _ = controller.next_focus_index(0, NavKey::Next);
        assert_eq!(controller.active(), Some(0));
    }

    #[test]
    fn test_three_tab_example() {
        let mut controller = TabListController::new(3);
        assert_eq!(controller.active(), Some(0));
        controller.select(2);
        assert!(controller.panel_exposed(2, PanelVisibility::FollowActive));
        assert!(!controller.panel_exposed(0, PanelVisibility::FollowActive));
        assert!(!controller.panel_exposed(1, PanelVisibility::FollowActive));
        assert_eq!(controller.next_focus_index(2, NavKey::Next), Some(0));
    }

    #[test]
    fn test_single_tab_wraps_to_itself() {
        let controller = TabListController::new(1);
        assert_eq!(controller.next_focus_index(0, NavKey::Next), Some(0));
        assert_eq!(controller.next_focus_index(0, NavKey::Previous), Some(0));
    }

    #[test]
    fn test_empty_group() {
        let mut controller = TabListController::new(0);
        assert_eq!(controller.active(), None);
        assert!(!controller.select(0));
        assert_eq!(controller.next_focus_index(0, NavKey::Next), None);
        assert!(!controller.panel_exposed(0, PanelVisibility::FollowActive));
        assert!(!controller.panel_exposed(0, PanelVisibility::FirstOnly));
        assert_eq!(controller.tab_index(0), -1);
    }

    #[test]
    fn test_tab_attrs_follow_selection() {
        let mut controller = TabListController::new(3);
        controller.select(1);
        assert_eq!(
            controller.tab_attrs(1),
            TabAttrs { aria_selected: "true", tab_index: 0 }
        );
        for index in [0, 2] {
            assert_eq!(
                controller.tab_attrs(index),
                TabAttrs { aria_selected: "false", tab_index: -1 }
            );
        }
    }

    #[test]
    fn test_panel_attrs() {
        let mut controller = TabListController::new(3);
        controller.select(2);
        let visible = PanelAttrs { hidden: false, tab_index: Some(0) };
        let hidden = PanelAttrs { hidden: true, tab_index: None };

        let attrs: Vec<PanelAttrs> = (0..3)
            .map(|i| controller.panel_attrs(i, PanelVisibility::FollowActive))
            .collect();
        assert_eq!(attrs, vec![hidden, hidden, visible]);

        assert_eq!(controller.panel_attrs(0, PanelVisibility::FirstOnly), visible);
        assert_eq!(controller.panel_attrs(2, PanelVisibility::FirstOnly), hidden);
    }

    #[test]
    fn test_empty_group_attrs() {
        let controller = TabListController::new(0);
        assert_eq!(controller.tab_attrs(0).aria_selected, "false");
        assert!(controller.panel_attrs(0, PanelVisibility::FollowActive).hidden);
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(NavKey::from_key("ArrowRight", false), Some(NavKey::Next));
        assert_eq!(NavKey::from_key("Right", false), Some(NavKey::Next));
        assert_eq!(NavKey::from_key("ArrowLeft", false), Some(NavKey::Previous));
        assert_eq!(NavKey::from_key("Home", false), Some(NavKey::First));
        assert_eq!(NavKey::from_key("End", true), Some(NavKey::Last));
        assert_eq!(NavKey::from_key("ArrowLeft", true), Some(NavKey::First));
        assert_eq!(NavKey::from_key("ArrowRight", true), Some(NavKey::Last));
        assert_eq!(NavKey::from_key("Enter", false), None);
        assert_eq!(NavKey::from_key("a", true), None);
    }
}
