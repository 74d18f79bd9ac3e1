//! Navigation shell: the sidebar menu and the selected-section state.
//!
//! The menu is a fixed list of sections. The Features section carries nested
//! sub-items that are display-only; they do not route to a view of their own.

/// A nested, display-only entry under a sidebar section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubItem {
    pub label: &'static str,
    pub key: &'static str,
}

/// A top-level sidebar section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarItem {
    pub label: &'static str,
    pub key: &'static str,
    pub sub_items: &'static [SubItem],
}

/// The fixed sidebar menu, in display order.
pub const SIDEBAR_ITEMS: &[SidebarItem] = &[
    SidebarItem { label: "Dashboard", key: "dashboard", sub_items: &[] },
    SidebarItem { label: "Tasks", key: "tasks", sub_items: &[] },
    SidebarItem { label: "Meetings", key: "meetings", sub_items: &[] },
    SidebarItem { label: "Branding", key: "branding", sub_items: &[] },
    SidebarItem { label: "Business Plan", key: "business-plan", sub_items: &[] },
    SidebarItem { label: "Demo", key: "demo", sub_items: &[] },
    SidebarItem {
        label: "Features",
        key: "features",
        sub_items: &[
            SubItem { label: "Marketplace", key: "marketplace" },
            SubItem { label: "Health", key: "health" },
            SubItem { label: "Groups", key: "groups" },
            SubItem { label: "Career Center", key: "career-center" },
            SubItem { label: "Gus Education", key: "gus-education" },
            SubItem { label: "Business Center", key: "business-center" },
        ],
    },
    SidebarItem { label: "Financial Projections", key: "financial-projections", sub_items: &[] },
    SidebarItem { label: "Lean Business Plan", key: "lean-business-plan", sub_items: &[] },
    SidebarItem { label: "Legal", key: "legal", sub_items: &[] },
    SidebarItem { label: "Marketing", key: "marketing", sub_items: &[] },
    SidebarItem { label: "Pitch Deck", key: "pitch-deck", sub_items: &[] },
    SidebarItem { label: "Product Roadmap", key: "product-roadmap", sub_items: &[] },
    SidebarItem { label: "Target Market Research", key: "target-market-research", sub_items: &[] },
    SidebarItem { label: "Timeline", key: "timeline", sub_items: &[] },
];

/// Look up a top-level section by key.
pub fn find_item(key: &str) -> Option<&'static SidebarItem> {
    SIDEBAR_ITEMS.iter().find(|item| item.key == key)
}

/// Position of a section key within the menu.
pub fn item_index(key: &str) -> Option<usize> {
    SIDEBAR_ITEMS.iter().position(|item| item.key == key)
}

/// Navigation state: which section is shown and whether the sidebar is
/// collapsed to its narrow form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shell {
    selected: String,
    collapsed: bool,
}

impl Default for Shell {
    fn default() -> Self {
        Shell {
            selected: "dashboard".to_string(),
            collapsed: false,
        }
    }
}

impl Shell {
    /// Create a shell showing the dashboard with the sidebar expanded.
    pub fn new() -> Self {
        Shell::default()
    }

    /// The key of the currently selected section.
    pub fn selected(&self) -> &str {
        &self.selected
    }

    /// Select a section. Pure assignment; every key in the fixed menu is
    /// valid and no other state is touched.
    pub fn select(&mut self, key: &str) {
        self.selected = key.to_string();
    }

    /// Whether the sidebar is collapsed.
    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Toggle the sidebar between expanded and collapsed.
    pub fn toggle_collapsed(&mut self) {
        self.collapsed = !self.collapsed;
    }

    /// Display label of the selected section.
    pub fn selected_label(&self) -> &'static str {
        find_item(&self.selected).map_or("Dashboard", |item| item.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_matches_fixed_section_set() {
        assert_eq!(SIDEBAR_ITEMS.len(), 15);
        assert_eq!(SIDEBAR_ITEMS[0].key, "dashboard");
        assert_eq!(SIDEBAR_ITEMS[1].key, "tasks");
        let features = find_item("features").unwrap();
        assert_eq!(features.sub_items.len(), 6);
        assert_eq!(features.sub_items[0].key, "marketplace");
    }

    #[test]
    fn test_select_is_pure_assignment() {
        let mut shell = Shell::new();
        assert_eq!(shell.selected(), "dashboard");
        shell.select("pitch-deck");
        assert_eq!(shell.selected(), "pitch-deck");
        assert_eq!(shell.selected_label(), "Pitch Deck");
        assert!(!shell.is_collapsed());
    }

    #[test]
    fn test_collapse_toggles_independently_of_selection() {
        let mut shell = Shell::new();
        shell.toggle_collapsed();
        assert!(shell.is_collapsed());
        shell.toggle_collapsed();
        assert!(!shell.is_collapsed());
        assert_eq!(shell.selected(), "dashboard");
    }

    #[test]
    fn test_item_index_lookup() {
        assert_eq!(item_index("dashboard"), Some(0));
        assert_eq!(item_index("timeline"), Some(14));
        assert_eq!(item_index("marketplace"), None);
    }
}
