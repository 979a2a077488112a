//! Sidebar navigation
//!
//! Jumping to a section scrolls it into view and moves the "active" mark to
//! the sidebar item that asked for it. The triggering item is passed in
//! explicitly; it does not have to be the item for the target section.

/// A page section reachable from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    /// Element id of the section
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

/// Sections of the dashboard page, top to bottom
pub const SECTIONS: &[Section] = &[
    Section {
        id: "current",
        label: "Current",
        icon: "🌡️",
    },
    Section {
        id: "chart",
        label: "Chart",
        icon: "📈",
    },
    Section {
        id: "statistics",
        label: "Statistics",
        icon: "📊",
    },
    Section {
        id: "history",
        label: "History",
        icon: "📋",
    },
];

/// How the page scrolls to a section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
}

/// Scroll request produced by [`Navigation::scroll_to_section`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollTarget {
    pub section: &'static str,
    pub behavior: ScrollBehavior,
}

/// One sidebar entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub section: Section,
    pub active: bool,
}

/// Sidebar state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    items: Vec<NavItem>,
}

impl Navigation {
    /// Sidebar over `sections`, first item active
    pub fn new(sections: &[Section]) -> Self {
        let items = sections
            .iter()
            .enumerate()
            .map(|(i, section)| NavItem {
                section: *section,
                active: i == 0,
            })
            .collect();

        Self { items }
    }

    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    /// Id of the active item, if any
    pub fn active(&self) -> Option<&'static str> {
        self.items
            .iter()
            .find(|item| item.active)
            .map(|item| item.section.id)
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active() == Some(id)
    }

    /// Scroll to `section_id` and mark `trigger` as the active item.
    ///
    /// Returns `None` and changes nothing when the section does not exist.
    /// An unknown trigger still scrolls but leaves no item active.
    pub fn scroll_to_section(&mut self, section_id: &str, trigger: &str) -> Option<ScrollTarget> {
        let section = self
            .items
            .iter()
            .find(|item| item.section.id == section_id)?
            .section;

        for item in &mut self.items {
            item.active = item.section.id == trigger;
        }

        Some(ScrollTarget {
            section: section.id,
            behavior: ScrollBehavior::Smooth,
        })
    }
}

impl Default for Navigation {
    fn default() -> Self {
        Self::new(SECTIONS)
    }
}
