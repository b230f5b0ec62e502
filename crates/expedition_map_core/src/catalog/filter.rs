//! Per-category marker visibility toggles.

use crate::model::marker::MarkerCategory;

/// Visibility state for the four map filter checkboxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerFilter {
    pub show_exhibits: bool,
    pub show_friends: bool,
    pub show_solutions: bool,
    pub show_mailboxes: bool,
}

impl Default for MarkerFilter {
    /// Solutions start hidden; they are spoilers.
    fn default() -> Self {
        Self {
            show_exhibits: true,
            show_friends: true,
            show_solutions: false,
            show_mailboxes: true,
        }
    }
}

impl MarkerFilter {
    /// Filter with every category hidden.
    pub fn none() -> Self {
        Self {
            show_exhibits: false,
            show_friends: false,
            show_solutions: false,
            show_mailboxes: false,
        }
    }

    /// Filter showing only the given categories.
    pub fn only(categories: &[MarkerCategory]) -> Self {
        let mut filter = Self::none();
        for category in categories {
            filter.set(*category, true);
        }
        filter
    }

    pub fn is_visible(&self, category: MarkerCategory) -> bool {
        match category {
            MarkerCategory::Exhibit => self.show_exhibits,
            MarkerCategory::Friend => self.show_friends,
            MarkerCategory::Solution => self.show_solutions,
            MarkerCategory::Mailbox => self.show_mailboxes,
        }
    }

    pub fn set(&mut self, category: MarkerCategory, visible: bool) {
        *self.slot(category) = visible;
    }

    /// Flips one category and returns its new state.
    pub fn toggle(&mut self, category: MarkerCategory) -> bool {
        let slot = self.slot(category);
        *slot = !*slot;
        *slot
    }

    fn slot(&mut self, category: MarkerCategory) -> &mut bool {
        match category {
            MarkerCategory::Exhibit => &mut self.show_exhibits,
            MarkerCategory::Friend => &mut self.show_friends,
            MarkerCategory::Solution => &mut self.show_solutions,
            MarkerCategory::Mailbox => &mut self.show_mailboxes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MarkerFilter;
    use crate::model::marker::MarkerCategory;

    #[test]
    fn default_hides_only_solutions() {
        let filter = MarkerFilter::default();
        assert!(filter.is_visible(MarkerCategory::Exhibit));
        assert!(filter.is_visible(MarkerCategory::Friend));
        assert!(filter.is_visible(MarkerCategory::Mailbox));
        assert!(!filter.is_visible(MarkerCategory::Solution));
    }

    #[test]
    fn toggle_flips_and_reports_state() {
        let mut filter = MarkerFilter::default();
        assert!(filter.toggle(MarkerCategory::Solution));
        assert!(filter.is_visible(MarkerCategory::Solution));
        assert!(!filter.toggle(MarkerCategory::Solution));
    }

    #[test]
    fn only_enables_listed_categories() {
        let filter = MarkerFilter::only(&[MarkerCategory::Mailbox]);
        for category in MarkerCategory::ALL {
            assert_eq!(filter.is_visible(category), category == MarkerCategory::Mailbox);
        }
    }
}
