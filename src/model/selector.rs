//! Category selectors shown in the sidebar

/// Category key that matches every card
pub const ALL_CATEGORY: &str = "all";

#[derive(Debug, Clone, PartialEq)]
pub struct CategorySelector {
    pub category: String,
    pub label: String,
    pub active: bool,
}

/// Ordered selectors; at most one is active at a time
#[derive(Debug, Clone, Default)]
pub struct SelectorSet {
    selectors: Vec<CategorySelector>,
}

impl SelectorSet {
    /// Build the set from `(category, label)` pairs, with "all" prepended
    /// and active.
    pub fn new<I>(categories: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut selectors = vec![CategorySelector {
            category: ALL_CATEGORY.to_string(),
            label: "All Games".to_string(),
            active: true,
        }];
        for (category, label) in categories {
            if category == ALL_CATEGORY || selectors.iter().any(|s| s.category == category) {
                continue;
            }
            selectors.push(CategorySelector {
                category,
                label,
                active: false,
            });
        }
        Self { selectors }
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategorySelector> {
        self.selectors.iter()
    }

    pub fn len(&self) -> usize {
        self.selectors.len()
    }

    pub fn get(&self, index: usize) -> Option<&CategorySelector> {
        self.selectors.get(index)
    }

    /// Remove highlighting from every selector
    pub fn clear(&mut self) {
        for selector in &mut self.selectors {
            selector.active = false;
        }
    }

    /// Highlight the selector for `category`; unknown keys leave nothing
    /// highlighted. Returns `true` if a selector matched.
    pub fn activate(&mut self, category: &str) -> bool {
        self.clear();
        match self.selectors.iter_mut().find(|s| s.category == category) {
            Some(selector) => {
                selector.active = true;
                true
            }
            None => false,
        }
    }

    pub fn active(&self) -> Option<&CategorySelector> {
        self.selectors.iter().find(|s| s.active)
    }

    pub fn active_index(&self) -> Option<usize> {
        self.selectors.iter().position(|s| s.active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set() -> SelectorSet {
        SelectorSet::new(vec![
            ("board".to_string(), "Board".to_string()),
            ("card".to_string(), "Card".to_string()),
            ("board".to_string(), "Duplicate".to_string()),
        ])
    }

    #[test]
    fn test_all_is_first_and_active() {
        let selectors = set();
        assert_eq!(selectors.len(), 3);
        assert_eq!(selectors.get(0).map(|s| s.category.as_str()), Some(ALL_CATEGORY));
        assert_eq!(selectors.active_index(), Some(0));
    }

    #[test]
    fn test_activate_keeps_single_highlight() {
        let mut selectors = set();
        assert!(selectors.activate("card"));
        assert_eq!(selectors.iter().filter(|s| s.active).count(), 1);
        assert_eq!(selectors.active().map(|s| s.label.as_str()), Some("Card"));
    }

    #[test]
    fn test_unknown_category_clears_highlight() {
        let mut selectors = set();
        assert!(!selectors.activate("racing"));
        assert!(selectors.active().is_none());
    }
}
