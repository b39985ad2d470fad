//! Game cards and their field arrangement

use super::transition::Transition;
use super::ui::ViewMode;
use serde::{Deserialize, Serialize};

/// A game entry as stored in the catalog file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameEntry {
    pub title: String,
    pub category: String,
    /// Display text for the category; falls back to `category`
    #[serde(default)]
    pub category_label: Option<String>,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub stats: String,
}

/// The fields every card exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardField {
    Title,
    Category,
    Rating,
    Stats,
}

/// Child node of a card's info section
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutNode {
    Field(CardField),
    /// Sub-container grouping fields side by side (list view)
    Details(Vec<CardField>),
}

/// Tagged grouping state of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardLayout {
    #[default]
    Flat,
    Grouped,
}

impl CardLayout {
    pub fn for_view(mode: ViewMode) -> Self {
        match mode {
            ViewMode::Grid => CardLayout::Flat,
            ViewMode::List => CardLayout::Grouped,
        }
    }
}

/// Arrange the card fields for a grouping state
pub fn arrange(layout: CardLayout) -> Vec<LayoutNode> {
    match layout {
        CardLayout::Flat => vec![
            LayoutNode::Field(CardField::Title),
            LayoutNode::Field(CardField::Category),
            LayoutNode::Field(CardField::Rating),
            LayoutNode::Field(CardField::Stats),
        ],
        CardLayout::Grouped => vec![
            LayoutNode::Details(vec![CardField::Title, CardField::Category, CardField::Rating]),
            LayoutNode::Field(CardField::Stats),
        ],
    }
}

/// A card on the page
#[derive(Debug, Clone)]
pub struct Card {
    /// Position in the catalog
    pub id: usize,
    pub title: String,
    pub category: String,
    pub category_label: String,
    pub rating: f32,
    pub stats: String,
    pub layout: CardLayout,
    pub transition: Transition,
    /// Set once the card has scrolled into view
    pub revealed: bool,
}

impl Card {
    pub fn from_entry(id: usize, entry: GameEntry) -> Self {
        let category_label = entry
            .category_label
            .filter(|label| !label.trim().is_empty())
            .unwrap_or_else(|| entry.category.clone());
        Self {
            id,
            title: entry.title,
            category: entry.category,
            category_label,
            rating: entry.rating,
            stats: entry.stats,
            layout: CardLayout::Flat,
            transition: Transition::shown(),
            revealed: false,
        }
    }

    /// Switch the grouping to match `mode`; returns `true` if it changed
    pub fn apply_view(&mut self, mode: ViewMode) -> bool {
        let target = CardLayout::for_view(mode);
        if self.layout == target {
            return false;
        }
        self.layout = target;
        true
    }

    /// Current children of the info section
    pub fn children(&self) -> Vec<LayoutNode> {
        arrange(self.layout)
    }

    /// Text shown for a field
    pub fn field_text(&self, field: CardField) -> String {
        match field {
            CardField::Title => self.title.clone(),
            CardField::Category => self.category_label.clone(),
            CardField::Rating => format!("★ {:.1}", self.rating),
            CardField::Stats => self.stats.clone(),
        }
    }

    /// Whether the card takes part in layout right now
    pub fn is_displayed(&self) -> bool {
        self.transition.visual().displayed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, category: &str) -> GameEntry {
        GameEntry {
            title: title.to_string(),
            category: category.to_string(),
            category_label: None,
            rating: 4.5,
            stats: "1.2k players".to_string(),
        }
    }

    #[test]
    fn test_category_label_falls_back_to_key() {
        let card = Card::from_entry(0, entry("Chess", "board"));
        assert_eq!(card.category_label, "board");

        let mut labelled = entry("Chess", "board");
        labelled.category_label = Some("Board Games".to_string());
        let card = Card::from_entry(0, labelled);
        assert_eq!(card.category_label, "Board Games");
    }

    #[test]
    fn test_list_view_is_idempotent() {
        let mut card = Card::from_entry(0, entry("Chess", "board"));
        assert!(card.apply_view(ViewMode::List));
        let once = card.children();
        assert!(!card.apply_view(ViewMode::List));
        assert_eq!(card.children(), once);
        assert_eq!(once.len(), 2);
    }

    #[test]
    fn test_grid_restores_field_order() {
        let mut card = Card::from_entry(0, entry("Chess", "board"));
        card.apply_view(ViewMode::List);
        card.apply_view(ViewMode::Grid);
        assert_eq!(
            card.children(),
            vec![
                LayoutNode::Field(CardField::Title),
                LayoutNode::Field(CardField::Category),
                LayoutNode::Field(CardField::Rating),
                LayoutNode::Field(CardField::Stats),
            ]
        );
    }

    #[test]
    fn test_grouped_keeps_stats_outside_details() {
        let nodes = arrange(CardLayout::Grouped);
        assert_eq!(
            nodes,
            vec![
                LayoutNode::Details(vec![
                    CardField::Title,
                    CardField::Category,
                    CardField::Rating
                ]),
                LayoutNode::Field(CardField::Stats),
            ]
        );
    }

    #[test]
    fn test_field_text() {
        let card = Card::from_entry(3, entry("Poker", "card"));
        assert_eq!(card.field_text(CardField::Rating), "★ 4.5");
        assert_eq!(card.field_text(CardField::Stats), "1.2k players");
    }
}
