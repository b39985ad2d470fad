//! Screen regions registered while drawing, used to resolve mouse clicks

use crate::controller::ClickTarget;
use ratatui::layout::{Position, Rect};

#[derive(Debug, Default)]
pub struct HitMap {
    regions: Vec<(Rect, ClickTarget)>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// Register `area`. Later regions sit on top of earlier ones.
    pub fn push(&mut self, area: Rect, target: ClickTarget) {
        if area.is_empty() {
            return;
        }
        self.regions.push((area, target));
    }

    pub fn target_at(&self, column: u16, row: u16) -> ClickTarget {
        let position = Position::new(column, row);
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(position))
            .map(|(_, target)| target.clone())
            .unwrap_or(ClickTarget::Elsewhere)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topmost_region_wins() {
        let mut hits = HitMap::default();
        hits.push(Rect::new(0, 0, 20, 10), ClickTarget::Sidebar);
        hits.push(Rect::new(1, 1, 18, 1), ClickTarget::Selector("card".to_string()));

        assert_eq!(hits.target_at(5, 1), ClickTarget::Selector("card".to_string()));
        assert_eq!(hits.target_at(5, 4), ClickTarget::Sidebar);
        assert_eq!(hits.target_at(30, 4), ClickTarget::Elsewhere);
    }

    #[test]
    fn test_empty_regions_are_ignored() {
        let mut hits = HitMap::default();
        hits.push(Rect::new(3, 3, 0, 5), ClickTarget::SearchBox);
        assert_eq!(hits.target_at(3, 3), ClickTarget::Elsewhere);

        hits.push(Rect::new(0, 0, 4, 4), ClickTarget::Card(2));
        hits.clear();
        assert_eq!(hits.target_at(1, 1), ClickTarget::Elsewhere);
    }
}
