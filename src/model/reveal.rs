//! Scroll reveal: mark elements once enough of them enters the viewport

/// Vertical span of an element in page coordinates (logical pixels)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extent {
    pub top: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealObserver {
    /// Minimum visible fraction of an element
    pub threshold: f32,
    /// Inset applied to the bottom edge of the viewport
    pub bottom_margin_px: u32,
}

impl RevealObserver {
    pub fn new(threshold: f32, bottom_margin_px: u32) -> Self {
        Self {
            threshold,
            bottom_margin_px,
        }
    }

    /// Whether `extent` counts as intersecting a viewport that starts at
    /// `scroll_px` and is `viewport_height` tall.
    pub fn is_intersecting(&self, extent: Extent, scroll_px: u32, viewport_height: u32) -> bool {
        let root_top = scroll_px;
        let root_bottom = scroll_px + viewport_height.saturating_sub(self.bottom_margin_px);
        if root_bottom <= root_top {
            return false;
        }

        if extent.height == 0 {
            return extent.top >= root_top && extent.top < root_bottom;
        }

        let bottom = extent.top + extent.height;
        let visible = bottom.min(root_bottom).saturating_sub(extent.top.max(root_top));
        if visible == 0 {
            return false;
        }
        visible as f32 / extent.height as f32 >= self.threshold
    }
}
