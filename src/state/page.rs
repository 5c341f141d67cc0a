//! Page model: the named regions of the product page and the small
//! capability interface the controller uses to mutate them.
//!
//! The controller never knows how a region is drawn. It only flips
//! markers (visibility, active highlight) and writes text, which keeps
//! all of its logic testable without a window.

use std::collections::{HashMap, HashSet};

/// A named region of the product page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Navigation panel that slides in from the left
    Sidebar,
    /// Dimming layer drawn behind the open sidebar
    Overlay,
    /// Cart summary dropdown under the cart icon
    CartMenu,
    /// One image of the carousel
    Slide(usize),
    /// One thumbnail under the carousel
    Thumbnail(usize),
    /// Quantity shown between the stepper buttons
    QuantityLabel,
    /// Quantity shown on the cart line ("$125.00 x N")
    CartQuantity,
    /// Item count bubble on the cart icon
    CartBadge,
    /// Line total inside the cart dropdown
    CartTotal,
    /// "Your cart is empty." message
    EmptyMessage,
    /// Product line inside the cart dropdown
    ProductContainer,
    /// Checkout button inside the cart dropdown
    CheckoutButton,
}

/// State markers a region can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// Region is shown (panels, slides, badge)
    Visible,
    /// Thumbnail highlight
    Active,
}

/// Capability interface over the page regions
pub trait Page {
    /// Set or clear a marker on a region
    fn set_marker(&mut self, region: Region, marker: Marker, on: bool);

    /// Whether a region currently carries a marker
    fn has_marker(&self, region: Region, marker: Marker) -> bool;

    /// Replace the text content of a region
    fn set_text(&mut self, region: Region, text: String);

    /// Current text content of a region (empty if never set)
    fn text(&self, region: Region) -> &str;

    fn show(&mut self, region: Region) {
        self.set_marker(region, Marker::Visible, true);
    }

    fn hide(&mut self, region: Region) {
        self.set_marker(region, Marker::Visible, false);
    }

    /// Flip visibility, returning the new state
    fn toggle(&mut self, region: Region) -> bool {
        let shown = !self.is_visible(region);
        self.set_marker(region, Marker::Visible, shown);
        shown
    }

    fn is_visible(&self, region: Region) -> bool {
        self.has_marker(region, Marker::Visible)
    }
}

/// In-process page used by the iced view and by tests
#[derive(Debug, Clone, Default)]
pub struct MemoryPage {
    markers: HashSet<(Region, Marker)>,
    texts: HashMap<Region, String>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of regions carrying `marker`, restricted by `filter`
    pub fn count_marked(&self, marker: Marker, filter: impl Fn(Region) -> bool) -> usize {
        self.markers
            .iter()
            .filter(|(region, m)| *m == marker && filter(*region))
            .count()
    }
}

impl Page for MemoryPage {
    fn set_marker(&mut self, region: Region, marker: Marker, on: bool) {
        if on {
            self.markers.insert((region, marker));
        } else {
            self.markers.remove(&(region, marker));
        }
    }

    fn has_marker(&self, region: Region, marker: Marker) -> bool {
        self.markers.contains(&(region, marker))
    }

    fn set_text(&mut self, region: Region, text: String) {
        self.texts.insert(region, text);
    }

    fn text(&self, region: Region) -> &str {
        self.texts.get(&region).map(String::as_str).unwrap_or("")
    }
}
