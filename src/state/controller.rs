//! UI controller for the product page
//!
//! Owns the page counters (quantity, slide cursor, active thumbnail) and
//! pushes every change into a [`Page`]. Each method corresponds to one user
//! event and runs to completion before the next one is handled.

use thiserror::Error;

use super::data::{format_price, line_total};
use super::page::{Marker, Page, Region};

/// Failures of controller preconditions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControllerError {
    #[error("the carousel needs at least one slide")]
    NoSlides,
    #[error("thumbnail {index} does not exist (page has {count})")]
    ThumbnailOutOfRange { index: usize, count: usize },
}

/// Derived cart state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartState {
    Empty,
    Populated,
}

/// Drives the page regions from user events
#[derive(Debug)]
pub struct Controller<P: Page> {
    page: P,
    /// Units selected with the stepper (never negative)
    quantity: u32,
    /// Visible slide, always in `0..slide_count`
    slide_index: usize,
    slide_count: usize,
    /// Highlighted thumbnail; thumbnails map one-to-one onto slides
    active_thumbnail: usize,
    unit_price: f64,
    /// Set by a successful add-to-cart, cleared by delete
    cart_added: bool,
}

impl<P: Page> Controller<P> {
    /// Take over `page` and put it in its initial-load state:
    /// slide 0 shown, thumbnail 0 active, cart empty.
    pub fn new(page: P, slide_count: usize, unit_price: f64) -> Result<Self, ControllerError> {
        if slide_count == 0 {
            return Err(ControllerError::NoSlides);
        }

        let mut controller = Controller {
            page,
            quantity: 0,
            slide_index: 0,
            slide_count,
            active_thumbnail: 0,
            unit_price,
            cart_added: false,
        };

        controller.show_slide(0);
        controller.select_thumbnail(0)?;

        let zero = controller.quantity.to_string();
        controller.page.set_text(Region::QuantityLabel, zero.clone());
        controller.page.set_text(Region::CartQuantity, zero.clone());
        controller.page.set_text(Region::CartBadge, zero);
        controller.page.hide(Region::CartBadge);
        controller.hide_cart();

        log::debug!("controller ready with {} slides", slide_count);
        Ok(controller)
    }

    /// Rebuild on `page` for a new carousel and price, carrying over what
    /// the user already did: quantity, mirrors, open panels, cart contents
    /// and the current slide (clamped to the new carousel).
    pub fn reload(
        &self,
        page: P,
        slide_count: usize,
        unit_price: f64,
    ) -> Result<Self, ControllerError> {
        let mut next = Controller::new(page, slide_count, unit_price)?;

        for region in [
            Region::Sidebar,
            Region::Overlay,
            Region::CartMenu,
            Region::CartBadge,
            Region::EmptyMessage,
            Region::ProductContainer,
            Region::CheckoutButton,
        ] {
            let shown = self.page.is_visible(region);
            next.page.set_marker(region, Marker::Visible, shown);
        }
        for region in [
            Region::QuantityLabel,
            Region::CartQuantity,
            Region::CartBadge,
            Region::CartTotal,
        ] {
            next.page.set_text(region, self.page.text(region).to_string());
        }

        next.quantity = self.quantity;
        next.cart_added = self.cart_added;
        if self.cart_added {
            if let Ok(in_cart) = self.page.text(Region::CartBadge).parse::<u32>() {
                let total = line_total(unit_price, in_cart);
                next.page.set_text(Region::CartTotal, format_price(total));
            }
        }

        let last = slide_count - 1;
        next.show_slide(self.slide_index.min(last) as isize);
        next.select_thumbnail(self.active_thumbnail.min(last))?;

        log::debug!("controller reloaded with {} slides", slide_count);
        Ok(next)
    }

    // ========== Sidebar & cart dropdown ==========

    pub fn open_sidebar(&mut self) {
        self.page.show(Region::Sidebar);
        self.page.show(Region::Overlay);
    }

    pub fn close_sidebar(&mut self) {
        self.page.hide(Region::Sidebar);
        self.page.hide(Region::Overlay);
    }

    /// Flip the cart dropdown; independent of the sidebar
    pub fn toggle_cart_menu(&mut self) {
        let shown = self.page.toggle(Region::CartMenu);
        log::debug!("cart menu {}", if shown { "shown" } else { "hidden" });
    }

    // ========== Carousel ==========

    pub fn next_slide(&mut self) {
        self.show_slide(self.slide_index as isize + 1);
    }

    pub fn prev_slide(&mut self) {
        self.show_slide(self.slide_index as isize - 1);
    }

    /// Show exactly one slide.
    ///
    /// Past the end wraps to the first slide, before the start wraps to the
    /// last one.
    pub fn show_slide(&mut self, index: isize) {
        self.slide_index = if index < 0 {
            self.slide_count - 1
        } else if index as usize >= self.slide_count {
            0
        } else {
            index as usize
        };

        for i in 0..self.slide_count {
            self.page.hide(Region::Slide(i));
        }
        self.page.show(Region::Slide(self.slide_index));
    }

    // ========== Quantity stepper ==========

    pub fn increase(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
        let value = self.quantity.to_string();
        self.page.set_text(Region::QuantityLabel, value.clone());
        self.page.set_text(Region::CartQuantity, value);
    }

    /// Step down, stopping at zero.
    ///
    /// Only the stepper label is refreshed; the cart line keeps the last
    /// value written by `increase`.
    pub fn decrease(&mut self) {
        self.quantity = self.quantity.saturating_sub(1);
        self.page
            .set_text(Region::QuantityLabel, self.quantity.to_string());
    }

    // ========== Cart summary ==========

    /// Put the selected quantity in the cart and return the line total.
    ///
    /// With nothing selected the badge is hidden and the cart display is
    /// left as it was.
    pub fn add_to_cart(&mut self) -> Option<f64> {
        if self.quantity == 0 {
            self.page.hide(Region::CartBadge);
            return None;
        }

        let total = line_total(self.unit_price, self.quantity);
        self.page.set_text(Region::CartTotal, format_price(total));
        self.page
            .set_text(Region::CartBadge, self.quantity.to_string());
        self.page.show(Region::CartBadge);
        self.show_cart();
        self.cart_added = true;

        log::debug!("added {} units, total {}", self.quantity, format_price(total));
        Some(total)
    }

    /// Empty the cart display. The stepper quantity is kept.
    pub fn delete_cart(&mut self) {
        self.page.set_text(Region::CartBadge, "0".to_string());
        self.page.hide(Region::CartBadge);
        self.hide_cart();
        self.cart_added = false;
    }

    // ========== Thumbnails ==========

    /// Move the active highlight to thumbnail `index`
    pub fn select_thumbnail(&mut self, index: usize) -> Result<(), ControllerError> {
        if index >= self.slide_count {
            return Err(ControllerError::ThumbnailOutOfRange {
                index,
                count: self.slide_count,
            });
        }

        for i in 0..self.slide_count {
            self.page
                .set_marker(Region::Thumbnail(i), Marker::Active, false);
        }
        self.page
            .set_marker(Region::Thumbnail(index), Marker::Active, true);
        self.active_thumbnail = index;
        Ok(())
    }

    // ========== Accessors ==========

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn slide_index(&self) -> usize {
        self.slide_index
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn active_thumbnail(&self) -> usize {
        self.active_thumbnail
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    /// Populated once something was added and the quantity is still positive
    pub fn cart_state(&self) -> CartState {
        if self.cart_added && self.quantity > 0 {
            CartState::Populated
        } else {
            CartState::Empty
        }
    }

    fn show_cart(&mut self) {
        self.page.hide(Region::EmptyMessage);
        self.page.show(Region::ProductContainer);
        self.page.show(Region::CheckoutButton);
    }

    fn hide_cart(&mut self) {
        self.page.show(Region::EmptyMessage);
        self.page.hide(Region::ProductContainer);
        self.page.hide(Region::CheckoutButton);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::page::MemoryPage;

    fn controller(slides: usize) -> Controller<MemoryPage> {
        Controller::new(MemoryPage::new(), slides, 125.0).unwrap()
    }

    fn visible_slides(c: &Controller<MemoryPage>) -> Vec<usize> {
        (0..c.slide_count())
            .filter(|&i| c.page().is_visible(Region::Slide(i)))
            .collect()
    }

    fn active_thumbnails(c: &Controller<MemoryPage>) -> usize {
        c.page()
            .count_marked(Marker::Active, |r| matches!(r, Region::Thumbnail(_)))
    }

    fn assert_empty_display(page: &MemoryPage) {
        assert!(page.is_visible(Region::EmptyMessage));
        assert!(!page.is_visible(Region::ProductContainer));
        assert!(!page.is_visible(Region::CheckoutButton));
    }

    #[test]
    fn test_rejects_empty_carousel() {
        let result = Controller::new(MemoryPage::new(), 0, 125.0);
        assert_eq!(result.unwrap_err(), ControllerError::NoSlides);
    }

    #[test]
    fn test_initial_load() {
        let c = controller(4);
        assert_eq!(visible_slides(&c), vec![0]);
        assert!(c.page().has_marker(Region::Thumbnail(0), Marker::Active));
        assert_eq!(active_thumbnails(&c), 1);
        assert_empty_display(c.page());
        assert!(!c.page().is_visible(Region::CartBadge));
        assert_eq!(c.page().text(Region::QuantityLabel), "0");
        assert_eq!(c.cart_state(), CartState::Empty);
    }

    #[test]
    fn test_initial_load_overrides_stale_page() {
        let mut page = MemoryPage::new();
        page.show(Region::Slide(2));
        page.set_marker(Region::Thumbnail(3), Marker::Active, true);
        page.show(Region::ProductContainer);

        let c = Controller::new(page, 4, 125.0).unwrap();
        assert_eq!(visible_slides(&c), vec![0]);
        assert_eq!(active_thumbnails(&c), 1);
        assert_empty_display(c.page());
    }

    #[test]
    fn test_sidebar_open_close() {
        let mut c = controller(4);
        c.open_sidebar();
        c.open_sidebar();
        assert!(c.page().is_visible(Region::Sidebar));
        assert!(c.page().is_visible(Region::Overlay));

        c.close_sidebar();
        assert!(!c.page().is_visible(Region::Sidebar));
        assert!(!c.page().is_visible(Region::Overlay));
    }

    #[test]
    fn test_cart_menu_toggle_ignores_sidebar() {
        let mut c = controller(4);
        c.open_sidebar();
        c.toggle_cart_menu();
        assert!(c.page().is_visible(Region::CartMenu));
        c.close_sidebar();
        assert!(c.page().is_visible(Region::CartMenu));
        c.toggle_cart_menu();
        assert!(!c.page().is_visible(Region::CartMenu));
    }

    #[test]
    fn test_next_wraps_to_first() {
        let mut c = controller(4);
        for expected in [1, 2, 3, 0, 1] {
            c.next_slide();
            assert_eq!(c.slide_index(), expected);
            assert_eq!(visible_slides(&c), vec![expected]);
        }
    }

    #[test]
    fn test_prev_wraps_to_last() {
        let mut c = controller(4);
        c.prev_slide();
        assert_eq!(c.slide_index(), 3);
        assert_eq!(visible_slides(&c), vec![3]);
    }

    #[test]
    fn test_single_slide_carousel() {
        let mut c = controller(1);
        c.next_slide();
        assert_eq!(c.slide_index(), 0);
        c.prev_slide();
        assert_eq!(c.slide_index(), 0);
        assert_eq!(visible_slides(&c), vec![0]);
    }

    #[test]
    fn test_index_stays_in_range() {
        for n in 1..=6 {
            let mut c = controller(n);
            // Deterministic mixed walk of next/prev steps
            for step in 0..50usize {
                if (step * 7 + n) % 3 == 0 {
                    c.prev_slide();
                } else {
                    c.next_slide();
                }
                assert!(c.slide_index() < n);
                assert_eq!(visible_slides(&c).len(), 1);
            }
        }
    }

    #[test]
    fn test_next_prev_round_trip() {
        let mut c = controller(5);
        for start in 0..5 {
            c.show_slide(start as isize);
            c.next_slide();
            c.prev_slide();
            assert_eq!(c.slide_index(), start);
            c.prev_slide();
            c.next_slide();
            assert_eq!(c.slide_index(), start);
        }
    }

    #[test]
    fn test_show_slide_out_of_range() {
        let mut c = controller(4);
        c.show_slide(9);
        assert_eq!(c.slide_index(), 0);
        c.show_slide(-5);
        assert_eq!(c.slide_index(), 3);
        c.show_slide(2);
        assert_eq!(c.slide_index(), 2);
    }

    #[test]
    fn test_increase_updates_both_mirrors() {
        let mut c = controller(4);
        for _ in 0..5 {
            c.increase();
        }
        assert_eq!(c.quantity(), 5);
        assert_eq!(c.page().text(Region::QuantityLabel), "5");
        assert_eq!(c.page().text(Region::CartQuantity), "5");
    }

    #[test]
    fn test_decrease_stops_at_zero() {
        let mut c = controller(4);
        c.decrease();
        c.decrease();
        assert_eq!(c.quantity(), 0);
        assert_eq!(c.page().text(Region::QuantityLabel), "0");

        c.increase();
        c.decrease();
        c.decrease();
        assert_eq!(c.quantity(), 0);
    }

    #[test]
    fn test_decrease_leaves_cart_line_mirror() {
        let mut c = controller(4);
        c.increase();
        c.increase();
        c.increase();
        c.decrease();
        assert_eq!(c.page().text(Region::QuantityLabel), "2");
        assert_eq!(c.page().text(Region::CartQuantity), "3");
    }

    #[test]
    fn test_add_to_cart_with_nothing_selected() {
        let mut c = controller(4);
        assert_eq!(c.add_to_cart(), None);
        assert!(!c.page().is_visible(Region::CartBadge));
        assert_eq!(c.page().text(Region::CartTotal), "");
        assert_empty_display(c.page());
        assert_eq!(c.cart_state(), CartState::Empty);
    }

    #[test]
    fn test_add_three_to_cart() {
        let mut c = controller(4);
        c.increase();
        c.increase();
        c.increase();

        assert_eq!(c.add_to_cart(), Some(375.0));
        let page = c.page();
        assert_eq!(page.text(Region::CartTotal), "$375.00");
        assert_eq!(page.text(Region::CartBadge), "3");
        assert!(page.is_visible(Region::CartBadge));
        assert!(!page.is_visible(Region::EmptyMessage));
        assert!(page.is_visible(Region::ProductContainer));
        assert!(page.is_visible(Region::CheckoutButton));
        assert_eq!(c.cart_state(), CartState::Populated);
    }

    #[test]
    fn test_add_zero_keeps_populated_display() {
        let mut c = controller(4);
        c.increase();
        c.add_to_cart();
        c.decrease();

        assert_eq!(c.add_to_cart(), None);
        assert!(!c.page().is_visible(Region::CartBadge));
        assert!(c.page().is_visible(Region::ProductContainer));
        assert_eq!(c.cart_state(), CartState::Empty);
    }

    #[test]
    fn test_delete_cart_keeps_quantity() {
        let mut c = controller(4);
        c.increase();
        c.increase();
        c.add_to_cart();

        c.delete_cart();
        assert_eq!(c.page().text(Region::CartBadge), "0");
        assert!(!c.page().is_visible(Region::CartBadge));
        assert_empty_display(c.page());
        assert_eq!(c.cart_state(), CartState::Empty);
        assert_eq!(c.quantity(), 2);

        // Stale quantity goes straight back into the cart
        assert_eq!(c.add_to_cart(), Some(250.0));
        assert_eq!(c.page().text(Region::CartTotal), "$250.00");
    }

    #[test]
    fn test_select_thumbnail_single_active() {
        let mut c = controller(4);
        for index in [2, 2, 0, 3, 3] {
            c.select_thumbnail(index).unwrap();
            assert_eq!(c.active_thumbnail(), index);
            assert_eq!(active_thumbnails(&c), 1);
            assert!(c.page().has_marker(Region::Thumbnail(index), Marker::Active));
        }
    }

    #[test]
    fn test_increase_saturates() {
        let mut c = controller(4);
        c.quantity = u32::MAX - 1;
        c.increase();
        c.increase();
        assert_eq!(c.quantity(), u32::MAX);
        assert_eq!(c.page().text(Region::QuantityLabel), u32::MAX.to_string());
    }

    #[test]
    fn test_reload_keeps_user_state() {
        let mut c = controller(4);
        c.increase();
        c.increase();
        c.add_to_cart();
        c.toggle_cart_menu();
        c.show_slide(3);
        c.select_thumbnail(3).unwrap();

        let next = c.reload(MemoryPage::new(), 2, 80.0).unwrap();
        assert_eq!(next.quantity(), 2);
        assert_eq!(next.cart_state(), CartState::Populated);
        assert_eq!(next.unit_price(), 80.0);
        let page = next.page();
        assert!(page.is_visible(Region::CartBadge));
        assert!(page.is_visible(Region::CartMenu));
        assert!(page.is_visible(Region::ProductContainer));
        assert_eq!(page.text(Region::CartBadge), "2");
        assert_eq!(page.text(Region::CartTotal), "$160.00");

        assert_eq!(next.slide_index(), 1);
        assert_eq!(visible_slides(&next), vec![1]);
        assert_eq!(next.active_thumbnail(), 1);
        assert_eq!(active_thumbnails(&next), 1);
    }

    #[test]
    fn test_reload_untouched_page_is_initial_state() {
        let c = controller(4);
        let next = c.reload(MemoryPage::new(), 6, 125.0).unwrap();
        assert_eq!(visible_slides(&next), vec![0]);
        assert_empty_display(next.page());
        assert!(!next.page().is_visible(Region::CartBadge));
        assert_eq!(next.page().text(Region::QuantityLabel), "0");
        assert_eq!(next.cart_state(), CartState::Empty);
    }

    #[test]
    fn test_reload_rejects_empty_carousel() {
        let c = controller(4);
        let err = c.reload(MemoryPage::new(), 0, 125.0).unwrap_err();
        assert_eq!(err, ControllerError::NoSlides);
    }

    #[test]
    fn test_select_thumbnail_out_of_range() {
        let mut c = controller(4);
        c.select_thumbnail(1).unwrap();
        let err = c.select_thumbnail(4).unwrap_err();
        assert_eq!(err, ControllerError::ThumbnailOutOfRange { index: 4, count: 4 });
        assert_eq!(c.active_thumbnail(), 1);
        assert_eq!(active_thumbnails(&c), 1);
    }
}
