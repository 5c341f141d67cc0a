//! Top bar (menu button, brand, cart icon with badge) and the sidebar

use iced::widget::{button, column, container, horizontal_space, row, stack, text};
use iced::{alignment, Alignment, Element, Length};

use super::palette;
use crate::state::page::{MemoryPage, Page, Region};
use crate::Message;

const NAV_LINKS: [&str; 5] = ["Collections", "Men", "Women", "About", "Contact"];

pub fn view(page: &MemoryPage) -> Element<'_, Message> {
    let cart_icon = button(text("🛒").size(24))
        .on_press(Message::ToggleCart)
        .style(button::text)
        .padding(8);

    let cart: Element<'_, Message> = if page.is_visible(Region::CartBadge) {
        let badge = container(text(page.text(Region::CartBadge)).size(11))
            .padding([1, 7])
            .style(palette::badge);
        stack![
            cart_icon,
            container(badge)
                .width(Length::Fixed(48.0))
                .align_x(alignment::Horizontal::Right)
        ]
        .into()
    } else {
        cart_icon.into()
    };

    row![
        button(text("☰").size(24))
            .on_press(Message::OpenSidebar)
            .style(button::text)
            .padding(8),
        text("sneakers").size(30).color(palette::DARK_GRAY),
        horizontal_space(),
        cart,
        text("👤").size(26),
    ]
    .spacing(16)
    .padding([16, 24])
    .align_y(Alignment::Center)
    .into()
}

/// Navigation panel drawn above the overlay
pub fn sidebar() -> Element<'static, Message> {
    let links = NAV_LINKS.iter().fold(column![].spacing(20), |col, link| {
        col.push(text(*link).size(18).color(palette::DARK_GRAY))
    });

    container(
        column![
            button(text("✕").size(22))
                .on_press(Message::CloseSidebar)
                .style(button::text),
            links,
        ]
        .spacing(40),
    )
    .padding(24)
    .width(Length::Fixed(250.0))
    .height(Length::Fill)
    .style(palette::card)
    .into()
}
