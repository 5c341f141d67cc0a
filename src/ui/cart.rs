//! Cart summary dropdown

use iced::widget::{button, column, container, horizontal_rule, row, text, Column};
use iced::{Alignment, Element, Length};

use super::palette;
use crate::state::data::{format_price, Product};
use crate::state::page::{MemoryPage, Page, Region};
use crate::Message;

pub fn view<'a>(page: &'a MemoryPage, product: &'a Product) -> Element<'a, Message> {
    let empty = page
        .is_visible(Region::EmptyMessage)
        .then(|| {
            container(text("Your cart is empty.").color(palette::GRAYISH_BLUE))
                .width(Length::Fill)
                .center_x(Length::Fill)
                .padding(40)
        });

    let line = page.is_visible(Region::ProductContainer).then(|| {
        row![
            column![
                text(&product.name).color(palette::GRAYISH_BLUE),
                row![
                    text(format!(
                        "{} x {}",
                        format_price(product.unit_price),
                        page.text(Region::CartQuantity)
                    ))
                    .color(palette::GRAYISH_BLUE),
                    text(page.text(Region::CartTotal)).color(palette::DARK_GRAY),
                ]
                .spacing(12),
            ]
            .spacing(4)
            .width(Length::Fill),
            button(text("🗑"))
                .on_press(Message::DeleteCart)
                .style(button::text),
        ]
        .spacing(12)
        .align_y(Alignment::Center)
    });

    let checkout = page.is_visible(Region::CheckoutButton).then(|| {
        button(
            container(text("Checkout"))
                .width(Length::Fill)
                .center_x(Length::Fill),
        )
        .on_press(Message::Checkout)
        .style(button::primary)
        .padding(14)
        .width(Length::Fill)
    });

    let body: Column<'a, Message> = column![]
        .push_maybe(empty)
        .push_maybe(line)
        .push_maybe(checkout)
        .spacing(20)
        .padding(20);

    container(
        column![
            text("Cart").size(16).color(palette::DARK_GRAY),
            horizontal_rule(1),
            body,
        ]
        .spacing(12),
    )
    .padding([16, 0])
    .width(Length::Fixed(360.0))
    .style(palette::card)
    .into()
}
