//! Product description, price, quantity stepper and add-to-cart

use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length};

use super::palette;
use crate::state::data::{format_price, Product};
use crate::state::page::{MemoryPage, Page, Region};
use crate::Message;

pub fn view<'a>(page: &'a MemoryPage, product: &'a Product) -> Element<'a, Message> {
    let stepper = container(
        row![
            button(text("−").size(20))
                .on_press(Message::Decrease)
                .style(button::text),
            container(text(page.text(Region::QuantityLabel)).size(18))
                .width(Length::Fixed(48.0))
                .center_x(Length::Fixed(48.0)),
            button(text("+").size(20))
                .on_press(Message::Increase)
                .style(button::text),
        ]
        .align_y(Alignment::Center),
    )
    .padding([4, 8])
    .style(palette::placeholder);

    column![
        text(&product.company).size(13).color(palette::ORANGE),
        text(&product.name).size(40).color(palette::DARK_GRAY),
        text(&product.description).size(16).color(palette::GRAYISH_BLUE),
        text(format_price(product.unit_price))
            .size(28)
            .color(palette::DARK_GRAY),
        row![
            stepper,
            button(text("🛒  Add to cart").size(16))
                .on_press(Message::AddToCart)
                .style(button::primary)
                .padding([14, 40]),
        ]
        .spacing(16)
        .align_y(Alignment::Center),
    ]
    .spacing(20)
    .max_width(460)
    .into()
}
