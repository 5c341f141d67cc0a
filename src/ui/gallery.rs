//! Carousel and thumbnail strip

use iced::widget::image::Handle;
use iced::widget::{button, column, container, image, row, text, Row};
use iced::{Alignment, Element, Length};

use super::palette;
use crate::media::thumbnail::{Pixels, SlidePixels};
use crate::state::data::Product;
use crate::state::page::{Marker, MemoryPage, Page, Region};
use crate::Message;

const SLIDE_SIZE: f32 = 420.0;
const THUMBNAIL_SIZE: f32 = 88.0;

/// Decoded images for one slide (None = draw the placeholder)
#[derive(Debug, Clone, Default)]
pub struct GalleryImage {
    pub slide: Option<Handle>,
    pub thumbnail: Option<Handle>,
}

impl GalleryImage {
    pub fn from_pixels(pixels: Option<SlidePixels>) -> Self {
        match pixels {
            Some(SlidePixels { slide, thumbnail }) => Self {
                slide: Some(to_handle(slide)),
                thumbnail: Some(to_handle(thumbnail)),
            },
            None => Self::default(),
        }
    }
}

fn to_handle(pixels: Pixels) -> Handle {
    Handle::from_rgba(pixels.width, pixels.height, pixels.rgba)
}

fn picture<'a>(handle: Option<&Handle>, label: &'a str, size: f32) -> Element<'a, Message> {
    match handle {
        Some(handle) => image(handle.clone())
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into(),
        None => container(text(label).size(if size > 100.0 { 20 } else { 11 }))
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .center_x(Length::Fixed(size))
            .center_y(Length::Fixed(size))
            .style(palette::placeholder)
            .into(),
    }
}

pub fn view<'a>(
    page: &'a MemoryPage,
    product: &'a Product,
    images: &'a [GalleryImage],
) -> Element<'a, Message> {
    let shown = (0..product.slides.len())
        .find(|&i| page.is_visible(Region::Slide(i)))
        .unwrap_or(0);

    let slide = product.slides.get(shown).map(|slide| {
        picture(
            images.get(shown).and_then(|img| img.slide.as_ref()),
            &slide.label,
            SLIDE_SIZE,
        )
    });

    let carousel = row![
        button(text("‹").size(28))
            .on_press(Message::PrevSlide)
            .style(button::secondary),
    ]
    .push_maybe(slide)
    .push(
        button(text("›").size(28))
            .on_press(Message::NextSlide)
            .style(button::secondary),
    )
    .spacing(12)
    .align_y(Alignment::Center);

    let thumbnails = product
        .slides
        .iter()
        .enumerate()
        .fold(Row::new().spacing(16), |strip, (i, slide)| {
            let active = page.has_marker(Region::Thumbnail(i), Marker::Active);
            let thumb = picture(
                images.get(i).and_then(|img| img.thumbnail.as_ref()),
                &slide.label,
                THUMBNAIL_SIZE,
            );
            strip.push(
                button(
                    container(thumb)
                        .padding(2)
                        .style(palette::thumbnail_frame(active)),
                )
                .on_press(Message::SelectThumbnail(i))
                .style(button::text)
                .padding(0),
            )
        });

    column![carousel, thumbnails]
        .spacing(24)
        .align_x(Alignment::Center)
        .into()
}
