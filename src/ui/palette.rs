//! Colors and shared container styles
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

pub const ORANGE: Color = Color::from_rgb(1.0, 0.49, 0.10);
pub const PALE_ORANGE: Color = Color::from_rgb(1.0, 0.93, 0.88);
pub const DARK_GRAY: Color = Color::from_rgb(0.11, 0.13, 0.16);
pub const GRAYISH_BLUE: Color = Color::from_rgb(0.41, 0.44, 0.48);
pub const LIGHT_GRAY: Color = Color::from_rgb(0.96, 0.97, 0.98);

/// White card with rounded corners (cart dropdown, sidebar)
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::WHITE)),
        border: Border {
            radius: 10.0.into(),
            width: 1.0,
            color: LIGHT_GRAY,
        },
        ..container::Style::default()
    }
}

/// Page dimming layer behind the sidebar
pub fn overlay(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.75))),
        ..container::Style::default()
    }
}

/// Stand-in for a slide or thumbnail without an image
pub fn placeholder(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(PALE_ORANGE)),
        text_color: Some(GRAYISH_BLUE),
        border: Border {
            radius: 12.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Item count bubble on the cart icon
pub fn badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(ORANGE)),
        text_color: Some(Color::WHITE),
        border: Border {
            radius: 8.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Frame around a thumbnail; highlighted when active
pub fn thumbnail_frame(active: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        border: Border {
            radius: 10.0.into(),
            width: if active { 2.0 } else { 0.0 },
            color: ORANGE,
        },
        ..container::Style::default()
    }
}
