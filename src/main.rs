use iced::keyboard::{self, key::Named, Key};
use iced::widget::{column, container, mouse_area, opaque, row, stack, text};
use iced::{alignment, Alignment, Element, Length, Subscription, Task, Theme};

mod catalog;
mod media;
mod state;
mod ui;

use catalog::CatalogError;
use state::controller::{Controller, ControllerError};
use state::data::{format_price, Product};
use state::page::{MemoryPage, Page, Region};
use ui::gallery::GalleryImage;

/// Main application state
struct Storefront {
    /// Page regions and the counters behind them
    controller: Controller<MemoryPage>,
    /// The product on sale
    product: Product,
    /// Decoded slide images, index-aligned with `product.slides`
    images: Vec<GalleryImage>,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    OpenSidebar,
    CloseSidebar,
    ToggleCart,
    NextSlide,
    PrevSlide,
    /// User clicked a thumbnail
    SelectThumbnail(usize),
    Increase,
    Decrease,
    AddToCart,
    DeleteCart,
    Checkout,
    /// Background catalog load finished
    CatalogLoaded(Result<Product, CatalogError>),
    /// Background image decoding finished
    ImagesLoaded(Vec<GalleryImage>),
}

impl Storefront {
    /// Build the page for `product` in its initial-load state
    fn with_product(product: Product) -> Result<Self, ControllerError> {
        let controller = Controller::new(
            MemoryPage::new(),
            product.slides.len(),
            product.unit_price,
        )?;

        Ok(Storefront {
            controller,
            images: vec![GalleryImage::default(); product.slides.len()],
            status: format!("Ready. {} in stock.", product.name),
            product,
        })
    }

    /// Kick off the catalog load
    fn load() -> Task<Message> {
        Task::perform(
            catalog::load_product(catalog::catalog_path()),
            Message::CatalogLoaded,
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OpenSidebar => self.controller.open_sidebar(),
            Message::CloseSidebar => self.controller.close_sidebar(),
            Message::ToggleCart => self.controller.toggle_cart_menu(),
            Message::NextSlide => self.controller.next_slide(),
            Message::PrevSlide => self.controller.prev_slide(),
            Message::SelectThumbnail(index) => match self.controller.select_thumbnail(index) {
                Ok(()) => self.controller.show_slide(index as isize),
                Err(e) => log::warn!("⚠️  {}", e),
            },
            Message::Increase => self.controller.increase(),
            Message::Decrease => self.controller.decrease(),
            Message::AddToCart => match self.controller.add_to_cart() {
                Some(total) => {
                    self.status = format!(
                        "Added {} to cart ({}).",
                        self.controller.quantity(),
                        format_price(total)
                    );
                }
                None => self.status = "Pick a quantity first.".to_string(),
            },
            Message::DeleteCart => {
                self.controller.delete_cart();
                self.status = "Cart emptied.".to_string();
            }
            Message::Checkout => {
                let page = self.controller.page();
                log::info!(
                    "🧾 Checkout requested: {} items, {}",
                    page.text(Region::CartBadge),
                    page.text(Region::CartTotal)
                );
                self.status = format!(
                    "Checkout is not available here. Order total: {}",
                    page.text(Region::CartTotal)
                );
            }
            Message::CatalogLoaded(Ok(product)) => {
                if product == self.product && product.slides.iter().all(|s| s.path.is_none()) {
                    return Task::none();
                }

                // Anything the user did while the catalog loaded is kept
                let reloaded = self.controller.reload(
                    MemoryPage::new(),
                    product.slides.len(),
                    product.unit_price,
                );

                match reloaded {
                    Ok(controller) => {
                        log::info!("👟 Showing {} from catalog", product.name);
                        self.controller = controller;
                        self.images = vec![GalleryImage::default(); product.slides.len()];
                        self.status = format!("Ready. {} in stock.", product.name);
                        self.product = product;

                        let paths = self
                            .product
                            .slides
                            .iter()
                            .map(|slide| slide.path.clone())
                            .collect();

                        return Task::perform(media::thumbnail::load_slides(paths), |slides| {
                            Message::ImagesLoaded(
                                slides.into_iter().map(GalleryImage::from_pixels).collect(),
                            )
                        });
                    }
                    Err(e) => {
                        log::error!("❌ Catalog rejected: {}", e);
                        self.status = format!("Catalog rejected: {}", e);
                    }
                }
            }
            Message::CatalogLoaded(Err(e)) => {
                log::error!("❌ {}", e);
                self.status = format!("Using built-in product. {}", e);
            }
            Message::ImagesLoaded(mut images) => {
                let loaded = images.iter().filter(|img| img.slide.is_some()).count();
                images.resize(self.product.slides.len(), GalleryImage::default());
                self.images = images;

                log::info!("🖼️  {} of {} slides decoded", loaded, self.product.slides.len());
            }
        }

        log::trace!(
            "quantity={} slide={}/{} thumbnail={} cart={:?} price={}",
            self.controller.quantity(),
            self.controller.slide_index(),
            self.controller.slide_count(),
            self.controller.active_thumbnail(),
            self.controller.cart_state(),
            self.controller.unit_price()
        );
        Task::none()
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let page = self.controller.page();

        let body = row![
            ui::gallery::view(page, &self.product, &self.images),
            ui::details::view(page, &self.product),
        ]
        .spacing(80)
        .padding(40)
        .align_y(Alignment::Center);

        let content = column![
            ui::header::view(page),
            container(body)
                .width(Length::Fill)
                .height(Length::Fill)
                .center_x(Length::Fill)
                .center_y(Length::Fill),
            text(&self.status).size(14),
        ]
        .padding([0, 16]);

        let mut layers = stack![container(content)
            .width(Length::Fill)
            .height(Length::Fill)];

        if page.is_visible(Region::CartMenu) {
            layers = layers.push(
                container(ui::cart::view(page, &self.product))
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Right)
                    .padding([72, 24]),
            );
        }

        if page.is_visible(Region::Overlay) {
            layers = layers.push(opaque(
                mouse_area(
                    container(text(""))
                        .width(Length::Fill)
                        .height(Length::Fill)
                        .style(ui::palette::overlay),
                )
                .on_press(Message::CloseSidebar),
            ));
        }

        if page.is_visible(Region::Sidebar) {
            layers = layers.push(ui::header::sidebar());
        }

        layers.into()
    }

    /// Arrow keys drive the carousel, Escape closes the sidebar
    fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(|key, _modifiers| match key {
            Key::Named(Named::ArrowLeft) => Some(Message::PrevSlide),
            Key::Named(Named::ArrowRight) => Some(Message::NextSlide),
            Key::Named(Named::Escape) => Some(Message::CloseSidebar),
            _ => None,
        })
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let storefront = match Storefront::with_product(Product::default()) {
        Ok(storefront) => storefront,
        Err(e) => {
            log::error!("❌ Cannot build product page: {}", e);
            return Ok(());
        }
    };
    log::info!("👟 Product page initialized for {}", storefront.product.name);

    iced::application("Product Page", Storefront::update, Storefront::view)
        .subscription(Storefront::subscription)
        .theme(Storefront::theme)
        .centered()
        .run_with(move || (storefront, Storefront::load()))
}
