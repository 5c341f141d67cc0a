//! View builders for the product page
//!
//! Every builder reads the page regions from a [`MemoryPage`](crate::state::page::MemoryPage)
//! and never mutates anything; clicks come back as [`Message`](crate::Message)s.

pub mod cart;
pub mod details;
pub mod gallery;
pub mod header;
pub mod palette;
