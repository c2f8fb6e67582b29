//! Looping capabilities carousel.

pub mod controller;
pub mod geometry;
pub mod looping;
pub mod settle;
pub mod slide;
mod view;

pub use controller::{CarouselController, SettlePoll, AUTOPLAY_INTERVAL_MS};
pub use slide::{slides_for, Slide};
pub use view::Capabilities;
