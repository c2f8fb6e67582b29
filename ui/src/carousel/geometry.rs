//! Viewport geometry for the carousel strip.
//!
//! The controller never touches the DOM: it asks a [`ViewportGeometry`] for
//! the visible box and card boxes, and hands back [`ScrollCommand`]s for a
//! [`CarouselSurface`] to apply. [`UniformTrack`] is the in-memory surface
//! used off the web and in tests; `DomTrack` measures the real strip.

/// Fixed gap between cards, in CSS pixels (`.carousel__strip { gap }`).
pub const CARD_GAP_PX: f64 = 24.0;

/// A card's horizontal extent in strip coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardBox {
    pub left: f64,
    pub width: f64,
}

impl CardBox {
    pub fn center(&self) -> f64 {
        self.left + self.width / 2.0
    }
}

/// The visible window onto the strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scroll_left: f64,
    pub width: f64,
}

impl Viewport {
    pub fn center(&self) -> f64 {
        self.scroll_left + self.width / 2.0
    }
}

pub trait ViewportGeometry {
    fn viewport(&self) -> Viewport;
    fn card_count(&self) -> usize;
    fn card(&self, index: usize) -> Option<CardBox>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollMode {
    Smooth,
    Instant,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollCommand {
    pub offset: f64,
    pub mode: ScrollMode,
}

/// Something that can be measured and scrolled.
pub trait CarouselSurface: ViewportGeometry {
    fn scroll(&mut self, command: ScrollCommand);
}

/// Scroll offset that centers `card` in a viewport of `viewport_width`.
pub fn centering_offset(card: CardBox, viewport_width: f64) -> f64 {
    card.left - (viewport_width - card.width) / 2.0
}

/// Index of the card whose center is closest to the viewport center; ties go
/// to the lowest index.
pub fn nearest_to_center<G: ViewportGeometry + ?Sized>(geometry: &G) -> Option<usize> {
    let center = geometry.viewport().center();
    let mut best: Option<(usize, f64)> = None;
    for index in 0..geometry.card_count() {
        let Some(card) = geometry.card(index) else {
            continue;
        };
        let distance = (card.center() - center).abs();
        if best.map_or(true, |(_, closest)| distance < closest) {
            best = Some((index, distance));
        }
    }
    best.map(|(index, _)| index)
}

/// Rendered width of one copy of the base list.
pub fn period_width<G: ViewportGeometry + ?Sized>(geometry: &G, base_len: usize) -> f64 {
    geometry
        .card(0)
        .map_or(0.0, |card| base_len as f64 * (card.width + CARD_GAP_PX))
}

/// Evenly spaced cards behind side padding; scrolls apply immediately and
/// are clamped like a browser's `scrollLeft`.
#[derive(Debug, Clone, PartialEq)]
pub struct UniformTrack {
    pub card_width: f64,
    pub gap: f64,
    pub padding: f64,
    pub viewport_width: f64,
    pub card_count: usize,
    pub scroll_left: f64,
}

impl UniformTrack {
    pub fn new(card_count: usize, card_width: f64, viewport_width: f64) -> Self {
        Self {
            card_width,
            gap: CARD_GAP_PX,
            padding: 32.0,
            viewport_width,
            card_count,
            scroll_left: 0.0,
        }
    }

    pub fn content_width(&self) -> f64 {
        if self.card_count == 0 {
            return 2.0 * self.padding;
        }
        let n = self.card_count as f64;
        2.0 * self.padding + n * self.card_width + (n - 1.0) * self.gap
    }

    pub fn max_scroll(&self) -> f64 {
        (self.content_width() - self.viewport_width).max(0.0)
    }

    pub fn set_scroll_left(&mut self, offset: f64) {
        self.scroll_left = offset.clamp(0.0, self.max_scroll());
    }
}

impl ViewportGeometry for UniformTrack {
    fn viewport(&self) -> Viewport {
        Viewport {
            scroll_left: self.scroll_left,
            width: self.viewport_width,
        }
    }

    fn card_count(&self) -> usize {
        self.card_count
    }

    fn card(&self, index: usize) -> Option<CardBox> {
        (index < self.card_count).then(|| CardBox {
            left: self.padding + index as f64 * (self.card_width + self.gap),
            width: self.card_width,
        })
    }
}

impl CarouselSurface for UniformTrack {
    fn scroll(&mut self, command: ScrollCommand) {
        self.set_scroll_left(command.offset);
    }
}

/// The rendered strip: a scroll container whose first child holds the cards.
#[cfg(target_arch = "wasm32")]
pub struct DomTrack {
    track: web_sys::HtmlElement,
}

#[cfg(target_arch = "wasm32")]
impl DomTrack {
    pub fn find(id: &str) -> Option<Self> {
        use wasm_bindgen::JsCast;

        let track = web_sys::window()?
            .document()?
            .get_element_by_id(id)?
            .dyn_into::<web_sys::HtmlElement>()
            .ok()?;
        Some(Self { track })
    }

    fn card_element(&self, index: usize) -> Option<web_sys::HtmlElement> {
        use wasm_bindgen::JsCast;

        self.track
            .first_element_child()?
            .children()
            .item(u32::try_from(index).ok()?)?
            .dyn_into::<web_sys::HtmlElement>()
            .ok()
    }
}

#[cfg(target_arch = "wasm32")]
impl ViewportGeometry for DomTrack {
    fn viewport(&self) -> Viewport {
        Viewport {
            scroll_left: self.track.scroll_left() as f64,
            width: self.track.client_width() as f64,
        }
    }

    fn card_count(&self) -> usize {
        self.track
            .first_element_child()
            .map_or(0, |strip| strip.child_element_count() as usize)
    }

    fn card(&self, index: usize) -> Option<CardBox> {
        let card = self.card_element(index)?;
        Some(CardBox {
            left: card.offset_left() as f64,
            width: card.offset_width() as f64,
        })
    }
}

#[cfg(target_arch = "wasm32")]
impl CarouselSurface for DomTrack {
    fn scroll(&mut self, command: ScrollCommand) {
        let options = web_sys::ScrollToOptions::new();
        options.set_left(command.offset);
        options.set_behavior(match command.mode {
            ScrollMode::Smooth => web_sys::ScrollBehavior::Smooth,
            ScrollMode::Instant => web_sys::ScrollBehavior::Instant,
        });
        self.track.scroll_to_with_scroll_to_options(&options);
    }
}
