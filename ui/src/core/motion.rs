//! Decorative motion: scroll-linked parallax and reveal-on-scroll.

/// Fraction of an element that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.15;

/// CSS class added once a `.reveal` element has entered the viewport.
pub const REVEAL_VISIBLE_CLASS: &str = "reveal-visible";

/// Vertical translation (px) for a parallax layer moving at `speed` times the
/// page scroll, clamped to `±max_px`. Negative scroll (overscroll bounce) is
/// treated as zero.
pub fn parallax_offset(scroll_y: f64, speed: f64, max_px: f64) -> f64 {
    if !scroll_y.is_finite() || !speed.is_finite() {
        return 0.0;
    }
    let limit = max_px.abs();
    (scroll_y.max(0.0) * speed).clamp(-limit, limit)
}

/// Opacity for a layer that fades out over the first `fade_px` of scroll.
pub fn fade_out(scroll_y: f64, fade_px: f64) -> f64 {
    if fade_px <= 0.0 {
        return 1.0;
    }
    (1.0 - scroll_y.max(0.0) / fade_px).clamp(0.0, 1.0)
}

#[cfg(target_arch = "wasm32")]
mod observer {
    use std::cell::OnceCell;

    use js_sys::Array;
    use wasm_bindgen::{closure::Closure, JsCast, JsValue};
    use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use super::{REVEAL_THRESHOLD, REVEAL_VISIBLE_CLASS};

    type Callback = Closure<dyn FnMut(Array, IntersectionObserver)>;

    thread_local! {
        // One observer for the whole page; targets unobserve themselves once shown.
        static SHARED: OnceCell<Option<(IntersectionObserver, Callback)>> = const { OnceCell::new() };
    }

    fn build() -> Option<(IntersectionObserver, Callback)> {
        let callback: Callback = Closure::new(|entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    let _ = target.class_list().add_1(REVEAL_VISIBLE_CLASS);
                    observer.unobserve(&target);
                }
            }
        });
        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;
        Some((observer, callback))
    }

    pub fn observe(element: &web_sys::Element) {
        SHARED.with(|cell| match cell.get_or_init(build) {
            Some((observer, _)) => observer.observe(element),
            // No IntersectionObserver support: show immediately.
            None => {
                let _ = element.class_list().add_1(REVEAL_VISIBLE_CLASS);
            }
        });
    }
}

/// Start watching a mounted element; it gains [`REVEAL_VISIBLE_CLASS`] the
/// first time it scrolls into view.
pub fn observe_reveal(mounted: &dioxus::prelude::MountedData) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(element) = mounted.downcast::<web_sys::Element>() {
            observer::observe(element);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = mounted;
}
