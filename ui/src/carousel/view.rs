use std::cell::{Cell, RefCell};
use std::rc::Rc;

use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedSender;
use futures_util::StreamExt;

use crate::config::use_site_config;
use crate::core::timing;
use crate::i18n::use_i18n;

use super::controller::{CarouselController, SettlePoll};
use super::geometry::CarouselSurface;
use super::looping;
use super::settle::{SETTLE_POLL_MS, SETTLE_QUIET_MS};
use super::slide::slides_for;

const CAROUSEL_CSS: Asset = asset!("/assets/styling/carousel.css");
const TRACK_ID: &str = "capabilities-track";

#[derive(Debug, Clone, PartialEq)]
enum CarouselEvent {
    Reset { base_len: usize },
    Scrolled,
    SettleCheck,
    AutoplayTick { epoch: u64 },
    Next,
    Prev,
    Dot(usize),
    DragStart { x: f64 },
    DragMove { x: f64 },
    DragEnd,
}

type SenderSlot = Rc<RefCell<Option<UnboundedSender<CarouselEvent>>>>;

/// Timer tasks owned by the carousel; cancelled on unmount.
#[derive(Default)]
struct Timers {
    autoplay: Option<(u64, Task)>,
    settle: Option<Task>,
}

impl Timers {
    fn cancel_all(&mut self) {
        if let Some((_, task)) = self.autoplay.take() {
            task.cancel();
        }
        if let Some(task) = self.settle.take() {
            task.cancel();
        }
    }
}

/// Mouse button state on the track. Touch input needs none: the browser only
/// delivers `touchmove` between `touchstart` and `touchend`.
#[derive(Debug, Default)]
struct MouseDrag {
    pressed: Cell<bool>,
}

impl MouseDrag {
    fn press(&self, x: f64) -> CarouselEvent {
        self.pressed.set(true);
        CarouselEvent::DragStart { x }
    }

    /// `None` while the button is up; the caller then leaves the event alone.
    fn move_to(&self, x: f64) -> Option<CarouselEvent> {
        self.pressed.get().then_some(CarouselEvent::DragMove { x })
    }

    fn release(&self) -> Option<CarouselEvent> {
        self.pressed.replace(false).then_some(CarouselEvent::DragEnd)
    }
}

/// Index to highlight right away after a language switch, before the
/// coroutine has handled the `Reset` event that goes with it.
fn language_reset(base_len: usize) -> (usize, CarouselEvent) {
    (looping::middle_start(base_len), CarouselEvent::Reset { base_len })
}

/// Run `f` against the rendered strip. Off the web there is nothing to drive.
fn with_surface(f: impl FnOnce(&mut dyn CarouselSurface)) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(mut track) = super::geometry::DomTrack::find(TRACK_ID) {
            f(&mut track);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = f;
}

fn queue_event(sender_slot: &SenderSlot, after_ms: u64, event: CarouselEvent) -> Option<Task> {
    let sender = sender_slot.borrow().as_ref().cloned()?;
    Some(spawn(async move {
        timing::sleep_ms(after_ms).await;
        let _ = sender.unbounded_send(event);
    }))
}

fn apply(ctl: &mut CarouselController, event: CarouselEvent, surface: &mut dyn CarouselSurface) -> bool {
    let now = timing::now_ms();
    let mut schedule_settle = false;
    match event {
        CarouselEvent::Reset { base_len } => ctl.reset(base_len, surface),
        CarouselEvent::Scrolled => {
            schedule_settle = ctl.on_scroll(now, surface.viewport().scroll_left);
        }
        CarouselEvent::SettleCheck => {
            schedule_settle = ctl.poll_settle(now, surface) == SettlePoll::Again;
        }
        CarouselEvent::AutoplayTick { epoch } => {
            ctl.autoplay_tick(epoch, surface);
        }
        CarouselEvent::Next => ctl.next(surface),
        CarouselEvent::Prev => ctl.prev(surface),
        CarouselEvent::Dot(dot) => ctl.go_to_dot(dot, surface),
        CarouselEvent::DragStart { x } => ctl.drag_start(x, &*surface),
        CarouselEvent::DragMove { x } => ctl.drag_move(x, surface),
        CarouselEvent::DragEnd => schedule_settle = ctl.drag_end(now, &*surface),
    }
    schedule_settle
}

#[component]
pub fn Capabilities() -> Element {
    let i18n = use_i18n();
    let config = use_site_config();
    let autoplay_ms = config.autoplay_interval_ms;

    let controller = use_hook(|| Rc::new(RefCell::new(CarouselController::new())));
    let timers = use_hook(|| Rc::new(RefCell::new(Timers::default())));
    let mut active = use_signal(|| 0usize);

    let sender_slot: SenderSlot = use_hook(|| Rc::new(RefCell::new(None)));
    let mouse = use_hook(|| Rc::new(MouseDrag::default()));

    let coroutine = {
        let controller = controller.clone();
        let timers = timers.clone();
        let sender_slot = sender_slot.clone();

        use_coroutine(move |mut rx: UnboundedReceiver<CarouselEvent>| {
            let controller = controller.clone();
            let timers = timers.clone();
            let sender_slot = sender_slot.clone();

            async move {
                while let Some(event) = rx.next().await {
                    let mut ctl = controller.borrow_mut();
                    if ctl.is_unmounted() {
                        break;
                    }
                    let first_check = event != CarouselEvent::SettleCheck;
                    let mut schedule_settle = false;
                    with_surface(|surface| schedule_settle = apply(&mut ctl, event, surface));

                    let mut timers = timers.borrow_mut();
                    if schedule_settle {
                        let delay = if first_check {
                            SETTLE_QUIET_MS as u64
                        } else {
                            SETTLE_POLL_MS
                        };
                        if let Some(stale) = timers.settle.take() {
                            stale.cancel();
                        }
                        timers.settle = queue_event(&sender_slot, delay, CarouselEvent::SettleCheck);
                    }

                    let wanted = ctl.autoplay_epoch();
                    let armed = timers.autoplay.as_ref().map(|(epoch, _)| *epoch);
                    if wanted != armed {
                        if let Some((_, task)) = timers.autoplay.take() {
                            task.cancel();
                        }
                        if let Some(epoch) = wanted {
                            timers.autoplay = queue_event(
                                &sender_slot,
                                autoplay_ms,
                                CarouselEvent::AutoplayTick { epoch },
                            )
                            .map(|task| (epoch, task));
                        }
                    }

                    if *active.peek() != ctl.active() {
                        active.set(ctl.active());
                    }
                }
            }
        })
    };

    sender_slot.borrow_mut().replace(coroutine.tx());

    let language = i18n.language();
    let slides = slides_for(language);
    let base_len = slides.len();
    let lang_code = language.code();
    let card_label = i18n.t("capabilities.cardLabel");

    // Mount and every language change re-center the middle copy.
    use_effect(move || {
        let lang = i18n.language_signal()();
        let (highlight, reset) = language_reset(slides_for(lang).len());
        if *active.peek() != highlight {
            active.set(highlight);
        }
        coroutine.send(reset);
    });

    {
        let controller = controller.clone();
        let timers = timers.clone();
        use_drop(move || {
            controller.borrow_mut().unmount();
            timers.borrow_mut().cancel_all();
            tracing::debug!("[carousel] unmounted");
        });
    }

    let active_index = active();
    let current_dot = looping::display_index(active_index, base_len);
    let cards = (0..looping::extended_len(base_len)).map(|index| {
        let slide = &slides[index % base_len];
        let is_active = index == active_index;
        (index, slide, is_active)
    });

    rsx! {
        document::Link { rel: "stylesheet", href: CAROUSEL_CSS }
        section { id: "capabilities", class: "capabilities reveal",
            onmounted: move |evt| crate::core::motion::observe_reveal(&evt.data()),
            div { class: "section-heading",
                p { class: "eyebrow", {i18n.t("capabilities.eyebrow")} }
                h2 { {i18n.t("capabilities.title")} }
                p { class: "section-lead", {i18n.t("capabilities.subtitle")} }
            }

            div { class: "carousel",
                button {
                    class: "carousel__arrow carousel__arrow--prev",
                    r#type: "button",
                    aria_label: i18n.t("capabilities.prev"),
                    onclick: move |_| coroutine.send(CarouselEvent::Prev),
                    "‹"
                }

                div {
                    id: TRACK_ID,
                    class: "carousel__track",
                    onscroll: move |_| coroutine.send(CarouselEvent::Scrolled),
                    ondragstart: move |evt| evt.prevent_default(),
                    onmousedown: {
                        let mouse = mouse.clone();
                        move |evt: MouseEvent| coroutine.send(mouse.press(evt.page_coordinates().x))
                    },
                    onmousemove: {
                        let mouse = mouse.clone();
                        move |evt: MouseEvent| {
                            if let Some(drag) = mouse.move_to(evt.page_coordinates().x) {
                                evt.prevent_default();
                                coroutine.send(drag);
                            }
                        }
                    },
                    onmouseup: {
                        let mouse = mouse.clone();
                        move |_| {
                            if let Some(end) = mouse.release() {
                                coroutine.send(end);
                            }
                        }
                    },
                    onmouseleave: {
                        let mouse = mouse.clone();
                        move |_| {
                            if let Some(end) = mouse.release() {
                                coroutine.send(end);
                            }
                        }
                    },
                    ontouchstart: move |evt| {
                        if let Some(touch) = evt.touches().first() {
                            coroutine.send(CarouselEvent::DragStart { x: touch.page_coordinates().x });
                        }
                    },
                    ontouchmove: move |evt| {
                        if let Some(touch) = evt.touches().first() {
                            coroutine.send(CarouselEvent::DragMove { x: touch.page_coordinates().x });
                        }
                    },
                    ontouchend: move |_| coroutine.send(CarouselEvent::DragEnd),

                    div { class: "carousel__strip",
                        for (index, slide, is_active) in cards {
                            article {
                                key: "{lang_code}-{index}",
                                class: if is_active { "carousel__card carousel__card--active" } else { "carousel__card" },
                                aria_current: if is_active { "true" } else { "false" },
                                p { class: "carousel__label", "{card_label}" }
                                h3 { class: "carousel__title", "{slide.title}" }
                                p { class: "carousel__intro", "{slide.intro}" }
                                ul { class: "carousel__bullets",
                                    for bullet in slide.bullets.iter() {
                                        li { "{bullet}" }
                                    }
                                }
                                a { class: "carousel__cta", href: "#contact", "{slide.cta}" }
                            }
                        }
                    }
                }

                button {
                    class: "carousel__arrow carousel__arrow--next",
                    r#type: "button",
                    aria_label: i18n.t("capabilities.next"),
                    onclick: move |_| coroutine.send(CarouselEvent::Next),
                    "›"
                }
            }

            div { class: "carousel__dots", role: "tablist",
                for dot in 0..base_len {
                    button {
                        key: "dot-{dot}",
                        class: if dot == current_dot { "carousel__dot carousel__dot--active" } else { "carousel__dot" },
                        r#type: "button",
                        aria_label: i18n.format("capabilities.goTo", &[("n", &(dot + 1).to_string())]),
                        aria_selected: if dot == current_dot { "true" } else { "false" },
                        onclick: move |_| coroutine.send(CarouselEvent::Dot(dot)),
                    }
                }
            }
            p { class: "carousel__hint", {i18n.t("capabilities.hint")} }
        }
    }
}
