//! The looping carousel state machine.
//!
//! [`CarouselController`] owns the logical state (active card, drag anchor,
//! autoplay epoch, pending settle) and drives a [`CarouselSurface`]. It never
//! sleeps or spawns: the view forwards events and arms timers based on
//! [`CarouselController::autoplay_epoch`] and the [`SettlePoll`] results.

use super::geometry::{
    centering_offset, nearest_to_center, period_width, CarouselSurface, ScrollCommand, ScrollMode,
};
use super::looping::{self, compensation};
use super::settle::{SettleDetector, SettleState};

/// Pointer travel is amplified by this factor while dragging.
pub const DRAG_GAIN: f64 = 2.0;

pub const AUTOPLAY_INTERVAL_MS: u64 = 6_000;

/// Pointer x and scroll offset captured at drag start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragAnchor {
    pub pointer_x: f64,
    pub scroll_left: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Detached,
    Attached,
    Unmounted,
}

/// What the view should do after a settle check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettlePoll {
    /// Nothing pending.
    Idle,
    /// Check again after [`super::settle::SETTLE_POLL_MS`].
    Again,
    /// The strip came to rest and the active card was recomputed.
    Settled,
}

#[derive(Debug, Clone)]
pub struct CarouselController {
    base_len: usize,
    active: usize,
    drag: Option<DragAnchor>,
    phase: Phase,
    epoch: u64,
    settle: SettleDetector,
}

impl Default for CarouselController {
    fn default() -> Self {
        Self::new()
    }
}

impl CarouselController {
    pub fn new() -> Self {
        Self {
            base_len: 0,
            active: 0,
            drag: None,
            phase: Phase::Detached,
            epoch: 0,
            settle: SettleDetector::default(),
        }
    }

    pub fn base_len(&self) -> usize {
        self.base_len
    }

    /// Index into the tripled list.
    pub fn active(&self) -> usize {
        self.active
    }

    /// Index into the base list (dots, "current slide").
    pub fn display_index(&self) -> usize {
        looping::display_index(self.active, self.base_len)
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn is_unmounted(&self) -> bool {
        self.phase == Phase::Unmounted
    }

    /// Epoch the next autoplay tick must carry, or `None` while autoplay is
    /// suspended (dragging, empty list, not mounted).
    pub fn autoplay_epoch(&self) -> Option<u64> {
        let armed = self.phase == Phase::Attached && self.drag.is_none() && self.base_len > 0;
        armed.then_some(self.epoch)
    }

    fn live(&self) -> bool {
        self.phase == Phase::Attached && self.base_len > 0
    }

    fn bump(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
    }

    fn set_active(&mut self, index: usize) {
        if self.active != index {
            self.active = index;
            self.bump();
        }
    }

    /// (Re)load a base list of `base_len` slides and center the first card of
    /// the middle copy without animation. Used on mount and language change.
    pub fn reset<S: CarouselSurface + ?Sized>(&mut self, base_len: usize, surface: &mut S) {
        if self.phase == Phase::Unmounted {
            return;
        }
        self.phase = Phase::Attached;
        self.base_len = base_len;
        self.drag = None;
        self.settle.reset();
        self.active = looping::middle_start(base_len);
        self.bump();
        if base_len > 0 {
            self.center(self.active, ScrollMode::Instant, surface);
        }
    }

    fn center<S: CarouselSurface + ?Sized>(&self, index: usize, mode: ScrollMode, surface: &mut S) {
        let Some(card) = surface.card(index) else {
            tracing::debug!("[carousel] card {index} not rendered yet");
            return;
        };
        let offset = centering_offset(card, surface.viewport().width);
        surface.scroll(ScrollCommand { offset, mode });
    }

    fn scroll_to_index<S: CarouselSurface + ?Sized>(&mut self, index: usize, surface: &mut S) {
        self.active = index;
        // Navigation always restarts the autoplay interval.
        self.bump();
        self.center(index, ScrollMode::Smooth, surface);
    }

    pub fn next<S: CarouselSurface + ?Sized>(&mut self, surface: &mut S) {
        if !self.live() {
            return;
        }
        let target = looping::next_index(self.active, self.base_len);
        self.scroll_to_index(target, surface);
    }

    pub fn prev<S: CarouselSurface + ?Sized>(&mut self, surface: &mut S) {
        if !self.live() {
            return;
        }
        let target = looping::prev_index(self.active, self.base_len);
        self.scroll_to_index(target, surface);
    }

    pub fn go_to_dot<S: CarouselSurface + ?Sized>(&mut self, dot: usize, surface: &mut S) {
        if !self.live() {
            return;
        }
        if let Some(target) = looping::dot_target(dot, self.base_len) {
            self.scroll_to_index(target, surface);
        }
    }

    /// Advance on an autoplay timer. Returns `false` when the tick is stale
    /// or autoplay is suspended.
    pub fn autoplay_tick<S: CarouselSurface + ?Sized>(&mut self, epoch: u64, surface: &mut S) -> bool {
        if self.autoplay_epoch() != Some(epoch) {
            tracing::trace!("[carousel] ignoring stale autoplay tick {epoch}");
            return false;
        }
        self.next(surface);
        true
    }

    /// Note a scroll event. Returns `true` when a settle check should be
    /// scheduled (none was pending).
    pub fn on_scroll(&mut self, now_ms: f64, scroll_left: f64) -> bool {
        if !self.live() {
            return false;
        }
        let idle = !self.settle.is_pending();
        self.settle.record(now_ms, scroll_left);
        idle
    }

    pub fn poll_settle<S: CarouselSurface + ?Sized>(&mut self, now_ms: f64, surface: &mut S) -> SettlePoll {
        if !self.live() {
            self.settle.reset();
            return SettlePoll::Idle;
        }
        match self.settle.poll(now_ms, surface.viewport().scroll_left) {
            SettleState::Idle => SettlePoll::Idle,
            SettleState::Moving => SettlePoll::Again,
            SettleState::Settled => {
                self.settle_now(surface);
                SettlePoll::Settled
            }
        }
    }

    /// Recompute the active card from the scroll position and, unless a drag
    /// is in progress, jump back into the middle copy.
    pub fn settle_now<S: CarouselSurface + ?Sized>(&mut self, surface: &mut S) {
        if !self.live() {
            return;
        }
        if let Some(nearest) = nearest_to_center(&*surface) {
            self.set_active(nearest);
        }
        if self.drag.is_some() {
            return;
        }
        let period = period_width(&*surface, self.base_len);
        if let Some(jump) = compensation(self.active, self.base_len, period) {
            let offset = surface.viewport().scroll_left + jump.offset_delta;
            tracing::trace!("[carousel] compensating {} -> {}", self.active, jump.index);
            surface.scroll(ScrollCommand {
                offset,
                mode: ScrollMode::Instant,
            });
            self.set_active(jump.index);
        }
    }

    pub fn drag_start<S: CarouselSurface + ?Sized>(&mut self, pointer_x: f64, surface: &S) {
        if !self.live() {
            return;
        }
        self.drag = Some(DragAnchor {
            pointer_x,
            scroll_left: surface.viewport().scroll_left,
        });
        self.bump();
    }

    pub fn drag_move<S: CarouselSurface + ?Sized>(&mut self, pointer_x: f64, surface: &mut S) {
        if self.phase != Phase::Attached {
            return;
        }
        let Some(anchor) = self.drag else {
            return;
        };
        let delta = (pointer_x - anchor.pointer_x) * DRAG_GAIN;
        surface.scroll(ScrollCommand {
            offset: anchor.scroll_left - delta,
            mode: ScrollMode::Instant,
        });
    }

    /// End a drag. Returns `true` when a settle check should be scheduled so
    /// deferred compensation runs even if no further scroll event arrives.
    pub fn drag_end<S: CarouselSurface + ?Sized>(&mut self, now_ms: f64, surface: &S) -> bool {
        if self.drag.take().is_none() {
            return false;
        }
        self.bump();
        self.on_scroll(now_ms, surface.viewport().scroll_left)
    }

    /// Stop for good; every later call is a no-op.
    pub fn unmount(&mut self) {
        self.phase = Phase::Unmounted;
        self.drag = None;
        self.settle.reset();
        self.bump();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::geometry::{UniformTrack, ViewportGeometry};

    const BASE: usize = 6;

    fn mounted(base: usize) -> (CarouselController, UniformTrack) {
        let mut track = UniformTrack::new(looping::extended_len(base), 320.0, 1000.0);
        let mut ctl = CarouselController::new();
        ctl.reset(base, &mut track);
        (ctl, track)
    }

    /// Scroll events stop, the quiet window elapses, the strip stays put.
    fn settle(ctl: &mut CarouselController, track: &mut UniformTrack, now: &mut f64) {
        ctl.on_scroll(*now, track.scroll_left);
        *now += 120.0;
        assert_eq!(ctl.poll_settle(*now, track), SettlePoll::Settled);
    }

    fn centered_index(track: &UniformTrack) -> Option<usize> {
        nearest_to_center(track)
    }

    #[test]
    fn mount_centers_first_card_of_middle_copy() {
        let (ctl, track) = mounted(BASE);
        assert_eq!(ctl.active(), BASE);
        assert_eq!(ctl.display_index(), 0);
        assert_eq!(centered_index(&track), Some(BASE));
    }

    #[test]
    fn seven_nexts_wrap_back_into_middle_copy() {
        let (mut ctl, mut track) = mounted(BASE);
        let mut now = 0.0;
        let mut shown = Vec::new();
        for _ in 0..7 {
            ctl.next(&mut track);
            settle(&mut ctl, &mut track, &mut now);
            assert!(looping::is_in_middle(ctl.active(), BASE), "active {}", ctl.active());
            shown.push(ctl.display_index());
        }
        assert_eq!(shown, vec![1, 2, 3, 4, 5, 0, 1]);
        assert_eq!(ctl.active(), BASE + 1);
        assert_eq!(ctl.display_index(), 1);
        assert_eq!(centered_index(&track), Some(BASE + 1));
    }

    #[test]
    fn prev_from_middle_start_compensates_forward() {
        let (mut ctl, mut track) = mounted(BASE);
        let mut now = 0.0;
        ctl.prev(&mut track);
        assert_eq!(ctl.active(), BASE - 1);
        settle(&mut ctl, &mut track, &mut now);
        assert_eq!(ctl.active(), 2 * BASE - 1);
        assert_eq!(ctl.display_index(), BASE - 1);
        assert_eq!(centered_index(&track), Some(2 * BASE - 1));
    }

    #[test]
    fn compensation_preserves_the_visible_card() {
        let (mut ctl, mut track) = mounted(BASE);
        let mut now = 0.0;
        ctl.go_to_dot(5, &mut track);
        settle(&mut ctl, &mut track, &mut now);
        ctl.next(&mut track);
        let before = track.scroll_left;
        settle(&mut ctl, &mut track, &mut now);
        let period = period_width(&track, BASE);
        assert_eq!(track.scroll_left, before - period);
        assert_eq!(ctl.display_index(), 0);
    }

    #[test]
    fn dots_always_target_middle_copy() {
        let (mut ctl, mut track) = mounted(BASE);
        for dot in (0..BASE).rev() {
            ctl.go_to_dot(dot, &mut track);
            assert_eq!(ctl.active(), BASE + dot);
            assert_eq!(centered_index(&track), Some(BASE + dot));
        }
        ctl.go_to_dot(BASE, &mut track);
        assert_eq!(ctl.active(), BASE);
    }

    #[test]
    fn settle_waits_for_position_stability() {
        let (mut ctl, mut track) = mounted(BASE);
        assert!(ctl.on_scroll(0.0, track.scroll_left));
        assert!(!ctl.on_scroll(30.0, track.scroll_left));
        assert_eq!(ctl.poll_settle(80.0, &mut track), SettlePoll::Again);
        // Smooth scroll still in flight.
        let moved = track.scroll_left + 40.0;
        track.set_scroll_left(moved);
        assert_eq!(ctl.poll_settle(140.0, &mut track), SettlePoll::Again);
        assert_eq!(ctl.poll_settle(240.0, &mut track), SettlePoll::Settled);
        assert_eq!(ctl.poll_settle(300.0, &mut track), SettlePoll::Idle);
    }

    #[test]
    fn drag_moves_with_double_gain() {
        let (mut ctl, mut track) = mounted(BASE);
        let start = track.scroll_left;
        ctl.drag_start(500.0, &track);
        ctl.drag_move(450.0, &mut track);
        assert_eq!(track.scroll_left, start + 100.0);
        ctl.drag_move(530.0, &mut track);
        assert_eq!(track.scroll_left, start - 60.0);
    }

    #[test]
    fn moves_without_drag_are_ignored() {
        let (mut ctl, mut track) = mounted(BASE);
        let start = track.scroll_left;
        ctl.drag_move(10.0, &mut track);
        assert_eq!(track.scroll_left, start);
        assert!(!ctl.drag_end(0.0, &track));
    }

    #[test]
    fn dragging_suspends_autoplay_and_defers_compensation() {
        let (mut ctl, mut track) = mounted(BASE);
        let mut now = 0.0;
        let epoch = ctl.autoplay_epoch().unwrap();

        ctl.drag_start(600.0, &track);
        assert_eq!(ctl.autoplay_epoch(), None);
        assert!(!ctl.autoplay_tick(epoch, &mut track));

        // Drag two cards to the right, into the first copy.
        ctl.drag_move(600.0 + 344.0, &mut track);
        settle(&mut ctl, &mut track, &mut now);
        assert_eq!(ctl.active(), BASE - 2);
        assert!(ctl.is_dragging());

        assert!(ctl.drag_end(now, &track));
        let resumed = ctl.autoplay_epoch().unwrap();
        assert_ne!(resumed, epoch);
        now += 120.0;
        assert_eq!(ctl.poll_settle(now, &mut track), SettlePoll::Settled);
        assert_eq!(ctl.active(), 2 * BASE - 2);
    }

    #[test]
    fn stale_autoplay_ticks_are_ignored() {
        let (mut ctl, mut track) = mounted(BASE);
        let stale = ctl.autoplay_epoch().unwrap();
        ctl.next(&mut track);
        let current = ctl.autoplay_epoch().unwrap();
        assert_ne!(stale, current);
        assert!(!ctl.autoplay_tick(stale, &mut track));
        assert_eq!(ctl.active(), BASE + 1);
        assert!(ctl.autoplay_tick(current, &mut track));
        assert_eq!(ctl.active(), BASE + 2);
    }

    #[test]
    fn language_reset_recenters_middle_start() {
        let (mut ctl, mut track) = mounted(BASE);
        ctl.go_to_dot(3, &mut track);
        ctl.drag_start(100.0, &track);
        ctl.reset(BASE, &mut track);
        assert_eq!(ctl.active(), BASE);
        assert!(!ctl.is_dragging());
        assert_eq!(centered_index(&track), Some(BASE));
    }

    #[test]
    fn unmount_stops_all_scrolling() {
        let (mut ctl, mut track) = mounted(BASE);
        let epoch = ctl.autoplay_epoch().unwrap();
        ctl.on_scroll(0.0, track.scroll_left);
        ctl.unmount();
        let frozen = track.clone();

        assert_eq!(ctl.autoplay_epoch(), None);
        assert!(!ctl.autoplay_tick(epoch, &mut track));
        ctl.next(&mut track);
        ctl.prev(&mut track);
        ctl.go_to_dot(2, &mut track);
        ctl.drag_start(0.0, &track);
        ctl.drag_move(300.0, &mut track);
        assert_eq!(ctl.poll_settle(1_000.0, &mut track), SettlePoll::Idle);
        ctl.reset(BASE, &mut track);
        assert_eq!(track, frozen);
        assert!(ctl.is_unmounted());
    }

    #[test]
    fn empty_list_is_inert() {
        let (mut ctl, mut track) = mounted(0);
        assert_eq!(ctl.autoplay_epoch(), None);
        ctl.next(&mut track);
        ctl.go_to_dot(0, &mut track);
        assert!(!ctl.on_scroll(0.0, 0.0));
        assert_eq!(ctl.active(), 0);
        assert_eq!(track.scroll_left, 0.0);
    }

    #[test]
    fn single_slide_recenters_itself() {
        let mut track = UniformTrack::new(3, 320.0, 1000.0);
        let mut ctl = CarouselController::new();
        ctl.reset(1, &mut track);
        assert_eq!(ctl.active(), 1);
        let mut now = 0.0;

        let epoch = ctl.autoplay_epoch().unwrap();
        assert!(ctl.autoplay_tick(epoch, &mut track));
        assert_eq!(ctl.active(), 1);
        assert_ne!(ctl.autoplay_epoch(), Some(epoch));

        ctl.prev(&mut track);
        ctl.next(&mut track);
        settle(&mut ctl, &mut track, &mut now);
        assert_eq!(ctl.active(), 1);
        assert_eq!(track.card_count(), 3);
    }
}
