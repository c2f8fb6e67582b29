//! Index arithmetic for the tripled ("infinite") slide list.
//!
//! The rendered strip is the base list repeated [`COPIES`] times. Logical
//! indices address the tripled list; the middle copy `[base, 2*base)` is the
//! home range every settle returns to.

pub const COPIES: usize = 3;

pub fn extended_len(base: usize) -> usize {
    base * COPIES
}

/// Position within the base list, used for dots and the "current slide".
pub fn display_index(index: usize, base: usize) -> usize {
    if base == 0 {
        0
    } else {
        index % base
    }
}

/// First card of the middle copy.
pub fn middle_start(base: usize) -> usize {
    base
}

pub fn is_in_middle(index: usize, base: usize) -> bool {
    index >= base && index < 2 * base
}

/// Target for "next". A list with fewer than two slides re-targets the same card.
pub fn next_index(active: usize, base: usize) -> usize {
    if base <= 1 {
        return active;
    }
    (active + 1) % extended_len(base)
}

pub fn prev_index(active: usize, base: usize) -> usize {
    if base <= 1 {
        return active;
    }
    let len = extended_len(base);
    (active + len - 1) % len
}

/// Dots always point into the middle copy. `None` for an out-of-range dot.
pub fn dot_target(dot: usize, base: usize) -> Option<usize> {
    (dot < base).then(|| middle_start(base) + dot)
}

/// Silent jump that moves an out-of-range active card back into the middle copy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Compensation {
    /// Added to the current scroll offset.
    pub offset_delta: f64,
    /// Active index after the jump.
    pub index: usize,
}

/// `period` is the rendered width of one copy of the base list.
pub fn compensation(active: usize, base: usize, period: f64) -> Option<Compensation> {
    if base < 2 {
        return None;
    }
    if active < base {
        Some(Compensation {
            offset_delta: period,
            index: active + base,
        })
    } else if active >= 2 * base {
        Some(Compensation {
            offset_delta: -period,
            index: active - base,
        })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_and_prev_wrap_over_tripled_list() {
        assert_eq!(next_index(17, 6), 0);
        assert_eq!(prev_index(0, 6), 17);
        assert_eq!(next_index(6, 6), 7);
        assert_eq!(prev_index(6, 6), 5);
    }

    #[test]
    fn tiny_lists_retarget_same_card() {
        assert_eq!(next_index(1, 1), 1);
        assert_eq!(prev_index(1, 1), 1);
        assert_eq!(next_index(0, 0), 0);
    }

    #[test]
    fn dots_target_middle_copy() {
        for dot in 0..6 {
            let target = dot_target(dot, 6).unwrap();
            assert_eq!(target, 6 + dot);
            assert!(is_in_middle(target, 6));
        }
        assert_eq!(dot_target(6, 6), None);
        assert_eq!(dot_target(0, 0), None);
    }

    #[test]
    fn compensation_moves_edges_into_middle() {
        let period = 6.0 * 344.0;
        assert_eq!(
            compensation(5, 6, period),
            Some(Compensation {
                offset_delta: period,
                index: 11
            })
        );
        assert_eq!(
            compensation(12, 6, period),
            Some(Compensation {
                offset_delta: -period,
                index: 6
            })
        );
        assert_eq!(compensation(6, 6, period), None);
        assert_eq!(compensation(11, 6, period), None);
    }

    #[test]
    fn compensation_is_disabled_below_two_slides() {
        assert_eq!(compensation(0, 1, 344.0), None);
        assert_eq!(compensation(2, 1, 344.0), None);
        assert_eq!(compensation(0, 0, 0.0), None);
    }

    #[test]
    fn display_index_reduces_modulo_base() {
        assert_eq!(display_index(13, 6), 1);
        assert_eq!(display_index(6, 6), 0);
        assert_eq!(display_index(4, 0), 0);
    }
}
