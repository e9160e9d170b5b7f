#![forbid(unsafe_code)]

//! The motion engine: one deterministic scroll-offset function shared by
//! frame scrolling, title ticking, and every scroller mode.
//!
//! Sharing a single implementation is a correctness requirement, not an
//! optimization — all animated widgets must agree on phase for a given tick.

use celld_core::Tick;

/// Compute the scroll offset for an animated element at `tick`.
///
/// `space` is the travel range; the result is always within `[0, space]`.
///
/// `speed` controls the tick-to-step mapping: positive means `speed` ticks
/// per step, negative means `-speed` steps per tick, zero disables motion.
///
/// With `bounce` the element traverses the range alternately forward and
/// backward, pausing at each end: a margin of 20 tick-units is added to the
/// cycle and re-centered by subtracting half of it, so the element dwells at
/// both extremes. Without `bounce` the offset wraps from `space` back to 0.
pub fn scroll_offset(speed: i32, tick: Tick, bounce: bool, space: i32) -> i32 {
    if space <= 0 {
        return 0;
    }

    let timer = tick as i64;
    let space = i64::from(space);
    let speed = i64::from(speed);
    let (directions, extra) = if bounce { (2, 20) } else { (1, 0) };

    let mut offset = if speed > 0 {
        let increments = (space + extra) * speed;
        if (timer / increments) % directions == 0 {
            // wiggle one way
            (timer % increments) / speed
        } else {
            // wiggle the other
            -((timer % increments - increments + 1) / speed)
        }
    } else if speed < 0 {
        let increments = (space + extra) / -speed;
        if increments == 0 {
            // steps larger than the whole travel range
            return 0;
        }
        if (timer / increments) % directions == 0 {
            (timer % increments) * -speed
        } else {
            -((timer % increments) * -speed - (space + extra) + 1)
        }
    } else {
        0
    };

    // Center the end-of-travel pause margin.
    offset -= extra / 2;
    offset.clamp(0, space) as i32
}
