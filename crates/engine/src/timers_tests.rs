// SPDX-License-Identifier: MIT

use super::*;
use offpeak_core::{Clock, FakeClock};

#[test]
fn timers_fire_at_the_right_time() {
    let clock = FakeClock::new();
    let mut timers = TimerQueue::new();

    let now = clock.now();
    timers.set("late", Duration::from_secs(10), now);
    timers.set("early", Duration::from_secs(5), now);

    assert!(timers.poll(clock.now()).is_empty());

    clock.advance(Duration::from_secs(5));
    assert_eq!(timers.poll(clock.now()), vec!["early".to_string()]);

    clock.advance(Duration::from_secs(5));
    assert_eq!(timers.poll(clock.now()), vec!["late".to_string()]);
    assert!(timers.is_empty());
}

#[test]
fn due_timers_fire_in_order() {
    let clock = FakeClock::new();
    let mut timers = TimerQueue::new();

    let now = clock.now();
    timers.set("c", Duration::from_secs(30), now);
    timers.set("a", Duration::from_secs(10), now);
    timers.set("b", Duration::from_secs(20), now);

    clock.advance(Duration::from_secs(35));
    assert_eq!(
        timers.poll(clock.now()),
        vec!["a".to_string(), "b".to_string(), "c".to_string()]
    );
}

#[test]
fn cancel_prevents_firing_and_reports_pending() {
    let clock = FakeClock::new();
    let mut timers = TimerQueue::new();
    timers.set("tick", Duration::from_secs(10), clock.now());

    assert!(timers.cancel("tick"));

    clock.advance(Duration::from_secs(15));
    assert!(timers.poll(clock.now()).is_empty());
}

#[test]
fn cancelling_an_absent_timer_is_a_tolerated_noop() {
    let mut timers = TimerQueue::new();
    assert!(!timers.cancel("ghost"));
    assert!(timers.is_empty());
}

#[test]
fn setting_an_existing_id_replaces_the_timer() {
    let clock = FakeClock::new();
    let mut timers = TimerQueue::new();

    timers.set("tick", Duration::from_secs(10), clock.now());
    timers.set("tick", Duration::from_secs(60), clock.now());

    clock.advance(Duration::from_secs(15));
    assert!(timers.poll(clock.now()).is_empty());

    clock.advance(Duration::from_secs(50));
    assert_eq!(timers.poll(clock.now()), vec!["tick".to_string()]);
}

#[test]
fn rearm_after_cancel_is_not_eaten() {
    let clock = FakeClock::new();
    let mut timers = TimerQueue::new();

    timers.set("tick", Duration::from_secs(10), clock.now());
    timers.cancel("tick");
    timers.set("tick", Duration::from_secs(10), clock.now());

    clock.advance(Duration::from_secs(10));
    assert_eq!(timers.poll(clock.now()), vec!["tick".to_string()]);
}

#[test]
fn next_fire_at_returns_the_earliest() {
    let clock = FakeClock::new();
    let mut timers = TimerQueue::new();
    assert_eq!(timers.next_fire_at(), None);

    let now = clock.now();
    timers.set("b", Duration::from_secs(20), now);
    timers.set("a", Duration::from_secs(10), now);

    assert_eq!(timers.next_fire_at(), Some(now + Duration::from_secs(10)));
    assert!(timers.is_pending("a"));
    assert!(!timers.is_pending("ghost"));
}
