// Frame pacing tests
//
// Most tests run on the manual clock, which advances when the session sleeps
// and when a test simulates work. Pacing drops missed time instead of
// catching up, so a stall delays the schedule rather than being followed by
// a burst of short frames.

mod common;

use common::*;
use framewin::{Clock, FrameClock, FrameRate, SystemClock, WindowFlags};
use std::time::Instant;

#[test]
fn test_idle_loop_runs_at_interval() {
    let (mut session, clock) = open("t", 1, 1, WindowFlags::FPS60);
    for _ in 0..60 {
        session.update();
    }
    assert_eq!(clock.total_slept(), ms(60 * 16));
    assert_eq!(session.frame_count(), 60);
}

#[test]
fn test_interval_per_rate() {
    for (flags, rate) in [
        (WindowFlags::empty(), FrameRate::Fps20),
        (WindowFlags::FPS30, FrameRate::Fps30),
        (WindowFlags::FPS60, FrameRate::Fps60),
    ] {
        let (mut session, clock) = open("t", 1, 1, flags);
        assert_eq!(session.frame_rate(), rate);
        for _ in 0..10 {
            session.update();
        }
        assert_eq!(clock.total_slept(), ms(10 * rate.interval_millis()));
    }
}

#[test]
fn test_work_is_absorbed_by_sleep() {
    let (mut session, clock) = open("t", 1, 1, WindowFlags::FPS30);
    for _ in 0..30 {
        clock.advance(ms(20));
        session.update();
    }
    // 33 ms per frame whether the body takes 0 or 20 ms.
    assert_eq!(clock.total_slept(), ms(30 * 13));
    assert_eq!(session.frame_clock().next_deadline(), ms(31 * 33));
}

#[test]
fn test_stall_is_not_caught_up() {
    let (mut session, clock) = open("t", 1, 1, WindowFlags::FPS60);
    for _ in 0..10 {
        session.update();
    }
    let before_stall = clock.total_slept();

    // One frame takes 200 ms.
    clock.advance(ms(200));
    let late = session.update();
    assert!(late.was_late());
    assert_eq!(late.behind, ms(200 - 16));

    // Following frames keep the full interval; none are shortened.
    for _ in 0..10 {
        let timing = session.update();
        assert_eq!(timing.slept, ms(16));
    }
    assert_eq!(clock.total_slept(), before_stall + ms(10 * 16));
}

#[test]
fn test_total_time_after_stall() {
    let (mut session, clock) = open("t", 1, 1, WindowFlags::FPS60);
    let frames = 50u64;

    for i in 0..frames {
        if i == 20 {
            clock.advance(ms(500));
        }
        session.update();
    }

    // Budget: every frame but the late one takes one interval; the late one
    // takes the stall. No frame is skipped to recover the lost time.
    let expected = ms((frames - 1) * 16) + ms(500);
    assert_eq!(clock.now(), expected);
}

#[test]
fn test_occasional_overrun() {
    let (mut session, clock) = open("t", 1, 1, WindowFlags::FPS60);
    let mut late_frames = 0;

    for i in 0..100 {
        clock.advance(if i % 10 == 0 { ms(25) } else { ms(4) });
        if session.update().was_late() {
            late_frames += 1;
        }
    }

    assert_eq!(late_frames, 10);
}

#[test]
fn test_system_clock_holds_cadence() {
    let start = Instant::now();
    let mut frames = FrameClock::new(SystemClock::new(), FrameRate::Fps60);
    for _ in 0..10 {
        frames.sync();
    }
    let elapsed = start.elapsed();

    // Sleeping never ends early; the upper bound leaves room for a loaded machine.
    assert!(elapsed >= ms(160), "finished in {:?}", elapsed);
    assert!(elapsed < ms(400), "took {:?}", elapsed);
}
