// Common test utilities for headless session tests
//
// Sessions here run on the in-memory host and a manual clock, so frames are
// inspected directly and pacing is deterministic.

#![allow(dead_code)]

use framewin::{
    HeadlessHost, ManualClock, ScaleFactor, Session, WindowConfig, WindowFlags,
};
use std::time::Duration;

/// Headless session type used throughout the tests
pub type TestSession = Session<HeadlessHost, ManualClock>;

/// Open a headless session from flags
///
/// # Returns
/// The session and a handle to its clock
pub fn open(title: &str, width: u32, height: u32, flags: WindowFlags) -> (TestSession, ManualClock) {
    open_config(WindowConfig::from_flags(title, width, height, flags))
}

/// Open a headless session from a configuration
pub fn open_config(config: WindowConfig) -> (TestSession, ManualClock) {
    let clock = ManualClock::new();
    let session = Session::with_host_and_clock(config, HeadlessHost::new(), clock.clone())
        .expect("Failed to open headless session");
    (session, clock)
}

/// Flag for a scale factor
pub fn scale_flag(scale: ScaleFactor) -> WindowFlags {
    match scale {
        ScaleFactor::X1 => WindowFlags::SCALE1,
        ScaleFactor::X2 => WindowFlags::SCALE2,
        ScaleFactor::X4 => WindowFlags::SCALE4,
        ScaleFactor::X8 => WindowFlags::SCALE8,
        ScaleFactor::X16 => WindowFlags::SCALE16,
    }
}

/// Every supported scale
pub const ALL_SCALES: [ScaleFactor; 5] = [
    ScaleFactor::X1,
    ScaleFactor::X2,
    ScaleFactor::X4,
    ScaleFactor::X8,
    ScaleFactor::X16,
];

/// Whole milliseconds
pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Check that an on-screen block has one color
///
/// # Arguments
/// * `host` - Host holding the presented frame
/// * `x`, `y` - Top-left corner on screen
/// * `size` - Block edge length
/// * `color` - Expected color
pub fn assert_block(host: &HeadlessHost, x: u32, y: u32, size: u32, color: u32) {
    for sy in y..y + size {
        for sx in x..x + size {
            assert_eq!(
                host.frame_pixel(sx, sy),
                color,
                "pixel ({}, {}) on screen",
                sx,
                sy
            );
        }
    }
}
