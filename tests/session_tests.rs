// Session behaviour tests
// Geometry, presentation, input and teardown against the headless host

mod common;

use common::*;
use framewin::display::color::{BLACK, RED, WHITE};
use framewin::{vk, HostEvent, WindowConfig, WindowFlags};

#[test]
fn test_surface_size_matches_scale() {
    for scale in ALL_SCALES {
        let (session, _) = open("t", 7, 5, scale_flag(scale));
        assert_eq!(session.scaled_size(), (7 * scale.get(), 5 * scale.get()));
        assert_eq!(session.pixels().len(), 7 * 5);
        assert_eq!((session.width(), session.height()), (7, 5));
    }
}

#[test]
fn test_no_scale_flag_means_1x() {
    let (session, _) = open("t", 3, 3, WindowFlags::FPS60);
    assert_eq!(session.scaled_size(), (3, 3));
}

#[test]
fn test_pixel_becomes_scaled_block() {
    for scale in ALL_SCALES {
        let (mut session, _) = open("t", 4, 3, scale_flag(scale));
        session.set_pixel(2, 1, RED);
        session.update();

        let s = scale.get();
        assert_block(session.host(), 2 * s, s, s, RED);
        assert_block(session.host(), s, s, s, BLACK);
    }
}

#[test]
fn test_solid_fill_scenario() {
    let (mut session, _) = open("t", 4, 4, WindowFlags::SCALE1);
    session.pixels_mut().fill(0xFF0000);
    session.update();

    assert_eq!(session.host().frame_size(), (4, 4));
    assert!(session.host().last_frame().iter().all(|&p| p == 0xFF0000));
}

#[test]
fn test_top_left_white_scenario() {
    let (mut session, _) = open("t", 2, 2, WindowFlags::SCALE4);
    session.set_pixel(0, 0, 0xFFFFFF);
    session.update();

    let host = session.host();
    assert_eq!(host.frame_size(), (8, 8));
    assert_block(host, 0, 0, 4, WHITE);
    assert_block(host, 4, 0, 4, BLACK);
    assert_block(host, 0, 4, 4, BLACK);
    assert_block(host, 4, 4, 4, BLACK);
}

#[test]
fn test_last_write_wins() {
    let (mut session, _) = open("t", 2, 2, WindowFlags::SCALE2);
    session.set_pixel(1, 1, WHITE);
    session.set_pixel(1, 1, WHITE);
    session.update();
    let once = session.host().last_frame().to_vec();

    let (mut other, _) = open("t", 2, 2, WindowFlags::SCALE2);
    other.set_pixel(1, 1, RED);
    other.set_pixel(1, 1, WHITE);
    other.update();

    assert_eq!(other.host().last_frame(), once.as_slice());
}

#[test]
fn test_pixels_mut_is_row_major() {
    let (mut session, _) = open("t", 3, 2, WindowFlags::SCALE1);
    let width = session.width() as usize;
    session.pixels_mut()[width + 2] = RED;
    assert_eq!(session.pixel(2, 1), RED);
}

#[test]
fn test_key_down_then_up() {
    let (mut session, _) = open("t", 1, 1, WindowFlags::empty());
    let key = vk::ascii(b'W').unwrap();

    session.host_mut().push_key(key as u32, true);
    assert!(!session.key(key), "events apply only during update");
    session.update();
    assert!(session.key(key));

    session.update();
    assert!(session.key(key), "no event leaves the key unchanged");

    session.host_mut().push_key(key as u32, false);
    session.update();
    assert!(!session.key(key));
}

#[test]
fn test_every_key_code() {
    let (mut session, _) = open("t", 1, 1, WindowFlags::empty());
    for code in 0..256u32 {
        session.host_mut().push_key(code, true);
    }
    session.update();
    assert!(session.keys().iter().all(|&k| k));
}

#[test]
fn test_wide_key_codes_alias() {
    let (mut session, _) = open("t", 1, 1, WindowFlags::empty());
    session.host_mut().push_key(0x100 + vk::SPACE as u32, true);
    session.update();
    assert!(session.key(vk::SPACE));
}

#[test]
fn test_events_apply_in_order() {
    let (mut session, _) = open("t", 1, 1, WindowFlags::empty());
    session.host_mut().push_key(vk::UP as u32, true);
    session.host_mut().push_key(vk::UP as u32, false);
    session.host_mut().push_key(vk::DOWN as u32, false);
    session.host_mut().push_key(vk::DOWN as u32, true);
    session.update();

    assert!(!session.key(vk::UP));
    assert!(session.key(vk::DOWN));
}

#[test]
fn test_close_request_sets_quit_permanently() {
    let (mut session, _) = open("t", 1, 1, WindowFlags::empty());
    session.host_mut().push_close();
    assert!(!session.quit());

    session.update();
    assert!(session.quit());

    for _ in 0..3 {
        session.update();
        assert!(session.quit());
    }
}

#[test]
fn test_quit_event_sets_quit() {
    let (mut session, _) = open("t", 1, 1, WindowFlags::empty());
    session.host_mut().push_event(HostEvent::Quit);
    session.update();
    assert!(session.quit());
}

#[test]
fn test_screenshot_uses_scaled_surface() {
    let dir = std::env::temp_dir().join(format!("framewin_session_shots_{}", std::process::id()));
    let (mut session, _) = open("t", 3, 2, WindowFlags::SCALE4);
    session.clear(RED);
    session.update();

    let path = session.save_screenshot(&dir).expect("Failed to save screenshot");
    assert!(path.exists());
    assert_eq!(path.extension().and_then(|e| e.to_str()), Some("png"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_close_tears_down_host() {
    let (mut session, _) = open_config(WindowConfig::new("closing", 2, 2));
    let closed = session.host().closed_flag();
    session.update();
    assert!(!closed.get());

    session.close();
    assert!(closed.get());
}

#[test]
fn test_drop_tears_down_host() {
    let (session, _) = open("t", 1, 1, WindowFlags::empty());
    let closed = session.host().closed_flag();
    drop(session);
    assert!(closed.get());
}
