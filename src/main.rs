// framewin - Demo entry point
//
// Opens a window from `framewin.toml`, animates a test pattern and moves a
// white square with the arrow keys. Escape or the close button exits; F9
// saves a screenshot.

use framewin::display::color::WHITE;
use framewin::{vk, Session, WindowConfig, CONFIG_FILE};

/// Side of the movable square in logical pixels
const CURSOR_SIZE: u32 = 8;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("framewin v{}", env!("CARGO_PKG_VERSION"));
    println!("==============");
    println!();

    let config = WindowConfig::load_or_default(CONFIG_FILE);
    println!("Configuration loaded from '{}'", CONFIG_FILE);
    println!("  Resolution: {}x{}", config.width, config.height);
    println!("  Scale: {}x", config.scale.get());
    println!("  Target FPS: {}", config.fps.fps());
    println!();
    println!("Arrow keys move the square, F9 saves a screenshot.");
    println!("Press Escape or the close button to exit.");
    println!();

    let title = format!(
        "{} ({}x{} @ {}x)",
        config.title,
        config.width,
        config.height,
        config.scale.get()
    );
    let mut session = Session::from_config(config.with_title(title))?;

    let (mut x, mut y) = (
        session.width().saturating_sub(CURSOR_SIZE) / 2,
        session.height().saturating_sub(CURSOR_SIZE) / 2,
    );
    let mut screenshot_held = false;

    while !session.quit() && !session.key(vk::ESCAPE) {
        let phase = (session.frame_count() / 8) as u32;
        session.buffer_mut().test_pattern(phase);

        let max_x = session.width().saturating_sub(CURSOR_SIZE);
        let max_y = session.height().saturating_sub(CURSOR_SIZE);
        if session.key(vk::LEFT) {
            x = x.saturating_sub(1);
        }
        if session.key(vk::RIGHT) {
            x = (x + 1).min(max_x);
        }
        if session.key(vk::UP) {
            y = y.saturating_sub(1);
        }
        if session.key(vk::DOWN) {
            y = (y + 1).min(max_y);
        }

        for dy in 0..CURSOR_SIZE.min(session.height()) {
            for dx in 0..CURSOR_SIZE.min(session.width()) {
                session.set_pixel(x + dx, y + dy, WHITE);
            }
        }

        session.update();

        let f9 = vk::F1 + 8;
        if session.key(f9) && !screenshot_held {
            match session.save_screenshot("screenshots") {
                Ok(path) => println!("Screenshot saved to: {}", path.display()),
                Err(e) => eprintln!("Failed to save screenshot: {}", e),
            }
        }
        screenshot_held = session.key(f9);
    }

    println!("Display window closed after {} frames.", session.frame_count());
    session.close();
    Ok(())
}
