// Interactive window host. Key presses and live window resizes drive the
// widget; the two read-only stats are drawn as an overlay in a tiny 3x5
// pixel font. The whole loop is single-threaded: every event is handled to
// completion before the next frame is presented.

use minifb::{Key, KeyRepeat, Window, WindowOptions};

use crate::state::Event;
use crate::viewport::Viewport;
use crate::widget::TriadExplorer;

const START_WIDTH: usize = 600;
const START_HEIGHT: usize = 600;
const OVERLAY_COLOR: u32 = 0xFFFFFF;

// 3x5 pixel glyphs: digits, separators, and the lowercase letters the two
// stat lines use.
fn glyph(ch: char) -> &'static [u8] {
    match ch {
        '0' => &[0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => &[0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => &[0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => &[0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => &[0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => &[0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => &[0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => &[0b111, 0b001, 0b001, 0b001, 0b001],
        '8' => &[0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => &[0b111, 0b101, 0b111, 0b001, 0b111],
        ':' => &[0b000, 0b010, 0b000, 0b010, 0b000],
        ',' => &[0b000, 0b000, 0b000, 0b010, 0b100],
        ' ' => &[0b000, 0b000, 0b000, 0b000, 0b000],
        'a' => &[0b111, 0b101, 0b111, 0b101, 0b101],
        'd' => &[0b110, 0b101, 0b101, 0b101, 0b110],
        'e' => &[0b111, 0b100, 0b111, 0b100, 0b111],
        'h' => &[0b101, 0b101, 0b111, 0b101, 0b101],
        'i' => &[0b111, 0b010, 0b010, 0b010, 0b111],
        'l' => &[0b100, 0b100, 0b100, 0b100, 0b111],
        'o' => &[0b111, 0b101, 0b101, 0b101, 0b111],
        'p' => &[0b111, 0b101, 0b111, 0b100, 0b100],
        'r' => &[0b110, 0b101, 0b110, 0b101, 0b101],
        't' => &[0b111, 0b010, 0b010, 0b010, 0b010],
        'x' => &[0b101, 0b101, 0b010, 0b101, 0b101],
        _ => &[0b000, 0b000, 0b000, 0b000, 0b000],
    }
}

fn draw_char(buffer: &mut [u32], stride: usize, height: usize, x: usize, y: usize, ch: char) {
    for (dy, &row) in glyph(ch).iter().enumerate() {
        if y + dy >= height {
            break;
        }
        for dx in 0..3 {
            if x + dx >= stride {
                break;
            }
            if row & (1 << (2 - dx)) != 0 {
                buffer[(y + dy) * stride + (x + dx)] = OVERLAY_COLOR;
            }
        }
    }
}

fn draw_text(buffer: &mut [u32], stride: usize, height: usize, x: usize, y: usize, text: &str) {
    let mut offset_x = x;
    for ch in text.chars() {
        if offset_x + 4 >= stride {
            break;
        }
        draw_char(buffer, stride, height, offset_x, y, ch);
        offset_x += 4;
    }
}

/// Open the explorer window and run the event loop until Escape or close.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut window = Window::new(
        "Triad Matrix Explorer",
        START_WIDTH,
        START_HEIGHT,
        WindowOptions {
            resize: true,
            ..WindowOptions::default()
        },
    )?;
    window.set_target_fps(30);

    // minifb reports window sizes in native pixels, so the host pins the
    // device pixel ratio at 1.0; the widget itself handles arbitrary ratios.
    let dpr = 1.0;
    let (w, h) = window.get_size();
    let mut widget = TriadExplorer::new(Viewport::new(w as f64, h as f64, dpr));

    while window.is_open() && !window.is_key_down(Key::Escape) {
        let (w, h) = window.get_size();
        if w > 0 && h > 0 && (w, h) != (widget.frame().width(), widget.frame().height()) {
            widget.resize(w as f64, h as f64, dpr);
        }

        if window.is_key_pressed(Key::Up, KeyRepeat::No)
            || window.is_key_pressed(Key::Equal, KeyRepeat::No)
        {
            widget.handle(Event::DepthIncrease);
        }
        if window.is_key_pressed(Key::Down, KeyRepeat::No)
            || window.is_key_pressed(Key::Minus, KeyRepeat::No)
        {
            widget.handle(Event::DepthDecrease);
        }
        if window.is_key_pressed(Key::S, KeyRepeat::No) {
            let path = format!("triad_{}.png", widget.depth());
            save_snapshot(&widget, &path)?;
            println!("snapshot saved: {}", path);
        }

        // Overlay the stats on a copy so repaints stay text-free.
        let stats = widget.stats();
        let stride = widget.frame().width();
        let height = widget.frame().height();
        let mut frame = widget.frame().pixels().to_vec();
        draw_text(&mut frame, stride, height, 10, 10, &format!("triad depth: {}", stats.depth_text));
        draw_text(&mut frame, stride, height, 10, 25, &format!("total tx: {}", stats.transactions_text));

        window.update_with_buffer(&frame, stride, height)?;
    }

    Ok(())
}

/// Write the current physical frame as an RGB png.
fn save_snapshot(widget: &TriadExplorer, path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let frame = widget.frame();
    let mut rgb = Vec::with_capacity(frame.pixels().len() * 3);
    for &px in frame.pixels() {
        rgb.push(((px >> 16) & 0xFF) as u8);
        rgb.push(((px >> 8) & 0xFF) as u8);
        rgb.push((px & 0xFF) as u8);
    }
    image::save_buffer(
        path,
        &rgb,
        frame.width() as u32,
        frame.height() as u32,
        image::ExtendedColorType::Rgb8,
    )?;
    Ok(())
}
