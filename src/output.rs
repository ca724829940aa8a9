//! Screenshot path: expand the panel framebuffer into a PNG file.

use std::path::Path;

use anyhow::{ensure, Context, Result};
use image::{Rgb, RgbImage};

use crate::gui::{HEIGHT, WIDTH};

pub fn save_png(buffer: &[u8], path: &Path) -> Result<()> {
    let img = unpack(buffer)?;
    img.save(path)
        .with_context(|| format!("writing {}", path.display()))?;
    log::info!("Screenshot saved to {}", path.display());
    Ok(())
}

/// Expand the packed two-pixels-per-byte framebuffer into 24-bit RGB. The
/// first pixel of each pair sits in the high nibble.
pub(crate) fn unpack(buffer: &[u8]) -> Result<RgbImage> {
    let row_bytes = WIDTH as usize / 2;
    let expected = row_bytes * HEIGHT as usize;
    ensure!(
        buffer.len() == expected,
        "framebuffer is {} bytes, panel expects {}",
        buffer.len(),
        expected
    );

    let mut img = RgbImage::new(WIDTH, HEIGHT);
    for (i, byte) in buffer.iter().enumerate() {
        let x = (i % row_bytes) as u32 * 2;
        let y = (i / row_bytes) as u32;
        img.put_pixel(x, y, Rgb(ink_rgb(byte >> 4)));
        img.put_pixel(x + 1, y, Rgb(ink_rgb(byte & 0x0F)));
    }
    Ok(img)
}

fn ink_rgb(code: u8) -> [u8; 3] {
    match crate::gui::INKS.get(code as usize) {
        Some((_, rgb)) => *rgb,
        // 0x7 is the no-ink state, indistinguishable from white on paper.
        None => [255, 255, 255],
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::prelude::*;
    use epd_waveshare::color::OctColor;
    use epd_waveshare::epd5in65f::Display5in65f;

    use super::*;

    #[test]
    fn rejects_wrong_buffer_length() {
        assert!(unpack(&[0u8; 16]).is_err());
    }

    #[test]
    fn unpacks_drawn_pixels() {
        // (0, 0) lands in a high nibble, (3, 1) in a low one.
        let mut display = Display5in65f::default();
        Pixel(Point::new(0, 0), OctColor::Red)
            .draw(&mut display)
            .unwrap();
        Pixel(Point::new(3, 1), OctColor::Green)
            .draw(&mut display)
            .unwrap();

        let img = unpack(display.buffer()).unwrap();
        assert_eq!(img.dimensions(), (WIDTH, HEIGHT));
        assert_eq!(img.get_pixel(0, 0), &Rgb([255, 0, 0]));
        assert_eq!(img.get_pixel(3, 1), &Rgb([0, 255, 0]));
    }

    #[test]
    fn saves_png_screenshot() {
        let display = Display5in65f::default();

        let path = std::env::temp_dir().join("tenkiban-screenshot-test.png");
        save_png(display.buffer(), &path).unwrap();
        let saved = image::open(&path).unwrap().to_rgb8();
        assert_eq!(saved.dimensions(), (WIDTH, HEIGHT));
        std::fs::remove_file(&path).ok();
    }
}
