//! On-disk cache for the OpenWeatherMap condition icons.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};
use image::RgbaImage;

pub fn icon_url(code: &str) -> String {
    format!("https://openweathermap.org/img/wn/{}@2x.png", code)
}

pub(crate) fn cache_path(cache_dir: &Path, code: &str) -> Result<PathBuf> {
    // Codes look like "10d"; anything else stays out of the cache path.
    ensure!(
        !code.is_empty() && code.chars().all(|c| c.is_ascii_alphanumeric()),
        "invalid icon code {:?}",
        code
    );
    Ok(cache_dir.join(format!("{}.png", code)))
}

/// Fetch the icon for a condition code, going to the network only when the
/// cache has no copy yet.
pub fn icon_image(agent: &ureq::Agent, cache_dir: &Path, code: &str) -> Result<RgbaImage> {
    fs::create_dir_all(cache_dir)
        .with_context(|| format!("creating {}", cache_dir.display()))?;
    let path = cache_path(cache_dir, code)?;
    log::debug!("Getting weather icon {}", path.display());

    if let Ok(data) = fs::read(&path) {
        log::debug!("Using cached weather icon {}", path.display());
        return decode(&data);
    }

    let url = icon_url(code);
    log::debug!("Downloading weather icon {}", url);
    let response = agent.get(&url).call().context("downloading weather icon")?;
    let mut data = Vec::new();
    response
        .into_reader()
        .read_to_end(&mut data)
        .context("reading weather icon")?;

    log::debug!("Saving weather icon {}", path.display());
    fs::write(&path, &data).with_context(|| format!("writing {}", path.display()))?;
    decode(&data)
}

fn decode(data: &[u8]) -> Result<RgbaImage> {
    let img = image::load_from_memory_with_format(data, image::ImageFormat::Png)
        .context("decoding weather icon")?;
    Ok(img.to_rgba8())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};

    use super::*;

    #[test]
    fn url_embeds_code() {
        assert_eq!(
            icon_url("10d"),
            "https://openweathermap.org/img/wn/10d@2x.png"
        );
    }

    #[test]
    fn cache_path_appends_png() {
        let path = cache_path(Path::new("cache"), "04n").unwrap();
        assert_eq!(path, Path::new("cache").join("04n.png"));
    }

    #[test]
    fn cache_path_rejects_traversal() {
        assert!(cache_path(Path::new("cache"), "../etc/passwd").is_err());
        assert!(cache_path(Path::new("cache"), "").is_err());
        assert!(cache_path(Path::new("cache"), "10d/../x").is_err());
    }

    #[test]
    fn decodes_png_bytes() {
        let img = RgbaImage::from_pixel(2, 2, Rgba([10, 20, 30, 255]));
        let mut bytes = Vec::new();
        DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();

        let decoded = decode(&bytes).unwrap();
        assert_eq!(decoded.dimensions(), (2, 2));
        assert_eq!(decoded.get_pixel(0, 0), &Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn rejects_garbage_bytes() {
        assert!(decode(b"not a png").is_err());
    }
}
