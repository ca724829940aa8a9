//! Dashboard composition for the 600x448 seven-color panel.

pub mod styles;
pub mod widgets;

use chrono::Local;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use epd_waveshare::color::OctColor;

use crate::weather::Report;

pub use epd_waveshare::epd5in65f::{HEIGHT, WIDTH};

const MARGIN: i32 = 24;
const WEATHER_ORIGIN: Point = Point::new(MARGIN, 96);
const AQI_ORIGIN: Point = Point::new(MARGIN, 300);

/// The seven inks the panel can produce, with their nominal RGB values.
/// Ordered by the controller's 4-bit color codes; code 0x7 (no ink) is not
/// listed and reads back as white.
pub(crate) const INKS: [(OctColor, [u8; 3]); 7] = [
    (OctColor::Black, [0, 0, 0]),
    (OctColor::White, [255, 255, 255]),
    (OctColor::Green, [0, 255, 0]),
    (OctColor::Blue, [0, 0, 255]),
    (OctColor::Red, [255, 0, 0]),
    (OctColor::Yellow, [255, 255, 0]),
    (OctColor::Orange, [255, 128, 0]),
];

/// Nearest ink by squared RGB distance.
pub(crate) fn nearest_ink(r: u8, g: u8, b: u8) -> OctColor {
    let mut best = OctColor::White;
    let mut best_dist = u32::MAX;
    for (ink, [ir, ig, ib]) in INKS {
        let dr = i32::from(r) - i32::from(ir);
        let dg = i32::from(g) - i32::from(ig);
        let db = i32::from(b) - i32::from(ib);
        let dist = (dr * dr + dg * dg + db * db) as u32;
        if dist < best_dist {
            best = ink;
            best_dist = dist;
        }
    }
    best
}

/// Compose the full dashboard: header row, weather widget, AQI widget.
pub fn draw_dashboard<D>(target: &mut D, report: &Report) -> Result<(), D::Error>
where
    D: DrawTarget<Color = OctColor>,
{
    target.clear(OctColor::White)?;

    let place = report
        .weather
        .as_ref()
        .map(|w| w.name.as_str())
        .filter(|name| !name.is_empty())
        .unwrap_or("Weather");
    Text::new(place, Point::new(MARGIN, 40), styles::HEADER).draw(target)?;

    let stamp = Local::now().format("%a %d %b %H:%M").to_string();
    Text::with_text_style(
        &stamp,
        Point::new(WIDTH as i32 - MARGIN, 40),
        styles::SMALL,
        styles::RIGHT_ALIGNED,
    )
    .draw(target)?;

    Rectangle::new(Point::new(MARGIN, 56), Size::new(WIDTH - 2 * MARGIN as u32, 2))
        .into_styled(PrimitiveStyle::with_fill(OctColor::Black))
        .draw(target)?;

    widgets::weather::draw(
        target,
        WEATHER_ORIGIN,
        report.weather.as_ref(),
        report.icon.as_ref(),
    )?;
    widgets::aqi::draw(target, AQI_ORIGIN, report.air.as_ref())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use epd_waveshare::epd5in65f::Display5in65f;
    use image::{Rgba, RgbaImage};

    use crate::weather::types::{Condition, CurrentWeather, Thermals};
    use crate::weather::Report;

    use super::*;

    fn sample_report() -> Report {
        Report {
            weather: Some(CurrentWeather {
                main: Thermals {
                    temp: 21.3,
                    feels_like: 20.6,
                    temp_min: 18.0,
                    temp_max: 24.1,
                    humidity: 58.0,
                },
                weather: vec![Condition {
                    description: "scattered clouds".to_owned(),
                    icon: "03d".to_owned(),
                }],
                name: "Helsinki".to_owned(),
                dt: 1722855600,
            }),
            air: Some(crate::weather::AirQuality {
                dt: 1722855600,
                index: crate::weather::types::AqiReading { aqi: 42.0 },
                components: crate::weather::types::Components {
                    co: 201.9,
                    no: 0.02,
                    no2: 0.77,
                    o3: 68.66,
                    so2: 0.64,
                    pm2_5: 0.5,
                    pm10: 0.54,
                    nh3: 0.12,
                },
            }),
            icon: Some(RgbaImage::from_pixel(100, 100, Rgba([40, 40, 40, 255]))),
        }
    }

    #[test]
    fn exact_ink_colors_map_to_themselves() {
        for (ink, [r, g, b]) in INKS {
            assert_eq!(nearest_ink(r, g, b), ink);
        }
    }

    #[test]
    fn grays_split_between_black_and_white() {
        assert_eq!(nearest_ink(20, 20, 20), OctColor::Black);
        assert_eq!(nearest_ink(240, 240, 240), OctColor::White);
    }

    #[test]
    fn dashboard_renders_something() {
        let mut display = Display5in65f::default();
        let blank = white_buffer();

        draw_dashboard(&mut display, &sample_report()).unwrap();
        assert_ne!(display.buffer(), &blank[..]);
    }

    #[test]
    fn dashboard_renders_without_data() {
        let mut display = Display5in65f::default();
        let blank = white_buffer();

        let report = Report {
            weather: None,
            air: None,
            icon: None,
        };
        draw_dashboard(&mut display, &report).unwrap();
        // The fallback labels still render.
        assert_ne!(display.buffer(), &blank[..]);
    }

    fn white_buffer() -> Vec<u8> {
        let mut display = Display5in65f::default();
        let _ = DrawTarget::clear(&mut display, OctColor::White);
        display.buffer().to_vec()
    }
}
