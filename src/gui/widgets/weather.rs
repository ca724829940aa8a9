//! Current-weather widget: condition icon next to a column of readings.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use epd_waveshare::color::OctColor;
use image::RgbaImage;

use crate::gui::{nearest_ink, styles};
use crate::weather::CurrentWeather;

/// Icon cell is sized for the API's @2x icons.
const ICON_SIZE: i32 = 100;
const TEXT_GAP: i32 = 24;

/// Icon pixels below this alpha let the panel background show through.
const ALPHA_CUTOFF: u8 = 128;

pub fn draw<D>(
    target: &mut D,
    origin: Point,
    weather: Option<&CurrentWeather>,
    icon: Option<&RgbaImage>,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = OctColor>,
{
    let Some(weather) = weather else {
        Text::new(
            "weather data unavailable",
            origin + Point::new(0, 24),
            styles::BODY,
        )
        .draw(target)?;
        return Ok(());
    };

    match icon {
        Some(icon) => blit_icon(target, origin, icon)?,
        None => {
            // Outline placeholder where the icon would sit.
            Rectangle::new(origin, Size::new(ICON_SIZE as u32, ICON_SIZE as u32))
                .into_styled(PrimitiveStyle::with_stroke(OctColor::Black, 1))
                .draw(target)?;
            Text::new(
                "?",
                origin + Point::new(ICON_SIZE / 2 - 8, ICON_SIZE / 2 + 10),
                styles::VALUE,
            )
            .draw(target)?;
        }
    }

    let left = origin.x + ICON_SIZE + TEXT_GAP;

    let temp = format!("{:.1}", weather.main.temp);
    let after = Text::new(&temp, Point::new(left, origin.y + 34), styles::VALUE).draw(target)?;
    Text::new("°C", after, styles::BODY).draw(target)?;

    let min_max = format!(
        "{:.1}°C / {:.1}°C",
        weather.main.temp_min, weather.main.temp_max
    );
    Text::new(&min_max, Point::new(left, origin.y + 66), styles::BODY).draw(target)?;

    if let Some(condition) = weather.condition() {
        Text::new(
            &condition.description,
            Point::new(left, origin.y + 94),
            styles::BODY,
        )
        .draw(target)?;
    }

    let details = format!(
        "feels like {:.1}°C, humidity {:.0}%",
        weather.main.feels_like, weather.main.humidity
    );
    Text::new(&details, Point::new(left, origin.y + 122), styles::SMALL).draw(target)?;

    Ok(())
}

/// Quantize the icon to the panel's inks and draw it at `origin`.
fn blit_icon<D>(target: &mut D, origin: Point, icon: &RgbaImage) -> Result<(), D::Error>
where
    D: DrawTarget<Color = OctColor>,
{
    let pixels = icon
        .enumerate_pixels()
        .filter(|(_, _, px)| px[3] >= ALPHA_CUTOFF)
        .map(|(x, y, px)| {
            Pixel(
                origin + Point::new(x as i32, y as i32),
                nearest_ink(px[0], px[1], px[2]),
            )
        });
    target.draw_iter(pixels)
}
