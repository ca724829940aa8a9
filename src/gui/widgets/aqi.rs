//! Air-quality widget: colored index value over its qualitative category.

use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use epd_waveshare::color::OctColor;

use crate::gui::styles;
use crate::weather::{AirQuality, AqiLevel};

pub fn draw<D>(target: &mut D, origin: Point, air: Option<&AirQuality>) -> Result<(), D::Error>
where
    D: DrawTarget<Color = OctColor>,
{
    let Some(air) = air else {
        Text::new(
            "AQI data unavailable",
            origin + Point::new(0, 24),
            styles::BODY,
        )
        .draw(target)?;
        return Ok(());
    };

    let level = air.level();
    let value = format!("AQI: {}", format_index(air.index.aqi));
    Text::new(
        &value,
        origin + Point::new(0, 30),
        styles::value_style(level_color(level)),
    )
    .draw(target)?;
    Text::new(level.label(), origin + Point::new(0, 62), styles::BODY).draw(target)?;

    Ok(())
}

/// Ink for the value at each severity. The panel has no purple or maroon
/// ink, so the two worst buckets fall back to blue and black.
pub(crate) fn level_color(level: AqiLevel) -> OctColor {
    match level {
        AqiLevel::Good => OctColor::Green,
        AqiLevel::Moderate => OctColor::Yellow,
        AqiLevel::UnhealthyForSensitiveGroups => OctColor::Orange,
        AqiLevel::Unhealthy => OctColor::Red,
        AqiLevel::VeryUnhealthy => OctColor::Blue,
        AqiLevel::Hazardous => OctColor::Black,
    }
}

/// Integral readings print without a decimal point, like the feed reports
/// them; anything else keeps one decimal.
pub(crate) fn format_index(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_values_print_bare() {
        assert_eq!(format_index(2.0), "2");
        assert_eq!(format_index(42.0), "42");
    }

    #[test]
    fn fractional_values_keep_one_decimal() {
        assert_eq!(format_index(42.5), "42.5");
        assert_eq!(format_index(0.25), "0.2");
    }

    #[test]
    fn severity_colors() {
        assert_eq!(level_color(AqiLevel::Good), OctColor::Green);
        assert_eq!(level_color(AqiLevel::Moderate), OctColor::Yellow);
        assert_eq!(
            level_color(AqiLevel::UnhealthyForSensitiveGroups),
            OctColor::Orange
        );
        assert_eq!(level_color(AqiLevel::Unhealthy), OctColor::Red);
        assert_eq!(level_color(AqiLevel::VeryUnhealthy), OctColor::Blue);
        assert_eq!(level_color(AqiLevel::Hazardous), OctColor::Black);
    }
}
