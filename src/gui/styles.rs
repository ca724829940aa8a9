//! Shared text styles for the dashboard widgets.

use embedded_graphics::mono_font::iso_8859_15::{FONT_10X20, FONT_9X15};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::text::{Alignment, TextStyle, TextStyleBuilder};
use epd_waveshare::color::OctColor;
use profont::PROFONT_24_POINT;

/// Place name in the header row.
pub const HEADER: MonoTextStyle<'static, OctColor> = MonoTextStyle::new(&FONT_10X20, OctColor::Black);

/// Headline numbers (temperature, AQI).
pub const VALUE: MonoTextStyle<'static, OctColor> =
    MonoTextStyle::new(&PROFONT_24_POINT, OctColor::Black);

/// Secondary lines: min/max, condition description, AQI category.
pub const BODY: MonoTextStyle<'static, OctColor> = MonoTextStyle::new(&FONT_10X20, OctColor::Black);

/// Fine print: timestamp, feels-like/humidity details.
pub const SMALL: MonoTextStyle<'static, OctColor> = MonoTextStyle::new(&FONT_9X15, OctColor::Black);

pub const RIGHT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Right).build();

/// Headline style with a caller-picked ink, for the colored AQI value.
pub fn value_style(color: OctColor) -> MonoTextStyle<'static, OctColor> {
    MonoTextStyle::new(&PROFONT_24_POINT, color)
}
