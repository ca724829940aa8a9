//! Command line and environment configuration.

use std::path::PathBuf;

use clap::Parser;

/// Default spot to report on when no coordinates are given: Helsinki.
const DEFAULT_LAT: f64 = 60.1699;
const DEFAULT_LON: f64 = 24.9384;

#[derive(Parser, Debug)]
#[command(
    name = "tenkiban",
    version,
    about = "E-ink dashboard showing the current weather and air quality"
)]
pub struct Args {
    /// Write the rendered dashboard to a PNG file
    #[arg(long)]
    pub save: bool,

    /// Draw the rendered dashboard to the eink display
    #[arg(long)]
    pub draw: bool,

    /// Blank the panel to white, before drawing or on its own
    #[arg(long)]
    pub clear: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Output file for --save
    #[arg(long, default_value = "screenshot.png")]
    pub out: PathBuf,

    /// OpenWeatherMap API key
    #[arg(long, env = "OPENWEATHERMAP_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Latitude of the spot the dashboard reports on
    #[arg(long, env = "TENKIBAN_LAT", default_value_t = DEFAULT_LAT, allow_hyphen_values = true)]
    pub lat: f64,

    /// Longitude of the spot the dashboard reports on
    #[arg(long, env = "TENKIBAN_LON", default_value_t = DEFAULT_LON, allow_hyphen_values = true)]
    pub lon: f64,

    /// Directory for cached weather icons
    #[arg(long, default_value = "cache")]
    pub cache_dir: PathBuf,

    #[command(flatten)]
    pub panel: PanelArgs,
}

/// How the panel is wired up. The GPIO line defaults match the common
/// Inky-style HAT pinout.
#[derive(clap::Args, Debug)]
pub struct PanelArgs {
    /// SPI device the panel is connected to
    #[arg(long, default_value = "/dev/spidev0.0")]
    pub spi: String,

    /// GPIO character device carrying the control lines
    #[arg(long, default_value = "/dev/gpiochip0")]
    pub gpiochip: String,

    /// Data/command GPIO line (high for data, low for command)
    #[arg(long, default_value_t = 22)]
    pub dc: u32,

    /// Reset GPIO line
    #[arg(long, default_value_t = 27)]
    pub reset: u32,

    /// Busy GPIO line (high while the panel refreshes)
    #[arg(long, default_value_t = 17)]
    pub busy: u32,

    /// SPI clock in Hz
    #[arg(long, default_value_t = 4_000_000)]
    pub spi_hz: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_wiring() {
        let args = Args::try_parse_from(["tenkiban"]).unwrap();
        assert!(!args.save);
        assert!(!args.draw);
        assert!(!args.clear);
        assert_eq!(args.out, PathBuf::from("screenshot.png"));
        assert_eq!(args.cache_dir, PathBuf::from("cache"));
        assert_eq!(args.panel.dc, 22);
        assert_eq!(args.panel.reset, 27);
        assert_eq!(args.panel.busy, 17);
        assert_eq!(args.panel.spi, "/dev/spidev0.0");
    }

    #[test]
    fn negative_coordinates_parse() {
        let args = Args::try_parse_from([
            "tenkiban", "--save", "--lat", "-33.87", "--lon", "151.21",
        ])
        .unwrap();
        assert!(args.save);
        assert!((args.lat - -33.87).abs() < f64::EPSILON);
        assert!((args.lon - 151.21).abs() < f64::EPSILON);
    }

    #[test]
    fn actions_can_combine() {
        let args = Args::try_parse_from(["tenkiban", "--save", "--draw", "--clear"]).unwrap();
        assert!(args.save && args.draw && args.clear);
    }
}
