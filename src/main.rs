use anyhow::{Context, Result};
use clap::Parser;
use epd_waveshare::epd5in65f::Display5in65f;

mod config;
mod gui;
mod hardware;
mod output;
mod weather;

use crate::config::Args;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.debug);
    log::info!("Starting");

    if !(args.save || args.draw || args.clear) {
        log::warn!("Nothing to do, pass --save and/or --draw (or --clear)");
        return Ok(());
    }

    // Clearing on its own needs no data and no framebuffer.
    if args.clear && !(args.save || args.draw) {
        let mut panel = hardware::Panel::open(&args.panel)?;
        log::info!("Clearing eink display");
        panel.clear()?;
        panel.sleep()?;
        return Ok(());
    }

    let api_key = args
        .api_key
        .clone()
        .context("OPENWEATHERMAP_API_KEY is not set")?;
    let service = weather::WeatherService::new(api_key);
    let report = weather::gather(&service, &args.cache_dir, args.lat, args.lon);

    let mut display = Display5in65f::default();
    gui::draw_dashboard(&mut display, &report)?;

    if args.save {
        log::info!("Saving screenshot to file");
        output::save_png(display.buffer(), &args.out)?;
    }

    if args.draw {
        let mut panel = hardware::Panel::open(&args.panel)?;
        if args.clear {
            log::info!("Clearing eink display");
            panel.clear()?;
        }
        log::info!("Drawing dashboard to eink display");
        panel.show(display.buffer())?;
        panel.sleep()?;
    }

    Ok(())
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}
