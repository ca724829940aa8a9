//! Panel wiring: the SPI device, the control lines, and the epd-waveshare
//! driver on top of them. Refresh waveforms and SPI framing all live in the
//! driver crate; this module only connects it to the Pi's devices.

use anyhow::{anyhow, ensure, Context, Result};
use epd_waveshare::epd5in65f::{Epd5in65f, HEIGHT, WIDTH};
use epd_waveshare::prelude::*;
use linux_embedded_hal::gpio_cdev::{Chip, LineRequestFlags};
use linux_embedded_hal::spidev::{SpiModeFlags, SpidevOptions};
use linux_embedded_hal::{CdevPin, Delay, SpidevDevice};

use crate::config::PanelArgs;

type Epd = Epd5in65f<SpidevDevice, CdevPin, CdevPin, CdevPin, Delay>;

pub struct Panel {
    spi: SpidevDevice,
    epd: Epd,
    delay: Delay,
}

impl Panel {
    /// Open the SPI device, claim the control lines and bring up the
    /// display controller.
    pub fn open(cfg: &PanelArgs) -> Result<Self> {
        log::debug!("Opening SPI device {}", cfg.spi);
        let mut spi = SpidevDevice::open(&cfg.spi)
            .with_context(|| format!("opening SPI device {}", cfg.spi))?;
        let options = SpidevOptions::new()
            .bits_per_word(8)
            .max_speed_hz(cfg.spi_hz)
            .mode(SpiModeFlags::SPI_MODE_0)
            .build();
        spi.configure(&options).context("configuring SPI")?;

        let mut chip = Chip::new(&cfg.gpiochip)
            .with_context(|| format!("opening GPIO chip {}", cfg.gpiochip))?;
        let dc = output_pin(&mut chip, cfg.dc, "tenkiban-dc")?;
        let rst = output_pin(&mut chip, cfg.reset, "tenkiban-reset")?;
        let busy = input_pin(&mut chip, cfg.busy, "tenkiban-busy")?;

        let mut delay = Delay {};
        let epd = Epd5in65f::new(&mut spi, busy, dc, rst, &mut delay, None)
            .map_err(|e| anyhow!("Could not create EPD driver: {:?}", e))?;
        log::debug!("EPD driver created");

        Ok(Panel { spi, epd, delay })
    }

    /// Transfer a full frame and refresh. An ACeP refresh takes tens of
    /// seconds; this blocks until the BUSY line drops.
    pub fn show(&mut self, buffer: &[u8]) -> Result<()> {
        ensure!(
            buffer.len() == buffer_len(),
            "framebuffer is {} bytes, panel expects {}",
            buffer.len(),
            buffer_len()
        );
        self.epd
            .update_and_display_frame(&mut self.spi, buffer, &mut self.delay)
            .map_err(|e| anyhow!("Failed to write frame to panel: {:?}", e))
    }

    /// Blank the panel to white.
    pub fn clear(&mut self) -> Result<()> {
        self.epd
            .clear_frame(&mut self.spi, &mut self.delay)
            .map_err(|e| anyhow!("Failed to clear panel: {:?}", e))
    }

    /// Deep sleep. The bistable panel keeps showing the last frame.
    pub fn sleep(&mut self) -> Result<()> {
        self.epd
            .sleep(&mut self.spi, &mut self.delay)
            .map_err(|e| anyhow!("Failed to put panel to sleep: {:?}", e))
    }
}

fn output_pin(chip: &mut Chip, line: u32, label: &str) -> Result<CdevPin> {
    let handle = chip
        .get_line(line)
        .with_context(|| format!("getting GPIO line {}", line))?
        .request(LineRequestFlags::OUTPUT, 0, label)
        .with_context(|| format!("requesting GPIO line {}", line))?;
    CdevPin::new(handle).with_context(|| format!("creating pin for GPIO line {}", line))
}

fn input_pin(chip: &mut Chip, line: u32, label: &str) -> Result<CdevPin> {
    let handle = chip
        .get_line(line)
        .with_context(|| format!("getting GPIO line {}", line))?
        .request(LineRequestFlags::INPUT, 0, label)
        .with_context(|| format!("requesting GPIO line {}", line))?;
    CdevPin::new(handle).with_context(|| format!("creating pin for GPIO line {}", line))
}

pub(crate) const fn buffer_len() -> usize {
    (WIDTH / 2 * HEIGHT) as usize
}
