//! ILI9341 TFT Display Driver
//!
//! Driver for 320x240 ILI9341 panels over a write-only SPI bus, in
//! landscape orientation with 16-bit RGB565 color. There is no frame
//! buffer: every fill goes straight to panel RAM through an address
//! window, which suits large solid segments.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

use crate::layout::raw;

/// Display dimensions (landscape)
pub const WIDTH: u16 = 320;
pub const HEIGHT: u16 = 240;

/// Pixels per SPI burst when streaming a solid fill
const CHUNK_PIXELS: usize = 32;

/// ILI9341 commands
mod cmd {
    pub const SOFT_RESET: u8 = 0x01;
    pub const SLEEP_OUT: u8 = 0x11;
    pub const DISPLAY_ON: u8 = 0x29;
    pub const COLUMN_ADDR: u8 = 0x2A;
    pub const PAGE_ADDR: u8 = 0x2B;
    pub const MEMORY_WRITE: u8 = 0x2C;
    pub const MEMORY_ACCESS: u8 = 0x36;
    pub const PIXEL_FORMAT: u8 = 0x3A;
    pub const FRAME_RATE: u8 = 0xB1;
    pub const DISPLAY_FUNCTION: u8 = 0xB6;
    pub const POWER_1: u8 = 0xC0;
    pub const POWER_2: u8 = 0xC1;
    pub const VCOM_1: u8 = 0xC5;
    pub const VCOM_2: u8 = 0xC7;
}

/// Memory access control: row/column exchange, BGR order
const MADCTL_LANDSCAPE: u8 = 0x28;
/// 16 bits per pixel
const PIXEL_FORMAT_RGB565: u8 = 0x55;

/// Driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// SPI transfer failed
    Spi,
    /// Control pin could not be driven
    Pin,
}

/// ILI9341 driver
pub struct Ili9341<SPI, DC, CS> {
    spi: SPI,
    /// Data/command select: low for commands
    dc: DC,
    cs: CS,
}

impl<SPI, DC, CS> Ili9341<SPI, DC, CS>
where
    SPI: SpiBus,
    DC: OutputPin,
    CS: OutputPin,
{
    /// Create a new driver; call [`init`](Self::init) before drawing
    pub fn new(spi: SPI, dc: DC, cs: CS) -> Self {
        Self { spi, dc, cs }
    }

    /// Hardware reset and initialization sequence
    pub fn init<RST, D>(&mut self, rst: &mut RST, delay: &mut D) -> Result<(), Error>
    where
        RST: OutputPin,
        D: DelayNs,
    {
        self.cs.set_high().map_err(|_| Error::Pin)?;
        rst.set_high().map_err(|_| Error::Pin)?;
        delay.delay_ms(5);
        rst.set_low().map_err(|_| Error::Pin)?;
        delay.delay_ms(20);
        rst.set_high().map_err(|_| Error::Pin)?;
        delay.delay_ms(150);

        self.command(cmd::SOFT_RESET, &[])?;
        delay.delay_ms(120);

        let init_cmds: &[(u8, &[u8])] = &[
            (cmd::POWER_1, &[0x23]),
            (cmd::POWER_2, &[0x10]),
            (cmd::VCOM_1, &[0x3E, 0x28]),
            (cmd::VCOM_2, &[0x86]),
            (cmd::MEMORY_ACCESS, &[MADCTL_LANDSCAPE]),
            (cmd::PIXEL_FORMAT, &[PIXEL_FORMAT_RGB565]),
            (cmd::FRAME_RATE, &[0x00, 0x18]), // 79 Hz
            (cmd::DISPLAY_FUNCTION, &[0x08, 0x82, 0x27]),
        ];

        for (c, params) in init_cmds {
            self.command(*c, params)?;
        }

        self.command(cmd::SLEEP_OUT, &[])?;
        delay.delay_ms(120);
        self.command(cmd::DISPLAY_ON, &[])?;

        Ok(())
    }

    /// Send a command followed by its parameters
    fn command(&mut self, cmd: u8, params: &[u8]) -> Result<(), Error> {
        self.cs.set_low().map_err(|_| Error::Pin)?;
        let result = self.command_selected(cmd, params);
        self.cs.set_high().map_err(|_| Error::Pin)?;
        result
    }

    fn command_selected(&mut self, cmd: u8, params: &[u8]) -> Result<(), Error> {
        self.dc.set_low().map_err(|_| Error::Pin)?;
        self.spi.write(&[cmd]).map_err(|_| Error::Spi)?;
        if !params.is_empty() {
            self.dc.set_high().map_err(|_| Error::Pin)?;
            self.spi.write(params).map_err(|_| Error::Spi)?;
        }
        self.spi.flush().map_err(|_| Error::Spi)
    }

    /// Restrict memory writes to an inclusive pixel window
    fn set_window(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) -> Result<(), Error> {
        let [x0h, x0l] = x0.to_be_bytes();
        let [x1h, x1l] = x1.to_be_bytes();
        let [y0h, y0l] = y0.to_be_bytes();
        let [y1h, y1l] = y1.to_be_bytes();
        self.command(cmd::COLUMN_ADDR, &[x0h, x0l, x1h, x1l])?;
        self.command(cmd::PAGE_ADDR, &[y0h, y0l, y1h, y1l])
    }

    /// Stream `count` pixels of one color into the current window
    fn write_repeated(&mut self, color: Rgb565, count: u32) -> Result<(), Error> {
        let [hi, lo] = raw(color).to_be_bytes();
        let mut chunk = [0u8; CHUNK_PIXELS * 2];
        for pair in chunk.chunks_exact_mut(2) {
            pair[0] = hi;
            pair[1] = lo;
        }

        self.cs.set_low().map_err(|_| Error::Pin)?;
        let result = self.stream_selected(&chunk, count as usize);
        self.cs.set_high().map_err(|_| Error::Pin)?;
        result
    }

    fn stream_selected(&mut self, chunk: &[u8], mut remaining: usize) -> Result<(), Error> {
        self.dc.set_low().map_err(|_| Error::Pin)?;
        self.spi.write(&[cmd::MEMORY_WRITE]).map_err(|_| Error::Spi)?;
        self.dc.set_high().map_err(|_| Error::Pin)?;

        while remaining > 0 {
            let n = remaining.min(chunk.len() / 2);
            self.spi.write(&chunk[..n * 2]).map_err(|_| Error::Spi)?;
            remaining -= n;
        }
        self.spi.flush().map_err(|_| Error::Spi)
    }
}

impl<SPI, DC, CS> OriginDimensions for Ili9341<SPI, DC, CS> {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl<SPI, DC, CS> DrawTarget for Ili9341<SPI, DC, CS>
where
    SPI: SpiBus,
    DC: OutputPin,
    CS: OutputPin,
{
    type Color = Rgb565;
    type Error = Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let bounds = self.bounding_box();
        for Pixel(point, color) in pixels {
            if !bounds.contains(point) {
                continue;
            }
            let (x, y) = (point.x as u16, point.y as u16);
            self.set_window(x, y, x, y)?;
            self.write_repeated(color, 1)?;
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        let Some(bottom_right) = area.bottom_right() else {
            return Ok(());
        };

        self.set_window(
            area.top_left.x as u16,
            area.top_left.y as u16,
            bottom_right.x as u16,
            bottom_right.y as u16,
        )?;
        self.write_repeated(color, area.size.width * area.size.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Event {
        Command(u8),
        Data(usize),
    }

    /// Records SPI traffic, split by the DC line
    #[derive(Default)]
    struct Bus {
        dc_high: bool,
        events: heapless::Vec<Event, 64>,
        data: heapless::Vec<u8, 64>,
    }

    struct MockSpi<'a>(&'a core::cell::RefCell<Bus>);
    struct MockDc<'a>(&'a core::cell::RefCell<Bus>);
    struct MockCs;

    impl embedded_hal::spi::ErrorType for MockSpi<'_> {
        type Error = Infallible;
    }

    impl SpiBus for MockSpi<'_> {
        fn read(&mut self, _words: &mut [u8]) -> Result<(), Infallible> {
            Ok(())
        }

        fn write(&mut self, words: &[u8]) -> Result<(), Infallible> {
            let mut bus = self.0.borrow_mut();
            if bus.dc_high {
                bus.events.push(Event::Data(words.len())).unwrap();
                for w in words {
                    let _ = bus.data.push(*w);
                }
            } else {
                bus.events.push(Event::Command(words[0])).unwrap();
            }
            Ok(())
        }

        fn transfer(&mut self, _read: &mut [u8], _write: &[u8]) -> Result<(), Infallible> {
            Ok(())
        }

        fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), Infallible> {
            Ok(())
        }

        fn flush(&mut self) -> Result<(), Infallible> {
            Ok(())
        }
    }

    impl embedded_hal::digital::ErrorType for MockDc<'_> {
        type Error = Infallible;
    }

    impl OutputPin for MockDc<'_> {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.0.borrow_mut().dc_high = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.0.borrow_mut().dc_high = true;
            Ok(())
        }
    }

    impl embedded_hal::digital::ErrorType for MockCs {
        type Error = Infallible;
    }

    impl OutputPin for MockCs {
        fn set_low(&mut self) -> Result<(), Infallible> {
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            Ok(())
        }
    }

    #[test]
    fn test_fill_sets_window_then_streams() {
        let bus = core::cell::RefCell::new(Bus::default());
        let mut lcd = Ili9341::new(MockSpi(&bus), MockDc(&bus), MockCs);

        let area = Rectangle::new(Point::new(10, 20), Size::new(8, 5));
        lcd.fill_solid(&area, Rgb565::RED).unwrap();

        let bus = bus.borrow();
        assert_eq!(
            bus.events[..],
            [
                Event::Command(cmd::COLUMN_ADDR),
                Event::Data(4),
                Event::Command(cmd::PAGE_ADDR),
                Event::Data(4),
                Event::Command(cmd::MEMORY_WRITE),
                Event::Data(CHUNK_PIXELS * 2),
                Event::Data((40 - CHUNK_PIXELS) * 2),
            ]
        );
        // Window 10..=17, 20..=24, then red pixels
        assert_eq!(bus.data[..8], [0, 10, 0, 17, 0, 20, 0, 24]);
        assert_eq!(bus.data[8..10], [0xF8, 0x00]);
    }

    #[test]
    fn test_fill_clipped_to_screen() {
        let bus = core::cell::RefCell::new(Bus::default());
        let mut lcd = Ili9341::new(MockSpi(&bus), MockDc(&bus), MockCs);

        let area = Rectangle::new(Point::new(316, 238), Size::new(10, 10));
        lcd.fill_solid(&area, Rgb565::BLACK).unwrap();
        assert_eq!(bus.borrow().data[..8], [1, 60, 1, 63, 0, 238, 0, 239]);

        bus.borrow_mut().events.clear();
        let off = Rectangle::new(Point::new(400, 0), Size::new(10, 10));
        lcd.fill_solid(&off, Rgb565::BLACK).unwrap();
        assert!(bus.borrow().events.is_empty());
    }
}
