//! Transport boundary and bus plumbing
//!
//! The rendering core never talks to hardware itself. At flush time it
//! hands the framebuffer bytes and the dirty [`Window`] to a [`Transport`]
//! implementation, which owns the controller-specific command sequence.
//!
//! For the SPI controllers this crate targets, every transport shares the
//! same low-level plumbing: a byte goes out either as a command (DC pin
//! low) or as data (DC pin high). [`Interface`] packages that split over
//! `embedded-hal` v1.0 traits so device crates only add their register
//! sets on top.
//!
//! ## Example
//!
//! ```rust,no_run
//! use monogfx::Interface;
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::OutputPin;
//! # use embedded_hal::spi::{Operation, SpiDevice};
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiDevice for MockSpi {
//! #     fn transaction(
//! #         &mut self,
//! #         _operations: &mut [Operation<'_, u8>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! let mut interface = Interface::new(MockSpi, MockPin);
//!
//! // Command byte, DC held low
//! let _ = interface.send_command(0x20);
//!
//! // Data bytes, DC held high
//! let _ = interface.send_data(&[0xFF, 0x00, 0xFF]);
//! ```

use core::fmt::Debug;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiDevice;

use crate::config::Dimensions;
use crate::framebuffer::Window;

pub use crate::error::InterfaceError;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Device-specific flush layer
///
/// Implementations receive the page-major framebuffer bytes, the dirty
/// window to push, and the surface dimensions needed to address the
/// buffer. [`Window::pages`] and [`Dimensions::page_span`] give the byte
/// ranges to stream; everything else (addressing commands, bus framing)
/// is the implementation's business.
///
/// [`Canvas::flush`](crate::canvas::Canvas::flush) only calls this with a
/// non-empty window, and resets the window after the call succeeds.
pub trait Transport {
    /// Error type for transport operations
    type Error: Debug;

    /// Push the dirty window of a frame to the device
    fn write_window(
        &mut self,
        frame: &[u8],
        window: Window,
        dimensions: Dimensions,
    ) -> InterfaceResult<(), Self::Error>;
}

/// SPI command/data plumbing shared by the supported controllers
///
/// ## Type Parameters
///
/// * `SPI` - SPI device implementing [`SpiDevice`] (chip select belongs to
///   the device, per embedded-hal v1.0)
/// * `DC` - Data/Command select pin implementing [`OutputPin`]
pub struct Interface<SPI, DC> {
    /// SPI device for communication
    spi: SPI,
    /// Data/Command select pin (low=command, high=data)
    dc: DC,
}

impl<SPI, DC, PinErr> Interface<SPI, DC>
where
    SPI: SpiDevice,
    SPI::Error: Debug,
    DC: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    /// Create a new Interface
    ///
    /// # Arguments
    ///
    /// * `spi` - SPI device (must implement [`SpiDevice`])
    /// * `dc` - Data/Command pin (output, low=command, high=data)
    pub fn new(spi: SPI, dc: DC) -> Self {
        Self { spi, dc }
    }

    /// Send a single command byte with DC low
    pub fn send_command(
        &mut self,
        command: u8,
    ) -> InterfaceResult<(), InterfaceError<SPI::Error, PinErr>> {
        self.dc.set_low().map_err(InterfaceError::Pin)?;
        self.spi.write(&[command]).map_err(InterfaceError::Spi)?;
        Ok(())
    }

    /// Send a sequence of command bytes, one bus write each
    pub fn send_commands(
        &mut self,
        commands: &[u8],
    ) -> InterfaceResult<(), InterfaceError<SPI::Error, PinErr>> {
        for command in commands {
            self.send_command(*command)?;
        }
        Ok(())
    }

    /// Send data bytes with DC high
    pub fn send_data(
        &mut self,
        data: &[u8],
    ) -> InterfaceResult<(), InterfaceError<SPI::Error, PinErr>> {
        self.dc.set_high().map_err(InterfaceError::Pin)?;
        self.spi.write(data).map_err(InterfaceError::Spi)?;
        Ok(())
    }

    /// Release the bus and pin
    pub fn release(self) -> (SPI, DC) {
        (self.spi, self.dc)
    }
}
