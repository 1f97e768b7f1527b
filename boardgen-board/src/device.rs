use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Logical device name (`LED1`, `BTN1`, `LCD`, ...) to wiring record, in
/// declaration order.
pub type DeviceMap = IndexMap<String, Device>;

/// Initial GPIO state of a pin when the firmware boots.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PinState {
    /// Floating input.
    #[default]
    In,
    /// Input with pull-up.
    InPullup,
    /// Input with pull-down.
    InPulldown,
    /// Push-pull output.
    Out,
    /// Open-drain output.
    OutOpendrain,
}

/// An in-built peripheral and the pins it is wired to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Device {
    /// A status LED.
    Led {
        /// The pin driving the LED.
        pin: String,
    },
    /// A user button.
    Button {
        /// The pin the button is wired to.
        pin: String,
        /// True if the pin reads low while the button is pressed.
        #[serde(default)]
        inverted: bool,
        /// Pull configuration applied at boot.
        #[serde(default)]
        pinstate: PinState,
    },
    /// An SPI-attached LCD panel.
    Lcd {
        /// Panel width in pixels.
        width: u32,
        /// Panel height in pixels.
        height: u32,
        /// Bits per pixel.
        bpp: u8,
        /// Controller IC, e.g. `st7789v`.
        controller: String,
        /// Data/command select pin.
        pin_dc: String,
        /// Chip select pin.
        pin_cs: String,
        /// Reset pin.
        pin_rst: String,
        /// SPI clock pin.
        pin_sck: String,
        /// SPI data pin.
        pin_mosi: String,
        /// Backlight pin.
        pin_bl: String,
        /// The SPI bus the panel hangs off, e.g. `EV_SPI1`.
        spi_device: String,
    },
    /// An SD card slot.
    SdCard {
        /// Chip select pin.
        pin_cs: String,
        /// Data-in (card side) pin.
        pin_di: String,
        /// Data-out (card side) pin.
        pin_do: String,
        /// Clock pin.
        pin_clk: String,
    },
    /// Battery voltage sense.
    Battery {
        /// The ADC-capable pin the divider is wired to.
        pin_voltage: String,
    },
}

impl Device {
    /// Every pin name this device references.
    pub fn pins(&self) -> Vec<&str> {
        match self {
            Device::Led { pin } => vec![pin],
            Device::Button { pin, .. } => vec![pin],
            Device::Lcd {
                pin_dc,
                pin_cs,
                pin_rst,
                pin_sck,
                pin_mosi,
                pin_bl,
                ..
            } => vec![pin_dc, pin_cs, pin_rst, pin_sck, pin_mosi, pin_bl],
            Device::SdCard {
                pin_cs,
                pin_di,
                pin_do,
                pin_clk,
            } => vec![pin_cs, pin_di, pin_do, pin_clk],
            Device::Battery { pin_voltage } => vec![pin_voltage],
        }
    }

    /// For devices bound to a named SPI bus: the bus instance (`SPI1`) and
    /// the pins that must carry its clock and data capabilities.
    pub fn spi_bus(&self) -> Option<SpiBinding<'_>> {
        match self {
            Device::Lcd {
                spi_device,
                pin_sck,
                pin_mosi,
                ..
            } => Some(SpiBinding {
                bus: spi_device.strip_prefix("EV_").unwrap_or(spi_device),
                pin_sck,
                pin_mosi,
            }),
            _ => None,
        }
    }
}

/// The SPI bus requirement a device places on its pins.
#[derive(Debug, Copy, Clone)]
pub struct SpiBinding<'a> {
    /// Bus instance name, e.g. `SPI1`.
    pub bus: &'a str,
    /// The pin that must carry `<bus>_SCK`.
    pub pin_sck: &'a str,
    /// The pin that must carry `<bus>_MOSI`.
    pub pin_mosi: &'a str,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn button_deserializes_with_defaults() {
        let device: Device = serde_yaml::from_str("!Button\npin: D0\n").unwrap();
        assert_eq!(
            device,
            Device::Button {
                pin: "D0".into(),
                inverted: false,
                pinstate: PinState::In,
            }
        );
    }

    #[test]
    fn pinstate_uses_firmware_spelling() {
        let state: PinState = serde_yaml::from_str("IN_PULLUP").unwrap();
        assert_eq!(state, PinState::InPullup);
    }

    #[test]
    fn lcd_reports_all_wired_pins() {
        let lcd = Device::Lcd {
            width: 240,
            height: 135,
            bpp: 16,
            controller: "st7789v".into(),
            pin_dc: "D34".into(),
            pin_cs: "D37".into(),
            pin_rst: "D33".into(),
            pin_sck: "D36".into(),
            pin_mosi: "D35".into(),
            pin_bl: "D38".into(),
            spi_device: "EV_SPI1".into(),
        };
        assert_eq!(lcd.pins(), ["D34", "D37", "D33", "D36", "D35", "D38"]);
        let binding = lcd.spi_bus().unwrap();
        assert_eq!(binding.bus, "SPI1");
        assert_eq!(binding.pin_sck, "D36");
    }
}
