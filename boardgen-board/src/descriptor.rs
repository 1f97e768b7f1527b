use crate::board_info::BoardInfo;
use crate::chip::ChipInfo;
use crate::device::DeviceMap;
use crate::layout::PhysicalLayout;
use crate::pins::{PinSpec, PinTable};

use serde::{Deserialize, Serialize};

/// A complete description of one board variant.
///
/// This struct is usually read from a board description file. It has a
/// single lifecycle state: constructed once, validated, and read-only from
/// then on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoardDescriptor {
    /// Board identity and build configuration.
    pub info: BoardInfo,
    /// The chip the board carries.
    pub chip: ChipInfo,
    /// In-built peripherals and their wiring.
    #[serde(default)]
    pub devices: DeviceMap,
    /// Physical layouts for the pinout diagrams, in datasheet order.
    #[serde(default)]
    pub boards: Vec<PhysicalLayout>,
    /// Pin-table recipe for the chip.
    pub pins: PinSpec,
}

impl BoardDescriptor {
    /// Generates a fresh pin table: chip-family defaults for the board's
    /// GPIO range with the board-specific overrides applied. Deterministic
    /// and free of shared state; repeated calls yield structurally
    /// identical tables.
    pub fn get_pins(&self) -> Result<PinTable, String> {
        self.pins.build_table()
    }

    /// Validates the descriptor such that consumers can make assumptions
    /// about its correctness without validating thereafter.
    ///
    /// This method should be called right after the descriptor is loaded.
    /// Every failure here is fatal: generating firmware from an incomplete
    /// or miswired description is worse than aborting the build.
    pub fn validate(&self) -> Result<(), String> {
        self.info.build.validate_libraries()?;
        self.info.build.validate_makefile()?;
        self.chip.validate_saved_code()?;
        self.ensure_pin_range_matches_chip()?;

        let table = self.get_pins()?;
        self.ensure_device_pins_exist(&table)?;
        self.ensure_bus_capabilities(&table)?;

        Ok(())
    }

    /// For chip parts with a known pinout, the declared GPIO range must
    /// cover exactly the physical pins. A mismatch means the description
    /// was copied from a different chip.
    fn ensure_pin_range_matches_chip(&self) -> Result<(), String> {
        let Some((first, last)) = self.chip.gpio_span() else {
            return Ok(());
        };

        if (self.pins.first, self.pins.last) != (first, last) {
            return Err(format!(
                "pin range D{}..D{} does not match the D{first}..D{last} GPIO range of {}",
                self.pins.first, self.pins.last, self.chip.part
            ));
        }

        Ok(())
    }

    /// Every pin a device references must resolve in the pin table.
    fn ensure_device_pins_exist(&self, table: &PinTable) -> Result<(), String> {
        for (name, device) in &self.devices {
            for pin in device.pins() {
                if table.find_pin(pin).is_none() {
                    return Err(format!(
                        "device `{name}` references pin `{pin}` which is not in the pin table"
                    ));
                }
            }
        }

        Ok(())
    }

    /// A device bound to a named SPI bus requires the matching clock and
    /// data capabilities on its pins, and no capability of a different bus
    /// instance may claim the same role there.
    fn ensure_bus_capabilities(&self, table: &PinTable) -> Result<(), String> {
        for (name, device) in &self.devices {
            let Some(binding) = device.spi_bus() else {
                continue;
            };

            for (pin_name, role) in [(binding.pin_sck, "SCK"), (binding.pin_mosi, "MOSI")] {
                let required = format!("{}_{role}", binding.bus);
                let pin = table
                    .find_pin(pin_name)
                    .ok_or_else(|| format!("device `{name}` references unknown pin `{pin_name}`"))?;

                if !pin.functions.contains_key(&required) {
                    return Err(format!(
                        "device `{name}` needs `{required}` on pin `{pin_name}`, \
                         but the pin table does not assign it"
                    ));
                }

                let suffix = format!("_{role}");
                for function in pin.functions.keys() {
                    if function.ends_with(&suffix) && *function != required {
                        return Err(format!(
                            "pin `{pin_name}` carries `{function}` which conflicts with \
                             `{required}` required by device `{name}`"
                        ));
                    }
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::board_info::BuildConfig;
    use crate::chip::SavedCodeRegion;
    use crate::device::Device;
    use crate::pins::PinOverride;

    fn descriptor() -> BoardDescriptor {
        let mut devices = DeviceMap::new();
        devices.insert("LED1".to_string(), Device::Led { pin: "D2".into() });
        devices.insert(
            "LCD".to_string(),
            Device::Lcd {
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
            },
        );

        BoardDescriptor {
            info: BoardInfo {
                name: "TESTBOARD".into(),
                page_link: String::new(),
                default_console: "EV_SERIAL1".into(),
                default_console_baudrate: 115200,
                variables: 16383,
                io_buffer_size: 4096,
                binary_name: "firmware_%v_testboard.bin".into(),
                build: BuildConfig {
                    optimize_flags: "-Og".into(),
                    libraries: vec!["GRAPHICS".into()],
                    makefile: vec!["DEFINES+=-DESP_PLATFORM".into()],
                },
            },
            chip: ChipInfo {
                part: "ESP32S3".into(),
                family: "ESP32_IDF4".into(),
                package: "QFN56".into(),
                ram: 512,
                flash: 8192,
                speed: 240,
                usart: 3,
                spi: 2,
                i2c: 2,
                adc: 2,
                dac: 0,
                saved_code: SavedCodeRegion {
                    address: 0x32_0000,
                    page_size: 4096,
                    pages: 224,
                    flash_available: 1344,
                },
            },
            devices,
            boards: vec![],
            pins: PinSpec {
                first: 0,
                last: 48,
                overrides: vec![
                    PinOverride {
                        pin: "D36".into(),
                        function: "SPI1_SCK".into(),
                        value: 0,
                    },
                    PinOverride {
                        pin: "D35".into(),
                        function: "SPI1_MOSI".into(),
                        value: 0,
                    },
                ],
            },
        }
    }

    #[test]
    fn valid_descriptor_passes() {
        assert!(descriptor().validate().is_ok());
    }

    #[test]
    fn device_with_unknown_pin_is_rejected() {
        let mut descriptor = descriptor();
        descriptor
            .devices
            .insert("BTN1".to_string(), Device::Led { pin: "D99".into() });
        let error = descriptor.validate().unwrap_err();
        assert!(error.contains("BTN1"));
        assert!(error.contains("D99"));
    }

    #[test]
    fn unknown_library_is_rejected() {
        let mut descriptor = descriptor();
        descriptor.info.build.libraries.push("QUANTUM".into());
        assert!(descriptor.validate().is_err());
    }

    #[test]
    fn missing_bus_capability_is_rejected() {
        let mut descriptor = descriptor();
        descriptor.pins.overrides.clear();
        let error = descriptor.validate().unwrap_err();
        assert!(error.contains("SPI1_SCK"));
    }

    #[test]
    fn conflicting_bus_capability_is_rejected() {
        let mut descriptor = descriptor();
        descriptor.pins.overrides.push(PinOverride {
            pin: "D36".into(),
            function: "SPI2_SCK".into(),
            value: 0,
        });
        let error = descriptor.validate().unwrap_err();
        assert!(error.contains("SPI2_SCK"));
    }

    #[test]
    fn pin_range_must_match_known_chip() {
        let mut descriptor = descriptor();
        descriptor.pins.last = 39;
        let error = descriptor.validate().unwrap_err();
        assert!(error.contains("ESP32S3"));
    }
}
