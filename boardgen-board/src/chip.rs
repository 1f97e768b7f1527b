use crate::memory::MemoryRange as _;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// The chip a board variant carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChipInfo {
    /// Part number, e.g. `ESP32S3`.
    pub part: String,
    /// Silicon family, e.g. `ESP32_IDF4`. Selects the toolchain port.
    pub family: String,
    /// Package type, e.g. `QFN56`.
    pub package: String,
    /// RAM size in KB.
    pub ram: u32,
    /// Flash size in KB.
    pub flash: u32,
    /// Clock speed in MHz.
    pub speed: u32,
    /// Number of UART peripherals.
    pub usart: u8,
    /// Number of SPI peripherals.
    pub spi: u8,
    /// Number of I2C peripherals.
    pub i2c: u8,
    /// Number of ADC peripherals.
    pub adc: u8,
    /// Number of DAC peripherals.
    pub dac: u8,
    /// The flash region reserved for saved user code.
    pub saved_code: SavedCodeRegion,
}

impl ChipInfo {
    /// The whole flash as an offset range.
    pub fn flash_range(&self) -> Range<u64> {
        0..u64::from(self.flash) * 1024
    }

    /// The region the firmware image may occupy, starting at offset 0.
    pub fn firmware_range(&self) -> Range<u64> {
        0..u64::from(self.saved_code.flash_available) * 1024
    }

    /// Physical GPIO index range for chip parts we know the pinout of.
    /// Returns `None` for parts the schema has no knowledge about.
    pub fn gpio_span(&self) -> Option<(u8, u8)> {
        match self.part.as_str() {
            "ESP32S3" => Some((0, 48)),
            "ESP32" => Some((0, 39)),
            "ESP32C3" => Some((0, 21)),
            _ => None,
        }
    }

    /// Checks that the saved-code region lies inside the flash and stays
    /// clear of the firmware image region.
    pub(crate) fn validate_saved_code(&self) -> Result<(), String> {
        let saved = self.saved_code.range();

        if !self.flash_range().contains_range(&saved) {
            return Err(format!(
                "saved-code region {saved:#x?} does not fit in {} KB of flash",
                self.flash
            ));
        }

        if self.firmware_range().intersects_range(&saved) {
            return Err(format!(
                "saved-code region {saved:#x?} overlaps the {} KB firmware image region",
                self.saved_code.flash_available
            ));
        }

        Ok(())
    }
}

/// A reserved flash range used to persist compiled user code across power
/// cycles. Offsets are relative to the start of flash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SavedCodeRegion {
    /// Start offset of the region in flash.
    #[serde(
        serialize_with = "crate::serialize::hex_u_int",
        deserialize_with = "crate::serialize::hex_u_int_de"
    )]
    pub address: u32,
    /// Size of one erase page in bytes.
    pub page_size: u32,
    /// Number of pages the region spans.
    pub pages: u32,
    /// Firmware image budget in KB. The image and the saved-code region
    /// share the same flash, so the two must not overlap.
    pub flash_available: u32,
}

impl SavedCodeRegion {
    /// Total size of the region in bytes.
    pub fn size(&self) -> u64 {
        u64::from(self.pages) * u64::from(self.page_size)
    }

    /// The region as an offset range.
    pub fn range(&self) -> Range<u64> {
        u64::from(self.address)..u64::from(self.address) + self.size()
    }
}
