use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One physical GPIO pin and the capabilities that can be bound to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pin {
    /// Pin name, `D<index>`.
    pub name: String,
    /// Physical GPIO index.
    pub index: u8,
    /// Capability name (e.g. `SPI1_SCK`) to priority/selector value, in
    /// assignment order.
    #[serde(default)]
    pub functions: IndexMap<String, u8>,
}

/// A board-specific capability annotation applied on top of the generic
/// chip-family pin table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PinOverride {
    /// Name of the pin to annotate. Must exist in the generated table.
    pub pin: String,
    /// Capability to assign, e.g. `I2C1_SDA`.
    pub function: String,
    /// Priority/selector value for the capability.
    #[serde(default)]
    pub value: u8,
}

/// The pin-table recipe of a board: the physical GPIO index range of the
/// chip plus the board's capability overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PinSpec {
    /// First physical GPIO index.
    pub first: u8,
    /// Last physical GPIO index, inclusive.
    pub last: u8,
    /// Capability overrides applied to the generated table, in order.
    #[serde(default)]
    pub overrides: Vec<PinOverride>,
}

/// The full set of physical pin descriptors for a chip, with capability
/// assignments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinTable {
    pins: Vec<Pin>,
}

impl PinTable {
    /// Generates the default table for a contiguous physical GPIO index
    /// range: one pin per index, no capabilities assigned yet.
    pub fn generate(first: u8, last: u8) -> Self {
        let pins = (first..=last)
            .map(|index| Pin {
                name: format!("D{index}"),
                index,
                functions: IndexMap::new(),
            })
            .collect();

        PinTable { pins }
    }

    /// All pins, in index order.
    pub fn pins(&self) -> &[Pin] {
        &self.pins
    }

    /// Looks a pin up by name.
    pub fn find_pin(&self, name: &str) -> Option<&Pin> {
        self.pins.iter().find(|pin| pin.name == name)
    }

    /// Applies board-specific capability overrides, producing the final
    /// table. A name that does not resolve is a fatal configuration error:
    /// skipping it would wire the generated firmware incorrectly.
    pub fn apply_overrides(mut self, overrides: &[PinOverride]) -> Result<PinTable, String> {
        for over in overrides {
            let Some(pin) = self.pins.iter_mut().find(|pin| pin.name == over.pin) else {
                return Err(format!(
                    "pin override `{}` -> `{}` references a pin that is not in the table",
                    over.pin, over.function
                ));
            };

            pin.functions.insert(over.function.clone(), over.value);
        }

        Ok(self)
    }
}

impl PinSpec {
    /// Generates the chip-family default table and applies this board's
    /// overrides.
    pub fn build_table(&self) -> Result<PinTable, String> {
        PinTable::generate(self.first, self.last).apply_overrides(&self.overrides)
    }
}
