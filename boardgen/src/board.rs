use crate::registry::RegistryError;
use boardgen_board::{BoardDescriptor, BoardInfo, ChipInfo, DeviceMap, PhysicalLayout, PinTable};

/// A resolved board: validated, with the physical layouts flipped into the
/// renderer's reading order. Read-only once constructed.
#[derive(Debug, Clone)]
pub struct Board {
    descriptor: BoardDescriptor,
}

impl Board {
    /// Validates a descriptor and freezes it into a queryable board. The
    /// datasheet-ordered `bottom` and `right` layout rows are reversed
    /// here, exactly once.
    pub(crate) fn new(descriptor: &BoardDescriptor) -> Result<Board, RegistryError> {
        descriptor
            .validate()
            .map_err(|reason| RegistryError::InvalidBoard {
                name: descriptor.info.name.clone(),
                reason,
            })?;

        let mut descriptor = descriptor.clone();
        for layout in &mut descriptor.boards {
            layout.reverse_for_render();
        }

        Ok(Board { descriptor })
    }

    /// Board identity and build configuration.
    pub fn info(&self) -> &BoardInfo {
        &self.descriptor.info
    }

    /// The chip the board carries.
    pub fn chip(&self) -> &ChipInfo {
        &self.descriptor.chip
    }

    /// In-built peripherals and their wiring.
    pub fn devices(&self) -> &DeviceMap {
        &self.descriptor.devices
    }

    /// Physical layouts, in render order.
    pub fn boards(&self) -> &[PhysicalLayout] {
        &self.descriptor.boards
    }

    /// Generates the board's pin table. Validation has already proven the
    /// overrides apply, so this only fails if the descriptor was mutated
    /// behind our back, which the API does not allow.
    pub fn get_pins(&self) -> Result<PinTable, RegistryError> {
        self.descriptor
            .get_pins()
            .map_err(|reason| RegistryError::InvalidBoard {
                name: self.descriptor.info.name.clone(),
                reason,
            })
    }
}

#[cfg(test)]
mod tests {
    use crate::registry::Registry;

    #[test]
    fn layouts_come_out_in_render_order() {
        let raw = crate::builtin::cardputer::board();
        let board = Registry::from_builtin_boards().get_board("CARDPUTER").unwrap();

        let datasheet = &raw.boards[0];
        let rendered = &board.boards()[0];

        assert_eq!(rendered.top, datasheet.top);
        assert_eq!(
            rendered.bottom,
            datasheet.bottom.iter().rev().cloned().collect::<Vec<_>>()
        );
        assert_eq!(
            rendered.right,
            datasheet.right.iter().rev().cloned().collect::<Vec<_>>()
        );
    }

    #[test]
    fn cardputer_lcd_chip_select_resolves() {
        let board = Registry::from_builtin_boards().get_board("CARDPUTER").unwrap();
        let pins = board.get_pins().unwrap();

        assert_eq!(pins.pins().len(), 49);

        let Some(boardgen_board::Device::Lcd { pin_cs, .. }) = board.devices().get("LCD") else {
            panic!("CARDPUTER has no LCD device");
        };
        assert!(pins.find_pin(pin_cs).is_some());

        let sck = pins.find_pin("D36").unwrap();
        assert_eq!(sck.index, 36);
        assert!(sck.functions.contains_key("SPI1_SCK"));
    }

    #[test]
    fn pin_table_is_deterministic() {
        let board = Registry::from_builtin_boards().get_board("CARDPUTER").unwrap();
        assert_eq!(board.get_pins().unwrap(), board.get_pins().unwrap());
    }
}
