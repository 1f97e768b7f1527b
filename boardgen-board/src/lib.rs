//! Board description schema
//!
//! A board description declares everything the firmware build and the
//! documentation generator need to know about one hardware variant: the
//! chip it carries, how much flash is set aside for saved user code, which
//! peripherals are wired to which pins, and how the pins are arranged on
//! the physical board for the pinout diagrams.
//!
//! This crate contains the schema structs for the YAML board description
//! files, together with the load-time validation and the pin-table
//! generator. It performs no I/O of its own.
#![warn(missing_docs)]

mod board_info;
mod chip;
mod descriptor;
mod device;
mod layout;
mod memory;
mod pins;
pub(crate) mod serialize;

pub use board_info::{BoardInfo, BuildConfig, KNOWN_LIBRARIES};
pub use chip::{ChipInfo, SavedCodeRegion};
pub use descriptor::BoardDescriptor;
pub use device::{Device, DeviceMap, PinState, SpiBinding};
pub use layout::PhysicalLayout;
pub use memory::MemoryRange;
pub use pins::{Pin, PinOverride, PinSpec, PinTable};
