use crate::board::Board;
use boardgen_board::BoardDescriptor;

use std::fs::File;
use std::path::Path;

/// An error that occurred while working with the board registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// No registered board matches the requested name.
    #[error("board `{0}` was not found in the registry")]
    BoardNotFound(String),
    /// A board with this name is already registered. Two descriptions with
    /// the same name cannot both be built, so this aborts the load.
    #[error("board `{0}` is already registered")]
    DuplicateBoard(String),
    /// The description failed validation.
    #[error("board `{name}` failed validation: {reason}")]
    InvalidBoard {
        /// Name of the offending board.
        name: String,
        /// What the validator rejected.
        reason: String,
    },
    /// A board description file could not be read.
    #[error("could not read the board description file")]
    Io(#[from] std::io::Error),
    /// A board description file could not be deserialized.
    #[error("could not parse the board description file")]
    Yaml(#[from] serde_yaml::Error),
}

/// All the available board descriptions.
pub struct Registry {
    boards: Vec<BoardDescriptor>,
}

impl Registry {
    /// A registry seeded with the compiled-in board set.
    pub fn from_builtin_boards() -> Self {
        Registry {
            boards: crate::builtin::builtin_boards(),
        }
    }

    /// An empty registry, for callers that only work with external files.
    pub fn empty() -> Self {
        Registry { boards: Vec::new() }
    }

    /// The raw descriptors, in registration order.
    pub fn boards(&self) -> &[BoardDescriptor] {
        &self.boards
    }

    /// Registers a descriptor after validating it. Duplicate board names
    /// are fatal rather than last-one-wins: a silently shadowed board would
    /// produce firmware for the wrong hardware.
    pub fn add_board(&mut self, descriptor: BoardDescriptor) -> Result<(), RegistryError> {
        let name = &descriptor.info.name;

        if self
            .boards
            .iter()
            .any(|board| board.info.name.eq_ignore_ascii_case(name))
        {
            return Err(RegistryError::DuplicateBoard(name.clone()));
        }

        descriptor
            .validate()
            .map_err(|reason| RegistryError::InvalidBoard {
                name: name.clone(),
                reason,
            })?;

        tracing::debug!("registered board {}", name);
        self.boards.push(descriptor);
        Ok(())
    }

    /// Reads a board description from a YAML file and registers it.
    pub fn add_board_from_yaml(&mut self, path: &Path) -> Result<(), RegistryError> {
        let file = File::open(path)?;
        let descriptor: BoardDescriptor = serde_yaml::from_reader(file)?;
        self.add_board(descriptor)
    }

    /// Resolves a board by name (case-insensitive) into a validated,
    /// render-ready [`Board`].
    pub fn get_board(&self, name: &str) -> Result<Board, RegistryError> {
        let descriptor = self
            .boards
            .iter()
            .find(|board| board.info.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| RegistryError::BoardNotFound(name.to_string()))?;

        Board::new(descriptor)
    }
}
