//! Board descriptions compiled into the registry.

pub(crate) mod cardputer;

use boardgen_board::BoardDescriptor;

/// Every compiled-in board, in registration order.
pub(crate) fn builtin_boards() -> Vec<BoardDescriptor> {
    vec![cardputer::board()]
}

#[cfg(test)]
mod tests {
    #[test]
    fn builtin_boards_validate() {
        for board in super::builtin_boards() {
            board
                .validate()
                .unwrap_or_else(|error| panic!("{}: {error}", board.info.name));
        }
    }

    #[test]
    fn builtin_board_names_are_unique() {
        let boards = super::builtin_boards();
        for (i, board) in boards.iter().enumerate() {
            assert!(
                !boards[..i]
                    .iter()
                    .any(|other| other.info.name.eq_ignore_ascii_case(&board.info.name)),
                "duplicate builtin board name {}",
                board.info.name
            );
        }
    }
}
