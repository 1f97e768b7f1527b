use anyhow::{bail, Context, Result};
use boardgen::Registry;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(about = "Inspect and validate microcontroller board descriptions.")]
struct Cli {
    /// Additional board description files to register before running the
    /// command.
    #[arg(long = "board", global = true, value_name = "FILE")]
    boards: Vec<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the names of all registered boards.
    List,
    /// Show the chip and build summary of one board.
    Info {
        /// Board name, e.g. CARDPUTER.
        board: String,
    },
    /// Print the resolved pin table of one board.
    Pins {
        /// Board name, e.g. CARDPUTER.
        board: String,
    },
    /// Load board description files and report validation errors.
    Validate {
        /// Board description files to check.
        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut registry = Registry::from_builtin_boards();
    for path in &cli.boards {
        registry
            .add_board_from_yaml(path)
            .with_context(|| format!("failed to register {}", path.display()))?;
    }

    match cli.command {
        Command::List => {
            for board in registry.boards() {
                println!("{}", board.info.name);
            }
        }
        Command::Info { board } => {
            let board = registry.get_board(&board)?;
            let info = board.info();
            let chip = board.chip();

            println!("{}", info.name);
            println!(
                "  chip:       {} ({}, {}), {} MHz",
                chip.part, chip.family, chip.package, chip.speed
            );
            println!("  memory:     {} KB RAM, {} KB flash", chip.ram, chip.flash);
            println!(
                "  saved code: {:#x}..{:#x} ({} KB firmware budget)",
                chip.saved_code.range().start,
                chip.saved_code.range().end,
                chip.saved_code.flash_available
            );
            println!(
                "  console:    {} @ {} baud",
                info.default_console, info.default_console_baudrate
            );
            println!("  binary:     {}", info.binary_name);
            println!("  libraries:  {}", info.build.libraries.join(", "));
            for (name, device) in board.devices() {
                println!("  device {name}: pins {}", device.pins().join(", "));
            }
        }
        Command::Pins { board } => {
            let board = registry.get_board(&board)?;
            for pin in board.get_pins()?.pins() {
                let functions = pin
                    .functions
                    .iter()
                    .map(|(function, value)| format!("{function}={value}"))
                    .collect::<Vec<_>>()
                    .join(" ");
                println!("{:>4}  {}", pin.name, functions);
            }
        }
        Command::Validate { files } => {
            let mut failures = 0usize;
            for path in &files {
                match registry.add_board_from_yaml(path) {
                    Ok(()) => println!("{}: ok", path.display()),
                    Err(error) => {
                        failures += 1;
                        println!("{}: {:#}", path.display(), anyhow::Error::from(error));
                    }
                }
            }
            if failures > 0 {
                bail!("{failures} of {} board description(s) invalid", files.len());
            }
        }
    }

    Ok(())
}
