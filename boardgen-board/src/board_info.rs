use serde::{Deserialize, Serialize};

/// Feature libraries the external build system knows how to link.
///
/// `BuildConfig::libraries` entries are checked against this list at load
/// time; an identifier outside of it would silently produce a firmware
/// without the requested feature.
pub const KNOWN_LIBRARIES: &[&str] = &[
    "BLUETOOTH",
    "CRYPTO",
    "DEBUGGER",
    "ESP32",
    "FILESYSTEM",
    "GRAPHICS",
    "LCD_SPI",
    "LCD_SPI_UNBUF",
    "NEOPIXEL",
    "NET",
    "SHA256",
    "SHA512",
    "TELNET",
    "TERMINAL",
    "TLS",
    "WIZNET",
];

/// Identity and sizing of one board variant.
///
/// This is the part of the description the firmware build consumes
/// directly: console wiring, interpreter capacity and the name of the
/// binary it produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoardInfo {
    /// Board name, e.g. `CARDPUTER`. Unique across the registry.
    pub name: String,
    /// Link to the board's documentation page, if it has one.
    #[serde(default)]
    pub page_link: String,
    /// The device the interpreter console starts on, e.g. `EV_SERIAL1`.
    pub default_console: String,
    /// Baud rate of the default console.
    pub default_console_baudrate: u32,
    /// Capacity of the interpreter variable table.
    pub variables: u32,
    /// Size of the input buffer in bytes.
    pub io_buffer_size: u32,
    /// Template for the output binary filename, e.g.
    /// `espruino_%v_cardputer.bin`.
    pub binary_name: String,
    /// Build-time configuration handed to the external build system.
    pub build: BuildConfig,
}

/// Build-time configuration: optimization, feature libraries and the raw
/// Makefile fragment lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    /// Compiler optimization flags, e.g. `-Og`.
    pub optimize_flags: String,
    /// Feature libraries to link. Each entry must appear in
    /// [`KNOWN_LIBRARIES`].
    pub libraries: Vec<String>,
    /// Makefile variable lines, e.g. `DEFINES+=-DESP_PLATFORM`.
    #[serde(default)]
    pub makefile: Vec<String>,
}

impl BuildConfig {
    /// Checks every library identifier against the closed set the build
    /// system understands.
    pub(crate) fn validate_libraries(&self) -> Result<(), String> {
        for library in &self.libraries {
            if !KNOWN_LIBRARIES.contains(&library.as_str()) {
                return Err(format!("unknown feature library `{library}`"));
            }
        }

        Ok(())
    }

    /// Checks that every makefile entry is a `VAR=VALUE` or `VAR+=VALUE`
    /// assignment. Anything else would be passed through to make verbatim
    /// and fail in a much less obvious place.
    pub(crate) fn validate_makefile(&self) -> Result<(), String> {
        for entry in &self.makefile {
            let Some((variable, _)) = entry.split_once('=') else {
                return Err(format!("makefile entry `{entry}` is not an assignment"));
            };

            let variable = variable.trim_end_matches('+');
            if variable.is_empty()
                || !variable
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_')
            {
                return Err(format!(
                    "makefile entry `{entry}` does not assign a valid variable"
                ));
            }
        }

        Ok(())
    }
}
