//! Cardputer: ESP32-S3 pocket computer with a keyboard, a 1.14" LCD and a
//! microSD slot. Graphics initialised as `g`, FAT filesystem via `fs`.

use boardgen_board::{
    BoardDescriptor, BoardInfo, BuildConfig, ChipInfo, Device, DeviceMap, PhysicalLayout,
    PinOverride, PinSpec, PinState, SavedCodeRegion,
};

fn ov(pin: &str, function: &str) -> PinOverride {
    PinOverride {
        pin: pin.to_string(),
        function: function.to_string(),
        value: 0,
    }
}

fn devices() -> DeviceMap {
    let mut devices = DeviceMap::new();

    devices.insert("LED1".to_string(), Device::Led { pin: "D2".into() });
    devices.insert(
        "BTN1".to_string(),
        Device::Button {
            pin: "D0".into(),
            inverted: true,
            pinstate: PinState::InPullup,
        },
    );
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
    devices.insert(
        "SD".to_string(),
        Device::SdCard {
            pin_cs: "D12".into(),
            pin_di: "D14".into(),
            pin_do: "D39".into(),
            pin_clk: "D40".into(),
        },
    );
    devices.insert(
        "BAT".to_string(),
        Device::Battery {
            pin_voltage: "D10".into(),
        },
    );

    devices
}

fn layout() -> PhysicalLayout {
    let row = |labels: &[&str]| labels.iter().map(|label| label.to_string()).collect();

    PhysicalLayout {
        top: row(&[
            "GND", "D23", "D22", "D1", "D3", "D21", "D20", "D19", "D18", "D5", "D17", "D16", "D4",
            "D0",
        ]),
        bottom: row(&[
            "D12", "D14", "D27", "D26", "D25", "D33", "D32", "D35", "D34", "D39", "D36", "EN",
            "3V3", "GND",
        ]),
        right: row(&[
            "GND", "D13", "D9", "D10", "D11", "D6", "D7", "D8", "D15", "D2",
        ]),
        css: r#"
#board {
  width:  600px;
  height: 435px;
  left: 50px;
  top: 170px;
  background-image: url(img/ESP32.jpg);
}
#boardcontainer {
  height: 700px;
}
#board #right {
  top: 80px;
  left: 600px;
}
#board #top {
  bottom: 440px;
  left: 155px;
}
#board #bottom  {
  top: 435px;
  left: 155px;
}
#board .rightpin {
  height: 28px;
}
#board .toppin, #board .bottompin {
  width: 24px;
}
"#
        .to_string(),
    }
}

/// The Cardputer board description.
pub(crate) fn board() -> BoardDescriptor {
    BoardDescriptor {
        info: BoardInfo {
            name: "CARDPUTER".into(),
            page_link: String::new(),
            default_console: "EV_SERIAL1".into(),
            default_console_baudrate: 115200,
            variables: 16383,
            io_buffer_size: 4096,
            binary_name: "espruino_%v_cardputer.bin".into(),
            build: BuildConfig {
                optimize_flags: "-Og".into(),
                libraries: [
                    "BLUETOOTH",
                    "CRYPTO",
                    "SHA256",
                    "SHA512",
                    "ESP32",
                    "FILESYSTEM",
                    "GRAPHICS",
                    "LCD_SPI_UNBUF",
                    "NEOPIXEL",
                    "NET",
                    "TELNET",
                    "TERMINAL",
                    "TLS",
                ]
                .map(String::from)
                .to_vec(),
                makefile: [
                    "DEFINES+=-DESP_PLATFORM -DESP32",
                    "DEFINES+=-DESP_STACK_SIZE=25000",
                    // Allocate variable space at interpreter init time.
                    "DEFINES+=-DJSVAR_MALLOC",
                    // The graphics subsystem instantiates itself.
                    "DEFINES+=-DESPR_GRAPHICS_INTERNAL -DESPR_GRAPHICS_SELF_INIT",
                    "DEFINES+=-DUSE_FONT_6X8 -DSPISENDMANY_BUFFER_SIZE=1600 -DLCD_SPI_BITRATE=55000000 -DESPR_TERMNINAL_NO_SCROLL",
                    "DEFINES+=-DUSE_LCD_SPI_UNBUF",
                    "DEFINES+=-DESPR_USE_USB_SERIAL_JTAG",
                    "ESP32_FLASH_MAX=1572864",
                ]
                .map(String::from)
                .to_vec(),
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
            // See the espruino partition table: 224 pages of 4k starting at
            // 0x320000, firmware image up to 1344 KB.
            saved_code: SavedCodeRegion {
                address: 0x32_0000,
                page_size: 4096,
                pages: 224,
                flash_available: 1344,
            },
        },
        devices: devices(),
        boards: vec![layout()],
        // The ESP32-S3 has 45 physical GPIOs numbered 0..21 and 26..48; the
        // table covers the whole index range.
        pins: PinSpec {
            first: 0,
            last: 48,
            overrides: vec![
                // I2C routing is user convention, not fixed by the chip.
                ov("D8", "I2C1_SDA"),
                ov("D9", "I2C1_SCL"),
                ov("D18", "I2C2_SDA"),
                ov("D19", "I2C2_SCL"),
                // SPI1 on the LCD wiring, plus the pins that bypass the GPIO
                // matrix (faster).
                ov("D36", "SPI1_SCK"),
                ov("D35", "SPI1_MOSI"),
                ov("D12", "SPI1_SCK"),
                ov("D13", "SPI1_MISO"),
                ov("D11", "SPI1_MOSI"),
                // SPI2 routing is decided by the user.
                ov("D4", "SPI2_SCK"),
                ov("D6", "SPI2_MISO"),
                ov("D7", "SPI2_MOSI"),
                ov("D43", "USART1_TX"),
                ov("D44", "USART1_RX"),
                ov("D17", "USART2_TX"),
                ov("D18", "USART2_RX"),
            ],
        },
    }
}
