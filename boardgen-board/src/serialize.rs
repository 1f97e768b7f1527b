use serde::de::{self, Visitor};
use serde::{Deserializer, Serializer};

/// Serializes a flash offset as a `0x`-prefixed string when the output
/// format is human readable (YAML, JSON), and as a plain integer otherwise.
pub(crate) fn hex_u_int<S>(value: &u32, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if serializer.is_human_readable() {
        serializer.serialize_str(format!("{value:#x}").as_str())
    } else {
        serializer.serialize_u32(*value)
    }
}

/// Accepts either an integer or a `0x`-prefixed string.
pub(crate) fn hex_u_int_de<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    struct HexVisitor;

    impl Visitor<'_> for HexVisitor {
        type Value = u32;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("an unsigned integer or a hex string like \"0x320000\"")
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<u32, E> {
            u32::try_from(value).map_err(|_| E::custom(format!("{value} does not fit in 32 bits")))
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<u32, E> {
            let parsed = if let Some(hex) = value.strip_prefix("0x").or(value.strip_prefix("0X")) {
                u32::from_str_radix(hex, 16)
            } else {
                value.parse()
            };
            parsed.map_err(|_| E::custom(format!("`{value}` is not a valid flash offset")))
        }
    }

    deserializer.deserialize_any(HexVisitor)
}
