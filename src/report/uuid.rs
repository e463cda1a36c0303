use ash::vk;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UuidStyle {
    /// Byte-for-byte compatible with earlier vkinfo reports: the
    /// low nibble per byte with letters counted from `'A' + value`, followed by
    /// an always-zero digit from shifting a byte by 8 bits.
    #[default]
    Legacy,
    /// Two uppercase hex digits per byte, high nibble first.
    Canonical,
}

fn legacy_digit(value: u8) -> char {
    if value < 10 {
        char::from(b'0' + value)
    } else {
        char::from(b'A' + value)
    }
}

pub fn format_pipeline_cache_uuid(uuid: &[u8; vk::UUID_SIZE], style: UuidStyle) -> String {
    let mut text = String::with_capacity(2 + 2 * vk::UUID_SIZE);
    text.push_str("0x");
    for &byte in uuid {
        match style {
            UuidStyle::Legacy => {
                text.push(legacy_digit(byte & 0xF));
                text.push(legacy_digit(((u32::from(byte) >> 8) & 0xF) as u8));
            }
            UuidStyle::Canonical => text.push_str(&format!("{:02X}", byte)),
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    const UUID: [u8; vk::UUID_SIZE] = [
        0x00, 0x01, 0x09, 0x0A, 0x0F, 0x10, 0xAB, 0xFF, 0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC, 0xDE,
        0xF0,
    ];

    #[test]
    fn legacy_matches_historic_output() {
        assert_eq!(
            format_pipeline_cache_uuid(&UUID, UuidStyle::Legacy),
            "0x001090K0P000L0P020406080K0M0O000"
        );
    }

    #[test]
    fn canonical_is_plain_hex() {
        assert_eq!(
            format_pipeline_cache_uuid(&UUID, UuidStyle::Canonical),
            "0x0001090A0F10ABFF123456789ABCDEF0"
        );
    }

    #[test]
    fn zeroed_uuid() {
        let zero = [0u8; vk::UUID_SIZE];
        let expected = format!("0x{}", "0".repeat(32));
        assert_eq!(format_pipeline_cache_uuid(&zero, UuidStyle::Legacy), expected);
        assert_eq!(format_pipeline_cache_uuid(&zero, UuidStyle::Canonical), expected);
    }
}
