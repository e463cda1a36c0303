/// Formats a packed Vulkan version as `MAJOR.MINOR.PATCH`.
///
/// Uses the classic `VK_VERSION_*` layout: 10 bits of major above bit 22,
/// 10 bits of minor and 12 bits of patch. Variant bits are not split off.
pub fn format_version(version: u32) -> String {
    let major = version >> 22;
    let minor = (version >> 12) & 0x3FF;
    let patch = version & 0xFFF;
    format!("{}.{}.{}", major, minor, patch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ash::vk;

    #[test]
    fn formats_packed_version() {
        assert_eq!(format_version(vk::make_api_version(0, 1, 2, 3)), "1.2.3");
        assert_eq!(format_version(vk::API_VERSION_1_0), "1.0.0");
        assert_eq!(format_version(0), "0.0.0");
    }

    #[test]
    fn keeps_large_patch_numbers() {
        assert_eq!(format_version(vk::make_api_version(0, 1, 3, 275)), "1.3.275");
        assert_eq!(format_version(vk::make_api_version(0, 1023, 1023, 4095)), "1023.1023.4095");
    }
}
