//! Vulkan capability report: instance version, layers, extensions and,
//! for every physical device, its properties, limits, extensions and features.

pub mod config;
pub mod logging;
pub mod report;
pub mod search;
pub mod vk;

use crate::config::ReportConfig;
use crate::report::CapabilityReporter;
use crate::vk::{AshApi, VulkanApi};

build_info::build_info!(pub fn get_build_info);

/// Renders the capability report of the system Vulkan implementation with
/// the default configuration. Never fails: problems become report lines.
pub fn get_vulkan_info_string() -> String {
    generate_report(&mut AshApi::new(), &ReportConfig::default())
}

pub fn generate_report<A: VulkanApi>(api: &mut A, config: &ReportConfig) -> String {
    CapabilityReporter::new(api, config).generate_report()
}
