use crate::config::ReportConfig;
use crate::vk::{PropertyRecord, VulkanApi};
use ash::vk;
use log::{debug, info, warn};
use std::fmt;
use std::fmt::Write;

mod device;
pub mod features;
pub mod field;
pub mod limits;
pub mod uuid;
pub mod version;

pub use version::format_version;

/// Append-only, line oriented report text.
#[derive(Debug, Default)]
pub struct Report {
    text: String,
}

impl Report {
    pub fn line(&mut self, args: fmt::Arguments) {
        // Writing into a String cannot fail
        let _ = self.text.write_fmt(args);
        self.text.push('\n');
    }

    pub fn into_text(self) -> String {
        self.text
    }

    /// Writes a section header followed by one `\t<name> (<version>)` line per
    /// record, or a diagnostic line if the query failed.
    fn property_section(
        &mut self,
        header: &str,
        what: &str,
        records: anyhow::Result<Vec<PropertyRecord>>,
    ) {
        self.line(format_args!("{}", header));
        match records {
            Ok(records) => {
                debug!("Found {} {}", records.len(), what);
                for record in records {
                    self.line(format_args!(
                        "\t{} ({})",
                        record.name,
                        format_version(record.version)
                    ));
                }
            }
            Err(err) => {
                warn!("Failed to enumerate {}: {:#}", what, err);
                self.line(format_args!("\tFailed to enumerate {}: {:#}", what, err));
            }
        }
    }
}

/// Walks one Vulkan implementation from loader to physical devices and
/// renders everything it reports.
pub struct CapabilityReporter<'a, A: VulkanApi> {
    api: &'a mut A,
    config: &'a ReportConfig,
}

impl<'a, A: VulkanApi> CapabilityReporter<'a, A> {
    pub fn new(api: &'a mut A, config: &'a ReportConfig) -> Self {
        Self { api, config }
    }

    /// Always returns text; failures show up as diagnostic lines.
    pub fn generate_report(&mut self) -> String {
        let mut report = Report::default();
        self.write_report(&mut report);
        report.into_text()
    }

    fn write_report(&mut self, report: &mut Report) {
        info!("Initializing Vulkan loader");
        if let Err(err) = self.api.initialize_loader() {
            warn!("Failed to initialize Vulkan loader: {:#}", err);
            report.line(format_args!("Failed to Init Vulkan"));
            return;
        }

        let instance_version = self.api.instance_version().unwrap_or_else(|err| {
            warn!("{:#}, assuming Vulkan 1.0", err);
            vk::API_VERSION_1_0
        });
        report.line(format_args!(
            "Vulkan Version: {}",
            format_version(instance_version)
        ));

        report.property_section(
            "Layers:",
            "instance layers",
            self.api.enumerate_instance_layers(),
        );
        report.property_section(
            "Instance Extensions:",
            "instance extensions",
            self.api.enumerate_instance_extensions(),
        );

        let app_info = self.config.application_info(instance_version);
        debug!("Creating instance with {:?}", app_info);
        let instance = match self.api.create_instance(&app_info) {
            Ok(instance) => instance,
            Err(err) => {
                warn!("{:#}", err);
                report.line(format_args!("Failed to Create instance"));
                return;
            }
        };

        let physical_devices = match self.api.enumerate_physical_devices(&instance) {
            Ok(physical_devices) => physical_devices,
            Err(err) => {
                warn!("{:#}", err);
                report.line(format_args!("Failed to enumerate physical devices: {:#}", err));
                vec![]
            }
        };
        report.line(format_args!(
            "Physical Device Count: {}",
            physical_devices.len()
        ));

        for physical_device in physical_devices {
            self.write_device(report, &instance, physical_device);
        }

        debug!("Destroying Vulkan instance");
        self.api.destroy_instance(instance);
    }
}
