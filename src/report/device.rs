use crate::report::features::FEATURE_FIELDS;
use crate::report::field::Field;
use crate::report::limits::LIMIT_FIELDS;
use crate::report::uuid::format_pipeline_cache_uuid;
use crate::report::{format_version, CapabilityReporter, Report};
use crate::vk::VulkanApi;
use log::debug;

fn field_lines<T>(report: &mut Report, header: &str, fields: &[Field<T>], record: &T) {
    report.line(format_args!("{}", header));
    for field in fields {
        report.line(format_args!("\t{} {}", field.name, field.value(record)));
    }
}

impl<A: VulkanApi> CapabilityReporter<'_, A> {
    pub(super) fn write_device(
        &self,
        report: &mut Report,
        instance: &A::Instance,
        physical_device: A::PhysicalDevice,
    ) {
        let properties = self.api.physical_device_properties(instance, physical_device);
        debug!("Reporting physical device {}", properties.device_name);

        report.line(format_args!("Device Name: {}", properties.device_name));
        report.line(format_args!(
            "Device API Version: {}",
            format_version(properties.api_version)
        ));
        report.line(format_args!(
            "Device Driver Version: {}",
            format_version(properties.driver_version)
        ));
        report.line(format_args!("Device ID: {}", properties.device_id));
        report.line(format_args!("Device Vendor ID: {}", properties.vendor_id));
        report.line(format_args!(
            "Device Pipeline Cache UUID: {}",
            format_pipeline_cache_uuid(&properties.pipeline_cache_uuid, self.config.uuid_style)
        ));

        field_lines(report, "Device Limits:", LIMIT_FIELDS, &properties.limits);

        report.property_section(
            "Device Extensions:",
            "device extensions",
            self.api
                .enumerate_device_extensions(instance, physical_device),
        );

        let features = self.api.physical_device_features(instance, physical_device);
        field_lines(report, "Device Features:", FEATURE_FIELDS, &features);
    }
}
