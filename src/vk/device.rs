use crate::vk::{AshApi, DeviceProperties, PropertyRecord};
use anyhow::Context;
use ash::vk;
use log::debug;
use std::ffi::CStr;

impl AshApi {
    pub(super) unsafe fn get_physical_devices(
        instance: &ash::Instance,
    ) -> anyhow::Result<Vec<vk::PhysicalDevice>> {
        let physical_devices = instance
            .enumerate_physical_devices()
            .context("Failed to enumerate physical devices")?;
        debug!("Found {} physical devices", physical_devices.len());
        Ok(physical_devices)
    }

    pub(super) unsafe fn get_device_properties(
        instance: &ash::Instance,
        physical_device: vk::PhysicalDevice,
    ) -> DeviceProperties {
        let properties = instance.get_physical_device_properties(physical_device);
        let device_name = CStr::from_ptr(properties.device_name.as_ptr());

        DeviceProperties {
            device_name: device_name.to_string_lossy().into_owned(),
            api_version: properties.api_version,
            driver_version: properties.driver_version,
            device_id: properties.device_id,
            vendor_id: properties.vendor_id,
            pipeline_cache_uuid: properties.pipeline_cache_uuid,
            limits: properties.limits,
        }
    }

    pub(super) unsafe fn get_device_extensions(
        instance: &ash::Instance,
        physical_device: vk::PhysicalDevice,
    ) -> anyhow::Result<Vec<PropertyRecord>> {
        let extension_properties = instance
            .enumerate_device_extension_properties(physical_device)
            .context("Failed to enumerate device extension properties")?;
        Ok(extension_properties
            .iter()
            .map(|ext| Self::extension_record(ext))
            .collect())
    }
}
