use crate::vk::{AshApi, ApplicationInfo, PropertyRecord};
use anyhow::Context;
use ash::{vk, Entry};
use log::debug;
use std::ffi::{CStr, CString};

impl AshApi {
    pub(super) unsafe fn new_entry() -> anyhow::Result<Entry> {
        let entry = Entry::load().context("Failed to load Vulkan library")?;
        debug!("Loaded Vulkan entry");
        Ok(entry)
    }

    pub(super) unsafe fn get_instance_version(entry: &Entry) -> anyhow::Result<u32> {
        let version = entry
            .try_enumerate_instance_version()
            .context("Failed to enumerate instance version")?;
        // Loaders without vkEnumerateInstanceVersion only know about 1.0
        Ok(version.unwrap_or(vk::API_VERSION_1_0))
    }

    pub(super) unsafe fn get_instance_layers(entry: &Entry) -> anyhow::Result<Vec<PropertyRecord>> {
        let layer_properties = entry
            .enumerate_instance_layer_properties()
            .context("Failed to enumerate instance layer properties")?;
        let layers = layer_properties
            .iter()
            .map(|layer| {
                let layer_name = CStr::from_ptr(layer.layer_name.as_ptr());
                PropertyRecord {
                    name: layer_name.to_string_lossy().into_owned(),
                    version: layer.implementation_version,
                }
            })
            .collect();
        Ok(layers)
    }

    pub(super) unsafe fn get_instance_extensions(
        entry: &Entry,
    ) -> anyhow::Result<Vec<PropertyRecord>> {
        let extension_properties = entry
            .enumerate_instance_extension_properties(None)
            .context("Failed to enumerate instance extension properties")?;
        Ok(extension_properties
            .iter()
            .map(|ext| Self::extension_record(ext))
            .collect())
    }

    pub(super) unsafe fn extension_record(ext: &vk::ExtensionProperties) -> PropertyRecord {
        let ext_name = CStr::from_ptr(ext.extension_name.as_ptr());
        PropertyRecord {
            name: ext_name.to_string_lossy().into_owned(),
            version: ext.spec_version,
        }
    }

    pub(super) unsafe fn new_instance(
        entry: &Entry,
        app_info: &ApplicationInfo,
    ) -> anyhow::Result<ash::Instance> {
        let app_name = CString::new(app_info.application_name.as_str())?;
        let engine_name = CString::new(app_info.engine_name.as_str())?;

        let vk_app_info = vk::ApplicationInfo::default()
            .application_name(&app_name)
            .application_version(app_info.application_version)
            .engine_name(&engine_name)
            .engine_version(app_info.engine_version)
            .api_version(app_info.api_version);

        // No layers and no extensions, whatever the loader advertises
        let create_info = vk::InstanceCreateInfo::default().application_info(&vk_app_info);

        let instance = entry
            .create_instance(&create_info, None)
            .context("Failed to create Vulkan instance")?;
        debug!("Created Vulkan instance {:?}", instance.handle());
        Ok(instance)
    }
}
