use ash::vk;

mod device;
mod instance;
#[cfg(test)]
pub(crate) mod mock;

/// Name and version of an instance layer, instance extension or device extension.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertyRecord {
    pub name: String,
    pub version: u32,
}

/// Subset of `VkPhysicalDeviceProperties` that ends up in the report.
#[derive(Clone, Debug, Default)]
pub struct DeviceProperties {
    pub device_name: String,
    pub api_version: u32,
    pub driver_version: u32,
    pub device_id: u32,
    pub vendor_id: u32,
    pub pipeline_cache_uuid: [u8; vk::UUID_SIZE],
    pub limits: vk::PhysicalDeviceLimits,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApplicationInfo {
    pub application_name: String,
    pub application_version: u32,
    pub engine_name: String,
    pub engine_version: u32,
    pub api_version: u32,
}

/// Read-only query surface of a Vulkan implementation.
///
/// Every list is returned in the order the implementation reports it.
/// The count-then-fill dance of the C API happens behind these calls.
pub trait VulkanApi {
    type Instance;
    type PhysicalDevice: Copy;

    fn initialize_loader(&mut self) -> anyhow::Result<()>;

    fn instance_version(&self) -> anyhow::Result<u32>;

    fn enumerate_instance_layers(&self) -> anyhow::Result<Vec<PropertyRecord>>;

    fn enumerate_instance_extensions(&self) -> anyhow::Result<Vec<PropertyRecord>>;

    /// Creates an instance with no layers and no extensions enabled and
    /// loads its instance-level function pointers.
    fn create_instance(&self, app_info: &ApplicationInfo) -> anyhow::Result<Self::Instance>;

    fn enumerate_physical_devices(
        &self,
        instance: &Self::Instance,
    ) -> anyhow::Result<Vec<Self::PhysicalDevice>>;

    fn physical_device_properties(
        &self,
        instance: &Self::Instance,
        physical_device: Self::PhysicalDevice,
    ) -> DeviceProperties;

    fn physical_device_features(
        &self,
        instance: &Self::Instance,
        physical_device: Self::PhysicalDevice,
    ) -> vk::PhysicalDeviceFeatures;

    fn enumerate_device_extensions(
        &self,
        instance: &Self::Instance,
        physical_device: Self::PhysicalDevice,
    ) -> anyhow::Result<Vec<PropertyRecord>>;

    fn destroy_instance(&self, instance: Self::Instance);
}

/// [`VulkanApi`] backed by the system Vulkan loader through `ash`.
#[derive(Default)]
pub struct AshApi {
    entry: Option<ash::Entry>,
}

impl AshApi {
    pub fn new() -> Self {
        Self::default()
    }

    fn entry(&self) -> anyhow::Result<&ash::Entry> {
        self.entry
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("Vulkan loader is not initialized"))
    }
}

impl VulkanApi for AshApi {
    type Instance = ash::Instance;
    type PhysicalDevice = vk::PhysicalDevice;

    fn initialize_loader(&mut self) -> anyhow::Result<()> {
        self.entry = Some(unsafe { Self::new_entry()? });
        Ok(())
    }

    fn instance_version(&self) -> anyhow::Result<u32> {
        unsafe { Self::get_instance_version(self.entry()?) }
    }

    fn enumerate_instance_layers(&self) -> anyhow::Result<Vec<PropertyRecord>> {
        unsafe { Self::get_instance_layers(self.entry()?) }
    }

    fn enumerate_instance_extensions(&self) -> anyhow::Result<Vec<PropertyRecord>> {
        unsafe { Self::get_instance_extensions(self.entry()?) }
    }

    fn create_instance(&self, app_info: &ApplicationInfo) -> anyhow::Result<ash::Instance> {
        unsafe { Self::new_instance(self.entry()?, app_info) }
    }

    fn enumerate_physical_devices(
        &self,
        instance: &ash::Instance,
    ) -> anyhow::Result<Vec<vk::PhysicalDevice>> {
        unsafe { Self::get_physical_devices(instance) }
    }

    fn physical_device_properties(
        &self,
        instance: &ash::Instance,
        physical_device: vk::PhysicalDevice,
    ) -> DeviceProperties {
        unsafe { Self::get_device_properties(instance, physical_device) }
    }

    fn physical_device_features(
        &self,
        instance: &ash::Instance,
        physical_device: vk::PhysicalDevice,
    ) -> vk::PhysicalDeviceFeatures {
        unsafe { instance.get_physical_device_features(physical_device) }
    }

    fn enumerate_device_extensions(
        &self,
        instance: &ash::Instance,
        physical_device: vk::PhysicalDevice,
    ) -> anyhow::Result<Vec<PropertyRecord>> {
        unsafe { Self::get_device_extensions(instance, physical_device) }
    }

    fn destroy_instance(&self, instance: ash::Instance) {
        unsafe { instance.destroy_instance(None) }
    }
}
