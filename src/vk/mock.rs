use crate::vk::{ApplicationInfo, DeviceProperties, PropertyRecord, VulkanApi};
use anyhow::bail;
use ash::vk;
use std::cell::{Cell, RefCell};

pub(crate) fn record(name: &str, version: u32) -> PropertyRecord {
    PropertyRecord {
        name: name.to_string(),
        version,
    }
}

#[derive(Clone, Debug, Default)]
pub(crate) struct MockDevice {
    pub properties: DeviceProperties,
    pub features: vk::PhysicalDeviceFeatures,
    /// `None` makes the extension query fail.
    pub extensions: Option<Vec<PropertyRecord>>,
}

impl MockDevice {
    pub fn named(name: &str) -> Self {
        Self {
            properties: DeviceProperties {
                device_name: name.to_string(),
                ..Default::default()
            },
            features: vk::PhysicalDeviceFeatures::default(),
            extensions: Some(vec![]),
        }
    }
}

#[derive(Debug)]
pub(crate) struct MockInstance;

/// Scripted Vulkan implementation that records what the reporter asked for.
pub(crate) struct MockApi {
    pub loader_fails: bool,
    pub instance_version: Option<u32>,
    pub layers: Option<Vec<PropertyRecord>>,
    pub instance_extensions: Option<Vec<PropertyRecord>>,
    pub instance_fails: bool,
    pub devices: Option<Vec<MockDevice>>,

    pub loader_initialized: Cell<bool>,
    pub created: RefCell<Vec<ApplicationInfo>>,
    pub destroyed: Cell<usize>,
}

impl Default for MockApi {
    fn default() -> Self {
        Self {
            loader_fails: false,
            instance_version: Some(vk::make_api_version(0, 1, 3, 0)),
            layers: Some(vec![]),
            instance_extensions: Some(vec![]),
            instance_fails: false,
            devices: Some(vec![]),
            loader_initialized: Cell::new(false),
            created: RefCell::new(vec![]),
            destroyed: Cell::new(0),
        }
    }
}

impl MockApi {
    fn device(&self, index: usize) -> &MockDevice {
        &self.devices.as_ref().expect("devices were enumerated")[index]
    }
}

impl VulkanApi for MockApi {
    type Instance = MockInstance;
    type PhysicalDevice = usize;

    fn initialize_loader(&mut self) -> anyhow::Result<()> {
        if self.loader_fails {
            bail!("libvulkan.so: cannot open shared object file");
        }
        self.loader_initialized.set(true);
        Ok(())
    }

    fn instance_version(&self) -> anyhow::Result<u32> {
        assert!(self.loader_initialized.get());
        match self.instance_version {
            Some(version) => Ok(version),
            None => bail!("ERROR_OUT_OF_HOST_MEMORY"),
        }
    }

    fn enumerate_instance_layers(&self) -> anyhow::Result<Vec<PropertyRecord>> {
        match &self.layers {
            Some(layers) => Ok(layers.clone()),
            None => bail!("ERROR_OUT_OF_HOST_MEMORY"),
        }
    }

    fn enumerate_instance_extensions(&self) -> anyhow::Result<Vec<PropertyRecord>> {
        match &self.instance_extensions {
            Some(extensions) => Ok(extensions.clone()),
            None => bail!("ERROR_LAYER_NOT_PRESENT"),
        }
    }

    fn create_instance(&self, app_info: &ApplicationInfo) -> anyhow::Result<MockInstance> {
        if self.instance_fails {
            bail!("ERROR_INCOMPATIBLE_DRIVER");
        }
        self.created.borrow_mut().push(app_info.clone());
        Ok(MockInstance)
    }

    fn enumerate_physical_devices(&self, _instance: &MockInstance) -> anyhow::Result<Vec<usize>> {
        match &self.devices {
            Some(devices) => Ok((0..devices.len()).collect()),
            None => bail!("ERROR_INITIALIZATION_FAILED"),
        }
    }

    fn physical_device_properties(
        &self,
        _instance: &MockInstance,
        physical_device: usize,
    ) -> DeviceProperties {
        self.device(physical_device).properties.clone()
    }

    fn physical_device_features(
        &self,
        _instance: &MockInstance,
        physical_device: usize,
    ) -> vk::PhysicalDeviceFeatures {
        self.device(physical_device).features
    }

    fn enumerate_device_extensions(
        &self,
        _instance: &MockInstance,
        physical_device: usize,
    ) -> anyhow::Result<Vec<PropertyRecord>> {
        match &self.device(physical_device).extensions {
            Some(extensions) => Ok(extensions.clone()),
            None => bail!("ERROR_OUT_OF_DEVICE_MEMORY"),
        }
    }

    fn destroy_instance(&self, _instance: MockInstance) {
        self.destroyed.set(self.destroyed.get() + 1);
    }
}
