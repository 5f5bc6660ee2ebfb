use crate::device::base::{ExecutableScarlett, ScarlettCommands, ScarlettDevice, UsbData};
use crate::error::{ConnectError, TransportError};
use crate::{PID_SCARLETT_18I6, VID_FOCUSRITE};
use log::{debug, info, warn};
use rusb::{
    Device, DeviceDescriptor, DeviceHandle, Direction, GlobalContext, Language, Recipient,
    RequestType,
};
use std::time::Duration;

pub struct ScarlettUSB {
    handle: DeviceHandle<GlobalContext>,
    device: Device<GlobalContext>,
    descriptor: DeviceDescriptor,
    language: Option<Language>,
    timeout: Duration,
    device_is_claimed: bool,
}

impl ScarlettUSB {
    fn find_device(
        device: &ScarlettDevice,
    ) -> Result<(Device<GlobalContext>, DeviceDescriptor), ConnectError> {
        for usb_device in rusb::devices()?.iter() {
            if usb_device.bus_number() == device.bus_number
                && usb_device.address() == device.address
            {
                if let Ok(descriptor) = usb_device.device_descriptor() {
                    return Ok((usb_device, descriptor));
                }
            }
        }
        Err(ConnectError::DeviceNotFound)
    }

    pub fn open(device: &ScarlettDevice, timeout: Duration) -> Result<Self, ConnectError> {
        let (device, descriptor) = ScarlettUSB::find_device(device)?;
        let mut handle = device.open()?;

        info!("Connected to possible Scarlett 18i6 at {:?}", device);

        // Not fatal, it's only used to read the descriptor strings.
        let language = handle
            .read_languages(timeout)
            .ok()
            .and_then(|languages| languages.first().copied());

        handle.set_auto_detach_kernel_driver(true).ok();
        let device_is_claimed = handle.claim_interface(0).is_ok();
        if !device_is_claimed {
            // Class requests to the mixer unit still work while ALSA holds the interface.
            debug!("Unable to claim interface 0, continuing without it");
        }

        Ok(Self {
            handle,
            device,
            descriptor,
            language,
            timeout,
            device_is_claimed,
        })
    }

    pub fn get_descriptor(&self) -> Result<UsbData, ConnectError> {
        let version = self.descriptor.device_version();
        let device_version = (version.0, version.1, version.2);

        let (device_manufacturer, product_name) = match self.language {
            Some(language) => (
                self.handle.read_manufacturer_string(
                    language,
                    &self.descriptor,
                    Duration::from_millis(100),
                )?,
                self.handle.read_product_string(
                    language,
                    &self.descriptor,
                    Duration::from_millis(100),
                )?,
            ),
            None => (String::from("Focusrite"), String::from("Scarlett 18i6")),
        };

        Ok(UsbData {
            vendor_id: self.descriptor.vendor_id(),
            product_id: self.descriptor.product_id(),
            device_version,
            device_manufacturer,
            product_name,
        })
    }
}

impl ExecutableScarlett for ScarlettUSB {
    fn send_control(
        &mut self,
        request: u8,
        value: u16,
        index: u16,
        payload: &[u8],
    ) -> Result<(), TransportError> {
        self.handle.write_control(
            rusb::request_type(Direction::Out, RequestType::Class, Recipient::Interface),
            request,
            value,
            index,
            payload,
            self.timeout,
        )?;

        Ok(())
    }

    fn request_control(
        &mut self,
        request: u8,
        value: u16,
        index: u16,
        length: u16,
    ) -> Result<Vec<u8>, TransportError> {
        let mut buf = vec![0; length as usize];
        let response_length = self.handle.read_control(
            rusb::request_type(Direction::In, RequestType::Class, Recipient::Interface),
            request,
            value,
            index,
            &mut buf,
            self.timeout,
        )?;
        buf.truncate(response_length);
        Ok(buf)
    }
}

impl ScarlettCommands for ScarlettUSB {}

impl Drop for ScarlettUSB {
    fn drop(&mut self) {
        if self.device_is_claimed {
            if let Err(error) = self.handle.release_interface(0) {
                warn!("Unable to release interface: {}", error);
            }
        }
    }
}

pub fn find_devices() -> Vec<ScarlettDevice> {
    let mut found_devices: Vec<ScarlettDevice> = Vec::new();

    if let Ok(devices) = rusb::devices() {
        for device in devices.iter() {
            if let Ok(descriptor) = device.device_descriptor() {
                if descriptor.vendor_id() == VID_FOCUSRITE
                    && descriptor.product_id() == PID_SCARLETT_18I6
                {
                    found_devices.push(ScarlettDevice {
                        bus_number: device.bus_number(),
                        address: device.address(),
                    });
                }
            }
        }
    }

    found_devices
}
