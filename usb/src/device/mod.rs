pub mod base;
pub mod libusb;

pub use base::{ExecutableScarlett, ScarlettCommands, ScarlettDevice, UsbData};
pub use libusb::device::{find_devices, ScarlettUSB};
