use crate::commands::{Command, ControlRequest};
use crate::error::{CommandError, TransportError};
use crate::meters::{decode_meter_snapshot, MeterBlock, MeterSnapshot};
use log::debug;

// The raw transport, this is all a device needs to provide to be controlled.
pub trait ExecutableScarlett {
    fn send_control(
        &mut self,
        request: u8,
        value: u16,
        index: u16,
        payload: &[u8],
    ) -> Result<(), TransportError>;

    fn request_control(
        &mut self,
        request: u8,
        value: u16,
        index: u16,
        length: u16,
    ) -> Result<Vec<u8>, TransportError>;
}

// These are commands that can be executed, but the transport must be implemented..
pub trait ScarlettCommands: ExecutableScarlett {
    fn execute(&mut self, request: &ControlRequest) -> Result<(), TransportError> {
        debug!(
            "Sending request {:#04x} value {:#06x} index {:#06x}: {:02x?}",
            request.request, request.value, request.index, request.payload
        );
        self.send_control(
            request.request,
            request.value,
            request.index,
            &request.payload,
        )
    }

    /// Sends each request in order, stopping at the first one which fails.
    fn execute_all(&mut self, requests: &[ControlRequest]) -> Result<(), TransportError> {
        for request in requests {
            self.execute(request)?;
        }
        Ok(())
    }

    fn save_settings_to_hardware(&mut self) -> Result<(), TransportError> {
        self.execute(&ControlRequest::save_to_hardware())
    }

    fn read_meter_block(&mut self, block: MeterBlock) -> Result<Vec<u8>, TransportError> {
        let command = Command::GetMeters(block);
        self.request_control(
            command.request(),
            command.value(),
            command.index(),
            block.length() as u16,
        )
    }

    fn read_meters(&mut self) -> Result<MeterSnapshot, CommandError> {
        let input = self.read_meter_block(MeterBlock::Input)?;
        let daw = self.read_meter_block(MeterBlock::Daw)?;
        let mixer = self.read_meter_block(MeterBlock::Mixer)?;
        Ok(decode_meter_snapshot(&input, &daw, &mixer)?)
    }
}

// We primarily need the bus number, and address for comparison..
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScarlettDevice {
    pub(crate) bus_number: u8,
    pub(crate) address: u8,
}

impl ScarlettDevice {
    pub fn bus_number(&self) -> u8 {
        self.bus_number
    }
    pub fn address(&self) -> u8 {
        self.address
    }
}

pub struct UsbData {
    pub(crate) vendor_id: u16,
    pub(crate) product_id: u16,
    pub(crate) device_version: (u8, u8, u8),
    pub(crate) device_manufacturer: String,
    pub(crate) product_name: String,
}

impl UsbData {
    pub fn vendor_id(&self) -> u16 {
        self.vendor_id
    }
    pub fn product_id(&self) -> u16 {
        self.product_id
    }
    pub fn device_version(&self) -> (u8, u8, u8) {
        self.device_version
    }
    pub fn device_manufacturer(&self) -> String {
        self.device_manufacturer.clone()
    }
    pub fn product_name(&self) -> String {
        self.product_name.clone()
    }
}
