use crate::meters::MeterBlock;
use crate::topology::{InputChannel, MatrixInput};
use scarlett_types::{MatrixOutput, OutputBus, Route};

// bRequest values, the device only responds to class requests on interface 0.
pub const REQUEST_SET: u8 = 0x01;
pub const REQUEST_MEMORY: u8 = 0x03;

const SAVE_MAGIC: u8 = 0xa5;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    SetImpedance(InputChannel),
    SetClockSource,
    SetBusMute(OutputBus),
    SetBusAttenuation(OutputBus),
    SetMatrixSource(MatrixInput),
    SetMatrixGain(MatrixInput, MatrixOutput),
    SetRoute(Route),
    SaveToHardware,
    GetMeters(MeterBlock),
}

impl Command {
    pub fn request(&self) -> u8 {
        match self {
            Command::SaveToHardware | Command::GetMeters(_) => REQUEST_MEMORY,
            _ => REQUEST_SET,
        }
    }

    /// The wValue of the control transfer.
    pub fn value(&self) -> u16 {
        match self {
            Command::SetImpedance(channel) => 0x0901 + channel.index() as u16,
            Command::SetClockSource => 0x0100,
            Command::SetBusMute(bus) => 0x0100 + bus.id() as u16,
            Command::SetBusAttenuation(bus) => 0x0200 + bus.id() as u16,
            Command::SetMatrixSource(input) => 0x0600 + input.index() as u16,
            Command::SetMatrixGain(input, bus) => {
                // Earlier firmware used (input << 4) + bus, v305 packs eight buses per input.
                0x0100 + ((input.index() as u16) << 3) + (bus.index() as u16 & 0x07)
            }
            Command::SetRoute(route) => route.id() as u16,
            Command::SaveToHardware => 0x005a,
            Command::GetMeters(block) => block.value(),
        }
    }

    /// The wIndex of the control transfer.
    pub fn index(&self) -> u16 {
        match self {
            Command::SetImpedance(_) => 0x0100,
            Command::SetClockSource => 0x2800,
            Command::SetBusMute(_) | Command::SetBusAttenuation(_) => 0x0a00,
            Command::SetMatrixSource(_) => 0x3200,
            Command::SetMatrixGain(_, _) => 0x3c00,
            Command::SetRoute(_) => 0x3300,
            Command::SaveToHardware | Command::GetMeters(_) => 0x3c00,
        }
    }
}

/// A single control transfer ready to be handed to the transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControlRequest {
    pub request: u8,
    pub value: u16,
    pub index: u16,
    pub payload: Vec<u8>,
}

impl ControlRequest {
    pub fn new(command: Command, payload: &[u8]) -> Self {
        Self {
            request: command.request(),
            value: command.value(),
            index: command.index(),
            payload: payload.to_vec(),
        }
    }

    pub fn save_to_hardware() -> Self {
        Self::new(Command::SaveToHardware, &[SAVE_MAGIC])
    }
}
