use crate::meters::MeterBlock;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    #[error("Matrix input {0} is out of range (0-17)")]
    MatrixInput(usize),

    #[error("Matrix output bus {0} is out of range (0-5)")]
    MatrixBus(usize),

    #[error("Router destination {0} is out of range (0-5)")]
    RouteDestination(usize),

    #[error("Output bus {0} is out of range (0-4)")]
    OutputBus(usize),

    #[error("Impedance channel {0} is out of range (0-1)")]
    ImpedanceChannel(usize),
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    #[error("{block} meter block should be {expected} bytes, received {actual}")]
    MeterBlockLength {
        block: MeterBlock,
        expected: usize,
        actual: usize,
    },
}

#[derive(thiserror::Error, Debug)]
pub enum ConnectError {
    #[error("No Scarlett 18i6 device was found")]
    DeviceNotFound,

    #[error("USB error: {0}")]
    UsbError(#[from] rusb::Error),
}

#[derive(thiserror::Error, Debug)]
pub enum TransportError {
    #[error("USB error: {0}")]
    UsbError(#[from] rusb::Error),
}

#[derive(thiserror::Error, Debug)]
pub enum CommandError {
    #[error("{0}")]
    Range(#[from] RangeError),

    #[error("Malformed meter data: {0}")]
    Format(#[from] FormatError),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}
