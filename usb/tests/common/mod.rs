use scarlett_usb::commands::ControlRequest;
use scarlett_usb::device::base::{ExecutableScarlett, ScarlettCommands};
use scarlett_usb::error::TransportError;
use scarlett_usb::meters::MeterBlock;
use scarlett_usb::rusb;

/// Records every transfer instead of talking to a device.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    pub sent: Vec<ControlRequest>,
    pub reads: Vec<(u8, u16, u16, u16)>,

    /// Fail every write once this many have succeeded.
    pub fail_after: Option<usize>,

    pub input_block: Option<Vec<u8>>,
    pub daw_block: Option<Vec<u8>>,
    pub mixer_block: Option<Vec<u8>>,
}

impl RecordingTransport {
    pub fn failing_after(count: usize) -> Self {
        Self {
            fail_after: Some(count),
            ..Default::default()
        }
    }
}

impl ExecutableScarlett for RecordingTransport {
    fn send_control(
        &mut self,
        request: u8,
        value: u16,
        index: u16,
        payload: &[u8],
    ) -> Result<(), TransportError> {
        if let Some(limit) = self.fail_after {
            if self.sent.len() >= limit {
                return Err(TransportError::UsbError(rusb::Error::Pipe));
            }
        }

        self.sent.push(ControlRequest {
            request,
            value,
            index,
            payload: payload.to_vec(),
        });
        Ok(())
    }

    fn request_control(
        &mut self,
        request: u8,
        value: u16,
        index: u16,
        length: u16,
    ) -> Result<Vec<u8>, TransportError> {
        self.reads.push((request, value, index, length));

        let block = match value {
            0x0000 => (&self.input_block, MeterBlock::Input),
            0x0003 => (&self.daw_block, MeterBlock::Daw),
            0x0001 => (&self.mixer_block, MeterBlock::Mixer),
            _ => return Err(TransportError::UsbError(rusb::Error::InvalidParam)),
        };

        Ok(match block {
            (Some(data), _) => data.clone(),
            (None, block) => vec![0; block.length()],
        })
    }
}

impl ScarlettCommands for RecordingTransport {}
