use crate::codec::meter_sample_to_db;
use crate::error::FormatError;
use byteorder::{ByteOrder, LittleEndian};
use scarlett_types::MATRIX_INPUT_COUNT;
use strum::{Display, EnumIter};

pub const INPUT_METER_COUNT: usize = MATRIX_INPUT_COUNT;
pub const DAW_METER_COUNT: usize = 6;
pub const MIXER_METER_COUNT: usize = 8;

/// The three peak meter blocks the device exposes, each read separately.
#[derive(Copy, Clone, Debug, Display, EnumIter, PartialEq, Eq)]
pub enum MeterBlock {
    Input,
    Daw,
    Mixer,
}

impl MeterBlock {
    pub fn channels(&self) -> usize {
        match self {
            MeterBlock::Input => INPUT_METER_COUNT,
            MeterBlock::Daw => DAW_METER_COUNT,
            MeterBlock::Mixer => MIXER_METER_COUNT,
        }
    }

    /// Size of the block in bytes, two per channel.
    pub fn length(&self) -> usize {
        self.channels() * 2
    }

    pub(crate) fn value(&self) -> u16 {
        match self {
            MeterBlock::Input => 0x0000,
            MeterBlock::Mixer => 0x0001,
            MeterBlock::Daw => 0x0003,
        }
    }
}

/// Peak levels in dBFS from a single meter poll.
#[derive(Clone, Debug, PartialEq)]
pub struct MeterSnapshot {
    inputs: [f64; INPUT_METER_COUNT],
    daw: [f64; DAW_METER_COUNT],
    mixer: [f64; MIXER_METER_COUNT],
}

impl MeterSnapshot {
    pub fn inputs(&self) -> &[f64; INPUT_METER_COUNT] {
        &self.inputs
    }

    pub fn daw(&self) -> &[f64; DAW_METER_COUNT] {
        &self.daw
    }

    pub fn mixer(&self) -> &[f64; MIXER_METER_COUNT] {
        &self.mixer
    }

    pub fn block(&self, block: MeterBlock) -> &[f64] {
        match block {
            MeterBlock::Input => &self.inputs,
            MeterBlock::Daw => &self.daw,
            MeterBlock::Mixer => &self.mixer,
        }
    }

    /// Loudest reading in a block, -inf if everything is silent.
    pub fn peak(&self, block: MeterBlock) -> f64 {
        self.block(block)
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn is_silent(&self) -> bool {
        self.inputs
            .iter()
            .chain(self.daw.iter())
            .chain(self.mixer.iter())
            .all(|level| *level == f64::NEG_INFINITY)
    }
}

fn decode_block<const N: usize>(block: MeterBlock, data: &[u8]) -> Result<[f64; N], FormatError> {
    if data.len() != block.length() {
        return Err(FormatError::MeterBlockLength {
            block,
            expected: block.length(),
            actual: data.len(),
        });
    }

    let mut levels = [f64::NEG_INFINITY; N];
    for (level, sample) in levels.iter_mut().zip(data.chunks_exact(2)) {
        *level = meter_sample_to_db(LittleEndian::read_u16(sample) as u32);
    }
    Ok(levels)
}

/// Builds a snapshot from the raw input (36 bytes), DAW (12 bytes) and mixer (16 bytes) blocks.
pub fn decode_meter_snapshot(
    input: &[u8],
    daw: &[u8],
    mixer: &[u8],
) -> Result<MeterSnapshot, FormatError> {
    Ok(MeterSnapshot {
        inputs: decode_block(MeterBlock::Input, input)?,
        daw: decode_block(MeterBlock::Daw, daw)?,
        mixer: decode_block(MeterBlock::Mixer, mixer)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn silence() {
        let snapshot = decode_meter_snapshot(&[0; 36], &[0; 12], &[0; 16]).unwrap();
        assert!(snapshot.is_silent());
        assert_eq!(snapshot.peak(MeterBlock::Mixer), f64::NEG_INFINITY);
    }

    #[test]
    fn samples_are_little_endian() {
        let mut input = [0; 36];
        // Channel 2 at half scale (0x8000), sent low byte first
        input[2] = 0x00;
        input[3] = 0x80;
        // Channel 18 at 0x0100
        input[34] = 0x00;
        input[35] = 0x01;

        let snapshot = decode_meter_snapshot(&input, &[0; 12], &[0; 16]).unwrap();
        assert_eq!(snapshot.inputs()[0], f64::NEG_INFINITY);
        assert!((snapshot.inputs()[1] - (-6.0206)).abs() < 1e-3);
        assert!((snapshot.inputs()[17] - (-48.1648)).abs() < 1e-3);
        assert!((snapshot.peak(MeterBlock::Input) - (-6.0206)).abs() < 1e-3);
        assert!(!snapshot.is_silent());
    }

    #[test]
    fn rejects_short_input_block() {
        let result = decode_meter_snapshot(&[0; 35], &[0; 12], &[0; 16]);
        assert_eq!(
            result,
            Err(FormatError::MeterBlockLength {
                block: MeterBlock::Input,
                expected: 36,
                actual: 35,
            })
        );
    }

    #[test]
    fn rejects_long_mixer_block() {
        let result = decode_meter_snapshot(&[0; 36], &[0; 12], &[0; 18]);
        assert!(matches!(
            result,
            Err(FormatError::MeterBlockLength {
                block: MeterBlock::Mixer,
                ..
            })
        ));
    }

    #[test]
    fn rejects_wrong_daw_block() {
        for length in [11, 13] {
            let result = decode_meter_snapshot(&[0; 36], &vec![0; length], &[0; 16]);
            assert_eq!(
                result,
                Err(FormatError::MeterBlockLength {
                    block: MeterBlock::Daw,
                    expected: 12,
                    actual: length,
                })
            );
        }
    }

    #[test]
    fn block_addresses() {
        assert_eq!(MeterBlock::Input.value(), 0x0000);
        assert_eq!(MeterBlock::Daw.value(), 0x0003);
        assert_eq!(MeterBlock::Mixer.value(), 0x0001);
        assert_eq!(MeterBlock::Daw.length(), 12);
    }
}
