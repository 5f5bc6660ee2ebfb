#[cfg(feature = "clap")]
use clap::ValueEnum;
use enum_map::Enum;
#[cfg(feature = "enumset")]
use enumset::EnumSetType;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, EnumString};

// Number of inputs on the matrix mixer, and the number of buses it sums into.
pub const MATRIX_INPUT_COUNT: usize = 18;
pub const MATRIX_OUTPUT_COUNT: usize = 6;

// Physical inputs which carry a Line / Instrument switch.
pub const IMPEDANCE_CHANNEL_COUNT: usize = 2;

/// A signal which can be connected to one of the 18 Matrix Mixer inputs.
#[derive(Copy, Clone, Debug, Display, EnumIter, EnumCount, EnumString, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(ValueEnum))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SignalSource {
    Off,

    // PCM sent by the computer
    Daw1,
    Daw2,
    Daw3,
    Daw4,
    Daw5,
    Daw6,

    Analogue1,
    Analogue2,
    Analogue3,
    Analogue4,
    Analogue5,
    Analogue6,
    Analogue7,
    Analogue8,

    Spdif1,
    Spdif2,

    Adat1,
    Adat2,
    Adat3,
    Adat4,
    Adat5,
    Adat6,
    Adat7,
    Adat8,
}

impl SignalSource {
    pub fn id(&self) -> u8 {
        match self {
            SignalSource::Off => 0xff,
            SignalSource::Daw1 => 0x00,
            SignalSource::Daw2 => 0x01,
            SignalSource::Daw3 => 0x02,
            SignalSource::Daw4 => 0x03,
            SignalSource::Daw5 => 0x04,
            SignalSource::Daw6 => 0x05,
            SignalSource::Analogue1 => 0x06,
            SignalSource::Analogue2 => 0x07,
            SignalSource::Analogue3 => 0x08,
            SignalSource::Analogue4 => 0x09,
            SignalSource::Analogue5 => 0x0a,
            SignalSource::Analogue6 => 0x0b,
            SignalSource::Analogue7 => 0x0c,
            SignalSource::Analogue8 => 0x0d,
            SignalSource::Spdif1 => 0x0e,
            SignalSource::Spdif2 => 0x0f,
            SignalSource::Adat1 => 0x10,
            SignalSource::Adat2 => 0x11,
            SignalSource::Adat3 => 0x12,
            SignalSource::Adat4 => 0x13,
            SignalSource::Adat5 => 0x14,
            SignalSource::Adat6 => 0x15,
            SignalSource::Adat7 => 0x16,
            SignalSource::Adat8 => 0x17,
        }
    }

    /// The DAW playback channel with the given 1-based number.
    pub fn daw(channel: u8) -> Option<Self> {
        match channel {
            1 => Some(SignalSource::Daw1),
            2 => Some(SignalSource::Daw2),
            3 => Some(SignalSource::Daw3),
            4 => Some(SignalSource::Daw4),
            5 => Some(SignalSource::Daw5),
            6 => Some(SignalSource::Daw6),
            _ => None,
        }
    }

    pub fn analogue(channel: u8) -> Option<Self> {
        match channel {
            1 => Some(SignalSource::Analogue1),
            2 => Some(SignalSource::Analogue2),
            3 => Some(SignalSource::Analogue3),
            4 => Some(SignalSource::Analogue4),
            5 => Some(SignalSource::Analogue5),
            6 => Some(SignalSource::Analogue6),
            7 => Some(SignalSource::Analogue7),
            8 => Some(SignalSource::Analogue8),
            _ => None,
        }
    }

    pub fn spdif(channel: u8) -> Option<Self> {
        match channel {
            1 => Some(SignalSource::Spdif1),
            2 => Some(SignalSource::Spdif2),
            _ => None,
        }
    }

    pub fn adat(channel: u8) -> Option<Self> {
        match channel {
            1 => Some(SignalSource::Adat1),
            2 => Some(SignalSource::Adat2),
            3 => Some(SignalSource::Adat3),
            4 => Some(SignalSource::Adat4),
            5 => Some(SignalSource::Adat5),
            6 => Some(SignalSource::Adat6),
            7 => Some(SignalSource::Adat7),
            8 => Some(SignalSource::Adat8),
            _ => None,
        }
    }
}

/// The six summing outputs of the Matrix Mixer.
#[derive(Copy, Clone, Debug, Display, Enum, EnumIter, EnumCount, EnumString, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(ValueEnum))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MatrixOutput {
    M1,
    M2,
    M3,
    M4,
    M5,
    M6,
}

impl MatrixOutput {
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(MatrixOutput::M1),
            1 => Some(MatrixOutput::M2),
            2 => Some(MatrixOutput::M3),
            3 => Some(MatrixOutput::M4),
            4 => Some(MatrixOutput::M5),
            5 => Some(MatrixOutput::M6),
            _ => None,
        }
    }

    pub fn index(&self) -> u8 {
        *self as u8
    }
}

/// Anything which can feed the router, this is every [SignalSource] plus the matrix outputs.
#[derive(Copy, Clone, Debug, Display, EnumIter, EnumCount, EnumString, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(ValueEnum))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MixBus {
    Off,

    M1,
    M2,
    M3,
    M4,
    M5,
    M6,

    Daw1,
    Daw2,
    Daw3,
    Daw4,
    Daw5,
    Daw6,

    Analogue1,
    Analogue2,
    Analogue3,
    Analogue4,
    Analogue5,
    Analogue6,
    Analogue7,
    Analogue8,

    Spdif1,
    Spdif2,

    Adat1,
    Adat2,
    Adat3,
    Adat4,
    Adat5,
    Adat6,
    Adat7,
    Adat8,
}

impl MixBus {
    pub fn id(&self) -> u8 {
        match self {
            MixBus::M1 => 0x18,
            MixBus::M2 => 0x19,
            MixBus::M3 => 0x1a,
            MixBus::M4 => 0x1b,
            MixBus::M5 => 0x1c,
            MixBus::M6 => 0x1d,
            MixBus::Off => 0xff,
            MixBus::Daw1 => 0x00,
            MixBus::Daw2 => 0x01,
            MixBus::Daw3 => 0x02,
            MixBus::Daw4 => 0x03,
            MixBus::Daw5 => 0x04,
            MixBus::Daw6 => 0x05,
            MixBus::Analogue1 => 0x06,
            MixBus::Analogue2 => 0x07,
            MixBus::Analogue3 => 0x08,
            MixBus::Analogue4 => 0x09,
            MixBus::Analogue5 => 0x0a,
            MixBus::Analogue6 => 0x0b,
            MixBus::Analogue7 => 0x0c,
            MixBus::Analogue8 => 0x0d,
            MixBus::Spdif1 => 0x0e,
            MixBus::Spdif2 => 0x0f,
            MixBus::Adat1 => 0x10,
            MixBus::Adat2 => 0x11,
            MixBus::Adat3 => 0x12,
            MixBus::Adat4 => 0x13,
            MixBus::Adat5 => 0x14,
            MixBus::Adat6 => 0x15,
            MixBus::Adat7 => 0x16,
            MixBus::Adat8 => 0x17,
        }
    }

    /// Returns the matching [SignalSource], or None for a matrix output.
    pub fn signal_source(&self) -> Option<SignalSource> {
        match self {
            MixBus::Off => Some(SignalSource::Off),
            MixBus::M1 | MixBus::M2 | MixBus::M3 | MixBus::M4 | MixBus::M5 | MixBus::M6 => None,
            MixBus::Daw1 => Some(SignalSource::Daw1),
            MixBus::Daw2 => Some(SignalSource::Daw2),
            MixBus::Daw3 => Some(SignalSource::Daw3),
            MixBus::Daw4 => Some(SignalSource::Daw4),
            MixBus::Daw5 => Some(SignalSource::Daw5),
            MixBus::Daw6 => Some(SignalSource::Daw6),
            MixBus::Analogue1 => Some(SignalSource::Analogue1),
            MixBus::Analogue2 => Some(SignalSource::Analogue2),
            MixBus::Analogue3 => Some(SignalSource::Analogue3),
            MixBus::Analogue4 => Some(SignalSource::Analogue4),
            MixBus::Analogue5 => Some(SignalSource::Analogue5),
            MixBus::Analogue6 => Some(SignalSource::Analogue6),
            MixBus::Analogue7 => Some(SignalSource::Analogue7),
            MixBus::Analogue8 => Some(SignalSource::Analogue8),
            MixBus::Spdif1 => Some(SignalSource::Spdif1),
            MixBus::Spdif2 => Some(SignalSource::Spdif2),
            MixBus::Adat1 => Some(SignalSource::Adat1),
            MixBus::Adat2 => Some(SignalSource::Adat2),
            MixBus::Adat3 => Some(SignalSource::Adat3),
            MixBus::Adat4 => Some(SignalSource::Adat4),
            MixBus::Adat5 => Some(SignalSource::Adat5),
            MixBus::Adat6 => Some(SignalSource::Adat6),
            MixBus::Adat7 => Some(SignalSource::Adat7),
            MixBus::Adat8 => Some(SignalSource::Adat8),
        }
    }
}

impl From<SignalSource> for MixBus {
    fn from(source: SignalSource) -> Self {
        match source {
            SignalSource::Off => MixBus::Off,
            SignalSource::Daw1 => MixBus::Daw1,
            SignalSource::Daw2 => MixBus::Daw2,
            SignalSource::Daw3 => MixBus::Daw3,
            SignalSource::Daw4 => MixBus::Daw4,
            SignalSource::Daw5 => MixBus::Daw5,
            SignalSource::Daw6 => MixBus::Daw6,
            SignalSource::Analogue1 => MixBus::Analogue1,
            SignalSource::Analogue2 => MixBus::Analogue2,
            SignalSource::Analogue3 => MixBus::Analogue3,
            SignalSource::Analogue4 => MixBus::Analogue4,
            SignalSource::Analogue5 => MixBus::Analogue5,
            SignalSource::Analogue6 => MixBus::Analogue6,
            SignalSource::Analogue7 => MixBus::Analogue7,
            SignalSource::Analogue8 => MixBus::Analogue8,
            SignalSource::Spdif1 => MixBus::Spdif1,
            SignalSource::Spdif2 => MixBus::Spdif2,
            SignalSource::Adat1 => MixBus::Adat1,
            SignalSource::Adat2 => MixBus::Adat2,
            SignalSource::Adat3 => MixBus::Adat3,
            SignalSource::Adat4 => MixBus::Adat4,
            SignalSource::Adat5 => MixBus::Adat5,
            SignalSource::Adat6 => MixBus::Adat6,
            SignalSource::Adat7 => MixBus::Adat7,
            SignalSource::Adat8 => MixBus::Adat8,
        }
    }
}

impl From<MatrixOutput> for MixBus {
    fn from(output: MatrixOutput) -> Self {
        match output {
            MatrixOutput::M1 => MixBus::M1,
            MatrixOutput::M2 => MixBus::M2,
            MatrixOutput::M3 => MixBus::M3,
            MatrixOutput::M4 => MixBus::M4,
            MatrixOutput::M5 => MixBus::M5,
            MatrixOutput::M6 => MixBus::M6,
        }
    }
}

/// The six destinations of the router (switch-board).
#[derive(Debug, Display, Enum, EnumIter, EnumCount, EnumString)]
#[cfg_attr(feature = "clap", derive(ValueEnum))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "enumset", derive(EnumSetType))]
#[cfg_attr(not(feature = "enumset"), derive(Copy, Clone, PartialEq, Eq))]
pub enum Route {
    MonitorLeft,
    MonitorRight,
    PhonesLeft,
    PhonesRight,
    SpdifLeft,
    SpdifRight,
}

impl Route {
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Route::MonitorLeft),
            1 => Some(Route::MonitorRight),
            2 => Some(Route::PhonesLeft),
            3 => Some(Route::PhonesRight),
            4 => Some(Route::SpdifLeft),
            5 => Some(Route::SpdifRight),
            _ => None,
        }
    }

    pub fn id(&self) -> u8 {
        match self {
            Route::MonitorLeft => 0,
            Route::MonitorRight => 1,
            Route::PhonesLeft => 2,
            Route::PhonesRight => 3,
            Route::SpdifLeft => 4,
            Route::SpdifRight => 5,
        }
    }
}

/// Post-routing gain stages, these map to the hardware outputs.
#[derive(Debug, Display, Enum, EnumIter, EnumCount, EnumString)]
#[cfg_attr(feature = "clap", derive(ValueEnum))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "enumset", derive(EnumSetType))]
#[cfg_attr(not(feature = "enumset"), derive(Copy, Clone, PartialEq, Eq))]
pub enum OutputBus {
    Master,
    MonitorLeft,
    MonitorRight,
    PhonesLeft,
    PhonesRight,
}

impl OutputBus {
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(OutputBus::Master),
            1 => Some(OutputBus::MonitorLeft),
            2 => Some(OutputBus::MonitorRight),
            3 => Some(OutputBus::PhonesLeft),
            4 => Some(OutputBus::PhonesRight),
            _ => None,
        }
    }

    pub fn id(&self) -> u8 {
        match self {
            OutputBus::Master => 0,
            OutputBus::MonitorLeft => 1,
            OutputBus::MonitorRight => 2,
            OutputBus::PhonesLeft => 3,
            OutputBus::PhonesRight => 4,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, Display, EnumIter, EnumString, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(ValueEnum))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Impedance {
    #[default]
    LineIn,
    Instrument,
}

impl Impedance {
    pub fn id(&self) -> u8 {
        match self {
            Impedance::LineIn => 0x00,
            Impedance::Instrument => 0x01,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, Display, EnumIter, EnumString, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(ValueEnum))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ClockSource {
    #[default]
    Internal,
    Spdif,
    Adat,
}

impl ClockSource {
    pub fn id(&self) -> u8 {
        match self {
            ClockSource::Internal => 0x01,
            ClockSource::Spdif => 0x02,
            ClockSource::Adat => 0x03,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, Display, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(ValueEnum))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MuteState {
    #[default]
    Unmuted,
    Muted,
}

impl MuteState {
    pub fn id(&self) -> [u8; 2] {
        match self {
            MuteState::Unmuted => [0x00, 0x00],
            MuteState::Muted => [0x01, 0x00],
        }
    }
}

impl From<bool> for MuteState {
    fn from(muted: bool) -> Self {
        match muted {
            true => MuteState::Muted,
            false => MuteState::Unmuted,
        }
    }
}
