use clap::{Parser, Subcommand, ValueEnum};
use directories::ProjectDirs;
use scarlett_types::{
    ClockSource, Impedance, MatrixOutput, MixBus, OutputBus, Route, SignalSource,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(about, version, author)]
pub struct Cli {
    /// Minimum log level to print out
    #[clap(long, value_enum, default_value = "info")]
    pub log_level: LevelFilter,

    /// Location of the client configuration file on disk
    #[clap(long, default_value_os_t = default_config_location())]
    pub config: PathBuf,

    /// USB transfer timeout in milliseconds, overrides the configured value
    #[clap(long)]
    pub timeout: Option<u64>,

    #[clap(subcommand)]
    pub command: SubCommands,
}

fn default_config_location() -> PathBuf {
    match ProjectDirs::from("org", "GoXLR-on-Linux", "Scarlett-Utility") {
        Some(proj_dirs) => proj_dirs.config_dir().join("settings.json"),
        None => PathBuf::from("scarlett-settings.json"),
    }
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum SubCommands {
    /// List the attached Scarlett 18i6 devices
    List,

    /// Feed a router destination from a matrix bus or a raw signal
    Route {
        #[clap(value_enum)]
        destination: Route,

        #[clap(value_enum)]
        source: MixBus,
    },

    /// Assign a signal to a matrix mixer input (0-17)
    Source {
        input: usize,

        #[clap(value_enum)]
        signal: SignalSource,
    },

    /// Set the gain of a matrix mixer cell, in whole dB (-128 to +6)
    Gain {
        input: usize,

        #[clap(value_enum)]
        bus: MatrixOutput,

        #[clap(allow_negative_numbers = true)]
        db: f64,
    },

    /// Mute or unmute an output bus
    Mute {
        #[clap(value_enum)]
        bus: OutputBus,

        #[clap(value_enum)]
        state: Toggle,
    },

    /// Set the attenuation of an output bus in dB (-128 to 0)
    Attenuate {
        #[clap(value_enum)]
        bus: OutputBus,

        #[clap(allow_negative_numbers = true)]
        db: f64,
    },

    /// Switch an analogue input (0-1) between line and instrument level
    Impedance {
        channel: usize,

        #[clap(value_enum)]
        mode: Impedance,
    },

    /// Select the sample clock source
    Clock {
        #[clap(value_enum)]
        source: ClockSource,
    },

    /// Restore the factory routing and mixer state
    FactoryReset,

    /// Disconnect every input and route, and silence the matrix
    Zero,

    /// Send DAW 1 straight to the monitor and phones outputs
    Passthrough,

    /// Read the peak meters
    Meters {
        /// Number of polls to make
        #[clap(long, default_value = "1")]
        count: u32,

        /// Delay between polls in milliseconds
        #[clap(long, default_value = "100")]
        interval: u64,
    },

    /// Store the current mixer state in the device's flash
    Save,
}

#[derive(ValueEnum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum Toggle {
    On,
    Off,
}

impl From<Toggle> for bool {
    fn from(toggle: Toggle) -> Self {
        toggle == Toggle::On
    }
}

#[repr(usize)]
#[derive(ValueEnum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum LevelFilter {
    /// A level lower than all log levels.
    Off,
    /// Corresponds to the `Error` log level.
    Error,
    /// Corresponds to the `Warn` log level.
    Warn,
    /// Corresponds to the `Info` log level.
    Info,
    /// Corresponds to the `Debug` log level.
    Debug,
    /// Corresponds to the `Trace` log level.
    Trace,
}

impl From<LevelFilter> for log::LevelFilter {
    fn from(level: LevelFilter) -> Self {
        match level {
            LevelFilter::Off => log::LevelFilter::Off,
            LevelFilter::Error => log::LevelFilter::Error,
            LevelFilter::Warn => log::LevelFilter::Warn,
            LevelFilter::Info => log::LevelFilter::Info,
            LevelFilter::Debug => log::LevelFilter::Debug,
            LevelFilter::Trace => log::LevelFilter::Trace,
        }
    }
}
