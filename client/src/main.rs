use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{info, warn};
use scarlett_usb::device::{find_devices, ScarlettCommands, ScarlettDevice, ScarlettUSB};
use scarlett_usb::meters::{MeterBlock, MeterSnapshot};
use scarlett_usb::scarlett::Scarlett;
use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};
use std::thread::sleep;
use std::time::Duration;
use strum::IntoEnumIterator;

use crate::cli::{Cli, SubCommands};
use crate::settings::Settings;

mod cli;
mod settings;

fn main() -> Result<()> {
    let args: Cli = Cli::parse();

    CombinedLogger::init(vec![TermLogger::new(
        args.log_level.into(),
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])
    .context("Could not configure the logger")?;

    let mut settings = Settings::load(&args.config)?;
    if let Some(timeout) = args.timeout {
        settings.usb_timeout_ms = timeout;
    }

    if args.command == SubCommands::List {
        list_devices(&settings);
        return Ok(());
    }

    let device = select_device(&settings)?;
    let handle = ScarlettUSB::open(&device, settings.timeout()).context(format!(
        "Could not open the Scarlett 18i6 at bus {} address {}",
        device.bus_number(),
        device.address()
    ))?;

    // The mixer state can't be read back, each run starts from a fresh model.
    let mut scarlett = Scarlett::new(handle);
    run_command(&mut scarlett, args.command)
}

fn list_devices(settings: &Settings) {
    let devices = find_devices();
    if devices.is_empty() {
        warn!("No Scarlett 18i6 devices found");
        return;
    }

    for device in devices {
        let description = ScarlettUSB::open(&device, settings.timeout())
            .and_then(|handle| handle.get_descriptor())
            .map(|data| {
                let (major, minor, patch) = data.device_version();
                format!(
                    "{} {} (v{}.{}.{})",
                    data.device_manufacturer(),
                    data.product_name(),
                    major,
                    minor,
                    patch
                )
            })
            .unwrap_or_else(|e| format!("unable to open: {}", e));

        println!(
            "Bus {:03} Address {:03}: {}",
            device.bus_number(),
            device.address(),
            description
        );
    }
}

fn select_device(settings: &Settings) -> Result<ScarlettDevice> {
    let devices = find_devices();

    if let Some(selector) = settings.device {
        return devices
            .into_iter()
            .find(|d| d.bus_number() == selector.bus_number && d.address() == selector.address)
            .context(format!(
                "Configured Scarlett 18i6 at bus {} address {} is not attached",
                selector.bus_number, selector.address
            ));
    }

    let mut devices = devices.into_iter();
    let Some(device) = devices.next() else {
        bail!("No Scarlett 18i6 devices found");
    };
    if devices.next().is_some() {
        warn!("Multiple Scarlett 18i6 devices found, using the first one");
    }
    Ok(device)
}

fn run_command<T: ScarlettCommands>(
    scarlett: &mut Scarlett<T>,
    command: SubCommands,
) -> Result<()> {
    match command {
        SubCommands::List => {}
        SubCommands::Route {
            destination,
            source,
        } => scarlett.set_router_source(destination.id() as usize, source)?,
        SubCommands::Source { input, signal } => {
            scarlett.set_matrix_input_source(input, signal)?
        }
        SubCommands::Gain { input, bus, db } => {
            scarlett.set_matrix_gain(input, bus.index() as usize, db)?
        }
        SubCommands::Mute { bus, state } => scarlett.set_mute(bus.id() as usize, state.into())?,
        SubCommands::Attenuate { bus, db } => scarlett.set_attenuation(bus.id() as usize, db)?,
        SubCommands::Impedance { channel, mode } => scarlett.set_impedance(channel, mode)?,
        SubCommands::Clock { source } => scarlett.set_clock_source(source)?,
        SubCommands::FactoryReset => scarlett.factory_reset()?,
        SubCommands::Zero => scarlett.zero_settings()?,
        SubCommands::Passthrough => scarlett.daw_passthrough()?,
        SubCommands::Meters { count, interval } => {
            for poll in 0..count {
                if poll > 0 {
                    sleep(Duration::from_millis(interval));
                }
                print_meters(&scarlett.read_meters()?);
            }
        }
        SubCommands::Save => {
            scarlett.save_to_hardware()?;
            info!("Mixer state saved to the device");
        }
    }
    Ok(())
}

fn format_level(db: f64) -> String {
    if db == f64::NEG_INFINITY {
        return String::from("  -inf");
    }
    format!("{:6.1}", db)
}

fn print_meters(snapshot: &MeterSnapshot) {
    for block in MeterBlock::iter() {
        let levels: Vec<String> = snapshot
            .block(block)
            .iter()
            .map(|db| format_level(*db))
            .collect();
        println!("{:>5}: {}", block.to_string(), levels.join(" "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scarlett_types::{MatrixOutput, OutputBus};
    use scarlett_usb::commands::ControlRequest;
    use scarlett_usb::device::ExecutableScarlett;
    use scarlett_usb::error::TransportError;

    #[derive(Default)]
    struct Recorder {
        sent: Vec<ControlRequest>,
    }

    impl ExecutableScarlett for Recorder {
        fn send_control(
            &mut self,
            request: u8,
            value: u16,
            index: u16,
            payload: &[u8],
        ) -> Result<(), TransportError> {
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
            _request: u8,
            _value: u16,
            _index: u16,
            length: u16,
        ) -> Result<Vec<u8>, TransportError> {
            Ok(vec![0; length as usize])
        }
    }

    impl ScarlettCommands for Recorder {}

    #[test]
    fn gain_command_addresses_cell() {
        let mut scarlett = Scarlett::new(Recorder::default());
        let command = SubCommands::Gain {
            input: 3,
            bus: MatrixOutput::M3,
            db: 0.0,
        };
        run_command(&mut scarlett, command).unwrap();

        let sent = &scarlett.device().sent;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].value, 0x011a);
    }

    #[test]
    fn attenuate_command_uses_bus_id() {
        let mut scarlett = Scarlett::new(Recorder::default());
        let command = SubCommands::Attenuate {
            bus: OutputBus::PhonesRight,
            db: -6.0,
        };
        run_command(&mut scarlett, command).unwrap();

        let sent = &scarlett.device().sent;
        assert_eq!(sent[0].value, 0x0204);
        assert_eq!(sent[0].payload, vec![0x01, 0xfa]);
    }

    #[test]
    fn bad_input_is_reported() {
        let mut scarlett = Scarlett::new(Recorder::default());
        let command = SubCommands::Impedance {
            channel: 2,
            mode: scarlett_types::Impedance::Instrument,
        };
        assert!(run_command(&mut scarlett, command).is_err());
        assert!(scarlett.device().sent.is_empty());
    }

    #[test]
    fn meter_levels() {
        assert_eq!(format_level(f64::NEG_INFINITY), "  -inf");
        assert_eq!(format_level(-6.02), "  -6.0");
    }
}
