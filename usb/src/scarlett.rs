use crate::commands::ControlRequest;
use crate::device::base::ScarlettCommands;
use crate::encoder::MixerEncoder;
use crate::error::{CommandError, RangeError};
use crate::meters::MeterSnapshot;
use crate::programs;
use crate::topology::Topology;
use log::{debug, info};
use scarlett_types::{ClockSource, Impedance, MixBus, OutputBus, SignalSource};

/// A mixer session, pairing a device handle with the model of what's been sent to it.
///
/// The hardware can't be queried for its mixer state, so the model only ever reflects what
/// this session has written. Single changes are only committed to the model once the device
/// has accepted them. The bulk programs are sent as one batch, if a transfer in the middle
/// fails the model holds the full program while the device has only part of it.
#[derive(Debug)]
pub struct Scarlett<T: ScarlettCommands> {
    device: T,
    encoder: MixerEncoder,
}

impl<T: ScarlettCommands> Scarlett<T> {
    pub fn new(device: T) -> Self {
        Self {
            device,
            encoder: MixerEncoder::new(),
        }
    }

    /// Resumes a session from a model of a previous one, the device must still match it.
    pub fn with_topology(device: T, topology: Topology) -> Self {
        Self {
            device,
            encoder: MixerEncoder::from_topology(topology),
        }
    }

    pub fn topology(&self) -> &Topology {
        self.encoder.topology()
    }

    pub fn device(&mut self) -> &mut T {
        &mut self.device
    }

    pub fn into_transport(self) -> T {
        self.device
    }

    // Encodes against a copy of the model, which replaces the live one once the device has it.
    fn apply<F>(&mut self, encode: F) -> Result<(), CommandError>
    where
        F: FnOnce(&mut MixerEncoder) -> Result<ControlRequest, RangeError>,
    {
        let mut staged = self.encoder.clone();
        let request = encode(&mut staged)?;
        self.device.execute(&request)?;
        self.encoder = staged;
        Ok(())
    }

    fn run_program(
        &mut self,
        name: &str,
        requests: Vec<ControlRequest>,
    ) -> Result<(), CommandError> {
        info!("Running {} ({} requests)", name, requests.len());
        self.device.execute_all(&requests)?;
        Ok(())
    }

    pub fn set_impedance(&mut self, channel: usize, mode: Impedance) -> Result<(), CommandError> {
        self.apply(|encoder| encoder.set_impedance(channel, mode))?;
        debug!("Input channel {} impedance set to {}", channel, mode);
        Ok(())
    }

    pub fn set_clock_source(&mut self, source: ClockSource) -> Result<(), CommandError> {
        self.apply(|encoder| Ok(encoder.set_clock_source(source)))?;
        debug!("Clock source set to {}", source);
        Ok(())
    }

    pub fn set_mute(&mut self, bus: usize, muted: bool) -> Result<(), CommandError> {
        self.apply(|encoder| encoder.set_mute(bus, muted))?;
        debug!("Output bus {} mute set to {}", bus, muted);
        Ok(())
    }

    pub fn set_attenuation(&mut self, bus: usize, db: f64) -> Result<(), CommandError> {
        self.apply(|encoder| encoder.set_attenuation(bus, db))?;
        debug!("Output bus {} attenuation set to {}dB", bus, db);
        Ok(())
    }

    fn attenuate(&mut self, bus: OutputBus, db: f64) -> Result<(), CommandError> {
        self.apply(|encoder| Ok(encoder.attenuate(bus, db)))?;
        debug!("{} attenuation set to {}dB", bus, db);
        Ok(())
    }

    pub fn attenuate_master(&mut self, db: f64) -> Result<(), CommandError> {
        self.attenuate(OutputBus::Master, db)
    }

    // Each side is committed on its own, a failure on the right leaves the left applied.
    pub fn attenuate_monitor(&mut self, left: f64, right: f64) -> Result<(), CommandError> {
        self.attenuate(OutputBus::MonitorLeft, left)?;
        self.attenuate(OutputBus::MonitorRight, right)
    }

    pub fn attenuate_phones(&mut self, left: f64, right: f64) -> Result<(), CommandError> {
        self.attenuate(OutputBus::PhonesLeft, left)?;
        self.attenuate(OutputBus::PhonesRight, right)
    }

    pub fn set_matrix_input_source(
        &mut self,
        input: usize,
        source: SignalSource,
    ) -> Result<(), CommandError> {
        self.apply(|encoder| encoder.set_matrix_input_source(input, source))?;
        debug!("Matrix input {} source set to {}", input, source);
        Ok(())
    }

    pub fn set_matrix_gain(
        &mut self,
        input: usize,
        bus: usize,
        db: f64,
    ) -> Result<(), CommandError> {
        self.apply(|encoder| encoder.set_matrix_gain(input, bus, db))?;
        debug!("Matrix gain {}:{} set to {}dB", input, bus, db);
        Ok(())
    }

    pub fn set_router_source(
        &mut self,
        destination: usize,
        source: impl Into<MixBus>,
    ) -> Result<(), CommandError> {
        let source = source.into();
        self.apply(|encoder| encoder.set_router_source(destination, source))?;
        debug!("Router destination {} fed from {}", destination, source);
        Ok(())
    }

    pub fn factory_reset(&mut self) -> Result<(), CommandError> {
        let requests = programs::factory_reset(&mut self.encoder);
        self.run_program("factory reset", requests)
    }

    pub fn zero_settings(&mut self) -> Result<(), CommandError> {
        let requests = programs::zero_settings(&mut self.encoder);
        self.run_program("zero settings", requests)
    }

    pub fn daw_passthrough(&mut self) -> Result<(), CommandError> {
        let requests = programs::daw_passthrough(&mut self.encoder);
        self.run_program("DAW passthrough", requests)
    }

    pub fn save_to_hardware(&mut self) -> Result<(), CommandError> {
        info!("Saving mixer state to hardware");
        self.device.save_settings_to_hardware()?;
        Ok(())
    }

    pub fn read_meters(&mut self) -> Result<MeterSnapshot, CommandError> {
        self.device.read_meters()
    }
}
