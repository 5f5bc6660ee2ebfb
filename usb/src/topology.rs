use crate::error::RangeError;
use enum_map::{enum_map, EnumMap};
use enumset::EnumSet;
use scarlett_types::{
    ClockSource, Impedance, MatrixOutput, MixBus, OutputBus, Route, SignalSource,
    IMPEDANCE_CHANNEL_COUNT, MATRIX_INPUT_COUNT, MATRIX_OUTPUT_COUNT,
};
use strum::IntoEnumIterator;

/// In-memory copy of the routing and gain state of an 18i6.
///
/// The device is write-only, so this is the only record of what has been sent to it. Every
/// mutator validates its addressing and leaves the model untouched on failure. Gain and
/// attenuation values are stored as requested, clamping happens when they're encoded.
#[derive(Debug, Clone, PartialEq)]
pub struct Topology {
    matrix_sources: [SignalSource; MATRIX_INPUT_COUNT],
    matrix_gains: [[f64; MATRIX_OUTPUT_COUNT]; MATRIX_INPUT_COUNT],
    router: EnumMap<Route, MixBus>,
    muted: EnumSet<OutputBus>,
    attenuation: EnumMap<OutputBus, f64>,
    impedance: [Impedance; IMPEDANCE_CHANNEL_COUNT],
    clock_source: ClockSource,
}

impl Default for Topology {
    fn default() -> Self {
        Self {
            matrix_sources: [SignalSource::Off; MATRIX_INPUT_COUNT],
            matrix_gains: [[f64::NEG_INFINITY; MATRIX_OUTPUT_COUNT]; MATRIX_INPUT_COUNT],
            router: enum_map! { _ => MixBus::Off },
            muted: EnumSet::empty(),
            attenuation: enum_map! { _ => 0.0 },
            impedance: [Impedance::LineIn; IMPEDANCE_CHANNEL_COUNT],
            clock_source: ClockSource::Internal,
        }
    }
}

fn check_matrix_input(input: usize) -> Result<(), RangeError> {
    if input >= MATRIX_INPUT_COUNT {
        return Err(RangeError::MatrixInput(input));
    }
    Ok(())
}

fn check_matrix_bus(bus: usize) -> Result<(), RangeError> {
    if bus >= MATRIX_OUTPUT_COUNT {
        return Err(RangeError::MatrixBus(bus));
    }
    Ok(())
}

pub(crate) fn matrix_output_from_index(bus: usize) -> Result<MatrixOutput, RangeError> {
    u8::try_from(bus)
        .ok()
        .and_then(MatrixOutput::from_index)
        .ok_or(RangeError::MatrixBus(bus))
}

pub(crate) fn route_from_index(destination: usize) -> Result<Route, RangeError> {
    u8::try_from(destination)
        .ok()
        .and_then(Route::from_index)
        .ok_or(RangeError::RouteDestination(destination))
}

pub(crate) fn output_bus_from_index(bus: usize) -> Result<OutputBus, RangeError> {
    u8::try_from(bus)
        .ok()
        .and_then(OutputBus::from_index)
        .ok_or(RangeError::OutputBus(bus))
}

fn check_impedance_channel(channel: usize) -> Result<(), RangeError> {
    if channel >= IMPEDANCE_CHANNEL_COUNT {
        return Err(RangeError::ImpedanceChannel(channel));
    }
    Ok(())
}

/// A validated matrix mixer input (0-17).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MatrixInput(u8);

impl MatrixInput {
    pub fn new(index: usize) -> Result<Self, RangeError> {
        check_matrix_input(index)?;
        Ok(Self(index as u8))
    }

    pub fn iter() -> impl Iterator<Item = MatrixInput> {
        (0..MATRIX_INPUT_COUNT as u8).map(MatrixInput)
    }

    pub fn index(&self) -> u8 {
        self.0
    }
}

/// A validated physical input with an impedance switch (0-1).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InputChannel(u8);

impl InputChannel {
    pub fn new(index: usize) -> Result<Self, RangeError> {
        check_impedance_channel(index)?;
        Ok(Self(index as u8))
    }

    pub fn iter() -> impl Iterator<Item = InputChannel> {
        (0..IMPEDANCE_CHANNEL_COUNT as u8).map(InputChannel)
    }

    pub fn index(&self) -> u8 {
        self.0
    }
}

impl Topology {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_matrix_input_source(
        &mut self,
        input: usize,
        source: SignalSource,
    ) -> Result<(), RangeError> {
        self.set_source(MatrixInput::new(input)?, source);
        Ok(())
    }

    pub fn set_source(&mut self, input: MatrixInput, source: SignalSource) {
        self.matrix_sources[input.index() as usize] = source;
    }

    pub fn set_matrix_gain(&mut self, input: usize, bus: usize, db: f64) -> Result<(), RangeError> {
        let input = MatrixInput::new(input)?;
        let output = matrix_output_from_index(bus)?;
        self.set_gain(input, output, db);
        Ok(())
    }

    pub fn set_gain(&mut self, input: MatrixInput, output: MatrixOutput, db: f64) {
        self.matrix_gains[input.index() as usize][output.index() as usize] = db;
    }

    /// Assigns a source to a router destination, replacing whatever was there before.
    pub fn set_router_source(
        &mut self,
        destination: usize,
        source: impl Into<MixBus>,
    ) -> Result<(), RangeError> {
        let route = route_from_index(destination)?;
        self.set_route(route, source.into());
        Ok(())
    }

    pub fn set_route(&mut self, route: Route, source: MixBus) {
        self.router[route] = source;
    }

    pub fn set_mute(&mut self, bus: usize, muted: bool) -> Result<(), RangeError> {
        let bus = output_bus_from_index(bus)?;
        self.set_bus_mute(bus, muted);
        Ok(())
    }

    pub fn set_bus_mute(&mut self, bus: OutputBus, muted: bool) {
        match muted {
            true => self.muted.insert(bus),
            false => self.muted.remove(bus),
        };
    }

    pub fn set_attenuation(&mut self, bus: usize, db: f64) -> Result<(), RangeError> {
        let bus = output_bus_from_index(bus)?;
        self.set_bus_attenuation(bus, db);
        Ok(())
    }

    pub fn set_bus_attenuation(&mut self, bus: OutputBus, db: f64) {
        self.attenuation[bus] = db;
    }

    pub fn set_impedance(&mut self, channel: usize, mode: Impedance) -> Result<(), RangeError> {
        self.set_input_impedance(InputChannel::new(channel)?, mode);
        Ok(())
    }

    pub fn set_input_impedance(&mut self, channel: InputChannel, mode: Impedance) {
        self.impedance[channel.index() as usize] = mode;
    }

    pub fn set_clock_source(&mut self, source: ClockSource) {
        self.clock_source = source;
    }

    pub fn matrix_input_source(&self, input: usize) -> Result<SignalSource, RangeError> {
        check_matrix_input(input)?;
        Ok(self.matrix_sources[input])
    }

    pub fn matrix_gain(&self, input: usize, bus: usize) -> Result<f64, RangeError> {
        check_matrix_input(input)?;
        check_matrix_bus(bus)?;
        Ok(self.matrix_gains[input][bus])
    }

    pub fn router_source(&self, route: Route) -> MixBus {
        self.router[route]
    }

    /// Every destination currently fed by the given source (fan-out).
    pub fn router_destinations_for(&self, source: impl Into<MixBus>) -> Vec<Route> {
        let source = source.into();
        Route::iter()
            .filter(|route| self.router[*route] == source)
            .collect()
    }

    pub fn is_muted(&self, bus: OutputBus) -> bool {
        self.muted.contains(bus)
    }

    pub fn muted_buses(&self) -> EnumSet<OutputBus> {
        self.muted
    }

    pub fn attenuation(&self, bus: OutputBus) -> f64 {
        self.attenuation[bus]
    }

    pub fn impedance(&self, channel: usize) -> Result<Impedance, RangeError> {
        check_impedance_channel(channel)?;
        Ok(self.impedance[channel])
    }

    pub fn clock_source(&self) -> ClockSource {
        self.clock_source
    }

    /// True when no matrix input or router destination is connected to anything.
    pub fn is_disconnected(&self) -> bool {
        self.matrix_sources.iter().all(|s| *s == SignalSource::Off)
            && Route::iter().all(|r| self.router[r] == MixBus::Off)
    }
}
