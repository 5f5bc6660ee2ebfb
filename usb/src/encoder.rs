use crate::codec::{attenuation_to_wire, gain_to_wire};
use crate::commands::{Command, ControlRequest};
use crate::error::RangeError;
use crate::topology::{
    matrix_output_from_index, output_bus_from_index, route_from_index, InputChannel,
    MatrixInput, Topology,
};
use scarlett_types::{
    ClockSource, Impedance, MatrixOutput, MixBus, MuteState, OutputBus, Route, SignalSource,
};

/// Turns topology changes into the control requests needed to mirror them on the device.
///
/// Out of range addressing is rejected with a [RangeError]; in that case the model is left
/// alone and nothing is emitted. The typed variants (`route`, `mute`, ...) take addresses
/// which are already known to be valid, and can't fail.
#[derive(Debug, Default, Clone)]
pub struct MixerEncoder {
    topology: Topology,
}

impl MixerEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_topology(topology: Topology) -> Self {
        Self { topology }
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn set_impedance(
        &mut self,
        channel: usize,
        mode: Impedance,
    ) -> Result<ControlRequest, RangeError> {
        Ok(self.impedance(InputChannel::new(channel)?, mode))
    }

    pub fn impedance(&mut self, channel: InputChannel, mode: Impedance) -> ControlRequest {
        self.topology.set_input_impedance(channel, mode);
        ControlRequest::new(Command::SetImpedance(channel), &[mode.id(), 0x00])
    }

    pub fn set_clock_source(&mut self, source: ClockSource) -> ControlRequest {
        self.topology.set_clock_source(source);
        ControlRequest::new(Command::SetClockSource, &[source.id()])
    }

    pub fn set_mute(&mut self, bus: usize, muted: bool) -> Result<ControlRequest, RangeError> {
        Ok(self.mute(output_bus_from_index(bus)?, muted))
    }

    pub fn mute(&mut self, bus: OutputBus, muted: bool) -> ControlRequest {
        self.topology.set_bus_mute(bus, muted);
        ControlRequest::new(Command::SetBusMute(bus), &MuteState::from(muted).id())
    }

    pub fn set_attenuation(&mut self, bus: usize, db: f64) -> Result<ControlRequest, RangeError> {
        Ok(self.attenuate(output_bus_from_index(bus)?, db))
    }

    pub fn attenuate(&mut self, bus: OutputBus, db: f64) -> ControlRequest {
        self.topology.set_bus_attenuation(bus, db);
        ControlRequest::new(Command::SetBusAttenuation(bus), &attenuation_to_wire(db))
    }

    pub fn attenuate_master(&mut self, db: f64) -> ControlRequest {
        self.attenuate(OutputBus::Master, db)
    }

    pub fn attenuate_monitor(&mut self, left: f64, right: f64) -> Vec<ControlRequest> {
        vec![
            self.attenuate(OutputBus::MonitorLeft, left),
            self.attenuate(OutputBus::MonitorRight, right),
        ]
    }

    pub fn attenuate_phones(&mut self, left: f64, right: f64) -> Vec<ControlRequest> {
        vec![
            self.attenuate(OutputBus::PhonesLeft, left),
            self.attenuate(OutputBus::PhonesRight, right),
        ]
    }

    pub fn set_matrix_input_source(
        &mut self,
        input: usize,
        source: SignalSource,
    ) -> Result<ControlRequest, RangeError> {
        Ok(self.matrix_source(MatrixInput::new(input)?, source))
    }

    pub fn matrix_source(&mut self, input: MatrixInput, source: SignalSource) -> ControlRequest {
        self.topology.set_source(input, source);
        ControlRequest::new(Command::SetMatrixSource(input), &[source.id(), 0x00])
    }

    pub fn set_matrix_gain(
        &mut self,
        input: usize,
        bus: usize,
        db: f64,
    ) -> Result<ControlRequest, RangeError> {
        let input = MatrixInput::new(input)?;
        let output = matrix_output_from_index(bus)?;
        Ok(self.matrix_gain(input, output, db))
    }

    pub fn matrix_gain(
        &mut self,
        input: MatrixInput,
        output: MatrixOutput,
        db: f64,
    ) -> ControlRequest {
        self.topology.set_gain(input, output, db);
        ControlRequest::new(Command::SetMatrixGain(input, output), &gain_to_wire(db))
    }

    pub fn set_router_source(
        &mut self,
        destination: usize,
        source: impl Into<MixBus>,
    ) -> Result<ControlRequest, RangeError> {
        Ok(self.route(route_from_index(destination)?, source))
    }

    pub fn route(&mut self, route: Route, source: impl Into<MixBus>) -> ControlRequest {
        let source = source.into();
        self.topology.set_route(route, source);
        ControlRequest::new(Command::SetRoute(route), &[source.id(), 0x00])
    }

    pub fn save_to_hardware(&self) -> ControlRequest {
        ControlRequest::save_to_hardware()
    }
}
