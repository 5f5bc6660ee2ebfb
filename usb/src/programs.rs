// Bulk programs which put the whole topology into a known state.
//
// Each one updates the encoder's model and returns the requests in the order they need
// to be sent, so the device ends up matching the model once they've all been executed.

use crate::commands::ControlRequest;
use crate::encoder::MixerEncoder;
use crate::topology::{InputChannel, MatrixInput};
use scarlett_types::{ClockSource, Impedance, MatrixOutput, MixBus, OutputBus, Route, SignalSource};
use strum::IntoEnumIterator;

/// Anything sent at or below -128dB is a muted cell, this leaves plenty of room.
pub const MATRIX_FLOOR_DB: f64 = -200.0;

const NON_MASTER_BUSES: [OutputBus; 4] = [
    OutputBus::MonitorLeft,
    OutputBus::MonitorRight,
    OutputBus::PhonesLeft,
    OutputBus::PhonesRight,
];

fn factory_source(input: MatrixInput) -> SignalSource {
    let index = input.index();
    let source = match index {
        0..=7 => SignalSource::analogue(index + 1),
        8..=13 => SignalSource::adat(index - 7),
        14 | 15 => SignalSource::spdif(index - 13),
        _ => SignalSource::daw(index - 15),
    };
    source.unwrap_or(SignalSource::Off)
}

fn factory_route(route: Route) -> MixBus {
    match route {
        Route::MonitorLeft | Route::PhonesLeft => MixBus::M1,
        Route::MonitorRight | Route::PhonesRight => MixBus::M2,
        Route::SpdifLeft | Route::SpdifRight => MixBus::Off,
    }
}

/// Restores the routing the device ships with.
///
/// Every physical input goes into the matrix, with even inputs summed into M1 and odd
/// inputs into M2 (and so on up the buses), M1/M2 feed both monitor and phones.
pub fn factory_reset(encoder: &mut MixerEncoder) -> Vec<ControlRequest> {
    let mut requests = Vec::new();

    // Clear every assignment first, the device doesn't confirm this does anything on its own.
    for input in MatrixInput::iter() {
        requests.push(encoder.matrix_source(input, SignalSource::Off));
    }

    for route in Route::iter() {
        requests.push(encoder.route(route, factory_route(route)));
    }

    for input in MatrixInput::iter() {
        requests.push(encoder.matrix_source(input, factory_source(input)));
    }

    for input in MatrixInput::iter() {
        for output in MatrixOutput::iter() {
            let gain = match input.index() % 2 == output.index() {
                true => 0.0,
                false => MATRIX_FLOOR_DB,
            };
            requests.push(encoder.matrix_gain(input, output, gain));
        }
    }

    for bus in NON_MASTER_BUSES {
        requests.push(encoder.mute(bus, false));
    }

    for channel in InputChannel::iter() {
        requests.push(encoder.impedance(channel, Impedance::LineIn));
    }

    requests
}

/// Silences and disconnects everything, the starting point for building a new configuration.
pub fn zero_settings(encoder: &mut MixerEncoder) -> Vec<ControlRequest> {
    let mut requests = Vec::new();

    for input in MatrixInput::iter() {
        for output in MatrixOutput::iter() {
            requests.push(encoder.matrix_gain(input, output, MATRIX_FLOOR_DB));
        }
    }

    for input in MatrixInput::iter() {
        requests.push(encoder.matrix_source(input, SignalSource::Off));
    }

    for route in Route::iter() {
        requests.push(encoder.route(route, MixBus::Off));
    }

    for bus in NON_MASTER_BUSES {
        requests.push(encoder.mute(bus, false));
    }

    requests
}

/// Bypasses the matrix mixer, sending DAW 1 straight to the monitor and phones outputs.
pub fn daw_passthrough(encoder: &mut MixerEncoder) -> Vec<ControlRequest> {
    let mut requests = Vec::new();

    for channel in InputChannel::iter() {
        requests.push(encoder.impedance(channel, Impedance::LineIn));
    }
    requests.push(encoder.set_clock_source(ClockSource::Internal));

    for route in Route::iter() {
        let source = match route {
            Route::SpdifLeft | Route::SpdifRight => SignalSource::Off,
            _ => SignalSource::Daw1,
        };
        requests.push(encoder.route(route, source));
    }

    for bus in OutputBus::iter() {
        requests.push(encoder.mute(bus, false));
    }

    requests.push(encoder.attenuate_master(0.0));
    requests.extend(encoder.attenuate_monitor(0.0, 0.0));
    requests.extend(encoder.attenuate_phones(0.0, 0.0));

    requests
}
