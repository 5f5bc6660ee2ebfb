mod common;

use common::RecordingTransport;
use scarlett_types::{ClockSource, Impedance, MatrixOutput, MixBus, OutputBus, Route, SignalSource};
use scarlett_usb::commands::{ControlRequest, REQUEST_SET};
use scarlett_usb::error::{CommandError, FormatError, RangeError, TransportError};
use scarlett_usb::meters::MeterBlock;
use scarlett_usb::scarlett::Scarlett;
use scarlett_usb::topology::Topology;

fn request(value: u16, index: u16, payload: &[u8]) -> ControlRequest {
    ControlRequest {
        request: REQUEST_SET,
        value,
        index,
        payload: payload.to_vec(),
    }
}

#[test]
fn mutators_send_one_request_each() {
    let mut scarlett = Scarlett::new(RecordingTransport::default());

    scarlett.set_matrix_input_source(0, SignalSource::Analogue1).unwrap();
    scarlett.set_matrix_gain(3, 2, 0.0).unwrap();
    scarlett.set_router_source(0, MatrixOutput::M1).unwrap();
    scarlett.set_mute(2, true).unwrap();
    scarlett.set_attenuation(0, -6.0).unwrap();
    scarlett.set_impedance(1, Impedance::Instrument).unwrap();
    scarlett.set_clock_source(ClockSource::Adat).unwrap();

    let sent = &scarlett.device().sent;
    assert_eq!(
        sent,
        &vec![
            request(0x0600, 0x3200, &[0x06, 0x00]),
            request(0x011a, 0x3c00, &[0x00, 0x00]),
            request(0x0000, 0x3300, &[0x18, 0x00]),
            request(0x0102, 0x0a00, &[0x01, 0x00]),
            request(0x0200, 0x0a00, &[0x01, 0xfa]),
            request(0x0902, 0x0100, &[0x01, 0x00]),
            request(0x0100, 0x2800, &[0x03]),
        ]
    );

    let topology = scarlett.topology();
    assert_eq!(topology.matrix_input_source(0), Ok(SignalSource::Analogue1));
    assert_eq!(topology.router_source(Route::MonitorLeft), MixBus::M1);
    assert!(topology.is_muted(OutputBus::MonitorRight));
    assert_eq!(topology.clock_source(), ClockSource::Adat);
}

#[test]
fn out_of_range_sends_nothing() {
    let mut scarlett = Scarlett::new(RecordingTransport::default());

    let result = scarlett.set_matrix_input_source(18, SignalSource::Daw1);
    assert!(matches!(
        result,
        Err(CommandError::Range(RangeError::MatrixInput(18)))
    ));

    assert!(matches!(
        scarlett.set_matrix_gain(0, 6, 0.0),
        Err(CommandError::Range(RangeError::MatrixBus(6)))
    ));
    assert!(matches!(
        scarlett.set_router_source(6, SignalSource::Daw1),
        Err(CommandError::Range(RangeError::RouteDestination(6)))
    ));
    assert!(matches!(
        scarlett.set_mute(5, true),
        Err(CommandError::Range(RangeError::OutputBus(5)))
    ));
    assert!(matches!(
        scarlett.set_impedance(2, Impedance::Instrument),
        Err(CommandError::Range(RangeError::ImpedanceChannel(2)))
    ));

    assert!(scarlett.device().sent.is_empty());
    assert_eq!(scarlett.topology().matrix_input_source(17), Ok(SignalSource::Off));
}

#[test]
fn routing_replaces_previous_source() {
    let mut scarlett = Scarlett::new(RecordingTransport::default());
    scarlett.set_router_source(2, SignalSource::Daw1).unwrap();
    scarlett.set_router_source(2, MatrixOutput::M4).unwrap();

    let topology = scarlett.topology();
    assert_eq!(topology.router_source(Route::PhonesLeft), MixBus::M4);
    assert!(topology.router_destinations_for(SignalSource::Daw1).is_empty());
    assert_eq!(scarlett.device().sent.len(), 2);
}

#[test]
fn program_request_counts() {
    let mut scarlett = Scarlett::new(RecordingTransport::default());

    scarlett.factory_reset().unwrap();
    assert_eq!(scarlett.device().sent.len(), 156);

    scarlett.device().sent.clear();
    scarlett.zero_settings().unwrap();
    assert_eq!(scarlett.device().sent.len(), 136);

    scarlett.device().sent.clear();
    scarlett.daw_passthrough().unwrap();
    assert_eq!(scarlett.device().sent.len(), 19);
}

#[test]
fn zero_settings_then_silence() {
    let mut scarlett = Scarlett::new(RecordingTransport::default());
    scarlett.zero_settings().unwrap();
    assert!(scarlett.topology().is_disconnected());

    let meters = scarlett.read_meters().unwrap();
    assert!(meters.is_silent());
    assert!(meters
        .inputs()
        .iter()
        .chain(meters.daw())
        .chain(meters.mixer())
        .all(|level| *level == f64::NEG_INFINITY));
}

#[test]
fn meter_reads_address_each_block() {
    let mut scarlett = Scarlett::new(RecordingTransport::default());
    scarlett.read_meters().unwrap();

    assert_eq!(
        scarlett.device().reads,
        vec![
            (0x03, 0x0000, 0x3c00, 36),
            (0x03, 0x0003, 0x3c00, 12),
            (0x03, 0x0001, 0x3c00, 16),
        ]
    );
}

#[test]
fn short_meter_block_is_a_format_error() {
    let transport = RecordingTransport {
        input_block: Some(vec![0; 35]),
        ..Default::default()
    };
    let mut scarlett = Scarlett::new(transport);

    let result = scarlett.read_meters();
    assert!(matches!(
        result,
        Err(CommandError::Format(FormatError::MeterBlockLength {
            block: MeterBlock::Input,
            expected: 36,
            actual: 35,
        }))
    ));
}

#[test]
fn transport_errors_stop_programs() {
    let mut scarlett = Scarlett::new(RecordingTransport::failing_after(10));

    let result = scarlett.factory_reset();
    assert!(matches!(
        result,
        Err(CommandError::Transport(TransportError::UsbError(_)))
    ));
    assert_eq!(scarlett.device().sent.len(), 10);

    // The model has already moved on, the device can't be asked what it missed.
    assert_eq!(scarlett.topology().router_source(Route::MonitorLeft), MixBus::M1);
}

#[test]
fn save_sends_magic_byte() {
    let mut scarlett = Scarlett::new(RecordingTransport::default());
    scarlett.save_to_hardware().unwrap();

    let transport = scarlett.into_transport();
    assert_eq!(transport.sent, vec![ControlRequest::save_to_hardware()]);
    assert_eq!(transport.sent[0].payload, vec![0xa5]);
}

#[test]
fn failed_send_leaves_model_alone() {
    let mut scarlett = Scarlett::new(RecordingTransport::failing_after(0));

    assert!(matches!(
        scarlett.set_mute(1, true),
        Err(CommandError::Transport(TransportError::UsbError(_)))
    ));
    assert!(scarlett.set_router_source(0, MatrixOutput::M1).is_err());
    assert!(scarlett.set_matrix_gain(3, 2, 0.0).is_err());
    assert!(scarlett.set_clock_source(ClockSource::Spdif).is_err());

    assert_eq!(scarlett.topology(), &Topology::default());
    assert!(scarlett.device().sent.is_empty());
}

#[test]
fn split_attenuation_keeps_the_side_that_was_sent() {
    let mut scarlett = Scarlett::new(RecordingTransport::failing_after(1));

    assert!(scarlett.attenuate_monitor(-6.0, -12.0).is_err());
    let topology = scarlett.topology();
    assert_eq!(topology.attenuation(OutputBus::MonitorLeft), -6.0);
    assert_eq!(topology.attenuation(OutputBus::MonitorRight), 0.0);
}

#[test]
fn debug_logging_with_huge_index() {
    log::set_max_level(log::LevelFilter::Debug);
    let mut scarlett = Scarlett::new(RecordingTransport::default());

    assert!(matches!(
        scarlett.set_impedance(usize::MAX, Impedance::Instrument),
        Err(CommandError::Range(RangeError::ImpedanceChannel(usize::MAX)))
    ));
    assert!(matches!(
        scarlett.set_matrix_gain(usize::MAX, usize::MAX, 0.0),
        Err(CommandError::Range(RangeError::MatrixInput(usize::MAX)))
    ));
    assert!(scarlett.device().sent.is_empty());
}

#[test]
fn resumes_from_existing_model() {
    let mut first = Scarlett::new(RecordingTransport::default());
    first.daw_passthrough().unwrap();
    let topology = first.topology().clone();

    let mut second = Scarlett::with_topology(RecordingTransport::default(), topology);
    assert_eq!(second.topology().router_source(Route::PhonesRight), MixBus::Daw1);

    second.set_router_source(3, MatrixOutput::M2).unwrap();
    assert_eq!(second.device().sent.len(), 1);
    assert_eq!(second.topology().router_source(Route::PhonesRight), MixBus::M2);
    assert_eq!(second.topology().router_source(Route::PhonesLeft), MixBus::Daw1);
}
