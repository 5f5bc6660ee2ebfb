// Fixed point conversions between decibels and the 18i6 wire format.
//
// Both gain and attenuation are sent as a 16bit little endian 8.8 value, so the whole dB
// part lives in the second byte. The bias (65536.5) and thresholds were taken from USB
// captures of the vendor mixer, and need to be reproduced exactly.

/// Anything at or below this is sent as 'fully attenuated'.
pub const ATTENUATION_FLOOR_DB: f64 = -128.0;

pub const GAIN_CEILING_DB: i32 = 6;
pub const GAIN_FLOOR_DB: i32 = -128;

/// Value the device reads as 'muted' for both gain and attenuation.
pub const MUTE_SENTINEL: [u8; 2] = [0x00, 0x80];
pub const UNITY: [u8; 2] = [0x00, 0x00];

// Full scale reference for a meter sample.
const METER_FULL_SCALE: f64 = 65536.0;

/// Converts a post-routing attenuation (-inf .. 0 dB) to its wire value.
pub fn attenuation_to_wire(db: f64) -> [u8; 2] {
    if db.is_nan() || db <= ATTENUATION_FLOOR_DB {
        return MUTE_SENTINEL;
    }
    if db >= 0.0 {
        return UNITY;
    }

    // Values just below 0dB round up to 0x10000, the top bit is dropped by the device.
    let value = ((65536.5 + 256.0 * db).round() as u32 & 0xffff) as u16;
    value.to_le_bytes()
}

/// Converts a matrix mixer gain (-inf .. +6 dB) to its wire value, in whole dB steps.
pub fn gain_to_wire(db: f64) -> [u8; 2] {
    if db.is_nan() {
        return MUTE_SENTINEL;
    }

    let rounded = db.round();
    if rounded <= GAIN_FLOOR_DB as f64 {
        return MUTE_SENTINEL;
    }

    let value = (rounded as i32).min(GAIN_CEILING_DB);
    [0x00, value as i8 as u8]
}

/// Converts a raw meter sample to dBFS, where 65536 is full scale and 0 is silence.
pub fn meter_sample_to_db(sample: u32) -> f64 {
    if sample == 0 {
        return f64::NEG_INFINITY;
    }
    20.0 * (sample as f64 / METER_FULL_SCALE).log10()
}
