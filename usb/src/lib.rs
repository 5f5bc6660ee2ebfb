pub use rusb;
pub mod codec;
pub mod commands;
pub mod device;
pub mod encoder;
pub mod error;
pub mod meters;
pub mod programs;
pub mod scarlett;
pub mod topology;

pub const VID_FOCUSRITE: u16 = 0x1235;
pub const PID_SCARLETT_18I6: u16 = 0x8004;
