use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::{create_dir_all, File};
use std::io::ErrorKind;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub usb_timeout_ms: u64,

    /// The unit to talk to when more than one is attached.
    pub device: Option<DeviceSelector>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceSelector {
    pub bus_number: u8,
    pub address: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            usb_timeout_ms: 1000,
            device: None,
        }
    }
}

impl Settings {
    /// Reads the settings, then writes them back so a fresh install gets a file to edit.
    pub fn load(path: &Path) -> Result<Settings> {
        let settings = Settings::read(path)?;
        settings.write(path)?;
        Ok(settings)
    }

    pub fn read(path: &Path) -> Result<Settings> {
        match File::open(path) {
            Ok(reader) => serde_json::from_reader(reader).context(format!(
                "Could not parse client settings file at {}",
                path.to_string_lossy()
            )),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(Settings::default()),
            Err(error) => Err(error).context(format!(
                "Could not open client settings file for reading at {}",
                path.to_string_lossy()
            )),
        }
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if let Err(e) = create_dir_all(parent) {
                if e.kind() != ErrorKind::AlreadyExists {
                    return Err(e).context(format!(
                        "Could not create settings directory at {}",
                        parent.to_string_lossy()
                    ));
                }
            }
        }
        let writer = File::create(path).context(format!(
            "Could not open client settings file for writing at {}",
            path.to_string_lossy()
        ))?;
        serde_json::to_writer_pretty(writer, self).context(format!(
            "Could not write to client settings file at {}",
            path.to_string_lossy()
        ))?;
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.usb_timeout_ms)
    }
}
