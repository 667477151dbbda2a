use std::io::Write;
use std::time::Duration;
use serialport::SerialPort;
use crate::control::centering::{MIN_ANGLE, MAX_ANGLE};
use crate::utils::log_entry::transport::TransportEntry;

pub struct ServoCommander {
    port: Box<dyn SerialPort>,
}

impl ServoCommander {
    pub fn open(port_name: &str, baud_rate: u32, timeout: Duration) -> Result<Self, TransportEntry> {
        let port = serialport::new(port_name, baud_rate)
            .timeout(timeout)
            .open()
            .map_err(|err| TransportEntry::OpenError(port_name.to_string(), err.to_string()))?;
        Ok(Self {
            port,
        })
    }

    pub fn send_angle(&mut self, angle: i32) -> Result<(), TransportEntry> {
        let command = Self::encode_angle(angle);
        self.port.write_all(&command)
            .map_err(|err| TransportEntry::WriteError(err.to_string()))?;
        self.port.flush()
            .map_err(|err| TransportEntry::FlushError(err.to_string()))?;
        Ok(())
    }

    //ASCII decimal degrees terminated by a newline, one line per command.
    pub fn encode_angle(angle: i32) -> Vec<u8> {
        format!("{}\n", angle.clamp(MIN_ANGLE, MAX_ANGLE)).into_bytes()
    }
}
