// Serial adapter - line-framed JSON telemetry over a tokio-serial port
use crate::application::frame_source::{FrameSource, SourceError};
use crate::infrastructure::config::SerialConfig;
use async_trait::async_trait;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::timeout;
use tokio_serial::{SerialPortBuilderExt, SerialStream};

pub struct SerialFrameSource {
    reader: BufReader<SerialStream>,
    read_timeout: Duration,
}

impl SerialFrameSource {
    pub fn open(config: &SerialConfig) -> Result<Self, SourceError> {
        let stream = tokio_serial::new(config.port.as_str(), config.baud_rate)
            .open_native_async()
            .map_err(|e| SourceError::Unavailable(e.to_string()))?;
        tracing::info!("Opened serial port {} at {} baud", config.port, config.baud_rate);

        Ok(Self {
            reader: BufReader::new(stream),
            read_timeout: config.read_timeout(),
        })
    }
}

#[async_trait]
impl FrameSource for SerialFrameSource {
    async fn next_line(&mut self) -> Result<Option<String>, SourceError> {
        let mut line = String::new();
        match timeout(self.read_timeout, self.reader.read_line(&mut line)).await {
            // Nothing arrived within the window; the caller just polls again.
            Err(_) => Ok(None),
            Ok(Ok(0)) => Err(SourceError::Closed),
            Ok(Ok(_)) => {
                let line = line.trim();
                if line.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(line.to_string()))
                }
            }
            Ok(Err(e)) => Err(SourceError::Io(e)),
        }
    }
}
