use std::io::{ErrorKind, Read, Write};
use std::net::{SocketAddr, TcpStream};
use std::time::{Duration, Instant};

use anyhow::Context;
use macroquad::prelude::*;
use serde::Deserialize;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(3);
const WARM_UP_POLL_INTERVAL: Duration = Duration::from_millis(50);
// No valid packet comes close to this; anything longer without a line
// break is a misbehaving connector and gets dropped.
const MAX_PENDING_BYTES: usize = 8 * 1024;

/// A producer of the blink-strength scalar, owned by the loop driver.
/// The driver calls [SignalSource::poll] once per frame; a source must
/// never block there. [SignalSource::blink_strength] is the sample for
/// the current frame, 0.0 when nothing fresh arrived.
pub trait SignalSource {
    fn connect(&mut self) -> anyhow::Result<()>;
    fn start(&mut self) -> anyhow::Result<()>;
    /// Drain whatever the device produced since the last frame.
    fn poll(&mut self);
    fn blink_strength(&self) -> f32;
    /// Whether the source has produced anything at all yet. Drives
    /// the warm-up phase.
    fn has_reading(&self) -> bool;
}

/// Pick the source the CLI asked for.
pub fn from_cli(args: &crate::cli::Args) -> Box<dyn SignalSource> {
    match &args.headset {
        Some(addr) => Box::new(ThinkGearSource::new(addr.clone())),
        None => Box::new(KeyboardSignal::default()),
    }
}

/// Explicit warm-up phase run once before the frame loop, replacing
/// any per-frame waiting. Gives the device session time to stabilize;
/// past the deadline the game starts with the default reading.
pub fn warm_up(source: &mut dyn SignalSource, timeout: Duration) {
    let started = Instant::now();
    while !source.has_reading() {
        if started.elapsed() >= timeout {
            warn!("no signal sample within {timeout:?}, starting with the default reading");
            return;
        }
        source.poll();
        std::thread::sleep(WARM_UP_POLL_INTERVAL);
    }
    info!("signal source ready after {:?}", started.elapsed());
}

/// One JSON line from the ThinkGear connector. Most packets carry
/// signal-quality or eSense data; only blink events matter here.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThinkGearPacket {
    #[serde(default)]
    blink_strength: Option<f32>,
    #[serde(default)]
    poor_signal_level: Option<u8>,
}

/// The NeuroSky ThinkGear connector: a local TCP service speaking
/// newline-delimited JSON. We subscribe once and then read the socket
/// non-blockingly, keeping the most recent blink event of each frame.
pub struct ThinkGearSource {
    addr: String,
    stream: Option<TcpStream>,
    buf: Vec<u8>,
    sample: f32,
    seen_any: bool,
}

impl ThinkGearSource {
    pub fn new(addr: String) -> Self {
        Self {
            addr,
            stream: None,
            buf: Vec::new(),
            sample: 0.0,
            seen_any: false,
        }
    }

    fn drain_socket(&mut self) {
        let Some(stream) = self.stream.as_mut() else {
            return;
        };

        let mut chunk = [0u8; 1024];
        loop {
            match stream.read(&mut chunk) {
                Ok(0) => {
                    warn!("signal source closed the connection");
                    self.stream = None;
                    break;
                }
                Ok(n) => self.buf.extend_from_slice(&chunk[..n]),
                Err(e) if e.kind() == ErrorKind::WouldBlock => break,
                Err(e) => {
                    warn!("signal read error: {e}");
                    self.stream = None;
                    break;
                }
            }
        }
    }

    fn parse_lines(&mut self) {
        while let Some(pos) = self.buf.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.buf.drain(..=pos).collect();
            let Ok(text) = std::str::from_utf8(&line) else {
                continue;
            };
            let Ok(packet) = serde_json::from_str::<ThinkGearPacket>(text.trim()) else {
                continue;
            };

            self.seen_any = true;
            if let Some(quality) = packet.poor_signal_level {
                if quality > 0 {
                    debug!("headset signal quality degraded: {quality}");
                }
            }
            if let Some(strength) = packet.blink_strength {
                debug!("blink event, strength {strength}");
                self.sample = strength;
            }
        }

        if self.buf.len() > MAX_PENDING_BYTES {
            warn!(
                "dropping {} pending bytes without a line break",
                self.buf.len()
            );
            self.buf.clear();
        }
    }
}

impl SignalSource for ThinkGearSource {
    fn connect(&mut self) -> anyhow::Result<()> {
        let addr: SocketAddr = self
            .addr
            .parse()
            .with_context(|| format!("bad ThinkGear address {:?}", self.addr))?;
        let stream = TcpStream::connect_timeout(&addr, CONNECT_TIMEOUT)
            .with_context(|| format!("connecting to the ThinkGear connector at {addr}"))?;
        stream.set_nonblocking(true)?;
        self.stream = Some(stream);
        info!("connected to the ThinkGear connector at {addr}");
        Ok(())
    }

    fn start(&mut self) -> anyhow::Result<()> {
        let stream = self
            .stream
            .as_mut()
            .context("signal source is not connected")?;
        stream.write_all(b"{\"enableRawOutput\": false, \"format\": \"Json\"}\n")?;
        Ok(())
    }

    fn poll(&mut self) {
        // Each frame consumes only its own blink events.
        self.sample = 0.0;
        self.drain_socket();
        self.parse_lines();
    }

    fn blink_strength(&self) -> f32 {
        self.sample
    }

    fn has_reading(&self) -> bool {
        self.seen_any
    }
}

/// Stand-in source for running without a headset: a held Space bar
/// reads as a full-strength blink.
#[derive(Default)]
pub struct KeyboardSignal {
    sample: f32,
}

impl SignalSource for KeyboardSignal {
    fn connect(&mut self) -> anyhow::Result<()> {
        info!("using the keyboard signal source, Space is a blink");
        Ok(())
    }

    fn start(&mut self) -> anyhow::Result<()> {
        Ok(())
    }

    fn poll(&mut self) {
        self.sample = if is_key_down(KeyCode::Space) {
            100.0
        } else {
            0.0
        };
    }

    fn blink_strength(&self) -> f32 {
        self.sample
    }

    fn has_reading(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offline_source() -> ThinkGearSource {
        ThinkGearSource::new("127.0.0.1:13854".to_owned())
    }

    #[test]
    fn parses_blink_events_out_of_the_line_stream() {
        let mut source = offline_source();
        source
            .buf
            .extend_from_slice(b"{\"poorSignalLevel\": 0}\n{\"blinkStrength\": 61}\n");

        source.parse_lines();

        assert_eq!(source.blink_strength(), 61.0);
        assert!(source.has_reading());
        assert!(source.buf.is_empty());
    }

    #[test]
    fn keeps_a_split_packet_until_its_newline_arrives() {
        let mut source = offline_source();
        source.buf.extend_from_slice(b"{\"blinkSt");

        source.parse_lines();
        assert_eq!(source.blink_strength(), 0.0);
        assert!(!source.buf.is_empty());

        source.buf.extend_from_slice(b"rength\": 80}\n");
        source.parse_lines();
        assert_eq!(source.blink_strength(), 80.0);
        assert!(source.buf.is_empty());
    }

    #[test]
    fn garbage_without_newlines_cannot_grow_the_buffer() {
        let mut source = offline_source();

        for _ in 0..100 {
            source.buf.extend_from_slice(&[b'x'; 1024]);
            source.parse_lines();
            assert!(source.buf.len() <= MAX_PENDING_BYTES);
        }

        assert!(!source.has_reading());
        assert_eq!(source.blink_strength(), 0.0);
    }
}
