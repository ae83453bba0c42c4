//! TCP transport to the controller's state socket

use super::Transport;
use crate::error::{Error, Result};
use std::io::{Read, Write};
use std::net::{Ipv4Addr, Shutdown, SocketAddrV4, TcpStream};

/// TCP transport bound to one controller endpoint
///
/// The stream is opened once at connect time and read synchronously on
/// demand by the control loop. The OS handle is released exactly once when
/// the transport is dropped, including on early-return failure paths.
pub struct TcpTransport {
    stream: TcpStream,
}

impl TcpTransport {
    /// Connect to the controller's state-reporting endpoint
    ///
    /// # Arguments
    /// * `host` - Controller IPv4 address in text form (e.g., "192.168.1.100")
    /// * `port` - State socket port
    ///
    /// The address is validated before any socket is created.
    pub fn connect(host: &str, port: u16) -> Result<Self> {
        let ip: Ipv4Addr = host
            .parse()
            .map_err(|_| Error::InvalidAddress(host.to_string()))?;
        let addr = SocketAddrV4::new(ip, port);

        let stream = TcpStream::connect(addr).map_err(|source| Error::ConnectionFailed {
            addr: addr.to_string(),
            source,
        })?;
        // Status frames are small and latency-sensitive
        stream.set_nodelay(true)?;

        log::info!("Connected to robot state socket at {}", addr);

        Ok(TcpTransport { stream })
    }

    /// Shut down both directions of the stream
    ///
    /// Idempotent; safe to call more than once before drop.
    pub fn shutdown(&self) {
        let _ = self.stream.shutdown(Shutdown::Both);
    }
}

impl Transport for TcpTransport {
    fn read(&mut self, buffer: &mut [u8]) -> Result<usize> {
        Ok(self.stream.read(buffer)?)
    }

    fn write(&mut self, data: &[u8]) -> Result<usize> {
        Ok(self.stream.write(data)?)
    }

    fn flush(&mut self) -> Result<()> {
        self.stream.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::TcpListener;
    use std::thread;

    #[test]
    fn test_invalid_address_rejected_before_connect() {
        match TcpTransport::connect("not-an-ip", 59002) {
            Err(Error::InvalidAddress(addr)) => assert_eq!(addr, "not-an-ip"),
            other => panic!("expected InvalidAddress, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_hostname_is_not_accepted() {
        // Only textual IPv4 is valid; no name resolution is performed
        assert!(matches!(
            TcpTransport::connect("robot.local", 59002),
            Err(Error::InvalidAddress(_))
        ));
    }

    #[test]
    fn test_connect_and_read() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();

        let server = thread::spawn(move || {
            let (mut peer, _) = listener.accept().unwrap();
            use std::io::Write;
            peer.write_all(&[0xDE, 0xAD, 0xBE, 0xEF]).unwrap();
        });

        let mut transport = TcpTransport::connect("127.0.0.1", port).unwrap();
        let mut buf = [0u8; 4];
        transport.read_exact(&mut buf).unwrap();
        assert_eq!(buf, [0xDE, 0xAD, 0xBE, 0xEF]);

        transport.shutdown();
        transport.shutdown(); // idempotent
        server.join().unwrap();
    }

    #[test]
    fn test_connect_refused() {
        // Grab a free port, then close the listener so nothing accepts
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        assert!(matches!(
            TcpTransport::connect("127.0.0.1", port),
            Err(Error::ConnectionFailed { .. })
        ));
    }
}
