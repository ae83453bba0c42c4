//! Transport layer for controller I/O abstraction

use crate::error::{Error, Result};

mod mock;
mod tcp;
pub use mock::MockTransport;
pub use tcp::TcpTransport;

/// Transport trait for byte-stream communication with the controller
pub trait Transport: Send {
    /// Read data into buffer, returns number of bytes read (0 means EOF)
    fn read(&mut self, buffer: &mut [u8]) -> Result<usize>;

    /// Write data from buffer, returns number of bytes written
    fn write(&mut self, data: &[u8]) -> Result<usize>;

    /// Flush any pending writes (blocking until complete)
    fn flush(&mut self) -> Result<()>;

    /// Check if data is available to read
    fn available(&mut self) -> Result<usize> {
        Ok(0) // Default implementation
    }

    /// Read until `buffer` is completely full, blocking as needed.
    ///
    /// A stream that ends before the buffer fills is a hard error: an
    /// under-filled buffer must never be interpreted as frame data.
    fn read_exact(&mut self, buffer: &mut [u8]) -> Result<()> {
        let mut filled = 0;
        while filled < buffer.len() {
            match self.read(&mut buffer[filled..])? {
                0 => {
                    return Err(Error::ShortRead {
                        expected: buffer.len(),
                        actual: filled,
                    });
                }
                n => filled += n,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_exact_fills_buffer_across_reads() {
        let mock = MockTransport::new();
        mock.inject_read(&[1, 2, 3, 4, 5, 6]);

        let mut transport = mock.clone();
        let mut buf = [0u8; 4];
        transport.read_exact(&mut buf).unwrap();
        assert_eq!(buf, [1, 2, 3, 4]);
        assert_eq!(transport.available().unwrap(), 2);
    }

    #[test]
    fn test_read_exact_short_stream_is_error() {
        let mock = MockTransport::new();
        mock.inject_read(&[0xAA, 0xBB]);

        let mut transport = mock.clone();
        let mut buf = [0u8; 4];
        match transport.read_exact(&mut buf) {
            Err(Error::ShortRead { expected, actual }) => {
                assert_eq!(expected, 4);
                assert_eq!(actual, 2);
            }
            other => panic!("expected ShortRead, got {:?}", other),
        }
    }
}
