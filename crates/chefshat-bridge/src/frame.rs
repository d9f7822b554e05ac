//! Terminator-delimited framing
//!
//! A frame is an opaque payload followed by the 4-byte terminator `.EOF`.
//! There is no length prefix: reception accumulates fixed-size chunks until
//! the buffer ends with the terminator, then strips it. Payloads on this
//! wire are JSON or tagged ASCII, neither of which ends with the terminator
//! bytes. A payload with `.EOF` landing exactly at a chunk boundary would
//! still false-terminate; that is a limit of the wire contract, not a
//! checked invariant.

use chefshat_core::{ChefsHatError, Result};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// Frame terminator suffix.
pub const TERMINATOR: &[u8] = b".EOF";
/// Bytes read per chunk while waiting for the terminator.
pub const READ_CHUNK: usize = 1024;
/// Cap on accumulated frame size (64MB guard against a runaway peer).
pub const MAX_FRAME: usize = 64 * 1024 * 1024;

/// Write one payload and its terminator.
pub async fn write_frame<W>(writer: &mut W, payload: &[u8]) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    writer
        .write_all(payload)
        .await
        .map_err(|e| ChefsHatError::Transport(format!("Frame write failed: {}", e)))?;
    writer
        .write_all(TERMINATOR)
        .await
        .map_err(|e| ChefsHatError::Transport(format!("Terminator write failed: {}", e)))?;
    writer
        .flush()
        .await
        .map_err(|e| ChefsHatError::Transport(format!("Frame flush failed: {}", e)))?;
    Ok(())
}

/// Read one frame, returning the payload with the terminator stripped.
pub async fn read_frame<R>(reader: &mut R) -> Result<Vec<u8>>
where
    R: AsyncRead + Unpin,
{
    let mut buffer = Vec::with_capacity(READ_CHUNK);
    let mut chunk = [0u8; READ_CHUNK];
    loop {
        let n = reader
            .read(&mut chunk)
            .await
            .map_err(|e| ChefsHatError::Transport(format!("Frame read failed: {}", e)))?;
        if n == 0 {
            return Err(ChefsHatError::Protocol(
                "Connection closed before frame terminator".to_string(),
            ));
        }
        buffer.extend_from_slice(&chunk[..n]);
        if buffer.ends_with(TERMINATOR) {
            buffer.truncate(buffer.len() - TERMINATOR.len());
            return Ok(buffer);
        }
        if buffer.len() > MAX_FRAME {
            return Err(ChefsHatError::Protocol(format!(
                "Frame exceeded {} bytes without terminator",
                MAX_FRAME
            )));
        }
    }
}
