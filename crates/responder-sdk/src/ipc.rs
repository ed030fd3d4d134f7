//! Length-prefixed JSON framing for stdio hosts.
//!
//! Each frame is a 4-byte big-endian length followed by that many bytes of
//! payload. The host writes one event frame per invocation and reads back
//! exactly one response frame.
//!
//! ```ignore
//! let stdin = std::io::stdin();
//! let stdout = std::io::stdout();
//! ipc::serve(&mut stdin.lock(), &mut stdout.lock(), &handle)?;
//! ```

use crate::{Event, Handler, HandlerError, Response};
use std::io::{self, Read, Write};

/// Largest accepted payload; matches the synchronous Lambda payload limit.
pub const MAX_FRAME_LEN: usize = 6 * 1024 * 1024;

/// Read the next event from `reader`.
///
/// Returns `Ok(None)` when the stream ends cleanly before a new frame.
pub fn read_event<R: Read>(reader: &mut R) -> Result<Option<Event>, HandlerError> {
    let mut len_buf = [0u8; 4];
    match reader.read_exact(&mut len_buf) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(None),
        Err(e) => return Err(e.into()),
    }

    let len = u32::from_be_bytes(len_buf) as usize;
    if len > MAX_FRAME_LEN {
        return Err(HandlerError::FrameTooLarge { len, max: MAX_FRAME_LEN });
    }

    let mut payload = vec![0u8; len];
    reader.read_exact(&mut payload).map_err(|e| {
        HandlerError::Ipc(format!("Failed to read {}-byte payload: {}", len, e))
    })?;

    Ok(Some(Event::from_payload(&payload)))
}

/// Write one response frame to `writer` and flush it.
pub fn write_response<W: Write>(writer: &mut W, response: &Response) -> Result<(), HandlerError> {
    let payload = serde_json::to_vec(response)?;

    let len = u32::try_from(payload.len())
        .map_err(|_| HandlerError::FrameTooLarge { len: payload.len(), max: u32::MAX as usize })?;
    writer.write_all(&len.to_be_bytes())?;
    writer.write_all(&payload)?;
    writer.flush()?;

    Ok(())
}

/// Answer frames from `reader` with `handler` until the stream ends.
///
/// Returns the number of invocations answered.
pub fn serve<R, W, H>(reader: &mut R, writer: &mut W, handler: &H) -> Result<u64, HandlerError>
where
    R: Read,
    W: Write,
    H: Handler + ?Sized,
{
    let mut answered = 0;
    while let Some(event) = read_event(reader)? {
        let response = handler.call(event);
        write_response(writer, &response)?;
        answered += 1;
    }
    Ok(answered)
}
