use bytes::{BufMut, Bytes, BytesMut};

use crate::checksum::{crc16, Crc16};
use crate::error::{FrameError, Result};
use crate::state::StateFlags;
use crate::status::StatusCode;

/// Preamble byte, repeated three times at the start of every frame.
pub const PREAMBLE_BYTE: u8 = 0xAA;

/// Preamble: `AA AA AA`.
pub const PREAMBLE: [u8; 3] = [PREAMBLE_BYTE; 3];

/// Fixed overhead: preamble (3) + command (1) + length (2) + checksum (2).
pub const FRAME_OVERHEAD: usize = 8;

/// Size of the status code that opens every response payload.
pub const STATUS_SIZE: usize = 2;

/// Smallest valid response: overhead plus a status code with no parameters.
pub const MIN_FRAME_SIZE: usize = FRAME_OVERHEAD + STATUS_SIZE;

/// Largest parameter block the 16-bit length field can describe.
pub const MAX_PARAMS_LEN: usize = u16::MAX as usize - STATUS_SIZE;

const LENGTH_OFFSET: usize = 4;
const STATUS_OFFSET: usize = 6;
const PARAMS_OFFSET: usize = 8;
const CHECKSUM_SIZE: usize = 2;

/// Whether the trailing checksum is verified during decoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChecksumMode {
    #[default]
    Verify,
    /// Accept frames regardless of their checksum.
    Ignore,
}

/// Configuration for the response decoder.
#[derive(Debug, Clone, Default)]
pub struct DecodeConfig {
    /// Checksum handling. Default: verify.
    pub checksum: ChecksumMode,
}

impl DecodeConfig {
    /// Configuration that skips checksum verification.
    pub fn unchecked() -> Self {
        Self {
            checksum: ChecksumMode::Ignore,
        }
    }
}

/// A decoded device response.
///
/// Immutable once built. Parameters are owned and never alias the buffer
/// the response was decoded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseMessage {
    command: u8,
    status: StatusCode,
    params: Bytes,
}

impl ResponseMessage {
    pub fn new(command: u8, status: StatusCode, params: impl Into<Bytes>) -> Self {
        Self {
            command,
            status,
            params: params.into(),
        }
    }

    /// Id of the command this response answers.
    pub fn command(&self) -> u8 {
        self.command
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Command-specific result data following the status code.
    pub fn params(&self) -> &[u8] {
        &self.params
    }

    pub fn into_params(self) -> Bytes {
        self.params
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Interpret the leading parameter bytes as a state-flag word.
    pub fn state_flags(&self) -> Option<StateFlags> {
        StateFlags::from_params(&self.params)
    }

    /// The total wire size of this response.
    pub fn wire_size(&self) -> usize {
        MIN_FRAME_SIZE + self.params.len()
    }

    /// Encode this response into a new buffer.
    pub fn to_bytes(&self) -> Result<Bytes> {
        let mut buf = BytesMut::with_capacity(self.wire_size());
        encode_response(self.command, self.status, &self.params, &mut buf)?;
        Ok(buf.freeze())
    }
}

/// Encode a response frame.
///
/// Wire format (multi-byte fields little-endian):
/// ```text
/// ┌──────────┬─────────┬──────────┬──────────┬────────────┬──────────┐
/// │ Preamble │ Command │ Length   │ Status   │ Params     │ Checksum │
/// │ AA AA AA │ (1B)    │ (2B LE)  │ (2B LE)  │ (Length-2) │ (2B LE)  │
/// └──────────┴─────────┴──────────┴──────────┴────────────┴──────────┘
/// ```
///
/// `Length` counts the status code and parameters. The checksum covers
/// everything before it.
pub fn encode_response(
    command: u8,
    status: StatusCode,
    params: &[u8],
    dst: &mut BytesMut,
) -> Result<()> {
    if params.len() > MAX_PARAMS_LEN {
        return Err(FrameError::PayloadTooLarge {
            size: params.len(),
            max: MAX_PARAMS_LEN,
        });
    }
    let start = dst.len();
    dst.reserve(MIN_FRAME_SIZE + params.len());
    dst.put_slice(&PREAMBLE);
    dst.put_u8(command);
    dst.put_u16_le((STATUS_SIZE + params.len()) as u16);
    dst.put_u16_le(status.as_raw());
    dst.put_slice(params);

    let mut crc = Crc16::new();
    crc.update(&dst[start..]);
    dst.put_u16_le(crc.finish());
    Ok(())
}

/// Decode one complete response frame with the default configuration.
pub fn decode_response(buf: &[u8]) -> Result<ResponseMessage> {
    decode_response_with(buf, &DecodeConfig::default())
}

/// Decode one complete response frame.
///
/// `buf` must hold exactly one frame; partial frames and trailing bytes are
/// errors, not something to wait on. Checks run in a fixed order and the
/// first failure is reported: size, preamble, length field, length
/// cross-check, checksum.
pub fn decode_response_with(buf: &[u8], config: &DecodeConfig) -> Result<ResponseMessage> {
    let result = parse(buf, config);
    match &result {
        Ok(msg) => tracing::trace!(
            command = msg.command,
            status = %msg.status,
            params_len = msg.params.len(),
            "decoded response frame"
        ),
        Err(err) => tracing::debug!(
            len = buf.len(),
            error = %err,
            recovery = ?err.recovery(),
            "rejected response frame"
        ),
    }
    result
}

fn parse(buf: &[u8], config: &DecodeConfig) -> Result<ResponseMessage> {
    if buf.len() < MIN_FRAME_SIZE {
        return Err(FrameError::FrameTooShort { len: buf.len() });
    }

    if buf[..3] != PREAMBLE {
        return Err(FrameError::BadPreamble {
            found: [buf[0], buf[1], buf[2]],
        });
    }

    let payload_len = read_u16_le(buf, LENGTH_OFFSET);
    if (payload_len as usize) < STATUS_SIZE {
        return Err(FrameError::PayloadTooSmall {
            declared: payload_len,
        });
    }

    let expected = payload_len as usize + FRAME_OVERHEAD;
    if buf.len() != expected {
        return Err(FrameError::LengthMismatch {
            expected,
            actual: buf.len(),
        });
    }

    let checksum_offset = expected - CHECKSUM_SIZE;
    if config.checksum == ChecksumMode::Verify {
        let computed = crc16(&buf[..checksum_offset]);
        let received = read_u16_le(buf, checksum_offset);
        if computed != received {
            return Err(FrameError::ChecksumError { computed, received });
        }
    }

    Ok(ResponseMessage {
        command: buf[3],
        status: StatusCode::from_raw(read_u16_le(buf, STATUS_OFFSET)),
        params: Bytes::copy_from_slice(&buf[PARAMS_OFFSET..checksum_offset]),
    })
}

fn read_u16_le(buf: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([buf[offset], buf[offset + 1]])
}
