use crate::status::StatusCode;

/// Errors that can occur during response frame decoding or encoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameError {
    /// Fewer bytes than the smallest possible frame.
    #[error("frame too short ({len} bytes, need at least 10)")]
    FrameTooShort { len: usize },

    /// The first three bytes are not the 0xAA preamble.
    #[error("bad preamble {:02x} {:02x} {:02x} (expected aa aa aa)", .found[0], .found[1], .found[2])]
    BadPreamble { found: [u8; 3] },

    /// The length field cannot hold the mandatory status code.
    #[error("payload length {declared} too small (status code needs 2 bytes)")]
    PayloadTooSmall { declared: u16 },

    /// The buffer size disagrees with the length field.
    #[error("frame length mismatch (length field implies {expected} bytes, got {actual})")]
    LengthMismatch { expected: usize, actual: usize },

    /// The trailing checksum does not match the frame contents.
    #[error("checksum mismatch (computed {computed:#06x}, received {received:#06x})")]
    ChecksumError { computed: u16, received: u16 },

    /// Parameters do not fit in the 16-bit length field.
    #[error("parameters too large ({size} bytes, max {max})")]
    PayloadTooLarge { size: usize, max: usize },
}

/// What the owner of the byte stream should do after a failed decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recovery {
    /// Frame sync is lost; discard buffered bytes and search for the next preamble.
    Resynchronize,
    /// The frame was cut short or overran; read again or resynchronize.
    Reread,
    /// The frame arrived intact but corrupted; drop it and ask for it again.
    Retransmit,
    /// The input can never be framed; report to the caller.
    Reject,
}

impl FrameError {
    pub fn recovery(&self) -> Recovery {
        match self {
            FrameError::FrameTooShort { .. }
            | FrameError::BadPreamble { .. }
            | FrameError::PayloadTooSmall { .. } => Recovery::Resynchronize,
            FrameError::LengthMismatch { .. } => Recovery::Reread,
            FrameError::ChecksumError { .. } => Recovery::Retransmit,
            FrameError::PayloadTooLarge { .. } => Recovery::Reject,
        }
    }

    /// The device status code with the same meaning, if there is one.
    pub fn status_code(&self) -> Option<StatusCode> {
        match self {
            FrameError::ChecksumError { .. } => Some(StatusCode::ChecksumError),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, FrameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recovery_per_variant() {
        assert_eq!(
            FrameError::FrameTooShort { len: 3 }.recovery(),
            Recovery::Resynchronize
        );
        assert_eq!(
            FrameError::BadPreamble { found: [0; 3] }.recovery(),
            Recovery::Resynchronize
        );
        assert_eq!(
            FrameError::PayloadTooSmall { declared: 1 }.recovery(),
            Recovery::Resynchronize
        );
        assert_eq!(
            FrameError::LengthMismatch {
                expected: 10,
                actual: 9
            }
            .recovery(),
            Recovery::Reread
        );
        assert_eq!(
            FrameError::ChecksumError {
                computed: 1,
                received: 2
            }
            .recovery(),
            Recovery::Retransmit
        );
    }

    #[test]
    fn checksum_error_maps_to_device_status() {
        let err = FrameError::ChecksumError {
            computed: 0xDD76,
            received: 0,
        };
        assert_eq!(err.status_code(), Some(StatusCode::ChecksumError));
        assert_eq!(FrameError::FrameTooShort { len: 0 }.status_code(), None);
    }

    #[test]
    fn messages() {
        let err = FrameError::BadPreamble {
            found: [0xAA, 0x55, 0xAA],
        };
        assert_eq!(err.to_string(), "bad preamble aa 55 aa (expected aa aa aa)");
        let err = FrameError::ChecksumError {
            computed: 0xDD76,
            received: 0x0001,
        };
        assert_eq!(
            err.to_string(),
            "checksum mismatch (computed 0xdd76, received 0x0001)"
        );
    }
}
