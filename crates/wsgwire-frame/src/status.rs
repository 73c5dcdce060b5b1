//! Device status codes.
//!
//! Every response carries a 16-bit status code at offset 6. Firmware may
//! report codes newer than this table; those decode to
//! [`StatusCode::Unknown`] and keep their raw value.

use std::fmt;

macro_rules! status_codes {
    ($($variant:ident = $raw:literal, $name:literal, $desc:literal;)+) => {
        /// Result classification returned by the device for a command.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum StatusCode {
            $(
                #[doc = $desc]
                $variant,
            )+
            /// A code not known to this build, kept verbatim.
            Unknown(u16),
        }

        impl StatusCode {
            /// All known codes in numeric order.
            pub const ALL: &'static [StatusCode] = &[$(StatusCode::$variant),+];

            /// Map a wire value to a status code. Never fails.
            pub fn from_raw(raw: u16) -> Self {
                match raw {
                    $($raw => StatusCode::$variant,)+
                    other => StatusCode::Unknown(other),
                }
            }

            /// The wire value of this code.
            pub fn as_raw(self) -> u16 {
                match self {
                    $(StatusCode::$variant => $raw,)+
                    StatusCode::Unknown(raw) => raw,
                }
            }

            /// Symbolic name as used in the device documentation.
            pub fn name(self) -> &'static str {
                match self {
                    $(StatusCode::$variant => $name,)+
                    StatusCode::Unknown(_) => "E_UNKNOWN",
                }
            }

            pub fn description(self) -> &'static str {
                match self {
                    $(StatusCode::$variant => $desc,)+
                    StatusCode::Unknown(_) => "Status code not known to this decoder",
                }
            }
        }
    };
}

status_codes! {
    Success = 0, "E_SUCCESS", "No error";
    NotAvailable = 1, "E_NOT_AVAILABLE", "Device, service or data is not available";
    NoSensor = 2, "E_NO_SENSOR", "No sensor connected";
    NotInitialized = 3, "E_NOT_INITIALIZED", "The device is not initialized";
    AlreadyRunning = 4, "E_ALREADY_RUNNING", "Service is already running";
    FeatureNotSupported = 5, "E_FEATURE_NOT_SUPPORTED", "The asked feature is not supported";
    InconsistentData = 6, "E_INCONSISTENT_DATA", "One or more dependent parameters mismatch";
    Timeout = 7, "E_TIMEOUT", "Timeout error";
    ReadError = 8, "E_READ_ERROR", "Error while reading from a device";
    WriteError = 9, "E_WRITE_ERROR", "Error while writing to a device";
    InsufficientResources = 10, "E_INSUFFICIENT_RESOURCES", "No memory available";
    ChecksumError = 11, "E_CHECKSUM_ERROR", "Checksum error";
    NoParamExpected = 12, "E_NO_PARAM_EXPECTED", "No parameters expected";
    NotEnoughParams = 13, "E_NOT_ENOUGH_PARAMS", "Not enough parameters";
    CmdUnknown = 14, "E_CMD_UNKNOWN", "Unknown command";
    CmdFormatError = 15, "E_CMD_FORMAT_ERROR", "Command format error";
    AccessDenied = 16, "E_ACCESS_DENIED", "Access denied";
    AlreadyOpen = 17, "E_ALREADY_OPEN", "The interface is already open";
    CmdFailed = 18, "E_CMD_FAILED", "Command failed";
    CmdAborted = 19, "E_CMD_ABORTED", "Command aborted";
    InvalidHandle = 20, "E_INVALID_HANDLE", "Invalid handle";
    NotFound = 21, "E_NOT_FOUND", "Device not found";
    NotOpen = 22, "E_NOT_OPEN", "Device not open";
    IoError = 23, "E_IO_ERROR", "I/O error";
    InvalidParameter = 24, "E_INVALID_PARAMETER", "Invalid parameter";
    IndexOutOfBounds = 25, "E_INDEX_OUT_OF_BOUNDS", "Index out of bounds";
    CmdPending = 26, "E_CMD_PENDING", "Command execution needs more time";
    Overrun = 27, "E_OVERRUN", "Data overrun";
    RangeError = 28, "E_RANGE_ERROR", "Range error";
    AxisBlocked = 29, "E_AXIS_BLOCKED", "Axis is blocked";
    FileExists = 30, "E_FILE_EXISTS", "File already exists";
}

impl StatusCode {
    pub fn is_success(self) -> bool {
        self == StatusCode::Success
    }

    /// The command was accepted and its final result arrives in a later
    /// response with the same command id.
    pub fn is_pending(self) -> bool {
        self == StatusCode::CmdPending
    }

    pub fn is_known(self) -> bool {
        !matches!(self, StatusCode::Unknown(_))
    }
}

impl From<u16> for StatusCode {
    fn from(raw: u16) -> Self {
        Self::from_raw(raw)
    }
}

impl From<StatusCode> for u16 {
    fn from(status: StatusCode) -> Self {
        status.as_raw()
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.as_raw())
    }
}
