//! Kernel status codes surfaced to the bridge transport.
//!
//! Values live in the NT status space the file-I/O subsystem speaks; the
//! response envelope carries exactly one of them alongside the byte count.

use fsgate_common::Error;

/// The operation completed successfully
pub const STATUS_SUCCESS: u32 = 0x0000_0000;

/// The output buffer could hold only part of the requested data; the byte
/// count still reflects what was committed
pub const STATUS_BUFFER_OVERFLOW: u32 = 0x8000_0005;

/// The requested operation is not implemented by this bridge
pub const STATUS_NOT_IMPLEMENTED: u32 = 0xC000_0002;

/// A parameter of the request was invalid, or the provider call failed
pub const STATUS_INVALID_PARAMETER: u32 = 0xC000_000D;

/// The object name was not found
pub const STATUS_OBJECT_NAME_NOT_FOUND: u32 = 0xC000_0034;

/// An internal error occurred while handling the request
pub const STATUS_INTERNAL_ERROR: u32 = 0xC000_00E5;

/// Map a bridge error to the status code reported to the kernel.
pub fn status_for(err: &Error) -> u32 {
    match err {
        Error::BufferTooSmall => STATUS_BUFFER_OVERFLOW,
        Error::NotImplemented(_) => STATUS_NOT_IMPLEMENTED,
        Error::InvalidParameter(_) => STATUS_INVALID_PARAMETER,
        Error::NotFound(_) => STATUS_OBJECT_NAME_NOT_FOUND,
        Error::Io(_) | Error::Protocol(_) | Error::Internal(_) | Error::Other(_) => {
            STATUS_INTERNAL_ERROR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_for(&Error::BufferTooSmall), STATUS_BUFFER_OVERFLOW);
        assert_eq!(
            status_for(&Error::NotImplemented("streams".into())),
            STATUS_NOT_IMPLEMENTED
        );
        assert_eq!(
            status_for(&Error::InvalidParameter("empty name".into())),
            STATUS_INVALID_PARAMETER
        );
        assert_eq!(
            status_for(&Error::NotFound("\\missing".into())),
            STATUS_OBJECT_NAME_NOT_FOUND
        );
        assert_eq!(
            status_for(&Error::Protocol("bad frame".into())),
            STATUS_INTERNAL_ERROR
        );
    }
}
