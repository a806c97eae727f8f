use core::fmt;

/// Buffer geometry errors returned by the swizzle and content APIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeError {
    /// Buffer length is zero or not a whole number of pixels.
    NotPixelAligned,
    /// Destination cannot hold the source pixel count.
    PixelCountMismatch,
    /// Stride is smaller than one row, or the buffer is too short for the
    /// described rows.
    InvalidStride,
}

impl fmt::Display for SizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeError::NotPixelAligned => {
                write!(f, "buffer length is not a whole number of pixels")
            }
            SizeError::PixelCountMismatch => {
                write!(f, "destination buffer cannot hold the source pixels")
            }
            SizeError::InvalidStride => {
                write!(f, "stride does not match the described image rows")
            }
        }
    }
}

impl std::error::Error for SizeError {}
