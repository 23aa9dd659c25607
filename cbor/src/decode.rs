use thiserror::Error;

/// Item-scoped decode failures.
///
/// The `Display` text is what follows `ERROR: ` in a diagnostic line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("truncated argument (need {0} bytes)")]
    TruncatedArgument(usize),

    #[error("truncated byte string (need {0} bytes)")]
    TruncatedBytes(u64),

    #[error("truncated text string (need {0} bytes)")]
    TruncatedText(u64),

    #[error("truncated array")]
    TruncatedArray,

    #[error("truncated map")]
    TruncatedMap,

    #[error("reserved additional info {0}")]
    Reserved(u8),

    #[error("indefinite length not supported")]
    IndefiniteLength,

    #[error("nesting too deep")]
    MaxDepth,
}

/// The top 3 bits of a leading byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Major {
    UnsignedInteger,
    NegativeInteger,
    Bytes,
    Text,
    Array,
    Map,
    Tag,
    Simple,
}

impl Major {
    /// Does an additional info of 31 mean "indefinite length" for this major type?
    pub fn has_indefinite_form(self) -> bool {
        matches!(self, Self::Bytes | Self::Text | Self::Array | Self::Map)
    }
}

impl From<u8> for Major {
    fn from(value: u8) -> Self {
        match value >> 5 {
            0 => Self::UnsignedInteger,
            1 => Self::NegativeInteger,
            2 => Self::Bytes,
            3 => Self::Text,
            4 => Self::Array,
            5 => Self::Map,
            6 => Self::Tag,
            _ => Self::Simple,
        }
    }
}

/// A classified leading byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub major: Major,
    pub info: u8,
}

impl From<u8> for Header {
    fn from(value: u8) -> Self {
        Self {
            major: Major::from(value),
            info: value & 0x1F,
        }
    }
}

/// Number of extension bytes following the leading byte for `info`, if any form is defined.
pub fn argument_width(info: u8) -> Option<usize> {
    match info {
        0..=23 => Some(0),
        24 => Some(1),
        25 => Some(2),
        26 => Some(4),
        27 => Some(8),
        _ => None,
    }
}

/// Read `width` big-endian bytes from the start of `data` into a `u64`.
///
/// `width` must be at most 8.
pub fn read_be(data: &[u8], width: usize) -> Result<u64, Error> {
    debug_assert!(width <= 8);
    let bytes = data.get(..width).ok_or(Error::TruncatedArgument(width))?;
    Ok(bytes.iter().fold(0u64, |acc, b| (acc << 8) | *b as u64))
}

/// Decode the argument selected by `info` from `data`, the bytes that follow the leading byte.
///
/// Returns the argument and the number of extension bytes it occupied.
pub fn read_argument(info: u8, data: &[u8]) -> Result<(u64, usize), Error> {
    match argument_width(info) {
        Some(0) => Ok((info as u64, 0)),
        Some(width) => read_be(data, width).map(|v| (v, width)),
        None if info == 31 => Err(Error::IndefiniteLength),
        None => Err(Error::Reserved(info)),
    }
}

/// Read the IEEE-754 payload selected by a major type 7 `info` of 25, 26 or 27.
pub fn read_float(info: u8, data: &[u8]) -> Result<Option<(f64, usize)>, Error> {
    let width = match info {
        25 => 2,
        26 => 4,
        27 => 8,
        _ => return Ok(None),
    };
    let bits = read_be(data, width)?;
    let v: f64 = match width {
        2 => half::f16::from_bits(bits as u16).into(),
        4 => f32::from_bits(bits as u32).into(),
        _ => f64::from_bits(bits),
    };
    Ok(Some((v, width)))
}
