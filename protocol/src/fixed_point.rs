use std::fmt::{self, Display};

/// A parameter word in the DSP's native 5.23 fixed-point format.
///
/// Values occupy 28 bits (two's complement) inside a 4-byte register
/// word, covering [-16, 16) with a resolution of 2^-23. Encoding
/// saturates at the format bounds rather than wrapping.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct FixedPoint(u32);

const FRACTIONAL_BITS: u32 = 23;
const VALUE_MASK: u32 = 0x0FFF_FFFF;
const SIGN_BIT: u32 = 0x0800_0000;

const MAX_RAW: i32 = 0x07FF_FFFF;
const MIN_RAW: i32 = -0x0800_0000;

impl FixedPoint {
    pub fn from_u32(val: u32) -> Self {
        Self(val & VALUE_MASK)
    }

    pub fn from_f64(val: f64) -> Self {
        let scaled = (val * (1u32 << FRACTIONAL_BITS) as f64).round();
        let raw = if scaled >= MAX_RAW as f64 {
            MAX_RAW
        } else if scaled <= MIN_RAW as f64 {
            MIN_RAW
        } else {
            scaled as i32
        };
        Self(raw as u32 & VALUE_MASK)
    }

    pub fn to_f64(self) -> f64 {
        let raw = if self.0 & SIGN_BIT != 0 {
            (self.0 | !VALUE_MASK) as i32
        } else {
            self.0 as i32
        };
        raw as f64 / (1u32 << FRACTIONAL_BITS) as f64
    }

    pub fn to_u32(self) -> u32 {
        self.0
    }

    /// Register byte layout, most significant byte first.
    pub fn to_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::from_u32(u32::from_be_bytes(bytes))
    }
}

impl From<f64> for FixedPoint {
    fn from(val: f64) -> Self {
        Self::from_f64(val)
    }
}

impl From<FixedPoint> for f64 {
    fn from(fp: FixedPoint) -> Self {
        fp.to_f64()
    }
}

impl Display for FixedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_f64())
    }
}

impl fmt::Debug for FixedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FixedPoint").field(&self.to_f64()).finish()
    }
}
