//! HFS+ catalog names.
//!
//! Described in TN1150, "HFS Plus Names": a big-endian `u16` length
//! followed by 255 big-endian UTF-16 code units, fully decomposed.

use crate::BufferError;

const MAX_UNITS: usize = 255;

/// File or folder name of up to 255 UTF-16 code units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HfsUniStr255 {
    pub length: u16,
    pub unicode: [u16; MAX_UNITS],
}

impl HfsUniStr255 {
    /// Size of the record on disk.
    pub const WIRE_SIZE: usize = 2 + 2 * MAX_UNITS;

    pub fn new() -> Self {
        Self {
            length: 0,
            unicode: [0; MAX_UNITS],
        }
    }

    /// Creates a record holding `units`.
    pub fn from_units(units: &[u16]) -> Result<Self, BufferError> {
        if units.len() > MAX_UNITS {
            return Err(BufferError::Overflow {
                length: units.len(),
                capacity: MAX_UNITS,
            });
        }
        let mut name = Self::new();
        name.unicode[..units.len()].copy_from_slice(units);
        name.length = units.len() as u16;
        Ok(name)
    }

    /// Parses the big-endian on-disk record.
    ///
    /// The length field is kept as read, even when it exceeds 255.
    pub fn from_be_wire(bytes: &[u8]) -> Result<Self, BufferError> {
        if bytes.len() != Self::WIRE_SIZE {
            return Err(BufferError::WireSize {
                expected: Self::WIRE_SIZE,
                actual: bytes.len(),
            });
        }
        let mut name = Self::new();
        name.length = u16::from_be_bytes([bytes[0], bytes[1]]);
        for (unit, pair) in name.unicode.iter_mut().zip(bytes[2..].chunks_exact(2)) {
            *unit = u16::from_be_bytes([pair[0], pair[1]]);
        }
        Ok(name)
    }

    /// Returns the big-endian on-disk record.
    pub fn to_be_wire(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(Self::WIRE_SIZE);
        out.extend_from_slice(&self.length.to_be_bytes());
        for unit in &self.unicode {
            out.extend_from_slice(&unit.to_be_bytes());
        }
        out
    }

    /// The code units covered by `length`, or `None` if it exceeds 255.
    pub fn units(&self) -> Option<&[u16]> {
        let length = usize::from(self.length);
        if length > MAX_UNITS {
            return None;
        }
        Some(&self.unicode[..length])
    }
}

impl Default for HfsUniStr255 {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_be_wire() {
        let name = HfsUniStr255::from_units(&[0x0041, 0x00E9]).unwrap();
        let wire = name.to_be_wire();
        assert_eq!(wire.len(), 512);
        assert_eq!(&wire[..6], &[0x00, 0x02, 0x00, 0x41, 0x00, 0xE9]);
        assert_eq!(HfsUniStr255::from_be_wire(&wire).unwrap(), name);
    }

    #[test]
    fn test_overlong_length() {
        let mut wire = vec![0u8; HfsUniStr255::WIRE_SIZE];
        wire[0] = 0x01;
        wire[1] = 0x00;
        let name = HfsUniStr255::from_be_wire(&wire).unwrap();
        assert_eq!(name.length, 256);
        assert_eq!(name.units(), None);
    }

    #[test]
    fn test_from_units_overflow() {
        assert!(HfsUniStr255::from_units(&[0x20; 256]).is_err());
        assert_eq!(
            HfsUniStr255::from_units(&[0x20; 255]).unwrap().units().map(<[u16]>::len),
            Some(255)
        );
    }
}
