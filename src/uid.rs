// SPDX-FileCopyrightText: Copyright (c) 2018-2025 slowtec GmbH <post@slowtec.de>
// SPDX-License-Identifier: MIT OR Apache-2.0

//! RDM unique device identifiers.

use core::{fmt, str::FromStr};

use byteorder::{BigEndian, ByteOrder};

use crate::error::*;

/// ESTA manufacturer code of the Open Lighting Project.
pub const OPEN_LIGHTING_ESTA_CODE: u16 = 0x7a70;

/// Size of a serialized UID.
pub const UID_LEN: usize = 6;

/// A 48 bit RDM device identifier.
///
/// The derived ordering compares the manufacturer code first, which is the
/// same as comparing the 48 bit numeric value.
#[cfg_attr(all(feature = "defmt", target_os = "none"), derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Uid {
    manufacturer: u16,
    device: u32,
}

impl Uid {
    #[must_use]
    pub const fn new(manufacturer: u16, device: u32) -> Self {
        Self {
            manufacturer,
            device,
        }
    }

    /// The broadcast UID addressing every device.
    #[must_use]
    pub const fn all_devices() -> Self {
        Self::new(0xFFFF, 0xFFFF_FFFF)
    }

    #[must_use]
    pub const fn manufacturer(&self) -> u16 {
        self.manufacturer
    }

    #[must_use]
    pub const fn device(&self) -> u32 {
        self.device
    }

    /// The 48 bit numeric value.
    #[must_use]
    pub const fn to_u64(&self) -> u64 {
        (self.manufacturer as u64) << 32 | self.device as u64
    }

    #[must_use]
    pub fn to_bytes(&self) -> [u8; UID_LEN] {
        let mut buf = [0; UID_LEN];
        BigEndian::write_u16(&mut buf[..2], self.manufacturer);
        BigEndian::write_u32(&mut buf[2..], self.device);
        buf
    }

    #[must_use]
    pub fn from_bytes(buf: &[u8; UID_LEN]) -> Self {
        Self::new(BigEndian::read_u16(&buf[..2]), BigEndian::read_u32(&buf[2..]))
    }

    /// Parse `mmmm:dddddddd`, exactly 4 and 8 hex digits of either case.
    pub fn parse(text: &str) -> Result<Self> {
        let (manufacturer, device) = text
            .split_once(':')
            .ok_or(Error::MalformedIdentifier)?;
        let manufacturer = parse_hex_group(manufacturer, MANUFACTURER_DIGITS)?;
        let device = parse_hex_group(device, DEVICE_DIGITS)?;
        let manufacturer = u16::try_from(manufacturer).map_err(|_| Error::MalformedIdentifier)?;
        Ok(Self::new(manufacturer, device))
    }
}

const MANUFACTURER_DIGITS: usize = 4;
const DEVICE_DIGITS: usize = 8;

// `from_str_radix` would also accept a leading sign.
fn parse_hex_group(group: &str, digits: usize) -> Result<u32> {
    if group.len() != digits || !group.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::MalformedIdentifier);
    }
    u32::from_str_radix(group, 16).map_err(|_| Error::MalformedIdentifier)
}

impl FromStr for Uid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04x}:{:08x}", self.manufacturer, self.device)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_uid() {
        let uid = Uid::parse("7a70:00000001").unwrap();
        assert_eq!(uid.manufacturer(), 0x7a70);
        assert_eq!(uid.device(), 1);
        assert_eq!("7A70:ABCDABCD".parse::<Uid>().unwrap(), Uid::new(0x7a70, 0xabcd_abcd));
        assert_eq!(Uid::parse("0000:00000000").unwrap(), Uid::new(0, 0));
    }

    #[test]
    fn format_is_normalized() {
        assert_eq!(Uid::new(0x7a70, 1).to_string(), "7a70:00000001");
        for (text, normalized) in [
            ("7a70:00000001", "7a70:00000001"),
            ("7A70:ABCDABCD", "7a70:abcdabcd"),
            ("0001:0000000a", "0001:0000000a"),
            ("0001:0000000A", "0001:0000000a"),
            ("ffff:ffffffff", "ffff:ffffffff"),
        ] {
            assert_eq!(Uid::parse(text).unwrap().to_string(), normalized);
        }
    }

    #[test]
    fn reject_malformed_uids() {
        for text in [
            "",
            ":",
            "7a70",
            "7a70:",
            ":00000001",
            "7a70:0000:0001",
            "7a70 :1",
            "+7a70:1",
            "7a70:-1",
            "7g70:1",
            "10000:1",
            "7a70:100000000",
            "7a70:1",
            "1:2",
            "7a70:000000001",
            "07a70:00000001",
            "0000000000000000000007a70:1",
            "7a70:+0000001",
            "7a70:0000000g",
        ] {
            assert_eq!(Uid::parse(text).err().unwrap(), Error::MalformedIdentifier, "{text}");
        }
    }

    #[test]
    fn parse_formatted_uid_at_value_edges() {
        for uid in [
            Uid::new(0, 0),
            Uid::all_devices(),
            Uid::new(0x7a70, 0x8000_0000),
            Uid::new(0x8000, 0x8000_0001),
            Uid::new(0x0001, 0xFFFF_FFFE),
        ] {
            assert_eq!(Uid::parse(&uid.to_string()).unwrap(), uid);
        }
        assert_eq!(Uid::all_devices().to_string(), "ffff:ffffffff");
        assert_eq!(Uid::new(0, 0).to_string(), "0000:00000000");
    }

    #[test]
    fn order_by_numeric_value() {
        assert!(Uid::new(0x0001, 0) > Uid::new(0x0000, 0xFFFF_FFFF));
        assert!(Uid::new(0x7a70, 1) < Uid::new(0x7a70, 2));
        assert_eq!(Uid::all_devices().to_u64(), 0xFFFF_FFFF_FFFF);
    }

    #[test]
    fn convert_to_and_from_bytes() {
        let uid = Uid::new(0x7a70, 0xabcd_abcd);
        let bytes = uid.to_bytes();
        assert_eq!(bytes, [0x7a, 0x70, 0xab, 0xcd, 0xab, 0xcd]);
        assert_eq!(Uid::from_bytes(&bytes), uid);
    }
}
