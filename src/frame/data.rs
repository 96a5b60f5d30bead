// SPDX-FileCopyrightText: Copyright (c) 2018-2025 slowtec GmbH <post@slowtec.de>
// SPDX-License-Identifier: MIT OR Apache-2.0

use byteorder::{BigEndian, ByteOrder};

use crate::error::*;

/// Maximum number of parameter data bytes in a single RDM message.
pub const MAX_PARAM_DATA_LEN: usize = 231;

/// RDM parameter data.
///
/// The bytes are copied in, so the source buffer can be reused as soon as
/// the value has been created.
#[derive(Clone, PartialEq, Eq)]
pub struct ParamData {
    bytes: [u8; MAX_PARAM_DATA_LEN],
    len: usize,
}

impl ParamData {
    pub fn new(data: &[u8]) -> Result<Self> {
        if data.len() > MAX_PARAM_DATA_LEN {
            return Err(Error::ParamDataTooLong(data.len()));
        }
        let mut bytes = [0; MAX_PARAM_DATA_LEN];
        bytes[..data.len()].copy_from_slice(data);
        Ok(Self {
            bytes,
            len: data.len(),
        })
    }

    /// A single 16 bit value in network byte order.
    #[must_use]
    pub fn from_u16(value: u16) -> Self {
        let mut bytes = [0; MAX_PARAM_DATA_LEN];
        BigEndian::write_u16(&mut bytes, value);
        Self { bytes, len: 2 }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    ///  Returns `true` if there is no parameter data.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Read the 16 bit value starting at byte `offset`.
    #[must_use]
    pub fn get_u16(&self, offset: usize) -> Option<u16> {
        let bytes = self.as_slice().get(offset..offset.checked_add(2)?)?;
        Some(BigEndian::read_u16(bytes))
    }

    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

impl Default for ParamData {
    fn default() -> Self {
        Self {
            bytes: [0; MAX_PARAM_DATA_LEN],
            len: 0,
        }
    }
}

impl core::fmt::Debug for ParamData {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "ParamData({:02X?})", self.as_slice())
    }
}
