// SPDX-FileCopyrightText: Copyright (c) 2018-2025 slowtec GmbH <post@slowtec.de>
// SPDX-License-Identifier: MIT OR Apache-2.0

use core::fmt;

use crate::{TransactionNumber, Uid};

/// rdm-dispatch Error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The text is not a `manufacturer:device` UID
    MalformedIdentifier,
    /// No endpoint is registered for this UID
    UnknownTarget(Uid),
    /// The transport could not be initialized
    TransportInit,
    /// No target UID was configured
    MissingTarget,
    /// The target endpoint is missing or not an IPv4 address
    InvalidEndpoint,
    /// Universe out of range
    InvalidUniverse(u32),
    /// Parameter data exceeds the protocol limit
    ParamDataTooLong(usize),
    /// The transaction number is still awaiting its completion
    TransactionInUse(TransactionNumber),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Error::*;

        match self {
            MalformedIdentifier => write!(f, "Malformed UID, expected <manufacturer>:<device>"),
            UnknownTarget(uid) => write!(f, "Unknown target UID: {uid}"),
            TransportInit => write!(f, "Failed to initialize the transport"),
            MissingTarget => write!(f, "No target UID given"),
            InvalidEndpoint => write!(f, "Invalid target endpoint"),
            InvalidUniverse(universe) => write!(f, "Invalid universe: {universe}"),
            ParamDataTooLong(len) => write!(
                f,
                "Parameter data too long: {len} byte(s), max = {}",
                crate::MAX_PARAM_DATA_LEN
            ),
            TransactionInUse(tn) => write!(f, "Transaction number {tn} is still in flight"),
        }
    }
}

impl core::error::Error for Error {}

pub(crate) type Result<T> = core::result::Result<T, Error>;
