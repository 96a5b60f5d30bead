// SPDX-FileCopyrightText: Copyright (c) 2018-2025 slowtec GmbH <post@slowtec.de>
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Session configuration.

use core::ops::RangeInclusive;

use crate::{
    error::*,
    transport::Endpoint,
    uid::{OPEN_LIGHTING_ESTA_CODE, Uid},
};

/// Universes a controller may address.
pub const UNIVERSE_RANGE: RangeInclusive<u32> = 1..=63999;

pub const DEFAULT_UNIVERSE: u16 = 1;

/// The UID requests are sent from unless configured otherwise.
pub const DEFAULT_SOURCE_UID: Uid = Uid::new(OPEN_LIGHTING_ESTA_CODE, 0xabcd_abcd);

/// Validated parameters of one controller session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub source: Uid,
    pub target: Uid,
    pub endpoint: Endpoint,
    pub universe: u16,
}

impl SessionConfig {
    #[must_use]
    pub const fn new(target: Uid, endpoint: Endpoint) -> Self {
        Self {
            source: DEFAULT_SOURCE_UID,
            target,
            endpoint,
            universe: DEFAULT_UNIVERSE,
        }
    }

    /// Validate raw option values.
    ///
    /// Nothing has been sent when this fails.
    pub fn parse(
        source: Option<&str>,
        target: Option<&str>,
        endpoint: Option<&str>,
        universe: u32,
    ) -> Result<Self> {
        let source = source.map(Uid::parse).transpose()?.unwrap_or(DEFAULT_SOURCE_UID);
        let target = Uid::parse(target.ok_or(Error::MissingTarget)?)?;
        let endpoint = endpoint
            .ok_or(Error::InvalidEndpoint)?
            .parse::<Endpoint>()
            .map_err(|_| Error::InvalidEndpoint)?;
        if !UNIVERSE_RANGE.contains(&universe) {
            return Err(Error::InvalidUniverse(universe));
        }
        let universe = u16::try_from(universe).map_err(|_| Error::InvalidUniverse(universe))?;
        Ok(Self {
            source,
            target,
            endpoint,
            universe,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_options() {
        let cfg = SessionConfig::parse(None, Some("7a70:00000001"), Some("10.0.0.5"), 1).unwrap();
        assert_eq!(cfg.source, DEFAULT_SOURCE_UID);
        assert_eq!(cfg.target, Uid::new(0x7a70, 1));
        assert_eq!(cfg.endpoint, Endpoint::new(10, 0, 0, 5));
        assert_eq!(cfg.universe, 1);
        assert_eq!(cfg, SessionConfig::new(Uid::new(0x7a70, 1), Endpoint::new(10, 0, 0, 5)));

        let cfg =
            SessionConfig::parse(Some("4321:12345678"), Some("7a70:00000001"), Some("192.168.1.2"), 63999)
                .unwrap();
        assert_eq!(cfg.source, Uid::new(0x4321, 0x1234_5678));
        assert_eq!(cfg.universe, 63999);
    }

    #[test]
    fn reject_invalid_options() {
        assert_eq!(
            SessionConfig::parse(None, None, Some("10.0.0.5"), 1).err().unwrap(),
            Error::MissingTarget
        );
        assert_eq!(
            SessionConfig::parse(None, Some("7a70"), Some("10.0.0.5"), 1).err().unwrap(),
            Error::MalformedIdentifier
        );
        assert_eq!(
            SessionConfig::parse(None, Some("7a70:1"), Some("10.0.0.5"), 1)
                .err()
                .unwrap(),
            Error::MalformedIdentifier
        );
        assert_eq!(
            SessionConfig::parse(Some("x:1"), Some("7a70:00000001"), Some("10.0.0.5"), 1)
                .err()
                .unwrap(),
            Error::MalformedIdentifier
        );
        assert_eq!(
            SessionConfig::parse(None, Some("7a70:00000001"), None, 1).err().unwrap(),
            Error::InvalidEndpoint
        );
        assert_eq!(
            SessionConfig::parse(None, Some("7a70:00000001"), Some("10.0.0"), 1).err().unwrap(),
            Error::InvalidEndpoint
        );
        assert_eq!(
            SessionConfig::parse(None, Some("7a70:00000001"), Some("10.0.0.5"), 0).err().unwrap(),
            Error::InvalidUniverse(0)
        );
        assert_eq!(
            SessionConfig::parse(None, Some("7a70:00000001"), Some("10.0.0.5"), 64000)
                .err()
                .unwrap(),
            Error::InvalidUniverse(64000)
        );
    }
}
