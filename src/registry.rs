// SPDX-FileCopyrightText: Copyright (c) 2018-2025 slowtec GmbH <post@slowtec.de>
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mapping of device UIDs to the endpoints they are reachable through.

use alloc::{collections::BTreeMap, sync::Arc};

use crate::{
    coordinator::Coordinator,
    error::*,
    frame::{Request, TransactionNumber},
    transport::{Endpoint, Transport},
    uid::Uid,
};

/// The devices controlled within one universe.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Universe {
    number: u16,
    targets: BTreeMap<Uid, Endpoint>,
}

impl Universe {
    #[must_use]
    pub const fn new(number: u16) -> Self {
        Self {
            number,
            targets: BTreeMap::new(),
        }
    }

    #[must_use]
    pub const fn number(&self) -> u16 {
        self.number
    }

    /// Add `uid` or replace the endpoint it was registered with.
    pub fn register(&mut self, uid: Uid, endpoint: Endpoint) {
        self.targets.insert(uid, endpoint);
    }

    pub fn resolve(&self, uid: &Uid) -> Result<Endpoint> {
        self.targets
            .get(uid)
            .copied()
            .ok_or(Error::UnknownTarget(*uid))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Hand `request` to `transport`, completing through `coordinator`.
    ///
    /// The request only counts as outstanding if this returns `Ok`.
    pub fn dispatch<T: Transport + ?Sized>(
        &self,
        transport: &mut T,
        request: Request,
        coordinator: &Arc<Coordinator>,
    ) -> Result<TransactionNumber> {
        let endpoint = self.resolve(&request.destination())?;
        let tn = request.transaction_number();
        let on_complete = coordinator.arm(tn)?;
        info!(
            "Sending request {tn} for PID {} to {} at {endpoint}",
            request.param_id(),
            request.destination()
        );
        transport.send(endpoint, request, on_complete);
        Ok(tn)
    }
}
