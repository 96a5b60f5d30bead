// SPDX-FileCopyrightText: Copyright (c) 2018-2025 slowtec GmbH <post@slowtec.de>
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The network node requests are handed to.

use core::net::Ipv4Addr;

use crate::{coordinator::*, frame::Request};

#[cfg(test)]
pub(crate) mod mock;

/// Address of the node a device is reachable through.
pub type Endpoint = Ipv4Addr;

/// A transport that sends requests and drives a cooperative event loop.
///
/// Completions must be delivered from within [`Transport::run`], never
/// from inside [`Transport::send`].
pub trait Transport {
    /// Prepare network resources. A `false` return is fatal.
    fn init(&mut self) -> bool;

    fn register_universe(&mut self, _universe: u16) {}

    fn unregister_universe(&mut self, _universe: u16) {}

    /// Queue `request` for `endpoint`; `on_complete` must be invoked
    /// exactly once, whatever the outcome.
    fn send(&mut self, endpoint: Endpoint, request: Request, on_complete: CompletionCallback);

    /// Run the event loop until `stop` is requested.
    fn run(&mut self, stop: &StopHandle);

    /// Release loop resources after [`Transport::run`] has returned or was
    /// never entered.
    fn stop(&mut self);
}
