// SPDX-FileCopyrightText: Copyright (c) 2018-2025 slowtec GmbH <post@slowtec.de>
// SPDX-License-Identifier: MIT OR Apache-2.0

//! A scripted in-memory transport.

use super::*;
use crate::frame::{Response, ResponseCode, TransactionNumber};

pub(crate) struct Sent {
    pub(crate) endpoint: Endpoint,
    pub(crate) request: Request,
    on_complete: Option<CompletionCallback>,
}

/// Scripted reply for one transaction number.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Reply {
    Ack,
    Fail(ResponseCode),
}

#[derive(Default)]
pub(crate) struct MockTransport {
    pub(crate) fail_init: bool,
    pub(crate) initialized: bool,
    pub(crate) stopped: bool,
    pub(crate) runs: usize,
    pub(crate) universes: Vec<u16>,
    pub(crate) sent: Vec<Sent>,
    /// Order in which completions are delivered while running.
    pub(crate) script: Vec<(TransactionNumber, Reply)>,
    /// Stop requests observed after each delivered completion.
    pub(crate) stop_trace: Vec<usize>,
}

impl MockTransport {
    pub(crate) fn replying(script: &[(TransactionNumber, Reply)]) -> Self {
        Self {
            script: script.to_vec(),
            ..Default::default()
        }
    }

    pub(crate) fn sent_transactions(&self) -> Vec<TransactionNumber> {
        self.sent
            .iter()
            .map(|s| s.request.transaction_number())
            .collect()
    }

    fn deliver(&mut self, tn: TransactionNumber, reply: Reply) {
        let Some(sent) = self
            .sent
            .iter_mut()
            .find(|s| s.request.transaction_number() == tn && s.on_complete.is_some())
        else {
            return;
        };
        let Some(on_complete) = sent.on_complete.take() else {
            return;
        };
        let completion = match reply {
            Reply::Ack => Completion::ok(Response::ack(&sent.request, &[]).unwrap()),
            Reply::Fail(code) => Completion::failed(code),
        };
        on_complete(completion);
    }
}

impl Transport for MockTransport {
    fn init(&mut self) -> bool {
        self.initialized = !self.fail_init;
        self.initialized
    }

    fn register_universe(&mut self, universe: u16) {
        self.universes.push(universe);
    }

    fn unregister_universe(&mut self, universe: u16) {
        self.universes.retain(|u| *u != universe);
    }

    fn send(&mut self, endpoint: Endpoint, request: Request, on_complete: CompletionCallback) {
        self.sent.push(Sent {
            endpoint,
            request,
            on_complete: Some(on_complete),
        });
    }

    fn run(&mut self, stop: &StopHandle) {
        self.runs += 1;
        let script = core::mem::take(&mut self.script);
        for (tn, reply) in script {
            if stop.is_stop_requested() {
                break;
            }
            self.deliver(tn, reply);
            self.stop_trace.push(stop.requests());
        }
    }

    fn stop(&mut self) {
        self.stopped = true;
    }
}
