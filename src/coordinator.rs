// SPDX-FileCopyrightText: Copyright (c) 2018-2025 slowtec GmbH <post@slowtec.de>
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Completion handling for dispatched requests.
//!
//! Every request that reaches the transport is tracked by its transaction
//! number until its completion has been delivered. The number of tracked
//! requests gates the transport's event loop: once the last completion has
//! been handled the loop is asked to stop.

use alloc::{boxed::Box, sync::Arc, vec::Vec};
use core::sync::atomic::{AtomicU32, AtomicUsize, Ordering};

use crate::{error::*, frame::*};

/// A raw packet the transport received along with a response.
pub type RawPacket = Vec<u8>;

/// The callback the transport invokes exactly once per request.
pub type CompletionCallback = Box<dyn FnOnce(Completion) + Send>;

/// Everything the transport reports about a finished request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub code: ResponseCode,
    /// Absent if the request failed before a response could be decoded.
    pub response: Option<Response>,
    pub packets: Vec<RawPacket>,
}

impl Completion {
    #[must_use]
    pub fn ok(response: Response) -> Self {
        Self {
            code: ResponseCode::CompletedOk,
            response: Some(response),
            packets: Vec::new(),
        }
    }

    #[must_use]
    pub fn failed(code: ResponseCode) -> Self {
        Self {
            code,
            response: None,
            packets: Vec::new(),
        }
    }
}

/// How a completion was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failed(ResponseCode),
}

/// Cooperative stop request shared with the transport's event loop.
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Arc<AtomicUsize>);

impl StopHandle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the loop to return after its current iteration.
    pub fn request_stop(&self) {
        self.0.fetch_add(1, Ordering::AcqRel);
    }

    #[must_use]
    pub fn is_stop_requested(&self) -> bool {
        self.requests() > 0
    }

    /// How often a stop has been requested so far.
    #[must_use]
    pub fn requests(&self) -> usize {
        self.0.load(Ordering::Acquire)
    }

    /// Clear pending stop requests before the loop is entered again.
    pub fn reset(&self) {
        self.0.store(0, Ordering::Release);
    }
}

const IN_FLIGHT_WORDS: usize = 256 / 32;

/// Tracks outstanding requests of one session.
#[derive(Debug)]
pub struct Coordinator {
    outstanding: AtomicUsize,
    // one bit per transaction number
    in_flight: [AtomicU32; IN_FLIGHT_WORDS],
    succeeded: AtomicUsize,
    failed: AtomicUsize,
    stop: StopHandle,
}

impl Coordinator {
    #[must_use]
    pub fn new(stop: StopHandle) -> Self {
        Self {
            outstanding: AtomicUsize::new(0),
            in_flight: [const { AtomicU32::new(0) }; IN_FLIGHT_WORDS],
            succeeded: AtomicUsize::new(0),
            failed: AtomicUsize::new(0),
            stop,
        }
    }

    /// Number of dispatched requests still awaiting their completion.
    #[must_use]
    pub fn outstanding(&self) -> usize {
        self.outstanding.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.succeeded.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.failed.load(Ordering::Acquire)
    }

    #[must_use]
    pub const fn stop_handle(&self) -> &StopHandle {
        &self.stop
    }

    #[must_use]
    pub fn is_in_flight(&self, tn: TransactionNumber) -> bool {
        let (word, mask) = slot(tn);
        self.in_flight[word].load(Ordering::Acquire) & mask != 0
    }

    /// Start tracking `tn` and return the callback that completes it.
    ///
    /// Fails if `tn` is still in flight; nothing is counted in that case.
    pub fn arm(self: &Arc<Self>, tn: TransactionNumber) -> Result<CompletionCallback> {
        let (word, mask) = slot(tn);
        if self.in_flight[word].fetch_or(mask, Ordering::AcqRel) & mask != 0 {
            return Err(Error::TransactionInUse(tn));
        }
        self.outstanding.fetch_add(1, Ordering::AcqRel);
        let coordinator = Arc::clone(self);
        Ok(Box::new(move |completion| {
            coordinator.on_complete(tn, completion);
        }))
    }

    /// Handle the completion of the request with transaction number `tn`.
    ///
    /// # Panics
    ///
    /// If `tn` is not in flight, i.e. a completion was delivered twice.
    pub fn on_complete(&self, tn: TransactionNumber, completion: Completion) -> Outcome {
        let (word, mask) = slot(tn);
        if self.in_flight[word].fetch_and(!mask, Ordering::AcqRel) & mask == 0 {
            error!("Completion for transaction {tn} delivered while not in flight");
            panic!("duplicate completion for transaction {tn}");
        }

        let Completion {
            code,
            response,
            packets,
        } = completion;
        info!("Callback executed with code: {code}");
        if !packets.is_empty() {
            debug!("Transaction {tn} carried {} raw packet(s)", packets.len());
        }
        let outcome = classify(tn, code, response.as_ref());
        drop(response);

        match outcome {
            Outcome::Success => self.succeeded.fetch_add(1, Ordering::AcqRel),
            Outcome::Failed(_) => self.failed.fetch_add(1, Ordering::AcqRel),
        };

        let previous = self.outstanding.fetch_sub(1, Ordering::AcqRel);
        debug_assert!(previous > 0);
        if previous == 1 {
            self.stop.request_stop();
        }
        outcome
    }
}

fn classify(tn: TransactionNumber, code: ResponseCode, response: Option<&Response>) -> Outcome {
    if !code.is_success() {
        warn!("Transaction {tn} failed: {code}");
        return Outcome::Failed(code);
    }
    let Some(response) = response else {
        warn!("Transaction {tn} completed without a response");
        return Outcome::Failed(ResponseCode::InvalidResponse);
    };
    if response.transaction_number != tn {
        warn!(
            "Response carries transaction {} instead of {tn}",
            response.transaction_number
        );
        return Outcome::Failed(ResponseCode::TransactionMismatch);
    }
    info!(
        "{} -> {}, TN: {}, Msg Count: {}, sub dev: {}, param {}, data len: {}",
        response.source,
        response.destination,
        response.transaction_number,
        response.message_count,
        response.sub_device,
        response.param_id,
        response.param_data_size()
    );
    Outcome::Success
}

const fn slot(tn: TransactionNumber) -> (usize, u32) {
    (tn as usize / 32, 1 << (tn % 32))
}
