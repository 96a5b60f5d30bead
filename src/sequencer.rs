// SPDX-FileCopyrightText: Copyright (c) 2018-2025 slowtec GmbH <post@slowtec.de>
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Transaction number allocation.

use core::sync::atomic::{AtomicU8, Ordering};

use crate::frame::TransactionNumber;

/// Hands out transaction numbers in dispatch order.
///
/// The counter is 8 bit wide like the RDM field and wraps from `255` back
/// to `0`. Numbers still awaiting a completion are guarded against reuse by
/// the [`Coordinator`](crate::Coordinator).
#[derive(Debug, Default)]
pub struct Sequencer {
    next: AtomicU8,
}

impl Sequencer {
    #[must_use]
    pub const fn new() -> Self {
        Self::starting_at(0)
    }

    #[must_use]
    pub const fn starting_at(first: TransactionNumber) -> Self {
        Self {
            next: AtomicU8::new(first),
        }
    }

    /// Return the current value and advance the counter.
    pub fn next(&self) -> TransactionNumber {
        self.next.fetch_add(1, Ordering::Relaxed)
    }

    /// The value the next call to [`Sequencer::next`] returns.
    #[must_use]
    pub fn peek(&self) -> TransactionNumber {
        self.next.load(Ordering::Relaxed)
    }
}
