// SPDX-FileCopyrightText: Copyright (c) 2018-2025 slowtec GmbH <post@slowtec.de>
// SPDX-License-Identifier: MIT OR Apache-2.0

#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), no_std)]

extern crate alloc;
#[macro_use]
extern crate log;

mod builder;
mod config;
mod controller;
mod coordinator;
mod error;
mod frame;
mod registry;
mod sequencer;
mod transport;
mod uid;

pub use builder::*;
pub use config::*;
pub use controller::*;
pub use coordinator::*;
pub use error::*;
pub use frame::*;
pub use registry::*;
pub use sequencer::*;
pub use transport::*;
pub use uid::*;
