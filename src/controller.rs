// SPDX-FileCopyrightText: Copyright (c) 2018-2025 slowtec GmbH <post@slowtec.de>
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Drives a batch of commands against one device.

use alloc::{sync::Arc, vec, vec::Vec};

use crate::{
    builder::RequestBuilder,
    config::SessionConfig,
    coordinator::{Coordinator, StopHandle},
    error::*,
    frame::*,
    registry::Universe,
    sequencer::Sequencer,
    transport::Transport,
};

/// DMX start address the default command set writes.
pub const DEFAULT_START_ADDRESS: u16 = 10;

/// A command to send to the configured target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Get(ParameterId),
    Set(ParameterId, ParamData),
}

/// Result of [`Controller::execute`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// Transaction numbers that reached the transport, in dispatch order.
    pub dispatched: Vec<TransactionNumber>,
    /// Commands that never reached the transport.
    pub abandoned: usize,
    pub succeeded: usize,
    pub failed: usize,
}

/// Session state of one controller run.
#[derive(Debug)]
pub struct Controller {
    builder: RequestBuilder,
    sequencer: Sequencer,
    universe: Universe,
    coordinator: Arc<Coordinator>,
    stop: StopHandle,
}

impl Controller {
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        let SessionConfig {
            source,
            target,
            endpoint,
            universe,
        } = config;
        let mut universe = Universe::new(universe);
        universe.register(target, endpoint);
        let stop = StopHandle::new();
        Self {
            builder: RequestBuilder::new(source, target),
            sequencer: Sequencer::new(),
            universe,
            coordinator: Arc::new(Coordinator::new(stop.clone())),
            stop,
        }
    }

    /// GET `DEVICE_INFO`, GET `SOFTWARE_VERSION_LABEL` and SET
    /// `DMX_START_ADDRESS` to [`DEFAULT_START_ADDRESS`].
    #[must_use]
    pub fn default_commands() -> Vec<Command> {
        vec![
            Command::Get(ParameterId::DeviceInfo),
            Command::Get(ParameterId::SoftwareVersionLabel),
            Command::Set(
                ParameterId::DmxStartAddress,
                ParamData::from_u16(DEFAULT_START_ADDRESS),
            ),
        ]
    }

    #[must_use]
    pub const fn universe(&self) -> &Universe {
        &self.universe
    }

    pub fn universe_mut(&mut self) -> &mut Universe {
        &mut self.universe
    }

    #[must_use]
    pub fn coordinator(&self) -> &Coordinator {
        &self.coordinator
    }

    /// Build the next request for `command` and dispatch it.
    pub fn dispatch<T: Transport + ?Sized>(
        &self,
        transport: &mut T,
        command: &Command,
    ) -> Result<TransactionNumber> {
        let tn = self.sequencer.next();
        let request = match command {
            Command::Get(pid) => self.builder.build_get(tn, *pid),
            Command::Set(pid, data) => {
                self.builder
                    .build(tn, CommandClass::SetCommand, *pid, data.clone())
            }
        };
        self.universe.dispatch(transport, request, &self.coordinator)
    }

    /// Send `commands` to the target and wait for all completions.
    ///
    /// The universe is unregistered and the transport stopped on every
    /// path after a successful [`Transport::init`].
    pub fn execute<T: Transport + ?Sized>(
        &mut self,
        transport: &mut T,
        commands: &[Command],
    ) -> Result<Report> {
        if !transport.init() {
            error!("Failed to initialize the transport");
            return Err(Error::TransportInit);
        }
        transport.register_universe(self.universe.number());
        self.stop.reset();

        let succeeded = self.coordinator.succeeded();
        let failed = self.coordinator.failed();
        let mut report = Report::default();
        for command in commands {
            match self.dispatch(transport, command) {
                Ok(tn) => report.dispatched.push(tn),
                Err(err) => {
                    warn!("Abandoned {command:?}: {err}");
                    report.abandoned += 1;
                }
            }
        }

        if self.coordinator.outstanding() > 0 {
            debug!(
                "Waiting for {} outstanding request(s)",
                self.coordinator.outstanding()
            );
            transport.run(&self.stop);
        }
        transport.unregister_universe(self.universe.number());
        transport.stop();

        report.succeeded = self.coordinator.succeeded() - succeeded;
        report.failed = self.coordinator.failed() - failed;
        Ok(report)
    }
}
