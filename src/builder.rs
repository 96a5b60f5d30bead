// SPDX-FileCopyrightText: Copyright (c) 2018-2025 slowtec GmbH <post@slowtec.de>
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Construction of outbound GET and SET requests.

use crate::{error::*, frame::*, uid::Uid};

/// Builds requests from one controller to one device.
///
/// The builder never allocates transaction numbers, they are handed in by
/// the caller (usually taken from a [`Sequencer`](crate::Sequencer)).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestBuilder {
    source: Uid,
    destination: Uid,
    sub_device: SubDevice,
    port_id: PortId,
}

impl RequestBuilder {
    /// Requests addressed to the root device on [`DEFAULT_PORT_ID`].
    #[must_use]
    pub const fn new(source: Uid, destination: Uid) -> Self {
        Self {
            source,
            destination,
            sub_device: ROOT_DEVICE,
            port_id: DEFAULT_PORT_ID,
        }
    }

    #[must_use]
    pub const fn with_sub_device(mut self, sub_device: SubDevice) -> Self {
        self.sub_device = sub_device;
        self
    }

    #[must_use]
    pub const fn with_destination(mut self, destination: Uid) -> Self {
        self.destination = destination;
        self
    }

    #[must_use]
    pub const fn destination(&self) -> Uid {
        self.destination
    }

    #[must_use]
    pub fn build_get(&self, transaction_number: TransactionNumber, param_id: ParameterId) -> Request {
        self.build(
            transaction_number,
            CommandClass::GetCommand,
            param_id,
            ParamData::default(),
        )
    }

    pub fn build_set(
        &self,
        transaction_number: TransactionNumber,
        param_id: ParameterId,
        data: &[u8],
    ) -> Result<Request> {
        let data = ParamData::new(data)?;
        Ok(self.build(transaction_number, CommandClass::SetCommand, param_id, data))
    }

    pub(crate) fn build(
        &self,
        transaction_number: TransactionNumber,
        command_class: CommandClass,
        param_id: ParameterId,
        data: ParamData,
    ) -> Request {
        Request {
            source: self.source,
            destination: self.destination,
            transaction_number,
            port_id: self.port_id,
            // only responders report queued messages
            message_count: 0,
            sub_device: self.sub_device,
            command_class,
            param_id,
            data,
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    const SOURCE: Uid = Uid::new(0x7a70, 0xabcd_abcd);
    const DEVICE: Uid = Uid::new(0x7a70, 0x0000_0001);

    #[test]
    fn build_get_request() {
        let req = RequestBuilder::new(SOURCE, DEVICE).build_get(5, ParameterId::DeviceInfo);
        assert_eq!(req.source(), SOURCE);
        assert_eq!(req.destination(), DEVICE);
        assert_eq!(req.transaction_number(), 5);
        assert_eq!(req.port_id(), 1);
        assert_eq!(req.message_count(), 0);
        assert_eq!(req.sub_device(), ROOT_DEVICE);
        assert_eq!(req.command_class(), CommandClass::GetCommand);
        assert_eq!(req.param_id(), ParameterId::DeviceInfo);
        assert!(req.param_data().is_empty());
    }

    #[test]
    fn build_set_request_copies_payload() {
        let mut payload = [0x00, 0x0A];
        let req = RequestBuilder::new(SOURCE, DEVICE)
            .build_set(7, ParameterId::DmxStartAddress, &payload)
            .unwrap();
        payload[1] = 0x00;
        assert_eq!(req.command_class(), CommandClass::SetCommand);
        assert_eq!(req.param_data().as_slice(), &[0x00, 0x0A]);
        assert_eq!(req.param_data_size(), 2);
        assert_eq!(req.message_count(), 0);
    }

    #[test]
    fn build_set_rejects_oversized_payload() {
        let payload = [0; MAX_PARAM_DATA_LEN + 1];
        assert_eq!(
            RequestBuilder::new(SOURCE, DEVICE)
                .build_set(0, ParameterId::DeviceLabel, &payload)
                .err()
                .unwrap(),
            Error::ParamDataTooLong(MAX_PARAM_DATA_LEN + 1)
        );
    }

    #[test]
    fn address_sub_device() {
        let builder = RequestBuilder::new(SOURCE, DEVICE).with_sub_device(3);
        assert_eq!(builder.build_get(0, ParameterId::DeviceLabel).sub_device(), 3);
        let other = Uid::new(0x7a70, 2);
        let req = builder.with_destination(other).build_get(1, ParameterId::DeviceLabel);
        assert_eq!(req.destination(), other);
        assert_eq!(req.sub_device(), 3);
    }
}
