// SPDX-FileCopyrightText: Copyright (c) 2018-2025 slowtec GmbH <post@slowtec.de>
// SPDX-License-Identifier: MIT OR Apache-2.0

use core::fmt;

mod data;

pub use self::data::*;
use crate::{error::*, uid::Uid};

/// An RDM transaction number (`0` - `255`).
pub type TransactionNumber = u8;

/// An RDM sub-device is represented by 16 bit.
pub type SubDevice = u16;

/// Port of the controller a request leaves on.
pub type PortId = u8;

/// The device itself, as opposed to one of its sub-devices.
pub const ROOT_DEVICE: SubDevice = 0x0000;

/// Addresses every sub-device of a device.
pub const ALL_SUB_DEVICES: SubDevice = 0xFFFF;

/// The port outbound requests are stamped with.
pub const DEFAULT_PORT_ID: PortId = 1;

/// An RDM parameter ID (PID).
///
/// It is represented by an unsigned 16 bit integer.
#[cfg_attr(all(feature = "defmt", target_os = "none"), derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterId {
    /// PID `0x0050`.
    SupportedParameters,

    /// PID `0x0060`.
    DeviceInfo,

    /// PID `0x0081`.
    ManufacturerLabel,

    /// PID `0x0082`.
    DeviceLabel,

    /// PID `0x00C0`.
    SoftwareVersionLabel,

    /// PID `0x00F0`.
    DmxStartAddress,

    /// PID `0x1000`.
    IdentifyDevice,

    /// Manufacturer specific or otherwise unnamed PID.
    Custom(u16),
}

impl ParameterId {
    /// Create a new [`ParameterId`] with `value`.
    #[must_use]
    pub const fn new(value: u16) -> Self {
        match value {
            0x0050 => Self::SupportedParameters,
            0x0060 => Self::DeviceInfo,
            0x0081 => Self::ManufacturerLabel,
            0x0082 => Self::DeviceLabel,
            0x00C0 => Self::SoftwareVersionLabel,
            0x00F0 => Self::DmxStartAddress,
            0x1000 => Self::IdentifyDevice,
            pid => Self::Custom(pid),
        }
    }

    /// Get the [`u16`] value of the current [`ParameterId`].
    #[must_use]
    pub const fn value(self) -> u16 {
        match self {
            Self::SupportedParameters => 0x0050,
            Self::DeviceInfo => 0x0060,
            Self::ManufacturerLabel => 0x0081,
            Self::DeviceLabel => 0x0082,
            Self::SoftwareVersionLabel => 0x00C0,
            Self::DmxStartAddress => 0x00F0,
            Self::IdentifyDevice => 0x1000,
            Self::Custom(pid) => pid,
        }
    }
}

impl From<u16> for ParameterId {
    fn from(value: u16) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for ParameterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:04x}", self.value())
    }
}

/// RDM command class.
#[cfg_attr(all(feature = "defmt", target_os = "none"), derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandClass {
    GetCommand = 0x20,
    GetCommandResponse = 0x21,
    SetCommand = 0x30,
    SetCommandResponse = 0x31,
}

impl CommandClass {
    /// The class a responder answers this class with.
    #[must_use]
    pub const fn response_class(self) -> Self {
        match self {
            Self::GetCommand | Self::GetCommandResponse => Self::GetCommandResponse,
            Self::SetCommand | Self::SetCommandResponse => Self::SetCommandResponse,
        }
    }
}

impl TryFrom<u8> for CommandClass {
    type Error = u8;

    fn try_from(code: u8) -> core::result::Result<Self, u8> {
        use CommandClass::*;
        let class = match code {
            0x20 => GetCommand,
            0x21 => GetCommandResponse,
            0x30 => SetCommand,
            0x31 => SetCommandResponse,
            _ => return Err(code),
        };
        Ok(class)
    }
}

/// The response type a responder acknowledges a request with.
#[cfg_attr(all(feature = "defmt", target_os = "none"), derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseType {
    Ack = 0x00,
    AckTimer = 0x01,
    NackReason = 0x02,
    AckOverflow = 0x03,
}

impl TryFrom<u8> for ResponseType {
    type Error = u8;

    fn try_from(code: u8) -> core::result::Result<Self, u8> {
        use ResponseType::*;
        let rt = match code {
            0x00 => Ack,
            0x01 => AckTimer,
            0x02 => NackReason,
            0x03 => AckOverflow,
            _ => return Err(code),
        };
        Ok(rt)
    }
}

/// Completion code the transport reports for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCode {
    CompletedOk,
    WasBroadcast,
    FailedToSend,
    Timeout,
    InvalidResponse,
    UnknownUid,
    ChecksumIncorrect,
    TransactionMismatch,
    SubDeviceMismatch,
    SrcUidMismatch,
    DestUidMismatch,
    WrongSubStartCode,
    PacketTooShort,
    PacketLengthMismatch,
    ParamLengthMismatch,
    InvalidCommandClass,
    CommandClassMismatch,
    InvalidResponseType,
}

impl ResponseCode {
    const fn get_name(self) -> &'static str {
        match self {
            Self::CompletedOk => "Completed Ok",
            Self::WasBroadcast => "Request was broadcast",
            Self::FailedToSend => "Failed to send request",
            Self::Timeout => "Response Timeout",
            Self::InvalidResponse => "Invalid Response",
            Self::UnknownUid => "The RDM device could not be found",
            Self::ChecksumIncorrect => "Incorrect checksum",
            Self::TransactionMismatch => "Transaction number mismatch",
            Self::SubDeviceMismatch => "Sub device mismatch",
            Self::SrcUidMismatch => "Source UID in response doesn't match",
            Self::DestUidMismatch => "Destination UID in response doesn't match",
            Self::WrongSubStartCode => "Incorrect sub start code",
            Self::PacketTooShort => "RDM response was smaller than the minimum size",
            Self::PacketLengthMismatch => "The length field of packet didn't match length received",
            Self::ParamLengthMismatch => "The parameter length exceeds the remaining packet size",
            Self::InvalidCommandClass => "The command class was not one of GET_RESPONSE or SET_RESPONSE",
            Self::CommandClassMismatch => "The command class didn't match the request",
            Self::InvalidResponseType => "The response type was not ACK, ACK_OVERFLOW, ACK_TIMER or NACK",
        }
    }

    /// Only [`ResponseCode::CompletedOk`] carries a usable response.
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::CompletedOk)
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.get_name())
    }
}

#[cfg(all(feature = "defmt", target_os = "none"))]
impl defmt::Format for ResponseCode {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.get_name())
    }
}

/// An outbound RDM command.
///
/// A request is built for exactly one send and is moved into the transport
/// when it gets dispatched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub(crate) source: Uid,
    pub(crate) destination: Uid,
    pub(crate) transaction_number: TransactionNumber,
    pub(crate) port_id: PortId,
    pub(crate) message_count: u8,
    pub(crate) sub_device: SubDevice,
    pub(crate) command_class: CommandClass,
    pub(crate) param_id: ParameterId,
    pub(crate) data: ParamData,
}

impl Request {
    #[must_use]
    pub const fn source(&self) -> Uid {
        self.source
    }

    #[must_use]
    pub const fn destination(&self) -> Uid {
        self.destination
    }

    #[must_use]
    pub const fn transaction_number(&self) -> TransactionNumber {
        self.transaction_number
    }

    #[must_use]
    pub const fn port_id(&self) -> PortId {
        self.port_id
    }

    #[must_use]
    pub const fn message_count(&self) -> u8 {
        self.message_count
    }

    #[must_use]
    pub const fn sub_device(&self) -> SubDevice {
        self.sub_device
    }

    #[must_use]
    pub const fn command_class(&self) -> CommandClass {
        self.command_class
    }

    #[must_use]
    pub const fn param_id(&self) -> ParameterId {
        self.param_id
    }

    #[must_use]
    pub const fn param_data(&self) -> &ParamData {
        &self.data
    }

    #[must_use]
    pub const fn param_data_size(&self) -> usize {
        self.data.len()
    }
}

/// An inbound RDM response as decoded by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub source: Uid,
    pub destination: Uid,
    pub transaction_number: TransactionNumber,
    pub response_type: ResponseType,
    pub message_count: u8,
    pub sub_device: SubDevice,
    pub command_class: CommandClass,
    pub param_id: ParameterId,
    pub data: ParamData,
}

impl Response {
    /// An `ACK` answering `request`, as a well behaved responder sends it.
    #[cfg(test)]
    pub(crate) fn ack(request: &Request, data: &[u8]) -> Result<Self> {
        Ok(Self {
            source: request.destination,
            destination: request.source,
            transaction_number: request.transaction_number,
            response_type: ResponseType::Ack,
            message_count: 0,
            sub_device: request.sub_device,
            command_class: request.command_class.response_class(),
            param_id: request.param_id,
            data: ParamData::new(data)?,
        })
    }

    #[must_use]
    pub const fn param_data_size(&self) -> usize {
        self.data.len()
    }
}
