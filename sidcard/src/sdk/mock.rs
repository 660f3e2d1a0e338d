// sidcard/src/sdk/mock.rs

use crate::constants::{APP_MSG_CAPACITY, IIN_LEN, SN_LEN};
use crate::message::{ChipMessage, PhotoMessage};
use crate::sdk::traits::SdtApi;
use crate::types::{PortId, Status};

/// One recorded SDK request, for order and count assertions in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    OpenPort(u16),
    ClosePort(u16),
    FindCard,
    SelectCard,
    ReadAppMessage,
    ReadBaseMessage,
}

/// Mock SDK for unit tests. It records every request and answers with
/// scripted statuses and canned payloads.
#[derive(Debug)]
pub struct MockSdt {
    /// Log of every request, in issue order.
    pub calls: Vec<ApiCall>,

    /// Port that answers the open-port request with [`Status::OK`];
    /// `None` makes every candidate fail.
    pub open_on: Option<u16>,
    /// Status returned by open-port for every other candidate.
    pub open_fail_status: Status,

    /// Status for the application-message probe. The default keeps the
    /// cycle going; set [`Status::OK`] or [`Status::APP_IDLE`] to script
    /// an idle poll.
    pub app_status: Status,
    pub find_status: Status,
    pub select_status: Status,
    pub base_status: Status,

    /// Payload copied into the chip buffer by read-base-message.
    pub chip_payload: Vec<u8>,
    /// Payload copied into the photo buffer by read-base-message.
    pub photo_payload: Vec<u8>,

    /// IIN filled by find-card.
    pub iin: [u8; IIN_LEN],
    /// Serial number filled by select-card.
    pub sn: [u8; SN_LEN],
}

impl MockSdt {
    /// A mock whose first candidate port opens and whose card steps all
    /// succeed with an empty chip payload; tests script the rest.
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            open_on: Some(crate::constants::PORT_RANGE_START),
            open_fail_status: Status::new(0x01),
            app_status: Status::new(0x00),
            find_status: Status::FIND_OK,
            select_status: Status::OK,
            base_status: Status::OK,
            chip_payload: Vec::new(),
            photo_payload: Vec::new(),
            iin: [0; IIN_LEN],
            sn: [0; SN_LEN],
        }
    }

    /// Convenience: a mock presenting a card with the given chip payload.
    pub fn with_card(chip_payload: Vec<u8>) -> Self {
        let mut mock = Self::new();
        mock.chip_payload = chip_payload;
        mock
    }

    /// Number of close-port requests seen so far.
    pub fn close_calls(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, ApiCall::ClosePort(_)))
            .count()
    }

    /// Ports probed by open-port requests, in issue order.
    pub fn probed_ports(&self) -> Vec<u16> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                ApiCall::OpenPort(p) => Some(*p),
                _ => None,
            })
            .collect()
    }
}

impl Default for MockSdt {
    fn default() -> Self {
        Self::new()
    }
}

impl SdtApi for MockSdt {
    fn open_port(&mut self, port: PortId) -> Status {
        self.calls.push(ApiCall::OpenPort(port.as_u16()));
        if Some(port.as_u16()) == self.open_on {
            Status::OK
        } else {
            self.open_fail_status
        }
    }

    fn close_port(&mut self, port: PortId) -> Status {
        self.calls.push(ApiCall::ClosePort(port.as_u16()));
        Status::OK
    }

    fn find_card(&mut self, _port: PortId, iin: &mut [u8; IIN_LEN]) -> Status {
        self.calls.push(ApiCall::FindCard);
        *iin = self.iin;
        self.find_status
    }

    fn select_card(&mut self, _port: PortId, sn: &mut [u8; SN_LEN]) -> Status {
        self.calls.push(ApiCall::SelectCard);
        *sn = self.sn;
        self.select_status
    }

    fn read_application_message(
        &mut self,
        _port: PortId,
        _msg: &mut [u8; APP_MSG_CAPACITY],
    ) -> Status {
        self.calls.push(ApiCall::ReadAppMessage);
        self.app_status
    }

    fn read_base_message(
        &mut self,
        _port: PortId,
        chip: &mut ChipMessage,
        photo: &mut PhotoMessage,
    ) -> Status {
        self.calls.push(ApiCall::ReadBaseMessage);
        let n = self.chip_payload.len().min(ChipMessage::CAPACITY);
        chip.as_raw_mut()[..n].copy_from_slice(&self.chip_payload[..n]);
        chip.set_len(n);
        let n = self.photo_payload.len().min(PhotoMessage::CAPACITY);
        photo.as_raw_mut()[..n].copy_from_slice(&self.photo_payload[..n]);
        photo.set_len(n);
        self.base_status
    }
}
