//! Test support helpers intended for use by unit and integration tests.
//!
//! These centralize chip-buffer construction and shared-mock plumbing so
//! tests across the crate and the tests/ directory reuse the same logic.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use crate::constants::{APP_MSG_CAPACITY, CHIP_MSG_CAPACITY, IIN_LEN, SN_LEN, TYPE_MARKER_OFFSET};
use crate::message::{ChipMessage, PhotoMessage};
use crate::photo::PhotoDecoder;
use crate::sdk::{MockSdt, SdtApi};
use crate::types::{PortId, Status};

/// A zeroed chip buffer with the 2-byte type marker set at its fixed
/// offset. `[0, 0]` leaves the national-ID default in place.
#[doc(hidden)]
pub fn chip_with_marker(marker: [u8; 2]) -> Vec<u8> {
    let mut buf = vec![0u8; CHIP_MSG_CAPACITY];
    buf[TYPE_MARKER_OFFSET] = marker[0];
    buf[TYPE_MARKER_OFFSET + 1] = marker[1];
    buf
}

/// Encode `text` as UTF-16LE into `buf` starting at `offset`. The field
/// stays NUL-terminated as long as the buffer was zeroed beforehand.
#[doc(hidden)]
pub fn write_utf16le(buf: &mut [u8], offset: usize, text: &str) {
    let mut at = offset;
    for unit in text.encode_utf16() {
        let bytes = unit.to_le_bytes();
        buf[at] = bytes[0];
        buf[at + 1] = bytes[1];
        at += 2;
    }
}

/// Wrap raw chip bytes in a [`ChipMessage`] with its length recorded.
#[doc(hidden)]
pub fn chip_message(bytes: Vec<u8>) -> ChipMessage {
    let mut chip = ChipMessage::new();
    chip.fill(&bytes).expect("test payload fits capacity");
    chip
}

/// Shared handle over a [`MockSdt`] so a test can keep inspecting the
/// call log after a session has taken ownership of the API.
#[doc(hidden)]
#[derive(Clone)]
pub struct SharedSdt {
    inner: Rc<RefCell<MockSdt>>,
}

impl SharedSdt {
    pub fn new(mock: MockSdt) -> Self {
        Self {
            inner: Rc::new(RefCell::new(mock)),
        }
    }

    /// A second handle to hand to the session.
    pub fn handle(&self) -> Box<dyn SdtApi> {
        Box::new(self.clone())
    }

    pub fn probed_ports(&self) -> Vec<u16> {
        self.inner.borrow().probed_ports()
    }

    pub fn close_calls(&self) -> usize {
        self.inner.borrow().close_calls()
    }

    pub fn calls(&self) -> Vec<crate::sdk::ApiCall> {
        self.inner.borrow().calls.clone()
    }

    pub fn with_mock<R>(&self, f: impl FnOnce(&mut MockSdt) -> R) -> R {
        f(&mut self.inner.borrow_mut())
    }
}

impl SdtApi for SharedSdt {
    fn open_port(&mut self, port: PortId) -> Status {
        self.inner.borrow_mut().open_port(port)
    }

    fn close_port(&mut self, port: PortId) -> Status {
        self.inner.borrow_mut().close_port(port)
    }

    fn find_card(&mut self, port: PortId, iin: &mut [u8; IIN_LEN]) -> Status {
        self.inner.borrow_mut().find_card(port, iin)
    }

    fn select_card(&mut self, port: PortId, sn: &mut [u8; SN_LEN]) -> Status {
        self.inner.borrow_mut().select_card(port, sn)
    }

    fn read_application_message(
        &mut self,
        port: PortId,
        msg: &mut [u8; APP_MSG_CAPACITY],
    ) -> Status {
        self.inner.borrow_mut().read_application_message(port, msg)
    }

    fn read_base_message(
        &mut self,
        port: PortId,
        chip: &mut ChipMessage,
        photo: &mut PhotoMessage,
    ) -> Status {
        self.inner.borrow_mut().read_base_message(port, chip, photo)
    }
}

/// Scripted portrait decompressor: returns a fixed output or a fixed
/// vendor failure message on every call.
#[doc(hidden)]
pub struct FixedPhotoDecoder {
    output: Result<Vec<u8>, String>,
}

impl FixedPhotoDecoder {
    pub fn ok(bytes: Vec<u8>) -> Self {
        Self { output: Ok(bytes) }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            output: Err(message.to_string()),
        }
    }
}

impl PhotoDecoder for FixedPhotoDecoder {
    fn decode(&mut self, _photo: &[u8]) -> Result<Vec<u8>, String> {
        self.output.clone()
    }
}
