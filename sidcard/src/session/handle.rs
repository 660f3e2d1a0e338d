// sidcard/src/session/handle.rs

use std::ops::RangeInclusive;
use std::path::PathBuf;

use log::{debug, trace, warn};

use crate::constants::{APP_MSG_CAPACITY, IIN_LEN, PORT_RANGE_END, PORT_RANGE_START, SN_LEN};
use crate::error::PhotoWarning;
use crate::message::{ChipMessage, PhotoMessage};
use crate::photo::{self, PhotoDecoder, Portrait};
use crate::record::DecodedRecord;
use crate::sdk::SdtApi;
use crate::types::{PortId, Status};
use crate::utils::{bytes_to_hex, bytes_to_hex_spaced};
use crate::{Error, Result};

/// Outcome of one poll cycle.
#[derive(Debug)]
pub enum Poll {
    /// Nothing to read: no card present or the reader is between events.
    /// The expected common case in a polling loop, not an error.
    Idle,
    /// A record was read and decoded.
    Card(Scan),
}

/// A successfully decoded scan: the textual record plus the best-effort
/// portrait outcome when the card carried a photo segment.
#[derive(Debug)]
pub struct Scan {
    pub record: DecodedRecord,
    /// `None` when the card had no photo segment or no decoder is
    /// configured; `Some(Err(_))` carries the downgraded photo warning.
    pub portrait: Option<std::result::Result<Portrait, PhotoWarning>>,
}

/// An owned scanner session: an acquired reader port plus the SDK handle
/// driving it. Single-threaded and blocking throughout; one cycle per
/// [`Session::poll`] call, released exactly once on teardown.
pub struct Session {
    api: Box<dyn SdtApi>,
    photo_decoder: Option<Box<dyn PhotoDecoder>>,
    portrait_path: Option<PathBuf>,
    port: Option<PortId>,
}

impl Session {
    /// Acquire a reader over the default candidate port range.
    pub fn open(api: Box<dyn SdtApi>) -> Result<Self> {
        Self::open_parts(api, PORT_RANGE_START..=PORT_RANGE_END, None, None)
    }

    /// Start configuring a session.
    pub fn builder(api: Box<dyn SdtApi>) -> crate::session::SessionBuilder {
        crate::session::SessionBuilder::new(api)
    }

    pub(crate) fn open_parts(
        mut api: Box<dyn SdtApi>,
        range: RangeInclusive<u16>,
        photo_decoder: Option<Box<dyn PhotoDecoder>>,
        portrait_path: Option<PathBuf>,
    ) -> Result<Self> {
        let port = acquire_port(api.as_mut(), range)?;
        Ok(Self {
            api,
            photo_decoder,
            portrait_path,
            port: Some(port),
        })
    }

    /// The acquired port, until the session is closed.
    pub fn port(&self) -> Option<PortId> {
        self.port
    }

    /// Drive one scan cycle: probe for an application message, find and
    /// select the card, read the base message, then classify and extract.
    ///
    /// Absence of a card is the benign [`Poll::Idle`], distinct from the
    /// cycle errors; callers poll in a loop with a short pause and treat
    /// errors as aborting only the current attempt.
    pub fn poll(&mut self) -> Result<Poll> {
        let port = self.port.ok_or(Error::NotOpen)?;

        let mut app = [0u8; APP_MSG_CAPACITY];
        let status = self.api.read_application_message(port, &mut app);
        if status == Status::OK || status == Status::APP_IDLE {
            trace!("app probe {}: nothing to read", status);
            return Ok(Poll::Idle);
        }

        let mut iin = [0u8; IIN_LEN];
        let status = self.api.find_card(port, &mut iin);
        if status != Status::FIND_OK {
            return Err(Error::FindFailed {
                status: status.code(),
            });
        }
        trace!("find card ok, iin {}", bytes_to_hex_spaced(&iin));

        let mut sn = [0u8; SN_LEN];
        let status = self.api.select_card(port, &mut sn);
        if status != Status::OK {
            return Err(Error::SelectFailed {
                status: status.code(),
            });
        }
        trace!("select card ok, sn {}", bytes_to_hex_spaced(&sn));

        let mut chip = ChipMessage::new();
        let mut photo = PhotoMessage::new();
        let status = self.api.read_base_message(port, &mut chip, &mut photo);
        if status != Status::OK {
            return Err(Error::ReadFailed {
                status: status.code(),
            });
        }
        // The device can report success with no payload on transient
        // misreads; that must not reach the extractor.
        if chip.is_empty() {
            return Err(Error::EmptyMessage);
        }
        trace!(
            "chip message {} bytes: {}",
            chip.len(),
            bytes_to_hex(chip.bytes())
        );

        let record = DecodedRecord::decode(&chip);
        debug!(
            "decoded {:?} record, {} fields, photo {} bytes",
            record.variant(),
            record.fields().len(),
            photo.len()
        );

        let portrait = if photo.is_empty() {
            None
        } else {
            self.decode_portrait(&photo)
        };

        Ok(Poll::Card(Scan { record, portrait }))
    }

    /// Release the reader port. Idempotent: only the first call reaches
    /// the SDK; `Drop` goes through here as well.
    pub fn close(&mut self) {
        if let Some(port) = self.port.take() {
            debug!("closing reader port {}", port);
            self.api.close_port(port);
        }
    }

    fn decode_portrait(
        &mut self,
        photo: &PhotoMessage,
    ) -> Option<std::result::Result<Portrait, PhotoWarning>> {
        let decoder = self.photo_decoder.as_mut()?;
        match photo::decode_portrait(decoder.as_mut(), photo.bytes()) {
            Ok(portrait) => {
                if let Some(path) = &self.portrait_path {
                    if let Err(err) = portrait.write_to(path) {
                        warn!("portrait write to {} failed: {}", path.display(), err);
                    }
                }
                Some(Ok(portrait))
            }
            Err(warning) => {
                // Downgraded by contract: the textual record stands.
                warn!("{}", warning);
                Some(Err(warning))
            }
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.close();
    }
}

/// Linear probe over the candidate range, ascending, one pass, no retry.
/// The first port answering 0x90 is retained.
fn acquire_port(api: &mut dyn SdtApi, range: RangeInclusive<u16>) -> Result<PortId> {
    let mut last_status = 0i32;
    for candidate in range {
        let port = PortId::new(candidate);
        let status = api.open_port(port);
        if status == Status::OK {
            debug!("opened reader port {}", port);
            return Ok(port);
        }
        trace!("port {} answered {}", port, status);
        last_status = status.code();
    }
    Err(Error::NoPortAvailable { last_status })
}
