// sidcard/src/session/builder.rs

use std::ops::RangeInclusive;
use std::path::PathBuf;

use crate::constants::{PORT_RANGE_END, PORT_RANGE_START};
use crate::photo::PhotoDecoder;
use crate::sdk::SdtApi;
use crate::session::Session;
use crate::Result;

/// Helper to construct a [`Session`] with optional configuration.
pub struct SessionBuilder {
    api: Box<dyn SdtApi>,
    range: RangeInclusive<u16>,
    photo_decoder: Option<Box<dyn PhotoDecoder>>,
    portrait_path: Option<PathBuf>,
}

impl SessionBuilder {
    pub fn new(api: Box<dyn SdtApi>) -> Self {
        Self {
            api,
            range: PORT_RANGE_START..=PORT_RANGE_END,
            photo_decoder: None,
            portrait_path: None,
        }
    }

    /// Override the candidate port range for acquisition.
    pub fn port_range(mut self, range: RangeInclusive<u16>) -> Self {
        self.range = range;
        self
    }

    /// Attach an opaque portrait decompressor; without one, photo
    /// segments are ignored.
    pub fn photo_decoder(mut self, decoder: Box<dyn PhotoDecoder>) -> Self {
        self.photo_decoder = Some(decoder);
        self
    }

    /// Persist decoded portraits to this path.
    pub fn portrait_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.portrait_path = Some(path.into());
        self
    }

    /// Probe the candidate range and open the session.
    pub fn open(self) -> Result<Session> {
        Session::open_parts(self.api, self.range, self.photo_decoder, self.portrait_path)
    }
}
