// sidcard/src/sdk/traits.rs

use crate::constants::{APP_MSG_CAPACITY, IIN_LEN, SN_LEN};
use crate::message::{ChipMessage, PhotoMessage};
use crate::types::{PortId, Status};

/// The SDT reader SDK surface, abstracted away from session logic.
///
/// Every request blocks until the device answers or the binding layer
/// times out internally, and reports a raw [`Status`]; interpreting the
/// status against the wire contract is the session's job. Implementations
/// wrap the vendor dynamic library; [`crate::sdk::MockSdt`] scripts
/// responses for tests.
pub trait SdtApi {
    /// Issue an open-port request against a candidate port.
    fn open_port(&mut self, port: PortId) -> Status;

    /// Release a previously opened port.
    fn close_port(&mut self, port: PortId) -> Status;

    /// Start the find-card sequence; fills the card's IIN on success.
    fn find_card(&mut self, port: PortId, iin: &mut [u8; IIN_LEN]) -> Status;

    /// Select the found card; fills its serial number on success.
    fn select_card(&mut self, port: PortId, sn: &mut [u8; SN_LEN]) -> Status;

    /// Probe for a pending application message. [`Status::OK`] and
    /// [`Status::APP_IDLE`] both mean there is nothing to read this cycle.
    fn read_application_message(&mut self, port: PortId, msg: &mut [u8; APP_MSG_CAPACITY])
    -> Status;

    /// Combined base-message read: fills the chip and photo buffers and
    /// records their valid lengths.
    fn read_base_message(
        &mut self,
        port: PortId,
        chip: &mut ChipMessage,
        photo: &mut PhotoMessage,
    ) -> Status;
}
