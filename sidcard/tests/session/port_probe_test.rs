use sidcard::constants::{PORT_RANGE_END, PORT_RANGE_START};
use sidcard::sdk::MockSdt;
use sidcard::test_support::SharedSdt;
use sidcard::{Error, PortId, Session, Status};

#[test]
fn exhausted_range_probes_each_port_once_ascending() {
    let mut mock = MockSdt::new();
    mock.open_on = None;
    mock.open_fail_status = Status::new(0x05);
    let shared = SharedSdt::new(mock);

    match Session::open(shared.handle()) {
        Err(Error::NoPortAvailable { last_status }) => assert_eq!(last_status, 0x05),
        other => panic!("expected NoPortAvailable, got {:?}", other.map(|_| ())),
    }

    let probed = shared.probed_ports();
    let expected: Vec<u16> = (PORT_RANGE_START..=PORT_RANGE_END).collect();
    assert_eq!(probed, expected, "one pass, ascending, no retries");
    assert_eq!(probed.len(), 16);
}

#[test]
fn first_answering_port_wins() {
    let mut mock = MockSdt::new();
    mock.open_on = Some(1009);
    let shared = SharedSdt::new(mock);

    let session = Session::open(shared.handle()).unwrap();
    assert_eq!(session.port(), Some(PortId::new(1009)));
    // Probing stopped at the successful candidate.
    assert_eq!(shared.probed_ports().last(), Some(&1009));
    assert_eq!(shared.probed_ports().len(), 9);
}

#[test]
fn failed_acquisition_never_closes_a_port() {
    let mut mock = MockSdt::new();
    mock.open_on = None;
    let shared = SharedSdt::new(mock);
    let _ = Session::open(shared.handle());
    assert_eq!(shared.close_calls(), 0);
}

#[test]
fn teardown_releases_the_port_exactly_once() {
    let shared = SharedSdt::new(MockSdt::new());
    {
        let mut session = Session::open(shared.handle()).unwrap();
        session.close();
        // Drop fires afterwards and must not release again.
    }
    assert_eq!(shared.close_calls(), 1);
}
