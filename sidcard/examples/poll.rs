//! Polling-loop demo over a scripted mock reader.
//!
//! Usage:
//!   cargo run -p sidcard --example poll
//!
//! The real SDK binding implements `SdtApi` over the vendor dynamic
//! library; here a `MockSdt` stands in so the demo runs anywhere.

use std::thread;
use std::time::Duration;

use sidcard::sdk::MockSdt;
use sidcard::test_support::{chip_with_marker, write_utf16le};
use sidcard::{Poll, Session, Status};

fn sample_chip() -> Vec<u8> {
    let mut buf = chip_with_marker([0, 0]);
    write_utf16le(&mut buf, 0, "张伟");
    write_utf16le(&mut buf, 30, "1");
    write_utf16le(&mut buf, 32, "01");
    write_utf16le(&mut buf, 36, "19851203");
    write_utf16le(&mut buf, 52, "北京市东城区景山前街4号");
    write_utf16le(&mut buf, 122, "110101198512030011");
    write_utf16le(&mut buf, 158, "北京市公安局东城分局");
    write_utf16le(&mut buf, 188, "20150101");
    write_utf16le(&mut buf, 204, "20350101");
    buf
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Scripted reader: two idle cycles, then a card appears.
    let mut mock = MockSdt::with_card(sample_chip());
    mock.app_status = Status::APP_IDLE;
    let shared = sidcard::test_support::SharedSdt::new(mock);

    let mut session = Session::open(shared.handle())?;
    println!("reader on port {:?}", session.port());

    let mut cycles = 0;
    loop {
        cycles += 1;
        if cycles == 3 {
            shared.with_mock(|m| m.app_status = Status::new(0x00));
        }

        match session.poll() {
            Ok(Poll::Idle) => {
                println!("cycle {}: no card", cycles);
                thread::sleep(Duration::from_millis(200));
            }
            Ok(Poll::Card(scan)) => {
                println!("cycle {}: {:?} card", cycles, scan.record.variant());
                print!("{}", scan.record);
                break;
            }
            Err(err) => {
                // A cycle error only aborts this attempt.
                eprintln!("cycle {}: {} (retrying)", cycles, err);
                thread::sleep(Duration::from_millis(200));
            }
        }
    }

    Ok(())
}
