#[path = "../common/mod.rs"]
mod common;

use common::fixtures;

use sidcard::constants::PORTRAIT_LEN;
use sidcard::sdk::{ApiCall, MockSdt};
use sidcard::test_support::{FixedPhotoDecoder, SharedSdt};
use sidcard::{DocumentVariant, Error, FieldKind, PhotoWarning, Poll, Session, Status};

#[test]
fn idle_then_card_across_two_cycles() {
    let mut mock = MockSdt::with_card(fixtures::national_id_chip());
    mock.app_status = Status::APP_IDLE;
    let shared = SharedSdt::new(mock);
    let mut session = Session::open(shared.handle()).unwrap();

    // First cycle: the reader reports nothing to read; benign.
    assert!(matches!(session.poll().unwrap(), Poll::Idle));
    assert!(!shared.calls().contains(&ApiCall::FindCard));

    // The card arrives; the next cycle reads it.
    shared.with_mock(|m| m.app_status = Status::new(0x00));
    match session.poll().unwrap() {
        Poll::Card(scan) => {
            assert_eq!(scan.record.variant(), DocumentVariant::NationalId);
            assert_eq!(scan.record.get(FieldKind::Name), Some("张伟"));
            assert_eq!(scan.record.get(FieldKind::Sex), Some("male"));
            assert_eq!(scan.record.get(FieldKind::Ethnicity), Some("Han"));
            assert_eq!(
                scan.record.get(FieldKind::IdNumber),
                Some("110101198512030011")
            );
            assert_eq!(
                scan.record.get(FieldKind::Authority),
                Some("北京市公安局东城分局")
            );
        }
        Poll::Idle => panic!("expected a card on the second cycle"),
    }

    // The cycle ran its steps in wire order.
    let calls = shared.calls();
    let find_at = calls.iter().position(|c| *c == ApiCall::FindCard).unwrap();
    let select_at = calls.iter().position(|c| *c == ApiCall::SelectCard).unwrap();
    let read_at = calls
        .iter()
        .position(|c| *c == ApiCall::ReadBaseMessage)
        .unwrap();
    assert!(find_at < select_at);
    assert!(select_at < read_at);
}

#[test]
fn foreign_resident_record_uses_variant_labels() {
    let mock = MockSdt::with_card(fixtures::foreign_resident_chip());
    let mut session = Session::open(Box::new(mock)).unwrap();

    match session.poll().unwrap() {
        Poll::Card(scan) => {
            assert_eq!(
                scan.record.variant(),
                DocumentVariant::ForeignPermanentResident
            );
            assert_eq!(scan.record.get(FieldKind::Name), Some("GARCIA MARIA"));
            assert_eq!(scan.record.get(FieldKind::ChineseName), Some("加西亚"));
            let rendered = scan.record.to_string();
            assert!(rendered.contains("permanent residence permit number: ESP765432109876"));
            assert!(rendered.contains("acceptance authority: 1100"));
        }
        Poll::Idle => panic!("expected a card"),
    }
}

#[test]
fn cross_border_record_round_trips_pass_fields() {
    let mock = MockSdt::with_card(fixtures::cross_border_chip());
    let mut session = Session::open(Box::new(mock)).unwrap();

    match session.poll().unwrap() {
        Poll::Card(scan) => {
            assert_eq!(
                scan.record.variant(),
                DocumentVariant::CrossBorderResident
            );
            assert_eq!(scan.record.get(FieldKind::PassNumber), Some("H01234567"));
            assert_eq!(scan.record.get(FieldKind::IssueCount), Some("01"));
        }
        Poll::Idle => panic!("expected a card"),
    }
}

#[test]
fn empty_chip_is_distinct_from_read_failure() {
    let mock = MockSdt::new(); // base status 0x90, zero-length chip
    let mut session = Session::open(Box::new(mock)).unwrap();
    assert!(matches!(session.poll(), Err(Error::EmptyMessage)));

    let mut mock = MockSdt::with_card(fixtures::national_id_chip());
    mock.base_status = Status::new(0x10);
    let mut session = Session::open(Box::new(mock)).unwrap();
    assert!(matches!(
        session.poll(),
        Err(Error::ReadFailed { status: 0x10 })
    ));
}

#[test]
fn portrait_decodes_alongside_the_record() {
    let mut mock = MockSdt::with_card(fixtures::national_id_chip());
    mock.photo_payload = vec![0x55; 800];
    let mut session = Session::builder(Box::new(mock))
        .photo_decoder(Box::new(FixedPhotoDecoder::ok(vec![0xAA; PORTRAIT_LEN])))
        .open()
        .unwrap();

    match session.poll().unwrap() {
        Poll::Card(scan) => {
            let portrait = scan.portrait.expect("photo segment present").unwrap();
            assert_eq!(portrait.len(), PORTRAIT_LEN);
        }
        Poll::Idle => panic!("expected a card"),
    }
}

#[test]
fn photo_trouble_never_fails_the_textual_record() {
    // Undersized decoder output: the warning is surfaced, the record kept.
    let mut mock = MockSdt::with_card(fixtures::national_id_chip());
    mock.photo_payload = vec![0x55; 800];
    let mut session = Session::builder(Box::new(mock))
        .photo_decoder(Box::new(FixedPhotoDecoder::ok(vec![0; 16])))
        .open()
        .unwrap();

    match session.poll().unwrap() {
        Poll::Card(scan) => {
            assert_eq!(scan.record.get(FieldKind::Name), Some("张伟"));
            match scan.portrait {
                Some(Err(PhotoWarning::SizeMismatch { expected, actual })) => {
                    assert_eq!(expected, PORTRAIT_LEN);
                    assert_eq!(actual, 16);
                }
                other => panic!("expected size mismatch warning, got {:?}", other),
            }
        }
        Poll::Idle => panic!("expected a card"),
    }

    // Vendor-side failure: same policy.
    let mut mock = MockSdt::with_card(fixtures::national_id_chip());
    mock.photo_payload = vec![0x55; 800];
    let mut session = Session::builder(Box::new(mock))
        .photo_decoder(Box::new(FixedPhotoDecoder::failing("corrupt stream")))
        .open()
        .unwrap();

    match session.poll().unwrap() {
        Poll::Card(scan) => {
            assert_eq!(scan.record.variant(), DocumentVariant::NationalId);
            assert!(matches!(
                scan.portrait,
                Some(Err(PhotoWarning::DecodeFailed(_)))
            ));
        }
        Poll::Idle => panic!("expected a card"),
    }
}

#[test]
fn photo_segment_without_decoder_is_ignored() {
    let mut mock = MockSdt::with_card(fixtures::national_id_chip());
    mock.photo_payload = vec![0x55; 800];
    let mut session = Session::open(Box::new(mock)).unwrap();

    match session.poll().unwrap() {
        Poll::Card(scan) => assert!(scan.portrait.is_none()),
        Poll::Idle => panic!("expected a card"),
    }
}
