#[path = "../common/mod.rs"]
mod common;

use common::fixtures;

use sidcard::test_support::{chip_message, chip_with_marker, write_utf16le};
use sidcard::{DecodedRecord, FieldKind};

#[test]
fn national_id_full_record() {
    let record = DecodedRecord::decode(&chip_message(fixtures::national_id_chip()));

    assert_eq!(record.get(FieldKind::Name), Some("张伟"));
    assert_eq!(record.get(FieldKind::Sex), Some("male"));
    assert_eq!(record.get(FieldKind::Ethnicity), Some("Han"));
    assert_eq!(record.get(FieldKind::Birthday), Some("19851203"));
    assert_eq!(
        record.get(FieldKind::Address),
        Some("北京市东城区景山前街4号")
    );
    assert_eq!(record.get(FieldKind::IdNumber), Some("110101198512030011"));
    assert_eq!(
        record.get(FieldKind::Authority),
        Some("北京市公安局东城分局")
    );
    assert_eq!(record.get(FieldKind::IssueDay), Some("20150101"));
    assert_eq!(record.get(FieldKind::ExpiryDay), Some("20350101"));
}

#[test]
fn national_id_display_order_is_fixed() {
    let rendered = DecodedRecord::decode(&chip_message(fixtures::national_id_chip())).to_string();
    let labels: Vec<&str> = rendered
        .lines()
        .map(|line| line.split(':').next().unwrap())
        .collect();
    assert_eq!(
        labels,
        vec![
            "name",
            "sex",
            "ID number",
            "ethnicity",
            "validity start date",
            "validity end date",
            "birthday",
            "issuing authority",
            "address",
        ]
    );
}

#[test]
fn foreign_resident_display_order_is_fixed() {
    let rendered =
        DecodedRecord::decode(&chip_message(fixtures::foreign_resident_chip())).to_string();
    let labels: Vec<&str> = rendered
        .lines()
        .map(|line| line.split(':').next().unwrap())
        .collect();
    assert_eq!(
        labels,
        vec![
            "name",
            "sex",
            "permanent residence permit number",
            "ethnicity",
            "Chinese name",
            "issue date",
            "expiry date",
            "birthday",
            "card version",
            "acceptance authority",
            "reserved",
        ]
    );
}

#[test]
fn cross_border_display_order_is_fixed() {
    let rendered = DecodedRecord::decode(&chip_message(fixtures::cross_border_chip())).to_string();
    let labels: Vec<&str> = rendered
        .lines()
        .map(|line| line.split(':').next().unwrap())
        .collect();
    assert_eq!(
        labels,
        vec![
            "name",
            "sex",
            "birthday",
            "address",
            "ID number",
            "issuing authority",
            "validity start date",
            "validity end date",
            "pass number",
            "issue count",
        ]
    );
}

#[test]
fn sex_decodes_as_binary_field() {
    let mut buf = chip_with_marker([0, 0]);
    write_utf16le(&mut buf, 30, "1");
    assert_eq!(
        DecodedRecord::decode(&chip_message(buf)).get(FieldKind::Sex),
        Some("male")
    );

    let mut buf = chip_with_marker([0, 0]);
    write_utf16le(&mut buf, 30, "2");
    assert_eq!(
        DecodedRecord::decode(&chip_message(buf)).get(FieldKind::Sex),
        Some("female")
    );

    // Garbage parses as 0, which is not male.
    let mut buf = chip_with_marker([0, 0]);
    write_utf16le(&mut buf, 30, "x");
    assert_eq!(
        DecodedRecord::decode(&chip_message(buf)).get(FieldKind::Sex),
        Some("female")
    );
}

#[test]
fn ethnicity_codes_map_through_the_table() {
    for (code, name) in [("01", "Han"), ("10", "Korean"), ("97", "Other"), ("99", "")] {
        let mut buf = chip_with_marker([0, 0]);
        write_utf16le(&mut buf, 32, code);
        assert_eq!(
            DecodedRecord::decode(&chip_message(buf)).get(FieldKind::Ethnicity),
            Some(name),
            "code {}",
            code
        );
    }
}

#[test]
fn record_is_a_value_type() {
    // The record owns its strings; decoding twice from the same buffer
    // yields equal values.
    let chip = chip_message(fixtures::cross_border_chip());
    let a = DecodedRecord::decode(&chip);
    let b = DecodedRecord::decode(&chip);
    assert_eq!(a, b);
}
