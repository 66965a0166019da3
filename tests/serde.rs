#![cfg(feature = "serde")]

use strand::Rope;

mod common;

use common::{medium, MIXED, SMALL};

#[test]
fn serde_round_trip() {
    for s in ["", SMALL, MIXED, &medium()] {
        let r = Rope::from(s);

        let json = serde_json::to_string(&r).unwrap();
        let back: Rope = serde_json::from_str(&json).unwrap();

        assert_eq!(r, back);
    }
}

#[test]
fn serializes_as_a_plain_string() {
    let r = Rope::from("snippet ").append("of text");

    assert_eq!("\"snippet of text\"", serde_json::to_string(&r).unwrap());
}

#[test]
fn deserializes_from_a_plain_string() {
    let r: Rope = serde_json::from_str("\"snippet of text\"").unwrap();

    r.assert_invariants();
    assert_eq!("snippet of text", r);
}
