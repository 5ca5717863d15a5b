//! Known transform/inverse pairs, validation failures and large-input round trips.

use bwt_rust::boundary::sequence_from_json;
use bwt_rust::{inverse, transform, Bwt, BwtError, ErrorKind, DEFAULT_TERMINATOR};
use serde_json::json;

#[test]
fn default_terminator_is_dollar() {
    assert_eq!(DEFAULT_TERMINATOR, '$');
}

#[test]
fn googol() {
    assert_eq!(transform("googol").unwrap(), "lo$oogg");
    assert_eq!(inverse("lo$oogg").unwrap(), "googol");
}

#[test]
fn acctg() {
    assert_eq!(transform("acctg").unwrap(), "g$actc");
    assert_eq!(inverse("g$actc").unwrap(), "acctg");
}

#[test]
fn empty_sequence() {
    assert_eq!(transform("").unwrap(), "$");
    assert_eq!(inverse("$").unwrap(), "");
}

#[test]
fn non_sequence_input_is_a_type_error() {
    let err = sequence_from_json(&json!(5))
        .and_then(|s| transform(&s))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Type);
}

#[test]
fn transform_rejects_terminator() {
    let err = transform("lo$oogg").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TerminatorPresent);
    assert_eq!(err.code(), 1);
}

#[test]
fn inverse_rejects_missing_terminator() {
    let err = inverse("googol").unwrap_err();
    assert_eq!(err, BwtError::TerminatorMissing);
    assert_eq!(err.code(), 2);
}

#[test]
fn inverse_rejects_duplicate_terminator() {
    let err = inverse("lo$oogg$").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TerminatorDuplicate);
    assert_eq!(err.code(), 3);
}

#[test]
fn more_known_pairs() {
    for (plain, coded) in [("ciao", "oi$ca"), ("itopinon", "np$ointoi"), ("banana", "annb$aa")] {
        assert_eq!(transform(plain).unwrap(), coded);
        assert_eq!(inverse(coded).unwrap(), plain);
    }
}

#[test]
fn long_biological_sequence_roundtrips() {
    // 约 20 kb，超过并行排序阈值
    let mut x: u32 = 42;
    let seq: Vec<u8> = (0..20_000)
        .map(|_| {
            x = x.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            b"ACGT"[(x >> 16) as usize % 4]
        })
        .collect();
    let codec = Bwt::for_bytes(b'$').unwrap();
    let t = codec.transform(&seq).unwrap();
    assert_eq!(t.len(), seq.len() + 1);
    assert_eq!(codec.inverse(&t).unwrap(), seq);
}

#[test]
fn concurrent_calls_are_independent() {
    let inputs = ["googol", "acctg", "banana", "", "mississippi"];
    let handles: Vec<_> = inputs
        .iter()
        .map(|&s| {
            std::thread::spawn(move || {
                let t = transform(s).unwrap();
                inverse(&t).unwrap()
            })
        })
        .collect();
    for (h, &s) in handles.into_iter().zip(&inputs) {
        assert_eq!(h.join().unwrap(), s);
    }
}
