//! Pascal string decoding across every toolbox capacity.

use mactypes::{
    pascal_from_string, resolve_legacy_encoding_with, string_from_pascal, BoundedByteBuffer,
    LegacyEncoding, MacTypesError, PascalStringDecoder, Str15, Str255, Str27, Str31, Str32,
    Str32Field, Str63,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn with_junk<const N: usize, const R: usize>(
    rng: &mut StdRng,
    payload: &[u8],
) -> BoundedByteBuffer<N, R> {
    let mut wire = vec![0u8; BoundedByteBuffer::<N, R>::WIRE_SIZE];
    rng.fill(&mut wire[..]);
    wire[0] = payload.len() as u8;
    wire[1..1 + payload.len()].copy_from_slice(payload);
    BoundedByteBuffer::from_wire(&wire).unwrap()
}

fn overlong<const N: usize, const R: usize>(length: u8) -> BoundedByteBuffer<N, R> {
    let mut wire = vec![b'a'; BoundedByteBuffer::<N, R>::WIRE_SIZE];
    wire[0] = length;
    BoundedByteBuffer::from_wire(&wire).unwrap()
}

// ---------------------------------------------------------------------------
// Length prefix
// ---------------------------------------------------------------------------

#[test]
fn str31_ignores_bytes_past_length() {
    let mut rng = StdRng::seed_from_u64(31);
    for _ in 0..32 {
        let buffer: Str31 = with_junk(&mut rng, b"Hello");
        assert_eq!(string_from_pascal(&buffer).as_deref(), Some("Hello"));
    }
}

#[test]
fn every_capacity_decodes_a_full_record() {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    let full = |n: usize| "x".repeat(n);

    let b: Str255 = with_junk(&mut rng, full(255).as_bytes());
    assert_eq!(string_from_pascal(&b), Some(full(255)));
    let b: Str63 = with_junk(&mut rng, full(63).as_bytes());
    assert_eq!(string_from_pascal(&b), Some(full(63)));
    let b: Str32 = with_junk(&mut rng, full(32).as_bytes());
    assert_eq!(string_from_pascal(&b), Some(full(32)));
    let b: Str31 = with_junk(&mut rng, full(31).as_bytes());
    assert_eq!(string_from_pascal(&b), Some(full(31)));
    let b: Str27 = with_junk(&mut rng, full(27).as_bytes());
    assert_eq!(string_from_pascal(&b), Some(full(27)));
    let b: Str15 = with_junk(&mut rng, full(15).as_bytes());
    assert_eq!(string_from_pascal(&b), Some(full(15)));
    let b: Str32Field = with_junk(&mut rng, full(32).as_bytes());
    assert_eq!(string_from_pascal(&b), Some(full(32)));
}

#[test]
fn length_past_capacity_is_rejected() {
    assert_eq!(string_from_pascal(&overlong::<63, 0>(64)), None);
    assert_eq!(string_from_pascal(&overlong::<32, 0>(33)), None);
    assert_eq!(string_from_pascal(&overlong::<31, 0>(32)), None);
    assert_eq!(string_from_pascal(&overlong::<27, 0>(28)), None);
    assert_eq!(string_from_pascal(&overlong::<15, 0>(255)), None);
    assert_eq!(string_from_pascal(&overlong::<32, 1>(33)), None);
}

#[test]
fn caller_maximum_below_capacity() {
    let buffer = Str255::from_payload(b"twelve chars").unwrap();
    let decoder = PascalStringDecoder::default().maximum_length(11);
    assert_eq!(
        decoder.try_decode(&buffer),
        Err(MacTypesError::InvalidLength {
            length: 12,
            maximum: 11
        })
    );
    assert_eq!(
        decoder.maximum_length(12).decode(&buffer).as_deref(),
        Some("twelve chars")
    );
}

// ---------------------------------------------------------------------------
// Encodings
// ---------------------------------------------------------------------------

#[test]
fn mac_roman_payload() {
    let buffer = Str31::from_payload(&[0x52, 0x8E, 0x73, 0x75, 0x6D, 0x8E]).unwrap();
    assert_eq!(string_from_pascal(&buffer).as_deref(), Some("Résumé"));
}

#[test]
fn undecodable_payload() {
    let decoder = PascalStringDecoder::with_label("iso-8859-3").unwrap();
    let buffer = Str15::from_payload(&[0x41, 0xA5]).unwrap();
    assert_eq!(
        decoder.try_decode(&buffer),
        Err(MacTypesError::UndecodableBytes {
            encoding: "ISO-8859-3"
        })
    );
}

#[test]
fn unresolvable_encoding() {
    assert_eq!(
        PascalStringDecoder::with_label("bogus").unwrap_err(),
        MacTypesError::EncodingUnavailable("bogus".to_string())
    );
}

#[test]
fn host_encoding_drives_decoding() {
    let encoding = resolve_legacy_encoding_with(|name| {
        (name == "LC_ALL").then(|| "bg_BG.UTF-8".to_string())
    });
    assert_eq!(encoding, LegacyEncoding::mac_cyrillic());

    let buffer: Str63 = pascal_from_string("Жук", encoding).unwrap();
    let decoder = PascalStringDecoder::new(encoding);
    assert_eq!(decoder.decode(&buffer).as_deref(), Some("Жук"));
    assert_ne!(string_from_pascal(&buffer).as_deref(), Some("Жук"));
}

// ---------------------------------------------------------------------------
// Encoding into records
// ---------------------------------------------------------------------------

#[test]
fn field_record_trailer_written_zero() {
    let buffer: Str32Field = pascal_from_string("Shared", LegacyEncoding::mac_roman()).unwrap();
    let wire = buffer.to_wire();
    assert_eq!(wire.len(), 34);
    assert_eq!(wire[0], 6);
    assert_eq!(wire[33], 0);
    assert_eq!(string_from_pascal(&buffer).as_deref(), Some("Shared"));
}

#[test]
fn raw_bytes_respect_maximum() {
    let decoder = PascalStringDecoder::default().maximum_length(31);
    assert_eq!(decoder.decode_bytes(b"\x02okjunk").as_deref(), Some("ok"));
    assert_eq!(decoder.decode_bytes(&[32; 40]), None);
}
