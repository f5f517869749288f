use super::*;
use crate::{Base32Ext, CROCKFORD_ALPHABET, Error, InvalidIdReason, define_id};
use core::time::Duration;
use std::string::String;

const REFERENCE_BYTES: [u8; 10] = [0x4d, 0x88, 0xe1, 0x5b, 0x60, 0xf4, 0x86, 0xe4, 0x28, 0x41];
const REFERENCE_TEXT: &str = "9p4f2pv0yj3f8b21";

#[allow(clippy::cast_possible_truncation)]
const EPOCH_MILLIS: u64 = CUSTOM_EPOCH.as_millis() as u64;

define_id!(
    /// Full-width test layout on the UNIX epoch with an ascending alphabet.
    WideId,
    bytes: 16,
    time: 6 => Millis,
    tag: 2,
    entropy: 8 => Random,
    epoch: Duration::ZERO,
    alphabet: CROCKFORD_ALPHABET
);

#[test]
fn widths_match_layout_table() {
    assert_eq!((ShortId::SIZE, ShortId::TEXT_SIZE), (8, 13));
    assert_eq!((TickId::SIZE, TickId::TEXT_SIZE), (10, 16));
    assert_eq!((MonoId::SIZE, MonoId::TEXT_SIZE), (10, 16));
    assert_eq!((TaggedId::SIZE, TaggedId::TEXT_SIZE), (12, 20));
    assert_eq!((WideId::SIZE, WideId::TEXT_SIZE), (16, 26));
}

#[test]
fn order_prefix_depends_on_policy() {
    assert_eq!(ShortId::ORDER_BYTES, 4);
    assert_eq!(TickId::ORDER_BYTES, 4);
    assert_eq!(MonoId::ORDER_BYTES, 10);
    assert_eq!(TaggedId::ORDER_BYTES, 12);
}

#[test]
fn reference_vector_round_trips() {
    let id = TickId::from_array(REFERENCE_BYTES);
    assert_eq!(id.encode(), REFERENCE_TEXT);
    assert_eq!(id.to_string(), REFERENCE_TEXT);
    assert_eq!(id, REFERENCE_TEXT);
    assert_eq!(TickId::decode(REFERENCE_TEXT).unwrap(), id);
    assert_eq!(REFERENCE_TEXT.parse::<TickId>().unwrap(), id);
    assert_eq!(TickId::try_from(REFERENCE_TEXT).unwrap(), id);
    assert_eq!(String::from(id), REFERENCE_TEXT);

    assert_eq!(id.time(), 0x4d88_e15b);
    assert_eq!(id.entropy(), 0x60f4_86e4_2841);
    assert!(id.tag().is_empty());
}

#[test]
fn off_by_one_lengths_are_rejected() {
    for text in [&REFERENCE_TEXT[..15], "9p4f2pv0yj3f8b210"] {
        let err = TickId::decode(text).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidId(InvalidIdReason::Length {
                expected: 16,
                found: text.len()
            })
        );
    }
}

#[test]
fn slice_conversion_checks_length_only() {
    assert_eq!(
        TickId::try_from(&REFERENCE_BYTES[..]).unwrap(),
        TickId::from_array(REFERENCE_BYTES)
    );
    let err = TickId::try_from(&REFERENCE_BYTES[..3]).unwrap_err();
    assert_eq!(
        err.reason(),
        InvalidIdReason::ByteLength {
            expected: 10,
            found: 3
        }
    );
    // Any byte pattern of the right width is accepted.
    assert!(ShortId::from_slice(&[0xFF; 8]).is_ok());
}

#[test]
fn decode_rejects_set_padding_bits() {
    // 12 bytes leave 4 padding bits in the last symbol; 8 bytes leave 1.
    for text in ["zzzzzzzzzzzzzzzzzzzz", "zzzzzzzzzzzzzzzzzzzj", "00000000000000000001"] {
        assert_eq!(
            TaggedId::decode(text).unwrap_err().reason(),
            InvalidIdReason::NonCanonical,
            "{text}"
        );
    }
    assert_eq!(
        ShortId::decode("0000000000001").unwrap_err().reason(),
        InvalidIdReason::NonCanonical
    );
    assert!(TaggedId::decode("zzzzzzzzzzzzzzzzzzzh").is_ok());
    // 10 bytes fill every symbol exactly, so no text is non-canonical.
    assert!(TickId::decode("zzzzzzzzzzzzzzzz").is_ok());
}

#[test]
fn nil_is_all_zero_and_default() {
    assert!(TaggedId::NIL.is_nil());
    assert_eq!(TaggedId::default(), TaggedId::NIL);
    assert_eq!(TickId::NIL.encode(), "0000000000000000");
    assert_eq!(ShortId::decode("0000000000000").unwrap(), ShortId::NIL);
    assert!(!TickId::from_array(REFERENCE_BYTES).is_nil());
}

#[test]
fn fields_hold_their_maximums() {
    let id = TaggedId::from_components(TaggedId::max_time(), u32::MAX, TaggedId::max_entropy());
    assert_eq!(id.to_array(), [0xFF; 12]);
    assert_eq!(id.encode(), "zzzzzzzzzzzzzzzzzzzh");

    let id = MonoId::from_components(MonoId::max_time(), 0, MonoId::max_entropy());
    assert_eq!(id.time(), 0xFFFF_FFFF_FFFF);
    assert_eq!(id.entropy(), u64::from(u32::MAX));

    let id = WideId::from_components(1, 0xBEEF, u64::MAX);
    assert_eq!(id.time(), 1);
    assert_eq!(id.tag(), &[0xBE, 0xEF]);
    assert_eq!(id.entropy(), u64::MAX);
}

#[test]
fn oversized_components_truncate_to_field_width() {
    let id = ShortId::from_components(0x1_0000_0002, 0xAB, 0x1_0000_0003);
    assert_eq!(id.time(), 2);
    assert_eq!(id.entropy(), 3);

    let id = WideId::from_components(1, 0x00AB_CDEF, 1);
    assert_eq!(id.tag(), &[0xCD, 0xEF]);
}

#[test]
fn tagged_layout_places_fields_in_order() {
    let id = TaggedId::from_components(1, 0xDEAD_BEEF, 2);
    assert_eq!(
        id.to_array(),
        [0, 0, 0, 1, 0xDE, 0xAD, 0xBE, 0xEF, 0, 0, 0, 2]
    );
}

#[test]
fn combined_joins_time_and_entropy() {
    let id = MonoId::from_components(1, 0, 2);
    assert_eq!(id.to_array(), [0, 0, 0, 0, 0, 1, 0, 0, 0, 2]);
    assert_eq!(id.combined(), (1_u128 << 32) | 2);

    let next = MonoId::from_components(2, 0, 1);
    assert!(next.combined() > id.combined());
}

#[test]
fn ticks_are_counted_from_the_epoch() {
    assert_eq!(TickId::ticks_at(EPOCH_MILLIS), 0);
    assert_eq!(TickId::ticks_at(EPOCH_MILLIS + 5_999), 5);
    assert_eq!(MonoId::ticks_at(EPOCH_MILLIS + 5_999), 5_999);
    assert_eq!(WideId::ticks_at(42), 42);
}

#[test]
fn times_before_the_epoch_clamp_to_zero() {
    assert_eq!(TickId::ticks_at(0), 0);
    assert_eq!(TickId::ticks_at(EPOCH_MILLIS - 1), 0);
}

#[test]
fn datetime_truncates_to_resolution() {
    let millis = EPOCH_MILLIS + 12_345;
    let id = TickId::from_components(TickId::ticks_at(millis), 0, 1);
    assert_eq!(id.unix_millis(), EPOCH_MILLIS + 12_000);
    assert_eq!(
        id.datetime(),
        std::time::UNIX_EPOCH + Duration::from_millis(EPOCH_MILLIS + 12_000)
    );

    let id = MonoId::from_components(MonoId::ticks_at(millis), 0, 1);
    assert_eq!(id.unix_millis(), millis);
}

#[test]
fn unix_millis_of_clamps_pre_epoch_times() {
    let before = std::time::UNIX_EPOCH - Duration::from_secs(1);
    assert_eq!(unix_millis_of(before), 0);
    let after = std::time::UNIX_EPOCH + Duration::from_millis(1_500);
    assert_eq!(unix_millis_of(after), 1_500);
}

#[test]
fn custom_alphabet_applies_to_text_form() {
    let id = WideId::from_components(0, 0, 0xFF);
    let text = id.encode();
    assert!(text.as_str().bytes().all(|b| !b.is_ascii_lowercase()));
    assert_eq!(WideId::decode(text.as_str()).unwrap(), id);
    assert!(WideId::decode(text.as_str().to_ascii_lowercase()).is_err());
}

#[test]
fn debug_shows_fields() {
    let id = TaggedId::from_components(7, 0x0102_0304, 9);
    let debug = format!("{id:?}");
    assert!(debug.starts_with("TaggedId"));
    assert!(debug.contains("time: 7"));
    assert!(debug.contains("entropy: 9"));
    assert!(debug.contains(&id.to_string()));
}

#[test]
fn byte_order_is_total_order() {
    let a = MonoId::from_components(1, 0, u64::from(u32::MAX));
    let b = MonoId::from_components(2, 0, 1);
    assert!(a < b);
    assert!(a.as_bytes() < b.as_bytes());
}
