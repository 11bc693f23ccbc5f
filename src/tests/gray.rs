use crate::{
    gray::{decode, encode, Gray},
    position::{Layout, Position},
};
use std::collections::BTreeSet;

const CAPACITIES: [usize; 6] = [4, 8, 16, 64, 256, 1024];

#[test]
fn known_codes() {
    let codes = [0b000, 0b001, 0b011, 0b010, 0b110, 0b111, 0b101, 0b100];
    for (value, code) in codes.iter().enumerate() {
        assert_eq!(encode(value), *code);
        assert_eq!(decode(*code), value);
    }
}

#[test]
fn decode_inverts_encode() {
    for value in (0..4096).chain([usize::MAX, usize::MAX - 1, usize::MAX / 2, 1 << (usize::BITS - 1)]) {
        assert_eq!(decode(encode(value)), value);
        assert_eq!(Gray::encode(value).decode(), value);
    }
}

#[test]
fn single_bit_change_with_wrap() {
    for cap in CAPACITIES {
        let layout = Layout::new(cap).unwrap();
        let modulus = layout.modulus();
        for value in 0..modulus {
            let next = (value + 1) % modulus;
            let diff = encode(value) ^ encode(next);
            assert_eq!(diff.count_ones(), 1, "capacity {}, {} -> {}", cap, value, next);
        }
    }
}

#[test]
fn injective_within_counter_range() {
    for cap in CAPACITIES {
        let layout = Layout::new(cap).unwrap();
        let codes = (0..layout.modulus()).map(encode).collect::<BTreeSet<_>>();
        assert_eq!(codes.len(), layout.modulus());
        assert!(codes.iter().all(|code| *code <= layout.counter_mask()));
    }
}

#[test]
fn one_lap_ahead_flips_two_top_bits() {
    for cap in CAPACITIES {
        let layout = Layout::new(cap).unwrap();
        for value in 0..layout.modulus() {
            let ahead = (value + cap) % layout.modulus();
            assert_eq!(Gray::encode(ahead), Gray::encode(value).flip(layout.full_mask()));
        }
    }
}

#[test]
fn position_wraps() {
    let layout = Layout::new(4).unwrap();
    let mut pos = Position::new(layout);
    let mut wrap_bits = [false; 8];
    for (step, wrap_bit) in wrap_bits.iter_mut().enumerate() {
        assert_eq!(pos.value(), step);
        assert_eq!(pos.index(), step % 4);
        *wrap_bit = pos.wrap_bit();
        pos.advance();
    }
    assert_eq!(wrap_bits, [false, false, false, false, true, true, true, true]);
    assert_eq!(pos.value(), 0);
    assert_eq!(pos.gray(), Gray::ZERO);
    assert_eq!(Position::with_value(layout, 13).value(), 5);
}
