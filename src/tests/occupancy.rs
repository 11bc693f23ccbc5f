use crate::{
    gray::Gray,
    occupancy::{is_consistent, is_empty, is_full, occupied, vacant},
    position::Layout,
    traits::*,
    wrap::Wrap,
    GrayRb,
};

#[test]
fn full_only_one_lap_ahead() {
    for cap in [4, 8, 32] {
        let layout = Layout::new(cap).unwrap();
        let modulus = layout.modulus();
        for read in 0..modulus {
            for len in 0..modulus {
                let write = (read + len) % modulus;
                let (w, r) = (Gray::encode(write), Gray::encode(read));
                assert_eq!(is_full(&layout, w, r), len == cap, "read {}, write {}", read, write);
                assert_eq!(is_empty(r, w), len == 0, "read {}, write {}", read, write);
                assert_eq!(occupied(&layout, read, write), len);
                assert_eq!(is_consistent(&layout, read, write), len <= cap);
                if len <= cap {
                    assert_eq!(vacant(&layout, read, write), cap - len);
                }
            }
        }
    }
}

#[test]
fn plain_equality_is_not_full() {
    let layout = Layout::new(8).unwrap();
    let code = Gray::encode(5);
    assert!(!is_full(&layout, code, code));
    assert!(is_empty(code, code));
}

#[test]
fn producer_view_is_conservative() {
    let mut rb = GrayRb::<u8>::new(4).unwrap();
    let (mut prod, mut cons) = rb.split_ref();

    assert_eq!(prod.push_slice(&[1, 2, 3]), 3);
    assert_eq!(cons.try_pop(), Some(1));
    assert_eq!(cons.try_pop(), Some(2));
    // Producer still holds the consumer position it saw at start, so after this push it considers itself blocked.
    assert!(prod.push(4));

    // Blocked producer always takes the fresh consumer position before answering.
    assert!(!prod.is_full());
    assert_eq!(prod.vacant_len(), 2);
}

#[test]
fn consumer_sees_only_committed() {
    let mut rb = GrayRb::<u8>::new(8).unwrap();
    let (mut prod, mut cons) = rb.split_ref();

    assert!(cons.is_empty());
    assert!(prod.push(10));
    assert_eq!(cons.occupied_len(), 1);
    assert!(prod.push(20));
    assert_eq!(cons.write_index(), 2);
    assert_eq!(cons.pop_iter().sum::<u8>(), 30);
    assert!(cons.is_empty());
    assert_eq!(cons.occupied_len(), 0);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "inconsistent")]
fn consumer_rejects_position_beyond_one_lap() {
    let mut rb = GrayRb::<u8>::new(4).unwrap();
    let (_prod, cons) = rb.split_ref();

    cons.rb().write_relay().publish(Gray::encode(5));
    cons.is_empty();
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "inconsistent")]
fn producer_rejects_position_beyond_one_lap() {
    let mut rb = GrayRb::<u8>::new(4).unwrap();
    let (mut prod, _cons) = rb.split_ref();

    assert_eq!(prod.push_slice(&[1, 2, 3, 4]), 4);
    // Read counter 7 leaves write counter 4 five items ahead.
    prod.rb().read_relay().publish(Gray::encode(7));
    prod.is_full();
}

#[test]
fn drop_with_corrupted_positions_leaks_items() {
    let mut rb = GrayRb::<u8>::new(4).unwrap();
    {
        let (mut prod, _cons) = rb.split_ref();
        assert_eq!(prod.push_slice(&[1, 2]), 2);
    }
    rb.write_relay().publish(Gray::encode(7));
    drop(rb);
}
