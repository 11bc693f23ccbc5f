use crate::{reset, traits::*, GrayRb};
use core::cell::Cell;

#[test]
fn reset_both_ends() {
    let mut rb = GrayRb::<u8>::new(4).unwrap();
    let (mut prod, mut cons) = rb.split_ref();

    assert_eq!(prod.push_slice(&[1, 2, 3, 4]), 4);
    assert_eq!(cons.try_pop(), Some(1));
    assert!(prod.push(5));
    assert!(prod.is_full());

    reset(&mut prod, &mut cons);

    assert!(cons.is_empty());
    assert!(!prod.is_full());
    assert_eq!((prod.read_index(), prod.write_index()), (0, 0));
    assert_eq!((cons.read_index(), cons.write_index()), (0, 0));

    assert!(prod.push(42));
    assert_eq!(cons.try_pop(), Some(42));
    assert_eq!(cons.try_pop(), None);
}

#[test]
fn reset_after_many_laps() {
    let mut rb = GrayRb::<usize>::new(8).unwrap();
    let (mut prod, mut cons) = rb.split_ref();

    for i in 0..37 {
        assert!(prod.push(i));
        if i % 3 != 0 || cons.occupied_len() > 4 {
            assert!(cons.try_pop().is_some());
        }
    }
    reset(&mut prod, &mut cons);
    assert!(cons.is_empty());

    assert_eq!(prod.push_iter(100..200), 8);
    assert!(prod.is_full());
    assert!(cons.pop_iter().eq(100..108usize));
}

#[test]
fn reset_unsplit() {
    let mut rb = GrayRb::<u8>::new(4).unwrap();
    {
        let (mut prod, _) = rb.split_ref();
        assert_eq!(prod.push_slice(&[1, 2, 3]), 3);
    }
    rb.reset();
    let (mut prod, mut cons) = rb.split_ref();
    assert!(cons.is_empty());
    assert_eq!(prod.push_slice(&[7, 8, 9, 10]), 4);
    assert_eq!(cons.try_pop(), Some(7));
}

#[test]
fn reset_drops_items() {
    struct Counted<'a>(&'a Cell<usize>);
    impl Drop for Counted<'_> {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    let drops = Cell::new(0);
    let mut rb = GrayRb::<Counted>::new(4).unwrap();
    let (mut prod, mut cons) = rb.split_ref();
    for _ in 0..3 {
        assert!(prod.push(Counted(&drops)));
    }
    reset(&mut prod, &mut cons);
    assert_eq!(drops.get(), 3);
}

#[test]
fn reset_each_side() {
    let mut rb = GrayRb::<u8>::new(4).unwrap();
    let (mut prod, mut cons) = rb.split_ref();

    assert_eq!(prod.push_slice(&[1, 2, 3]), 3);
    assert_eq!(cons.try_pop(), Some(1));

    unsafe {
        cons.reset();
        prod.reset();
    }

    assert!(cons.is_empty());
    assert!(!prod.is_full());
    assert_eq!(prod.push_slice(&[4, 5, 6, 7]), 4);
    assert!(prod.is_full());
    assert!(cons.pop_iter().eq([4u8, 5, 6, 7]));
}

#[test]
#[should_panic]
fn reset_foreign_ends() {
    let mut a = GrayRb::<u8>::new(4).unwrap();
    let mut b = GrayRb::<u8>::new(4).unwrap();
    let (mut prod, _) = a.split_ref();
    let (_, mut cons) = b.split_ref();
    reset(&mut prod, &mut cons);
}
