use grayring::{traits::*, GrayRb};

fn main() {
    let rb = GrayRb::<i32>::new(4).unwrap();
    let (mut prod, mut cons) = rb.split();

    for i in 0..4 {
        prod.try_push(i).unwrap();
    }
    assert!(prod.is_full());
    assert_eq!(prod.try_push(4), Err(4));

    assert_eq!(cons.try_pop().unwrap(), 0);

    prod.try_push(4).unwrap();

    for i in 1..5 {
        assert_eq!(cons.try_pop().unwrap(), i);
    }
    assert!(cons.is_empty());
    assert_eq!(cons.try_pop(), None);
}
