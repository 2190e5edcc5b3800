use sifr_core::{classify, compose, decompose, Letter};
use std::thread;

#[test]
fn registry_and_table_are_shared_across_threads() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            thread::spawn(|| {
                for letter in Letter::ALL {
                    let (skeleton, marks) = decompose(letter);
                    assert_eq!(compose(skeleton, marks), Ok(letter));
                }
                (0..=u8::MAX).map(|byte| classify(byte).canonical as u32).sum::<u32>()
            })
        })
        .collect();

    let sums: Vec<u32> = handles
        .into_iter()
        .map(|handle| handle.join().expect("reader thread"))
        .collect();
    assert!(sums.windows(2).all(|pair| pair[0] == pair[1]));
}
