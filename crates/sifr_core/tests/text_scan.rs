use sifr_core::text::{category_counts, decode_assigned, first_unassigned, fold, fold_eq, symbols};
use sifr_core::{Category, Digit, Letter, Symbol, TableError};

// "سلام 3" followed by a line feed.
const SAMPLE: &[u8] = &[0x8B, 0x96, 0x80, 0x97, 0x20, 0xB3, 0x0A];

#[test]
fn sample_decodes_symbol_by_symbol() {
    let decoded: Vec<_> = symbols(SAMPLE).collect();
    assert_eq!(decoded.len(), SAMPLE.len());
    assert_eq!(decoded[0], (0, Symbol::Letter(Letter::Seen)));
    assert_eq!(decoded[1], (1, Symbol::Letter(Letter::Lam)));
    assert_eq!(decoded[5], (5, Symbol::Digit(Digit::Three)));
    assert_eq!(decoded[4].1.category(), Category::SharedText);
}

#[test]
fn folding_collapses_shared_text_and_controls() {
    assert!(fold_eq(b"ab\t", b"xy\n"));
    assert!(!fold_eq(&[0x80], &[0x81]));
    assert_eq!(fold(&[0x41, 0x1B, 0x7F, 0xF3]), vec![0x20, 0x00, 0x7F, 0x00]);
}

#[test]
fn strict_decoding_stops_at_the_first_unassigned_byte() {
    assert_eq!(first_unassigned(SAMPLE), None);
    assert_eq!(decode_assigned(SAMPLE).expect("sample is assigned").len(), 7);

    let tainted = [0x80, 0xA5, 0xF0];
    assert_eq!(first_unassigned(&tainted), Some(1));
    assert_eq!(
        decode_assigned(&tainted),
        Err(TableError::UnassignedSlot(0xA5))
    );
}

#[test]
fn category_counts_cover_every_byte() {
    let counts = category_counts(SAMPLE);
    assert_eq!(counts.get(&Category::ArabicLetter), Some(&4));
    assert_eq!(counts.get(&Category::ArabicDigit), Some(&1));
    assert_eq!(counts.values().sum::<usize>(), SAMPLE.len());
}
