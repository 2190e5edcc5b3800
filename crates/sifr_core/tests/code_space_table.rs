use sifr_core::table::codes::{
    SIFR_CONTROL_ESCAPE, SIFR_DIGIT_ARABIC_THREE, SIFR_DIGIT_ARABIC_ZERO, SIFR_LETTER_KAF,
    SIFR_LETTER_LAM,
};
use sifr_core::{
    band_of, bands, canonical, category, classify, decode, digit_value, is_reserved, table_rows,
    Category, Classification, Control, Digit, Fold, Letter, Symbol, TableError,
};

fn expected_category(byte: u8) -> Category {
    match byte {
        0x00..=0x1F | 0x7F => Category::Control,
        0x20..=0x7E => Category::SharedText,
        0x80..=0xA3 => Category::ArabicLetter,
        0xB0..=0xB9 => Category::ArabicDigit,
        0xBA..=0xBC => Category::ArabicPunctuation,
        0xC0..=0xD1 => Category::DiacriticMark,
        0xE0..=0xE3 => Category::Ligature,
        0xF0..=0xFF => Category::Extended,
        _ => Category::Reserved,
    }
}

#[test]
fn every_byte_has_the_documented_category() {
    for byte in 0..=u8::MAX {
        assert_eq!(category(byte), expected_category(byte), "byte 0x{byte:02X}");
    }
}

#[test]
fn every_byte_lies_in_exactly_one_band() {
    for byte in 0..=u8::MAX {
        let holders: Vec<_> = bands().iter().filter(|band| band.contains(byte)).collect();
        assert_eq!(holders.len(), 1, "byte 0x{byte:02X}");
        assert_eq!(holders[0], band_of(byte));
        assert_eq!(holders[0].category, category(byte));
    }
}

#[test]
fn canonical_values_follow_band_folds() {
    for byte in 0..=u8::MAX {
        let expected = match expected_category(byte) {
            Category::Control if byte == 0x7F => 0x7F,
            Category::Control => 0x00,
            Category::SharedText => 0x20,
            Category::Reserved | Category::Extended => 0x00,
            _ => byte,
        };
        assert_eq!(canonical(byte), expected, "byte 0x{byte:02X}");
    }
}

#[test]
fn escape_folds_to_canonical_control_zero() {
    assert_eq!(
        classify(SIFR_CONTROL_ESCAPE),
        Classification {
            category: Category::Control,
            canonical: 0x00,
        }
    );
    assert_eq!(decode(SIFR_CONTROL_ESCAPE), Symbol::Control(Control::Escape));
}

#[test]
fn digit_three_classifies_and_values() {
    assert_eq!(
        classify(SIFR_DIGIT_ARABIC_THREE),
        Classification {
            category: Category::ArabicDigit,
            canonical: 0xB3,
        }
    );
    assert_eq!(digit_value(SIFR_DIGIT_ARABIC_THREE), Ok(3));
    assert_eq!(decode(0xB3), Symbol::Digit(Digit::Three));
}

#[test]
fn digit_value_round_trips_and_rejects_everything_else() {
    for value in 0..=9u8 {
        assert_eq!(digit_value(SIFR_DIGIT_ARABIC_ZERO + value), Ok(value));
    }
    for byte in (0..=u8::MAX).filter(|byte| !(0xB0..=0xB9).contains(byte)) {
        assert_eq!(digit_value(byte), Err(TableError::NotADigit(byte)));
    }
}

#[test]
fn lam_is_a_letter_sharing_a_skeleton_with_kaf() {
    assert_eq!(
        classify(SIFR_LETTER_LAM),
        Classification {
            category: Category::ArabicLetter,
            canonical: SIFR_LETTER_LAM,
        }
    );
    assert_eq!(decode(SIFR_LETTER_LAM), Symbol::Letter(Letter::Lam));
    assert_eq!(
        sifr_core::skeleton_of_byte(SIFR_LETTER_LAM),
        sifr_core::skeleton_of_byte(SIFR_LETTER_KAF)
    );
}

#[test]
fn reserved_set_is_stable() {
    let reserved = |byte: u8| {
        matches!(byte, 0xA4..=0xAF | 0xBD..=0xBF | 0xD2..=0xDF | 0xE4..=0xEF | 0xF0..=0xFF)
    };
    for byte in 0..=u8::MAX {
        assert_eq!(is_reserved(byte), reserved(byte), "byte 0x{byte:02X}");
    }
}

#[test]
fn delete_resolves_to_control_not_shared_text() {
    assert_eq!(category(0x7F), Category::Control);
    assert_eq!(band_of(0x7F).fold, Fold::Identity);
    assert_eq!(decode(0x7F), Symbol::Control(Control::Delete));
}

#[test]
fn table_dump_serializes_every_row() {
    let rows = table_rows();
    assert_eq!(rows.len(), 256);

    let json = serde_json::to_value(&rows).expect("rows serialize");
    assert_eq!(json[0x96]["category"], "arabic_letter");
    assert_eq!(json[0x96]["symbol"]["value"], "lam");
    assert_eq!(json[0x41]["canonical"], 0x20);
    assert_eq!(json[0xF5]["symbol"]["kind"], "extended");
}

#[test]
fn dumped_symbols_read_back_and_relabelled_ones_do_not() {
    let json = serde_json::to_value(table_rows()).expect("rows serialize");
    let rows = json.as_array().expect("rows are an array");
    for (byte, row) in rows.iter().enumerate() {
        let symbol: Symbol =
            serde_json::from_value(row["symbol"].clone()).expect("dumped symbol reads back");
        assert_eq!(symbol, decode(byte as u8));
    }

    let relabelled = serde_json::json!({ "kind": "shared_text", "value": 150 });
    let err = serde_json::from_value::<Symbol>(relabelled)
        .expect_err("lam is not shared text");
    assert!(err.to_string().contains("0x96"));
}
