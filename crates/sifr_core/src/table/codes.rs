//! Named byte slots of the SIFR code space.
//!
//! These values are the wire contract: anything persisting or transmitting
//! SIFR text must preserve them bit-exact.

// Control / logic (0x00–0x1F, 0x7F)
pub const SIFR_CONTROL_NULL: u8 = 0x00;
pub const SIFR_CONTROL_START_OF_HEADING: u8 = 0x01;
pub const SIFR_CONTROL_START_OF_TEXT: u8 = 0x02;
pub const SIFR_CONTROL_END_OF_TEXT: u8 = 0x03;
pub const SIFR_CONTROL_END_OF_TRANSMISSION: u8 = 0x04;
pub const SIFR_CONTROL_ENQUIRY: u8 = 0x05;
pub const SIFR_CONTROL_ACKNOWLEDGE: u8 = 0x06;
pub const SIFR_CONTROL_BELL: u8 = 0x07;
pub const SIFR_CONTROL_BACKSPACE: u8 = 0x08;
pub const SIFR_CONTROL_HORIZONTAL_TAB: u8 = 0x09;
pub const SIFR_CONTROL_LINE_FEED: u8 = 0x0A;
pub const SIFR_CONTROL_VERTICAL_TAB: u8 = 0x0B;
pub const SIFR_CONTROL_FORM_FEED: u8 = 0x0C;
pub const SIFR_CONTROL_CARRIAGE_RETURN: u8 = 0x0D;
pub const SIFR_CONTROL_SHIFT_OUT: u8 = 0x0E;
pub const SIFR_CONTROL_SHIFT_IN: u8 = 0x0F;
pub const SIFR_CONTROL_DATA_LINK_ESCAPE: u8 = 0x10;
pub const SIFR_CONTROL_DEVICE_CONTROL_1: u8 = 0x11;
pub const SIFR_CONTROL_DEVICE_CONTROL_2: u8 = 0x12;
pub const SIFR_CONTROL_DEVICE_CONTROL_3: u8 = 0x13;
pub const SIFR_CONTROL_DEVICE_CONTROL_4: u8 = 0x14;
pub const SIFR_CONTROL_NEGATIVE_ACKNOWLEDGE: u8 = 0x15;
pub const SIFR_CONTROL_SYNCHRONOUS_IDLE: u8 = 0x16;
pub const SIFR_CONTROL_END_OF_TRANSMISSION_BLOCK: u8 = 0x17;
pub const SIFR_CONTROL_CANCEL: u8 = 0x18;
pub const SIFR_CONTROL_END_OF_MEDIUM: u8 = 0x19;
pub const SIFR_CONTROL_SUBSTITUTE: u8 = 0x1A;
pub const SIFR_CONTROL_ESCAPE: u8 = 0x1B;
pub const SIFR_CONTROL_FILE_SEPARATOR: u8 = 0x1C;
pub const SIFR_CONTROL_GROUP_SEPARATOR: u8 = 0x1D;
pub const SIFR_CONTROL_RECORD_SEPARATOR: u8 = 0x1E;
pub const SIFR_CONTROL_UNIT_SEPARATOR: u8 = 0x1F;
pub const SIFR_CONTROL_DELETE: u8 = 0x7F;

// Shared text (0x20–0x7E), folded to a single representative.
pub const SIFR_SHARED_TEXT_START: u8 = 0x20;
pub const SIFR_SHARED_TEXT_END: u8 = 0x7E;

// Arabic core letters (0x80–0xA3)
pub const SIFR_LETTER_ALIF: u8 = 0x80;
pub const SIFR_LETTER_BA: u8 = 0x81;
pub const SIFR_LETTER_TA: u8 = 0x82;
pub const SIFR_LETTER_THA: u8 = 0x83;
pub const SIFR_LETTER_JEEM: u8 = 0x84;
pub const SIFR_LETTER_HA: u8 = 0x85;
pub const SIFR_LETTER_KHA: u8 = 0x86;
pub const SIFR_LETTER_DAL: u8 = 0x87;
pub const SIFR_LETTER_THAL: u8 = 0x88;
pub const SIFR_LETTER_RA: u8 = 0x89;
pub const SIFR_LETTER_ZAY: u8 = 0x8A;
pub const SIFR_LETTER_SEEN: u8 = 0x8B;
pub const SIFR_LETTER_SHEEN: u8 = 0x8C;
pub const SIFR_LETTER_SAD: u8 = 0x8D;
pub const SIFR_LETTER_DAD: u8 = 0x8E;
pub const SIFR_LETTER_TTA: u8 = 0x8F;
pub const SIFR_LETTER_ZZA: u8 = 0x90;
pub const SIFR_LETTER_AIN: u8 = 0x91;
pub const SIFR_LETTER_GHAIN: u8 = 0x92;
pub const SIFR_LETTER_FA: u8 = 0x93;
pub const SIFR_LETTER_QAF: u8 = 0x94;
pub const SIFR_LETTER_KAF: u8 = 0x95;
pub const SIFR_LETTER_LAM: u8 = 0x96;
pub const SIFR_LETTER_MEEM: u8 = 0x97;
pub const SIFR_LETTER_NOON: u8 = 0x98;
pub const SIFR_LETTER_HEH: u8 = 0x99;
pub const SIFR_LETTER_WAW: u8 = 0x9A;
pub const SIFR_LETTER_YA: u8 = 0x9B;
pub const SIFR_LETTER_HAMZA: u8 = 0x9C;
pub const SIFR_LETTER_TAMARBUTA: u8 = 0x9D;
pub const SIFR_LETTER_ALIF_MADDA: u8 = 0x9E;
pub const SIFR_LETTER_ALIF_HAMZA_ABOVE: u8 = 0x9F;
pub const SIFR_LETTER_ALIF_HAMZA_BELOW: u8 = 0xA0;
pub const SIFR_LETTER_YA_HAMZA: u8 = 0xA1;
pub const SIFR_LETTER_WAW_HAMZA: u8 = 0xA2;
pub const SIFR_LETTER_ALEF_MAQSURA: u8 = 0xA3;

// Arabic digits (0xB0–0xB9)
pub const SIFR_DIGIT_ARABIC_ZERO: u8 = 0xB0;
pub const SIFR_DIGIT_ARABIC_ONE: u8 = 0xB1;
pub const SIFR_DIGIT_ARABIC_TWO: u8 = 0xB2;
pub const SIFR_DIGIT_ARABIC_THREE: u8 = 0xB3;
pub const SIFR_DIGIT_ARABIC_FOUR: u8 = 0xB4;
pub const SIFR_DIGIT_ARABIC_FIVE: u8 = 0xB5;
pub const SIFR_DIGIT_ARABIC_SIX: u8 = 0xB6;
pub const SIFR_DIGIT_ARABIC_SEVEN: u8 = 0xB7;
pub const SIFR_DIGIT_ARABIC_EIGHT: u8 = 0xB8;
pub const SIFR_DIGIT_ARABIC_NINE: u8 = 0xB9;

// Arabic punctuation (0xBA–0xBC)
pub const SIFR_PUNCTUATION_ARABIC_COMMA: u8 = 0xBA;
pub const SIFR_PUNCTUATION_ARABIC_SEMICOLON: u8 = 0xBB;
pub const SIFR_PUNCTUATION_ARABIC_QUESTION_MARK: u8 = 0xBC;

// Harakat / marks (0xC0–0xD1)
pub const SIFR_MARK_FATHA: u8 = 0xC0;
pub const SIFR_MARK_TANWEEN_FATHA: u8 = 0xC1;
pub const SIFR_MARK_DAMMA: u8 = 0xC2;
pub const SIFR_MARK_TANWEEN_DAMMA: u8 = 0xC3;
pub const SIFR_MARK_KASRA: u8 = 0xC4;
pub const SIFR_MARK_TANWEEN_KASRA: u8 = 0xC5;
pub const SIFR_MARK_SUKUN: u8 = 0xC6;
pub const SIFR_MARK_SHADDA: u8 = 0xC7;
pub const SIFR_MARK_DAGGER_ALIF: u8 = 0xC8;
pub const SIFR_MARK_TATWEEL: u8 = 0xC9;
pub const SIFR_MARK_MADDAH_ABOVE: u8 = 0xCA;
pub const SIFR_MARK_HAMZA_ABOVE_SIGN: u8 = 0xCB;
pub const SIFR_MARK_HAMZA_BELOW_SIGN: u8 = 0xCC;
pub const SIFR_MARK_SHADDA_FATHA: u8 = 0xCD;
pub const SIFR_MARK_SHADDA_DAMMA: u8 = 0xCE;
pub const SIFR_MARK_SHADDA_KASRA: u8 = 0xCF;
pub const SIFR_MARK_WASLA: u8 = 0xD0;
pub const SIFR_MARK_SUPERALIF: u8 = 0xD1;

// Ligatures (0xE0–0xE3)
pub const SIFR_LIGATURE_LA: u8 = 0xE0;
pub const SIFR_LIGATURE_LA_HAMZA_ABOVE: u8 = 0xE1;
pub const SIFR_LIGATURE_LA_MADDA: u8 = 0xE2;
pub const SIFR_LIGATURE_LA_HAMZA_BELOW: u8 = 0xE3;

// Extended / future (0xF0–0xFF). No meaning is assigned in table version 1.
pub const SIFR_EXTENDED_START: u8 = 0xF0;
pub const SIFR_EXTENDED_END: u8 = 0xFF;

/// Folded value shared by every control code except Delete.
pub const SIFR_CONTROL_CANONICAL: u8 = 0x00;
/// Folded value shared by every byte of the shared-text band.
pub const SIFR_SHARED_TEXT_CANONICAL: u8 = 0x20;
/// Folded value of reserved and extended slots.
pub const SIFR_UNASSIGNED_CANONICAL: u8 = 0x00;
