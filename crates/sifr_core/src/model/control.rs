//! Control band symbols.

use crate::table::codes::*;
use serde::{Deserialize, Serialize};

/// Control / logic code. Discriminants are the raw SIFR bytes.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Control {
    Null = SIFR_CONTROL_NULL,
    StartOfHeading = SIFR_CONTROL_START_OF_HEADING,
    StartOfText = SIFR_CONTROL_START_OF_TEXT,
    EndOfText = SIFR_CONTROL_END_OF_TEXT,
    EndOfTransmission = SIFR_CONTROL_END_OF_TRANSMISSION,
    Enquiry = SIFR_CONTROL_ENQUIRY,
    Acknowledge = SIFR_CONTROL_ACKNOWLEDGE,
    Bell = SIFR_CONTROL_BELL,
    Backspace = SIFR_CONTROL_BACKSPACE,
    HorizontalTab = SIFR_CONTROL_HORIZONTAL_TAB,
    LineFeed = SIFR_CONTROL_LINE_FEED,
    VerticalTab = SIFR_CONTROL_VERTICAL_TAB,
    FormFeed = SIFR_CONTROL_FORM_FEED,
    CarriageReturn = SIFR_CONTROL_CARRIAGE_RETURN,
    ShiftOut = SIFR_CONTROL_SHIFT_OUT,
    ShiftIn = SIFR_CONTROL_SHIFT_IN,
    DataLinkEscape = SIFR_CONTROL_DATA_LINK_ESCAPE,
    DeviceControl1 = SIFR_CONTROL_DEVICE_CONTROL_1,
    DeviceControl2 = SIFR_CONTROL_DEVICE_CONTROL_2,
    DeviceControl3 = SIFR_CONTROL_DEVICE_CONTROL_3,
    DeviceControl4 = SIFR_CONTROL_DEVICE_CONTROL_4,
    NegativeAcknowledge = SIFR_CONTROL_NEGATIVE_ACKNOWLEDGE,
    SynchronousIdle = SIFR_CONTROL_SYNCHRONOUS_IDLE,
    EndOfTransmissionBlock = SIFR_CONTROL_END_OF_TRANSMISSION_BLOCK,
    Cancel = SIFR_CONTROL_CANCEL,
    EndOfMedium = SIFR_CONTROL_END_OF_MEDIUM,
    Substitute = SIFR_CONTROL_SUBSTITUTE,
    Escape = SIFR_CONTROL_ESCAPE,
    FileSeparator = SIFR_CONTROL_FILE_SEPARATOR,
    GroupSeparator = SIFR_CONTROL_GROUP_SEPARATOR,
    RecordSeparator = SIFR_CONTROL_RECORD_SEPARATOR,
    UnitSeparator = SIFR_CONTROL_UNIT_SEPARATOR,
    Delete = SIFR_CONTROL_DELETE,
}

impl Control {
    /// C0 codes in byte order; Delete is listed last.
    pub const ALL: [Control; 33] = [
        Self::Null,
        Self::StartOfHeading,
        Self::StartOfText,
        Self::EndOfText,
        Self::EndOfTransmission,
        Self::Enquiry,
        Self::Acknowledge,
        Self::Bell,
        Self::Backspace,
        Self::HorizontalTab,
        Self::LineFeed,
        Self::VerticalTab,
        Self::FormFeed,
        Self::CarriageReturn,
        Self::ShiftOut,
        Self::ShiftIn,
        Self::DataLinkEscape,
        Self::DeviceControl1,
        Self::DeviceControl2,
        Self::DeviceControl3,
        Self::DeviceControl4,
        Self::NegativeAcknowledge,
        Self::SynchronousIdle,
        Self::EndOfTransmissionBlock,
        Self::Cancel,
        Self::EndOfMedium,
        Self::Substitute,
        Self::Escape,
        Self::FileSeparator,
        Self::GroupSeparator,
        Self::RecordSeparator,
        Self::UnitSeparator,
        Self::Delete,
    ];

    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            SIFR_CONTROL_NULL..=SIFR_CONTROL_UNIT_SEPARATOR => Some(Self::ALL[byte as usize]),
            SIFR_CONTROL_DELETE => Some(Self::Delete),
            _ => None,
        }
    }

    pub const fn byte(self) -> u8 {
        self as u8
    }

    /// Conventional two/three letter mnemonic (`NUL`, `ESC`, `DEL`, ...).
    pub fn mnemonic(self) -> &'static str {
        match self {
            Self::Null => "NUL",
            Self::StartOfHeading => "SOH",
            Self::StartOfText => "STX",
            Self::EndOfText => "ETX",
            Self::EndOfTransmission => "EOT",
            Self::Enquiry => "ENQ",
            Self::Acknowledge => "ACK",
            Self::Bell => "BEL",
            Self::Backspace => "BS",
            Self::HorizontalTab => "HT",
            Self::LineFeed => "LF",
            Self::VerticalTab => "VT",
            Self::FormFeed => "FF",
            Self::CarriageReturn => "CR",
            Self::ShiftOut => "SO",
            Self::ShiftIn => "SI",
            Self::DataLinkEscape => "DLE",
            Self::DeviceControl1 => "DC1",
            Self::DeviceControl2 => "DC2",
            Self::DeviceControl3 => "DC3",
            Self::DeviceControl4 => "DC4",
            Self::NegativeAcknowledge => "NAK",
            Self::SynchronousIdle => "SYN",
            Self::EndOfTransmissionBlock => "ETB",
            Self::Cancel => "CAN",
            Self::EndOfMedium => "EM",
            Self::Substitute => "SUB",
            Self::Escape => "ESC",
            Self::FileSeparator => "FS",
            Self::GroupSeparator => "GS",
            Self::RecordSeparator => "RS",
            Self::UnitSeparator => "US",
            Self::Delete => "DEL",
        }
    }

    /// Line-structure controls (LF, VT, FF, CR).
    pub fn is_line_break(self) -> bool {
        matches!(
            self,
            Self::LineFeed | Self::VerticalTab | Self::FormFeed | Self::CarriageReturn
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Control;

    #[test]
    fn all_is_in_byte_order_with_delete_last() {
        for (index, control) in Control::ALL.iter().take(32).enumerate() {
            assert_eq!(control.byte() as usize, index);
        }
        assert_eq!(Control::ALL[32], Control::Delete);
    }

    #[test]
    fn from_byte_covers_c0_and_delete_only() {
        assert_eq!(Control::from_byte(0x1B), Some(Control::Escape));
        assert_eq!(Control::from_byte(0x7F), Some(Control::Delete));
        assert_eq!(Control::from_byte(0x20), None);
        assert_eq!(Control::from_byte(0x80), None);
    }

    #[test]
    fn mnemonics_follow_the_c0_names() {
        assert_eq!(Control::Null.mnemonic(), "NUL");
        assert_eq!(Control::Escape.mnemonic(), "ESC");
        assert_eq!(Control::Delete.mnemonic(), "DEL");
        let mut mnemonics: Vec<_> = Control::ALL.iter().map(|c| c.mnemonic()).collect();
        mnemonics.sort_unstable();
        mnemonics.dedup();
        assert_eq!(mnemonics.len(), Control::ALL.len());
    }

    #[test]
    fn line_breaks_are_lf_vt_ff_cr() {
        let breaks: Vec<u8> = Control::ALL
            .iter()
            .filter(|control| control.is_line_break())
            .map(|control| control.byte())
            .collect();
        assert_eq!(breaks, vec![0x0A, 0x0B, 0x0C, 0x0D]);
    }
}
