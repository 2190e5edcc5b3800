//! Composition marks and mark sets.
//!
//! The diacritic band carries vowel and hamza signs but no dots, so letter
//! composition uses its own vocabulary: dot groups by count and position,
//! the hamza/maddah signs (bridged to their diacritic-band bytes), and the
//! inner stroke that turns Lam's stroke into Kaf.

use crate::model::mark::Mark;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt::{Debug, Display, Formatter};

/// One mark that can be applied to a skeleton.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombiningMark {
    OneDotAbove,
    TwoDotsAbove,
    ThreeDotsAbove,
    OneDotBelow,
    TwoDotsBelow,
    HamzaAbove,
    HamzaBelow,
    MaddahAbove,
    KafStroke,
}

impl CombiningMark {
    pub const ALL: [CombiningMark; 9] = [
        Self::OneDotAbove,
        Self::TwoDotsAbove,
        Self::ThreeDotsAbove,
        Self::OneDotBelow,
        Self::TwoDotsBelow,
        Self::HamzaAbove,
        Self::HamzaBelow,
        Self::MaddahAbove,
        Self::KafStroke,
    ];

    const fn bit(self) -> u16 {
        1 << self as u8
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::OneDotAbove => "one_dot_above",
            Self::TwoDotsAbove => "two_dots_above",
            Self::ThreeDotsAbove => "three_dots_above",
            Self::OneDotBelow => "one_dot_below",
            Self::TwoDotsBelow => "two_dots_below",
            Self::HamzaAbove => "hamza_above",
            Self::HamzaBelow => "hamza_below",
            Self::MaddahAbove => "maddah_above",
            Self::KafStroke => "kaf_stroke",
        }
    }

    /// Number of dots for dot-group marks, zero otherwise.
    pub fn dot_count(self) -> u8 {
        match self {
            Self::OneDotAbove | Self::OneDotBelow => 1,
            Self::TwoDotsAbove | Self::TwoDotsBelow => 2,
            Self::ThreeDotsAbove => 3,
            _ => 0,
        }
    }

    /// Maps a diacritic-band sign to its composition mark, when it has one.
    pub fn from_mark(mark: Mark) -> Option<Self> {
        match mark {
            Mark::HamzaAboveSign => Some(Self::HamzaAbove),
            Mark::HamzaBelowSign => Some(Self::HamzaBelow),
            Mark::MaddahAbove => Some(Self::MaddahAbove),
            _ => None,
        }
    }

    /// Diacritic-band sign for this mark. Dots and the Kaf stroke have none.
    pub fn to_mark(self) -> Option<Mark> {
        match self {
            Self::HamzaAbove => Some(Mark::HamzaAboveSign),
            Self::HamzaBelow => Some(Mark::HamzaBelowSign),
            Self::MaddahAbove => Some(Mark::MaddahAbove),
            _ => None,
        }
    }
}

/// Order-independent set of composition marks.
///
/// Iteration always follows `CombiningMark::ALL` order, so two sets built
/// from the same marks in a different order are equal and print the same.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct MarkSet(u16);

impl MarkSet {
    pub const EMPTY: MarkSet = MarkSet(0);

    /// Builds a set at compile time.
    pub const fn of(marks: &[CombiningMark]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < marks.len() {
            bits |= marks[i].bit();
            i += 1;
        }
        Self(bits)
    }

    pub fn with(self, mark: CombiningMark) -> Self {
        Self(self.0 | mark.bit())
    }

    pub fn insert(&mut self, mark: CombiningMark) {
        self.0 |= mark.bit();
    }

    pub fn contains(self, mark: CombiningMark) -> bool {
        self.0 & mark.bit() != 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = CombiningMark> {
        CombiningMark::ALL
            .into_iter()
            .filter(move |mark| self.contains(*mark))
    }

    /// Total dots across all dot-group marks in the set.
    pub fn dot_count(self) -> u8 {
        self.iter().map(CombiningMark::dot_count).sum()
    }

    /// Builds a set from diacritic-band signs.
    ///
    /// Returns the first sign that has no composition meaning as `Err`.
    pub fn from_marks(marks: &[Mark]) -> Result<Self, Mark> {
        marks.iter().try_fold(Self::EMPTY, |set, mark| {
            CombiningMark::from_mark(*mark)
                .map(|combining| set.with(combining))
                .ok_or(*mark)
        })
    }
}

impl FromIterator<CombiningMark> for MarkSet {
    fn from_iter<I: IntoIterator<Item = CombiningMark>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

impl From<CombiningMark> for MarkSet {
    fn from(value: CombiningMark) -> Self {
        Self::EMPTY.with(value)
    }
}

impl Debug for MarkSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl Display for MarkSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }
        for (position, mark) in self.iter().enumerate() {
            if position > 0 {
                write!(f, "+")?;
            }
            write!(f, "{}", mark.as_str())?;
        }
        Ok(())
    }
}

impl Serialize for MarkSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
