//! Skeleton registry: the derivation table and its lookup indexes.
//!
//! # Invariants
//! - Every letter appears in exactly one derivation.
//! - `(skeleton, marks)` pairs are unique.
//! - The process-wide registry is built once on first use and is read-only
//!   afterwards.

use crate::model::letter::Letter;
use crate::skeleton::marks::{CombiningMark, MarkSet};
use crate::skeleton::Skeleton;
use log::debug;
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::skeleton::marks::CombiningMark::{
    HamzaAbove, HamzaBelow, KafStroke, MaddahAbove, OneDotAbove, OneDotBelow, ThreeDotsAbove,
    TwoDotsAbove, TwoDotsBelow,
};

/// One letter expressed as skeleton plus marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Derivation {
    pub letter: Letter,
    pub skeleton: Skeleton,
    pub marks: MarkSet,
}

const fn derive(letter: Letter, skeleton: Skeleton, marks: &[CombiningMark]) -> Derivation {
    Derivation {
        letter,
        skeleton,
        marks: MarkSet::of(marks),
    }
}

/// Built-in derivations, table version 1, in letter byte order.
///
/// Dot groups follow the written letters: Ba one below, Ta two above,
/// Tha three above, Noon one above, Ya two below; Jeem one below, Kha one
/// above; Qaf two above on the dotless Fa; Ta Marbuta two above on Heh.
pub const DERIVATIONS: [Derivation; Letter::COUNT] = [
    derive(Letter::Alif, Skeleton::Alif, &[]),
    derive(Letter::Ba, Skeleton::DotlessBa, &[OneDotBelow]),
    derive(Letter::Ta, Skeleton::DotlessBa, &[TwoDotsAbove]),
    derive(Letter::Tha, Skeleton::DotlessBa, &[ThreeDotsAbove]),
    derive(Letter::Jeem, Skeleton::DotlessHah, &[OneDotBelow]),
    derive(Letter::Ha, Skeleton::DotlessHah, &[]),
    derive(Letter::Kha, Skeleton::DotlessHah, &[OneDotAbove]),
    derive(Letter::Dal, Skeleton::DotlessDal, &[]),
    derive(Letter::Thal, Skeleton::DotlessDal, &[OneDotAbove]),
    derive(Letter::Ra, Skeleton::DotlessRa, &[]),
    derive(Letter::Zay, Skeleton::DotlessRa, &[OneDotAbove]),
    derive(Letter::Seen, Skeleton::DotlessSeen, &[]),
    derive(Letter::Sheen, Skeleton::DotlessSeen, &[ThreeDotsAbove]),
    derive(Letter::Sad, Skeleton::DotlessSad, &[]),
    derive(Letter::Dad, Skeleton::DotlessSad, &[OneDotAbove]),
    derive(Letter::Tta, Skeleton::DotlessTta, &[]),
    derive(Letter::Zza, Skeleton::DotlessTta, &[OneDotAbove]),
    derive(Letter::Ain, Skeleton::DotlessAin, &[]),
    derive(Letter::Ghain, Skeleton::DotlessAin, &[OneDotAbove]),
    derive(Letter::Fa, Skeleton::DotlessFa, &[OneDotAbove]),
    derive(Letter::Qaf, Skeleton::DotlessFa, &[TwoDotsAbove]),
    derive(Letter::Kaf, Skeleton::DotlessLam, &[KafStroke]),
    derive(Letter::Lam, Skeleton::DotlessLam, &[]),
    derive(Letter::Meem, Skeleton::Meem, &[]),
    derive(Letter::Noon, Skeleton::DotlessBa, &[OneDotAbove]),
    derive(Letter::Heh, Skeleton::DotlessHeh, &[]),
    derive(Letter::Waw, Skeleton::Waw, &[]),
    derive(Letter::Ya, Skeleton::DotlessBa, &[TwoDotsBelow]),
    derive(Letter::Hamza, Skeleton::Hamza, &[]),
    derive(Letter::TaMarbuta, Skeleton::DotlessHeh, &[TwoDotsAbove]),
    derive(Letter::AlifMadda, Skeleton::Alif, &[MaddahAbove]),
    derive(Letter::AlifHamzaAbove, Skeleton::Alif, &[HamzaAbove]),
    derive(Letter::AlifHamzaBelow, Skeleton::Alif, &[HamzaBelow]),
    derive(Letter::YaHamza, Skeleton::YehBarre, &[HamzaAbove]),
    derive(Letter::WawHamza, Skeleton::Waw, &[HamzaAbove]),
    derive(Letter::AlefMaqsura, Skeleton::YehBarre, &[]),
];

static REGISTRY: Lazy<SkeletonRegistry> = Lazy::new(|| {
    SkeletonRegistry::from_derivations(&DERIVATIONS).expect("built-in derivations are consistent")
});

pub type SkeletonResult<T> = Result<T, SkeletonError>;

/// Skeleton lookup, composition and registry construction errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkeletonError {
    /// No letter is derived from `skeleton` with exactly `marks`.
    NoSuchComposition { skeleton: Skeleton, marks: MarkSet },
    /// A byte outside the letter band was given where a letter is required.
    NotALetter(u8),
    DuplicateLetter(Letter),
    MissingLetter(Letter),
    AmbiguousComposition {
        skeleton: Skeleton,
        marks: MarkSet,
        letters: [Letter; 2],
    },
}

impl Display for SkeletonError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoSuchComposition { skeleton, marks } => write!(
                f,
                "no letter composes from skeleton `{}` with marks `{marks}`",
                skeleton.as_str()
            ),
            Self::NotALetter(byte) => write!(f, "byte 0x{byte:02X} is not an Arabic letter"),
            Self::DuplicateLetter(letter) => {
                write!(f, "letter {letter:?} is derived more than once")
            }
            Self::MissingLetter(letter) => write!(f, "letter {letter:?} has no derivation"),
            Self::AmbiguousComposition {
                skeleton,
                marks,
                letters,
            } => write!(
                f,
                "skeleton `{}` with marks `{marks}` derives both {:?} and {:?}",
                skeleton.as_str(),
                letters[0],
                letters[1]
            ),
        }
    }
}

impl Error for SkeletonError {}

/// Validated derivation indexes.
#[derive(Debug, Clone)]
pub struct SkeletonRegistry {
    by_letter: [Derivation; Letter::COUNT],
    by_skeleton: BTreeMap<Skeleton, Vec<Derivation>>,
}

impl SkeletonRegistry {
    /// Builds indexes from a derivation list.
    ///
    /// # Errors
    /// - `DuplicateLetter` when a letter is derived twice.
    /// - `MissingLetter` when a letter has no derivation.
    /// - `AmbiguousComposition` when one skeleton and mark set derive two
    ///   letters.
    pub fn from_derivations(derivations: &[Derivation]) -> SkeletonResult<Self> {
        let mut slots: [Option<Derivation>; Letter::COUNT] = [None; Letter::COUNT];
        let mut by_skeleton: BTreeMap<Skeleton, Vec<Derivation>> = BTreeMap::new();

        for derivation in derivations {
            let slot = &mut slots[derivation.letter.index()];
            if slot.is_some() {
                return Err(SkeletonError::DuplicateLetter(derivation.letter));
            }
            *slot = Some(*derivation);

            let family = by_skeleton.entry(derivation.skeleton).or_default();
            if let Some(existing) = family.iter().find(|d| d.marks == derivation.marks) {
                return Err(SkeletonError::AmbiguousComposition {
                    skeleton: derivation.skeleton,
                    marks: derivation.marks,
                    letters: [existing.letter, derivation.letter],
                });
            }
            family.push(*derivation);
        }
        for family in by_skeleton.values_mut() {
            family.sort_by_key(|derivation| derivation.letter);
        }

        let mut by_letter = [derive(Letter::Alif, Skeleton::Alif, &[]); Letter::COUNT];
        for letter in Letter::ALL {
            by_letter[letter.index()] =
                slots[letter.index()].ok_or(SkeletonError::MissingLetter(letter))?;
        }

        debug!(
            "event=skeleton_registry_init module=skeleton status=ok skeletons={} derivations={}",
            by_skeleton.len(),
            derivations.len()
        );

        Ok(Self {
            by_letter,
            by_skeleton,
        })
    }

    pub fn derivation(&self, letter: Letter) -> &Derivation {
        &self.by_letter[letter.index()]
    }

    pub fn skeleton_of(&self, letter: Letter) -> Skeleton {
        self.derivation(letter).skeleton
    }

    pub fn marks_of(&self, letter: Letter) -> MarkSet {
        self.derivation(letter).marks
    }

    /// # Errors
    /// - `NoSuchComposition` when no derivation matches.
    pub fn compose(&self, skeleton: Skeleton, marks: MarkSet) -> SkeletonResult<Letter> {
        self.derived(skeleton)
            .iter()
            .find(|derivation| derivation.marks == marks)
            .map(|derivation| derivation.letter)
            .ok_or(SkeletonError::NoSuchComposition { skeleton, marks })
    }

    /// Derivations rooted at `skeleton`, in letter byte order.
    pub fn derived(&self, skeleton: Skeleton) -> &[Derivation] {
        self.by_skeleton
            .get(&skeleton)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Skeletons that root at least one letter.
    pub fn skeletons(&self) -> impl Iterator<Item = Skeleton> + '_ {
        self.by_skeleton.keys().copied()
    }
}

/// Process-wide registry built from `DERIVATIONS`.
pub fn registry() -> &'static SkeletonRegistry {
    &REGISTRY
}

/// Skeleton a letter is written on. Total over the letter band.
pub fn skeleton_of(letter: Letter) -> Skeleton {
    registry().skeleton_of(letter)
}

/// Byte-level `skeleton_of`.
///
/// # Errors
/// - `NotALetter` when `byte` is outside the letter band.
pub fn skeleton_of_byte(byte: u8) -> SkeletonResult<Skeleton> {
    Letter::from_byte(byte)
        .map(skeleton_of)
        .ok_or(SkeletonError::NotALetter(byte))
}

/// Marks that turn the letter's skeleton into the letter.
pub fn marks_of(letter: Letter) -> MarkSet {
    registry().marks_of(letter)
}

/// Splits a letter into skeleton and marks.
pub fn decompose(letter: Letter) -> (Skeleton, MarkSet) {
    let derivation = registry().derivation(letter);
    (derivation.skeleton, derivation.marks)
}

/// Composes a letter from a skeleton and marks.
///
/// # Errors
/// - `NoSuchComposition` when the pair is not a registered derivation.
pub fn compose(skeleton: Skeleton, marks: MarkSet) -> SkeletonResult<Letter> {
    registry().compose(skeleton, marks)
}

/// Letters rooted at `skeleton`, in byte order.
pub fn derived_letters(skeleton: Skeleton) -> Vec<Letter> {
    registry()
        .derived(skeleton)
        .iter()
        .map(|derivation| derivation.letter)
        .collect()
}

/// Returns whether two letters share a dotless base shape.
pub fn same_skeleton(first: Letter, second: Letter) -> bool {
    skeleton_of(first) == skeleton_of(second)
}
