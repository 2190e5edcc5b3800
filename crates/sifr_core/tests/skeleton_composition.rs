use sifr_core::{
    compose, decompose, derived_letters, marks_of, same_skeleton, skeleton_of, skeleton_of_byte,
    CombiningMark, Letter, Mark, MarkSet, Skeleton, SkeletonError,
};

#[test]
fn compose_inverts_skeleton_of_for_every_letter() {
    for letter in Letter::ALL {
        assert_eq!(
            compose(skeleton_of(letter), marks_of(letter)),
            Ok(letter),
            "{letter:?}"
        );
    }
}

#[test]
fn rasm_families_share_one_skeleton() {
    let families: &[&[Letter]] = &[
        &[Letter::Ba, Letter::Ta, Letter::Tha, Letter::Noon, Letter::Ya],
        &[Letter::Ha, Letter::Jeem, Letter::Kha],
        &[Letter::Dal, Letter::Thal],
        &[Letter::Ra, Letter::Zay],
        &[Letter::Seen, Letter::Sheen],
        &[Letter::Sad, Letter::Dad],
        &[Letter::Tta, Letter::Zza],
        &[Letter::Ain, Letter::Ghain],
        &[Letter::Fa, Letter::Qaf],
        &[Letter::Lam, Letter::Kaf],
    ];
    for family in families {
        for letter in family.iter() {
            assert!(same_skeleton(family[0], *letter), "{letter:?}");
        }
    }
    assert!(!same_skeleton(Letter::Dal, Letter::Ra));
    assert!(!same_skeleton(Letter::Fa, Letter::Ain));
}

#[test]
fn unique_strokes_are_their_own_skeleton() {
    assert_eq!(skeleton_of(Letter::Alif), Skeleton::Alif);
    assert_eq!(skeleton_of(Letter::Meem), Skeleton::Meem);
    assert_eq!(skeleton_of(Letter::Waw), Skeleton::Waw);
    assert_eq!(skeleton_of(Letter::Heh), Skeleton::DotlessHeh);
    assert_eq!(skeleton_of(Letter::TaMarbuta), Skeleton::DotlessHeh);
    assert_eq!(skeleton_of(Letter::AlefMaqsura), Skeleton::YehBarre);
    assert_eq!(derived_letters(Skeleton::Meem), vec![Letter::Meem]);
}

#[test]
fn dots_distinguish_the_ba_family() {
    let dots = |marks: &[CombiningMark]| compose(Skeleton::DotlessBa, MarkSet::of(marks));
    assert_eq!(dots(&[CombiningMark::OneDotBelow]), Ok(Letter::Ba));
    assert_eq!(dots(&[CombiningMark::TwoDotsAbove]), Ok(Letter::Ta));
    assert_eq!(dots(&[CombiningMark::ThreeDotsAbove]), Ok(Letter::Tha));
    assert_eq!(dots(&[CombiningMark::OneDotAbove]), Ok(Letter::Noon));
    assert_eq!(dots(&[CombiningMark::TwoDotsBelow]), Ok(Letter::Ya));
    assert!(dots(&[]).is_err());
}

#[test]
fn hamza_signs_from_the_mark_band_compose_alif_seats() {
    let above = MarkSet::from_marks(&[Mark::HamzaAboveSign]).expect("bridged sign");
    let below = MarkSet::from_marks(&[Mark::HamzaBelowSign]).expect("bridged sign");
    let madda = MarkSet::from_marks(&[Mark::MaddahAbove]).expect("bridged sign");

    assert_eq!(compose(Skeleton::Alif, above), Ok(Letter::AlifHamzaAbove));
    assert_eq!(compose(Skeleton::Alif, below), Ok(Letter::AlifHamzaBelow));
    assert_eq!(compose(Skeleton::Alif, madda), Ok(Letter::AlifMadda));
    assert_eq!(compose(Skeleton::Waw, above), Ok(Letter::WawHamza));
    assert_eq!(compose(Skeleton::YehBarre, above), Ok(Letter::YaHamza));
}

#[test]
fn compose_reports_no_such_composition() {
    let marks = MarkSet::of(&[CombiningMark::OneDotAbove, CombiningMark::HamzaAbove]);
    let err = compose(Skeleton::Alif, marks).expect_err("no such letter");
    assert_eq!(
        err,
        SkeletonError::NoSuchComposition {
            skeleton: Skeleton::Alif,
            marks,
        }
    );
    assert!(err.to_string().contains("one_dot_above+hamza_above"));
}

#[test]
fn decompose_matches_skeleton_and_marks() {
    let (skeleton, marks) = decompose(Letter::Sheen);
    assert_eq!(skeleton, Skeleton::DotlessSeen);
    assert_eq!(marks.dot_count(), 3);
    assert_eq!(marks_of(Letter::Seen), MarkSet::EMPTY);
}

#[test]
fn skeleton_of_byte_is_total_over_the_letter_band_only() {
    for byte in 0..=u8::MAX {
        let result = skeleton_of_byte(byte);
        match Letter::from_byte(byte) {
            Some(letter) => assert_eq!(result, Ok(skeleton_of(letter))),
            None => assert_eq!(result, Err(SkeletonError::NotALetter(byte))),
        }
    }
}

#[test]
fn derivations_serialize_with_mark_lists() {
    let derivation = sifr_core::skeleton::registry().derivation(Letter::Qaf);
    let json = serde_json::to_value(derivation).expect("derivation serializes");
    assert_eq!(json["letter"], "qaf");
    assert_eq!(json["skeleton"], "dotless_fa");
    assert_eq!(json["marks"], serde_json::json!(["two_dots_above"]));
}
