//! Break-point search
//!
//! Pure helpers operating on a character slice; the recursion that applies
//! them lives in [`super::Hyphenator`].

use crate::language::{CharClass, LanguageProfile};
use smallvec::SmallVec;

/// Find where `segment` may be split, searching from its midpoint
///
/// Vowels are scanned in increasing index order and the first one that
/// yields a valid break wins. Returns the index of the first character of
/// the right-hand part.
///
/// The tail bound is inclusive: a part exactly `min_tail` characters long
/// is accepted on either side.
pub(crate) fn find_break_point(
    segment: &[char],
    profile: &LanguageProfile,
    min_tail: usize,
) -> Option<usize> {
    let len = segment.len();
    if len < min_tail.saturating_mul(2) {
        return None;
    }
    if segment.last().is_some_and(|&ch| profile.is_sign(ch)) {
        return None;
    }

    let target = len / 2;
    let vowels: SmallVec<[usize; 16]> = segment
        .iter()
        .enumerate()
        .filter(|(_, &ch)| profile.is_vowel(ch))
        .map(|(i, _)| i)
        .collect();

    vowels
        .into_iter()
        .filter(|&i| i >= target.saturating_sub(min_tail) && i < len - min_tail)
        .find_map(|i| break_after_vowel(segment, i, profile, min_tail))
}

/// Validate the break that follows the vowel at `vowel`
fn break_after_vowel(
    segment: &[char],
    vowel: usize,
    profile: &LanguageProfile,
    min_tail: usize,
) -> Option<usize> {
    let len = segment.len();
    let mut point = vowel + 1;

    // A consonant or semivowel not followed by a vowel stays with this syllable
    if let Some(&next) = segment.get(point) {
        let attaches = matches!(
            profile.classify(next),
            CharClass::Consonant | CharClass::Semivowel
        );
        let before_vowel = segment
            .get(point + 1)
            .is_some_and(|&ch| profile.is_vowel(ch));
        if attaches && !before_vowel {
            point += 1;
        }
    }

    if point < min_tail || len.saturating_sub(point) < min_tail {
        return None;
    }
    match segment.get(point) {
        Some(&ch) if !profile.is_sign(ch) => Some(point),
        _ => None,
    }
}
