//! RV / R1 / R2 region segmentation.

use crate::alphabet::is_vowel;

/// Start offsets (in chars) of the three suffix-search regions of a word.
///
/// Offsets are taken from the word as first seen. Stemming only ever shortens the
/// word from the end, so an offset keeps pointing at the same letter for as long
/// as that letter exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Regions {
    pub rv: Option<usize>,
    pub r1: Option<usize>,
    pub r2: Option<usize>,
}

impl Regions {
    pub fn of(word: &[char]) -> Self {
        Self { rv: rv_start(word), r1: r1_start(word), r2: r2_start(word) }
    }
}

/// Position after the first vowel, never considering the last letter.
pub fn rv_start(word: &[char]) -> Option<usize> {
    let last = word.len().checked_sub(1)?;
    word[..last].iter().position(|&c| is_vowel(c)).map(|i| i + 1)
}

/// Position after the first consonant that follows a vowel, never considering the last letter.
pub fn r1_start(word: &[char]) -> Option<usize> {
    let last = word.len().checked_sub(1)?;
    (1..last).find(|&i| !is_vowel(word[i]) && is_vowel(word[i - 1])).map(|i| i + 1)
}

/// The R1 rule applied again inside R1.
pub fn r2_start(word: &[char]) -> Option<usize> {
    let r1 = r1_start(word)?;
    r1_start(&word[r1..]).map(|r| r1 + r)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regions(s: &str) -> Regions {
        Regions::of(&s.chars().collect::<Vec<_>>())
    }

    #[test]
    fn three_regions() {
        assert_eq!(regions("собака"), Regions { rv: Some(2), r1: Some(3), r2: Some(5) });
        assert_eq!(regions("книгами"), Regions { rv: Some(3), r1: Some(4), r2: Some(6) });
    }

    #[test]
    fn missing_regions() {
        assert_eq!(regions("кот"), Regions { rv: Some(2), r1: None, r2: None });
        assert_eq!(regions("стол"), Regions { rv: Some(3), r1: None, r2: None });
        // The final letter is never a region boundary candidate.
        assert_eq!(regions("я"), Regions::default());
        assert_eq!(regions("вздр"), Regions::default());
        assert_eq!(regions(""), Regions::default());
    }

    #[test]
    fn rv_may_start_before_r1() {
        // RV after the leading vowel, R1 only after the first vowel-consonant pair.
        let r = regions("окне");
        assert_eq!(r.rv, Some(1));
        assert_eq!(r.r1, Some(2));
        assert_eq!(r.r2, None);
    }

    #[test]
    fn r2_is_r1_applied_twice() {
        for w in ["собака", "красивая", "величайшего", "пробегающие", "весенний", "умывающийся"] {
            let chars: Vec<char> = w.chars().collect();
            let r = Regions::of(&chars);
            if let Some(r2) = r.r2 {
                let r1 = r.r1.expect("r2 implies r1");
                assert!(r1 <= r2, "{w}");
                assert_eq!(Some(r2 - r1), r1_start(&chars[r1..]), "{w}");
            }
        }
    }
}
