//! Suffix-class tables and the two suffix matchers built on them.

use crate::alphabet::AFTER_A;

/// Literal suffixes of one grammatical category, longest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndingTable {
    patterns: Vec<Vec<char>>,
}

impl EndingTable {
    /// Patterns are re-ordered longest first; equal lengths keep the given order.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut patterns: Vec<Vec<char>> = patterns
            .into_iter()
            .map(|p| p.as_ref().chars().collect())
            .filter(|p: &Vec<char>| !p.is_empty())
            .collect();
        patterns.sort_by_key(|p| std::cmp::Reverse(p.len()));
        Self { patterns }
    }

    pub fn patterns(&self) -> impl Iterator<Item = String> + '_ {
        self.patterns.iter().map(|p| p.iter().collect())
    }

    /// Offset at which the longest matching suffix starts.
    pub fn find(&self, word: &[char]) -> Option<usize> {
        self.patterns
            .iter()
            .find(|p| word.ends_with(p))
            .map(|p| word.len() - p.len())
    }

    /// Like [`find`](Self::find), but the suffix must be preceded by `а` or `я`
    /// and so can never cover the whole word.
    pub fn find_after_a(&self, word: &[char]) -> Option<usize> {
        self.patterns.iter().find_map(|p| {
            if word.len() <= p.len() || !word.ends_with(p) { return None; }
            let start = word.len() - p.len();
            AFTER_A.contains(&word[start - 1]).then_some(start)
        })
    }
}

/// A category split in two groups: group 1 only counts after `а`/`я`, group 2 anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupedEndings {
    pub after_a: EndingTable,
    pub plain: EndingTable,
}

impl GroupedEndings {
    pub fn find(&self, word: &[char]) -> Option<usize> {
        self.after_a.find_after_a(word).or_else(|| self.plain.find(word))
    }
}

/// Every suffix class the stemmer consults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndingTables {
    pub perfective_gerund: GroupedEndings,
    pub reflexive: EndingTable,
    pub adjective: EndingTable,
    pub participle: GroupedEndings,
    pub verb: GroupedEndings,
    pub noun: EndingTable,
    pub superlative: EndingTable,
    pub derivational: EndingTable,
}

impl EndingTables {
    pub fn russian() -> Self {
        Self {
            perfective_gerund: GroupedEndings {
                after_a: EndingTable::new(["в", "вши", "вшись"]),
                plain: EndingTable::new(["ив", "ивши", "ившись", "ыв", "ывши", "ывшись"]),
            },
            reflexive: EndingTable::new(["ся", "сь"]),
            adjective: EndingTable::new([
                "ее", "ие", "ые", "ое", "ими", "ыми", "ей", "ий", "ый", "ой", "ем", "им", "ым",
                "ом", "его", "ого", "ему", "ому", "их", "ых", "ую", "юю", "ая", "яя", "ою", "ею",
            ]),
            participle: GroupedEndings {
                after_a: EndingTable::new(["ем", "нн", "вш", "ющ", "щ"]),
                plain: EndingTable::new(["ивш", "ывш", "ующ"]),
            },
            verb: GroupedEndings {
                after_a: EndingTable::new([
                    "ла", "на", "ете", "йте", "ли", "й", "л", "ем", "н", "ло", "но", "ет", "ют",
                    "ны", "ть", "ешь", "нно",
                ]),
                plain: EndingTable::new([
                    "ила", "ыла", "ена", "ейте", "уйте", "ите", "или", "ыли", "ей", "уй", "ил",
                    "ыл", "им", "ым", "ен", "ило", "ыло", "ено", "ят", "ует", "уют", "ит", "ыт",
                    "ены", "ить", "ыть", "ишь", "ую", "ю",
                ]),
            },
            noun: EndingTable::new([
                "а", "ев", "ов", "ие", "ье", "е", "иями", "ями", "ами", "еи", "ии", "и", "ией",
                "ей", "ой", "ий", "й", "иям", "ям", "ием", "ем", "ам", "ом", "о", "у", "ах",
                "иях", "ях", "ы", "ь", "ию", "ью", "ю", "ия", "ья", "я",
            ]),
            superlative: EndingTable::new(["ейш", "ейше"]),
            derivational: EndingTable::new(["ост", "ость"]),
        }
    }

    /// An adjective ending, superseded by a participle ending.
    ///
    /// The participle is looked up in the first `len - offset + 1` letters (the
    /// adjective ending's length plus one), capped at the whole word.
    pub fn find_adjectival(&self, word: &[char]) -> Option<usize> {
        let adjective = self.adjective.find(word)?;
        let head = (word.len() - adjective + 1).min(word.len());
        Some(self.participle.find(&word[..head]).unwrap_or(adjective))
    }
}

impl Default for EndingTables {
    fn default() -> Self {
        Self::russian()
    }
}
