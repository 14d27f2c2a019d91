//! Rule-based Russian stemmer.
//!
//! A word is reduced in four fixed steps, each looking for a suffix class inside
//! one of the regions computed by [`regions`]:
//!
//! 1. perfective gerund, or else reflexive followed by adjectival / verb / noun (RV)
//! 2. trailing `и` (RV)
//! 3. derivational ending lying wholly in R2
//! 4. soft sign, or else superlative ending plus undoubling of `нн` (RV)
//!
//! Words without an RV region are returned unchanged.

pub mod endings;
pub mod regions;

pub use endings::{EndingTable, EndingTables, GroupedEndings};
pub use regions::Regions;

/// A word being stemmed: the current letters plus regions fixed at construction.
#[derive(Debug, Clone)]
struct Word {
    chars: Vec<char>,
    regions: Regions,
}

impl Word {
    fn new(word: &str) -> Self {
        let chars: Vec<char> = word.chars().collect();
        let regions = Regions::of(&chars);
        Self { chars, regions }
    }

    /// Letters from `start` to the current end, if any remain there.
    fn region(&self, start: Option<usize>) -> Option<&[char]> {
        start.filter(|&s| s < self.chars.len()).map(|s| &self.chars[s..])
    }

    fn rv(&self) -> Option<&[char]> {
        self.region(self.regions.rv)
    }

    fn r2(&self) -> Option<&[char]> {
        self.region(self.regions.r2)
    }

    /// Cut the word at `offset` inside the region starting at `start`.
    fn truncate_at(&mut self, start: usize, offset: Option<usize>) -> bool {
        match offset {
            Some(o) if start + o <= self.chars.len() => {
                self.chars.truncate(start + o);
                true
            }
            _ => false,
        }
    }

    fn remove_last(&mut self) {
        self.chars.pop();
    }

    fn into_string(self) -> String {
        self.chars.into_iter().collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Stemmer {
    tables: EndingTables,
}

impl Stemmer {
    pub fn new(tables: EndingTables) -> Self {
        Self { tables }
    }

    /// Reduce a lowercase word to its stem. Never fails and never lengthens the word.
    pub fn stem(&self, word: &str) -> String {
        let mut w = Word::new(word);
        let Some(rv) = w.regions.rv else {
            return w.into_string();
        };
        self.step1(&mut w, rv);
        // Step 2
        if w.rv().is_some_and(|r| r.ends_with(&['и'])) {
            w.remove_last();
        }
        // Step 3
        if let Some(r2) = w.regions.r2 {
            let offset = w.r2().and_then(|r| self.tables.derivational.find(r));
            w.truncate_at(r2, offset);
        }
        self.step4(&mut w, rv);
        w.into_string()
    }

    fn step1(&self, w: &mut Word, rv: usize) {
        let t = &self.tables;
        let gerund = w.rv().and_then(|r| t.perfective_gerund.find(r));
        if w.truncate_at(rv, gerund) {
            return;
        }
        let reflexive = w.rv().and_then(|r| t.reflexive.find(r));
        w.truncate_at(rv, reflexive);

        let adjectival = w.rv().and_then(|r| t.find_adjectival(r));
        if w.truncate_at(rv, adjectival) {
            return;
        }
        let verb = w.rv().and_then(|r| t.verb.find(r));
        if w.truncate_at(rv, verb) {
            return;
        }
        let noun = w.rv().and_then(|r| t.noun.find(r));
        w.truncate_at(rv, noun);
    }

    fn step4(&self, w: &mut Word, rv: usize) {
        if w.rv().is_some_and(|r| r.ends_with(&['ь'])) {
            w.remove_last();
            return;
        }
        let superlative = w.rv().and_then(|r| self.tables.superlative.find(r));
        w.truncate_at(rv, superlative);
        if w.chars.ends_with(&['н', 'н']) {
            w.remove_last();
        }
    }
}
