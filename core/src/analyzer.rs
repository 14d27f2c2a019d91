use crate::stemmer::Stemmer;
use crate::tokenizer::{StopWords, Tokenizer};

/// Text to stems: tokenize, drop stop-words, stem what is left.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    tokenizer: Tokenizer,
    stemmer: Stemmer,
}

impl Analyzer {
    pub fn new(tokenizer: Tokenizer, stemmer: Stemmer) -> Self {
        Self { tokenizer, stemmer }
    }

    /// Default Russian ruleset with the given stop-words.
    pub fn with_stop_words(stop_words: StopWords) -> Self {
        Self::new(Tokenizer::new(stop_words), Stemmer::default())
    }

    /// Stems in text order; repeated words give repeated stems.
    pub fn terms(&self, text: &str) -> Vec<String> {
        self.tokenizer.tokens(text).iter().map(|t| self.stemmer.stem(t)).collect()
    }

    pub fn is_valid_query(&self, text: &str) -> bool {
        self.tokenizer.is_valid_query(text)
    }
}
