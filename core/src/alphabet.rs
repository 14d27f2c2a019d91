//! Character classes of the Russian ruleset.

/// Lowercase Cyrillic letters accepted by the tokenizer.
pub const ALPHABET: &str = "абвгдеёжзийклмнопрстуфхцчшщъыьэюя";

pub const DIGITS: &str = "0123456789";

pub const VOWELS: &str = "аеёиоуыэюя";

/// Letters that must precede a "group 1" ending (gerund, participle, verb).
pub const AFTER_A: [char; 2] = ['а', 'я'];

pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(c)
}
