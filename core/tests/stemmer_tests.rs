use textsearch_core::Stemmer;

#[test]
fn known_stems() {
    let stemmer = Stemmer::default();
    let cases = [
        ("кот", "кот"),
        ("сидит", "сид"),
        ("окне", "окн"),
        ("собака", "собак"),
        ("лежит", "леж"),
        ("двери", "двер"),
        ("красивая", "красив"),
        ("бегающий", "бегающ"),
        ("пробегающие", "пробегающ"),
        ("перепрыгивающими", "перепрыгивающ"),
        ("величайшего", "величайш"),
        ("сказочная", "сказочн"),
        ("нежнейшая", "нежн"),
        ("интереснейшие", "интересн"),
        ("одухотворенность", "одухотворен"),
        ("моего", "мо"),
        ("заем", "за"),
        ("сияющий", "сия"),
        ("стол", "стол"),
    ];
    for (word, stem) in cases {
        assert_eq!(stemmer.stem(word), stem, "{word}");
    }
}

#[test]
fn restemming_never_grows() {
    let stemmer = Stemmer::default();
    let words = [
        "красивая", "пробегающие", "одухотворенность", "лиственница", "подоконник", "я", "он",
        "вшись", "ьь", "нн", "ааааа", "2024",
    ];
    for word in words {
        let once = stemmer.stem(word);
        assert!(once.chars().count() <= word.chars().count(), "{word}");
        let twice = stemmer.stem(&once);
        assert!(twice.chars().count() <= once.chars().count(), "{word}");
    }
    assert_eq!(stemmer.stem("красивая"), "красив");
    assert_eq!(stemmer.stem("красив"), "крас");
}
