/// Characters treated as word boundaries in the input.
pub const SEPARATORS: [char; 5] = [' ', '.', '-', '/', '_'];

/// Russian Cyrillic (lowercase) to Latin, sorted by code point.
///
/// The hard and soft signs have no Latin sound and map to the empty string.
pub static CYRILLIC: [(char, &str); 33] = [
    ('а', "a"),
    ('б', "b"),
    ('в', "v"),
    ('г', "g"),
    ('д', "d"),
    ('е', "e"),
    ('ж', "zh"),
    ('з', "z"),
    ('и', "i"),
    ('й', "y"),
    ('к', "k"),
    ('л', "l"),
    ('м', "m"),
    ('н', "n"),
    ('о', "o"),
    ('п', "p"),
    ('р', "r"),
    ('с', "s"),
    ('т', "t"),
    ('у', "u"),
    ('ф', "f"),
    ('х', "h"),
    ('ц', "ts"),
    ('ч', "ch"),
    ('ш', "sh"),
    ('щ', "shch"),
    ('ъ', ""),
    ('ы', "y"),
    ('ь', ""),
    ('э', "e"),
    ('ю', "yu"),
    ('я', "ya"),
    ('ё', "yo"),
];

/// Return true if `c` is a word boundary in the input.
pub fn is_separator(c: char) -> bool {
    SEPARATORS.contains(&c)
}

/// Latin spelling of a lowercase Cyrillic character, if it has one.
pub fn transliterate(c: char) -> Option<&'static str> {
    CYRILLIC
        .binary_search_by_key(&c, |&(from, _)| from)
        .ok()
        .map(|i| CYRILLIC[i].1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_for_binary_search() {
        assert!(CYRILLIC.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn table_values_are_ascii_lowercase() {
        for (from, to) in CYRILLIC.iter() {
            assert!(
                to.chars().all(|c| c.is_ascii_lowercase()),
                "{from} maps to non-ASCII {to:?}"
            );
        }
    }

    #[test]
    fn transliterate_known_letters() {
        assert_eq!(transliterate('щ'), Some("shch"));
        assert_eq!(transliterate('ё'), Some("yo"));
        assert_eq!(transliterate('а'), Some("a"));
        assert_eq!(transliterate('я'), Some("ya"));
    }

    #[test]
    fn transliterate_signs_are_empty() {
        assert_eq!(transliterate('ъ'), Some(""));
        assert_eq!(transliterate('ь'), Some(""));
    }

    #[test]
    fn transliterate_unknown() {
        assert_eq!(transliterate('a'), None);
        assert_eq!(transliterate('Щ'), None); // uppercase is lowered before lookup
        assert_eq!(transliterate('і'), None);
    }

    #[test]
    fn separator_set() {
        for c in [' ', '.', '-', '/', '_'] {
            assert!(is_separator(c));
        }
        assert!(!is_separator('\t'));
        assert!(!is_separator('+'));
    }
}
