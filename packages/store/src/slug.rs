//! # Slug transliteration
//!
//! [`slugify`] turns an arbitrary (typically Russian) title into the ASCII
//! token used in note URLs. The conversion is deterministic, so a title always
//! maps to the same slug:
//!
//! 1. lower-case the input and spell out `&` as ` and `;
//! 2. collapse runs of whitespace and hyphens into a single `-`;
//! 3. drop every character the transliteration table does not know;
//! 4. transliterate Cyrillic letters and typographic punctuation;
//! 5. drop whatever is not a word character, whitespace or `-`, then trim.
//!
//! Underscores are not part of the table, so `"some_slug"` becomes
//! `"someslug"`.

/// Transliteration of the lower-case Cyrillic alphabet and typographic
/// punctuation. ASCII letters and digits are kept as is.
fn transliterate(c: char) -> Option<&'static str> {
    let out = match c {
        '‘' | '’' => "'",
        '«' | '»' | '“' | '”' => "\"",
        '–' | '—' | '‒' | '−' => "-",
        '…' => "...",
        '№' => "#",
        'щ' => "sch",
        'ё' => "yo",
        'ж' => "zh",
        'ц' => "ts",
        'ч' => "ch",
        'ш' => "sh",
        'ы' => "yi",
        'ю' => "yu",
        'я' => "ya",
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' => "g",
        'д' => "d",
        'е' => "e",
        'з' => "z",
        'и' => "i",
        'й' => "j",
        'к' => "k",
        'л' => "l",
        'м' => "m",
        'н' => "n",
        'о' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'у' => "u",
        'ф' => "f",
        'х' => "h",
        'э' => "e",
        'ъ' => "`",
        'ь' => "'",
        _ => return None,
    };
    Some(out)
}

/// Characters that survive the alphabet filter without transliteration.
fn is_passthrough(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '\'' | '"' | '`' | '-' | '#')
}

/// Spell out ampersands (including the HTML entity) as ` and `.
fn replace_ampersands(s: &str) -> String {
    s.replace("&amp;", " and ").replace('&', " and ")
}

/// Collapse every run of whitespace and hyphens into a single hyphen.
fn collapse_separators(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_run = false;
    for c in s.chars() {
        if c.is_whitespace() || c == '-' {
            if !in_run {
                out.push('-');
                in_run = true;
            }
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

/// Convert `input` into a URL-safe ASCII slug.
pub fn slugify(input: &str) -> String {
    let lowered = replace_ampersands(&input.to_lowercase());
    let collapsed = collapse_separators(&lowered);

    let mut translit = String::with_capacity(collapsed.len());
    for c in collapsed.chars() {
        if let Some(ascii) = transliterate(c) {
            translit.push_str(ascii);
        } else if is_passthrough(c) {
            translit.push(c);
        }
    }

    translit
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-' || c.is_whitespace())
        .collect::<String>()
        .trim()
        .to_lowercase()
}

/// Whether `slug` only uses the characters allowed in note URLs.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Truncate `s` to at most `max` characters, respecting char boundaries.
pub fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cyrillic_title() {
        assert_eq!(slugify("Заголовок"), "zagolovok");
        assert_eq!(slugify("Новый заголовок"), "novyij-zagolovok");
    }

    #[test]
    fn test_multi_letter_transliterations() {
        assert_eq!(slugify("Щука и ёжик"), "schuka-i-yozhik");
        assert_eq!(slugify("Чья шуба"), "chya-shuba");
    }

    #[test]
    fn test_soft_and_hard_signs_are_dropped() {
        assert_eq!(slugify("Объявление"), "obyavlenie");
        assert_eq!(slugify("Мальчик"), "malchik");
    }

    #[test]
    fn test_separators_collapse() {
        assert_eq!(slugify("  hello   --  world "), "-hello-world-");
        assert_eq!(slugify("a\tb\nc"), "a-b-c");
    }

    #[test]
    fn test_ampersand_is_spelled_out() {
        assert_eq!(slugify("Tom & Jerry"), "tom-and-jerry");
        assert_eq!(slugify("Tom &amp; Jerry"), "tom-and-jerry");
    }

    #[test]
    fn test_unknown_symbols_are_removed() {
        assert_eq!(slugify("some_slug"), "someslug");
        assert_eq!(slugify("Цена: 100$!"), "tsena-100");
        assert_eq!(slugify("«Кавычки»"), "kavyichki");
        assert_eq!(slugify("№5"), "5");
    }

    #[test]
    fn test_deterministic() {
        let title = "Заметка про Rust";
        assert_eq!(slugify(title), slugify(title));
        assert_eq!(slugify(title), "zametka-pro-rust");
    }

    #[test]
    fn test_is_valid_slug() {
        assert!(is_valid_slug("New_slug"));
        assert!(is_valid_slug("zagolovok-2"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("with space"));
        assert!(!is_valid_slug("заголовок"));
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("abcdef", 3), "abc");
        assert_eq!(truncate_chars("ab", 3), "ab");
        assert_eq!(truncate_chars("щука", 2), "щу");
    }
}
