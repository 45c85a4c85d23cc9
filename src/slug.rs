//! URL slug generation.
//!
//! Turns free-form text into lowercase ASCII slugs: Unicode-aware
//! lowercasing, a fixed Latin + Cyrillic transliteration table, then every
//! run of characters outside `[0-9a-z]` collapses into a single `-`, with
//! leading and trailing dashes trimmed.
//!
//! Characters the table does not cover (and that are not already `[0-9a-z]`)
//! act as separators, so they never leak into the slug.

/// Convert text to a URL-safe slug.
///
/// ```
/// assert_eq!(htmlkit::slugify("Perché l'erba è verde?"), "perche-l-erba-e-verde");
/// assert_eq!(htmlkit::slugify("Компьютер"), "kompiuter");
/// ```
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut gap = false;
    for c in text.to_lowercase().chars() {
        match transliterate(c) {
            Some(rep) => {
                // Empty replacements (hard/soft signs) vanish without
                // breaking the current word.
                for r in rep.chars() {
                    if gap && !slug.is_empty() {
                        slug.push('-');
                    }
                    gap = false;
                    slug.push(r);
                }
            }
            None if c.is_ascii_lowercase() || c.is_ascii_digit() => {
                if gap && !slug.is_empty() {
                    slug.push('-');
                }
                gap = false;
                slug.push(c);
            }
            None => gap = true,
        }
    }
    slug
}

/// ASCII replacement for a lowercased character, if the table covers it.
fn transliterate(c: char) -> Option<&'static str> {
    let rep = match c {
        // Latin
        'ß' => "sz",
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => "a",
        'æ' => "ae",
        'ç' | 'č' => "c",
        'è' | 'é' | 'ê' | 'ë' | 'ð' => "e",
        'ì' | 'í' | 'î' | 'ï' => "i",
        'ñ' => "n",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' => "o",
        '÷' => "x",
        'ù' | 'ú' | 'û' | 'ü' | 'ů' => "u",
        'ý' | 'ÿ' => "y",
        'þ' => "b",
        'ł' => "l",
        'š' => "s",
        'ž' => "z",
        // Cyrillic
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' => "g",
        'д' => "d",
        'е' | 'ё' | 'э' => "e",
        'ж' => "zh",
        'з' => "z",
        'и' | 'й' => "i",
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
        'х' => "kh",
        'ц' => "ts",
        'ч' => "ch",
        'ш' => "sh",
        'щ' => "shch",
        'ъ' | 'ь' => "",
        'ы' => "y",
        'ю' => "iu",
        'я' => "ia",
        _ => return None,
    };
    Some(rep)
}

// =============================================================================
// Tests
// =============================================================================
