//! Scanner for Brahmic sources: one code point per token.

use super::TranslationMap;

/// Transliterate `input`, written in a Brahmic scheme, through `map`.
///
/// A consonant written into a roman destination leaves its implicit vowel
/// pending; the next mark replaces it, anything else flushes it. `##` pairs
/// toggle verbatim copying, and a lone `#` is kept as text.
pub(super) fn transliterate(input: &str, map: &TranslationMap) -> String {
    let mut out = String::with_capacity(input.len());
    let mut buf = [0u8; 4];
    let mut had_roman_consonant = false;
    let mut dangling_hash = false;
    let mut skipping = false;

    for ch in input.chars() {
        if ch == '#' {
            if dangling_hash {
                skipping = !skipping;
                dangling_hash = false;
            } else {
                dangling_hash = true;
            }
            if had_roman_consonant {
                out.push_str(map.inherent_vowel());
                had_roman_consonant = false;
            }
            continue;
        }
        if dangling_hash {
            out.push('#');
            dangling_hash = false;
        }
        if skipping {
            out.push(ch);
            continue;
        }

        let glyph: &str = ch.encode_utf8(&mut buf);
        if let Some(mark) = map.mark(glyph) {
            out.push_str(mark);
            had_roman_consonant = false;
            continue;
        }
        if had_roman_consonant {
            out.push_str(map.inherent_vowel());
            had_roman_consonant = false;
        }
        match map.letter(glyph) {
            Some(letter) if !letter.is_empty() => {
                out.push_str(letter);
                had_roman_consonant = map.to_roman() && map.is_consonant(glyph);
            }
            _ => out.push(ch),
        }
    }

    if had_roman_consonant {
        out.push_str(map.inherent_vowel());
    }
    if dangling_hash {
        out.push('#');
    }
    out
}
