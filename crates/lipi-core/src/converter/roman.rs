//! Scanner for roman sources: greedy longest-match tokenization.

use super::TranslationMap;
use crate::options::Options;

const TOGGLE: &str = "##";

/// Transliterate `input`, written in a roman scheme, through `map`.
///
/// At each position the longest token (up to the map's maximum length) that
/// the map knows is consumed. Unknown characters are copied one at a time.
/// When the destination is Brahmic, a consonant followed by a vowel takes the
/// vowel's mark, the bare implicit vowel writes nothing, and anything else
/// closes the consonant with a virama (omitted under syncope for non-letters
/// and at the end of input).
pub(super) fn transliterate(input: &str, map: &TranslationMap, options: Options) -> String {
    let chars: Vec<char> = input.chars().collect();
    // room for the ## toggle even in single-character schemes
    let max_len = map.max_token_length().max(TOGGLE.len());

    let mut out = String::with_capacity(input.len() * 3);
    let mut token = String::with_capacity(max_len * 4);
    let mut had_consonant = false;
    let mut skipping_sgml = false;
    let mut toggled = false;
    let mut pos = 0;

    while pos < chars.len() {
        let window = &chars[pos..chars.len().min(pos + max_len)];
        for len in (1..=window.len()).rev() {
            token.clear();
            token.extend(&window[..len]);

            if skipping_sgml {
                skipping_sgml = token != ">";
            } else if token == "<" {
                skipping_sgml = options.skip_sgml;
            } else if token == TOGGLE {
                toggled = !toggled;
                pos += len;
                break;
            }

            if !(skipping_sgml || toggled) {
                if let Some(letter) = map.letter(&token) {
                    if map.to_roman() {
                        out.push_str(letter);
                    } else {
                        if had_consonant {
                            if let Some(mark) = map.mark(&token) {
                                out.push_str(mark);
                            } else if token != map.bare_vowel() {
                                out.push_str(map.virama());
                                out.push_str(letter);
                            }
                        } else {
                            out.push_str(letter);
                        }
                        had_consonant = map.is_consonant(&token);
                    }
                    pos += len;
                    break;
                }
            }

            if len == 1 {
                if had_consonant {
                    had_consonant = false;
                    if !options.syncope {
                        out.push_str(map.virama());
                    }
                }
                out.push_str(&token);
                pos += 1;
            }
        }
    }

    if had_consonant && !options.syncope {
        out.push_str(map.virama());
    }
    out
}
