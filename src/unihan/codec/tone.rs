//! Pinyin tone-mark decoding.
//!
//! Unihan writes Mandarin readings with tone diacritics (`jià`, `lǜ`). This
//! module turns them into the easy-to-type numbered form (`jia4`, `lv4`):
//! plain ASCII letters followed by a tone digit, with `ü` spelled `v`.

use log::warn;

use crate::unihan::types::error::RecordError;

/// Tone number used when a syllable carries no tone mark.
pub const NEUTRAL_TONE: u8 = 5;

const COMBINING_DIAERESIS: char = '\u{0308}';

/// What a single scalar contributes to the decoded syllable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ToneMark {
    /// Tone number, or `None` when the character does not set a tone.
    tone: Option<u8>,
    /// Plain letter appended to the output, if any.
    letter: Option<char>,
}

const fn mark(tone: u8, letter: char) -> Option<ToneMark> {
    Some(ToneMark {
        tone: Some(tone),
        letter: Some(letter),
    })
}

const fn combining(tone: u8) -> Option<ToneMark> {
    Some(ToneMark {
        tone: Some(tone),
        letter: None,
    })
}

/// Looks up a tone-bearing scalar.
///
/// Combining marks attach to the preceding letter and emit nothing.
/// Precomposed letters emit their bare form.
fn tone_mark(c: char) -> Option<ToneMark> {
    match c {
        // Combining marks
        '\u{0304}' => combining(1),
        '\u{0301}' => combining(2),
        '\u{030C}' => combining(3),
        '\u{0300}' => combining(4),

        'ā' => mark(1, 'a'),
        'á' => mark(2, 'a'),
        'ǎ' => mark(3, 'a'),
        'à' => mark(4, 'a'),

        'ē' => mark(1, 'e'),
        'é' => mark(2, 'e'),
        'ě' => mark(3, 'e'),
        'è' => mark(4, 'e'),

        'ī' => mark(1, 'i'),
        'í' => mark(2, 'i'),
        'ǐ' => mark(3, 'i'),
        'ì' => mark(4, 'i'),

        'ō' => mark(1, 'o'),
        'ó' => mark(2, 'o'),
        'ǒ' => mark(3, 'o'),
        'ò' => mark(4, 'o'),

        'ū' => mark(1, 'u'),
        'ú' => mark(2, 'u'),
        'ǔ' => mark(3, 'u'),
        'ù' => mark(4, 'u'),

        // ü is written v; the bare letter leaves the tone alone so a
        // following combining mark can still set it.
        'ü' => Some(ToneMark {
            tone: None,
            letter: Some('v'),
        }),
        'ǖ' => mark(1, 'v'),
        'ǘ' => mark(2, 'v'),
        'ǚ' => mark(3, 'v'),
        'ǜ' => mark(4, 'v'),

        // Syllabic n and m, used by a handful of interjections
        'ń' => mark(2, 'n'),
        'ň' => mark(3, 'n'),
        'ǹ' => mark(4, 'n'),
        'ḿ' => mark(2, 'm'),

        _ => None,
    }
}

/// Converts a diacritic-bearing pinyin syllable to its tone-numbered form.
///
/// Returns the plain ASCII spelling followed by the tone digit (1–5, where 5
/// is the neutral tone used when no mark is present).
///
/// # Examples
/// ```
/// use unihan_index::codec::tone::decode_tone;
///
/// assert_eq!(decode_tone("jià").unwrap(), "jia4");
/// assert_eq!(decode_tone("de").unwrap(), "de5");
/// assert_eq!(decode_tone("lǜ").unwrap(), "lv4");
/// ```
///
/// # Errors
/// Returns [`RecordError::InvalidCharacter`] for any character that is
/// neither a lowercase ASCII letter nor a known tone-bearing form.
pub fn decode_tone(syllable: &str) -> Result<String, RecordError> {
    let mut tone = NEUTRAL_TONE;
    let mut word = String::with_capacity(syllable.len() + 1);

    for c in syllable.chars() {
        if let Some(found) = tone_mark(c) {
            if let Some(t) = found.tone {
                tone = t;
            }
            if let Some(letter) = found.letter {
                word.push(letter);
            }
        } else if c == COMBINING_DIAERESIS {
            if word.ends_with('u') {
                word.pop();
                word.push('v');
            } else {
                warn!("Stray combining diaeresis in pinyin '{}', ignoring", syllable);
            }
        } else if c.is_ascii_lowercase() {
            word.push(c);
        } else {
            return Err(RecordError::InvalidCharacter {
                character: c,
                syllable: syllable.to_string(),
            });
        }
    }

    word.push(char::from(b'0' + tone));
    Ok(word)
}
