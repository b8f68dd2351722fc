//! VC measure and the letter-class predicates the rules are gated on.
//!
//! A word is viewed as `[C](VC)^m[V]`, where `C` and `V` are maximal runs of
//! consonants and vowels; the measure is `m`. The letter `y` is treated as a
//! vowel when it follows a consonant (or opens a word with no vowel before
//! the next consonant run) and as a consonant after a vowel.
//!
//! All functions work on bytes. Anything outside `a..=z` is simply a
//! consonant, which keeps every function total.

#[inline]
fn is_vowel(b: u8) -> bool {
    matches!(b, b'a' | b'e' | b'i' | b'o' | b'u')
}

#[inline]
fn is_vowel_or_y(b: u8) -> bool {
    is_vowel(b) || b == b'y'
}

/// Advance `pos` over bytes satisfying `pred`.
#[inline]
fn skip_while(bytes: &[u8], mut pos: usize, pred: impl Fn(u8) -> bool) -> usize {
    while pos < bytes.len() && pred(bytes[pos]) {
        pos += 1;
    }
    pos
}

/// Try to read one VC group starting exactly at `start`.
///
/// A group is: an optional leading `y` taken as a consonant, a consonant run,
/// one vowel (`y` included), further plain vowels, one closing consonant (`y`
/// included) and a trailing consonant run (`y` excluded). Returns the end of
/// the group.
fn vc_group_at(bytes: &[u8], start: usize) -> Option<usize> {
    let leading_y: &[usize] = if bytes.get(start) == Some(&b'y') {
        &[1, 0]
    } else {
        &[0]
    };

    for &skip in leading_y {
        let pos = skip_while(bytes, start + skip, |b| !is_vowel_or_y(b));
        if pos >= bytes.len() {
            continue;
        }
        // bytes[pos] is a vowel or `y` here.
        let pos = skip_while(bytes, pos + 1, is_vowel);
        if pos >= bytes.len() {
            continue;
        }
        return Some(skip_while(bytes, pos + 1, |b| !is_vowel_or_y(b)));
    }
    None
}

/// Count the VC transitions of `word`. Linear in the length of `word`.
///
/// ```
/// use porter_stem::stem::measure::measure;
///
/// assert_eq!(measure("tree"), 0);
/// assert_eq!(measure("trouble"), 1);
/// assert_eq!(measure("troubles"), 2);
/// ```
pub fn measure(word: &str) -> usize {
    let bytes = word.as_bytes();
    let mut count = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        match vc_group_at(bytes, pos) {
            Some(end) => {
                count += 1;
                pos = end;
            }
            // A failed match at `pos` fails at every later position too.
            None => break,
        }
    }

    count
}

/// Measure of `word` with `suffix` stripped, if `word` ends with it.
/// Otherwise the measure of `word` itself.
pub fn measure_after_removing(word: &str, suffix: &str) -> usize {
    measure(word.strip_suffix(suffix).unwrap_or(word))
}

/// Whether `word` contains a vowel (`y` counts).
pub fn contains_vowel(word: &str) -> bool {
    word.bytes().any(is_vowel_or_y)
}

/// Whether `word` ends in two consonants (`y` counts as a consonant).
///
/// The two letters need not be identical; callers that collapse a doubled
/// letter check that separately.
pub fn ends_with_double_consonant(word: &str) -> bool {
    match word.as_bytes() {
        [.., a, b] => !is_vowel(*a) && !is_vowel(*b),
        _ => false,
    }
}

/// Whether the last two letters of `word` are the same letter.
pub fn ends_with_doubled_letter(word: &str) -> bool {
    matches!(word.as_bytes(), [.., a, b] if a == b)
}

/// Whether `word` ends consonant-vowel-consonant, the final consonant not
/// being `w`, `x` or `y`.
pub fn ends_cvc(word: &str) -> bool {
    match word.as_bytes() {
        [.., c1, v, c2] => {
            !is_vowel(*c1)
                && is_vowel_or_y(*v)
                && !is_vowel(*c2)
                && !matches!(c2, b'w' | b'x' | b'y')
        }
        _ => false,
    }
}

/// Whether the last letter of `word` is one of `letters`.
pub fn ends_with_any(word: &str, letters: &[u8]) -> bool {
    word.as_bytes()
        .last()
        .is_some_and(|last| letters.contains(last))
}
