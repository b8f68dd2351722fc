//! Suffix rule tables and the suffix-rewriting primitives.
//!
//! Each table groups its rules by the second-to-last letter of the suffix, so
//! a lookup only inspects the rules that could possibly match the word.

/// A single `suffix -> replacement` rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixRule {
    pub suffix: &'static str,
    pub replacement: &'static str,
}

const fn rule(suffix: &'static str, replacement: &'static str) -> SuffixRule {
    SuffixRule {
        suffix,
        replacement,
    }
}

/// Immutable mapping from a grouping letter to an ordered list of rules.
#[derive(Debug)]
pub struct SuffixTable {
    groups: &'static [(u8, &'static [SuffixRule])],
}

impl SuffixTable {
    /// Rules whose suffix has `key` as its second-to-last letter.
    pub fn group(&self, key: u8) -> &'static [SuffixRule] {
        self.groups
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, rules)| *rules)
            .unwrap_or(&[])
    }

    /// Every rule in the table, group by group.
    pub fn rules(&self) -> impl Iterator<Item = (u8, &'static SuffixRule)> + '_ {
        self.groups
            .iter()
            .flat_map(|(key, rules)| rules.iter().map(move |r| (*key, r)))
    }
}

/// Double suffixes mapped to single ones.
pub static STEP2: SuffixTable = SuffixTable {
    groups: &[
        (b'a', &[rule("ational", "ate"), rule("tional", "tion")]),
        (b'c', &[rule("enci", "ence"), rule("anci", "ance")]),
        (b'e', &[rule("izer", "ize")]),
        (
            b'l',
            &[
                rule("bli", "ble"),
                rule("alli", "al"),
                rule("entli", "ent"),
                rule("eli", "e"),
                rule("ousli", "ous"),
            ],
        ),
        (
            b'o',
            &[
                rule("ization", "ize"),
                rule("ation", "ate"),
                rule("ator", "ate"),
            ],
        ),
        (
            b's',
            &[
                rule("alism", "al"),
                rule("iveness", "ive"),
                rule("fulness", "ful"),
                rule("ousness", "ous"),
            ],
        ),
        (
            b't',
            &[
                rule("aliti", "al"),
                rule("iviti", "ive"),
                rule("biliti", "ble"),
            ],
        ),
        (b'g', &[rule("logi", "log")]),
    ],
};

/// -ic-, -full, -ness etc.
pub static STEP3: SuffixTable = SuffixTable {
    groups: &[
        (b't', &[rule("icate", "ic"), rule("iciti", "ic")]),
        (b'v', &[rule("ative", "")]),
        (b'z', &[rule("alize", "al")]),
        (b'a', &[rule("ical", "ic")]),
        (b'u', &[rule("ful", "")]),
        (b's', &[rule("ness", "")]),
    ],
};

/// Suffixes removed outright once the measure allows it.
pub static STEP4: SuffixTable = SuffixTable {
    groups: &[
        (b'a', &[rule("al", "")]),
        (b'c', &[rule("ance", ""), rule("ence", "")]),
        (b'e', &[rule("er", "")]),
        (b'i', &[rule("ic", "")]),
        (b'l', &[rule("able", ""), rule("ible", "")]),
        (
            b'n',
            &[
                rule("ant", ""),
                rule("ement", ""),
                rule("ment", ""),
                rule("ent", ""),
            ],
        ),
        (b'o', &[rule("ou", "")]),
        (b's', &[rule("ism", "")]),
        (b't', &[rule("ate", ""), rule("iti", "")]),
        (b'u', &[rule("ous", "")]),
        (b'v', &[rule("ive", "")]),
        (b'z', &[rule("ize", "")]),
    ],
};

/// The longest rule of `table` whose suffix ends `word`.
///
/// Only the group keyed by the word's second-to-last letter is searched. On
/// equal lengths the earlier rule wins. `None` for words shorter than two
/// letters or when nothing matches.
pub fn longest_match(word: &str, table: &SuffixTable) -> Option<SuffixRule> {
    let bytes = word.as_bytes();
    if bytes.len() < 2 {
        return None;
    }

    let mut best: Option<SuffixRule> = None;
    for candidate in table.group(bytes[bytes.len() - 2]) {
        if word.ends_with(candidate.suffix)
            && best.is_none_or(|b| candidate.suffix.len() > b.suffix.len())
        {
            best = Some(*candidate);
        }
    }
    best
}

/// Rewrite the end of `stem` in place when `condition` holds and it ends with
/// `suffix`. Returns whether the rewrite happened.
pub fn try_replace_end(
    stem: &mut String,
    suffix: &str,
    replacement: &str,
    condition: bool,
) -> bool {
    if !condition || !stem.ends_with(suffix) {
        return false;
    }
    stem.truncate(stem.len() - suffix.len());
    stem.push_str(replacement);
    true
}
