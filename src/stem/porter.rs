//! Porter stemming algorithm implementation.
//!
//! This module provides an implementation of the Porter stemming algorithm,
//! reducing English words to an approximate root by ordered suffix removal.
//!
//! # Algorithm
//!
//! The stemmer applies its rewrite rules in five steps:
//! 1. Plurals and -ed/-ing suffixes (1a, 1b, the 1b clean-up, 1c)
//! 2. -ational → -ate, -tional → -tion, etc.
//! 3. -icate → -ic, -ative → "", etc.
//! 4. Remove -al, -ance, -ence, etc.
//! 5. Remove final -e and -ll
//!
//! Words shorter than three letters are returned as they are.
//!
//! # Examples
//!
//! ```
//! use porter_stem::stem::Stemmer;
//! use porter_stem::stem::porter::PorterStemmer;
//!
//! let stemmer = PorterStemmer::new();
//!
//! assert_eq!(stemmer.stem("caresses"), "caress");
//! assert_eq!(stemmer.stem("hopping"), "hop");
//! assert_eq!(stemmer.stem("relational"), "relat");
//! ```

use serde::Serialize;

use crate::config::InputPolicy;
use crate::error::{Result, StemError};
use crate::stem::Stemmer;
use crate::stem::measure::{
    contains_vowel, ends_cvc, ends_with_any, ends_with_double_consonant,
    ends_with_doubled_letter, measure, measure_after_removing,
};
use crate::stem::suffix::{
    STEP2, STEP3, STEP4, SuffixRule, SuffixTable, longest_match, try_replace_end,
};

/// Words shorter than this are never rewritten.
pub const MIN_STEMMABLE_LEN: usize = 3;

const ION: SuffixRule = SuffixRule {
    suffix: "ion",
    replacement: "",
};

/// A stage of the rule pipeline, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Stage {
    Step1a,
    Step1b,
    Step1bExtra,
    Step1c,
    Step2,
    Step3,
    Step4,
    Step5,
}

impl Stage {
    /// Short label, as used in the published description of the algorithm.
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Step1a => "1a",
            Stage::Step1b => "1b",
            Stage::Step1bExtra => "1b-extra",
            Stage::Step1c => "1c",
            Stage::Step2 => "2",
            Stage::Step3 => "3",
            Stage::Step4 => "4",
            Stage::Step5 => "5",
        }
    }
}

/// The working stem after one stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageResult {
    pub stage: Stage,
    pub stem: String,
}

/// Every intermediate stem of one run through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StemTrace {
    pub word: String,
    pub stages: Vec<StageResult>,
    pub stem: String,
}

impl StemTrace {
    /// The working stem right after `stage`, if that stage ran.
    pub fn after(&self, stage: Stage) -> Option<&str> {
        self.stages
            .iter()
            .find(|s| s.stage == stage)
            .map(|s| s.stem.as_str())
    }
}

/// Per-call working state. Created fresh for every word, never shared.
#[derive(Debug)]
struct StemContext {
    stem: String,
    ed_stripped: bool,
    ing_stripped: bool,
}

fn without_suffix<'a>(word: &'a str, suffix: &str) -> &'a str {
    word.strip_suffix(suffix).unwrap_or(word)
}

impl StemContext {
    fn new(word: &str) -> Self {
        StemContext {
            stem: word.to_string(),
            ed_stripped: false,
            ing_stripped: false,
        }
    }

    fn step1a(&mut self) {
        let stem = &mut self.stem;
        try_replace_end(stem, "sses", "ss", true);
        try_replace_end(stem, "ies", "i", true);
        try_replace_end(stem, "ss", "ss", true);
        let keep = stem.ends_with("ss");
        try_replace_end(stem, "s", "", !keep);
    }

    fn step1b(&mut self) {
        if self.stem.ends_with("eed") {
            let condition = measure_after_removing(&self.stem, "eed") > 0;
            try_replace_end(&mut self.stem, "eed", "ee", condition);
        } else if self.stem.ends_with("ed") {
            let condition = contains_vowel(without_suffix(&self.stem, "ed"));
            self.ed_stripped = try_replace_end(&mut self.stem, "ed", "", condition);
        } else {
            // Reached for every other ending; the rewrite itself only fires on -ing.
            let condition = contains_vowel(without_suffix(&self.stem, "ing"));
            self.ing_stripped = try_replace_end(&mut self.stem, "ing", "", condition);
        }
    }

    fn needs_step1b_extra(&self) -> bool {
        self.ed_stripped || self.ing_stripped
    }

    fn step1b_extra(&mut self) {
        let stem = &mut self.stem;
        try_replace_end(stem, "at", "ate", true);
        try_replace_end(stem, "bl", "ble", true);
        try_replace_end(stem, "iz", "ize", true);

        if measure(stem) == 1 && ends_cvc(stem) {
            stem.push('e');
        }
        if ends_with_double_consonant(stem)
            && !ends_with_any(stem, b"lsz")
            && ends_with_doubled_letter(stem)
        {
            stem.pop();
        }
    }

    fn step1c(&mut self) {
        let condition = contains_vowel(without_suffix(&self.stem, "y"));
        try_replace_end(&mut self.stem, "y", "i", condition);
    }

    /// Apply the longest matching rule of `table` when the stem left behind
    /// has a measure above `threshold`.
    fn replace_longest_if(&mut self, table: &SuffixTable, threshold: usize) {
        if measure(&self.stem) == 0 {
            return;
        }
        if let Some(rule) = longest_match(&self.stem, table) {
            let condition = measure_after_removing(&self.stem, rule.suffix) > threshold;
            try_replace_end(&mut self.stem, rule.suffix, rule.replacement, condition);
        }
    }

    fn step2(&mut self) {
        self.replace_longest_if(&STEP2, 0);
    }

    fn step3(&mut self) {
        self.replace_longest_if(&STEP3, 0);
    }

    fn step4(&mut self) {
        let mut matched = longest_match(&self.stem, &STEP4);

        if self.stem.ends_with(ION.suffix)
            && matched.is_none_or(|r| r.suffix.len() < ION.suffix.len())
            && ends_with_any(without_suffix(&self.stem, ION.suffix), b"st")
        {
            matched = Some(ION);
        }

        if let Some(rule) = matched {
            let condition = measure_after_removing(&self.stem, rule.suffix) > 1;
            try_replace_end(&mut self.stem, rule.suffix, rule.replacement, condition);
        }
    }

    fn step5(&mut self) {
        let m = measure_after_removing(&self.stem, "e");
        if m > 1 {
            try_replace_end(&mut self.stem, "e", "", true);
        } else if m == 1 {
            let cvc = ends_cvc(without_suffix(&self.stem, "e"));
            try_replace_end(&mut self.stem, "e", "", !cvc);
        }

        let stem = &mut self.stem;
        if ends_with_double_consonant(stem)
            && measure(stem) > 1
            && ends_with_any(stem, b"l")
            && ends_with_doubled_letter(stem)
        {
            stem.pop();
        }
    }

    /// Run every stage in order, reporting the stem after each one.
    fn run(mut self, mut observe: impl FnMut(Stage, &str)) -> String {
        self.step1a();
        observe(Stage::Step1a, &self.stem);
        self.step1b();
        observe(Stage::Step1b, &self.stem);
        if self.needs_step1b_extra() {
            self.step1b_extra();
            observe(Stage::Step1bExtra, &self.stem);
        }
        self.step1c();
        observe(Stage::Step1c, &self.stem);
        self.step2();
        observe(Stage::Step2, &self.stem);
        self.step3();
        observe(Stage::Step3, &self.stem);
        self.step4();
        observe(Stage::Step4, &self.stem);
        self.step5();
        observe(Stage::Step5, &self.stem);
        self.stem
    }
}

/// Whether `word` is inside the lowercase ASCII contract.
pub fn is_stemmable(word: &str) -> bool {
    word.bytes().all(|b| b.is_ascii_lowercase())
}

/// Porter stemming algorithm implementation.
///
/// The stemmer holds no per-word state, so one instance can be shared across
/// threads freely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PorterStemmer {
    policy: InputPolicy,
}

impl PorterStemmer {
    /// Create a new Porter stemmer that passes unsupported words through.
    pub fn new() -> Self {
        PorterStemmer::default()
    }

    /// Create a Porter stemmer with the given input policy.
    pub fn with_policy(policy: InputPolicy) -> Self {
        PorterStemmer { policy }
    }

    pub fn policy(&self) -> InputPolicy {
        self.policy
    }

    /// Stem `word`, reporting out-of-contract input as an error when the
    /// policy is [`InputPolicy::Reject`].
    pub fn try_stem(&self, word: &str) -> Result<String> {
        self.check(word)?;
        Ok(self.stem(word))
    }

    /// [`PorterStemmer::trace`] under the same input policy as
    /// [`PorterStemmer::try_stem`].
    pub fn try_trace(&self, word: &str) -> Result<StemTrace> {
        self.check(word)?;
        Ok(self.trace(word))
    }

    fn check(&self, word: &str) -> Result<()> {
        if !is_stemmable(word) && self.policy == InputPolicy::Reject {
            return Err(StemError::invalid_input(word));
        }
        Ok(())
    }

    /// Stem `word` and record the working stem after every stage.
    pub fn trace(&self, word: &str) -> StemTrace {
        let mut stages = Vec::new();
        let stem = if word.len() < MIN_STEMMABLE_LEN || !is_stemmable(word) {
            word.to_string()
        } else {
            StemContext::new(word).run(|stage, stem| {
                stages.push(StageResult {
                    stage,
                    stem: stem.to_string(),
                })
            })
        };

        StemTrace {
            word: word.to_string(),
            stages,
            stem,
        }
    }
}

impl Stemmer for PorterStemmer {
    /// Always total: under either policy an unsupported word comes back
    /// unchanged. Use [`PorterStemmer::try_stem`] to surface it instead.
    fn stem(&self, word: &str) -> String {
        if word.len() < MIN_STEMMABLE_LEN || !is_stemmable(word) {
            return word.to_string();
        }
        StemContext::new(word).run(|_, _| {})
    }

    fn name(&self) -> &'static str {
        "porter"
    }
}
