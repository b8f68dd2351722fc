//! Integration tests for the public stemming API: fixtures, invariants and
//! reentrancy.

use std::sync::Arc;
use std::thread;

use porter_stem::prelude::*;

const VOCABULARY: &[&str] = &[
    "caresses", "ponies", "ties", "caress", "cats", "feed", "agreed", "disabled", "plastered",
    "bled", "motoring", "sing", "conflated", "troubled", "sized", "hopping", "tanned",
    "falling", "hissing", "fizzed", "failing", "filing", "happy", "sky", "relational",
    "conditional", "rational", "valenci", "hesitanci", "digitizer", "conformabli",
    "radicalli", "differentli", "vileli", "analogousli", "vietnamization", "predication",
    "operator", "feudalism", "decisiveness", "hopefulness", "callousness", "formaliti",
    "sensitiviti", "sensibiliti", "triplicate", "formative", "formalize", "electriciti",
    "electrical", "hopeful", "goodness", "revival", "allowance", "inference", "airliner",
    "gyroscopic", "adjustable", "defensible", "irritant", "replacement", "adjustment",
    "dependent", "adoption", "homologou", "communism", "activate", "angulariti",
    "homologous", "effective", "bowdlerize", "probate", "rate", "cease", "controll", "roll",
    "meetings", "matting", "mating", "generalizations", "a", "is", "", "yyclep",
];

#[test]
fn test_measure_fixture() {
    let cases = [
        ("tr", 0),
        ("ee", 0),
        ("tree", 0),
        ("y", 0),
        ("by", 0),
        ("trouble", 1),
        ("oats", 1),
        ("trees", 1),
        ("ivy", 1),
        ("troubles", 2),
        ("private", 2),
        ("oaten", 2),
        ("allay", 2),
        ("berhyme", 2),
        ("yclep", 1),
        ("yyclep", 2),
        ("lymoges", 3),
    ];

    for (word, expected) in cases {
        assert_eq!(measure(word), expected, "measure({word:?})");
    }
}

#[test]
fn test_stem_fixture() {
    // Stage-one results of the classic examples.
    let stemmer = PorterStemmer::new();
    for (word, expected) in [
        ("caresses", "caress"),
        ("ponies", "poni"),
        ("agreed", "agree"),
        ("disabled", "disable"),
        ("matting", "mat"),
        ("mating", "mate"),
        ("meetings", "meet"),
    ] {
        let trace = stemmer.trace(word);
        let step1 = trace
            .after(Stage::Step1bExtra)
            .or(trace.after(Stage::Step1b))
            .unwrap();
        assert_eq!(step1, expected, "{word}");
    }

    // And the full pipeline.
    for (word, expected) in [
        ("caresses", "caress"),
        ("ponies", "poni"),
        ("agreed", "agre"),
        ("disabled", "disabl"),
        ("matting", "mat"),
        ("mating", "mate"),
        ("meetings", "meet"),
        ("triplicate", "triplic"),
        ("formative", "form"),
        ("formalize", "formal"),
        ("electrical", "electr"),
        ("goodness", "good"),
        ("inference", "infer"),
        ("angulariti", "angular"),
    ] {
        assert_eq!(stem(word), expected, "stem({word:?})");
    }
}

#[test]
fn test_determinism() {
    let stemmer = PorterStemmer::new();
    for word in VOCABULARY {
        assert_eq!(stemmer.stem(word), stemmer.stem(word));
    }
}

#[test]
fn test_length_bound() {
    for word in VOCABULARY {
        assert!(
            stem(word).len() <= word.len() + 1,
            "stem({word:?}) = {:?}",
            stem(word)
        );
    }
}

#[test]
fn test_short_words_identity() {
    for word in ["", "a", "y", "is", "by", "ss", "ed"] {
        assert_eq!(stem(word), word);
    }
}

#[test]
fn test_trace_agrees_with_stem() {
    let stemmer = PorterStemmer::new();
    for word in VOCABULARY {
        let trace = stemmer.trace(word);
        assert_eq!(trace.stem, stemmer.stem(word), "{word}");
        if let Some(last) = trace.stages.last() {
            assert_eq!(last.stage, Stage::Step5);
            assert_eq!(last.stem, trace.stem);
        }
    }
}

#[test]
fn test_shared_stemmer_across_threads() {
    let stemmer = Arc::new(PorterStemmer::new());
    let expected: Vec<String> = VOCABULARY.iter().map(|w| stem(w)).collect();

    let handles: Vec<_> = (0..8)
        .map(|offset| {
            let stemmer = Arc::clone(&stemmer);
            thread::spawn(move || {
                // Each thread walks the vocabulary from a different start.
                let n = VOCABULARY.len();
                (0..n * 20)
                    .map(|i| {
                        let idx = (i + offset * 7) % n;
                        (idx, stemmer.stem(VOCABULARY[idx]))
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        for (idx, result) in handle.join().unwrap() {
            assert_eq!(result, expected[idx], "word {:?}", VOCABULARY[idx]);
        }
    }
}

#[test]
fn test_batch_matches_single_calls() -> Result<()> {
    let config = StemConfig {
        parallel: ParallelConfig {
            enabled: true,
            min_batch_size: 8,
            num_threads: Some(4),
        },
        ..StemConfig::default()
    };
    let batch = BatchStemmer::new(config)?;

    let words: Vec<&str> = VOCABULARY.iter().copied().cycle().take(5000).collect();
    let expected: Vec<String> = words.iter().map(|w| stem(w)).collect();
    assert_eq!(batch.stem_all(&words), expected);
    Ok(())
}
