// Unit tests for the Normalizer.
//
// Checks the token invariants (no punctuation, no digits, no stop words,
// lowercase alphabetic only) over a spread of awkward inputs, plus
// determinism and the empty-result cases.

use docmatch::text::normalizer::{is_punctuation, Normalizer};
use docmatch::text::tokens::TokenSet;

const SAMPLES: &[&str] = &[
    "The quick, quick fox 123 runs.",
    "",
    "    ",
    "!!!???...,,,;;;",
    "0123456789 42 3.14159 1e10",
    "Hello, World! HELLO world... hello-world",
    "It's a well-known fact: e-mail@example.com costs $5.99 (approx.)",
    "Tab\tseparated\nnew\nlines\r\nand  double  spaces",
    "Ünïcödé — “quotes” «guillemets» ‘single’ … ellipsis",
    "MiXeD CaSe WoRdS and THE stop WORDS of THE language",
    "x1y2z3 abc123def 2024-01-01 v2.0.1",
    "emoji 🎉 party 🚀 launch ✓ done",
    "Ⅻ roman ² squared ½ half ٣ arabic-indic",
];

fn assert_token_invariants(normalizer: &Normalizer, tokens: &TokenSet, input: &str) {
    for token in tokens.iter() {
        assert!(!token.is_empty(), "empty token from {input:?}");
        assert!(
            token.chars().all(char::is_alphabetic),
            "non-alphabetic token {token:?} from {input:?}"
        );
        assert!(
            !token.chars().any(|c| c.is_ascii_digit()),
            "digit in token {token:?} from {input:?}"
        );
        assert!(
            !token.chars().any(is_punctuation),
            "punctuation in token {token:?} from {input:?}"
        );
        assert_eq!(
            token,
            token.to_lowercase(),
            "token {token:?} from {input:?} is not lowercase"
        );
        assert!(
            !normalizer.is_stop_word(token),
            "stop word {token:?} survived from {input:?}"
        );
    }
}

// ============================================================
// Invariants
// ============================================================

#[test]
fn english_output_satisfies_token_invariants() {
    let normalizer = Normalizer::english();
    for input in SAMPLES {
        let tokens = normalizer.normalize(input);
        assert_token_invariants(&normalizer, &tokens, input);
    }
}

#[test]
fn custom_list_output_satisfies_token_invariants() {
    let normalizer = Normalizer::with_stop_words(["the", "and", "of", "it's", "a"]);
    for input in SAMPLES {
        let tokens = normalizer.normalize(input);
        assert_token_invariants(&normalizer, &tokens, input);
    }
}

#[test]
fn normalization_is_deterministic() {
    let normalizer = Normalizer::english();
    for input in SAMPLES {
        let first = normalizer.normalize(input);
        let second = normalizer.normalize(input);
        assert_eq!(first, second, "non-deterministic for {input:?}");

        // A fresh normalizer gives the same answer too.
        let third = Normalizer::english().normalize(input);
        assert_eq!(first, third, "differs across instances for {input:?}");
    }
}

// ============================================================
// Scenarios
// ============================================================

#[test]
fn quick_fox_scenario() {
    let normalizer = Normalizer::with_stop_words(["the"]);
    let tokens = normalizer.normalize("The quick, quick fox 123 runs.");
    let expected: TokenSet = ["quick", "fox", "runs"].into_iter().collect();
    assert_eq!(tokens, expected);
}

#[test]
fn case_variants_collapse_to_one_token() {
    let normalizer = Normalizer::with_stop_words(Vec::<String>::new());
    let tokens = normalizer.normalize("Hello HELLO hello hElLo");
    assert_eq!(tokens.len(), 1);
    assert!(tokens.contains("hello"));
}

#[test]
fn english_drops_common_function_words() {
    let normalizer = Normalizer::english();
    let tokens = normalizer.normalize("The cat and the dog were in the garden");
    assert!(!tokens.contains("the"));
    assert!(!tokens.contains("and"));
    assert!(tokens.contains("cat"));
    assert!(tokens.contains("dog"));
    assert!(tokens.contains("garden"));
}

#[test]
fn stop_word_only_and_symbol_only_inputs_are_empty() {
    let normalizer = Normalizer::english();
    assert!(normalizer.normalize("the and of to in").is_empty());
    assert!(normalizer.normalize("--- *** 123 ###").is_empty());
    assert!(normalizer.normalize("").is_empty());
}
