//! Shared tokenizer used by every metric calculator.
//!
//! One implementation, one behavior: lowercase, replace every run of
//! characters outside `[\w']` with a space, split on whitespace, drop
//! empty tokens. The character class is Unicode-aware, so accented
//! letters survive intact ("marrón" stays one token). Deterministic for
//! a given input; empty or whitespace-only input yields an empty Vec.

use once_cell::sync::Lazy;
use regex::Regex;

static NON_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w']+").expect("tokenizer pattern is valid"));

/// Split text into lowercase word tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    let lowered = text.to_lowercase();
    NON_WORD
        .split(&lowered)
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Token count of a text, as used by the rate metrics.
pub fn word_count(text: &str) -> usize {
    tokenize(text).len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tokenize_lowercases_and_strips_punctuation() {
        assert_eq!(
            tokenize("Bueno, eh... ¡Empezamos YA!"),
            vec!["bueno", "eh", "empezamos", "ya"]
        );
    }

    #[test]
    fn test_tokenize_preserves_diacritics() {
        assert_eq!(
            tokenize("El zorro marrón saltó rápido"),
            vec!["el", "zorro", "marrón", "saltó", "rápido"]
        );
    }

    #[test]
    fn test_tokenize_keeps_apostrophes() {
        assert_eq!(tokenize("it's o'clock"), vec!["it's", "o'clock"]);
    }

    #[test]
    fn test_tokenize_empty_and_whitespace() {
        assert_eq!(tokenize(""), Vec::<String>::new());
        assert_eq!(tokenize("   \t\n "), Vec::<String>::new());
    }

    #[test]
    fn test_tokenize_is_deterministic() {
        let text = "Una prueba, una prueba más.";
        assert_eq!(tokenize(text), tokenize(text));
    }

    #[test]
    fn test_word_count() {
        assert_eq!(
            word_count("el veloz zorro marron salta sobre el perro perezoso"),
            9
        );
        assert_eq!(word_count(""), 0);
    }
}
