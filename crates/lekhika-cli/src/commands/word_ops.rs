use std::process;

use lekhika_core::{grapheme_count, is_valid_devanagari_word, sanitize_devanagari_word};

/// Print `valid`/`invalid` per word; exit 1 if any word is invalid.
pub fn validate(words: &[String]) {
    let mut all_valid = true;
    for word in words {
        let valid = is_valid_devanagari_word(word);
        all_valid &= valid;
        println!(
            "{word}\t{}\t{} graphemes",
            if valid { "valid" } else { "invalid" },
            grapheme_count(word)
        );
    }
    if !all_valid {
        process::exit(1);
    }
}

pub fn sanitize(text: &str) {
    println!("{}", sanitize_devanagari_word(text));
}
