// File: src/core/morphology.rs
//! Heuristic "-ing" and "-ed" forms for English verb stems.
//!
//! Lookup tables win over rules, rules win over plain suffixing. The output is a
//! candidate string only; nothing here claims the result is real English.

use crate::core::chars::{is_consonant, is_vowel};

const ING: &str = "ing";
const ED: &str = "ed";

fn irregular_ing(verb: &str) -> Option<&'static str> {
    match verb {
        "be" => Some("being"),
        "lie" => Some("lying"),
        "die" => Some("dying"),
        _ => None,
    }
}

fn irregular_past(verb: &str) -> Option<&'static str> {
    match verb {
        "be" => Some("been"),
        "have" => Some("had"),
        "go" => Some("gone"),
        "do" => Some("done"),
        "see" => Some("seen"),
        "make" => Some("made"),
        "take" => Some("took"),
        "find" => Some("found"),
        "think" => Some("thought"),
        "teach" => Some("taught"),
        "grow" => Some("grown"),
        "drive" => Some("drove"),
        "wake" => Some("woke"),
        _ => None,
    }
}

/// Past forms identical to the stem.
fn is_unchanged_past(verb: &str) -> bool {
    matches!(verb, "read" | "cut" | "put" | "let" | "hit" | "quit" | "shut")
}

/// Consonant-vowel-consonant ending whose final letter is not w, x or y.
fn ends_with_cvc(chars: &[char]) -> bool {
    match chars {
        [.., c1, v, c2] => {
            !matches!(c2.to_ascii_lowercase(), 'w' | 'x' | 'y')
                && is_consonant(*c2)
                && is_vowel(*v)
                && is_consonant(*c1)
        }
        _ => false,
    }
}

fn with_suffix(stem: &[char], suffix: &str) -> String {
    let mut out: String = stem.iter().collect();
    out.push_str(suffix);
    out
}

fn doubled(chars: &[char], suffix: &str) -> String {
    let mut out: String = chars.iter().collect();
    if let Some(&last) = chars.last() {
        out.push(last);
    }
    out.push_str(suffix);
    out
}

/// Candidate gerund for `verb`, or `None` for an empty stem.
pub fn generate_ing_form(verb: &str) -> Option<String> {
    if verb.is_empty() {
        return None;
    }
    if let Some(form) = irregular_ing(verb) {
        return Some(form.to_string());
    }

    let chars: Vec<char> = verb.chars().collect();
    let form = match chars.as_slice() {
        [stem @ .., 'i', 'e'] => with_suffix(stem, "ying"),
        [.., 'e' | 'o' | 'y', 'e'] => with_suffix(&chars, ING),
        [stem @ .., 'e'] => with_suffix(stem, ING),
        _ if ends_with_cvc(&chars) => doubled(&chars, ING),
        _ => with_suffix(&chars, ING),
    };
    Some(form)
}

/// Candidate past participle for `verb`, or `None` for an empty stem.
pub fn generate_ed_form(verb: &str) -> Option<String> {
    if verb.is_empty() {
        return None;
    }
    if let Some(form) = irregular_past(verb) {
        return Some(form.to_string());
    }
    if is_unchanged_past(verb) {
        return Some(verb.to_string());
    }

    let chars: Vec<char> = verb.chars().collect();
    let form = match chars.as_slice() {
        [.., 'e', 'd'] => verb.to_string(),
        [.., 'e'] => with_suffix(&chars, "d"),
        [stem @ .., c, 'y'] if is_consonant(*c) => {
            let mut out = with_suffix(stem, "");
            out.push(*c);
            out.push_str("ied");
            out
        }
        _ if ends_with_cvc(&chars) => doubled(&chars, ED),
        _ => with_suffix(&chars, ED),
    };
    Some(form)
}
