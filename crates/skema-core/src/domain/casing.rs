//! Identifier casing conversion.
//!
//! All four converters are pure, total functions: any string input produces
//! a string output, no failure mode. Non-letter characters pass through
//! unchanged except where a split boundary removes them.
//!
//! # A note on asymmetry
//!
//! [`to_pascal_case`] fully re-segments its input (separators *and* camel
//! humps), while [`to_camel_case`] only lowercases the first character.
//! That asymmetry is intentional and matched by callers; do not "unify" the
//! two without auditing every call site that relies on camelCase leaving the
//! tail of the string untouched.

/// Convert an identifier to PascalCase.
///
/// The input is split into words on runs of underscores, hyphens, and
/// whitespace, and additionally before every uppercase letter — so
/// `userProfile` and `UserProfile` segment the same way as `user_profile`.
/// Each word is emitted with its first character uppercased and the
/// remainder lowercased. Empty words from consecutive separators are
/// dropped, so a separator-only input yields an empty string.
///
/// Idempotent: applying it twice gives the same result as applying it once.
pub fn to_pascal_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut word = String::new();

    for ch in input.chars() {
        if ch == '_' || ch == '-' || ch.is_whitespace() {
            flush_word(&mut word, &mut out);
        } else if ch.is_uppercase() {
            // Zero-width boundary: a capital starts a new word.
            flush_word(&mut word, &mut out);
            word.push(ch);
        } else {
            word.push(ch);
        }
    }
    flush_word(&mut word, &mut out);

    out
}

fn flush_word(word: &mut String, out: &mut String) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(&chars.as_str().to_lowercase());
    }
    word.clear();
}

/// Convert an identifier to kebab-case.
///
/// Inserts a hyphen between every adjacent lowercase-letter-then-uppercase-
/// letter pair, then lowercases the whole string. Only camel/Pascal
/// boundaries are split; existing underscore or space boundaries pass
/// through untouched. Callers that need underscore-separated input split as
/// well must normalize through [`to_pascal_case`] first.
pub fn to_kebab_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 4);
    let mut prev_was_lower = false;

    for ch in input.chars() {
        if ch.is_uppercase() && prev_was_lower {
            out.push('-');
        }
        prev_was_lower = ch.is_lowercase();
        out.extend(ch.to_lowercase());
    }

    out
}

/// Convert an identifier to camelCase.
///
/// Lowercases only the first character and leaves the rest unchanged. This
/// deliberately does *not* re-segment words the way [`to_pascal_case`]
/// does; see the module docs.
pub fn to_camel_case(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(input.len());
            out.extend(first.to_lowercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

/// Lowercase every character, no splitting.
pub fn to_lower_case(input: &str) -> String {
    input.to_lowercase()
}
