//! Canonicalization of free-text recovery answers.
//!
//! Applied before hashing so that trivial formatting differences do not cause
//! false rejections. The first answer is personal knowledge ("what was your
//! first pet's name") where case and spacing are noise; the second is a short
//! literal token such as a four-digit year, where only surrounding padding is
//! forgiven.

/// Normalize a personal-knowledge answer: lowercase, then strip all
/// whitespace (including internal).
pub fn normalize_answer1(answer: &str) -> String {
    answer
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// Normalize a literal-token answer: trim leading/trailing whitespace only.
/// Case and internal spacing are preserved.
pub fn normalize_answer2(answer: &str) -> String {
    answer.trim().to_string()
}
