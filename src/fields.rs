use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref LEADING_INTEGER_REGEX: Regex = Regex::new(r"^\s*([+-]?[0-9]+)").unwrap();
    static ref ANSWER_NUMBER_PREFIX_REGEX: Regex = Regex::new(r"^[0-9]+\.\s*").unwrap();
}

/// Reads the integer at the start of `raw` and ignores anything after it,
/// so `"12a"` reads as 12. Returns `None` when there are no leading digits.
pub fn lenient_int(raw: &str) -> Option<i64> {
    LEADING_INTEGER_REGEX
        .captures(raw)
        .and_then(|captures| captures[1].parse().ok())
}

/// Priority marker. Both `TRUE` and `True` appear in the wild.
pub fn flag(raw: &str) -> bool {
    raw.trim().to_lowercase() == "true"
}

pub fn flag_text(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

/// Removes a redundant `"1. "` style numbering from answer text.
pub fn strip_answer_number(raw: &str) -> String {
    ANSWER_NUMBER_PREFIX_REGEX
        .replace(raw, "")
        .trim()
        .to_owned()
}
