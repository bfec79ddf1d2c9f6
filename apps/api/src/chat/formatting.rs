//! Repairs the formatting artifacts small chat models tend to produce:
//! markdown emphasis, stray `$1` substitutions, and list numbers split from
//! their text by a newline.

use once_cell::sync::Lazy;
use regex::Regex;

fn re(pattern: &str) -> Regex {
    Regex::new(pattern).expect("valid formatting regex")
}

static DOLLAR_GROUP_RE: Lazy<Regex> = Lazy::new(|| re(r"\$\d+|\$\$"));
static EMPHASIS_RE: Lazy<Regex> = Lazy::new(|| re(r"[*`]|#{2,}"));
static LINK_RE: Lazy<Regex> = Lazy::new(|| re(r"\[([^\]]*)\]\([^)]*\)"));
static SPLIT_NUMBER_RE: Lazy<Regex> = Lazy::new(|| re(r"(\d+)[.:][ \t]*\n+\s*"));
static LONE_NUMBER_RE: Lazy<Regex> = Lazy::new(|| re(r"(?m)^\d+\.[ \t]*$"));
static SPLIT_BULLET_RE: Lazy<Regex> = Lazy::new(|| re(r"(?m)^[ \t]*[-•][ \t]*\n+\s*"));
static BULLET_RE: Lazy<Regex> = Lazy::new(|| re(r"(?m)^[ \t]*•[ \t]+"));
static NUMBER_SPACING_RE: Lazy<Regex> = Lazy::new(|| re(r"(\d+)\.[ \t]{2,}"));
static SPACE_RUN_RE: Lazy<Regex> = Lazy::new(|| re(r"[ \t]{2,}"));
static BLANK_RUN_RE: Lazy<Regex> = Lazy::new(|| re(r"\n{3,}"));
static TRAILING_SPACE_RE: Lazy<Regex> = Lazy::new(|| re(r"(?m)[ \t]+$"));

pub fn fix_response_formatting(text: &str) -> String {
    let text = DOLLAR_GROUP_RE.replace_all(text, "");
    let text = LINK_RE.replace_all(&text, "$1");
    let text = EMPHASIS_RE.replace_all(&text, "");
    let text = SPLIT_NUMBER_RE.replace_all(&text, "$1. ");
    let text = LONE_NUMBER_RE.replace_all(&text, "");
    let text = SPLIT_BULLET_RE.replace_all(&text, "- ");
    let text = BULLET_RE.replace_all(&text, "- ");
    let text = NUMBER_SPACING_RE.replace_all(&text, "$1. ");
    let text = SPACE_RUN_RE.replace_all(&text, " ");
    let text = BLANK_RUN_RE.replace_all(&text, "\n\n");
    let text = TRAILING_SPACE_RE.replace_all(&text, "");
    text.trim().to_string()
}
