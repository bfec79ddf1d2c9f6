//! Skills-section harvesting: collects free-form tokens listed under headers
//! such as "Skills:" or "Technical Skills:" that the taxonomy does not know.

use once_cell::sync::Lazy;
use regex::Regex;

/// A line that opens a skill list; group 1 is the rest of the line.
static SKILL_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^\s*(?:[-*•#]+\s*)?(?:technical skills|core skills|key skills|core competencies|skills|expertise|technologies|tools|competencies)\s*:(.*)$",
    )
    .expect("valid skill header regex")
});

/// Headers of resume/JD sections that end a skill list.
static OTHER_SECTION_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^\s*(?:[-*•#]+\s*)?(?:experience|work experience|professional experience|employment|work history|education|projects|summary|profile|objective|certifications|awards|publications|references|interests|responsibilities|requirements|qualifications|about us|benefits)\s*:?\s*$",
    )
    .expect("valid section header regex")
});

/// "Label: items" sub-lines inside a skill block; group 1 is the item list.
static LABELLED_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*[A-Za-z][A-Za-z &/]{1,40}:(.*)$").expect("valid label regex"));

static DELIMITERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[,;|/•·▪●◦\n\t]").expect("valid delimiter regex"));

static CONNECTOR_SPLIT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\s+(?:and|with|using|via|including|&)\s+").expect("valid connector regex")
});

const CONNECTORS: &[&str] = &["and", "with", "using", "via", "etc", "including", "or", "the"];

const MIN_TOKEN_CHARS: usize = 2;
const MAX_TOKEN_CHARS: usize = 40;
const MAX_TOKEN_WORDS: usize = 4;
const MAX_BLOCK_LINES: usize = 30;

/// Returns de-duplicated raw tokens (original casing) in text order.
pub fn harvest_section_tokens(text: &str) -> Vec<String> {
    let lines: Vec<&str> = text.lines().collect();
    let mut tokens: Vec<String> = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let Some(caps) = SKILL_HEADER.captures(lines[i]) else {
            i += 1;
            continue;
        };

        let mut block = caps.get(1).map(|m| m.as_str()).unwrap_or_default().to_string();
        i += 1;

        let mut taken = 0;
        while i < lines.len() && taken < MAX_BLOCK_LINES {
            let line = lines[i];
            if line.trim().is_empty()
                || SKILL_HEADER.is_match(line)
                || OTHER_SECTION_HEADER.is_match(line)
            {
                break;
            }
            let items = LABELLED_LINE
                .captures(line)
                .and_then(|c| c.get(1))
                .map(|m| m.as_str())
                .unwrap_or(line);
            block.push('\n');
            block.push_str(items);
            i += 1;
            taken += 1;
        }

        for token in split_block(&block) {
            if !tokens.iter().any(|t| t.eq_ignore_ascii_case(&token)) {
                tokens.push(token);
            }
        }
    }

    tokens
}

fn split_block(block: &str) -> Vec<String> {
    DELIMITERS
        .split(block)
        .flat_map(|piece| CONNECTOR_SPLIT.split(piece).collect::<Vec<_>>())
        .filter_map(clean_token)
        .collect()
}

fn clean_token(raw: &str) -> Option<String> {
    let token = raw
        .trim()
        .trim_start_matches(['-', '*', '>'])
        .trim_matches(|c: char| c.is_whitespace() || matches!(c, '.' | ':' | '(' | ')' | '[' | ']' | '"' | '\''))
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    let chars = token.chars().count();
    if !(MIN_TOKEN_CHARS..=MAX_TOKEN_CHARS).contains(&chars) {
        return None;
    }
    if token.split(' ').count() > MAX_TOKEN_WORDS {
        return None;
    }
    if CONNECTORS.contains(&token.to_lowercase().as_str()) {
        return None;
    }
    if token.chars().all(|c| c.is_ascii_digit() || c.is_ascii_punctuation() || c == ' ') {
        return None;
    }
    Some(token)
}
