//! Noise removal for extracted document text. Line structure survives so the
//! skills-section harvester still sees headers and lists.

use once_cell::sync::Lazy;
use regex::Regex;

static LATEX_COMMAND_WITH_ARG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\[a-zA-Z]+\{[^}]*\}").expect("valid latex regex"));
static LATEX_COMMAND: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\[a-zA-Z]+").expect("valid latex regex"));
static DOLLAR_ARTIFACT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\$|\$[0-9]+").expect("valid dollar regex"));
static MARKDOWN_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]*)\]\([^)]*\)").expect("valid link regex"));
static MARKDOWN_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*#{1,6}[ \t]+").expect("valid heading regex"));
static EMPHASIS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*|__|`").expect("valid emphasis regex"));
static LONE_LIST_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*[0-9]+\.[ \t]*$").expect("valid list number regex"));
static SPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]{2,}").expect("valid space regex"));
static TRAILING_SPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)[ \t]+$").expect("valid trailing space regex"));
static BLANK_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").expect("valid newline regex"));

pub fn clean_document_text(text: &str) -> String {
    let text: String = text
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .chars()
        .filter(|c| !c.is_control() || matches!(c, '\n' | '\t'))
        .collect();

    let text = LATEX_COMMAND_WITH_ARG.replace_all(&text, "");
    let text = LATEX_COMMAND.replace_all(&text, "");
    let text = DOLLAR_ARTIFACT.replace_all(&text, "");
    let text = MARKDOWN_LINK.replace_all(&text, "$1");
    let text = MARKDOWN_HEADING.replace_all(&text, "");
    let text = EMPHASIS.replace_all(&text, "");
    let text = LONE_LIST_NUMBER.replace_all(&text, "");
    let text = SPACE_RUNS.replace_all(&text, " ");
    let text = TRAILING_SPACE.replace_all(&text, "");
    let text = BLANK_RUNS.replace_all(&text, "\n\n");

    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newlines_are_preserved() {
        let cleaned = clean_document_text("Skills: Rust\nTools: Git\n");
        assert_eq!(cleaned, "Skills: Rust\nTools: Git");
    }

    #[test]
    fn test_latex_and_dollar_artifacts_are_removed() {
        let cleaned = clean_document_text(r"\textbf{Name} Jane $1 Doe $$ \newline done");
        assert_eq!(cleaned, "Jane Doe done");
    }

    #[test]
    fn test_markdown_is_flattened() {
        let cleaned = clean_document_text("## Experience\n**Rust** at [Acme](https://acme.io) using `tokio`");
        assert_eq!(cleaned, "Experience\nRust at Acme using tokio");
    }

    #[test]
    fn test_blank_runs_and_lone_numbers_collapse() {
        let cleaned = clean_document_text("Summary\r\n\r\n\r\n\r\n1.\nBuilt APIs   in  Rust\u{0007}");
        assert_eq!(cleaned, "Summary\n\nBuilt APIs in Rust");
    }

    #[test]
    fn test_symbols_in_skill_names_survive() {
        let cleaned = clean_document_text("C++, C#, Node.js, CI/CD");
        assert_eq!(cleaned, "C++, C#, Node.js, CI/CD");
    }
}
