//! Skill Extractor: matches the static taxonomy against free text.
//!
//! Algorithm:
//! 1. Every detection pattern is compiled once into a case-insensitive regex with
//!    symbol-aware boundaries: the characters around a match must not be word
//!    characters, `+` or `#` ("java" never matches inside "javascript", "c" never
//!    inside "c++").
//! 2. Patterns are evaluated longest first. A match lying strictly inside a longer
//!    span already claimed by an accepted pattern is ignored ("spring" inside
//!    "spring boot").
//! 3. Definitions with context phrases need corroboration: anywhere in the text by
//!    default, or inside a ±N character window when windowed validation is on
//!    (then applied to every definition, falling back to category keywords).
//!    Phrases use the same boundaries as terms, so "r language" is not found
//!    inside "other languages".
//! 4. Accepted definitions are canonicalized and deduplicated by (name, category),
//!    then optionally followed by tokens harvested from skills sections.

use std::collections::{HashMap, HashSet};

use regex::Regex;
use tracing::{debug, warn};

use crate::skills::canonical::{display_name, display_token};
use crate::skills::sections::harvest_section_tokens;
use crate::skills::taxonomy::{CategoryDef, TAXONOMY};
use crate::skills::{Category, Skill};

/// Extraction knobs, set once at startup from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractorOptions {
    /// Harvest free-form tokens from "Skills:" style sections.
    pub harvest_sections: bool,
    /// When set, every match needs a context keyword within this many
    /// characters on either side.
    pub context_window: Option<usize>,
}

impl Default for ExtractorOptions {
    fn default() -> Self {
        Self {
            harvest_sections: true,
            context_window: None,
        }
    }
}

struct CompiledPattern {
    category_idx: usize,
    skill_idx: usize,
    len: usize,
    regex: Regex,
}

/// Immutable, precompiled matcher over a taxonomy. Cheap to share behind an `Arc`.
pub struct SkillExtractor {
    taxonomy: &'static [CategoryDef],
    patterns: Vec<CompiledPattern>,
    /// Context phrases per (category, skill) index; absent when none are required.
    context: HashMap<(usize, usize), Vec<Regex>>,
    options: ExtractorOptions,
}

impl SkillExtractor {
    pub fn new(options: ExtractorOptions) -> Self {
        Self::from_taxonomy(TAXONOMY, options)
    }

    pub fn from_taxonomy(taxonomy: &'static [CategoryDef], options: ExtractorOptions) -> Self {
        let mut patterns = Vec::new();
        let mut context = HashMap::new();

        for (category_idx, category) in taxonomy.iter().enumerate() {
            for (skill_idx, def) in category.skills.iter().enumerate() {
                if !def.context.is_empty() {
                    let phrases = def
                        .context
                        .iter()
                        .filter_map(|phrase| match compile_pattern(phrase) {
                            Ok(regex) => Some(regex),
                            Err(e) => {
                                warn!("Skipping context phrase '{phrase}' for '{}': {e}", def.term);
                                None
                            }
                        })
                        .collect::<Vec<_>>();
                    context.insert((category_idx, skill_idx), phrases);
                }
                for pattern in def.patterns() {
                    match compile_pattern(pattern) {
                        Ok(regex) => patterns.push(CompiledPattern {
                            category_idx,
                            skill_idx,
                            len: pattern.chars().count(),
                            regex,
                        }),
                        Err(e) => {
                            warn!("Skipping skill pattern '{pattern}' ({}): {e}", category.category)
                        }
                    }
                }
            }
        }

        // Longest first; stable sort keeps taxonomy order among equal lengths.
        patterns.sort_by(|a, b| b.len.cmp(&a.len));

        debug!("Compiled {} skill patterns", patterns.len());

        Self {
            taxonomy,
            patterns,
            context,
            options,
        }
    }

    pub fn options(&self) -> ExtractorOptions {
        self.options
    }

    fn has_global_context(&self, text: &str, key: (usize, usize)) -> bool {
        match self.context.get(&key) {
            Some(phrases) => phrases.iter().any(|phrase| phrase.is_match(text)),
            None => true,
        }
    }

    fn window_has_context(
        &self,
        text: &str,
        span: (usize, usize),
        radius: usize,
        key: (usize, usize),
        category: Category,
    ) -> bool {
        let (from, to) = char_window(text, span, radius);

        // Definition phrases may cover the match itself ("r programming").
        if let Some(phrases) = self.context.get(&key) {
            return phrases.iter().any(|phrase| {
                find_spans(phrase, text)
                    .into_iter()
                    .any(|(s, e)| from <= s && e <= to)
            });
        }

        let keywords = category.context_keywords();
        if keywords.is_empty() {
            return true;
        }

        // Category keywords must appear outside the matched term.
        let before = text[from..span.0].to_lowercase();
        let after = text[span.1..to].to_lowercase();
        keywords
            .iter()
            .any(|keyword| before.contains(keyword) || after.contains(keyword))
    }

    /// Extracts the set of skills mentioned in `text`.
    pub fn extract(&self, text: &str) -> Vec<Skill> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let mut claimed: Vec<(usize, usize)> = Vec::new();
        let mut accepted: HashSet<(usize, usize)> = HashSet::new();

        for pattern in &self.patterns {
            let key = (pattern.category_idx, pattern.skill_idx);
            let category = self.taxonomy[pattern.category_idx].category;

            let spans: Vec<(usize, usize)> = find_spans(&pattern.regex, text)
                .into_iter()
                .filter(|span| !inside_longer_claim(&claimed, *span))
                .filter(|span| match self.options.context_window {
                    Some(radius) => self.window_has_context(text, *span, radius, key, category),
                    None => true,
                })
                .collect();

            if spans.is_empty() {
                continue;
            }
            if self.options.context_window.is_none() && !self.has_global_context(text, key) {
                continue;
            }

            claimed.extend(spans);
            accepted.insert(key);
        }

        let mut order: Vec<(usize, usize)> = accepted.into_iter().collect();
        order.sort_unstable();

        let mut seen: HashSet<(String, Category)> = HashSet::new();
        let mut skills = Vec::with_capacity(order.len());
        for (category_idx, skill_idx) in order {
            let category = &self.taxonomy[category_idx];
            let skill = Skill::new(
                display_name(category.skills[skill_idx].term),
                category.category,
            );
            if seen.insert(skill.key()) {
                skills.push(skill);
            }
        }

        let taxonomy_hits = skills.len();

        if self.options.harvest_sections {
            for token in harvest_section_tokens(text) {
                let name = display_token(&token);
                let lower = name.to_lowercase();
                if skills.iter().any(|s| s.name.to_lowercase() == lower) {
                    continue;
                }
                let skill = Skill::new(name, Category::SkillsSection);
                if seen.insert(skill.key()) {
                    skills.push(skill);
                }
            }
        }

        debug!(
            "Extracted {} skills ({} taxonomy, {} skills-section) from {} chars",
            skills.len(),
            taxonomy_hits,
            skills.len() - taxonomy_hits,
            text.len()
        );

        skills
    }
}

impl Default for SkillExtractor {
    fn default() -> Self {
        Self::new(ExtractorOptions::default())
    }
}

/// Builds the boundary-aware regex for a literal pattern. Group 1 is the match itself.
fn compile_pattern(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(
        r"(?i)(?:^|[^\w+#])({})(?:[^\w+#]|$)",
        regex::escape(pattern)
    ))
}

/// All non-overlapping occurrences of the pattern, as byte spans of group 1.
/// Restarts at the end of each match so a shared boundary character can serve
/// as the prefix of the next occurrence.
fn find_spans(regex: &Regex, text: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start = 0;
    while start <= text.len() {
        let Some(caps) = regex.captures_at(text, start) else {
            break;
        };
        let Some(m) = caps.get(1) else {
            break;
        };
        spans.push((m.start(), m.end()));
        start = m.end();
    }
    spans
}

fn inside_longer_claim(claimed: &[(usize, usize)], (start, end): (usize, usize)) -> bool {
    claimed
        .iter()
        .any(|&(s, e)| s <= start && end <= e && (e - s) > (end - start))
}

/// Byte offsets of the window reaching `radius` characters past each side of the span.
fn char_window(text: &str, (start, end): (usize, usize), radius: usize) -> (usize, usize) {
    let from = text[..start]
        .char_indices()
        .rev()
        .take(radius)
        .last()
        .map_or(start, |(idx, _)| idx);
    let to = text[end..]
        .char_indices()
        .nth(radius)
        .map_or(text.len(), |(idx, _)| end + idx);
    (from, to)
}
