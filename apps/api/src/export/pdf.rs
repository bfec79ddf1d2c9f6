//! Renders the text report onto A4 pages with the built-in Helvetica fonts.

use anyhow::anyhow;
use printpdf::{BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfLayerReference, Rgb};

use crate::export::report::REPORT_TITLE;

const PAGE_WIDTH: Mm = Mm(210.0);
const PAGE_HEIGHT: Mm = Mm(297.0);
const MARGIN_LEFT: f32 = 18.0;
const MARGIN_TOP: f32 = 18.0;
const MARGIN_BOTTOM: f32 = 18.0;
const PT_TO_MM: f32 = 0.352_778;
const MAX_LINE_CHARS: usize = 80;

const TITLE_SIZE: f32 = 18.0;
const HEADING_SIZE: f32 = 12.0;
const BODY_SIZE: f32 = 10.0;
const FOOTER_SIZE: f32 = 9.0;

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

pub fn render_pdf(report: &str) -> anyhow::Result<Vec<u8>> {
    let (doc, page, layer) = PdfDocument::new(REPORT_TITLE, PAGE_WIDTH, PAGE_HEIGHT, "Layer 1");
    let fonts = Fonts {
        regular: doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| anyhow!("failed to load Helvetica: {e}"))?,
        bold: doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| anyhow!("failed to load Helvetica-Bold: {e}"))?,
    };

    let mut current = doc.get_page(page).get_layer(layer);
    let mut y = PAGE_HEIGHT.0 - MARGIN_TOP;

    for raw in report.lines() {
        let text = to_win_ansi(raw);
        let is_title = raw == REPORT_TITLE;
        let (size, font) = if is_title {
            (TITLE_SIZE, &fonts.bold)
        } else if is_heading(&text) {
            (HEADING_SIZE, &fonts.bold)
        } else {
            (BODY_SIZE, &fonts.regular)
        };

        let pieces = wrap(&text, MAX_LINE_CHARS);
        for piece in pieces {
            if y < MARGIN_BOTTOM {
                set_gray(&current, 0.5);
                current.use_text(
                    "-- Continued on next page --",
                    FOOTER_SIZE,
                    Mm(MARGIN_LEFT),
                    Mm(MARGIN_BOTTOM / 2.0),
                    &fonts.regular,
                );
                let (next_page, next_layer) = doc.add_page(PAGE_WIDTH, PAGE_HEIGHT, "Layer 1");
                current = doc.get_page(next_page).get_layer(next_layer);
                y = PAGE_HEIGHT.0 - MARGIN_TOP;
            }

            if is_title {
                current.set_fill_color(Color::Rgb(Rgb::new(0.0, 0.4, 0.8, None)));
            } else {
                set_gray(&current, 0.0);
            }
            current.use_text(piece, size, Mm(MARGIN_LEFT), Mm(y), font);
            y -= (size + 2.0) * PT_TO_MM;
        }
    }

    doc.save_to_bytes()
        .map_err(|e| anyhow!("failed to serialize PDF: {e}"))
}

fn set_gray(layer: &PdfLayerReference, level: f32) {
    layer.set_fill_color(Color::Rgb(Rgb::new(level, level, level, None)));
}

/// Short all-caps lines such as "SKILLS ANALYSIS:".
fn is_heading(line: &str) -> bool {
    let len = line.chars().count();
    (4..50).contains(&len)
        && line.chars().any(|c| c.is_ascii_alphabetic())
        && !line.chars().any(|c| c.is_ascii_lowercase())
}

/// The built-in fonts only cover WinAnsi; map common typography to ASCII
/// and drop everything else.
fn to_win_ansi(line: &str) -> String {
    line.chars()
        .filter_map(|c| match c {
            '\u{2018}' | '\u{2019}' => Some('\''),
            '\u{201C}' | '\u{201D}' => Some('"'),
            '\u{2013}' | '\u{2014}' | '\u{2022}' => Some('-'),
            '\t' => Some(' '),
            c if c.is_ascii() && !c.is_ascii_control() => Some(c),
            _ => None,
        })
        .collect::<String>()
        .trim_end()
        .to_string()
}

/// Word-wraps to `width` characters, hard-splitting longer words.
fn wrap(line: &str, width: usize) -> Vec<String> {
    if line.chars().count() <= width {
        return vec![line.to_string()];
    }

    let mut pieces = Vec::new();
    let mut current = String::new();

    for word in line.split(' ') {
        let mut word = word.to_string();
        loop {
            let used = current.chars().count();
            let needed = word.chars().count() + usize::from(used > 0);
            if used + needed <= width {
                if used > 0 {
                    current.push(' ');
                }
                current.push_str(&word);
                break;
            }
            if used > 0 {
                pieces.push(std::mem::take(&mut current));
                continue;
            }
            let split_at = word
                .char_indices()
                .nth(width)
                .map_or(word.len(), |(idx, _)| idx);
            let rest = word.split_off(split_at);
            pieces.push(word);
            word = rest;
            if word.is_empty() {
                break;
            }
        }
    }

    if !current.is_empty() {
        pieces.push(current);
    }
    pieces
}
