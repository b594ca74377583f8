//! Text and HTML renderings of a protocol document

use regex::Regex;
use std::fmt::Write;

use super::document::ProtocolDocument;

const REFERENCES_TITLE: &str = "Research references (3–4 key sources)";
const REFERENCES_NOT_LOADED: &str = "References not loaded yet. Check the references catalog path.";
const REFERENCES_EMPTY: &str = "No references loaded for this species yet.";

/// Suggested file name for downloads
pub const DOWNLOAD_FILE_NAME: &str = "tissue_culture_protocol.txt";

fn fingerprint_lines(document: &ProtocolDocument) -> Vec<String> {
    let fingerprint = &document.fingerprint;
    vec![
        format!("Species key: {}", fingerprint.key),
        format!("Lineage profile: {}", fingerprint.lineage),
        format!("Auto explant: {}", fingerprint.explant),
        format!("Auto medium: {}", fingerprint.medium),
        format!("Auto PGR: {}", fingerprint.pgr),
        format!("Auto variant: {}", fingerprint.variant),
    ]
}

/// Plain text rendering, used for downloads and the CLI
pub fn render_text(document: &ProtocolDocument) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}\n\n{}", document.header, document.summary);

    text_section(&mut out, "Protocol fingerprint", &fingerprint_lines(document));

    let _ = write!(out, "\n{REFERENCES_TITLE}\n");
    if !document.references_loaded {
        let _ = writeln!(out, "{REFERENCES_NOT_LOADED}");
    }
    if document.references.is_empty() {
        let _ = writeln!(out, "{REFERENCES_EMPTY}");
    } else {
        bullets(&mut out, &document.references);
    }

    text_section(&mut out, "Species intelligence", &document.species_intel);
    text_section(&mut out, "Species-tuned adjustments", &document.species_adjustments);

    if !document.media_warnings.is_empty() {
        let _ = write!(out, "\nAdvisory: {}\n", document.media_warnings.join(" "));
    }

    let _ = write!(out, "\nStep-by-step workflow\n");
    for (idx, step) in document.steps.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", idx + 1, step);
    }

    if !document.media_notes.is_empty() {
        text_section(&mut out, "Custom media builder", &document.media_notes);
    }
    text_section(&mut out, "Sterilization decision", &document.sterilization_decision);
    text_section(&mut out, "Budget and scale considerations", &document.budget_notes);

    let _ = write!(out, "\nQuality control checklist\n{}\n", document.qc.summary);
    bullets(&mut out, &document.qc.items);

    if !document.custom_notes.is_empty() {
        text_section(&mut out, "Custom notes", &document.custom_notes);
    }

    out.trim_end().to_string()
}

fn text_section(out: &mut String, title: &str, lines: &[String]) {
    let _ = write!(out, "\n{title}\n");
    bullets(out, lines);
}

fn bullets(out: &mut String, lines: &[String]) {
    for line in lines {
        let _ = writeln!(out, "- {line}");
    }
}

/// Escape text for inclusion in HTML element content or attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// HTML fragment rendering for the browser preview
pub struct HtmlRenderer {
    url_pattern: Regex,
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self {
            url_pattern: Regex::new(r"https?://[^\s)<]+").expect("URL pattern is valid"),
        }
    }

    /// Escape `text` and turn bare URLs into links opening in a new tab
    pub fn linkify(&self, text: &str) -> String {
        let escaped = escape_html(text);
        self.url_pattern
            .replace_all(&escaped, |caps: &regex::Captures<'_>| {
                let url = &caps[0];
                format!(r#"<a href="{url}" target="_blank" rel="noopener noreferrer">{url}</a>"#)
            })
            .into_owned()
    }

    pub fn render(&self, document: &ProtocolDocument) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "<h3>{}</h3>", escape_html(&document.header));
        let _ = writeln!(out, "<p>{}</p>", escape_html(&document.summary));

        html_section(&mut out, "Protocol fingerprint", &fingerprint_lines(document));

        let _ = writeln!(out, r#"<div class="section-title">{REFERENCES_TITLE}</div>"#);
        if !document.references_loaded {
            let _ = writeln!(out, r#"<p class="placeholder">{REFERENCES_NOT_LOADED}</p>"#);
        }
        if document.references.is_empty() {
            let _ = writeln!(out, r#"<p class="placeholder">{REFERENCES_EMPTY}</p>"#);
        } else {
            let items: Vec<String> = document
                .references
                .iter()
                .map(|reference| format!("<li>{}</li>", self.linkify(reference)))
                .collect();
            let _ = writeln!(out, "<ul>{}</ul>", items.concat());
        }

        html_section(&mut out, "Species intelligence", &document.species_intel);
        html_section(&mut out, "Species-tuned adjustments", &document.species_adjustments);

        if !document.media_warnings.is_empty() {
            let _ = writeln!(
                out,
                r#"<div class="alert">{}</div>"#,
                escape_html(&document.media_warnings.join(" "))
            );
        }

        html_section(&mut out, "Step-by-step workflow", &document.steps);
        if !document.media_notes.is_empty() {
            html_section(&mut out, "Custom media builder", &document.media_notes);
        }
        html_section(&mut out, "Sterilization decision", &document.sterilization_decision);
        html_section(&mut out, "Budget and scale considerations", &document.budget_notes);

        let _ = writeln!(out, r#"<div class="section-title">Quality control checklist</div>"#);
        let _ = writeln!(out, "<p>{}</p>", escape_html(&document.qc.summary));
        html_list(&mut out, &document.qc.items);

        if !document.custom_notes.is_empty() {
            html_section(&mut out, "Custom notes", &document.custom_notes);
        }
        out
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn html_section(out: &mut String, title: &str, lines: &[String]) {
    let _ = writeln!(out, r#"<div class="section-title">{}</div>"#, escape_html(title));
    html_list(out, lines);
}

fn html_list(out: &mut String, lines: &[String]) {
    let items: Vec<String> = lines
        .iter()
        .map(|line| format!("<li>{}</li>", escape_html(line)))
        .collect();
    let _ = writeln!(out, "<ul>{}</ul>", items.concat());
}
