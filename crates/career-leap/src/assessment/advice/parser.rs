use std::sync::OnceLock;

use regex::Regex;

use super::{AdviceSection, SectionKind};

fn title_marker() -> &'static Regex {
    static MARKER: OnceLock<Regex> = OnceLock::new();
    MARKER.get_or_init(|| Regex::new("【([^】]+)】").expect("static title pattern compiles"))
}

/// Split a composed document back into its sections, in document order.
///
/// Text before the first marker is ignored, as are markers with an empty body.
/// Input without any marker yields no sections.
pub fn parse_document(document: &str) -> Vec<AdviceSection> {
    let markers: Vec<_> = title_marker().captures_iter(document).collect();
    let mut sections = Vec::with_capacity(markers.len());

    for (index, captures) in markers.iter().enumerate() {
        let (Some(whole), Some(title)) = (captures.get(0), captures.get(1)) else {
            continue;
        };

        let body_end = markers
            .get(index + 1)
            .and_then(|next| next.get(0))
            .map(|next| next.start())
            .unwrap_or(document.len());

        let title = title.as_str().trim();
        let body = document[whole.end()..body_end].trim();
        if title.is_empty() || body.is_empty() {
            continue;
        }

        sections.push(AdviceSection {
            kind: SectionKind::from_title(title),
            title: title.to_string(),
            body: body.to_string(),
        });
    }

    sections
}

/// Stable sort by display priority.
pub fn order_sections(mut sections: Vec<AdviceSection>) -> Vec<AdviceSection> {
    sections.sort_by_key(|section| section.kind.priority());
    sections
}

pub fn parse_and_order(document: &str) -> Vec<AdviceSection> {
    order_sections(parse_document(document))
}
