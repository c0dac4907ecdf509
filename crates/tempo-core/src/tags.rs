//! Entity tag rendering for text display.
//!
//! Wraps each entity span in `<e0>…</e0>` markers, the form the backend
//! uses when it renders an annotation context. Entities must be disjoint;
//! spans that overlap a previously written one, or that fall outside the
//! text, are skipped.

use crate::entity::Entity;

/// Interleave `<id>…</id>` markers around each entity span.
#[must_use]
pub fn add_tags(text: &str, entities: &[Entity]) -> String {
    let mut ordered: Vec<&Entity> = entities.iter().collect();
    ordered.sort_by_key(|entity| entity.start);

    let mut tagged = String::with_capacity(text.len() + entities.len() * 16);
    let mut offset = 0;
    for entity in ordered {
        if entity.start < offset || entity.end > text.len() || entity.start > entity.end {
            continue;
        }
        tagged.push_str(&text[offset..entity.start]);
        tagged.push('<');
        tagged.push_str(&entity.id);
        tagged.push('>');
        tagged.push_str(&text[entity.start..entity.end]);
        tagged.push_str("</");
        tagged.push_str(&entity.id);
        tagged.push('>');
        offset = entity.end;
    }
    tagged.push_str(&text[offset..]);
    tagged
}

/// Remove entity markers produced by [`add_tags`] (or by the backend's
/// context rendering). Only tags whose name is an entity id — `e` followed
/// by digits, or the synthetic `dct` id — are removed; any other `<…>`
/// sequence is literal text and survives.
#[must_use]
pub fn strip_tags(tagged: &str) -> String {
    let mut plain = String::with_capacity(tagged.len());
    let mut rest = tagged;
    while let Some(open) = rest.find('<') {
        let Some(close) = rest[open..].find('>').map(|i| open + i) else {
            break;
        };
        let inner = &rest[open + 1..close];
        if inner.contains('<') {
            // bare '<' in the text; emit it and rescan from the next char
            plain.push_str(&rest[..=open]);
            rest = &rest[open + 1..];
            continue;
        }
        let name = inner.trim_start_matches('/');
        if is_entity_tag(name) {
            plain.push_str(&rest[..open]);
        } else {
            plain.push_str(&rest[..=close]);
        }
        rest = &rest[close + 1..];
    }
    plain.push_str(rest);
    plain
}

fn is_entity_tag(name: &str) -> bool {
    name == crate::dct::DCT_ENTITY_ID
        || (name.len() > 1
            && name.starts_with('e')
            && name[1..].bytes().all(|b| b.is_ascii_digit()))
}
