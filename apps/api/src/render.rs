//! HTML fragment rendering for candidate records.
//!
//! The endpoints serve plain preformatted text: a three-line label block per
//! candidate inside a `<pre>` container. Nothing here escapes its input.

use crate::models::candidate::CandidateRecord;

/// Rendered in place of any absent field, including the image `src`.
pub const FIELD_PLACEHOLDER: &str = "n/a";

/// Fixed response for `render_all` over an empty directory.
pub const EMPTY_DIRECTORY: &str = "Список кандидатов пуст";
/// Fixed response for a by-id lookup miss.
pub const CANDIDATE_NOT_FOUND: &str = "Нет такого кандидата";
/// Fixed response for a skill search with no matches.
pub const NO_SKILL_MATCH: &str = "Подходящих кандидатов не найдено";

fn field(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(FIELD_PLACEHOLDER)
}

/// Three-line label block for one candidate.
pub fn candidate_block(candidate: &CandidateRecord) -> String {
    format!(
        "Имя кандидата: {}\nПозиция: {}\nНавыки: {}",
        field(&candidate.name),
        field(&candidate.position),
        field(&candidate.skills),
    )
}

/// Joins blocks with a blank line between them, one trailing blank line,
/// wrapped in `<pre>`. Callers handle the empty case themselves.
pub fn preformatted(blocks: &[String]) -> String {
    format!("<pre>{}\n\n</pre>", blocks.join("\n\n"))
}
