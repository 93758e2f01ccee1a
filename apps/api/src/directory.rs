//! The in-memory candidate directory and its three query operations.
//!
//! The directory is loaded once at startup and never mutated afterwards, so
//! handlers can share it behind an `Arc` without locking. Every query is a
//! total function: it answers with a fixed message rather than an error, even
//! over an empty directory.

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::{info, warn};

use crate::models::candidate::CandidateRecord;
use crate::render::{
    candidate_block, preformatted, CANDIDATE_NOT_FOUND, EMPTY_DIRECTORY, FIELD_PLACEHOLDER,
    NO_SKILL_MATCH,
};

/// Why a data file failed to load. Never escapes [`CandidateDirectory::load`];
/// surfaced only through the warning log.
#[derive(Debug, Error)]
enum LoadError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

/// Ordered, immutable collection of candidate records held for the process
/// lifetime.
pub struct CandidateDirectory {
    candidates: Vec<CandidateRecord>,
}

impl CandidateDirectory {
    /// Loads the directory from a JSON file containing an array of candidate
    /// objects. A missing file or malformed content degrades to an empty
    /// directory; neither aborts startup.
    pub fn load(path: impl AsRef<Path>) -> Self {
        match read_candidates(path.as_ref()) {
            Ok(candidates) => {
                info!("Loaded {} candidate records", candidates.len());
                Self { candidates }
            }
            Err(err) => {
                warn!("{err}; starting with an empty candidate directory");
                Self {
                    candidates: Vec::new(),
                }
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn from_records(candidates: Vec<CandidateRecord>) -> Self {
        Self { candidates }
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Full listing in load order, one block per candidate.
    pub fn render_all(&self) -> String {
        if self.candidates.is_empty() {
            return EMPTY_DIRECTORY.to_string();
        }
        let blocks: Vec<String> = self.candidates.iter().map(candidate_block).collect();
        preformatted(&blocks)
    }

    /// First record whose `pk` matches wins; duplicate ids are kept as loaded.
    pub fn render_by_id(&self, pk: i64) -> String {
        let Some(candidate) = self.candidates.iter().find(|c| c.pk == Some(pk)) else {
            return CANDIDATE_NOT_FOUND.to_string();
        };
        let src = candidate.picture.as_deref().unwrap_or(FIELD_PLACEHOLDER);
        format!(
            "<img src=\"{src}\"><pre>{}</pre>",
            candidate_block(candidate)
        )
    }

    /// Case-insensitive, token-exact skill filter. A skills string splits on
    /// the literal `", "` separator; records without a skills field never
    /// match.
    pub fn render_by_skill(&self, skill: &str) -> String {
        let query = skill.to_lowercase();
        let blocks: Vec<String> = self
            .candidates
            .iter()
            .filter(|c| has_skill(c, &query))
            .map(candidate_block)
            .collect();
        if blocks.is_empty() {
            return NO_SKILL_MATCH.to_string();
        }
        preformatted(&blocks)
    }
}

fn has_skill(candidate: &CandidateRecord, query: &str) -> bool {
    match &candidate.skills {
        Some(skills) => skills.to_lowercase().split(", ").any(|token| token == query),
        None => false,
    }
}

fn read_candidates(path: &Path) -> Result<Vec<CandidateRecord>, LoadError> {
    let raw = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| LoadError::Parse {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn make_record(pk: i64, name: &str, position: &str, skills: &str) -> CandidateRecord {
        CandidateRecord {
            pk: Some(pk),
            name: Some(name.to_string()),
            position: Some(position.to_string()),
            skills: Some(skills.to_string()),
            picture: None,
        }
    }

    fn make_directory() -> CandidateDirectory {
        CandidateDirectory::from_records(vec![
            make_record(1, "Ann", "Dev", "Go, Rust"),
            make_record(2, "Bob", "QA", "Python, Selenium"),
        ])
    }

    #[test]
    fn load_preserves_size_and_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"pk": 1, "name": "Ann", "position": "Dev", "skills": "Go, Rust"}},
                {{"pk": 2, "name": "Bob", "position": "QA", "skills": "Python"}},
                {{"pk": 3, "name": "Cid", "position": "Ops", "skills": "Bash"}}
            ]"#
        )
        .unwrap();

        let directory = CandidateDirectory::load(file.path());
        assert_eq!(directory.len(), 3);

        let all = directory.render_all();
        let ann = all.find("Ann").unwrap();
        let bob = all.find("Bob").unwrap();
        let cid = all.find("Cid").unwrap();
        assert!(ann < bob && bob < cid);
    }

    #[test]
    fn load_missing_file_yields_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        let directory = CandidateDirectory::load(dir.path().join("absent.json"));
        assert_eq!(directory.len(), 0);
    }

    #[test]
    fn load_invalid_json_yields_empty_directory() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();
        let directory = CandidateDirectory::load(file.path());
        assert_eq!(directory.len(), 0);
    }

    #[test]
    fn load_ignores_unknown_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"pk": 7, "name": "Ann", "age": 33, "gender": "female"}}]"#
        )
        .unwrap();
        let directory = CandidateDirectory::load(file.path());
        assert_eq!(directory.len(), 1);
        assert!(directory.render_by_id(7).contains("Ann"));
    }

    #[test]
    fn render_all_empty_directory_message() {
        let directory = CandidateDirectory::from_records(vec![]);
        assert_eq!(directory.render_all(), EMPTY_DIRECTORY);
    }

    #[test]
    fn render_all_contains_every_record() {
        let all = make_directory().render_all();
        assert!(all.starts_with("<pre>"));
        assert!(all.ends_with("</pre>"));
        for text in ["Ann", "Dev", "Go, Rust", "Bob", "QA", "Python, Selenium"] {
            assert!(all.contains(text), "missing {text:?} in {all:?}");
        }
    }

    #[test]
    fn render_by_id_hit_and_miss() {
        let directory = make_directory();
        let hit = directory.render_by_id(1);
        assert!(hit.contains("Ann"));
        assert!(hit.contains("<pre>"));
        assert_eq!(directory.render_by_id(42), CANDIDATE_NOT_FOUND);
    }

    #[test]
    fn render_by_id_absent_picture_uses_placeholder_src() {
        let hit = make_directory().render_by_id(1);
        assert!(hit.starts_with(r#"<img src="n/a">"#));
    }

    #[test]
    fn render_by_id_first_match_wins_on_duplicate_pk() {
        let directory = CandidateDirectory::from_records(vec![
            make_record(1, "Ann", "Dev", "Go"),
            make_record(1, "Bob", "QA", "Python"),
        ]);
        let hit = directory.render_by_id(1);
        assert!(hit.contains("Ann"));
        assert!(!hit.contains("Bob"));
    }

    #[test]
    fn skill_search_is_case_insensitive() {
        let directory = make_directory();
        assert!(directory.render_by_skill("go").contains("Ann"));
        assert!(directory.render_by_skill("RUST").contains("Ann"));
    }

    #[test]
    fn skill_search_miss_returns_fixed_message() {
        assert_eq!(make_directory().render_by_skill("java"), NO_SKILL_MATCH);
    }

    #[test]
    fn skill_search_matches_whole_tokens_only() {
        let directory = make_directory();
        // "ru" is a prefix of "rust" but not a token of its own
        assert_eq!(directory.render_by_skill("ru"), NO_SKILL_MATCH);
        assert!(directory.render_by_skill("rust").contains("Ann"));
    }

    #[test]
    fn skill_search_skips_records_without_skills() {
        let directory = CandidateDirectory::from_records(vec![
            CandidateRecord {
                pk: Some(1),
                name: Some("Ann".to_string()),
                position: None,
                skills: None,
                picture: None,
            },
            make_record(2, "Bob", "QA", "Python"),
        ]);
        assert_eq!(directory.render_by_skill("go"), NO_SKILL_MATCH);
        assert!(directory.render_by_skill("python").contains("Bob"));
    }
}
