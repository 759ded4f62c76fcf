//! Archive domain model.
//!
//! # Responsibility
//! - Define the volume → issue → part hierarchy browsed on the Archive page.
//! - Define article records and their denormalized archive projection.
//!
//! # Invariants
//! - Entities are built once per fetch and never mutated afterwards.
//! - `ArchiveArticle` ancestor fields are copied from the tree at load time
//!   and are trusted, not re-validated, by filtering.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Stable volume identifier.
pub type VolumeId = String;
/// Stable issue identifier.
pub type IssueId = String;
/// Stable part (section) identifier.
pub type PartId = String;
/// Stable article identifier.
pub type ArticleId = String;

/// One published volume, grouping all issues of a year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Volume {
    pub id: VolumeId,
    pub volume_number: u32,
    pub year: u16,
    pub issues: Vec<Issue>,
}

/// One numbered issue inside a volume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub id: IssueId,
    pub issue_number: u32,
    /// ISO `YYYY-MM-DD` publication date.
    pub published_date: String,
    pub parts: Vec<Part>,
}

/// Section of an issue. Articles are fetched per part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    pub id: PartId,
    pub name: String,
    pub description: String,
}

/// Article as returned by the per-part article fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub authors: Vec<String>,
    pub published_date: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    #[serde(default)]
    pub doi: Option<String>,
    #[serde(default)]
    pub pages: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub pdf_url: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
}

/// Article annotated with copies of its ancestor identifiers.
///
/// Used for flat search and for mapping search hits back into the tree by
/// `(volume_number, issue_number, part_name)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveArticle {
    #[serde(flatten)]
    pub article: Article,
    pub volume_number: u32,
    pub issue_number: u32,
    pub part_name: String,
    pub year: u16,
}

impl ArchiveArticle {
    /// Denormalizes one article under its volume/issue/part ancestors.
    pub fn new(article: Article, volume: &Volume, issue: &Issue, part: &Part) -> Self {
        Self {
            article,
            volume_number: volume.volume_number,
            issue_number: issue.issue_number,
            part_name: part.name.clone(),
            year: volume.year,
        }
    }

    /// Returns whether title or any author contains `needle`.
    ///
    /// `needle` must already be lowercased.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.article.title.to_lowercase().contains(needle)
            || self
                .article
                .authors
                .iter()
                .any(|author| author.to_lowercase().contains(needle))
    }

    /// Tree address used to map this article back to its branch.
    pub fn branch_key(&self) -> BranchKey {
        BranchKey {
            volume_number: self.volume_number,
            issue_number: self.issue_number,
            part_name: self.part_name.clone(),
        }
    }

    /// Composite key tracking an in-flight download of this article.
    pub fn download_key(&self) -> String {
        format!(
            "{}-{}-{}",
            self.volume_number, self.issue_number, self.article.id
        )
    }
}

/// `(volume_number, issue_number, part_name)` address of one part branch.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BranchKey {
    pub volume_number: u32,
    pub issue_number: u32,
    pub part_name: String,
}

/// Year selector of the Archive page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum YearFilter {
    #[default]
    All,
    Year(u16),
}

impl YearFilter {
    /// Returns whether a volume published in `year` passes this filter.
    pub fn admits(self, year: u16) -> bool {
        match self {
            Self::All => true,
            Self::Year(selected) => selected == year,
        }
    }
}

impl Display for YearFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Year(year) => write!(f, "{year}"),
        }
    }
}

/// Year selector parse error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearFilterParseError(pub String);

impl Display for YearFilterParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid year filter `{}`; expected `all` or a year", self.0)
    }
}

impl Error for YearFilterParseError {}

impl FromStr for YearFilter {
    type Err = YearFilterParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim();
        if normalized.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        normalized
            .parse::<u16>()
            .map(Self::Year)
            .map_err(|_| YearFilterParseError(normalized.to_string()))
    }
}

/// Returns the distinct volume years, newest first.
///
/// Feeds the year selector options.
pub fn available_years(volumes: &[Volume]) -> Vec<u16> {
    let mut years = volumes.iter().map(|volume| volume.year).collect::<Vec<_>>();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();
    years
}

#[cfg(test)]
mod tests {
    use super::{ArchiveArticle, Article, Issue, Part, Volume, YearFilter};
    use serde_json::{json, Value};

    fn article() -> Article {
        Article {
            id: "ijarei-2024-002".to_string(),
            title: "Federated Learning for Privacy-Preserving Medical Imaging".to_string(),
            authors: vec!["Meera Nair".to_string()],
            published_date: "2024-03-15".to_string(),
            abstract_text: "Training across hospitals without sharing scans.".to_string(),
            doi: None,
            pages: Some("14-27".to_string()),
            keywords: vec!["federated learning".to_string()],
            pdf_url: Some("/papers/ijarei-2024-002.pdf".to_string()),
            html_url: None,
        }
    }

    fn archive_article() -> ArchiveArticle {
        let part = Part {
            id: "vol-2-iss-1-part-b".to_string(),
            name: "Part B".to_string(),
            description: "Computer Science".to_string(),
        };
        let issue = Issue {
            id: "vol-2-iss-1".to_string(),
            issue_number: 1,
            published_date: "2024-03-15".to_string(),
            parts: vec![part.clone()],
        };
        let volume = Volume {
            id: "vol-2".to_string(),
            volume_number: 2,
            year: 2024,
            issues: vec![issue.clone()],
        };
        ArchiveArticle::new(article(), &volume, &issue, &part)
    }

    #[test]
    fn archive_article_json_is_flat_and_camel_case() {
        let value = serde_json::to_value(archive_article()).unwrap();

        assert_eq!(value["id"], "ijarei-2024-002");
        assert_eq!(value["abstract"], "Training across hospitals without sharing scans.");
        assert_eq!(value["volumeNumber"], 2);
        assert_eq!(value["issueNumber"], 1);
        assert_eq!(value["partName"], "Part B");
        assert_eq!(value["pdfUrl"], "/papers/ijarei-2024-002.pdf");
        assert!(value.get("article").is_none());
        assert!(value.get("abstract_text").is_none());

        let back: ArchiveArticle = serde_json::from_value(value).unwrap();
        assert_eq!(back, archive_article());
    }

    #[test]
    fn article_optional_fields_default_when_missing() {
        let value: Value = json!({
            "id": "ijarei-2025-001",
            "title": "Solar Forecasting",
            "authors": ["A. Rao"],
            "publishedDate": "2025-01-10",
            "abstract": "Short-horizon irradiance models."
        });

        let parsed: Article = serde_json::from_value(value).unwrap();

        assert_eq!(parsed.abstract_text, "Short-horizon irradiance models.");
        assert!(parsed.doi.is_none());
        assert!(parsed.keywords.is_empty());
        assert!(parsed.pdf_url.is_none());
    }

    #[test]
    fn year_filter_parses_all_and_years() {
        assert_eq!(" ALL ".parse::<YearFilter>().unwrap(), YearFilter::All);
        assert_eq!("2024".parse::<YearFilter>().unwrap(), YearFilter::Year(2024));
        assert!("last year".parse::<YearFilter>().is_err());
    }
}
