//! Built-in archive catalog served by `MockArchiveSource`.

use crate::model::archive::{Article, Issue, Part, PartId, Volume};
use std::collections::BTreeMap;

/// Volume skeleton plus the articles of every part.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MockCatalog {
    pub volumes: Vec<Volume>,
    pub articles_by_part: BTreeMap<PartId, Vec<Article>>,
}

impl MockCatalog {
    /// Total number of articles across all parts.
    pub fn article_count(&self) -> usize {
        self.articles_by_part.values().map(Vec::len).sum()
    }
}

/// Returns the sample IJAREI archive.
pub fn sample_catalog() -> MockCatalog {
    let volumes = vec![
        volume(
            1,
            2023,
            vec![
                issue(1, 1, "2023-06-30", &["A", "B"]),
                issue(1, 2, "2023-12-31", &["A", "B"]),
            ],
        ),
        volume(
            2,
            2024,
            vec![
                issue(2, 1, "2024-06-30", &["A", "B"]),
                issue(2, 2, "2024-12-31", &["A"]),
            ],
        ),
        volume(3, 2025, vec![issue(3, 1, "2025-06-30", &["A", "B"])]),
    ];

    let mut articles_by_part = BTreeMap::new();
    articles_by_part.insert(
        part_id(1, 1, "A"),
        vec![
            article(
                "ijarei-2023-001",
                "Finite Element Analysis of Composite Bridge Decks under Moving Loads",
                &["Anil Kumar", "Priya Sharma"],
                "2023-06-30",
                "A finite element study of fibre-reinforced composite bridge decks subjected to moving vehicular loads.",
                Some("10.5281/ijarei.2023.001"),
                Some("1-9"),
                &["finite element", "composite", "bridge"],
            ),
            article(
                "ijarei-2023-002",
                "Thermal Performance of Phase Change Materials in Building Envelopes",
                &["Meera Nair"],
                "2023-06-30",
                "Experimental evaluation of paraffin-based phase change materials integrated into brick walls.",
                Some("10.5281/ijarei.2023.002"),
                Some("10-18"),
                &["phase change", "thermal storage"],
            ),
        ],
    );
    articles_by_part.insert(
        part_id(1, 1, "B"),
        vec![article(
            "ijarei-2023-003",
            "Lightweight Intrusion Detection for IoT Gateways",
            &["Rahul Verma", "Sana Qureshi", "Arjun Rao"],
            "2023-06-30",
            "An anomaly-based intrusion detection scheme sized for resource-constrained IoT gateways.",
            Some("10.5281/ijarei.2023.003"),
            Some("19-27"),
            &["iot", "intrusion detection", "security"],
        )],
    );
    articles_by_part.insert(
        part_id(1, 2, "A"),
        vec![article(
            "ijarei-2023-004",
            "Optimization of Solar Dryer Geometry for Agricultural Produce",
            &["Deepak Singh", "Meera Nair"],
            "2023-12-31",
            "Computational fluid dynamics guided redesign of an indirect solar dryer.",
            None,
            Some("1-8"),
            &["solar energy", "cfd"],
        )],
    );
    articles_by_part.insert(
        part_id(1, 2, "B"),
        vec![article(
            "ijarei-2023-005",
            "Transformer Models for Low-Resource Language Translation",
            &["Kavita Joshi"],
            "2023-12-31",
            "Transfer learning strategies for translating between low-resource Indic languages.",
            Some("10.5281/ijarei.2023.005"),
            Some("9-16"),
            &["nlp", "machine translation"],
        )],
    );
    articles_by_part.insert(
        part_id(2, 1, "A"),
        vec![article(
            "ijarei-2024-001",
            "Seismic Retrofitting of Masonry Structures Using Steel Bracing",
            &["Vikram Patel", "Anil Kumar"],
            "2024-06-30",
            "Shake-table results for unreinforced masonry retrofitted with concentric steel bracing.",
            Some("10.5281/ijarei.2024.001"),
            Some("1-12"),
            &["seismic", "retrofitting", "masonry"],
        )],
    );
    articles_by_part.insert(
        part_id(2, 1, "B"),
        vec![
            article(
                "ijarei-2024-002",
                "Federated Learning for Privacy-Preserving Medical Imaging",
                &["Sana Qureshi", "Nikhil Menon"],
                "2024-06-30",
                "Federated training of segmentation models across hospitals without sharing patient scans.",
                Some("10.5281/ijarei.2024.002"),
                Some("13-22"),
                &["federated learning", "medical imaging"],
            ),
            article(
                "ijarei-2024-003",
                "Energy-Aware Task Scheduling in Edge Computing",
                &["Arjun Rao"],
                "2024-06-30",
                "A heuristic scheduler balancing latency and energy on heterogeneous edge nodes.",
                None,
                Some("23-30"),
                &["edge computing", "scheduling"],
            ),
        ],
    );
    articles_by_part.insert(
        part_id(2, 2, "A"),
        vec![article(
            "ijarei-2024-004",
            "Durability of Geopolymer Concrete in Marine Environments",
            &["Lakshmi Iyer"],
            "2024-12-31",
            "Chloride ingress and sulphate attack resistance of fly-ash based geopolymer concrete.",
            Some("10.5281/ijarei.2024.004"),
            Some("1-10"),
            &["geopolymer", "durability"],
        )],
    );
    articles_by_part.insert(
        part_id(3, 1, "A"),
        vec![article(
            "ijarei-2025-001",
            "Hydrogen Embrittlement in Additively Manufactured Steels",
            &["Vikram Patel"],
            "2025-06-30",
            "Slow strain rate testing of laser powder bed fused steels after hydrogen charging.",
            Some("10.5281/ijarei.2025.001"),
            Some("1-11"),
            &["additive manufacturing", "hydrogen"],
        )],
    );
    articles_by_part.insert(part_id(3, 1, "B"), Vec::new());

    MockCatalog {
        volumes,
        articles_by_part,
    }
}

fn part_id(volume_number: u32, issue_number: u32, letter: &str) -> PartId {
    format!(
        "vol-{volume_number}-iss-{issue_number}-part-{}",
        letter.to_ascii_lowercase()
    )
}

fn volume(volume_number: u32, year: u16, issues: Vec<Issue>) -> Volume {
    Volume {
        id: format!("vol-{volume_number}"),
        volume_number,
        year,
        issues,
    }
}

fn issue(volume_number: u32, issue_number: u32, published_date: &str, letters: &[&str]) -> Issue {
    Issue {
        id: format!("vol-{volume_number}-iss-{issue_number}"),
        issue_number,
        published_date: published_date.to_string(),
        parts: letters
            .iter()
            .map(|letter| Part {
                id: part_id(volume_number, issue_number, letter),
                name: format!("Part {letter}"),
                description: part_description(letter).to_string(),
            })
            .collect(),
    }
}

fn part_description(letter: &str) -> &'static str {
    match letter {
        "A" => "Civil, Mechanical and Energy Engineering",
        "B" => "Computer Science, Electronics and Communication",
        _ => "Interdisciplinary Research",
    }
}

#[allow(clippy::too_many_arguments)]
fn article(
    id: &str,
    title: &str,
    authors: &[&str],
    published_date: &str,
    abstract_text: &str,
    doi: Option<&str>,
    pages: Option<&str>,
    keywords: &[&str],
) -> Article {
    Article {
        id: id.to_string(),
        title: title.to_string(),
        authors: authors.iter().map(|author| author.to_string()).collect(),
        published_date: published_date.to_string(),
        abstract_text: abstract_text.to_string(),
        doi: doi.map(str::to_string),
        pages: pages.map(str::to_string),
        keywords: keywords.iter().map(|keyword| keyword.to_string()).collect(),
        pdf_url: Some(format!("/papers/{id}.pdf")),
        html_url: None,
    }
}

#[cfg(test)]
mod tests {
    use super::sample_catalog;

    #[test]
    fn every_catalog_part_belongs_to_the_tree() {
        let catalog = sample_catalog();
        let tree_parts = catalog
            .volumes
            .iter()
            .flat_map(|volume| volume.issues.iter())
            .flat_map(|issue| issue.parts.iter())
            .map(|part| part.id.clone())
            .collect::<Vec<_>>();

        for part_id in catalog.articles_by_part.keys() {
            assert!(tree_parts.contains(part_id), "orphan part {part_id}");
        }
        assert_eq!(catalog.article_count(), 10);
    }
}
