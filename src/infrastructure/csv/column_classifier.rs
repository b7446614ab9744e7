// ============================================================
// COLUMN CLASSIFIER
// ============================================================
// Assign a role to every header from its text

use crate::domain::matrix::ColumnRole;

/// Ordered `(keyword, role)` table; the first containing keyword wins.
const ROLE_KEYWORDS: &[(&str, ColumnRole)] = &[
    ("image generation", ColumnRole::CapabilityFlag),
    ("see images", ColumnRole::CapabilityFlag),
    ("see video", ColumnRole::CapabilityFlag),
    ("code execution", ColumnRole::CapabilityFlag),
    ("reasoning", ColumnRole::CapabilityFlag),
    ("model", ColumnRole::Identity),
    ("owner", ColumnRole::Organization),
    ("commercial", ColumnRole::CategoryType),
    ("docs", ColumnRole::MagnitudeText),
];

/// Used for magnitude columns only when no header mentions "docs"
const MAGNITUDE_FALLBACK_KEYWORD: &str = "context";

/// Role classifier bound to one header set
pub struct ColumnClassifier {
    context_fallback: bool,
}

impl ColumnClassifier {
    /// Create a classifier for the given header set
    pub fn new<S: AsRef<str>>(headers: &[S]) -> Self {
        let has_docs_column = headers
            .iter()
            .any(|h| h.as_ref().to_lowercase().contains("docs"));

        Self {
            context_fallback: !has_docs_column,
        }
    }

    /// Classify a single header
    pub fn classify(&self, header: &str) -> ColumnRole {
        let lower = header.to_lowercase();

        if let Some((_, role)) = ROLE_KEYWORDS
            .iter()
            .find(|(keyword, _)| lower.contains(keyword))
        {
            return *role;
        }

        if self.context_fallback && lower.contains(MAGNITUDE_FALLBACK_KEYWORD) {
            return ColumnRole::MagnitudeText;
        }

        ColumnRole::Plain
    }

    /// Classify every header, preserving order
    pub fn classify_all<S: AsRef<str>>(&self, headers: &[S]) -> Vec<ColumnRole> {
        headers.iter().map(|h| self.classify(h.as_ref())).collect()
    }

    /// Human-readable role listing
    pub fn report<S: AsRef<str>>(&self, headers: &[S]) -> String {
        let width = headers
            .iter()
            .map(|h| h.as_ref().chars().count())
            .max()
            .unwrap_or(0);

        headers
            .iter()
            .map(|h| {
                let h = h.as_ref();
                format!("{:<width$}  {}", h, self.classify(h), width = width)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Classify a header set in one pass
pub fn classify_columns<S: AsRef<str>>(headers: &[S]) -> Vec<ColumnRole> {
    ColumnClassifier::new(headers).classify_all(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADERS: &[&str] = &[
        "Owner",
        "Best Available Model",
        "Live Mode / Web Access",
        "Reasoning",
        "Image Generation",
        "Deep Research (Context/Tools)",
        "Code Execution",
        "See Images (Vision)",
        "See Video",
        "Read Docs (Context/RAG)",
        "Personality",
    ];

    #[test]
    fn test_classify_full_header_set() {
        let roles = classify_columns(HEADERS);

        assert_eq!(
            roles,
            vec![
                ColumnRole::Organization,
                ColumnRole::Identity,
                ColumnRole::Plain,
                ColumnRole::CapabilityFlag,
                ColumnRole::CapabilityFlag,
                ColumnRole::Plain,
                ColumnRole::CapabilityFlag,
                ColumnRole::CapabilityFlag,
                ColumnRole::CapabilityFlag,
                ColumnRole::MagnitudeText,
                ColumnRole::Plain,
            ]
        );
    }

    #[test]
    fn test_owner_is_case_insensitive() {
        let classifier = ColumnClassifier::new(&["OWNER", "Model Owner"]);
        assert_eq!(classifier.classify("OWNER"), ColumnRole::Organization);
        assert_eq!(classifier.classify("owner org"), ColumnRole::Organization);
    }

    #[test]
    fn test_commercial_is_category_type() {
        let classifier = ColumnClassifier::new(&["Commercial / Open Source"]);
        assert_eq!(
            classifier.classify("Commercial / Open Source"),
            ColumnRole::CategoryType
        );
    }

    #[test]
    fn test_capability_keyword_beats_owner() {
        let classifier = ColumnClassifier::new(&["Owner Reasoning"]);
        assert_eq!(classifier.classify("Owner Reasoning"), ColumnRole::CapabilityFlag);
    }

    #[test]
    fn test_model_beats_owner() {
        let classifier = ColumnClassifier::new(&["Model Owner"]);
        assert_eq!(classifier.classify("Model Owner"), ColumnRole::Identity);
    }

    #[test]
    fn test_context_fallback_without_docs_column() {
        let roles = classify_columns(&["Model Name", "Context Window Size"]);
        assert_eq!(roles, vec![ColumnRole::Identity, ColumnRole::MagnitudeText]);
    }

    #[test]
    fn test_unknown_headers_are_plain() {
        let roles = classify_columns(&["Personality", "Superpower", ""]);
        assert!(roles.iter().all(|r| *r == ColumnRole::Plain));
    }

    #[test]
    fn test_report_lists_every_header() {
        let report = ColumnClassifier::new(HEADERS).report(HEADERS);
        assert_eq!(report.lines().count(), HEADERS.len());
        assert!(report.contains("magnitudeText"));
        assert!(report.lines().next().unwrap().starts_with("Owner"));
    }
}
