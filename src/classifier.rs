/// The four fixed classification buckets for an input URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Gdpr,
    Education,
    Health,
    Generic,
}

// Ordered rules, first match wins. Matching is purely lexical over the whole
// URL string, query parameters included; URL structure is ignored on purpose
// to keep the demo behavior predictable.
const RULES: &[(&[&str], Category)] = &[
    (&["gdpr", "privacy"], Category::Gdpr),
    (&["education", "school"], Category::Education),
    (&["health", "medical"], Category::Health),
];

/// Classify a URL into a [`Category`] by case-insensitive substring match.
pub fn classify(url: &str) -> Category {
    let url = url.to_ascii_lowercase();
    RULES
        .iter()
        .find(|(needles, _)| needles.iter().any(|n| url.contains(n)))
        .map(|(_, category)| *category)
        .unwrap_or(Category::Generic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gdpr_and_privacy_urls() {
        assert_eq!(classify("https://example.com/gdpr-notice"), Category::Gdpr);
        assert_eq!(classify("https://example.com/privacy"), Category::Gdpr);
        assert_eq!(classify("https://example.com/?q=GDPR"), Category::Gdpr);
    }

    #[test]
    fn education_urls() {
        assert_eq!(classify("https://education.example.org/"), Category::Education);
        assert_eq!(classify("https://myschool.edu/policy"), Category::Education);
    }

    #[test]
    fn health_urls() {
        assert_eq!(classify("https://health.example.com/"), Category::Health);
        assert_eq!(classify("https://example.com/medical-records"), Category::Health);
    }

    #[test]
    fn everything_else_is_generic() {
        assert_eq!(classify("https://example.com/terms"), Category::Generic);
        assert_eq!(classify("https://news.example.com/article/42"), Category::Generic);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(classify("https://example.com/PRIVACY"), Category::Gdpr);
        assert_eq!(classify("https://example.com/School"), Category::Education);
        assert_eq!(classify("https://example.com/MEDICAL"), Category::Health);
    }

    #[test]
    fn first_rule_wins() {
        // Contains both "gdpr" and "health"; rule 1 takes priority.
        assert_eq!(classify("https://site.com/gdpr-health-policy"), Category::Gdpr);
        // "school" + "medical"; rule 2 beats rule 3.
        assert_eq!(
            classify("https://school.example.com/medical-leave"),
            Category::Education
        );
    }

    #[test]
    fn matches_anywhere_in_the_string() {
        // Host, path, and query are all fair game.
        assert_eq!(classify("https://gdpr.eu/"), Category::Gdpr);
        assert_eq!(classify("https://example.com/a?topic=school"), Category::Education);
    }
}
