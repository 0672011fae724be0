//! Static educational article catalog

use serde::Serialize;

/// Article categories offered as filters
pub const CATEGORIES: &[&str] = &[
    "Podstawy inwestowania",
    "Produkty emerytalne (IKE/IKZE)",
    "Strategie długoterminowe",
    "ETF-y",
    "Akcje",
    "Obligacje",
    "Ryzyko inwestycyjne",
    "Słownik pojęć",
];

/// An educational article in the knowledge base
#[derive(Debug, Clone, Serialize)]
pub struct Article {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub categories: &'static [&'static str],
    pub featured: bool,
}

/// The seeded article catalog
pub fn catalog() -> Vec<Article> {
    vec![
        Article {
            id: 1,
            title: "Czym jest IKE i IKZE?",
            description: "Jak oszczędzać na emeryturę i płacić mniejsze podatki? Coraz więcej \
                osób w Polsce zdaje sobie sprawę, że sama emerytura z ZUS nie wystarczy, by \
                utrzymać dotychczasowy standard życia.",
            categories: &["Podstawy inwestowania", "Ryzyko inwestycyjne"],
            featured: true,
        },
        Article {
            id: 2,
            title: "Jak kupować obligacje skarbowe?",
            description: "Bezpieczny sposób na oszczędzanie z gwarancją państwa. W czasach \
                niepewności gospodarczej coraz więcej osób szuka stabilnych form inwestowania.",
            categories: &["Obligacje", "Podstawy inwestowania"],
            featured: false,
        },
        Article {
            id: 3,
            title: "Podstawy analizy wykresów",
            description: "Naucz się czytać wykresy giełdowe i rozpoznawać kluczowe formacje \
                techniczne.",
            categories: &["Podstawy inwestowania", "Akcje"],
            featured: false,
        },
        Article {
            id: 4,
            title: "Jak działa Wall Street?",
            description: "Poznaj mechanizmy działania największej giełdy świata i jej wpływ na \
                globalne rynki.",
            categories: &["Podstawy inwestowania", "Akcje"],
            featured: false,
        },
    ]
}

/// Articles belonging to a category; an unknown category yields nothing
pub fn articles_in_category(category: &str) -> Vec<Article> {
    catalog()
        .into_iter()
        .filter(|article| article.categories.contains(&category))
        .collect()
}

/// The article highlighted at the top of the knowledge base, if any
pub fn featured_article() -> Option<Article> {
    catalog().into_iter().find(|article| article.featured)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_featured_article_exists() {
        let featured = featured_article().expect("catalog has a featured article");
        assert_eq!(featured.id, 1);
    }

    #[test]
    fn test_category_filtering() {
        let bonds = articles_in_category("Obligacje");
        assert_eq!(bonds.len(), 1);
        assert_eq!(bonds[0].id, 2);

        let basics = articles_in_category("Podstawy inwestowania");
        assert_eq!(basics.len(), 4);

        assert!(articles_in_category("Nieznana").is_empty());
    }

    #[test]
    fn test_article_categories_are_known() {
        for article in catalog() {
            for category in article.categories {
                assert!(CATEGORIES.contains(category), "unknown category {}", category);
            }
        }
    }
}
