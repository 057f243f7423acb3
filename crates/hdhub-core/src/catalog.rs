//! Static catalog navigation tables
//!
//! Category and genre filter paths on the catalog site. The filter is the
//! path appended to the base URL when browsing; the default feed uses an
//! empty filter. New filters are additive entries in these tables.

use serde::Serialize;

/// A navigable catalog filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogFilter {
    /// Display title
    pub title: &'static str,
    /// Site-relative path; empty for the default feed
    pub filter: &'static str,
}

/// Top-level browse categories
pub const CATEGORIES: &[CatalogFilter] = &[
    CatalogFilter {
        title: "Latest",
        filter: "",
    },
    CatalogFilter {
        title: "Web Series",
        filter: "/category/web-series",
    },
    CatalogFilter {
        title: "Hollywood",
        filter: "/category/hollywood-movies",
    },
    CatalogFilter {
        title: "South Movies",
        filter: "/category/south-hindi-movies",
    },
];

/// Genre filters
pub const GENRES: &[CatalogFilter] = &[
    CatalogFilter {
        title: "Action",
        filter: "/category/action",
    },
    CatalogFilter {
        title: "Crime",
        filter: "/category/crime",
    },
    CatalogFilter {
        title: "Comedy",
        filter: "/category/comedy",
    },
    CatalogFilter {
        title: "Drama",
        filter: "/category/drama",
    },
    CatalogFilter {
        title: "Horror",
        filter: "/category/horror",
    },
    CatalogFilter {
        title: "Family",
        filter: "/category/family",
    },
    CatalogFilter {
        title: "Sci-Fi",
        filter: "/category/sifi",
    },
    CatalogFilter {
        title: "Thriller",
        filter: "/category/triller",
    },
    CatalogFilter {
        title: "Romance",
        filter: "/category/romance",
    },
    CatalogFilter {
        title: "Fight",
        filter: "/category/fight",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_table() {
        assert_eq!(CATEGORIES.len(), 4);
        assert_eq!(CATEGORIES[0].title, "Latest");
        assert_eq!(CATEGORIES[0].filter, "");
    }

    #[test]
    fn test_genres_are_category_paths() {
        assert_eq!(GENRES.len(), 10);
        assert!(GENRES
            .iter()
            .all(|genre| genre.filter.starts_with("/category/")));
    }

    #[test]
    fn test_filter_serialization() {
        let json = serde_json::to_value(CATEGORIES[1]).unwrap();
        assert_eq!(json["title"], "Web Series");
        assert_eq!(json["filter"], "/category/web-series");
    }
}
