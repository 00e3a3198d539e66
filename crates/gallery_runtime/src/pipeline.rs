//! Filter and sort pipeline over the icon catalog.
//!
//! Stages run in a fixed order: family exclusion, category filter, then either a ranked
//! substring search or the default popularity ordering.

use icon_catalog::IconMetadata;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Inputs that determine which icons are visible and in what order.
pub struct IconQuery {
    /// Raw search text; surrounding whitespace is ignored.
    pub search: String,
    /// Family whose unsupported icons are excluded.
    pub family: Option<String>,
    /// Category the icons must carry.
    pub category: Option<String>,
}

impl IconQuery {
    /// Lowercased, trimmed search term; `None` when the search box is effectively empty.
    pub fn search_term(&self) -> Option<String> {
        let term = self.search.trim();
        (!term.is_empty()).then(|| term.to_lowercase())
    }
}

/// Returns whether `icon`'s name or any of its tags contains `term` (already lowercased).
pub fn matches_search(icon: &IconMetadata, term: &str) -> bool {
    icon.name.to_lowercase().contains(term)
        || icon.tags.iter().any(|tag| tag.to_lowercase().contains(term))
}

/// Search relevance tier: exact name, then name prefix, then any other match.
fn search_rank(icon: &IconMetadata, term: &str) -> u8 {
    let name = icon.name.to_lowercase();
    if name == term {
        0
    } else if name.starts_with(term) {
        1
    } else {
        2
    }
}

/// Applies `query` to `icons` and returns the visible entries in display order.
pub fn filter_icons<'a>(icons: &'a [IconMetadata], query: &IconQuery) -> Vec<&'a IconMetadata> {
    let family = query.family.as_deref().filter(|f| !f.is_empty());
    let category = query.category.as_deref().filter(|c| !c.is_empty());

    let scoped = icons
        .iter()
        .filter(|icon| family.map_or(true, |family| icon.supports_family(family)))
        .filter(|icon| category.map_or(true, |category| icon.in_category(category)));

    match query.search_term() {
        Some(term) => {
            let mut matches: Vec<_> = scoped.filter(|icon| matches_search(icon, &term)).collect();
            matches.sort_by_cached_key(|icon| (search_rank(icon, &term), icon.name.len()));
            matches
        }
        None => {
            let mut all: Vec<_> = scoped.collect();
            all.sort_by(|a, b| b.popularity.cmp(&a.popularity));
            all
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn icon(name: &str, popularity: u64, tags: &[&str]) -> IconMetadata {
        IconMetadata {
            name: name.to_string(),
            version: 1,
            popularity,
            codepoint: 0,
            unsupported_families: Vec::new(),
            categories: vec!["action".to_string()],
            tags: tags.iter().map(|t| t.to_string()).collect(),
            sizes_px: None,
        }
    }

    fn names(icons: &[&IconMetadata]) -> Vec<String> {
        icons.iter().map(|icon| icon.name.clone()).collect()
    }

    fn catalog() -> Vec<IconMetadata> {
        let mut only_symbols = icon("home_app_logo", 5, &[]);
        only_symbols.unsupported_families = vec!["Material Icons".to_string()];
        let mut social = icon("share", 60, &["send"]);
        social.categories = vec!["social".to_string()];
        vec![
            icon("home_work", 10, &["office"]),
            icon("cottage", 30, &["Home", "house"]),
            icon("home", 20, &[]),
            icon("other_houses", 40, &["home"]),
            only_symbols,
            social,
            icon("house", 50, &[]),
        ]
    }

    fn query(search: &str) -> IconQuery {
        IconQuery {
            search: search.to_string(),
            family: Some("Material Icons".to_string()),
            category: None,
        }
    }

    #[test]
    fn empty_search_sorts_by_descending_popularity() {
        let icons = catalog();
        let visible = filter_icons(&icons, &query("   "));
        assert_eq!(
            names(&visible),
            ["share", "house", "other_houses", "cottage", "home", "home_work"]
        );
        assert!(visible
            .windows(2)
            .all(|pair| pair[0].popularity >= pair[1].popularity));
    }

    #[test]
    fn search_ranks_exact_then_prefix_then_shortest() {
        let icons = catalog();
        let visible = filter_icons(&icons, &query("HOME"));
        assert_eq!(
            names(&visible),
            ["home", "home_work", "cottage", "other_houses"]
        );
    }

    #[test]
    fn search_results_are_case_insensitive_name_or_tag_matches() {
        let icons = catalog();
        for term in ["ho", "OUS", "send", "zzz", "e"] {
            let visible = filter_icons(&icons, &query(term));
            let needle = term.to_lowercase();
            for icon in &visible {
                assert!(
                    matches_search(icon, &needle),
                    "{} should match {term}",
                    icon.name
                );
                assert!(icons.iter().any(|candidate| candidate == *icon));
            }
        }
        assert!(filter_icons(&icons, &query("zzz")).is_empty());
    }

    #[test]
    fn family_exclusion_drops_unsupported_icons() {
        let icons = catalog();
        let visible = filter_icons(&icons, &query("home_app"));
        assert!(visible.is_empty());

        let symbols = IconQuery {
            family: Some("Material Symbols Outlined".to_string()),
            ..query("home_app")
        };
        assert_eq!(names(&filter_icons(&icons, &symbols)), ["home_app_logo"]);
    }

    #[test]
    fn category_filter_applies_before_search() {
        let icons = catalog();
        let social = IconQuery {
            category: Some("Social".to_string()),
            ..query("")
        };
        assert_eq!(names(&filter_icons(&icons, &social)), ["share"]);

        let social_search = IconQuery {
            category: Some("social".to_string()),
            ..query("home")
        };
        assert!(filter_icons(&icons, &social_search).is_empty());
    }

    #[test]
    fn empty_family_and_category_do_not_filter() {
        let icons = catalog();
        let open = IconQuery {
            search: String::new(),
            family: Some(String::new()),
            category: Some(String::new()),
        };
        assert_eq!(filter_icons(&icons, &open).len(), icons.len());
    }

    #[test]
    fn equal_rank_and_length_keep_catalog_order() {
        let icons = vec![icon("abc_x", 1, &[]), icon("abc_y", 9, &[])];
        assert_eq!(names(&filter_icons(&icons, &query("abc"))), ["abc_x", "abc_y"]);
    }
}
