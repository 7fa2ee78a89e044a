//! City directory
//!
//! Fixed per-country city lists backing city selection and the location
//! filter, with free-text search. Candidates whose name starts with the
//! query rank before candidates that merely contain it; each group is
//! ordered case-insensitively.

use std::collections::HashMap;

use tracing::debug;

/// Country used when the requested country has no city list
const DEFAULT_COUNTRY: &str = "TR";

/// Directory of known cities per country
#[derive(Debug, Clone)]
pub struct CityDirectory {
    cities_by_country: HashMap<&'static str, Vec<&'static str>>,
}

impl CityDirectory {
    /// Create a directory with the built-in city lists
    pub fn new() -> Self {
        let mut cities_by_country = HashMap::new();
        cities_by_country.insert(
            "TR",
            vec![
                "İstanbul",
                "Ankara",
                "İzmir",
                "Bursa",
                "Antalya",
                "Adana",
                "Konya",
                "Gaziantep",
                "Kastamonu",
                "Eskişehir",
                "Samsun",
                "Trabzon",
            ],
        );

        Self { cities_by_country }
    }

    /// Cities for a country code, falling back to the default country
    pub fn cities_for(&self, country: &str) -> &[&'static str] {
        self.cities_by_country
            .get(country)
            .or_else(|| self.cities_by_country.get(DEFAULT_COUNTRY))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Search the cities of a country. An empty query returns the full
    /// list in directory order.
    pub fn search(&self, country: &str, query: &str) -> Vec<String> {
        let results = rank_matches(self.cities_for(country), query);
        debug!(country = country, query = query, matches = results.len(), "City search");
        results
    }
}

impl Default for CityDirectory {
    fn default() -> Self {
        Self::new()
    }
}

/// Rank candidates against a query: prefix matches first, then substring
/// matches, each group in case-insensitive lexicographic order.
pub fn rank_matches(candidates: &[&str], query: &str) -> Vec<String> {
    let folded_query = fold_for_search(query);
    if folded_query.is_empty() {
        return candidates.iter().map(|name| name.to_string()).collect();
    }

    let mut matches: Vec<(bool, String, String)> = candidates
        .iter()
        .filter_map(|name| {
            let folded = fold_for_search(name);
            if folded.starts_with(&folded_query) {
                Some((true, folded, name.to_string()))
            } else if folded.contains(&folded_query) {
                Some((false, folded, name.to_string()))
            } else {
                None
            }
        })
        .collect();

    matches.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1)));
    matches.into_iter().map(|(_, _, name)| name).collect()
}

/// Case-fold for search. The Turkish dotted/dotless I pair is mapped
/// explicitly so a query typed with an ASCII "i" matches "İstanbul".
fn fold_for_search(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            'İ' => folded.push('i'),
            'I' => folded.push('ı'),
            _ => folded.extend(c.to_lowercase()),
        }
    }
    folded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_match_ranks_before_substring_match() {
        let candidates = ["İstanbul", "Kastamonu", "Bursa", "Gaziantep", "Antalya", "Ankara", "Adana"];

        let results = rank_matches(&candidates, "an");
        // Prefix group: Ankara, Antalya; substring group: Adana, Gaziantep, İstanbul
        assert_eq!(
            results,
            vec!["Ankara", "Antalya", "Adana", "Gaziantep", "İstanbul"]
        );
    }

    #[test]
    fn test_turkish_dotted_i_matches_ascii_query() {
        let candidates = ["İstanbul", "Kastamonu", "Bursa"];
        let results = rank_matches(&candidates, "ist");
        assert_eq!(results, vec!["İstanbul"]);
    }

    #[test]
    fn test_empty_query_returns_directory_order() {
        let directory = CityDirectory::new();
        let all = directory.search("TR", "");
        assert_eq!(all.first().map(String::as_str), Some("İstanbul"));
        assert_eq!(all.len(), directory.cities_for("TR").len());
    }

    #[test]
    fn test_unknown_country_falls_back_to_default() {
        let directory = CityDirectory::new();
        assert_eq!(directory.cities_for("XX"), directory.cities_for("TR"));
    }

    #[test]
    fn test_no_match_returns_empty() {
        let directory = CityDirectory::new();
        assert!(directory.search("TR", "zzz").is_empty());
    }
}
