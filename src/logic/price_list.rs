//! Flat price list lookup.
//!
//! Matching is case- and space-insensitive. Candidate keys are tried exact
//! first, then by substring. "Additional" products use a keyword classifier
//! instead of the generic matching.

use crate::model::PriceList;
use itertools::Itertools;
use std::collections::BTreeMap;

const EXPRESS_KEYWORDS: &[&str] = &["ekspress", "ekspres", "express", "kilat"];
const FACE_KEYWORDS: &[&str] = &["wajah", "face", "orang"];

/// Lowercase and keep only letters and digits.
fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

pub struct PriceListLookup<'a> {
    prices: &'a PriceList,
}

impl<'a> PriceListLookup<'a> {
    pub fn new(prices: &'a PriceList) -> Self {
        Self { prices }
    }

    /// Price for `name` (and optionally `size`) in `category`, or `0` with a
    /// warning when nothing matches.
    pub fn lookup(&self, category: &str, name: &str, size: Option<&str>) -> f64 {
        self.find(category, name, size).unwrap_or_else(|| {
            log::warn!(
                "no price list entry for category '{}', name '{}', size '{}'",
                category,
                name,
                size.unwrap_or_default()
            );
            0.0
        })
    }

    /// Like [`lookup`](Self::lookup) but silent, returning `None` on a miss.
    pub fn find(&self, category: &str, name: &str, size: Option<&str>) -> Option<f64> {
        let wanted = normalize(category);
        let table = self
            .prices
            .iter()
            .find(|(key, _)| normalize(key) == wanted)
            .map(|(_, table)| table)?;

        let size = size.filter(|s| !s.trim().is_empty());
        if wanted == "additional" {
            return classify_additional(table, name, size);
        }
        match_generic(table, name, size)
    }
}

fn match_generic(table: &BTreeMap<String, f64>, name: &str, size: Option<&str>) -> Option<f64> {
    let name = normalize(name);
    let candidates: Vec<String> = match size.map(normalize) {
        Some(size) => vec![
            format!("{}{}", size, name),
            format!("{}{}", name, size),
            size,
        ],
        None => vec![name],
    }
    .into_iter()
    .filter(|c| !c.is_empty())
    .unique()
    .collect();

    let keys: Vec<(String, f64)> = table.iter().map(|(k, v)| (normalize(k), *v)).collect();

    for candidate in &candidates {
        if let Some((_, price)) = keys.iter().find(|(key, _)| key == candidate) {
            return Some(*price);
        }
    }

    // A key extending the candidate ("8R Premium" for "8R"): prefer the closest one.
    for candidate in &candidates {
        if let Some((_, price)) = keys
            .iter()
            .filter(|(key, _)| key.contains(candidate.as_str()))
            .min_by_key(|(key, _)| key.len())
        {
            return Some(*price);
        }
    }

    // The size fragment embedding a shorter key: prefer the most specific one.
    let fragment = candidates.last()?;
    keys.iter()
        .filter(|(key, _)| !key.is_empty() && fragment.contains(key.as_str()))
        .max_by_key(|(key, _)| key.len())
        .map(|(_, price)| *price)
}

fn has_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

fn classify_additional(
    table: &BTreeMap<String, f64>,
    name: &str,
    size: Option<&str>,
) -> Option<f64> {
    let name = normalize(name);
    let size = size.map(normalize).unwrap_or_default();
    let text = format!("{}{}", name, size);
    let keys: Vec<(String, f64)> = table.iter().map(|(k, v)| (normalize(k), *v)).collect();

    if has_any(&text, EXPRESS_KEYWORDS) {
        return keys
            .iter()
            .find(|(key, _)| has_any(key, EXPRESS_KEYWORDS))
            .map(|(_, price)| *price);
    }

    if has_any(&text, FACE_KEYWORDS) {
        let faces: Vec<&(String, f64)> = keys
            .iter()
            .filter(|(key, _)| has_any(key, FACE_KEYWORDS))
            .collect();
        return faces
            .iter()
            .find(|(key, _)| *key == size || *key == name)
            .or_else(|| {
                // "6-10" -> "610": match on the trailing count range.
                let range: String = text.chars().skip_while(|c| !c.is_ascii_digit()).collect();
                faces
                    .iter()
                    .find(|(key, _)| !range.is_empty() && key.ends_with(range.as_str()))
            })
            .map(|(_, price)| *price);
    }

    keys.iter()
        .find(|(key, _)| *key == size || *key == name)
        .map(|(_, price)| *price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::data::default_price_list;

    #[test]
    fn test_category_match_ignores_case_and_spaces() {
        let prices = default_price_list();
        let lookup = PriceListLookup::new(&prices);

        assert_eq!(lookup.find("2d frame", "Bingkai 2D", Some("8R")), Some(100000.0));
        assert_eq!(lookup.find("  2D  Frame", "Bingkai 2D", Some("12 r")), Some(175000.0));
        assert_eq!(lookup.find("3DFRAME", "Bingkai 3D", Some("20x20cm")), Some(200000.0));
    }

    #[test]
    fn test_exact_match_wins_over_substring() {
        let mut prices = PriceList::new();
        prices.insert(
            "2D Frame".to_string(),
            [("8R Premium".to_string(), 180000.0), ("8R".to_string(), 100000.0)]
                .into_iter()
                .collect(),
        );
        let lookup = PriceListLookup::new(&prices);

        assert_eq!(lookup.find("2D Frame", "Bingkai", Some("8R")), Some(100000.0));
        assert_eq!(lookup.find("2D Frame", "Bingkai", Some("Premium")), Some(180000.0));
    }

    #[test]
    fn test_substring_fallback_prefers_closest_key() {
        let mut prices = PriceList::new();
        prices.insert(
            "2D Frame".to_string(),
            [
                ("Bingkai 10R Deluxe Wood".to_string(), 300000.0),
                ("Bingkai 10R Deluxe".to_string(), 200000.0),
            ]
            .into_iter()
            .collect(),
        );
        let lookup = PriceListLookup::new(&prices);

        assert_eq!(lookup.find("2D Frame", "", Some("10R")), Some(200000.0));
    }

    #[test]
    fn test_size_embedding_key() {
        let prices = default_price_list();
        let lookup = PriceListLookup::new(&prices);

        assert_eq!(lookup.find("Acrylic Stand", "Stand", Some("Ukuran A4")), Some(125000.0));
    }

    #[test]
    fn test_additional_keyword_classifier() {
        let prices = default_price_list();
        let lookup = PriceListLookup::new(&prices);

        assert_eq!(lookup.find("Additional", "Layanan", Some("ekspress")), Some(50000.0));
        assert_eq!(lookup.find("Additional", "Express order", None), Some(50000.0));
        assert_eq!(
            lookup.find("Additional", "Layanan", Some("tambah-wajah-1-5")),
            Some(25000.0)
        );
        assert_eq!(lookup.find("Additional", "Tambah wajah", Some("6-10")), Some(50000.0));
        assert_eq!(
            lookup.find("Additional", "Tambah Wajah 6-10", None),
            Some(50000.0)
        );
    }

    #[test]
    fn test_additional_does_not_fall_back_to_substrings() {
        let prices = default_price_list();
        let lookup = PriceListLookup::new(&prices);

        assert_eq!(lookup.find("Additional", "Layanan", Some("hari")), None);
    }

    #[test]
    fn test_miss_returns_zero() {
        let prices = default_price_list();
        let lookup = PriceListLookup::new(&prices);

        assert_eq!(lookup.lookup("2D Frame", "Bingkai 2D", Some("black")), 0.0);
        assert_eq!(lookup.lookup("Unknown", "Anything", None), 0.0);
    }
}
