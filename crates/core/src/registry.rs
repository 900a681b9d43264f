//! Drug name registry.
//!
//! The registry is the allow-list behind validation and autocomplete. It is
//! plain configuration: construct one from any name list, or use the built-in
//! list. Nothing mutates it after construction, so a single instance can be
//! shared by reference across concurrent request handlers.

use crate::constants::{MIN_SEARCH_QUERY_LEN, SEARCH_RESULT_LIMIT};

/// Ordered allow-list of known drug names.
#[derive(Debug, Clone)]
pub struct DrugRegistry {
    names: Vec<String>,
}

impl Default for DrugRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl DrugRegistry {
    /// Create a registry from an explicit name list, preserving order.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a registry with the built-in allow-list.
    pub fn builtin() -> Self {
        Self::new(BUILTIN_DRUGS.iter().copied())
    }

    /// Exact-match membership check. Case-sensitive.
    pub fn is_known(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Case-insensitive substring search, in registry order.
    ///
    /// Queries shorter than two characters return an empty vec; absence of
    /// matches is not an error.
    pub fn search(&self, query: &str, limit: usize) -> Vec<&str> {
        if query.chars().count() < MIN_SEARCH_QUERY_LEN {
            return Vec::new();
        }
        let query = query.to_lowercase();
        self.names
            .iter()
            .filter(|n| n.to_lowercase().contains(&query))
            .take(limit)
            .map(String::as_str)
            .collect()
    }

    /// Search with the default result cap.
    pub fn suggest(&self, query: &str) -> Vec<&str> {
        self.search(query, SEARCH_RESULT_LIMIT)
    }

    /// All registered names, in registry order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Built-in allow-list: common prescription drugs plus 2023-2025 novel agents.
const BUILTIN_DRUGS: &[&str] = &[
    "Acetaminophen",
    "Aspirin",
    "Ibuprofen",
    "Naproxen",
    "Diclofenac",
    "Metformin",
    "Insulin",
    "Glipizide",
    "Pioglitazone",
    "Sitagliptin",
    "Lisinopril",
    "Losartan",
    "Amlodipine",
    "Metoprolol",
    "Atenolol",
    "Atorvastatin",
    "Simvastatin",
    "Rosuvastatin",
    "Pravastatin",
    "Omeprazole",
    "Lansoprazole",
    "Pantoprazole",
    "Esomeprazole",
    "Sertraline",
    "Fluoxetine",
    "Paroxetine",
    "Escitalopram",
    "Lorazepam",
    "Alprazolam",
    "Diazepam",
    "Clonazepam",
    "Tramadol",
    "Codeine",
    "Morphine",
    "Oxycodone",
    "Hydrocodone",
    "Amoxicillin",
    "Azithromycin",
    "Ciprofloxacin",
    "Doxycycline",
    "Datroway",
    "Grafapex",
    "Journavx",
    "Gomekli",
    "Romvimza",
    "Blujepa",
    "Qfitlia",
    "Vanrafia",
    "Penpulimab-kcqx",
    "Imaavy",
    "Avmapki",
    "Fakzynja",
    "Emrelis",
    "Tryptyr",
    "Enflonsia",
    "Ibtrozi",
    "Andembry",
    "Lynozyfic",
    "Zegfrovy",
    "Ekterly",
    "Anzupgo",
    "Sephience",
    "Vizz",
    "Modeyso",
    "Hernexeos",
    "Brinsupri",
    "Zelsuvmi",
    "Exblifep",
    "Letybo",
    "Tevimbra",
    "Rezdiffra",
    "Tryvlo",
    "Duvyzt",
    "Winrevair",
    "Vafseo",
    "Voydeya",
    "Zevtera",
    "Lumisight",
    "Anktiva",
    "Ojemda",
    "Xolremdi",
    "Imdelltra",
    "Rytelo",
    "Iqirvo",
    "Sofdra",
    "Piasky",
    "Ohtuvayre",
    "Kisunia",
    "Leqselvi",
    "Voranigo",
    "Yorvipath",
    "Nemluvio",
    "Livdelzi",
    "Niktimvo",
    "Lazcluze",
    "Ebglyss",
    "Miplyffa",
    "Aqneursa",
    "Cobenfy",
    "Flyrcado",
    "Itovebi",
    "Hympavzi",
    "Vyloy",
    "Orlynvah",
    "Revuforj",
    "Ziihera",
    "Attruby",
    "Rapiblyk",
    "Iomervu",
    "Bizengri",
    "Unloxyt",
    "Crenessity",
    "Ensacove",
    "Tryngolza",
    "Alyftrek",
    "Alhemo",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_names_are_known() {
        let registry = DrugRegistry::builtin();
        for name in registry.names() {
            assert!(registry.is_known(name), "{name} should be known");
        }
    }

    #[test]
    fn membership_is_case_sensitive() {
        let registry = DrugRegistry::builtin();
        assert!(registry.is_known("Metformin"));
        assert!(!registry.is_known("metformin"));
        assert!(!registry.is_known("NotADrug"));
    }

    #[test]
    fn search_matches_substring_case_insensitively() {
        let registry = DrugRegistry::builtin();
        let results = registry.suggest("ator");
        assert!(results.contains(&"Atorvastatin"));
    }

    #[test]
    fn search_below_threshold_returns_nothing() {
        let registry = DrugRegistry::builtin();
        assert!(registry.suggest("a").is_empty());
        assert!(registry.suggest("").is_empty());
    }

    #[test]
    fn search_respects_limit_and_order() {
        let registry = DrugRegistry::new(["Alpha", "Alphabet", "Alphonse", "Beta"]);
        let results = registry.search("alph", 2);
        assert_eq!(results, vec!["Alpha", "Alphabet"]);
    }

    #[test]
    fn suggest_caps_at_ten() {
        let registry = DrugRegistry::builtin();
        // Many builtin names contain "in"; the cap must hold.
        assert!(registry.suggest("in").len() <= 10);
    }
}
