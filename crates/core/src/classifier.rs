//! Drug classification by naming suffix.
//!
//! Modern nonproprietary names encode the drug class in their stem ("-mab"
//! for monoclonal antibodies, "-tinib" for kinase inhibitors, and so on).
//! Classification here is an ordered substring scan over those stems: it
//! exists to pick a plausible constant profile table, not to make any
//! pharmacological guarantee.

/// Classification bucket driving table and narrative selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Monoclonal antibodies and related biologics.
    AntibodyLike,
    /// Small-molecule kinase inhibitors.
    KinaseInhibitorLike,
    /// Peptide and protein therapeutics, enzymes, oligonucleotides.
    PeptideLike,
    /// Fallback bucket for conventional small molecules.
    SmallMolecule,
}

/// Ordered classification rules; first match wins.
///
/// A name matching several marker sets resolves to the earliest category, so
/// antibody stems outrank kinase stems, which outrank peptide stems. New
/// markers or categories are added here, not in code.
const RULES: &[(&[&str], Category)] = &[
    (
        &["mab", "zumab", "limab", "cizumab", "tuzumab"],
        Category::AntibodyLike,
    ),
    (
        &["tinib", "nib", "sertib", "ciclib"],
        Category::KinaseInhibitorLike,
    ),
    (
        &["alfa", "beta", "ase", "sen", "tide"],
        Category::PeptideLike,
    ),
];

/// Classify a drug name by its naming markers.
pub fn classify(name: &str) -> Category {
    let lowered = name.to_lowercase();
    for (markers, category) in RULES {
        if markers.iter().any(|marker| lowered.contains(marker)) {
            return *category;
        }
    }
    Category::SmallMolecule
}
