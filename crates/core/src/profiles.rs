//! Constant PK/PD release-profile tables.
//!
//! One 11-parameter x 6-formulation matrix per classification bucket, plus
//! exact-match overrides for a short list of well-known drugs. Pure lookup:
//! no computation, no randomness, no external data source. The values are
//! hand-authored illustrative ranges.

use std::collections::HashMap;

use crate::classifier::{classify, Category};
use crate::constants::PARAMETERS;

/// One parameter's values across the six formulations, in column order.
pub type FormulationRow = [&'static str; 6];

/// An 11-parameter x 6-formulation matrix of illustrative range strings.
///
/// Rows follow [`PARAMETERS`](crate::constants::PARAMETERS) order; columns
/// follow [`FORMULATIONS`](crate::constants::FORMULATIONS) order. The array
/// types make the 11x6 shape an invariant of construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseProfile {
    rows: [FormulationRow; 11],
}

impl ReleaseProfile {
    pub const fn new(rows: [FormulationRow; 11]) -> Self {
        Self { rows }
    }

    /// Rows in fixed parameter order.
    pub fn rows(&self) -> &[FormulationRow; 11] {
        &self.rows
    }

    /// Values for a single named parameter.
    pub fn row(&self, parameter: &str) -> Option<&FormulationRow> {
        PARAMETERS
            .iter()
            .position(|p| *p == parameter)
            .map(|i| &self.rows[i])
    }
}

/// Profile lookup: named overrides first, category table otherwise.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    overrides: HashMap<&'static str, &'static ReleaseProfile>,
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileStore {
    /// Create a store with the built-in named overrides.
    pub fn new() -> Self {
        Self {
            overrides: default_overrides(),
        }
    }

    /// Resolve the profile table for a drug name.
    pub fn table_for(&self, name: &str) -> &'static ReleaseProfile {
        if let Some(profile) = self.overrides.get(name) {
            return profile;
        }
        category_profile(classify(name))
    }

    /// Whether an exact-match override exists for this name.
    pub fn has_override(&self, name: &str) -> bool {
        self.overrides.contains_key(name)
    }
}

/// The constant table for a classification bucket.
pub fn category_profile(category: Category) -> &'static ReleaseProfile {
    match category {
        Category::AntibodyLike => &ANTIBODY,
        Category::KinaseInhibitorLike => &KINASE_INHIBITOR,
        Category::PeptideLike => &PEPTIDE,
        Category::SmallMolecule => &SMALL_MOLECULE,
    }
}

fn default_overrides() -> HashMap<&'static str, &'static ReleaseProfile> {
    let mut map: HashMap<&'static str, &'static ReleaseProfile> = HashMap::new();
    map.insert("Acetaminophen", &ACETAMINOPHEN);
    map.insert("Aspirin", &ASPIRIN);
    map.insert("Ibuprofen", &IBUPROFEN);
    map.insert("Naproxen", &NAPROXEN);
    map.insert("Metformin", &METFORMIN);
    map.insert("Lisinopril", &LISINOPRIL);
    map.insert("Atorvastatin", &ATORVASTATIN);
    map.insert("Omeprazole", &OMEPRAZOLE);
    map
}

static ACETAMINOPHEN: ReleaseProfile = ReleaseProfile::new([
    ["90%/20min", "50%/3h", "25%/6h", "20%/10h", "0%/1h", "80%/site"],
    ["3-10min", "20-45min", "45-90min", "90-180min", "30-120min", "10-35min"],
    ["First-order", "Zero-order", "Mixed-order", "Zero-order", "First-order", "Targeted"],
    ["20µg/mL", "12µg/mL", "8µg/mL", "6µg/mL", "18µg/mL", "25µg/mL"],
    ["0.5-2h", "2-4h", "4-6h", "6-8h", "2-4h", "1-2h"],
    ["60µg·h/mL", "75µg·h/mL", "85µg·h/mL", "95µg·h/mL", "55µg·h/mL", "110µg·h/mL"],
    ["1-4h", "4-6h", "6-8h", "8-12h", "1-4h", "2-5h"],
    ["30-60min", "1-2h", "2-3h", "3-4h", "1-2h", "45min"],
    ["4-6h", "6-8h", "8-12h", "12-16h", "4-6h", "6-8h"],
    ["Hepatotoxic", "Reduced", "Minimal", "Minimal", "Delayed", "Site-specific"],
    ["36 months", "48 months", "60 months", "72 months", "36 months", "24 months"],
]);

static ASPIRIN: ReleaseProfile = ReleaseProfile::new([
    ["95%/15min", "60%/2h", "30%/6h", "25%/8h", "5%/1h", "85%/site"],
    ["2-8min", "20-40min", "45-90min", "90-180min", "30-120min", "10-30min"],
    ["First-order", "Zero-order", "Mixed-order", "Zero-order", "First-order", "Targeted"],
    ["150µg/mL", "80µg/mL", "50µg/mL", "40µg/mL", "120µg/mL", "200µg/mL"],
    ["0.5-1h", "2-4h", "4-6h", "6-8h", "2-4h", "1-2h"],
    ["300µg·h/mL", "400µg·h/mL", "450µg·h/mL", "500µg·h/mL", "280µg·h/mL", "600µg·h/mL"],
    ["2-3h", "4-6h", "6-8h", "8-12h", "2-3h", "3-5h"],
    ["15-30min", "1-2h", "2-3h", "3-4h", "1-2h", "30min"],
    ["4-6h", "8-12h", "12-16h", "16-24h", "6-8h", "8-10h"],
    ["GI irritation", "Reduced GI", "Minimal GI", "Minimal GI", "Delayed GI", "Site-specific"],
    ["36 months", "48 months", "60 months", "72 months", "36 months", "24 months"],
]);

static IBUPROFEN: ReleaseProfile = ReleaseProfile::new([
    ["90%/20min", "55%/3h", "28%/7h", "22%/10h", "0%/1.5h", "80%/site"],
    ["5-12min", "25-50min", "50-100min", "100-200min", "45-150min", "12-40min"],
    ["First-order", "Zero-order", "Mixed-order", "Zero-order", "First-order", "Targeted"],
    ["40mg/L", "25mg/L", "18mg/L", "15mg/L", "35mg/L", "50mg/L"],
    ["1-2h", "3-5h", "5-7h", "7-10h", "3-5h", "1.5-3h"],
    ["120mg·h/L", "150mg·h/L", "170mg·h/L", "190mg·h/L", "110mg·h/L", "220mg·h/L"],
    ["2-4h", "6-8h", "8-12h", "12-16h", "2-4h", "4-6h"],
    ["30-60min", "1-3h", "2-4h", "4-6h", "2-3h", "45min"],
    ["4-6h", "8-12h", "12-18h", "18-24h", "6-8h", "8-12h"],
    ["GI/CNS", "Reduced", "Minimal", "Minimal", "Delayed", "Site-specific"],
    ["36 months", "48 months", "60 months", "72 months", "36 months", "24 months"],
]);

static NAPROXEN: ReleaseProfile = ReleaseProfile::new([
    ["85%/30min", "45%/4h", "22%/8h", "18%/12h", "0%/2h", "75%/site"],
    ["8-15min", "30-60min", "60-120min", "120-240min", "45-180min", "15-45min"],
    ["First-order", "Zero-order", "Mixed-order", "Zero-order", "First-order", "Targeted"],
    ["80mg/L", "50mg/L", "35mg/L", "28mg/L", "70mg/L", "100mg/L"],
    ["2-4h", "4-6h", "6-8h", "8-12h", "4-6h", "2-4h"],
    ["800mg·h/L", "1000mg·h/L", "1100mg·h/L", "1200mg·h/L", "750mg·h/L", "1400mg·h/L"],
    ["12-17h", "15-20h", "18-24h", "20-30h", "12-17h", "14-18h"],
    ["1-2h", "2-4h", "4-6h", "6-8h", "3-5h", "1-3h"],
    ["8-12h", "12-18h", "18-24h", "24h", "10-14h", "12-16h"],
    ["GI/CV", "Reduced", "Minimal", "Minimal", "Delayed", "Site-specific"],
    ["36 months", "48 months", "60 months", "72 months", "36 months", "24 months"],
]);

static METFORMIN: ReleaseProfile = ReleaseProfile::new([
    ["85%/30min", "45%/4h", "20%/8h", "15%/12h", "0%/2h", "75%/site"],
    ["10-20min", "45-75min", "90-150min", "150-300min", "60-180min", "20-60min"],
    ["First-order", "Zero-order", "Mixed-order", "Zero-order", "First-order", "Targeted"],
    ["2.5mg/L", "1.8mg/L", "1.2mg/L", "1.0mg/L", "2.2mg/L", "3.0mg/L"],
    ["2-3h", "4-6h", "6-8h", "8-12h", "4-6h", "2-4h"],
    ["15mg·h/L", "18mg·h/L", "20mg·h/L", "22mg·h/L", "14mg·h/L", "25mg·h/L"],
    ["4-6h", "8-10h", "10-14h", "14-18h", "4-6h", "6-8h"],
    ["1-2h", "2-4h", "4-6h", "6-8h", "3-5h", "1-3h"],
    ["8-12h", "12-18h", "18-24h", "24h", "10-14h", "12-16h"],
    ["GI upset", "Reduced GI", "Minimal GI", "Minimal GI", "Delayed GI", "Targeted"],
    ["24 months", "36 months", "48 months", "60 months", "24 months", "18 months"],
]);

static LISINOPRIL: ReleaseProfile = ReleaseProfile::new([
    ["80%/45min", "40%/5h", "18%/10h", "12%/15h", "0%/3h", "70%/site"],
    ["12-25min", "50-90min", "90-180min", "180-360min", "60-240min", "20-60min"],
    ["First-order", "Zero-order", "Mixed-order", "Zero-order", "First-order", "Targeted"],
    ["90ng/mL", "55ng/mL", "35ng/mL", "28ng/mL", "80ng/mL", "110ng/mL"],
    ["6-8h", "8-12h", "12-16h", "16-24h", "8-12h", "6-10h"],
    ["400ng·h/mL", "500ng·h/mL", "550ng·h/mL", "600ng·h/mL", "380ng·h/mL", "700ng·h/mL"],
    ["12h", "15-18h", "18-24h", "24-30h", "12h", "14-16h"],
    ["1-2h", "2-4h", "4-6h", "6-8h", "3-5h", "1-3h"],
    ["24h", "24h", "24h", "24h", "20-24h", "24h"],
    ["Cough/Angioedema", "Reduced", "Minimal", "Minimal", "Delayed", "Site-specific"],
    ["36 months", "48 months", "60 months", "72 months", "36 months", "24 months"],
]);

static ATORVASTATIN: ReleaseProfile = ReleaseProfile::new([
    ["75%/60min", "35%/6h", "15%/12h", "10%/18h", "0%/4h", "65%/site"],
    ["15-30min", "60-120min", "120-240min", "240-480min", "90-300min", "30-90min"],
    ["First-order", "Zero-order", "Mixed-order", "Zero-order", "First-order", "Targeted"],
    ["15ng/mL", "8ng/mL", "5ng/mL", "3ng/mL", "12ng/mL", "20ng/mL"],
    ["1-2h", "3-5h", "5-8h", "8-12h", "3-5h", "1.5-3h"],
    ["45ng·h/mL", "60ng·h/mL", "70ng·h/mL", "80ng·h/mL", "40ng·h/mL", "95ng·h/mL"],
    ["14h", "18-22h", "22-28h", "28-36h", "14h", "16-20h"],
    ["2-4h", "4-8h", "8-12h", "12-16h", "6-10h", "2-6h"],
    ["24h", "24h", "24h", "24h", "20-24h", "24h"],
    ["Myalgia/Hepatic", "Reduced", "Minimal", "Minimal", "Delayed", "Site-specific"],
    ["24 months", "36 months", "48 months", "60 months", "24 months", "18 months"],
]);

static OMEPRAZOLE: ReleaseProfile = ReleaseProfile::new([
    ["0%/2h", "70%/4h", "40%/8h", "30%/12h", "85%/3h", "75%/site"],
    ["Enteric", "45-90min", "90-180min", "180-360min", "30-120min", "20-60min"],
    ["First-order", "Zero-order", "Mixed-order", "Zero-order", "First-order", "Targeted"],
    ["1.2µg/mL", "0.8µg/mL", "0.5µg/mL", "0.4µg/mL", "1.0µg/mL", "1.5µg/mL"],
    ["1-2h", "3-5h", "5-8h", "8-12h", "2-4h", "1.5-3h"],
    ["2.5µg·h/mL", "3.2µg·h/mL", "3.8µg·h/mL", "4.2µg·h/mL", "2.2µg·h/mL", "4.8µg·h/mL"],
    ["0.5-1h", "1-2h", "2-4h", "4-6h", "0.5-1h", "1-1.5h"],
    ["1-2h", "2-4h", "4-6h", "6-8h", "1-3h", "1-2h"],
    ["24h", "24h", "24h", "24h", "20-24h", "24h"],
    ["GI/CNS", "Reduced", "Minimal", "Minimal", "Delayed", "Site-specific"],
    ["36 months", "48 months", "60 months", "72 months", "36 months", "24 months"],
]);

// Biologics are not orally dissolved, hence the N/A dissolution rows.
static ANTIBODY: ReleaseProfile = ReleaseProfile::new([
    ["N/A", "N/A", "N/A", "N/A", "N/A", "95%/site"],
    ["N/A", "N/A", "N/A", "N/A", "N/A", "5-15min"],
    ["Linear", "Linear", "Linear", "Linear", "Linear", "Targeted"],
    ["50µg/mL", "45µg/mL", "40µg/mL", "35µg/mL", "48µg/mL", "75µg/mL"],
    ["24-72h", "48-96h", "72-120h", "96-168h", "48-96h", "12-24h"],
    ["2500µg·h/mL", "3000µg·h/mL", "3500µg·h/mL", "4000µg·h/mL", "2800µg·h/mL", "5000µg·h/mL"],
    ["14-21d", "21-28d", "28-35d", "35-42d", "14-21d", "10-14d"],
    ["2-4 weeks", "4-6 weeks", "6-8 weeks", "8-12 weeks", "4-6 weeks", "1-2 weeks"],
    ["4-12 weeks", "8-16 weeks", "12-24 weeks", "16-32 weeks", "8-16 weeks", "4-8 weeks"],
    ["Infusion reactions", "Reduced", "Minimal", "Minimal", "Delayed", "Site-specific"],
    ["24 months", "36 months", "48 months", "60 months", "24 months", "18 months"],
]);

static KINASE_INHIBITOR: ReleaseProfile = ReleaseProfile::new([
    ["80%/30min", "45%/4h", "22%/8h", "18%/12h", "0%/2h", "70%/site"],
    ["10-20min", "30-60min", "60-120min", "120-240min", "45-180min", "15-45min"],
    ["First-order", "Zero-order", "Mixed-order", "Zero-order", "First-order", "Targeted"],
    ["250ng/mL", "180ng/mL", "120ng/mL", "95ng/mL", "220ng/mL", "350ng/mL"],
    ["2-4h", "4-8h", "6-12h", "8-16h", "4-8h", "2-6h"],
    ["1200ng·h/mL", "1800ng·h/mL", "2200ng·h/mL", "2800ng·h/mL", "1400ng·h/mL", "3200ng·h/mL"],
    ["8-12h", "12-18h", "18-24h", "24-36h", "8-12h", "6-10h"],
    ["2-4h", "4-8h", "6-12h", "8-16h", "4-8h", "2-4h"],
    ["12-24h", "24-48h", "48-72h", "72-96h", "24-48h", "12-24h"],
    ["Hepatotoxic/Rash", "Reduced", "Minimal", "Minimal", "Delayed", "Site-specific"],
    ["24 months", "36 months", "48 months", "60 months", "24 months", "18 months"],
]);

static PEPTIDE: ReleaseProfile = ReleaseProfile::new([
    ["N/A", "N/A", "N/A", "N/A", "N/A", "90%/site"],
    ["N/A", "N/A", "N/A", "N/A", "N/A", "2-10min"],
    ["Non-linear", "Non-linear", "Non-linear", "Non-linear", "Non-linear", "Targeted"],
    ["15µg/mL", "12µg/mL", "8µg/mL", "6µg/mL", "14µg/mL", "25µg/mL"],
    ["1-3h", "2-6h", "4-8h", "6-12h", "2-6h", "0.5-2h"],
    ["180µg·h/mL", "280µg·h/mL", "350µg·h/mL", "450µg·h/mL", "220µg·h/mL", "600µg·h/mL"],
    ["2-6h", "4-8h", "6-12h", "8-16h", "2-6h", "1-4h"],
    ["30min-2h", "1-4h", "2-6h", "4-8h", "1-4h", "15-60min"],
    ["6-12h", "12-24h", "24-48h", "48-72h", "12-24h", "4-8h"],
    ["Injection site", "Reduced", "Minimal", "Minimal", "Delayed", "Site-specific"],
    ["18 months", "24 months", "36 months", "48 months", "18 months", "12 months"],
]);

static SMALL_MOLECULE: ReleaseProfile = ReleaseProfile::new([
    ["75%/45min", "40%/5h", "20%/10h", "15%/15h", "0%/3h", "65%/site"],
    ["8-18min", "25-55min", "55-110min", "110-220min", "40-160min", "12-40min"],
    ["First-order", "Zero-order", "Mixed-order", "Zero-order", "First-order", "Targeted"],
    ["120ng/mL", "85ng/mL", "55ng/mL", "42ng/mL", "105ng/mL", "180ng/mL"],
    ["1.5-3h", "3-7h", "5-10h", "7-14h", "3-7h", "1-4h"],
    ["650ng·h/mL", "950ng·h/mL", "1150ng·h/mL", "1350ng·h/mL", "750ng·h/mL", "1650ng·h/mL"],
    ["6-10h", "10-16h", "16-24h", "24-36h", "6-10h", "4-8h"],
    ["45min-2h", "2-5h", "4-8h", "6-12h", "2-5h", "30min-2h"],
    ["8-16h", "16-32h", "32-48h", "48-72h", "16-32h", "6-12h"],
    ["Moderate", "Reduced", "Minimal", "Minimal", "Delayed", "Site-specific"],
    ["24 months", "36 months", "48 months", "60 months", "24 months", "18 months"],
]);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FORMULATIONS;

    #[test]
    fn every_category_table_has_full_shape() {
        for category in [
            Category::AntibodyLike,
            Category::KinaseInhibitorLike,
            Category::PeptideLike,
            Category::SmallMolecule,
        ] {
            let profile = category_profile(category);
            assert_eq!(profile.rows().len(), PARAMETERS.len());
            for row in profile.rows() {
                assert_eq!(row.len(), FORMULATIONS.len());
                for value in row {
                    assert!(!value.is_empty());
                }
            }
        }
    }

    #[test]
    fn named_override_takes_precedence_over_category() {
        let store = ProfileStore::new();
        assert!(store.has_override("Metformin"));
        let table = store.table_for("Metformin");
        assert_ne!(table, category_profile(Category::SmallMolecule));
    }

    #[test]
    fn metformin_kinetics_row_matches_expected_constants() {
        let store = ProfileStore::new();
        let row = store.table_for("Metformin").row("Kinetics").unwrap();
        assert_eq!(
            row,
            &["First-order", "Zero-order", "Mixed-order", "Zero-order", "First-order", "Targeted"],
        );
    }

    #[test]
    fn unknown_names_resolve_by_category() {
        let store = ProfileStore::new();
        assert_eq!(
            store.table_for("somethingumab"),
            category_profile(Category::AntibodyLike)
        );
        assert_eq!(
            store.table_for("plainoldpill"),
            category_profile(Category::SmallMolecule)
        );
    }

    #[test]
    fn row_lookup_by_parameter_name() {
        let profile = category_profile(Category::KinaseInhibitorLike);
        assert!(profile.row("Cmax").is_some());
        assert!(profile.row("Not A Parameter").is_none());
    }
}
