//! Narrative templates for explanations and recommendations.
//!
//! Pure template selection: named overrides for well-known drugs, category
//! templates otherwise, with the drug name interpolated. The resolution order
//! mirrors the profile store.

use crate::classifier::{classify, Category};

/// One-paragraph description of what the drug is and how it works.
pub fn explain(name: &str) -> String {
    match name {
        "Acetaminophen" => format!(
            "{name} is an analgesic and antipyretic medication commonly used for pain relief \
             and fever reduction. It works by inhibiting cyclooxygenase enzymes in the central \
             nervous system and has minimal anti-inflammatory effects compared to NSAIDs."
        ),
        "Aspirin" => format!(
            "{name} is a nonsteroidal anti-inflammatory drug (NSAID) commonly used for pain \
             relief, fever reduction, and cardiovascular protection. It works by inhibiting \
             cyclooxygenase enzymes, reducing prostaglandin synthesis and providing \
             anti-inflammatory, analgesic, and antiplatelet effects."
        ),
        "Ibuprofen" => format!(
            "{name} is a nonsteroidal anti-inflammatory drug (NSAID) used for pain, \
             inflammation, and fever management. It selectively inhibits cyclooxygenase \
             enzymes, providing effective anti-inflammatory and analgesic properties."
        ),
        "Naproxen" => format!(
            "{name} is a long-acting nonsteroidal anti-inflammatory drug (NSAID) used for \
             chronic pain and inflammatory conditions. It provides sustained anti-inflammatory \
             effects with twice-daily dosing due to its extended half-life."
        ),
        "Metformin" => format!(
            "{name} is a first-line antidiabetic medication used to treat type 2 diabetes \
             mellitus. It works by decreasing hepatic glucose production and improving insulin \
             sensitivity in peripheral tissues."
        ),
        "Lisinopril" => format!(
            "{name} is an angiotensin-converting enzyme (ACE) inhibitor used to treat \
             hypertension and heart failure. It works by blocking the conversion of \
             angiotensin I to angiotensin II, reducing blood pressure and cardiac workload."
        ),
        "Atorvastatin" => format!(
            "{name} is a HMG-CoA reductase inhibitor (statin) used to lower cholesterol and \
             prevent cardiovascular disease. It works by inhibiting cholesterol synthesis in \
             the liver, reducing LDL cholesterol levels."
        ),
        "Omeprazole" => format!(
            "{name} is a proton pump inhibitor (PPI) used to treat gastroesophageal reflux \
             disease and peptic ulcers. It works by irreversibly blocking the H+/K+-ATPase \
             enzyme in gastric parietal cells, reducing stomach acid production."
        ),
        _ => explain_by_category(name),
    }
}

fn explain_by_category(name: &str) -> String {
    match classify(name) {
        Category::AntibodyLike => format!(
            "{name} is a monoclonal antibody for targeted therapy. It provides precise \
             disease treatment with reduced off-target side effects."
        ),
        Category::KinaseInhibitorLike => format!(
            "{name} is a kinase inhibitor for cancer treatment. It blocks specific enzymes \
             driving tumor growth."
        ),
        Category::PeptideLike => format!(
            "{name} is a peptide or protein therapeutic acting on a well-defined molecular \
             target. It is degraded in the gastrointestinal tract and is typically \
             administered parenterally."
        ),
        Category::SmallMolecule => format!(
            "{name} is a pharmaceutical compound with specific pharmacokinetic and \
             pharmacodynamic properties. This analysis presents the comparative release \
             profiles across different formulation types for therapeutic optimization."
        ),
    }
}

/// One-paragraph best-release-formulation recommendation, keyed by category.
pub fn recommend(name: &str) -> String {
    match classify(name) {
        Category::AntibodyLike => format!(
            "Best Release Recommendation: {name} requires targeted delivery due to its \
             protein structure. Subcutaneous injection with extended-release reduces dosing \
             frequency and improves compliance."
        ),
        Category::KinaseInhibitorLike => format!(
            "Best Release Recommendation: {name} benefits from sustained release to maintain \
             therapeutic levels. SR tablets provide consistent kinase inhibition with reduced \
             toxicity."
        ),
        Category::PeptideLike => format!(
            "Best Release Recommendation: {name} degrades in the gastrointestinal tract, so \
             targeted parenteral delivery is preferred. Depot formulations extend exposure \
             and reduce dosing frequency."
        ),
        Category::SmallMolecule => format!(
            "Best Release Recommendation: For {name}, the optimal formulation depends on \
             therapeutic goals: IR for rapid onset, SR/CR for sustained therapy with improved \
             compliance. Targeted release offers the best therapeutic index with minimal side \
             effects, making it ideal for chronic conditions requiring precise drug delivery."
        ),
    }
}

/// Static bibliography block, with the drug name interpolated into the
/// database citations.
pub fn references(name: &str) -> String {
    format!(
        "References:\n\
         • FDA Drug Database - {name} prescribing information and clinical data\n\
         • Shargel L, Yu ABC. Applied Biopharmaceutics & Pharmacokinetics. 7th ed. \
         McGraw-Hill; 2016. ISBN: 978-0071375504\n\
         • Rowland M, Tozer TN. Clinical Pharmacokinetics and Pharmacodynamics. 4th ed. \
         Lippincott Williams & Wilkins; 2011. ISBN: 978-0781750097\n\
         • DrugBank Database - {name} pharmacological data (drugbank.ca)\n\
         • ClinicalTrials.gov - {name} clinical trial safety profiles\n\
         • Goodman & Gilman's Pharmacological Basis of Therapeutics. 13th ed. McGraw-Hill; \
         2018. ISBN: 978-1259584732"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_overrides_win_over_category_templates() {
        let text = explain("Metformin");
        assert!(text.contains("antidiabetic"));
        assert!(text.starts_with("Metformin"));
    }

    #[test]
    fn category_templates_interpolate_the_name() {
        let text = explain("tarlatamab-dlle");
        assert!(text.starts_with("tarlatamab-dlle"));
        assert!(text.contains("monoclonal antibody"));

        let text = explain("sunvozertinib");
        assert!(text.contains("kinase inhibitor"));

        let text = explain("trofinetide");
        assert!(text.contains("peptide"));
    }

    #[test]
    fn recommendation_follows_category() {
        assert!(recommend("tarlatamab-dlle").contains("Subcutaneous"));
        assert!(recommend("sunvozertinib").contains("SR tablets"));
        assert!(recommend("trofinetide").contains("parenteral"));
        assert!(recommend("Metformin").contains("IR for rapid onset"));
    }

    #[test]
    fn references_cite_the_drug_by_name() {
        let refs = references("Aspirin");
        assert!(refs.starts_with("References:"));
        assert_eq!(refs.matches("Aspirin").count(), 3);
        assert_eq!(refs.lines().count(), 7);
    }
}
