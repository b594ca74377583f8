//! Genus heuristics and species-tuned adjustments

use super::seed::{pick_by_seed, SpeciesSeed};

const WOODY_GENERA: [&str; 9] = [
    "Quercus", "Eucalyptus", "Pinus", "Picea", "Malus", "Prunus", "Citrus", "Vitis", "Ficus",
];
const MONOCOT_GENERA: [&str; 9] = [
    "Oryza", "Zea", "Triticum", "Hordeum", "Allium", "Musa", "Lilium", "Dendrobium", "Phalaenopsis",
];

const ADJUSTMENT_ANTIOXIDANTS: [&str; 4] = [
    "ascorbic acid rinse",
    "citric acid rinse",
    "PVP addition",
    "activated charcoal pre-filter",
];
const ADJUSTMENT_LIGHT: [&str; 3] = [
    "40-60 µmol m⁻² s⁻¹",
    "60-80 µmol m⁻² s⁻¹",
    "20-40 µmol m⁻² s⁻¹",
];
const PASSAGE_GUIDANCE: [&str; 3] = [
    "reduce subculture interval by 1 week after passage 2",
    "extend subculture interval by 1 week if vitrification appears",
    "maintain constant interval across passages",
];

/// First space-delimited token of a species name, or the whole name
pub fn genus_of(species: &str) -> &str {
    match species.split(' ').next() {
        Some(genus) if !genus.is_empty() => genus,
        _ => species,
    }
}

/// Lineage notes inferred from the genus
pub fn species_intel(species: &str) -> Vec<String> {
    let genus = genus_of(species);
    let woody = WOODY_GENERA.contains(&genus);
    let monocot = MONOCOT_GENERA.contains(&genus);

    let mut notes = vec![format!("Genus detected: {genus}.")];
    if woody {
        notes.push(
            "Woody lineage likely; consider WPM or reduced ammonium for callus and shoot quality."
                .to_string(),
        );
    }
    if monocot {
        notes.push(
            "Monocot lineage likely; monitor for phenolic exudation and adjust antioxidants if browning occurs."
                .to_string(),
        );
    }
    if !woody && !monocot {
        notes.push(
            "General angiosperm assumptions applied; refine with species-specific literature."
                .to_string(),
        );
    }
    notes
}

/// Seed-tuned adjustment notes
pub fn species_adjustments(seed: SpeciesSeed, lineage: &str) -> Vec<String> {
    let antioxidant = pick_by_seed(&ADJUSTMENT_ANTIOXIDANTS, seed, 13);
    let light = pick_by_seed(&ADJUSTMENT_LIGHT, seed, 17);
    let initiation_days = 10 + seed.modulo(7);
    let passage = pick_by_seed(&PASSAGE_GUIDANCE, seed, 23);

    vec![
        format!("Lineage heuristic: {lineage}."),
        format!("Suggested antioxidant strategy: {antioxidant}."),
        format!("Initiation window target: {initiation_days}-day observation before first transfer."),
        format!("Light intensity cue: {light}."),
        format!("Passage guidance: {passage}."),
        format!("Species calibration key: {}.", seed.fingerprint_key()),
    ]
}
