//! Protocol document assembly
//!
//! Combines the derived parameters with the fixed phrasing of each section.
//! The result is plain data; rendering lives in [`super::render`].

use serde::Serialize;
use shared::{OptionKey, PgrStrategy, ProtocolRequest, Variant};

use super::checklists::{budget_notes, sterilization_decision, QcSummary};
use super::derivation::{media_advisories, DerivedParameters};
use super::profile::{species_adjustments, species_intel};
use super::seed::{normalize_species_name, pick_by_seed, SpeciesSeed};
use crate::catalog::Catalogs;

const DONOR_PHRASES: [&str; 3] = [
    "Select donor plants with documented health status and minimal pest pressure.",
    "Choose donor stock with traceable provenance and recent phytosanitary inspection.",
    "Prioritize donor plants with uniform growth and no visible physiological disorders.",
];
const PREWASH_PHRASES: [&str; 3] = [
    "Pre-wash explants in running water for 15-20 minutes with a mild detergent.",
    "Pre-rinse explants for 10-15 minutes, then soak briefly in diluted detergent.",
    "Rinse explants with flowing water, followed by a gentle surfactant wash.",
];

const DONOR_OFFSET: u32 = 0;
const EXCISION_OFFSET: u32 = 2;
const PREWASH_OFFSET: u32 = 4;
const INCUBATION_OFFSET: u32 = 6;

const NON_PRESET_NOTE: &str = " This species is not in the preset catalog; the protocol is a generalized academic template and should be calibrated with species-specific literature.";

/// Labels summarizing the resolved auto-choices
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fingerprint {
    pub key: String,
    pub lineage: String,
    pub explant: String,
    pub medium: String,
    pub pgr: String,
    pub variant: String,
}

/// A fully assembled protocol, ready for rendering
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProtocolDocument {
    pub header: String,
    pub species: String,
    pub summary: String,
    pub fingerprint: Fingerprint,
    pub references: Vec<String>,
    pub references_loaded: bool,
    pub species_intel: Vec<String>,
    pub species_adjustments: Vec<String>,
    pub media_warnings: Vec<String>,
    pub steps: Vec<String>,
    pub media_notes: Vec<String>,
    pub sterilization_decision: Vec<String>,
    pub budget_notes: Vec<String>,
    pub qc: QcSummary,
    pub custom_notes: Vec<String>,
    pub parameters: DerivedParameters,
}

/// Build the protocol for `request`.
///
/// `year` only feeds the header so the output stays reproducible.
pub fn build_protocol(request: &ProtocolRequest, catalogs: &Catalogs, year: i32) -> ProtocolDocument {
    let species = request.effective_species();
    let seed = SpeciesSeed::from_normalized(&normalize_species_name(species));
    let params = DerivedParameters::derive(seed, request);
    let resolved = params.resolved;

    let is_preset = catalogs.species.contains(species);
    let summary = format!(
        "This protocol targets {species} using {} on {}. It is optimized for {} under {} constraints and configured for {}.{}",
        resolved.explant.description(),
        resolved.medium.description(),
        request.scale.description(),
        request.budget.description(),
        resolved.variant.description(),
        if is_preset { "" } else { NON_PRESET_NOTE },
    );

    let mut steps = base_steps(request, &params);
    steps.extend(variant_steps(resolved.variant).iter().map(|step| step.to_string()));

    let custom_notes = match request.notes.trim() {
        "" => Vec::new(),
        notes => vec![format!("Custom notes: {notes}")],
    };

    ProtocolDocument {
        header: format!("Academic Tissue Culture Protocol ({year})"),
        species: species.to_string(),
        summary,
        fingerprint: Fingerprint {
            key: params.fingerprint_key.clone(),
            lineage: params.lineage.to_string(),
            explant: resolved.explant.description().to_string(),
            medium: resolved.medium.description().to_string(),
            pgr: resolved.pgr.description().to_string(),
            variant: resolved.variant.description().to_string(),
        },
        references: catalogs.references.lookup(species).to_vec(),
        references_loaded: catalogs.references.is_loaded(),
        species_intel: species_intel(species),
        species_adjustments: species_adjustments(seed, params.lineage),
        media_warnings: media_advisories(&request.media)
            .into_iter()
            .map(str::to_string)
            .collect(),
        steps,
        media_notes: media_notes(request),
        sterilization_decision: sterilization_decision(request.sterilization, request.contamination),
        budget_notes: budget_notes(request.scale),
        qc: QcSummary::from_checklist(&request.qc),
        custom_notes,
        parameters: params,
    }
}

fn base_steps(request: &ProtocolRequest, params: &DerivedParameters) -> Vec<String> {
    let seed = params.seed;
    let resolved = params.resolved;
    let explant = resolved.explant.description();
    let medium = resolved.medium.description();
    let conditions = request.conditions.description();
    let (photoperiod, light) = (params.photoperiod, params.light_intensity);

    let excision = [
        format!("Excise {explant} using sterile tools."),
        format!("Isolate {explant} under aseptic conditions."),
        format!("Harvest {explant} with minimal mechanical stress."),
    ];
    let incubation = [
        format!("Incubate cultures at {conditions} with {photoperiod} photoperiod and {light} light intensity."),
        format!("Maintain cultures at {conditions} and {light} light intensity under {photoperiod} photoperiod."),
        format!("Hold cultures at {conditions} using {photoperiod} photoperiod; target {light} light intensity."),
    ];
    let rooting_conditions = match resolved.pgr {
        PgrStrategy::None => "endogenous auxin",
        _ => "auxin-forward conditions",
    };
    let (rooting_start, rooting_end) = params.rooting_window();

    vec![
        format!(
            "{} Schedule collection to avoid stress conditions and record source metadata.",
            pick_by_seed(&DONOR_PHRASES, seed, DONOR_OFFSET)
        ),
        format!(
            "{} {}",
            pick_by_seed(&excision, seed, EXCISION_OFFSET),
            pick_by_seed(&PREWASH_PHRASES, seed, PREWASH_OFFSET)
        ),
        format!(
            "Surface sterilize using {} under {} for {} minutes. Follow with an {} rinse, then rinse {} times with sterile distilled water to reduce phytotoxicity.",
            request.sterilization.description(),
            request.contamination.description(),
            params.sterilant_minutes,
            params.antioxidant,
            params.rinse_count,
        ),
        format!(
            "Prepare {medium} supplemented with {}, {:.1}% sucrose, and {:.1}% agar. Adjust pH to {:.1} before autoclaving.",
            resolved.pgr.description(),
            params.sucrose_percent,
            params.agar_percent,
            params.target_ph,
        ),
        format!(
            "Inoculate explants onto initiation medium, orienting tissues to maximize meristem exposure. Target an initiation window of {} days before first transfer.",
            params.initiation_window_days
        ),
        format!(
            "{} Monitor for contamination daily for the first 7 days.",
            pick_by_seed(&incubation, seed, INCUBATION_OFFSET)
        ),
        format!(
            "Subculture every {} weeks for {} cycles. Discard contaminated cultures and maintain lineage records to prevent mix-ups.",
            params.subculture_weeks, params.multiplication_cycles
        ),
        "Transition to multiplication medium and monitor shoot proliferation. Adjust PGR ratios incrementally to minimize physiological disorders."
            .to_string(),
        format!(
            "Induce rooting with reduced salts and {rooting_conditions} over {rooting_start}-{rooting_end} days. Harden plantlets for 7-10 days in high humidity."
        ),
        "Acclimatize in sterile substrate under gradual humidity reduction. Document survival rate, contamination frequency, and multiplication index."
            .to_string(),
    ]
}

fn variant_steps(variant: Variant) -> [&'static str; 2] {
    match variant {
        Variant::Microprop => [
            "Emphasize axillary bud break and shoot multiplication with sequential subculture cycles.",
            "Record multiplication index per passage and remove hyperhydric shoots early.",
        ],
        Variant::Callus => [
            "Switch to high-auxin callus induction medium and score callus texture and color weekly.",
            "Initiate organogenesis from friable callus with stepwise cytokinin increase.",
        ],
        Variant::Embryogenesis => [
            "Induce embryogenic callus under low-light or dark conditions for 2-3 weeks.",
            "Mature somatic embryos on reduced auxin medium and transfer to germination medium.",
        ],
    }
}

fn media_notes(request: &ProtocolRequest) -> Vec<String> {
    let media = &request.media;
    let mut notes = Vec::new();
    if let Some(sucrose) = shared::MediaInputs::present(&media.sucrose) {
        notes.push(format!("Sucrose: {sucrose}%"));
    }
    if let Some(agar) = shared::MediaInputs::present(&media.agar) {
        notes.push(format!("Agar: {agar}%"));
    }
    if let Some(ph) = shared::MediaInputs::present(&media.ph) {
        notes.push(format!("pH: {ph}"));
    }
    let additives = request.additive_labels();
    if !additives.is_empty() {
        notes.push(format!("Additives: {}", additives.join(", ")));
    }
    notes
}
