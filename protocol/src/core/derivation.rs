//! Species-driven parameter derivation
//!
//! Every value here is a pure function of the species seed and the matching
//! request field. Option lists and offsets are fixed; changing either changes
//! the protocol generated for every species.

use serde::Serialize;
use shared::{Explant, MediaInputs, Medium, PgrStrategy, ProtocolRequest, Variant};

use super::seed::{pick_by_seed, SpeciesSeed};

const AUTO_VARIANTS: [Variant; 3] = [Variant::Microprop, Variant::Callus, Variant::Embryogenesis];
const AUTO_MEDIA: [Medium; 4] = [Medium::Ms, Medium::B5, Medium::Wpm, Medium::Nn];
const AUTO_EXPLANTS: [Explant; 6] = [
    Explant::ShootTip,
    Explant::Nodal,
    Explant::Leaf,
    Explant::Hypocotyl,
    Explant::Embryo,
    Explant::Meristem,
];
const AUTO_PGR: [PgrStrategy; 4] = [
    PgrStrategy::Balanced,
    PgrStrategy::Shoot,
    PgrStrategy::Root,
    PgrStrategy::None,
];

const PHOTOPERIODS: [&str; 4] = ["16/8 h", "14/10 h", "12/12 h", "10/14 h"];
const LIGHT_INTENSITIES: [&str; 4] = [
    "25-45 µmol m⁻² s⁻¹",
    "40-60 µmol m⁻² s⁻¹",
    "60-80 µmol m⁻² s⁻¹",
    "80-100 µmol m⁻² s⁻¹",
];
const ANTIOXIDANTS: [&str; 5] = [
    "ascorbic acid",
    "citric acid",
    "PVP",
    "activated charcoal",
    "reduced light preconditioning",
];
const LINEAGES: [&str; 6] = [
    "herbaceous",
    "woody",
    "succulent",
    "orchid-type",
    "grass-type",
    "aquatic-adapted",
];

const VARIANT_OFFSET: u32 = 0;
const MEDIUM_OFFSET: u32 = 3;
const EXPLANT_OFFSET: u32 = 7;
const PGR_OFFSET: u32 = 11;
const PHOTOPERIOD_OFFSET: u32 = 19;
const LIGHT_OFFSET: u32 = 29;
const ANTIOXIDANT_OFFSET: u32 = 31;
const LINEAGE_OFFSET: u32 = 37;

/// Shortest subculture interval ever recommended, in weeks
pub const MIN_SUBCULTURE_WEEKS: u32 = 3;

const PH_RANGE: (f64, f64) = (5.4, 6.2);
const AGAR_RANGE: (f64, f64) = (0.6, 1.2);

pub const PH_ADVISORY: &str =
    "pH is outside the common 5.4–6.2 range; verify buffer and gelling stability.";
pub const AGAR_ADVISORY: &str =
    "Agar concentration is outside the typical 0.6–1.2% range; gel strength may vary.";

/// Categorical choices after auto-resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedChoices {
    pub variant: Variant,
    pub medium: Medium,
    pub explant: Explant,
    pub pgr: PgrStrategy,
}

impl ResolvedChoices {
    /// Resolve every auto field of `request` against `seed`
    pub fn resolve(seed: SpeciesSeed, request: &ProtocolRequest) -> Self {
        Self {
            variant: request
                .variant
                .resolve(*pick_by_seed(&AUTO_VARIANTS, seed, VARIANT_OFFSET)),
            medium: request
                .medium
                .resolve(*pick_by_seed(&AUTO_MEDIA, seed, MEDIUM_OFFSET)),
            explant: request
                .explant
                .resolve(*pick_by_seed(&AUTO_EXPLANTS, seed, EXPLANT_OFFSET)),
            pgr: request.pgr.resolve(*pick_by_seed(&AUTO_PGR, seed, PGR_OFFSET)),
        }
    }
}

/// Concrete protocol parameters for one request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedParameters {
    pub seed: SpeciesSeed,
    pub fingerprint_key: String,
    pub resolved: ResolvedChoices,
    pub sterilant_minutes: u32,
    pub rinse_count: u32,
    pub sucrose_percent: f64,
    pub agar_percent: f64,
    pub target_ph: f64,
    pub photoperiod: &'static str,
    pub light_intensity: &'static str,
    pub subculture_adjustment: i32,
    pub subculture_weeks: u32,
    pub rooting_window_start_days: u32,
    pub initiation_window_days: u32,
    pub multiplication_cycles: u32,
    pub antioxidant: &'static str,
    pub lineage: &'static str,
}

impl DerivedParameters {
    /// Derive every parameter for `request` from `seed`
    pub fn derive(seed: SpeciesSeed, request: &ProtocolRequest) -> Self {
        let subculture_adjustment = seed.modulo(3) as i32 - 1;
        let requested_weeks = i64::from(request.subculture_weeks);
        let subculture_weeks = (requested_weeks + i64::from(subculture_adjustment))
            .max(i64::from(MIN_SUBCULTURE_WEEKS));

        Self {
            seed,
            fingerprint_key: seed.fingerprint_key(),
            resolved: ResolvedChoices::resolve(seed, request),
            sterilant_minutes: 5 + seed.modulo(8),
            rinse_count: 3 + seed.modulo(4),
            sucrose_percent: tenths(20 + seed.modulo(5) * 5),
            agar_percent: tenths(6 + seed.modulo(5)),
            target_ph: tenths(54 + seed.modulo(6)),
            photoperiod: *pick_by_seed(&PHOTOPERIODS, seed, PHOTOPERIOD_OFFSET),
            light_intensity: *pick_by_seed(&LIGHT_INTENSITIES, seed, LIGHT_OFFSET),
            subculture_adjustment,
            subculture_weeks: u32::try_from(subculture_weeks).unwrap_or(u32::MAX),
            rooting_window_start_days: 6 + seed.modulo(9),
            initiation_window_days: 8 + seed.modulo(10),
            multiplication_cycles: 2 + seed.modulo(4),
            antioxidant: *pick_by_seed(&ANTIOXIDANTS, seed, ANTIOXIDANT_OFFSET),
            lineage: *pick_by_seed(&LINEAGES, seed, LINEAGE_OFFSET),
        }
    }

    /// Rooting window as an inclusive four-day span
    pub fn rooting_window(&self) -> (u32, u32) {
        (self.rooting_window_start_days, self.rooting_window_start_days + 4)
    }
}

fn tenths(value: u32) -> f64 {
    f64::from(value) / 10.0
}

/// Range advisories for user-entered media values.
///
/// pH and agar are checked independently. Blank or non-numeric entries never
/// produce an advisory.
pub fn media_advisories(media: &MediaInputs) -> Vec<&'static str> {
    let mut advisories = Vec::new();
    if outside_range(MediaInputs::present(&media.ph), PH_RANGE) {
        advisories.push(PH_ADVISORY);
    }
    if outside_range(MediaInputs::present(&media.agar), AGAR_RANGE) {
        advisories.push(AGAR_ADVISORY);
    }
    advisories
}

fn outside_range(raw: Option<&str>, (low, high): (f64, f64)) -> bool {
    match raw.map(str::parse::<f64>) {
        Some(Ok(value)) => value < low || value > high,
        // NaN compares false both ways
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Choice;

    fn media(ph: Option<&str>, agar: Option<&str>) -> MediaInputs {
        MediaInputs {
            sucrose: None,
            agar: agar.map(str::to_string),
            ph: ph.map(str::to_string),
        }
    }

    #[test]
    fn test_oryza_sativa_auto_resolution() {
        let request = ProtocolRequest::for_species("Oryza sativa");
        let seed = SpeciesSeed::from_species(request.effective_species());
        let params = DerivedParameters::derive(seed, &request);

        // seed 2045403119: mod 3 = 2, (s+3) mod 4 = 2, (s+7) mod 6 = 0, (s+11) mod 4 = 2
        assert_eq!(params.resolved.variant, Variant::Embryogenesis);
        assert_eq!(params.resolved.medium, Medium::Wpm);
        assert_eq!(params.resolved.explant, Explant::ShootTip);
        assert_eq!(params.resolved.pgr, PgrStrategy::Root);
        assert_eq!(params.fingerprint_key, "PT-3119");

        assert_eq!(params.sterilant_minutes, 12);
        assert_eq!(params.rinse_count, 6);
        assert_eq!(params.sucrose_percent, 4.0);
        assert_eq!(params.agar_percent, 1.0);
        assert_eq!(format!("{:.1}", params.target_ph), "5.9");
        assert_eq!(params.photoperiod, "12/12 h");
        assert_eq!(params.light_intensity, "25-45 µmol m⁻² s⁻¹");
        assert_eq!(params.subculture_adjustment, 1);
        assert_eq!(params.subculture_weeks, 5);
        assert_eq!(params.rooting_window(), (8, 12));
        assert_eq!(params.initiation_window_days, 17);
        assert_eq!(params.multiplication_cycles, 5);
        assert_eq!(params.antioxidant, "ascorbic acid");
        assert_eq!(params.lineage, "herbaceous");
    }

    #[test]
    fn test_fixed_choices_are_kept() {
        let mut request = ProtocolRequest::for_species("Oryza sativa");
        request.variant = Choice::Fixed(Variant::Microprop);
        request.medium = Choice::Fixed(Medium::Custom);
        request.explant = Choice::Fixed(Explant::Leaf);
        request.pgr = Choice::Fixed(PgrStrategy::None);

        let params = DerivedParameters::derive(SpeciesSeed::from_species("Oryza sativa"), &request);
        assert_eq!(
            params.resolved,
            ResolvedChoices {
                variant: Variant::Microprop,
                medium: Medium::Custom,
                explant: Explant::Leaf,
                pgr: PgrStrategy::None,
            }
        );
    }

    #[test]
    fn test_numeric_bounds_hold_for_many_seeds() {
        let request = ProtocolRequest::default();
        for raw in (0..2_000u32).chain([u32::MAX - 3, u32::MAX, 2_147_483_648]) {
            let params = DerivedParameters::derive(SpeciesSeed::from_raw(raw), &request);
            assert!((2.0..=4.0).contains(&params.sucrose_percent));
            assert!((0.6..=1.0).contains(&params.agar_percent));
            assert!((5.4..=5.9).contains(&params.target_ph));
            assert!((5..=12).contains(&params.sterilant_minutes));
            assert!((3..=6).contains(&params.rinse_count));
            assert!((-1..=1).contains(&params.subculture_adjustment));
            assert!(params.subculture_weeks >= MIN_SUBCULTURE_WEEKS);
        }
    }

    #[test]
    fn test_subculture_never_drops_below_minimum() {
        let mut request = ProtocolRequest::default();
        request.subculture_weeks = 3;
        // seed 0 gives an adjustment of -1
        let params = DerivedParameters::derive(SpeciesSeed::from_raw(0), &request);
        assert_eq!(params.subculture_adjustment, -1);
        assert_eq!(params.subculture_weeks, 3);

        request.subculture_weeks = 0;
        let params = DerivedParameters::derive(SpeciesSeed::from_raw(0), &request);
        assert_eq!(params.subculture_weeks, 3);
    }

    #[test]
    fn test_derivation_is_repeatable() {
        let request = ProtocolRequest::for_species("Quercus robur");
        let seed = SpeciesSeed::from_species("Quercus robur");
        assert_eq!(
            DerivedParameters::derive(seed, &request),
            DerivedParameters::derive(seed, &request)
        );
    }

    #[test]
    fn test_ph_advisory_threshold() {
        assert!(media_advisories(&media(Some("5.4"), None)).is_empty());
        assert!(media_advisories(&media(Some("6.2"), None)).is_empty());
        assert_eq!(media_advisories(&media(Some("5.3"), None)), vec![PH_ADVISORY]);
        assert_eq!(media_advisories(&media(Some("6.3"), None)), vec![PH_ADVISORY]);
    }

    #[test]
    fn test_agar_advisory_threshold() {
        assert!(media_advisories(&media(None, Some("1.0"))).is_empty());
        assert_eq!(media_advisories(&media(None, Some("1.3"))), vec![AGAR_ADVISORY]);
        assert_eq!(media_advisories(&media(None, Some("0.5"))), vec![AGAR_ADVISORY]);
    }

    #[test]
    fn test_advisories_are_independent() {
        assert_eq!(
            media_advisories(&media(Some("4.0"), Some("2.0"))),
            vec![PH_ADVISORY, AGAR_ADVISORY]
        );
    }

    #[test]
    fn test_malformed_numbers_are_tolerated() {
        assert!(media_advisories(&media(Some("acidic"), Some("lots"))).is_empty());
        assert!(media_advisories(&media(Some("NaN"), None)).is_empty());
        assert!(media_advisories(&media(Some(""), Some("  "))).is_empty());
    }
}
