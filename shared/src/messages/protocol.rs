//! Protocol generation request
//!
//! Built fresh from the form state on every generation. Every field has a
//! default so partial JSON bodies are accepted.

use serde::{Deserialize, Serialize};

use crate::types::{
    Additive, BudgetPosture, Choice, Conditions, ContaminationRisk, Explant, Medium, OptionKey,
    PgrStrategy, Scale, Sterilization, Variant,
};

/// Species used when the form was submitted without one
pub const DEFAULT_SPECIES: &str = "Arabidopsis thaliana";

const DEFAULT_SUBCULTURE_WEEKS: u32 = 4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProtocolRequest {
    pub species: String,
    pub variant: Choice<Variant>,
    pub explant: Choice<Explant>,
    pub medium: Choice<Medium>,
    pub pgr: Choice<PgrStrategy>,
    pub sterilization: Sterilization,
    pub contamination: ContaminationRisk,
    pub scale: Scale,
    pub conditions: Conditions,
    pub subculture_weeks: u32,
    pub budget: BudgetPosture,
    pub media: MediaInputs,
    pub additives: Vec<Additive>,
    pub qc: QcChecklist,
    pub notes: String,
}

impl Default for ProtocolRequest {
    fn default() -> Self {
        Self {
            species: String::new(),
            variant: Choice::Auto,
            explant: Choice::Auto,
            medium: Choice::Auto,
            pgr: Choice::Auto,
            sterilization: Sterilization::default(),
            contamination: ContaminationRisk::default(),
            scale: Scale::default(),
            conditions: Conditions::default(),
            subculture_weeks: DEFAULT_SUBCULTURE_WEEKS,
            budget: BudgetPosture::default(),
            media: MediaInputs::default(),
            additives: Vec::new(),
            qc: QcChecklist::default(),
            notes: String::new(),
        }
    }
}

impl ProtocolRequest {
    /// Request for `species` with every other field at its default
    pub fn for_species(species: impl Into<String>) -> Self {
        Self {
            species: species.into(),
            ..Self::default()
        }
    }

    /// Trimmed species name, falling back to [`DEFAULT_SPECIES`] when blank
    pub fn effective_species(&self) -> &str {
        let trimmed = self.species.trim();
        if trimmed.is_empty() {
            DEFAULT_SPECIES
        } else {
            trimmed
        }
    }

    /// Additive phrases in form order
    pub fn additive_labels(&self) -> Vec<&'static str> {
        Additive::ALL
            .iter()
            .filter(|additive| self.additives.contains(*additive))
            .map(|additive| additive.description())
            .collect()
    }
}

/// Custom media composition as typed into the form.
///
/// Kept as raw text: unparseable values are echoed back but never trigger
/// range advisories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaInputs {
    pub sucrose: Option<String>,
    pub agar: Option<String>,
    pub ph: Option<String>,
}

impl MediaInputs {
    /// Drop blank entries so they behave like unset fields
    pub fn present(value: &Option<String>) -> Option<&str> {
        value
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }
}

/// Quality control checkboxes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QcChecklist {
    pub identity: bool,
    pub contamination_log: bool,
    pub media_batch: bool,
    pub ph_calibration: bool,
    pub growth_metrics: bool,
}

impl QcChecklist {
    /// Checkpoint labels paired with their state, in checklist order
    pub fn entries(&self) -> [(&'static str, bool); 5] {
        [
            ("Identity verified", self.identity),
            ("Contamination log maintained", self.contamination_log),
            ("Media batch recorded", self.media_batch),
            ("pH calibration recorded", self.ph_calibration),
            ("Growth metrics captured", self.growth_metrics),
        ]
    }
}
