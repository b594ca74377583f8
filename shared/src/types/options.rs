//! Categorical options offered by the protocol form
//!
//! Each option has a stable snake_case key (used in JSON and on the command
//! line) and the descriptive phrase that appears in generated documents.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::SharedError;

/// Common behaviour of every categorical option enum
pub trait OptionKey: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// Form field name, used in error messages
    const FIELD: &'static str;

    /// Every option, in form order
    const ALL: &'static [Self];

    fn key(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn from_key(raw: &str) -> Result<Self, SharedError> {
        let wanted = raw.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|option| option.key() == wanted)
            .ok_or_else(|| SharedError::UnknownOption {
                field: Self::FIELD,
                value: raw.to_string(),
            })
    }
}

macro_rules! option_enum {
    (
        $(#[$meta:meta])*
        $name:ident, field = $field:literal {
            $( $variant:ident => $key:literal, $description:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( #[serde(rename = $key)] $variant, )+
        }

        impl OptionKey for $name {
            const FIELD: &'static str = $field;
            const ALL: &'static [Self] = &[$( $name::$variant ),+];

            fn key(&self) -> &'static str {
                match self {
                    $( $name::$variant => $key, )+
                }
            }

            fn description(&self) -> &'static str {
                match self {
                    $( $name::$variant => $description, )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.key())
            }
        }

        impl FromStr for $name {
            type Err = SharedError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as OptionKey>::from_key(s)
            }
        }
    };
}

option_enum! {
    /// Culture workflow variant
    Variant, field = "variant" {
        Microprop => "microprop", "micropropagation",
        Callus => "callus", "callus induction",
        Embryogenesis => "embryogenesis", "somatic embryogenesis",
    }
}

impl Variant {
    /// Label shown when the variant was left on auto in the form
    pub const AUTO_LABEL: &'static str = "species-based auto";
}

option_enum! {
    /// Plant tissue used to start the culture
    Explant, field = "explant" {
        ShootTip => "shoot_tip", "shoot tips",
        Nodal => "nodal", "nodal segments",
        Leaf => "leaf", "leaf discs",
        Hypocotyl => "hypocotyl", "hypocotyl segments",
        Embryo => "embryo", "immature embryos",
        Meristem => "meristem", "meristematic tissue",
    }
}

option_enum! {
    /// Basal medium
    Medium, field = "medium" {
        Ms => "ms", "MS (Murashige & Skoog)",
        B5 => "b5", "Gamborg B5",
        Wpm => "wpm", "Woody Plant Medium",
        Nn => "nn", "Nitsch & Nitsch",
        Custom => "custom", "custom basal medium",
    }
}

option_enum! {
    /// Plant growth regulator strategy
    PgrStrategy, field = "pgr" {
        Balanced => "balanced", "a low-cost balanced auxin/cytokinin strategy",
        Shoot => "shoot", "a cytokinin-forward shoot induction strategy",
        Root => "root", "an auxin-forward rooting strategy",
        None => "none", "no exogenous growth regulators",
    }
}

option_enum! {
    /// Surface sterilization setup
    Sterilization, field = "sterilization" {
        Laminar => "laminar", "standard laminar flow sterilization with ethanol and sodium hypochlorite",
        Budget => "budget", "budget sterilization using a clean bench substitute and extended rinses",
        Minimal => "minimal", "minimal sterilants with extended pre-wash and rinse cycles",
    }
}

option_enum! {
    ContaminationRisk, field = "contamination" {
        Low => "low", "low contamination pressure",
        Medium => "medium", "moderate contamination pressure",
        High => "high", "high contamination pressure",
    }
}

option_enum! {
    Scale, field = "scale" {
        Pilot => "pilot", "pilot scale (20-50 explants)",
        Batch => "batch", "batch scale (100-250 explants)",
        Production => "production", "production scale (500+ explants)",
    }
}

option_enum! {
    /// Growth room temperature and light regime
    Conditions, field = "conditions" {
        Standard => "standard", "25±2°C with a 16/8 h light/dark photoperiod",
        Cool => "cool", "22±2°C with a 16/8 h light/dark photoperiod",
        Warm => "warm", "27±2°C with a 16/8 h light/dark photoperiod",
        Dark => "dark", "25±2°C with 7 days in darkness before transfer to light",
    }
}

option_enum! {
    BudgetPosture, field = "budget" {
        Strict => "strict", "strict cost minimization",
        Balanced => "balanced", "balanced cost control and performance",
        Flexible => "flexible", "flexible spending to optimize outcomes",
    }
}

option_enum! {
    /// Optional medium supplements
    Additive, field = "additive" {
        AminoAcids => "amino_acids", "amino acids",
        CoconutWater => "coconut_water", "coconut water",
        ActivatedCharcoal => "activated_charcoal", "activated charcoal",
        Vitamins => "vitamins", "vitamins",
    }
}

impl Default for Sterilization {
    fn default() -> Self {
        Sterilization::Laminar
    }
}

impl Default for ContaminationRisk {
    fn default() -> Self {
        ContaminationRisk::Low
    }
}

impl Default for Scale {
    fn default() -> Self {
        Scale::Pilot
    }
}

impl Default for Conditions {
    fn default() -> Self {
        Conditions::Standard
    }
}

impl Default for BudgetPosture {
    fn default() -> Self {
        BudgetPosture::Strict
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_round_trip_through_from_str() {
        for explant in Explant::ALL {
            assert_eq!(explant.key().parse::<Explant>().unwrap(), *explant);
        }
        assert_eq!(" WPM ".parse::<Medium>().unwrap(), Medium::Wpm);
    }

    #[test]
    fn test_unknown_key_names_field() {
        let err = "agarose".parse::<Medium>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown medium option: agarose");
    }

    #[test]
    fn test_serde_uses_keys() {
        let json = serde_json::to_string(&PgrStrategy::None).unwrap();
        assert_eq!(json, "\"none\"");
        let additive: Additive = serde_json::from_str("\"coconut_water\"").unwrap();
        assert_eq!(additive.description(), "coconut water");
    }
}
