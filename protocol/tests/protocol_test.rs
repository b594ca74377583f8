//! End-to-end protocol generation tests
//!
//! Builds complete documents from requests the way the form and the CLI do.

use std::collections::HashMap;

use protocol::{
    build_protocol, render_text, Catalogs, HtmlRenderer, ReferenceCatalog, SpeciesCatalog, SpeciesSeed,
};
use shared::{Choice, Medium, ProtocolRequest, QcChecklist};

fn catalogs() -> Catalogs {
    let mut references = HashMap::new();
    references.insert(
        "Quercus".to_string(),
        vec!["Oak somatic embryogenesis review https://example.org/oak".to_string()],
    );
    Catalogs::new(
        SpeciesCatalog::new(vec!["Arabidopsis thaliana".to_string(), "Quercus robur".to_string()]),
        ReferenceCatalog::new(references),
    )
}

#[test]
fn test_oryza_sativa_all_auto() {
    let request = ProtocolRequest::for_species("Oryza sativa");
    let document = build_protocol(&request, &catalogs(), 2026);

    let seed = SpeciesSeed::from_species("oryza sativa");
    assert_eq!(document.fingerprint.key, format!("PT-{}", seed.value() % 10_000));
    assert_eq!(document.fingerprint.key, "PT-3119");
    assert_eq!(document.fingerprint.explant, "shoot tips");
    assert_eq!(document.fingerprint.medium, "Woody Plant Medium");
    assert_eq!(document.fingerprint.pgr, "an auxin-forward rooting strategy");
    assert_eq!(document.fingerprint.variant, "somatic embryogenesis");
    assert_eq!(document.fingerprint.lineage, "herbaceous");

    assert_eq!(document.header, "Academic Tissue Culture Protocol (2026)");
    assert_eq!(
        document.summary,
        "This protocol targets Oryza sativa using shoot tips on Woody Plant Medium. \
         It is optimized for pilot scale (20-50 explants) under strict cost minimization constraints \
         and configured for somatic embryogenesis. This species is not in the preset catalog; \
         the protocol is a generalized academic template and should be calibrated with \
         species-specific literature."
    );

    assert_eq!(
        document.steps[0],
        "Prioritize donor plants with uniform growth and no visible physiological disorders. \
         Schedule collection to avoid stress conditions and record source metadata."
    );
    assert_eq!(
        document.steps[1],
        "Isolate shoot tips under aseptic conditions. \
         Pre-wash explants in running water for 15-20 minutes with a mild detergent."
    );
    assert_eq!(
        document.steps[2],
        "Surface sterilize using standard laminar flow sterilization with ethanol and sodium hypochlorite \
         under low contamination pressure for 12 minutes. Follow with an ascorbic acid rinse, \
         then rinse 6 times with sterile distilled water to reduce phytotoxicity."
    );
    assert_eq!(
        document.steps[3],
        "Prepare Woody Plant Medium supplemented with an auxin-forward rooting strategy, \
         4.0% sucrose, and 1.0% agar. Adjust pH to 5.9 before autoclaving."
    );
    assert!(document.steps[4].ends_with("initiation window of 17 days before first transfer."));
    assert_eq!(
        document.steps[5],
        "Hold cultures at 25±2°C with a 16/8 h light/dark photoperiod using 12/12 h photoperiod; \
         target 25-45 µmol m⁻² s⁻¹ light intensity. Monitor for contamination daily for the first 7 days."
    );
    assert!(document.steps[6].starts_with("Subculture every 5 weeks for 5 cycles."));
    assert!(document.steps[8].contains("auxin-forward conditions over 8-12 days"));
    assert_eq!(document.steps.len(), 12);
    assert!(document.steps[10].starts_with("Induce embryogenic callus"));

    assert_eq!(document.species_intel.len(), 2);
    assert!(document.species_intel[1].starts_with("Monocot lineage likely"));
    assert!(document.references.is_empty());
    assert!(document.references_loaded);
    assert!(document.media_warnings.is_empty());
    assert!(document.media_notes.is_empty());
    assert_eq!(document.qc.summary, "QC coverage: 0/5 checkpoints completed.");
}

#[test]
fn test_generation_is_reproducible_across_spellings() {
    let first = build_protocol(&ProtocolRequest::for_species("Oryza sativa"), &catalogs(), 2026);
    let second = build_protocol(&ProtocolRequest::for_species("  Oryza sativa  "), &catalogs(), 2026);
    assert_eq!(first, second);

    // Case changes the displayed name but not the derived parameters
    let shouted = build_protocol(&ProtocolRequest::for_species("ORYZA SATIVA"), &catalogs(), 2026);
    assert_eq!(first.parameters, shouted.parameters);
    assert_eq!(first.fingerprint, shouted.fingerprint);
}

#[test]
fn test_preset_species_with_genus_references() {
    let mut request = ProtocolRequest::for_species("Quercus robur");
    request.medium = Choice::Fixed(Medium::Custom);
    request.qc = QcChecklist {
        identity: true,
        contamination_log: true,
        media_batch: true,
        ph_calibration: true,
        growth_metrics: true,
    };
    let document = build_protocol(&request, &catalogs(), 2026);

    assert!(!document.summary.contains("preset catalog"));
    assert!(document.summary.contains("on custom basal medium"));
    assert_eq!(document.references.len(), 1);
    assert!(document.species_intel[1].starts_with("Woody lineage likely"));
    assert_eq!(document.qc.summary, "QC coverage: 5/5 checkpoints completed.");
}

#[test]
fn test_blank_species_uses_default() {
    let document = build_protocol(&ProtocolRequest::for_species(""), &catalogs(), 2026);
    assert_eq!(document.species, "Arabidopsis thaliana");
    assert_eq!(document.fingerprint.key, "PT-4165");
}

#[test]
fn test_text_rendering_layout() {
    let mut request = ProtocolRequest::for_species("Quercus robur");
    request.notes = "Collect in spring.".to_string();
    let document = build_protocol(&request, &catalogs(), 2026);
    let text = render_text(&document);

    assert!(text.starts_with("Academic Tissue Culture Protocol (2026)\n\nThis protocol targets Quercus robur"));
    assert!(text.contains("\nProtocol fingerprint\n- Species key: PT-1634\n"));
    assert!(text.contains("\nStep-by-step workflow\n1. "));
    assert!(text.contains("\n12. "));
    assert!(text.contains("- Oak somatic embryogenesis review https://example.org/oak"));
    assert!(text.ends_with("Custom notes\n- Custom notes: Collect in spring."));
}

#[test]
fn test_text_rendering_without_references() {
    let catalogs = Catalogs::new(SpeciesCatalog::fallback(), ReferenceCatalog::unavailable());
    let document = build_protocol(&ProtocolRequest::for_species("Zea mays"), &catalogs, 2026);
    let text = render_text(&document);

    assert!(text.contains("References not loaded yet."));
    assert!(text.contains("No references loaded for this species yet."));
}

#[test]
fn test_html_rendering_links_references() {
    let document = build_protocol(&ProtocolRequest::for_species("Quercus robur"), &catalogs(), 2026);
    let html = HtmlRenderer::new().render(&document);

    assert!(html.starts_with("<h3>Academic Tissue Culture Protocol (2026)</h3>"));
    assert!(html.contains(r#"<a href="https://example.org/oak""#));
    assert!(html.contains("<li>Species key: PT-1634</li>"));
    assert!(html.contains("<li>Auto medium: Gamborg B5</li>"));
    assert!(!html.contains("<script"));
}

#[test]
fn test_request_json_round_trip_through_document() {
    let request: ProtocolRequest = serde_json::from_str(
        r#"{
            "species": "Nicotiana tabacum",
            "variant": "microprop",
            "explant": "auto",
            "medium": "ms",
            "pgr": "shoot",
            "contamination": "medium",
            "scale": "batch",
            "subculture_weeks": 6,
            "media": {"ph": "6.5", "agar": "abc"},
            "additives": ["vitamins"]
        }"#,
    )
    .unwrap();
    let document = build_protocol(&request, &catalogs(), 2026);

    assert_eq!(document.fingerprint.variant, "micropropagation");
    assert_eq!(document.fingerprint.medium, "MS (Murashige & Skoog)");
    assert_eq!(document.fingerprint.explant, "shoot tips");
    // 6 weeks requested, seed 1204238183 adds a week
    assert!(document.steps[6].starts_with("Subculture every 7 weeks"));
    assert_eq!(document.media_warnings.len(), 1);
    assert!(document.media_warnings[0].starts_with("pH is outside"));
    assert_eq!(document.media_notes, vec!["Agar: abc%", "pH: 6.5", "Additives: vitamins"]);
    assert!(document.sterilization_decision[2].contains("increase rinse count to 5"));

    let json = serde_json::to_value(&document).unwrap();
    assert_eq!(json["fingerprint"]["key"], "PT-8183");
    assert_eq!(json["parameters"]["resolved"]["medium"], "ms");
}
