// ==========================================
// 校验规则集成测试（内置标准规则表）
// ==========================================
// 场景: Mn 区间 / Mn 薄板替代限值 / 宝钢 N 交货组合选择 / 冲击功分档 / 幂等
// ==========================================

mod helpers;

use helpers::{CertificateBuilder, PlateBuilder};
use mill_cert_audit::domain::{CertificateReport, FieldId, VerificationOutcome};
use mill_cert_audit::engine::{EngineError, VerificationOrchestrator};
use mill_cert_audit::logging;
use mill_cert_audit::rules::{ConfigError, RuleBook};

// ==========================================
// 测试辅助函数
// ==========================================

fn verify(certificate: &mill_cert_audit::Certificate) -> CertificateReport {
    logging::init_test();
    let book = RuleBook::shared().unwrap();
    VerificationOrchestrator::new(book)
        .verify_certificate(certificate)
        .unwrap()
}

fn chemical_outcome<'r>(report: &'r CertificateReport, element: &str) -> &'r VerificationOutcome {
    report.plates[0]
        .chemical
        .outcomes
        .iter()
        .find(|o| o.field_id == FieldId::ChemicalElement(element.to_string()))
        .unwrap()
}

fn structural_outcomes(report: &CertificateReport) -> &[VerificationOutcome] {
    &report.plates[0].structural.outcomes
}

// ==========================================
// 化学成分
// ==========================================

#[test]
fn test_default_certificate_passes() {
    let certificate = CertificateBuilder::new().plate(PlateBuilder::new("P001").build()).build();
    let report = verify(&certificate);
    assert!(report.passed, "{:#?}", report.plates[0].outcomes().filter(|o| !o.passed).collect::<Vec<_>>());
}

#[test]
fn test_mn_within_range_passes() {
    let certificate = CertificateBuilder::new()
        .plate(PlateBuilder::new("P001").element("Mn", 120, 2).build())
        .build();
    let report = verify(&certificate);

    let mn = chemical_outcome(&report, "Mn");
    assert!(mn.passed);
    assert_eq!(
        mn.message,
        "[PASS] Chemical element Mn value is 1.20, meets the valid range [0.9, 1.6]."
    );
}

#[test]
fn test_mn_alternative_limit_for_thin_plate() {
    let certificate = CertificateBuilder::new()
        .thickness(10.0)
        .plate(PlateBuilder::new("P001").element("Mn", 80, 2).build())
        .build();
    let report = verify(&certificate);

    let mn = chemical_outcome(&report, "Mn");
    assert!(mn.passed);
    assert_eq!(
        mn.message,
        "[PASS] Chemical element Mn value is 0.80, meets the valid range [0.7, 1.6]."
    );
    assert!(report.passed);
}

#[test]
fn test_mn_alternative_applies_at_exactly_12_5_mm() {
    let certificate = CertificateBuilder::new()
        .thickness(12.5)
        .plate(PlateBuilder::new("P001").element("Mn", 80, 2).build())
        .build();
    let report = verify(&certificate);

    let mn = chemical_outcome(&report, "Mn");
    assert!(mn.passed);
    assert_eq!(
        mn.message,
        "[PASS] Chemical element Mn value is 0.80, meets the valid range [0.7, 1.6]."
    );
}

#[test]
fn test_mn_alternative_not_applied_above_12_5_mm() {
    let certificate = CertificateBuilder::new()
        .thickness(13.0)
        .plate(PlateBuilder::new("P001").element("Mn", 80, 2).build())
        .build();
    let report = verify(&certificate);

    let mn = chemical_outcome(&report, "Mn");
    assert!(!mn.passed);
    assert_eq!(
        mn.message,
        "[FAIL] Chemical element Mn value is 0.80, violates the valid range [0.9, 1.6]."
    );
    assert!(!report.passed);
}

#[test]
fn test_missing_mandatory_element_fails() {
    let certificate = CertificateBuilder::new()
        .plate(PlateBuilder::new("P001").without("Si").build())
        .build();
    let report = verify(&certificate);

    let si = chemical_outcome(&report, "Si");
    assert!(!si.passed);
    assert_eq!(
        si.message,
        "[FAIL] Chemical element Si is required to be checked, but is not present in the certificate."
    );
}

#[test]
fn test_f_grade_nitrogen_relaxed_with_aluminium() {
    // F 级 N 常规上限 0.009，含 Al 时放宽至 0.012
    let plate = PlateBuilder::new("P001")
        .element("C", 14, 2)
        .element("P", 20, 3)
        .element("S", 10, 3)
        .element("N", 11, 3)
        .delivery("TM")
        .temperature(-60)
        .build();
    let certificate = CertificateBuilder::new()
        .grade("VL F32")
        .plate(plate)
        .build();
    let report = verify(&certificate);

    // N 非必检，只在结构校验中检查时才会出现（F 级组合不含 N）
    assert!(report.plates[0]
        .chemical
        .outcomes
        .iter()
        .all(|o| o.field_id != FieldId::ChemicalElement("N".to_string())));
    assert!(report.passed);

    let book = RuleBook::shared().unwrap();
    let comp = &certificate.plates[0].composition;
    let verifier = mill_cert_audit::ChemicalCompositionVerifier::new(&book.chemical);
    let limits = book.chemical.locate_many("VL F32", &["N".to_string()]).unwrap();
    let outcomes = verifier
        .verify("VL F32", 20.0, comp, Some(limits.as_slice()), false)
        .unwrap();
    assert!(outcomes[0].passed);
    assert_eq!(
        outcomes[0].message,
        "[PASS] Chemical element N value is 0.011, meets the maximum limit 0.012."
    );
}

// ==========================================
// 宝钢细晶元素组合
// ==========================================

#[test]
fn test_baoshan_n_three_element_combination() {
    for (thickness, expected) in [(80.0, true), (81.0, false)] {
        let certificate = CertificateBuilder::new()
            .plant("BAOSHAN")
            .thickness(thickness)
            .plate(PlateBuilder::new("P001").impact(&[60, 60, 60]).build())
            .build();
        let report = verify(&certificate);
        let outcomes = structural_outcomes(&report);

        assert_eq!(outcomes[0].field_id, FieldId::Thickness);
        assert_eq!(outcomes[0].passed, expected, "thickness {}", thickness);
        assert!(outcomes[0].message.contains("the maximum limit 80 mm"));
        if expected {
            // 厚度 + Al + Nb + Ti
            assert_eq!(outcomes.len(), 4);
        } else {
            assert_eq!(outcomes.len(), 1);
        }
    }
}

#[test]
fn test_baoshan_n_two_element_combination() {
    for (thickness, expected) in [(30.0, true), (31.0, false)] {
        let certificate = CertificateBuilder::new()
            .plant("BAOSHAN")
            .thickness(thickness)
            .plate(PlateBuilder::new("P001").without("Nb").build())
            .build();
        let report = verify(&certificate);
        let outcomes = structural_outcomes(&report);

        assert_eq!(outcomes[0].passed, expected, "thickness {}", thickness);
        assert!(outcomes[0].message.contains("the maximum limit 30 mm"));
        assert_eq!(report.plates[0].structural.passed, expected);
    }
}

#[test]
fn test_baoshan_minimum_standard_when_combination_incomplete() {
    let certificate = CertificateBuilder::new()
        .plant("BAOSHAN")
        .plate(PlateBuilder::new("P001").without("Nb").without("Ti").build())
        .build();
    let report = verify(&certificate);
    let outcomes = structural_outcomes(&report);

    assert!(outcomes[0].passed);
    assert!(outcomes[0].message.contains("the maximum limit 30 mm"));
    let ti = outcomes
        .iter()
        .find(|o| o.field_id == FieldId::ChemicalElement("Ti".to_string()))
        .unwrap();
    assert!(!ti.passed);
    assert!(!report.passed);
}

#[test]
fn test_unknown_plant_aborts_certificate() {
    let certificate = CertificateBuilder::new()
        .plant("UNKNOWN STEEL")
        .plate(PlateBuilder::new("P001").build())
        .build();
    let book = RuleBook::shared().unwrap();
    let err = VerificationOrchestrator::new(book)
        .verify_certificate(&certificate)
        .unwrap_err();
    assert_eq!(
        err,
        EngineError::Configuration(ConfigError::UnknownPlant("UNKNOWN STEEL".to_string()))
    );
}

// ==========================================
// 力学性能
// ==========================================

#[test]
fn test_impact_energy_band_55mm_longitudinal() {
    let certificate = CertificateBuilder::new()
        .thickness(55.0)
        .plate(PlateBuilder::new("P001").impact(&[38, 37]).build())
        .build();
    let report = verify(&certificate);
    let mechanical = &report.plates[0].mechanical.outcomes;

    let first = mechanical
        .iter()
        .find(|o| o.field_id == FieldId::ImpactEnergy(0))
        .unwrap();
    let second = mechanical
        .iter()
        .find(|o| o.field_id == FieldId::ImpactEnergy(1))
        .unwrap();
    assert!(first.passed);
    assert_eq!(
        first.message,
        "[PASS] Impact Energy value is 38, meets the minimum limit 38 J."
    );
    assert!(!second.passed);
    assert!(!report.passed);
}

#[test]
fn test_thickness_outside_bands_is_configuration_error() {
    let certificate = CertificateBuilder::new()
        .grade("VL D36")
        .thickness(160.0)
        .plate(PlateBuilder::new("P001").delivery("TM").temperature(-20).build())
        .build();
    let book = RuleBook::shared().unwrap();
    let err = VerificationOrchestrator::new(book)
        .verify_certificate(&certificate)
        .unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn test_ambiguous_direction_rejected() {
    for code in ["", "C-L", "X"] {
        let certificate = CertificateBuilder::new()
            .plate(PlateBuilder::new("P001").direction_code(code).build())
            .build();
        let book = RuleBook::shared().unwrap();
        let err = VerificationOrchestrator::new(book)
            .verify_certificate(&certificate)
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput { .. }), "code {:?}", code);
    }
}

#[test]
fn test_unrepresentable_precision_rejected() {
    let certificate = CertificateBuilder::new()
        .plate(PlateBuilder::new("P001").element("Mn", 120, 400).build())
        .build();
    let book = RuleBook::shared().unwrap();
    let err = VerificationOrchestrator::new(book)
        .verify_certificate(&certificate)
        .unwrap_err();
    match err {
        EngineError::InvalidInput { serial_number, reason } => {
            assert_eq!(serial_number, "P001");
            assert!(reason.contains("Mn"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

// ==========================================
// 幂等
// ==========================================

#[test]
fn test_verification_is_idempotent() {
    let certificate = CertificateBuilder::new()
        .thickness(55.0)
        .plate(PlateBuilder::new("P001").element("Mn", 80, 2).impact(&[37]).build())
        .plate(PlateBuilder::new("P002").yield_strength(300).build())
        .build();
    let snapshot = certificate.clone();

    let first = verify(&certificate);
    let second = verify(&certificate);

    assert_eq!(first.plates, second.plates);
    assert_eq!(first.passed, second.passed);
    assert_ne!(first.report_id, second.report_id);
    assert_eq!(certificate, snapshot);
}
