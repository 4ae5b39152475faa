// ==========================================
// 限值边界属性测试
// ==========================================
// RANGE(min, max): min 通过 / min-ε 失败 / max 通过 / max+ε 失败
// ==========================================

use mill_cert_audit::domain::ChemicalReading;
use mill_cert_audit::rules::{Bound, LimitDefinition};
use mill_cert_audit::FieldId;
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_chemical_range_boundaries(
        precision in 1u32..=4,
        low in 1i64..500,
        width in 1i64..500,
    ) {
        let high = low + width;
        let scale = 10f64.powi(precision as i32);
        let limit = LimitDefinition::range(
            "Mn",
            low as f64 / scale,
            high as f64 / scale,
        ).unwrap();

        prop_assert!(limit.verify(&ChemicalReading::new(low, precision)).0);
        prop_assert!(!limit.verify(&ChemicalReading::new(low - 1, precision)).0);
        prop_assert!(limit.verify(&ChemicalReading::new(high, precision)).0);
        prop_assert!(!limit.verify(&ChemicalReading::new(high + 1, precision)).0);
    }

    #[test]
    fn prop_integer_range_boundaries(low in -500i32..500, width in 0i32..500) {
        let high = low + width;
        let bound = Bound::Range { minimum: low, maximum: high };

        prop_assert!(bound.admits(low));
        prop_assert!(!bound.admits(low - 1));
        prop_assert!(bound.admits(high));
        prop_assert!(!bound.admits(high + 1));
    }

    #[test]
    fn prop_message_matches_verdict(value in 0i32..1000, minimum in 0i32..1000) {
        let bound = Bound::Minimum { minimum };
        let (passed, message) =
            bound.evaluate(&FieldId::YieldStrength, &value.to_string(), value, "MPa");

        prop_assert_eq!(passed, value >= minimum);
        let prefix = if passed { "[PASS] " } else { "[FAIL] " };
        prop_assert!(message.starts_with(prefix));
        let verb = if passed { "meets" } else { "violates" };
        prop_assert!(message.contains(verb));
    }
}
