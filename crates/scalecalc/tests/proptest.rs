//! Property-based tests for CLI configuration parsing.

use clap::Parser;
use proptest::prelude::*;

use scalecalc_core::ScalingLaw;
use scalecalc_lib::config::AppConfig;

fn config_with_fractions(list: &str) -> AppConfig {
    AppConfig::parse_from(["scalecalc", "--fractions", list])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    /// Any display-formatted in-range fraction list parses back to the
    /// same values.
    #[test]
    fn fraction_list_roundtrips(
        fractions in prop::collection::vec(0.0f64..=1.0, 1..8),
    ) {
        let list = fractions
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        let parsed = config_with_fractions(&list).parallel_fractions().unwrap();
        prop_assert_eq!(parsed, fractions);
    }

    /// A single out-of-range entry fails the whole fraction list.
    #[test]
    fn out_of_range_entry_rejected(
        valid in prop::collection::vec(0.0f64..=1.0, 0..4),
        bad in 1.001f64..100.0,
    ) {
        let mut entries: Vec<String> = valid.iter().map(ToString::to_string).collect();
        entries.push(bad.to_string());
        let list = entries.join(",");
        prop_assert!(config_with_fractions(&list).parallel_fractions().is_err());
    }

    /// Law names parse regardless of letter case.
    #[test]
    fn law_selection_ignores_case(mask in prop::collection::vec(any::<bool>(), 9)) {
        for name in ["amdahl", "gustafson"] {
            let mixed: String = name
                .chars()
                .zip(mask.iter().cycle())
                .map(|(c, upper)| if *upper { c.to_ascii_uppercase() } else { c })
                .collect();
            let laws = ScalingLaw::select(&mixed).unwrap();
            prop_assert_eq!(laws.len(), 1);
        }
    }

    /// Range flags survive a format/parse round trip.
    #[test]
    fn range_flags_roundtrip(min in 0.5f64..10.0, span in 1.0f64..1000.0) {
        let max = min + span;
        let config = AppConfig::parse_from([
            "scalecalc".to_string(),
            format!("--min-procs={min}"),
            format!("--max-procs={max}"),
        ]);
        prop_assert_eq!(config.min_procs, min);
        prop_assert_eq!(config.max_procs, max);
    }
}

/// Both laws resolve from the `both` selector, in Amdahl-first order.
#[test]
fn both_selector_is_ordered() {
    let laws = ScalingLaw::select("both").unwrap();
    assert_eq!(laws, vec![ScalingLaw::Amdahl, ScalingLaw::Gustafson]);
}
