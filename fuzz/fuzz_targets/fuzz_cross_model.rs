#![no_main]

use libfuzzer_sys::fuzz_target;

use scalecalc_core::{amdahl_limit, amdahl_speedup, gustafson_speedup};

/// Map an arbitrary float into `[lo, hi)`.
fn clamp_into(value: f64, lo: f64, hi: f64) -> f64 {
    if value.is_finite() {
        lo + value.abs() % (hi - lo)
    } else {
        lo
    }
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 32 {
        return;
    }
    // Sanitize into valid workloads so model invariants must hold
    let mut values = data
        .chunks_exact(8)
        .map(|chunk| f64::from_le_bytes(chunk.try_into().unwrap()));
    let total = clamp_into(values.next().unwrap(), 1e-6, 1e6);
    let fraction = clamp_into(values.next().unwrap(), 0.0, 1.0);
    let parallel = fraction * total;
    let mut processors: Vec<f64> = values
        .take(64)
        .map(|value| clamp_into(value, 1.0, 1e5))
        .collect();
    processors.sort_by(f64::total_cmp);

    let amdahl = amdahl_speedup(total, parallel, &processors).unwrap();
    let limit = amdahl_limit(total, parallel, &processors).unwrap();
    let gustafson = gustafson_speedup(total, parallel, &processors).unwrap();

    // Amdahl speedup is monotone on a sorted grid
    let speedups: Vec<f64> = amdahl.speedups().collect();
    for pair in speedups.windows(2) {
        assert!(pair[1] >= pair[0], "Amdahl not monotone: {pair:?}");
    }

    // Speedup never exceeds the asymptote
    for (speedup, bound) in amdahl.speedups().zip(limit.speedups()) {
        assert!(speedup <= bound, "speedup {speedup} above limit {bound}");
    }

    // Scaled speedup dominates fixed-workload speedup
    for (a, g) in amdahl.speedups().zip(gustafson.speedups()) {
        let tolerance = 1e-9 * g.abs().max(1.0);
        assert!(g + tolerance >= a, "Gustafson {g} below Amdahl {a}");
    }
});
