#![no_main]

use libfuzzer_sys::fuzz_target;

use scalecalc_core::{amdahl_limit, amdahl_speedup};

fuzz_target!(|data: &[u8]| {
    if data.len() < 24 {
        return;
    }
    // First two floats are the workload, the rest become the processor
    // grid, capped at 64 counts for speed
    let mut values = data
        .chunks_exact(8)
        .map(|chunk| f64::from_le_bytes(chunk.try_into().unwrap()));
    let total = values.next().unwrap();
    let parallel = values.next().unwrap();
    let processors: Vec<f64> = values.take(64).collect();

    // Should not panic on any bit pattern (NaN, inf, negatives)
    let _ = amdahl_speedup(total, parallel, &processors);
    let _ = amdahl_limit(total, parallel, &processors);
});
