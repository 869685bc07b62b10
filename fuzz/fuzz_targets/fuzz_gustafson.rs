#![no_main]

use libfuzzer_sys::fuzz_target;

use scalecalc_core::gustafson_speedup;

fuzz_target!(|data: &[u8]| {
    if data.len() < 24 {
        return;
    }
    let mut values = data
        .chunks_exact(8)
        .map(|chunk| f64::from_le_bytes(chunk.try_into().unwrap()));
    let total = values.next().unwrap();
    let parallel = values.next().unwrap();
    let processors: Vec<f64> = values.take(64).collect();

    // Should not panic; accepted inputs yield one point per count
    if let Ok(curve) = gustafson_speedup(total, parallel, &processors) {
        assert_eq!(curve.len(), processors.len());
    }
});
