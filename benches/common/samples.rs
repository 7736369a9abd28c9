use once_cell::sync::Lazy;

/// The demo series plus a few synthetic ones of growing length
pub static SERIES: Lazy<Vec<Vec<f64>>> = Lazy::new(|| {
    vec![
        vec![298.0, 46.0, 87.0, 178.0, 446.0, 1167.0, 1855.0, 1543.0, 662.0, 1583.0],
        (0..16).map(|i| ((i * 37) % 11) as f64).collect(),
        (0..100).map(|i| (i as f64 * 0.3).sin() * 40.0).collect(),
        (0..1000).map(|i| ((i * 7919) % 263) as f64 - 100.0).collect(),
    ]
});
