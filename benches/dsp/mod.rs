//! Benchmarks for signal-generation primitives.

mod hilbert;
mod modulate;
mod series;
mod transform;

pub use hilbert::bench_hilbert;
pub use modulate::bench_modulate;
pub use series::bench_series;
pub use transform::bench_transform;
