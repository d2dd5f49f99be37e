//! Benchmarks for vscope live in `benches/`.
