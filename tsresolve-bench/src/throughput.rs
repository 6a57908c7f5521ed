//! Generation throughput measurement.

use std::time::{Duration, Instant};
use tsresolve_codegen::{CodegenError, generate_from_sdl};
use tsresolve_core::CodegenConfig;

/// Result of a throughput benchmark.
#[derive(Debug, Clone)]
pub struct ThroughputResult {
    /// Number of schemas compiled.
    pub schemas: u64,
    /// Total bytes of generated output.
    pub bytes: u64,
    /// Total duration.
    pub duration: Duration,
}

impl ThroughputResult {
    /// Returns schemas compiled per second.
    #[must_use]
    pub fn schemas_per_second(&self) -> f64 {
        self.schemas as f64 / self.duration.as_secs_f64()
    }

    /// Returns output bytes per second.
    #[must_use]
    pub fn bytes_per_second(&self) -> f64 {
        self.bytes as f64 / self.duration.as_secs_f64()
    }

    /// Returns output megabytes per second.
    #[must_use]
    pub fn mb_per_second(&self) -> f64 {
        self.bytes_per_second() / (1024.0 * 1024.0)
    }
}

/// Compiles `sdl` end to end `iterations` times.
///
/// # Errors
/// Returns the first `CodegenError` encountered.
pub fn run_generation_benchmark(
    sdl: &str,
    config: &CodegenConfig,
    iterations: u64,
) -> Result<ThroughputResult, CodegenError> {
    let start = Instant::now();
    let mut bytes = 0u64;

    for _ in 0..iterations {
        bytes += generate_from_sdl(sdl, config)?.len() as u64;
    }

    Ok(ThroughputResult {
        schemas: iterations,
        bytes,
        duration: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synthetic::SyntheticSchema;

    #[test]
    fn test_throughput_result_rates() {
        let result = ThroughputResult {
            schemas: 100,
            bytes: 1024 * 1024,
            duration: Duration::from_secs(2),
        };

        assert!((result.schemas_per_second() - 50.0).abs() < f64::EPSILON);
        assert!((result.mb_per_second() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_run_generation_benchmark() {
        let sdl = SyntheticSchema::new(3, 2, 1).to_sdl();
        let result = run_generation_benchmark(&sdl, &CodegenConfig::default(), 3)
            .expect("Failed to generate");

        assert_eq!(result.schemas, 3);
        assert!(result.bytes > 0);
        assert_eq!(result.bytes % 3, 0);
    }

    #[test]
    fn test_run_generation_benchmark_propagates_errors() {
        let result = run_generation_benchmark("type Query {", &CodegenConfig::default(), 1);
        assert!(result.is_err());
    }
}
