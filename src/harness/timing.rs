//! Scoped wall-clock timing for pipeline runs.

use std::time::Instant;

/// Measures one pipeline's elapsed wall-clock time.
///
/// The duration is logged when the timer is dropped, so every exit from the
/// timed scope reports, including early returns and error paths. The
/// measurement is purely observational and never influences the comparison.
///
/// # Example
///
/// ```
/// use dupediff::harness::PipelineTimer;
///
/// {
///     let _timer = PipelineTimer::start("jdupes -z");
///     // ... run the pipeline ...
/// } // elapsed time is logged here
/// ```
#[derive(Debug)]
pub struct PipelineTimer {
    name: String,
    start: Instant,
}

impl PipelineTimer {
    /// Start timing a named pipeline.
    #[must_use]
    pub fn start(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            start: Instant::now(),
        }
    }

    /// Elapsed time since the timer started.
    #[must_use]
    pub fn elapsed_secs(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

impl Drop for PipelineTimer {
    fn drop(&mut self) {
        log::info!("{}: elapsed time: {:.6} s", self.name, self.elapsed_secs());
    }
}
