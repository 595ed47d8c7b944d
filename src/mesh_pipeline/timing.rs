use std::collections::HashMap;
use std::time::{Duration, Instant};

use tracing::info;

#[derive(Debug, Clone)]
pub struct StepTiming {
    pub name: String,
    pub duration: Duration,
}

/// Wall-clock timings per pipeline stage, logged once a run finishes.
#[derive(Debug, Default)]
pub struct PipelineTimings {
    steps: Vec<StepTiming>,
    step_map: HashMap<String, Duration>,
}

impl PipelineTimings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_step(&mut self, name: impl Into<String>, duration: Duration) {
        let name = name.into();
        self.steps.push(StepTiming {
            name: name.clone(),
            duration,
        });
        *self.step_map.entry(name).or_insert(Duration::ZERO) += duration;
    }

    pub fn total_duration(&self) -> Duration {
        self.steps.iter().map(|s| s.duration).sum()
    }

    pub fn get_step(&self, name: &str) -> Option<Duration> {
        self.step_map.get(name).copied()
    }

    pub fn steps(&self) -> &[StepTiming] {
        &self.steps
    }

    pub fn log_summary(&self) {
        let total = self.total_duration();
        for step in &self.steps {
            info!(
                "Elapsed time for {}: {:.5} (seconds)",
                step.name,
                step.duration.as_secs_f64()
            );
        }
        info!("Total elapsed time: {:.5} (seconds)", total.as_secs_f64());
    }
}

pub struct Timer {
    start: Instant,
    name: String,
}

impl Timer {
    pub fn start(name: impl Into<String>) -> Self {
        Self {
            start: Instant::now(),
            name: name.into(),
        }
    }

    pub fn stop(self) -> (String, Duration) {
        (self.name, self.start.elapsed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timings_accumulate() {
        let mut timings = PipelineTimings::new();
        timings.add_step("depth_estimation", Duration::from_millis(30));
        timings.add_step("point_cloud", Duration::from_millis(20));
        timings.add_step("depth_estimation", Duration::from_millis(10));

        assert_eq!(timings.steps().len(), 3);
        assert_eq!(timings.total_duration(), Duration::from_millis(60));
        assert_eq!(
            timings.get_step("depth_estimation"),
            Some(Duration::from_millis(40))
        );
        assert_eq!(timings.get_step("missing"), None);
    }

    #[test]
    fn test_timer_names_its_step() {
        let timer = Timer::start("mesh_generation");
        let (name, duration) = timer.stop();
        assert_eq!(name, "mesh_generation");
        assert!(duration >= Duration::ZERO);
    }
}
