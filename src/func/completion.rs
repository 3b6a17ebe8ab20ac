use crate::stats::Stats;
use std::time::{SystemTime, Duration};

/// Decides when a multi-epoch training run stops. Any configured limit that
/// is reached stops training.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CompletionFn {
    max_epoch: Option<usize>,
    max_duration: Option<Duration>,
    target_avg_error: f64,
}

impl CompletionFn {

    pub fn stop_after_epoch(epoch: usize) -> Self {
        CompletionFn {
            max_epoch: Some(epoch),
            max_duration: None,
            target_avg_error: 0.0
        }
    }

    pub fn stop_after_duration(duration: Duration) -> Self {
        CompletionFn {
            max_epoch: None,
            max_duration: Some(duration),
            target_avg_error: 0.0
        }
    }

    pub fn stop_at_error(target_avg_error: f64, max_epoch: usize) -> Self {
        CompletionFn {
            max_epoch: Some(max_epoch),
            max_duration: None,
            target_avg_error
        }
    }

    pub fn with_target_error(self, target_avg_error: f64) -> Self {
        CompletionFn {
            target_avg_error,
            ..self
        }
    }

    /// `epoch` is the number of epochs completed so far.
    pub fn should_stop_training(&self, epoch: usize, start_time: SystemTime, error_stats: &Stats) -> bool {
        if error_stats.count() > 0 && self.target_avg_error >= error_stats.mean() {
            return true;
        }
        if let Some(max_epoch) = self.max_epoch {
            if max_epoch <= epoch {
                return true;
            }
        }
        if let Some(max_duration) = self.max_duration {
            if max_duration <= SystemTime::now().duration_since(start_time).unwrap_or(max_duration) {
                return true
            }
        }
        false
    }

}
