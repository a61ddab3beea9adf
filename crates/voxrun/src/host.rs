//! Host that reports engine events through the log

use voxrun_core::HostEvents;
use voxrun_core::simulation::Stats;

/// Logs periodic progress, deaths and pauses
pub struct LoggingHost {
    report_interval: f32,
    next_report: f32,
}

impl LoggingHost {
    pub fn new(report_interval: f32) -> Self {
        Self {
            report_interval,
            next_report: report_interval,
        }
    }
}

impl HostEvents for LoggingHost {
    fn on_stats_update(&mut self, stats: &Stats) {
        // Time restarts from zero with every session
        if stats.time < self.next_report - self.report_interval {
            self.next_report = self.report_interval;
        }
        if self.report_interval > 0.0 && stats.time >= self.next_report {
            log::info!(
                "t={:>6.1}s score={:>7.0} blocks={}",
                stats.time,
                stats.score,
                stats.blocks_destroyed
            );
            while self.next_report <= stats.time {
                self.next_report += self.report_interval;
            }
        }
    }

    fn on_death(&mut self) {
        log::warn!("Player fell out of the world");
    }

    fn on_unlock(&mut self) {
        log::info!("Input released, session paused");
    }
}
