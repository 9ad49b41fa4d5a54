use std::time::{Duration, Instant};

/// Pipeline stages whose wall-clock time is recorded per generation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    Fill = 0,
    Smooth = 1,
    Cleanup = 2,
    Pad = 3,
    Floor = 4,
    Outline = 5,
    Walls = 6,
}

pub const STAGE_COUNT: usize = 7;

pub const STAGE_LABELS: [&str; STAGE_COUNT] = [
    "fill", "smooth", "cleanup", "pad", "floor", "outline", "walls",
];

impl Stage {
    pub const ALL: [Stage; STAGE_COUNT] = [
        Stage::Fill,
        Stage::Smooth,
        Stage::Cleanup,
        Stage::Pad,
        Stage::Floor,
        Stage::Outline,
        Stage::Walls,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn label(self) -> &'static str {
        STAGE_LABELS[self.index()]
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StageTimings {
    durations: [Duration; STAGE_COUNT],
}

impl StageTimings {
    #[inline]
    pub fn record(&mut self, stage: Stage, elapsed: Duration) {
        self.durations[stage.index()] += elapsed;
    }

    /// Runs `f` and charges its elapsed time to `stage`.
    pub fn time<T>(&mut self, stage: Stage, f: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let out = f();
        self.record(stage, start.elapsed());
        out
    }

    #[inline]
    pub fn get(&self, stage: Stage) -> Duration {
        self.durations[stage.index()]
    }

    pub fn total(&self) -> Duration {
        self.durations.iter().sum()
    }

    pub fn log_summary(&self) {
        for stage in Stage::ALL {
            log::debug!(
                target: "timings",
                "{:>8}: {:.3} ms",
                stage.label(),
                self.get(stage).as_secs_f64() * 1000.0
            );
        }
        log::debug!(target: "timings", "   total: {:.3} ms", self.total().as_secs_f64() * 1000.0);
    }
}
