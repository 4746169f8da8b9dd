use libm::sqrt;

/// Summary of the entropy scores of one sorted run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntropyStats {
    /// Lowest score, i.e. the first piece emitted.
    pub min: f64,
    /// Highest score, i.e. the last piece emitted.
    pub max: f64,
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
}

impl EntropyStats {
    /// Stats of an empty run: every field is zero.
    pub const EMPTY: EntropyStats = EntropyStats {
        min: 0.0,
        max: 0.0,
        mean: 0.0,
        std_dev: 0.0,
    };

    /// Width of the score range, `max - min`.
    pub fn spread(&self) -> f64 {
        self.max - self.min
    }
}

/// Computes range, mean and standard deviation of a set of scores.
pub fn compute_stats(scores: &[f64]) -> EntropyStats {
    if scores.is_empty() {
        return EntropyStats::EMPTY;
    }

    let (min, max, sum) = scores.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY, 0.0),
        |(min, max, sum), &score| (min.min(score), max.max(score), sum + score),
    );
    let count = scores.len() as f64;
    let mean = sum / count;

    let variance = scores
        .iter()
        .map(|score| (score - mean) * (score - mean))
        .sum::<f64>()
        / count;

    EntropyStats {
        min,
        max,
        mean,
        std_dev: sqrt(variance),
    }
}
