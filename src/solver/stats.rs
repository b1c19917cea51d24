//! Solve statistics for diagnostics.

use serde::{Deserialize, Serialize};

/// Counts and timings collected while building and classifying a graph.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveStats {
    /// Distinct positions discovered.
    pub node_count: usize,

    /// Legal moves recorded as edges.
    pub edge_count: usize,

    /// Positions where the game is already decided.
    pub terminal_count: usize,

    /// Nodes labeled WIN.
    pub wins: usize,

    /// Nodes labeled LOSE.
    pub losses: usize,

    /// Nodes labeled TIE.
    pub ties: usize,

    /// TIE nodes proven to be perpetual draws.
    pub proven_draws: usize,

    /// Time spent exploring the graph (microseconds).
    pub build_time_us: u64,

    /// Time spent classifying (microseconds).
    pub classify_time_us: u64,
}

impl SolveStats {
    /// Total solve time (microseconds).
    #[must_use]
    pub fn total_time_us(&self) -> u64 {
        self.build_time_us + self.classify_time_us
    }

    /// Fraction of nodes with a forced outcome.
    #[must_use]
    pub fn decided_ratio(&self) -> f64 {
        if self.node_count == 0 {
            0.0
        } else {
            (self.wins + self.losses) as f64 / self.node_count as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = SolveStats::default();
        assert_eq!(stats.node_count, 0);
        assert_eq!(stats.decided_ratio(), 0.0);
    }

    #[test]
    fn test_stats_ratios() {
        let stats = SolveStats {
            node_count: 10,
            wins: 4,
            losses: 2,
            ties: 4,
            build_time_us: 30,
            classify_time_us: 12,
            ..SolveStats::default()
        };

        assert_eq!(stats.decided_ratio(), 0.6);
        assert_eq!(stats.total_time_us(), 42);
    }

    #[test]
    fn test_stats_serialization() {
        let stats = SolveStats {
            node_count: 42,
            proven_draws: 3,
            ..SolveStats::default()
        };

        let json = serde_json::to_string(&stats).unwrap();
        let deserialized: SolveStats = serde_json::from_str(&json).unwrap();

        assert_eq!(stats, deserialized);
    }
}
