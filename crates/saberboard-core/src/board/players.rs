/// Aggregate of one player's records across a collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerSummary {
    /// Number of leaderboard entries held
    pub entries: usize,
    /// Sum of the points of those entries
    pub total_points: u64,
}

impl PlayerSummary {
    pub fn add(&mut self, points: u32) {
        self.entries += 1;
        self.total_points += u64::from(points);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        let mut summary = PlayerSummary::default();
        summary.add(u32::MAX);
        summary.add(u32::MAX);
        assert_eq!(summary.entries, 2);
        assert_eq!(summary.total_points, 2 * u64::from(u32::MAX));
    }
}
