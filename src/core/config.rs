//! Game configuration.

use serde::{Deserialize, Serialize};

use super::error::{ConquestError, Result};

/// Smallest grid on which the four corner seeds are distinct cells.
pub const MIN_GRID_SIZE: usize = 2;

/// Largest supported grid. Keeps every coordinate within `u16`.
pub const MAX_GRID_SIZE: usize = 1024;

/// How bot move candidates are weighted before the random draw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CandidateWeighting {
    /// Every distinct reachable cell is equally likely.
    #[default]
    Distinct,
    /// A cell appears once per owned neighbor, so cells bordering more of the
    /// bot's territory are proportionally more likely. Legacy behavior.
    PerOwnedNeighbor,
}

/// Game configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length N of the N×N grid.
    pub grid_size: usize,

    /// Seed for the bots' random stream.
    /// Same seed and same human moves produce the same game.
    pub seed: u64,

    /// Candidate weighting for bot moves.
    pub weighting: CandidateWeighting,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 10,
            seed: 42,
            weighting: CandidateWeighting::Distinct,
        }
    }
}

impl GameConfig {
    pub fn with_grid_size(mut self, grid_size: usize) -> Self {
        self.grid_size = grid_size;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_weighting(mut self, weighting: CandidateWeighting) -> Self {
        self.weighting = weighting;
        self
    }

    /// Check that the grid size is supported.
    pub fn validate(&self) -> Result<()> {
        validate_grid_size(self.grid_size)
    }
}

pub(crate) fn validate_grid_size(size: usize) -> Result<()> {
    if (MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(ConquestError::InvalidGridSize {
            size,
            min: MIN_GRID_SIZE,
            max: MAX_GRID_SIZE,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_size, 10);
        assert_eq!(config.seed, 42);
        assert_eq!(config.weighting, CandidateWeighting::Distinct);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::default()
            .with_grid_size(4)
            .with_seed(123)
            .with_weighting(CandidateWeighting::PerOwnedNeighbor);

        assert_eq!(config.grid_size, 4);
        assert_eq!(config.seed, 123);
        assert_eq!(config.weighting, CandidateWeighting::PerOwnedNeighbor);
    }

    #[test]
    fn test_validate_bounds() {
        assert!(GameConfig::default().with_grid_size(2).validate().is_ok());
        assert!(GameConfig::default().with_grid_size(MAX_GRID_SIZE).validate().is_ok());
        assert_eq!(
            GameConfig::default().with_grid_size(1).validate(),
            Err(ConquestError::InvalidGridSize { size: 1, min: 2, max: MAX_GRID_SIZE })
        );
        assert!(GameConfig::default().with_grid_size(MAX_GRID_SIZE + 1).validate().is_err());
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default().with_seed(9);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
