use serde::{Deserialize, Serialize};

use crate::{
    error::GridError,
    grid::{DEFAULT_ALIVE_THRESHOLD, Dimensions},
};

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LifeConfig {
    /// Number of grid rows.
    pub rows: usize,

    /// Number of grid columns.
    pub cols: usize,

    /// A cell starts alive when its random draw in `[0, 1)` exceeds this value.
    pub alive_threshold: f64,
}

impl LifeConfig {
    pub fn dimensions(&self) -> Result<Dimensions, GridError> {
        Dimensions::new(self.rows, self.cols)
    }
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            rows: 9,
            cols: 29,
            alive_threshold: DEFAULT_ALIVE_THRESHOLD,
        }
    }
}
