//! Python bindings for the conquest core.
//!
//! Lets a Python UI host a game without reimplementing any rules.
//!
//! # Quick Start
//!
//! ```python
//! import territory_conquest as tc
//!
//! game = tc.ConquestGame(grid_size=10, seed=42)
//!
//! if game.submit_human_move(0, 1):
//!     game.advance_automated_turn()
//!
//! grid = game.grid()          # numpy uint8, 0 = empty, 1..4 = owner
//! scores = game.territory()   # {"human": 2, "bot1": 2, ...}
//! ```

use pyo3::exceptions::{PyIndexError, PyValueError};
use pyo3::prelude::*;

use crate::core::ConquestError;

mod py_game;

pub use py_game::*;

impl From<ConquestError> for PyErr {
    fn from(err: ConquestError) -> PyErr {
        match err {
            ConquestError::OutOfBounds { .. } => PyIndexError::new_err(err.to_string()),
            _ => PyValueError::new_err(err.to_string()),
        }
    }
}

/// territory_conquest: a four-player grid conquest game.
#[pymodule]
fn territory_conquest(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyConquestGame>()?;
    Ok(())
}
