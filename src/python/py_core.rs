//! Core type bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Difficulty, EngineError, PlayerId, ThemeError};

/// Python wrapper for PlayerId.
#[pyclass(name = "PlayerId")]
#[derive(Clone, Debug)]
pub struct PyPlayerId(pub PlayerId);

#[pymethods]
impl PyPlayerId {
    /// Create a player ID from its 1-based label.
    #[new]
    fn new(label: u8) -> PyResult<Self> {
        if label == 0 {
            return Err(PyValueError::new_err("player labels start at 1"));
        }
        Ok(Self(PlayerId::new(label)))
    }

    /// Get the player index (0-based).
    fn index(&self) -> usize {
        self.0.index()
    }

    /// Get the 1-based label.
    #[getter]
    fn label(&self) -> u8 {
        self.0.label()
    }

    fn __repr__(&self) -> String {
        format!("PlayerId({})", self.0.label())
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        u64::from(self.0.label())
    }
}

/// Parse a difficulty name (case-insensitive).
pub(crate) fn parse_difficulty(name: &str) -> PyResult<Difficulty> {
    match name.to_ascii_lowercase().as_str() {
        "easy" => Ok(Difficulty::Easy),
        "normal" => Ok(Difficulty::Normal),
        "hard" => Ok(Difficulty::Hard),
        other => Err(PyValueError::new_err(format!("unknown difficulty '{other}'"))),
    }
}

pub(crate) fn engine_err(err: EngineError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

pub(crate) fn theme_err(err: ThemeError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

pub(crate) fn json_err(err: serde_json::Error) -> PyErr {
    PyValueError::new_err(err.to_string())
}
