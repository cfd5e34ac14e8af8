//! Core type bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{GameError, Move, PieceColor};

pub(crate) fn to_py_err(err: GameError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Parse "Black" / "White" (case-insensitive).
pub(crate) fn parse_color(name: &str) -> PyResult<PieceColor> {
    PieceColor::ALL
        .into_iter()
        .find(|color| color.to_string().eq_ignore_ascii_case(name))
        .ok_or_else(|| PyValueError::new_err(format!("unknown color {name:?}")))
}

/// Python wrapper for Move.
#[pyclass(name = "Move")]
#[derive(Clone, Debug)]
pub struct PyMove(pub Move);

#[pymethods]
impl PyMove {
    /// Origin square in board notation, e.g. "C3".
    #[getter]
    fn from_square(&self) -> String {
        self.0.from().to_string()
    }

    /// Destination square in board notation.
    #[getter]
    fn to_square(&self) -> String {
        self.0.to().to_string()
    }

    /// Origin as (x, y).
    #[getter]
    fn from_xy(&self) -> (u8, u8) {
        (self.0.from().x(), self.0.from().y())
    }

    /// Destination as (x, y).
    #[getter]
    fn to_xy(&self) -> (u8, u8) {
        (self.0.to().x(), self.0.to().y())
    }

    #[getter]
    fn is_capture(&self) -> bool {
        self.0.is_capture()
    }

    fn __repr__(&self) -> String {
        format!("Move({})", self.0)
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        let mut hasher = DefaultHasher::new();
        self.0.piece().raw().hash(&mut hasher);
        self.0.from().hash(&mut hasher);
        self.0.to().hash(&mut hasher);
        hasher.finish()
    }
}
