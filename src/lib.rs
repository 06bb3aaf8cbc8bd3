//! setcover – random set-cover instances and coverage checking,
//! with optional PyO3 bindings.

/*───────── internal modules ─────────*/
pub mod error;
pub mod params;
pub mod source;
pub mod mt;
pub mod subset;
pub mod instance;
pub mod generate;
pub mod coverage;

/*───────── re-exports for Rust users ─────────*/
pub use error::{Error, Result};
pub use params::Params;
pub use source::RandomSource;
pub use mt::MersenneTwister;
pub use subset::Subset;
pub use instance::{Instance, read_state};
pub use generate::{generate, generate_with};
pub use coverage::{Coverage, Position, covering_prefix, element_count, is_covered};

/*======================================================================
│  Python functions
└=====================================================================*/

#[cfg(feature = "python")]
mod python {
    use pyo3::prelude::*;
    use pyo3::types::PyModule;
    use pyo3::wrap_pyfunction;

    use crate::Error;

    fn to_py_err(e: Error) -> PyErr {
        match e {
            Error::Io(e) => pyo3::exceptions::PyIOError::new_err(e.to_string()),
            other        => pyo3::exceptions::PyValueError::new_err(other.to_string()),
        }
    }

    /// Random instance over {0, …, n-1} as a list of sorted member lists.
    #[pyfunction]
    #[pyo3(signature = (n, seed=None))]
    fn generate_py(n: usize, seed: Option<u64>) -> PyResult<Vec<Vec<usize>>> {
        let inst = crate::generate(n, seed).map_err(to_py_err)?;
        Ok(inst.to_lists())
    }

    /// True iff the union of `state` includes every integer in [0, n-1].
    #[pyfunction]
    #[pyo3(text_signature = "(state, n)")]
    fn is_covered_py(state: Vec<Vec<i64>>, n: usize) -> bool {
        crate::is_covered(&state, n)
    }

    /// ***Important***: name `_native` must match `pyproject.toml -> module-name`.
    #[pymodule]
    fn _native(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(generate_py, m)?)?;
        m.add_function(wrap_pyfunction!(is_covered_py, m)?)?;
        Ok(())
    }
}
