// In: src/ffi/python.rs

use pyo3::create_exception;
use pyo3::exceptions::PyException;
use pyo3::prelude::*;
use pyo3::types::{PyBytes, PyDict};

use crate::bridge::{self, Compressor};
use crate::config::{self, LEVEL_DEFAULT, WINDOW_SIZE_DEFAULT};
use crate::observability;

create_exception!(
    zstd_engine,
    CompressionException,
    PyException,
    "Raised for every engine failure. `args` is `(kind, message)` where kind is one of \
     ValidationError, StateError, CompressionError or DecompressionError."
);

//==================================================================================
// I. Stateful API
//==================================================================================

#[pyclass(name = "Compressor", module = "zstd_engine")]
pub struct PyCompressor {
    inner: Compressor,
}

#[pymethods]
impl PyCompressor {
    #[classattr]
    const LEVEL_FASTEST: i32 = config::LEVEL_FASTEST;
    #[classattr]
    const LEVEL_DEFAULT: i32 = config::LEVEL_DEFAULT;
    #[classattr]
    const LEVEL_BETTER: i32 = config::LEVEL_BETTER;
    #[classattr]
    const LEVEL_BEST: i32 = config::LEVEL_BEST;
    #[classattr]
    const LEVEL_ULTRA: i32 = config::LEVEL_ULTRA;
    #[classattr]
    const WINDOW_SIZE_MIN: i32 = config::WINDOW_SIZE_MIN;
    #[classattr]
    const WINDOW_SIZE_DEFAULT: i32 = config::WINDOW_SIZE_DEFAULT;
    #[classattr]
    const WINDOW_SIZE_MAX: i32 = config::WINDOW_SIZE_MAX;

    /// Creates a new Compressor bound to `level` and `window_size`.
    ///
    /// Raises `CompressionException("ValidationError", ...)` when either is out
    /// of range; nothing is allocated in that case.
    #[staticmethod]
    #[pyo3(signature = (level = LEVEL_DEFAULT, window_size = WINDOW_SIZE_DEFAULT))]
    fn create(level: i32, window_size: i32) -> PyResult<Self> {
        let inner = Compressor::create(level, window_size)?;
        Ok(Self { inner })
    }

    #[getter]
    fn level(&self) -> i32 {
        self.inner.level()
    }

    #[getter]
    fn window_size(&self) -> i32 {
        self.inner.window_size()
    }

    #[getter]
    fn closed(&self) -> bool {
        self.inner.is_closed()
    }

    /// Compresses `data` into one zstd frame. The GIL is released meanwhile.
    fn compress<'py>(&self, py: Python<'py>, data: &[u8]) -> PyResult<Bound<'py, PyBytes>> {
        let compressed = py.allow_threads(|| self.inner.compress(data))?;
        Ok(PyBytes::new_bound(py, &compressed))
    }

    /// Decompresses one zstd frame. The GIL is released meanwhile.
    fn decompress<'py>(&self, py: Python<'py>, data: &[u8]) -> PyResult<Bound<'py, PyBytes>> {
        let decompressed = py.allow_threads(|| self.inner.decompress(data))?;
        Ok(PyBytes::new_bound(py, &decompressed))
    }

    /// Statistics of the last successful `compress`, all zero before the first one.
    fn get_stats<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let stats = self.inner.get_stats()?;

        let result_dict = PyDict::new_bound(py);
        result_dict.set_item("originalSize", stats.original_size)?;
        result_dict.set_item("compressedSize", stats.compressed_size)?;
        result_dict.set_item("compressionRatio", stats.compression_ratio)?;
        result_dict.set_item("compressionTime", stats.compression_time)?;
        Ok(result_dict)
    }

    /// Releases the codec context. Safe to call more than once.
    fn close(&self) {
        self.inner.close();
    }

    fn __enter__(slf: PyRef<'_, Self>) -> PyRef<'_, Self> {
        slf
    }

    fn __exit__(
        &self,
        _exc_type: &Bound<'_, PyAny>,
        _exc_value: &Bound<'_, PyAny>,
        _traceback: &Bound<'_, PyAny>,
    ) -> bool {
        self.inner.close();
        false
    }

    fn __repr__(&self) -> String {
        format!(
            "Compressor(level={}, window_size={}, closed={})",
            self.inner.level(),
            self.inner.window_size(),
            self.inner.is_closed()
        )
    }
}

//==================================================================================
// II. Quick Functions
//==================================================================================

#[pyfunction]
#[pyo3(name = "compress", signature = (data, level = LEVEL_DEFAULT))]
pub fn compress_py<'py>(py: Python<'py>, data: &[u8], level: i32) -> PyResult<Bound<'py, PyBytes>> {
    let compressed = py.allow_threads(|| bridge::compress(data, level))?;
    Ok(PyBytes::new_bound(py, &compressed))
}

#[pyfunction]
#[pyo3(name = "decompress")]
pub fn decompress_py<'py>(py: Python<'py>, data: &[u8]) -> PyResult<Bound<'py, PyBytes>> {
    let decompressed = py.allow_threads(|| bridge::decompress(data))?;
    Ok(PyBytes::new_bound(py, &decompressed))
}

#[pyfunction]
#[pyo3(name = "get_info")]
pub fn get_info_py(py: Python<'_>) -> PyResult<Bound<'_, PyDict>> {
    let info = bridge::get_info();

    let result_dict = PyDict::new_bound(py);
    result_dict.set_item("version", info.version)?;
    result_dict.set_item("minLevel", info.min_level)?;
    result_dict.set_item("maxLevel", info.max_level)?;
    result_dict.set_item("defaultLevel", info.default_level)?;
    Ok(result_dict)
}

//==================================================================================
// III. Logging
//==================================================================================

#[pyfunction]
#[pyo3(name = "enable_verbose_logging", signature = (log_file = None))]
pub fn enable_verbose_logging_py(log_file: Option<String>) -> PyResult<()> {
    observability::enable_verbose_logging(log_file.as_deref())?;
    Ok(())
}
