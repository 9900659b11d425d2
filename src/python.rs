use crate::compiler::Compiler;
use crate::graph::GraphDefinition;
use crate::validate;
use pyo3::prelude::*;

/// Compiles an agent-pipeline graph into autogen Python code.
///
/// The graph is parsed and checked once on construction; `build` can then be
/// called as often as needed and always returns the same source.
#[pyclass(name = "GraphCompiler")]
struct GraphCompilerPy {
    compiler: Compiler,
}

#[pymethods]
impl GraphCompilerPy {
    /// Parses the editor export and prepares the compiler.
    ///
    /// Args:
    ///     graph_json (str): The saved flow, with `nodes` and `edges` arrays.
    ///     strict (bool): Raise instead of leaving an empty fragment when a
    ///         node cannot be rendered.
    ///
    /// Raises:
    ///     ValueError: If the JSON is malformed or a node has an unknown type.
    #[new]
    #[pyo3(signature = (graph_json, strict = false))]
    fn new(graph_json: &str, strict: bool) -> PyResult<Self> {
        let graph = GraphDefinition::from_json(graph_json)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))?;
        let compiler = Compiler::builder(graph).strict(strict).build();
        Ok(GraphCompilerPy { compiler })
    }

    /// Returns the generated Python program.
    ///
    /// Raises:
    ///     RuntimeError: In strict mode, if a node cannot be rendered.
    fn build(&self) -> PyResult<String> {
        self.compiler
            .compile_to_source()
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(e.to_string()))
    }

    /// Returns one human-readable message per suspicious edge.
    fn check(&self) -> Vec<String> {
        validate::check_connections(self.compiler.graph())
            .iter()
            .map(|issue| issue.to_string())
            .collect()
    }
}

/// One-shot helper: parse the export and return the generated program.
#[pyfunction]
fn build_code(graph_json: &str) -> PyResult<String> {
    GraphCompilerPy::new(graph_json, false)?.build()
}

/// One-shot helper: parse the export and return its connection issues.
///
/// Raises:
///     ValueError: If the JSON is malformed or a node has an unknown type.
#[pyfunction]
fn check(graph_json: &str) -> PyResult<Vec<String>> {
    Ok(GraphCompilerPy::new(graph_json, false)?.check())
}

/// Python bindings for the xforce graph-to-code compiler.
#[pymodule]
fn xforce(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<GraphCompilerPy>()?;
    m.add_function(wrap_pyfunction!(build_code, m)?)?;
    m.add_function(wrap_pyfunction!(check, m)?)?;
    Ok(())
}
