//! Rhai engine creation and formula evaluation.
//!
//! Creates the Rhai scripting engine with all worksheet built-in functions
//! registered (STRING_COMMON, STRING_DIFF, FINDPOS, etc.). Also handles
//! evaluation of formulas with optional user-defined functions from external
//! files.

use rhai::{Engine, EvalAltResult};
use tracing::debug;

use super::{AST, Dynamic};
use crate::align::AlignLimits;

/// Create a Rhai engine with built-ins registered.
pub fn create_engine(limits: AlignLimits) -> Engine {
    let mut engine = Engine::new();
    crate::builtins::register_builtins(&mut engine, limits);
    engine
}

/// Create a Rhai engine with built-ins registered.
/// Optionally compiles custom functions from the provided script.
/// Returns the engine, compiled AST (if any), and any error message.
pub fn create_engine_with_functions(
    limits: AlignLimits,
    custom_script: Option<&str>,
) -> (Engine, Option<AST>, Option<String>) {
    let engine = create_engine(limits);

    let (ast, error) = if let Some(script) = custom_script {
        match engine.compile(script) {
            Ok(ast) => {
                debug!(functions = ast.iter_functions().count(), "compiled custom functions");
                (Some(ast), None)
            }
            Err(e) => (None, Some(format!("Error in custom functions: {}", e))),
        }
    } else {
        (None, None)
    };

    (engine, ast, error)
}

/// Evaluate a formula with custom functions provided as script text.
/// The scripts are concatenated and evaluated together so closures in the
/// formula can reach both custom and registered functions.
pub fn eval_with_functions_script(
    engine: &Engine,
    formula: &str,
    custom_script: Option<&str>,
) -> Result<Dynamic, Box<EvalAltResult>> {
    if let Some(script) = custom_script {
        let combined = format!("{}\n{}", script, formula);
        engine.eval(&combined)
    } else {
        engine.eval(formula)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_engine_evaluates_builtins() {
        let engine = create_engine(AlignLimits::default());
        let result: rhai::Array = engine
            .eval(r#"STRING_COMMON("abcxdef", "abcydef", 1)"#)
            .unwrap();
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_custom_functions_compile_error_is_reported() {
        let (_, ast, error) =
            create_engine_with_functions(AlignLimits::default(), Some("fn broken( {"));
        assert!(ast.is_none());
        assert!(error.unwrap().starts_with("Error in custom functions"));
    }

    #[test]
    fn test_custom_functions_can_call_builtins() {
        let script = r#"
            fn LONGEST_COMMON(a, b) {
                let runs = STRING_COMMON(a, b, 1);
                let best = "";
                for r in runs {
                    if r.len() > best.len() { best = r; }
                }
                best
            }
        "#;
        let (engine, ast, error) =
            create_engine_with_functions(AlignLimits::default(), Some(script));
        assert!(ast.is_some());
        assert!(error.is_none());

        let result =
            eval_with_functions_script(&engine, r#"LONGEST_COMMON("abxcdef", "abycdef")"#, Some(script))
                .unwrap();
        assert_eq!(result.into_string().unwrap(), "cdef");
    }

    #[test]
    fn test_engine_is_shareable_across_threads() {
        let engine = std::sync::Arc::new(create_engine(AlignLimits::default()));
        std::thread::scope(|scope| {
            for i in 0..4 {
                let engine = engine.clone();
                scope.spawn(move || {
                    let formula = format!(r#"STRING_DIFF("row{}x", "row{}y", 1)"#, i, i);
                    let result: rhai::Array = engine.eval(&formula).unwrap();
                    assert_eq!(result.len(), 1);
                });
            }
        });
    }
}
