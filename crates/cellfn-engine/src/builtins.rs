//! Built-in worksheet functions (Rust) and their metadata.
//!
//! Conventions:
//! - Worksheet-facing names are ALL CAPS (e.g. `STRING_COMMON`).
//! - Functions that return several values return a Rhai array; the host
//!   decides how to spill it.
//! - Bad arguments raise a runtime error whose message starts with a
//!   spreadsheet sentinel (`#VALUE!`, `#N/A`). Degenerate input to the
//!   string alignment functions is not an error and yields `[]`.
//! - If you add a new built-in, list it in `BUILTINS` and register its
//!   implementation in `register_builtins`.

use rhai::{Array, Dynamic, Engine, EvalAltResult, Position};

use crate::align::{AlignLimits, common_substrings, differing_substrings};
use crate::error::AlignError;
use crate::text;

pub struct Builtin {
    pub name: &'static str,
    pub usage: &'static str,
    pub description: &'static str,
}

pub const BUILTINS: &[Builtin] = &[
    Builtin {
        name: "STRING_COMMON",
        usage: "STRING_COMMON(s1, s2, min_length)",
        description: "Maximal common substrings with a minimum length",
    },
    Builtin {
        name: "STRING_DIFF",
        usage: "STRING_DIFF(s1, s2, min_length)",
        description: "Maximal substrings of s1 missing from s2, with a minimum length",
    },
    Builtin {
        name: "FINDPOS",
        usage: "FINDPOS(text, substring, instance)",
        description: "Position of the Nth (or last, -1) case-insensitive match",
    },
    Builtin {
        name: "EXTRACTSUBSTR",
        usage: "EXTRACTSUBSTR(text, start_marker[, end_marker])",
        description: "Text between a start marker and an optional end marker",
    },
    Builtin {
        name: "TRUESPLIT",
        usage: "TRUESPLIT(values, delimiter)",
        description: "Split each value on a delimiter into a padded row",
    },
    Builtin {
        name: "ARRAYSUBTRACT",
        usage: "ARRAYSUBTRACT(a, b)",
        description: "Values of a that do not appear in b",
    },
];

pub fn builtin(name: &str) -> Option<&'static Builtin> {
    BUILTINS.iter().find(|b| b.name.eq_ignore_ascii_case(name))
}

fn sheet_error(sentinel: &str, detail: &str) -> Box<EvalAltResult> {
    EvalAltResult::ErrorRuntime(format!("{}: {}", sentinel, detail).into(), Position::NONE).into()
}

fn align_error(err: AlignError) -> Box<EvalAltResult> {
    EvalAltResult::ErrorRuntime(err.to_string().into(), Position::NONE).into()
}

fn to_array(items: Vec<String>) -> Array {
    items.into_iter().map(Dynamic::from).collect()
}

/// Full-precision text of a cell value, used to compare and split cells.
/// Floats keep every digit (`2.5`, not the rounded display `2.50`).
/// Empty cells have none.
fn cell_text(value: &Dynamic) -> Option<String> {
    if value.is_unit() {
        None
    } else if let Ok(f) = value.as_float() {
        Some(f.to_string())
    } else {
        Some(value.to_string())
    }
}

fn split_row(value: &Dynamic, delimiter: &str) -> Vec<String> {
    if value.is_string() {
        let s = value.clone().into_string().unwrap_or_default();
        text::split_keep_empty(&s, delimiter)
    } else {
        vec![cell_text(value).unwrap_or_default()]
    }
}

fn true_split(values: &[Dynamic], delimiter: &str) -> Result<Array, Box<EvalAltResult>> {
    if delimiter.is_empty() {
        return Err(sheet_error("#VALUE!", "delimiter must not be empty"));
    }
    let rows = values.iter().map(|v| split_row(v, delimiter)).collect();
    Ok(text::pad_rows(rows)
        .into_iter()
        .map(|row| Dynamic::from(to_array(row)))
        .collect())
}

/// Register all built-in functions into the Rhai engine.
pub fn register_builtins(engine: &mut Engine, limits: AlignLimits) {
    // STRING_COMMON(s1, s2, min_length)
    engine.register_fn(
        "STRING_COMMON",
        move |s1: &str, s2: &str, min_length: i64| -> Result<Array, Box<EvalAltResult>> {
            common_substrings(s1, s2, min_length, &limits)
                .map(to_array)
                .map_err(align_error)
        },
    );

    // STRING_DIFF(s1, s2, min_length): gaps are drawn from s1 only
    engine.register_fn(
        "STRING_DIFF",
        move |s1: &str, s2: &str, min_length: i64| -> Result<Array, Box<EvalAltResult>> {
            differing_substrings(s1, s2, min_length, &limits)
                .map(to_array)
                .map_err(align_error)
        },
    );

    // FINDPOS(text, substring, instance): 1-based, instance -1 means last
    engine.register_fn(
        "FINDPOS",
        |haystack: &str, needle: &str, instance: i64| -> Result<i64, Box<EvalAltResult>> {
            text::find_pos(haystack, needle, instance)
                .and_then(|pos| i64::try_from(pos).ok())
                .ok_or_else(|| sheet_error("#VALUE!", "substring instance not found"))
        },
    );

    // EXTRACTSUBSTR(text, start_marker[, end_marker])
    engine.register_fn(
        "EXTRACTSUBSTR",
        |input: &str, start: &str| -> Result<String, Box<EvalAltResult>> {
            text::extract_substr(input, start, None)
                .ok_or_else(|| sheet_error("#N/A", "start marker not found"))
        },
    );
    engine.register_fn(
        "EXTRACTSUBSTR",
        |input: &str, start: &str, end: &str| -> Result<String, Box<EvalAltResult>> {
            text::extract_substr(input, start, Some(end))
                .ok_or_else(|| sheet_error("#N/A", "marker not found"))
        },
    );

    // TRUESPLIT(values, delimiter): one padded row per value
    engine.register_fn(
        "TRUESPLIT",
        |values: Array, delimiter: &str| -> Result<Array, Box<EvalAltResult>> {
            true_split(&values, delimiter)
        },
    );
    engine.register_fn(
        "TRUESPLIT",
        |value: &str, delimiter: &str| -> Result<Array, Box<EvalAltResult>> {
            true_split(&[Dynamic::from(value.to_string())], delimiter)
        },
    );

    // ARRAYSUBTRACT(a, b): values of a not in b, case-insensitive
    engine.register_fn("ARRAYSUBTRACT", |a: Array, b: Array| -> Array {
        text::subtract_by_key(a, &b, cell_text)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn engine() -> Engine {
        let mut engine = Engine::new();
        register_builtins(&mut engine, AlignLimits::default());
        engine
    }

    fn strings(array: Array) -> Vec<String> {
        array
            .into_iter()
            .map(|v| v.into_string().unwrap())
            .collect()
    }

    #[test]
    fn test_builtin_lookup_ignores_case() {
        assert_eq!(builtin("string_diff").map(|b| b.name), Some("STRING_DIFF"));
        assert!(builtin("SUM").is_none());
    }

    #[test]
    fn test_string_common() {
        let result: Array = engine()
            .eval(r#"STRING_COMMON("Hello there, how are you", "Hello there how are you", 5)"#)
            .unwrap();
        assert_eq!(strings(result), vec!["Hello there", " how are you"]);
    }

    #[test]
    fn test_string_common_below_threshold_is_empty_array() {
        let result: Array = engine()
            .eval(r#"STRING_COMMON("abcxdef", "abcydef", 4)"#)
            .unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_string_diff() {
        let result: Array = engine()
            .eval(r#"STRING_DIFF("abcxdef", "abcydef", 1)"#)
            .unwrap();
        assert_eq!(strings(result), vec!["x"]);

        let result: Array = engine().eval(r#"STRING_DIFF("", "abc", 1)"#).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_string_functions_respect_limits() {
        let mut engine = Engine::new();
        register_builtins(&mut engine, AlignLimits::new(16));

        let ok: Array = engine.eval(r#"STRING_COMMON("abc", "abc", 1)"#).unwrap();
        assert_eq!(strings(ok), vec!["abc"]);

        let err = engine
            .eval::<Array>(r#"STRING_COMMON("abcd", "abcd", 1)"#)
            .unwrap_err();
        assert!(err.to_string().contains("too large"), "{}", err);

        let err = engine
            .eval::<Array>(r#"STRING_DIFF("abcd", "abcd", 1)"#)
            .unwrap_err();
        assert!(err.to_string().contains("too large"), "{}", err);
    }

    #[test]
    fn test_findpos() {
        let engine = engine();
        let pos: i64 = engine.eval(r#"FINDPOS("Hello World", "o", 1)"#).unwrap();
        assert_eq!(pos, 5);
        let pos: i64 = engine.eval(r#"FINDPOS("Hello World", "O", -1)"#).unwrap();
        assert_eq!(pos, 8);

        let err = engine
            .eval::<i64>(r#"FINDPOS("Hello World", "o", 3)"#)
            .unwrap_err();
        assert!(err.to_string().contains("#VALUE!"), "{}", err);
    }

    #[test]
    fn test_extractsubstr() {
        let engine = engine();
        let s: String = engine
            .eval(r#"EXTRACTSUBSTR("A=[123] Z", "A=[", "]")"#)
            .unwrap();
        assert_eq!(s, "123");
        let s: String = engine.eval(r#"EXTRACTSUBSTR("A=[123] Z", "] ")"#).unwrap();
        assert_eq!(s, "Z");

        let err = engine
            .eval::<String>(r#"EXTRACTSUBSTR("A=[123 Z", "A=[", "]")"#)
            .unwrap_err();
        assert!(err.to_string().contains("#N/A"), "{}", err);
    }

    #[test]
    fn test_truesplit_pads_rows() {
        let rows: Array = engine()
            .eval(r#"TRUESPLIT(["a,b,c", "d", 42, ()], ",")"#)
            .unwrap();
        let rows: Vec<Vec<String>> = rows
            .into_iter()
            .map(|row| strings(row.into_array().unwrap()))
            .collect();
        assert_eq!(
            rows,
            vec![
                vec!["a", "b", "c"],
                vec!["d", "", ""],
                vec!["42", "", ""],
                vec!["", "", ""],
            ]
        );
    }

    #[test]
    fn test_truesplit_single_string() {
        let rows: Array = engine().eval(r#"TRUESPLIT("x;y", ";")"#).unwrap();
        assert_eq!(rows.len(), 1);
        let row = rows[0].clone().into_array().unwrap();
        assert_eq!(strings(row), vec!["x", "y"]);
    }

    #[test]
    fn test_truesplit_empty_delimiter() {
        let err = engine()
            .eval::<Array>(r#"TRUESPLIT(["a"], "")"#)
            .unwrap_err();
        assert!(err.to_string().contains("#VALUE!"), "{}", err);
    }

    #[test]
    fn test_arraysubtract() {
        let kept: Array = engine()
            .eval(r#"ARRAYSUBTRACT(["Apple", "pear", (), 3, "fig"], ["APPLE", 3, ()])"#)
            .unwrap();
        assert_eq!(strings(kept), vec!["pear", "fig"]);
    }

    #[test]
    fn test_arraysubtract_keeps_float_precision() {
        let engine = engine();
        let kept: Array = engine.eval("ARRAYSUBTRACT([2.501, 7], [2.499])").unwrap();
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].as_float().unwrap(), 2.501);
        assert_eq!(kept[1].as_int().unwrap(), 7);

        let kept: Array = engine.eval(r#"ARRAYSUBTRACT([2.5, 1.0], ["2.5", "1"])"#).unwrap();
        assert!(kept.is_empty(), "{:?}", kept);
    }

    #[test]
    fn test_truesplit_keeps_float_precision() {
        let rows: Array = engine().eval(r#"TRUESPLIT([0.125, 2.0], ",")"#).unwrap();
        let rows: Vec<Vec<String>> = rows
            .into_iter()
            .map(|row| strings(row.into_array().unwrap()))
            .collect();
        assert_eq!(rows, vec![vec!["0.125"], vec!["2"]]);
    }
}
