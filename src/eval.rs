//! Expression evaluation.
//!
//! Evaluation is delegated to `fasteval`, which computes everything as
//! `f64`. The plugin never surfaces an evaluation error: any failure
//! degrades to [`EvalOutcome::Unchanged`] carrying the original text so the
//! buffer can stay exactly as the user wrote it.

use crate::logger::PLUGIN_NAME;

/// Outcome of an evaluation attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalOutcome {
    /// The expression evaluated to a finite number.
    Numeric(f64),
    /// Evaluation failed; carries the original text, whitespace and all.
    Unchanged(String),
}

/// Prepare the expression for evaluation: strip leading and trailing ASCII
/// spaces only (tabs and newlines stay), then drop digit-grouping commas
/// when enabled.
pub fn preprocess(text: &str, comma_separators: bool) -> String {
    let stripped = text.trim_matches(' ');
    if comma_separators {
        strip_digit_commas(stripped)
    } else {
        stripped.to_string()
    }
}

/// Drop commas sitting between two digits so `1,234,567` reads as one
/// literal. Any other comma stays put and fails evaluation as it should.
fn strip_digit_commas(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    for (i, &c) in chars.iter().enumerate() {
        let grouping = c == ','
            && i > 0
            && chars[i - 1].is_ascii_digit()
            && chars.get(i + 1).is_some_and(|next| next.is_ascii_digit());
        if !grouping {
            out.push(c);
        }
    }
    out
}

/// Evaluate `raw` as a numeric expression.
///
/// Any engine failure, and any non-finite result (division by zero lands
/// here), yields `Unchanged` with `raw` exactly as passed in.
pub fn evaluate(raw: &str, comma_separators: bool) -> EvalOutcome {
    let expr = preprocess(raw, comma_separators);
    match fasteval::ez_eval(&expr, &mut fasteval::EmptyNamespace) {
        Ok(value) if value.is_finite() => EvalOutcome::Numeric(value),
        Ok(value) => {
            log::debug!(target: PLUGIN_NAME, "non-finite result {value} for {expr:?}");
            EvalOutcome::Unchanged(raw.to_string())
        }
        Err(err) => {
            log::debug!(target: PLUGIN_NAME, "evaluation failed for {expr:?}: {err:?}");
            EvalOutcome::Unchanged(raw.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluates_arithmetic() {
        assert_eq!(evaluate("2+2", false), EvalOutcome::Numeric(4.0));
        assert_eq!(evaluate("10/4", false), EvalOutcome::Numeric(2.5));
        assert_eq!(evaluate("(1+2)*3", false), EvalOutcome::Numeric(9.0));
    }

    #[test]
    fn strips_surrounding_spaces_before_evaluating() {
        assert_eq!(evaluate("  2+2  ", false), EvalOutcome::Numeric(4.0));
    }

    #[test]
    fn failure_returns_the_exact_original_text() {
        assert_eq!(
            evaluate("  hello ", false),
            EvalOutcome::Unchanged("  hello ".to_string())
        );
        assert_eq!(
            evaluate("1 +", false),
            EvalOutcome::Unchanged("1 +".to_string())
        );
    }

    #[test]
    fn non_finite_results_count_as_failure() {
        assert_eq!(evaluate("1/0", false), EvalOutcome::Unchanged("1/0".to_string()));
        assert_eq!(evaluate("0/0", false), EvalOutcome::Unchanged("0/0".to_string()));
    }

    #[test]
    fn comma_grouping_is_opt_in() {
        assert_eq!(evaluate("1,000+1", true), EvalOutcome::Numeric(1001.0));
        assert_eq!(
            evaluate("1,000+1", false),
            EvalOutcome::Unchanged("1,000+1".to_string())
        );
    }

    #[test]
    fn only_digit_adjacent_commas_are_grouping() {
        assert_eq!(strip_digit_commas("1,234,567"), "1234567");
        assert_eq!(strip_digit_commas("a, b"), "a, b");
        assert_eq!(strip_digit_commas("1, 2"), "1, 2");
    }

    #[test]
    fn preprocess_leaves_tabs_and_newlines() {
        assert_eq!(preprocess(" \t2+2\n ", false), "\t2+2\n");
    }
}
