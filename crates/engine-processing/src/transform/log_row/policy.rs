use super::format::MessageFormat;
use model::{
    log::{LogDirective, RowEvaluationContext},
    settings::{ErrorLogCase, LogRowSettings, NonErrorLogDetail},
};

/// Decide how a row is logged.
///
/// The error case is checked first; when it matches, the row is logged as an
/// error in detail and the non-error detail is not consulted. Pure and total.
pub fn evaluate(
    settings: &LogRowSettings,
    ctx: &RowEvaluationContext<'_>,
    format: &MessageFormat,
) -> LogDirective {
    if is_error(settings.error_log_case, ctx) {
        return LogDirective::error(format.detailed_message(ctx));
    }

    let first = ctx.is_first_row;
    match settings.non_error_log_detail {
        NonErrorLogDetail::AllBasic => LogDirective::basic(format.basic_message(ctx)),
        NonErrorLogDetail::FirstBasic if first => LogDirective::basic(format.basic_message(ctx)),
        NonErrorLogDetail::AllDetailed => LogDirective::basic(format.detailed_message(ctx)),
        NonErrorLogDetail::FirstDetailed if first => {
            LogDirective::basic(format.detailed_message(ctx))
        }
        _ => LogDirective::none(),
    }
}

fn is_error(case: ErrorLogCase, ctx: &RowEvaluationContext<'_>) -> bool {
    match case {
        ErrorLogCase::All => true,
        ErrorLogCase::First => ctx.is_first_row,
        ErrorLogCase::RowUnderRun => ctx.is_under_run(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::log_row::format::LineEnding;
    use model::{core::value::Value, log::Severity};

    const LF: MessageFormat = MessageFormat {
        line_ending: LineEnding::Lf,
    };

    fn settings(case: ErrorLogCase, detail: NonErrorLogDetail) -> LogRowSettings {
        LogRowSettings::new(case, detail)
    }

    #[test]
    fn test_all_logs_error_with_detail() {
        let values = [Value::Int(1), Value::Int(2), Value::Int(3)];
        let ctx = RowEvaluationContext::new(&["a", "b", "c"], &values, true);

        let directive = evaluate(&settings(ErrorLogCase::All, NonErrorLogDetail::None), &ctx, &LF);

        assert_eq!(directive.severity(), Severity::Error);
        assert_eq!(
            directive.message(),
            Some("inputRowMeta.size()=3, r.length=3\nMETA={a, b, c}\nROW={1, 2, 3}")
        );
    }

    #[test]
    fn test_under_run_row_is_error() {
        let values = [Value::Int(1), Value::Int(2)];
        let ctx = RowEvaluationContext::new(&["a", "b", "c", "d"], &values, false);

        let directive = evaluate(
            &settings(ErrorLogCase::RowUnderRun, NonErrorLogDetail::AllBasic),
            &ctx,
            &LF,
        );

        assert_eq!(directive.severity(), Severity::Error);
        assert_eq!(
            directive.message(),
            Some("inputRowMeta.size()=4 > r.length=2\nMETA={a, b, c, d}\nROW={1, 2}")
        );
    }

    #[test]
    fn test_complete_row_falls_through_to_basic() {
        let values = [Value::Int(9), Value::Null];
        let ctx = RowEvaluationContext::new(&["x", "y"], &values, false);

        let directive = evaluate(
            &settings(ErrorLogCase::RowUnderRun, NonErrorLogDetail::AllBasic),
            &ctx,
            &LF,
        );

        assert_eq!(directive.severity(), Severity::Basic);
        assert_eq!(directive.message(), Some("inputRowMeta.size()=2, r.length=2"));
    }

    #[test]
    fn test_first_detailed_on_later_row_logs_nothing() {
        let values = [Value::Int(9), Value::Int(8)];
        let ctx = RowEvaluationContext::new(&["x", "y"], &values, false);

        let directive = evaluate(
            &settings(ErrorLogCase::RowUnderRun, NonErrorLogDetail::FirstDetailed),
            &ctx,
            &LF,
        );

        assert_eq!(directive, LogDirective::none());
        assert_eq!(directive.message(), None);
    }

    #[test]
    fn test_all_takes_precedence_over_detail_and_position() {
        let values = [Value::Int(1)];
        for first in [true, false] {
            let ctx = RowEvaluationContext::new(&["a"], &values, first);
            for detail in NonErrorLogDetail::VARIANTS {
                let directive = evaluate(&settings(ErrorLogCase::All, detail), &ctx, &LF);
                assert_eq!(directive.severity(), Severity::Error);
            }
        }
    }

    #[test]
    fn test_first_error_case_only_on_first_row() {
        let values = [Value::Int(1)];
        let config = settings(ErrorLogCase::First, NonErrorLogDetail::None);

        let first = RowEvaluationContext::new(&["a"], &values, true);
        assert_eq!(evaluate(&config, &first, &LF).severity(), Severity::Error);

        let later = RowEvaluationContext::new(&["a"], &values, false);
        assert_eq!(evaluate(&config, &later, &LF).severity(), Severity::None);
    }

    #[test]
    fn test_first_error_case_falls_back_to_detail_on_later_rows() {
        let values = [Value::Int(1)];
        let config = settings(ErrorLogCase::First, NonErrorLogDetail::AllDetailed);
        let later = RowEvaluationContext::new(&["a"], &values, false);

        let directive = evaluate(&config, &later, &LF);

        assert_eq!(directive.severity(), Severity::Basic);
        assert_eq!(
            directive.message(),
            Some("inputRowMeta.size()=1, r.length=1\nMETA={a}\nROW={1}")
        );
    }

    #[test]
    fn test_equal_counts_never_under_run() {
        let values = [Value::Null, Value::Null];
        let ctx = RowEvaluationContext::new(&["a", "b"], &values, true);
        let directive = evaluate(
            &settings(ErrorLogCase::RowUnderRun, NonErrorLogDetail::None),
            &ctx,
            &LF,
        );
        assert_eq!(directive.severity(), Severity::None);
    }

    #[test]
    fn test_explicit_expected_count() {
        let values = [Value::Int(1), Value::Int(2)];
        let ctx = RowEvaluationContext {
            expected_field_count: 3,
            actual_value_count: values.len(),
            is_first_row: false,
            field_names: &["a", "b"],
            values: &values,
        };
        let directive = evaluate(
            &settings(ErrorLogCase::RowUnderRun, NonErrorLogDetail::None),
            &ctx,
            &LF,
        );
        assert_eq!(directive.severity(), Severity::Error);
    }

    #[test]
    fn test_first_basic_only_on_first_row() {
        let values = [Value::from("v")];
        let config = settings(ErrorLogCase::RowUnderRun, NonErrorLogDetail::FirstBasic);

        let first = RowEvaluationContext::new(&["f"], &values, true);
        let directive = evaluate(&config, &first, &LF);
        assert_eq!(directive.severity(), Severity::Basic);
        assert_eq!(directive.message(), Some("inputRowMeta.size()=1, r.length=1"));

        let later = RowEvaluationContext::new(&["f"], &values, false);
        assert!(!evaluate(&config, &later, &LF).is_emitted());
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let values = [Value::Int(4), Value::Null];
        let ctx = RowEvaluationContext::new(&["a", "b", "c"], &values, true);
        let config = settings(ErrorLogCase::RowUnderRun, NonErrorLogDetail::AllDetailed);
        assert_eq!(evaluate(&config, &ctx, &LF), evaluate(&config, &ctx, &LF));
    }
}
