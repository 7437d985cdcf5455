#[cfg(test)]
mod tests {
    use crate::error::*;
    use crate::eval::EvalScope;

    #[test]
    fn test_evaluation_error_message() {
        let err = Error::evaluation(EvalScope::Target, "process is running");
        assert_eq!(
            err.to_string(),
            "evaluation failed in target scope: process is running"
        );
    }

    #[test]
    fn test_evaluation_error_names_each_scope() {
        for (scope, name) in [
            (EvalScope::Target, "target"),
            (EvalScope::Frame, "frame"),
            (EvalScope::Standalone, "standalone"),
        ] {
            let err = Error::evaluation(scope, "x");
            assert!(err.to_string().contains(name));
        }
    }

    #[test]
    fn test_missing_summary_message() {
        let err = Error::MissingSummary;
        assert_eq!(err.to_string(), "evaluation produced no summary text");
    }

    #[test]
    fn test_expression_path_message() {
        let err = Error::ExpressionPath("value has no location".to_string());
        assert_eq!(
            err.to_string(),
            "could not compute expression path: value has no location"
        );
    }

    #[test]
    fn test_registration_message() {
        let err = Error::Registration("empty pattern".to_string());
        assert_eq!(err.to_string(), "summary registration rejected: empty pattern");
    }

    #[test]
    fn test_anyhow_passthrough() {
        let err: Error = anyhow::anyhow!("host went away").into();
        assert_eq!(err.to_string(), "host went away");
    }
}
