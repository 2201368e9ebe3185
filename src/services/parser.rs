use serde_json::Value;
use thiserror::Error;

use crate::models::plan::WorkoutPlan;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("no JSON object found in model output")]
    NoJsonObject,
    #[error("model output is not valid JSON: {0}")]
    MalformedJson(#[source] serde_json::Error),
    #[error("JSON does not match the workout plan schema: {0}")]
    SchemaMismatch(#[source] serde_json::Error),
}

/// Extract a workout plan from raw model output.
///
/// Markdown fences are removed as literal substrings, then the text is sliced
/// from the first `{` to the last `}` inclusive and decoded. Decoding goes
/// through `Value` first so malformed JSON and a valid object with the wrong
/// shape report as distinct errors.
pub fn parse_plan(raw: &str) -> Result<WorkoutPlan, ParseError> {
    let cleaned = raw.replace("```json", "").replace("```", "");

    let start = cleaned.find('{').ok_or(ParseError::NoJsonObject)?;
    let end = cleaned.rfind('}').ok_or(ParseError::NoJsonObject)?;
    if end < start {
        return Err(ParseError::NoJsonObject);
    }

    let candidate = &cleaned[start..=end];

    let value: Value = serde_json::from_str(candidate).map_err(ParseError::MalformedJson)?;
    serde_json::from_value(value).map_err(ParseError::SchemaMismatch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plan_strips_markdown_fences() {
        let raw = "```json\n{\"goal\":\"X\",\"target_muscle\":\"Y\",\"workout_plan\":[],\"notes\":\"n\"}\n```";
        let plan = parse_plan(raw).unwrap();

        assert_eq!(plan.goal, "X");
        assert_eq!(plan.target_muscle, "Y");
        assert!(plan.workout_plan.is_empty());
        assert_eq!(plan.notes, "n");
    }

    #[test]
    fn test_parse_plan_accepts_surrounding_prose() {
        let raw = "Here is your plan: {\"goal\":\"Fat Loss\",\"target_muscle\":\"Legs\",\
                   \"workout_plan\":[{\"exercise\":\"Squat\",\"sets\":3,\"reps\":\"10\",\
                   \"rest\":\"60 sec\"}],\"notes\":\"go slow\"}";
        let plan = parse_plan(raw).unwrap();

        assert_eq!(plan.workout_plan.len(), 1);
        assert_eq!(plan.workout_plan[0].exercise, "Squat");
    }

    #[test]
    fn test_parse_plan_rejects_non_json() {
        assert!(matches!(
            parse_plan("not json at all"),
            Err(ParseError::NoJsonObject)
        ));
        assert!(matches!(parse_plan(""), Err(ParseError::NoJsonObject)));
    }

    #[test]
    fn test_parse_plan_rejects_inverted_braces() {
        assert!(matches!(
            parse_plan("} backwards {"),
            Err(ParseError::NoJsonObject)
        ));
    }

    // The slice runs from the first `{` to the last `}`, so two separate
    // objects produce `{"a":1} suffix {"b":2}`. serde_json rejects the
    // trailing content, which surfaces as malformed JSON.
    #[test]
    fn test_parse_plan_slices_first_to_last_brace() {
        let raw = "prefix {\"a\":1} suffix {\"b\":2}";
        assert!(matches!(
            parse_plan(raw),
            Err(ParseError::MalformedJson(_))
        ));
    }

    #[test]
    fn test_parse_plan_flags_schema_mismatch() {
        // Valid JSON object, but no workout_plan key.
        let raw = "{\"goal\":\"X\",\"notes\":\"n\"}";
        assert!(matches!(
            parse_plan(raw),
            Err(ParseError::SchemaMismatch(_))
        ));
    }
}
