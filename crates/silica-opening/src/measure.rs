//! The five measurement strategies and the variant-shape validator.
//!
//! A measurement record is discriminated by its `Type` field. Each variant
//! pairs a primary length (possibly not yet measured) with one secondary
//! reading: an outage, an offset, or an angle. Validation checks the
//! declared field set exactly: missing fields, wrong-kind fields, and
//! undeclared extras are all reported, and issues accumulate rather than
//! stopping at the first.

use crate::issue::{
    MEASURE_SHAPE_MISMATCH, MEASURE_TYPE_UNKNOWN, MEASURE_VALUE_INVALID, MeasureValidationIssue,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use silica_units::{Angle, Distance};

pub(crate) const ISSUE_PATH_ROOT: &str = "measurement";
pub(crate) const TYPE_FIELD: &str = "Type";
pub(crate) const DIRECTION_FIELD: &str = "Direction";

/// One measurement record, sans direction.
///
/// Exactly one variant is present per record, discriminated by the `Type`
/// wire field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "Type", rename_all = "lowercase")]
pub enum Measure {
    /// Length along a straight line, plus the amount of outage.
    Straight {
        #[serde(rename = "Distance")]
        distance: Option<Distance>,
        #[serde(rename = "Outage")]
        outage: f64,
    },

    /// Plumb or level distance, plus the other offset.
    Axial {
        #[serde(rename = "Major")]
        major: Option<Distance>,
        #[serde(rename = "Minor")]
        minor: f64,
    },

    /// Plumb or level distance, plus the amount of bow.
    Bowed {
        #[serde(rename = "Major")]
        major: Option<Distance>,
        #[serde(rename = "Minor")]
        minor: f64,
    },

    /// Plumb or level distance plus the other offset, forming an
    /// elliptical curve.
    Round {
        #[serde(rename = "Major")]
        major: Option<Distance>,
        #[serde(rename = "Minor")]
        minor: f64,
    },

    /// Plumb or level distance, plus the angular offset from straight in
    /// the current direction.
    Angle {
        #[serde(rename = "Major")]
        major: Option<Distance>,
        #[serde(rename = "Angle")]
        angle: Angle,
    },
}

impl Measure {
    /// The wire tag of this variant.
    pub fn tag(&self) -> &'static str {
        match self {
            Measure::Straight { .. } => "straight",
            Measure::Axial { .. } => "axial",
            Measure::Bowed { .. } => "bowed",
            Measure::Round { .. } => "round",
            Measure::Angle { .. } => "angle",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    Straight,
    Axial,
    Bowed,
    Round,
    Angle,
}

impl Tag {
    fn from_token(token: &str) -> Option<Tag> {
        match token {
            "straight" => Some(Tag::Straight),
            "axial" => Some(Tag::Axial),
            "bowed" => Some(Tag::Bowed),
            "round" => Some(Tag::Round),
            "angle" => Some(Tag::Angle),
            _ => None,
        }
    }

    fn token(self) -> &'static str {
        match self {
            Tag::Straight => "straight",
            Tag::Axial => "axial",
            Tag::Bowed => "bowed",
            Tag::Round => "round",
            Tag::Angle => "angle",
        }
    }

    fn declared_fields(self) -> &'static [&'static str] {
        match self {
            Tag::Straight => &["Distance", "Outage"],
            Tag::Axial | Tag::Bowed | Tag::Round => &["Major", "Minor"],
            Tag::Angle => &["Major", "Angle"],
        }
    }
}

/// Validate an untyped value as exactly one measurement variant.
///
/// Discrimination happens first: a missing or unrecognized `Type` rejects
/// the value outright regardless of its other fields. Once the tag is
/// known, the remaining keys must match that variant's declared field set
/// exactly. `Ok` is only ever a fully-validated record.
pub fn validate_measure(value: &Value) -> Result<Measure, Vec<MeasureValidationIssue>> {
    validate_measure_fields(value, false)
}

/// Shared shape check. `admit_direction` additionally allows (but does not
/// require) the `Direction` key, for composite validation.
pub(crate) fn validate_measure_fields(
    value: &Value,
    admit_direction: bool,
) -> Result<Measure, Vec<MeasureValidationIssue>> {
    let Some(obj) = value.as_object() else {
        return Err(vec![MeasureValidationIssue::new(
            MEASURE_SHAPE_MISMATCH,
            ISSUE_PATH_ROOT,
            "must be an object",
        )]);
    };

    let type_path = format!("{ISSUE_PATH_ROOT}.{TYPE_FIELD}");
    let tag = match obj.get(TYPE_FIELD) {
        None => {
            return Err(vec![MeasureValidationIssue::new(
                MEASURE_TYPE_UNKNOWN,
                type_path,
                "missing required field",
            )]);
        }
        Some(Value::String(token)) => match Tag::from_token(token) {
            Some(tag) => tag,
            None => {
                return Err(vec![MeasureValidationIssue::new(
                    MEASURE_TYPE_UNKNOWN,
                    type_path,
                    format!("unrecognized measurement type {token:?}"),
                )]);
            }
        },
        Some(_) => {
            return Err(vec![MeasureValidationIssue::new(
                MEASURE_TYPE_UNKNOWN,
                type_path,
                "must be a string",
            )]);
        }
    };

    let mut issues: Vec<MeasureValidationIssue> = Vec::new();

    let measure = match tag {
        Tag::Straight => {
            let distance = check_optional_distance(obj, "Distance", &mut issues);
            let outage = check_number(obj, "Outage", &mut issues);
            distance
                .zip(outage)
                .map(|(distance, outage)| Measure::Straight { distance, outage })
        }
        Tag::Axial => {
            let major = check_optional_distance(obj, "Major", &mut issues);
            let minor = check_number(obj, "Minor", &mut issues);
            major
                .zip(minor)
                .map(|(major, minor)| Measure::Axial { major, minor })
        }
        Tag::Bowed => {
            let major = check_optional_distance(obj, "Major", &mut issues);
            let minor = check_number(obj, "Minor", &mut issues);
            major
                .zip(minor)
                .map(|(major, minor)| Measure::Bowed { major, minor })
        }
        Tag::Round => {
            let major = check_optional_distance(obj, "Major", &mut issues);
            let minor = check_number(obj, "Minor", &mut issues);
            major
                .zip(minor)
                .map(|(major, minor)| Measure::Round { major, minor })
        }
        Tag::Angle => {
            let major = check_optional_distance(obj, "Major", &mut issues);
            let angle = check_angle(obj, "Angle", &mut issues);
            major
                .zip(angle)
                .map(|(major, angle)| Measure::Angle { major, angle })
        }
    };

    for key in obj.keys() {
        if key == TYPE_FIELD || (admit_direction && key == DIRECTION_FIELD) {
            continue;
        }
        if !tag.declared_fields().contains(&key.as_str()) {
            issues.push(MeasureValidationIssue::new(
                MEASURE_SHAPE_MISMATCH,
                format!("{ISSUE_PATH_ROOT}.{key}"),
                format!("undeclared field for a {} measurement", tag.token()),
            ));
        }
    }

    match measure {
        Some(measure) if issues.is_empty() => Ok(measure),
        _ => Err(issues),
    }
}

fn check_optional_distance(
    obj: &Map<String, Value>,
    name: &str,
    issues: &mut Vec<MeasureValidationIssue>,
) -> Option<Option<Distance>> {
    let path = format!("{ISSUE_PATH_ROOT}.{name}");
    let Some(field) = obj.get(name) else {
        issues.push(MeasureValidationIssue::new(
            MEASURE_SHAPE_MISMATCH,
            path,
            "missing required field",
        ));
        return None;
    };
    match field {
        Value::Null => Some(None),
        Value::Number(_) => {
            let Some(raw) = field.as_f64() else {
                issues.push(MeasureValidationIssue::new(
                    MEASURE_SHAPE_MISMATCH,
                    path,
                    "must be a number or null",
                ));
                return None;
            };
            match Distance::new(raw) {
                Ok(distance) => Some(Some(distance)),
                Err(err) => {
                    issues.push(MeasureValidationIssue::new(
                        MEASURE_VALUE_INVALID,
                        path,
                        err.to_string(),
                    ));
                    None
                }
            }
        }
        _ => {
            issues.push(MeasureValidationIssue::new(
                MEASURE_SHAPE_MISMATCH,
                path,
                "must be a number or null",
            ));
            None
        }
    }
}

fn check_number(
    obj: &Map<String, Value>,
    name: &str,
    issues: &mut Vec<MeasureValidationIssue>,
) -> Option<f64> {
    let path = format!("{ISSUE_PATH_ROOT}.{name}");
    let Some(field) = obj.get(name) else {
        issues.push(MeasureValidationIssue::new(
            MEASURE_SHAPE_MISMATCH,
            path,
            "missing required field",
        ));
        return None;
    };
    match field.as_f64() {
        Some(raw) if raw.is_finite() => Some(raw),
        _ => {
            issues.push(MeasureValidationIssue::new(
                MEASURE_SHAPE_MISMATCH,
                path,
                "must be a finite number",
            ));
            None
        }
    }
}

fn check_angle(
    obj: &Map<String, Value>,
    name: &str,
    issues: &mut Vec<MeasureValidationIssue>,
) -> Option<Angle> {
    let path = format!("{ISSUE_PATH_ROOT}.{name}");
    let Some(field) = obj.get(name) else {
        issues.push(MeasureValidationIssue::new(
            MEASURE_SHAPE_MISMATCH,
            path,
            "missing required field",
        ));
        return None;
    };
    let Some(raw) = field.as_f64() else {
        issues.push(MeasureValidationIssue::new(
            MEASURE_SHAPE_MISMATCH,
            path,
            "must be a number",
        ));
        return None;
    };
    match Angle::new(raw) {
        Ok(angle) => Some(angle),
        Err(err) => {
            issues.push(MeasureValidationIssue::new(
                MEASURE_VALUE_INVALID,
                path,
                err.to_string(),
            ));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issue::{MEASURE_SHAPE_MISMATCH, MEASURE_TYPE_UNKNOWN, MEASURE_VALUE_INVALID};
    use serde_json::json;

    #[test]
    fn accepts_each_variant_minimally_populated() {
        let cases = [
            (
                json!({"Type": "straight", "Distance": null, "Outage": 0.0}),
                Measure::Straight {
                    distance: None,
                    outage: 0.0,
                },
            ),
            (
                json!({"Type": "axial", "Major": null, "Minor": 3.0}),
                Measure::Axial {
                    major: None,
                    minor: 3.0,
                },
            ),
            (
                json!({"Type": "bowed", "Major": null, "Minor": -0.5}),
                Measure::Bowed {
                    major: None,
                    minor: -0.5,
                },
            ),
            (
                json!({"Type": "round", "Major": 30.25, "Minor": 2.0}),
                Measure::Round {
                    major: Some(Distance::new(30.25).unwrap()),
                    minor: 2.0,
                },
            ),
            (
                json!({"Type": "angle", "Major": null, "Angle": 15.5}),
                Measure::Angle {
                    major: None,
                    angle: Angle::new(15.5).unwrap(),
                },
            ),
        ];
        for (value, expected) in cases {
            let measure = validate_measure(&value).unwrap();
            assert_eq!(measure, expected);
        }
    }

    #[test]
    fn validated_records_round_trip() {
        let inputs = [
            json!({"Type": "straight", "Distance": 81.5, "Outage": 0.25}),
            json!({"Type": "axial", "Major": null, "Minor": 3.0}),
            json!({"Type": "angle", "Major": 12.0, "Angle": -45.0}),
        ];
        for input in inputs {
            let measure = validate_measure(&input).unwrap();
            let rendered = serde_json::to_value(&measure).unwrap();
            assert_eq!(rendered, input);
            assert_eq!(validate_measure(&rendered).unwrap(), measure);
        }
    }

    #[test]
    fn rejects_unrecognized_type_outright() {
        let issues =
            validate_measure(&json!({"Type": "curved", "Distance": null, "Outage": 0.0}))
                .unwrap_err();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].failure_class, MEASURE_TYPE_UNKNOWN);
        assert_eq!(issues[0].path, "measurement.Type");
        assert_eq!(issues[0].message, "unrecognized measurement type \"curved\"");
    }

    #[test]
    fn rejects_missing_or_non_string_type() {
        let issues = validate_measure(&json!({"Distance": null, "Outage": 0.0})).unwrap_err();
        assert_eq!(issues[0].failure_class, MEASURE_TYPE_UNKNOWN);
        assert_eq!(issues[0].message, "missing required field");

        let issues = validate_measure(&json!({"Type": 7, "Outage": 0.0})).unwrap_err();
        assert_eq!(issues[0].failure_class, MEASURE_TYPE_UNKNOWN);
        assert_eq!(issues[0].message, "must be a string");
    }

    #[test]
    fn rejects_non_object_input() {
        for value in [json!(null), json!("straight"), json!(3), json!(["straight"])] {
            let issues = validate_measure(&value).unwrap_err();
            assert_eq!(issues.len(), 1);
            assert_eq!(issues[0].failure_class, MEASURE_SHAPE_MISMATCH);
            assert_eq!(issues[0].path, "measurement");
            assert_eq!(issues[0].message, "must be an object");
        }
    }

    #[test]
    fn rejects_wrong_kind_fields() {
        let issues =
            validate_measure(&json!({"Type": "straight", "Distance": null, "Outage": "none"}))
                .unwrap_err();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].failure_class, MEASURE_SHAPE_MISMATCH);
        assert_eq!(issues[0].path, "measurement.Outage");
        assert_eq!(issues[0].message, "must be a finite number");

        let issues =
            validate_measure(&json!({"Type": "axial", "Major": "wide", "Minor": 3.0}))
                .unwrap_err();
        assert_eq!(issues[0].path, "measurement.Major");
        assert_eq!(issues[0].message, "must be a number or null");
    }

    #[test]
    fn rejects_one_undeclared_extra_field() {
        let issues = validate_measure(
            &json!({"Type": "straight", "Distance": null, "Outage": 0.0, "Shim": 1.0}),
        )
        .unwrap_err();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].failure_class, MEASURE_SHAPE_MISMATCH);
        assert_eq!(issues[0].path, "measurement.Shim");
        assert_eq!(issues[0].message, "undeclared field for a straight measurement");
    }

    #[test]
    fn direction_is_undeclared_for_the_bare_variant_validator() {
        let issues = validate_measure(
            &json!({"Type": "straight", "Distance": null, "Outage": 0.0, "Direction": "down"}),
        )
        .unwrap_err();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].path, "measurement.Direction");
    }

    #[test]
    fn rejects_invalid_nested_distance_and_angle() {
        let issues =
            validate_measure(&json!({"Type": "axial", "Major": -3.0, "Minor": 1.0})).unwrap_err();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].failure_class, MEASURE_VALUE_INVALID);
        assert_eq!(issues[0].path, "measurement.Major");
        assert_eq!(issues[0].message, "distance must be non-negative, got -3");

        let issues =
            validate_measure(&json!({"Type": "angle", "Major": null, "Angle": 200.0}))
                .unwrap_err();
        assert_eq!(issues[0].failure_class, MEASURE_VALUE_INVALID);
        assert_eq!(issues[0].path, "measurement.Angle");
    }

    #[test]
    fn issues_accumulate_in_field_order() {
        let issues = validate_measure(&json!({"Type": "axial"})).unwrap_err();
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].path, "measurement.Major");
        assert_eq!(issues[1].path, "measurement.Minor");
        for issue in &issues {
            assert_eq!(issue.message, "missing required field");
        }
    }

    #[test]
    fn variant_tags() {
        let measure = validate_measure(&json!({"Type": "round", "Major": null, "Minor": 1.0}))
            .unwrap();
        assert_eq!(measure.tag(), "round");
    }
}
