//! Column type inference and cell rendering.
//!
//! Each column is scanned once to find the smallest representation that
//! holds every observed value exactly; serialization then coerces cells
//! through that type. Missing fields and JSON nulls render as empty
//! fields, and a column whose values disagree on kind falls back to text.

use serde_json::Value;

use crate::dataset::Dataset;

/// Narrowed storage type for one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Boolean,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt64,
    Float32,
    Float64,
    Text,
}

impl ColumnType {
    pub fn name(self) -> &'static str {
        match self {
            Self::Boolean => "bool",
            Self::Int8 => "i8",
            Self::Int16 => "i16",
            Self::Int32 => "i32",
            Self::Int64 => "i64",
            Self::UInt64 => "u64",
            Self::Float32 => "f32",
            Self::Float64 => "f64",
            Self::Text => "str",
        }
    }
}

/// A named column with its narrowed type.
#[derive(Debug, Clone)]
pub struct ColumnSpec {
    pub name: String,
    pub ty: ColumnType,
}

/// Scan every record once per column and narrow each column's type.
pub fn infer_columns(dataset: &Dataset) -> Vec<ColumnSpec> {
    dataset
        .columns()
        .iter()
        .map(|name| {
            let mut profile = ColumnProfile::default();
            for record in dataset.records() {
                if let Some(value) = record.get(name) {
                    profile.add(value);
                }
            }
            ColumnSpec { name: name.clone(), ty: profile.resolve() }
        })
        .collect()
}

/// Render one cell through the column's narrowed type.
///
/// Absent fields and nulls become empty fields; numbers in float columns
/// are coerced through the narrowed float width; everything in a text
/// column keeps its JSON text form (strings unquoted, arrays verbatim).
pub fn render_value(value: Option<&Value>, ty: ColumnType) -> String {
    let Some(value) = value else {
        return String::new();
    };

    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::String(s) => s.clone(),
        Value::Number(n) => match (ty, n.as_f64()) {
            (ColumnType::Float32, Some(f)) => (f as f32).to_string(),
            (ColumnType::Float64, Some(f)) => f.to_string(),
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}

/// Observed value domain for a single column.
#[derive(Debug)]
struct ColumnProfile {
    non_null: usize,
    bools: usize,
    ints: usize,
    floats: usize,
    strings: usize,
    others: usize,
    int_min: i64,
    int_max: i64,
    // Saw a u64 beyond i64::MAX.
    wide_uint: bool,
    // Every numeric value so far round-trips through f32.
    fits_f32: bool,
}

impl Default for ColumnProfile {
    fn default() -> Self {
        Self {
            non_null: 0,
            bools: 0,
            ints: 0,
            floats: 0,
            strings: 0,
            others: 0,
            int_min: i64::MAX,
            int_max: i64::MIN,
            wide_uint: false,
            fits_f32: true,
        }
    }
}

impl ColumnProfile {
    fn add(&mut self, value: &Value) {
        if value.is_null() {
            return;
        }
        self.non_null += 1;

        match value {
            Value::Bool(_) => self.bools += 1,
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    self.ints += 1;
                    self.int_min = self.int_min.min(i);
                    self.int_max = self.int_max.max(i);
                    if (i as f32) as i64 != i {
                        self.fits_f32 = false;
                    }
                } else if n.is_u64() {
                    self.ints += 1;
                    self.wide_uint = true;
                    self.fits_f32 = false;
                } else if let Some(f) = n.as_f64() {
                    self.floats += 1;
                    if (f as f32) as f64 != f {
                        self.fits_f32 = false;
                    }
                }
            }
            Value::String(_) => self.strings += 1,
            _ => self.others += 1,
        }
    }

    fn resolve(&self) -> ColumnType {
        if self.non_null == 0 || self.others > 0 {
            return ColumnType::Text;
        }

        let numeric = self.ints + self.floats;
        let kinds =
            [self.bools, numeric, self.strings].into_iter().filter(|&count| count > 0).count();
        if kinds > 1 {
            return ColumnType::Text;
        }

        if self.bools > 0 {
            return ColumnType::Boolean;
        }
        if self.strings > 0 {
            return ColumnType::Text;
        }

        if self.floats > 0 {
            return if self.fits_f32 { ColumnType::Float32 } else { ColumnType::Float64 };
        }
        if self.wide_uint {
            // A u64 beyond i64 mixed with negatives fits no numeric type
            // exactly; the column keeps its textual form.
            return if self.int_min < 0 { ColumnType::Text } else { ColumnType::UInt64 };
        }

        if self.int_min >= i64::from(i8::MIN) && self.int_max <= i64::from(i8::MAX) {
            ColumnType::Int8
        } else if self.int_min >= i64::from(i16::MIN) && self.int_max <= i64::from(i16::MAX) {
            ColumnType::Int16
        } else if self.int_min >= i64::from(i32::MIN) && self.int_max <= i64::from(i32::MAX) {
            ColumnType::Int32
        } else {
            ColumnType::Int64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{infer_columns, render_value, ColumnType};
    use crate::dataset::Dataset;
    use serde_json::json;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::TempDir;

    fn dataset_from(rows: &str) -> Dataset {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("rows.json");
        fs::write(&path, rows).expect("write");

        let mut dataset = Dataset::new();
        dataset.append_file(&path).expect("append");
        dataset
    }

    fn types_of(rows: &str) -> HashMap<String, ColumnType> {
        infer_columns(&dataset_from(rows))
            .into_iter()
            .map(|spec| (spec.name, spec.ty))
            .collect()
    }

    #[test]
    fn integers_narrow_to_smallest_width() {
        let types = types_of(
            r#"[
                {"small": 1, "medium": 300, "large": 70000, "huge": 9000000000},
                {"small": -4, "medium": -2, "large": 3, "huge": 0}
            ]"#,
        );

        assert_eq!(types["small"], ColumnType::Int8);
        assert_eq!(types["medium"], ColumnType::Int16);
        assert_eq!(types["large"], ColumnType::Int32);
        assert_eq!(types["huge"], ColumnType::Int64);
    }

    #[test]
    fn booleans_and_strings_keep_their_kind() {
        let types = types_of(r#"[{"flag": true, "name": "a"}, {"flag": false, "name": "b"}]"#);
        assert_eq!(types["flag"], ColumnType::Boolean);
        assert_eq!(types["name"], ColumnType::Text);
    }

    #[test]
    fn floats_narrow_to_f32_when_lossless() {
        let types = types_of(r#"[{"narrow": 1.5, "wide": 0.1}]"#);
        assert_eq!(types["narrow"], ColumnType::Float32);
        // 0.1 does not round-trip through f32.
        assert_eq!(types["wide"], ColumnType::Float64);
    }

    #[test]
    fn integers_mixed_with_floats_stay_numeric() {
        let types = types_of(r#"[{"x": 1}, {"x": 2.5}]"#);
        assert_eq!(types["x"], ColumnType::Float32);
    }

    #[test]
    fn mixed_kinds_fall_back_to_text() {
        let types = types_of(r#"[{"x": 1}, {"x": "two"}]"#);
        assert_eq!(types["x"], ColumnType::Text);
    }

    #[test]
    fn nulls_and_missing_fields_do_not_widen() {
        let types = types_of(r#"[{"x": 1, "y": null}, {"y": 2}, {"x": 3, "y": null}]"#);
        assert_eq!(types["x"], ColumnType::Int8);
        assert_eq!(types["y"], ColumnType::Int8);
    }

    #[test]
    fn all_null_column_is_text() {
        let types = types_of(r#"[{"x": null}, {"x": null}]"#);
        assert_eq!(types["x"], ColumnType::Text);
    }

    #[test]
    fn wide_unsigned_column_is_u64() {
        let types = types_of(r#"[{"x": 18446744073709551615}, {"x": 1}]"#);
        assert_eq!(types["x"], ColumnType::UInt64);
    }

    #[test]
    fn sign_mixed_wide_integers_fall_back_to_text() {
        let types = types_of(r#"[{"x": 18446744073709551615}, {"x": -1}]"#);
        assert_eq!(types["x"], ColumnType::Text);
    }

    #[test]
    fn arrays_render_as_json_text() {
        let types = types_of(r#"[{"tags": ["a", "b"]}]"#);
        assert_eq!(types["tags"], ColumnType::Text);

        let value = json!(["a", "b"]);
        assert_eq!(render_value(Some(&value), ColumnType::Text), r#"["a","b"]"#);
    }

    #[test]
    fn missing_and_null_render_empty() {
        assert_eq!(render_value(None, ColumnType::Int8), "");
        assert_eq!(render_value(Some(&json!(null)), ColumnType::Text), "");
    }

    #[test]
    fn numbers_render_through_the_narrowed_type() {
        assert_eq!(render_value(Some(&json!(42)), ColumnType::Int8), "42");
        assert_eq!(render_value(Some(&json!(1.5)), ColumnType::Float32), "1.5");
        assert_eq!(render_value(Some(&json!(1)), ColumnType::Float64), "1");
        assert_eq!(render_value(Some(&json!(true)), ColumnType::Boolean), "true");
    }
}
