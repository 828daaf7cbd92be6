//! Polars adapter: derive a `DatasetSchema` from a feature frame plus a class column, and
//! encode the rows as `Instance`s.

use crate::error::{ChiError, Result};
use crate::schema::{AttributeKind, AttributeSpec, DatasetSchema, Instance};
use itertools::Itertools;
use polars::prelude::*;

enum ColumnRole {
    Numeric,
    Nominal,
}

fn column_role(dtype: &DataType) -> Option<ColumnRole> {
    match dtype {
        DataType::Int8
        | DataType::Int16
        | DataType::Int32
        | DataType::Int64
        | DataType::UInt8
        | DataType::UInt16
        | DataType::UInt32
        | DataType::UInt64
        | DataType::Float32
        | DataType::Float64 => Some(ColumnRole::Numeric),
        DataType::String | DataType::Boolean => Some(ColumnRole::Nominal),
        DataType::Enum(_, _) | DataType::Categorical(_, _) => Some(ColumnRole::Nominal),
        _ => None,
    }
}

fn numeric_values(column: &Column) -> Result<Vec<Option<f64>>> {
    let series = column.as_materialized_series().cast(&DataType::Float64)?;
    let ca = series.f64()?;
    Ok(ca.into_iter().collect())
}

fn string_values(column: &Column) -> Result<Vec<Option<String>>> {
    let series = column.as_materialized_series().cast(&DataType::String)?;
    let ca = series.str()?;
    Ok(ca.into_iter().map(|v| v.map(str::to_string)).collect())
}

/// Sorted distinct non-null values of a string-like column.
fn distinct_strings(column: &Column) -> Result<Vec<String>> {
    Ok(string_values(column)?
        .into_iter()
        .flatten()
        .sorted()
        .dedup()
        .collect())
}

fn numeric_range(name: &str, column: &Column) -> Result<(f64, f64)> {
    let (min, max) = numeric_values(column)?
        .into_iter()
        .flatten()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if min > max {
        return Err(ChiError::InvalidSchema(format!(
            "numeric column '{}' has no finite values",
            name
        )));
    }
    Ok((min, max))
}

/// Build the schema: numeric columns get the `[min, max]` of the whole frame, string-like
/// columns their sorted distinct values. Classes are the sorted distinct values of `target`.
pub fn schema_from_dataframe(x: &DataFrame, target: &Column) -> Result<DatasetSchema> {
    let mut attributes = Vec::with_capacity(x.width());
    for column in x.get_columns() {
        let name = column.name().to_string();
        let spec = match column_role(column.dtype()) {
            Some(ColumnRole::Numeric) => {
                let (min, max) = numeric_range(&name, column)?;
                AttributeSpec::numeric(name, min, max)
            }
            Some(ColumnRole::Nominal) => {
                let values = distinct_strings(column)?;
                AttributeSpec::nominal(name, values)
            }
            None => {
                return Err(ChiError::DataFrame(format!(
                    "unsupported dtype {:?} for column '{}'",
                    column.dtype(),
                    name
                )))
            }
        };
        attributes.push(spec);
    }
    let classes = distinct_strings(target)?;
    Ok(DatasetSchema::new(attributes, classes))
}

/// Encode every row of `x` with its class from `target`. Nulls become `NaN` (missing).
pub fn instances_from_dataframe(
    x: &DataFrame,
    target: &Column,
    schema: &DatasetSchema,
) -> Result<Vec<Instance>> {
    if x.width() != schema.n_inputs() {
        return Err(ChiError::DataFrame(format!(
            "frame has {} columns, schema has {} attributes",
            x.width(),
            schema.n_inputs()
        )));
    }
    if target.len() != x.height() {
        return Err(ChiError::DataFrame(format!(
            "target has {} rows, features have {}",
            target.len(),
            x.height()
        )));
    }

    let mut encoded: Vec<Vec<f64>> = Vec::with_capacity(schema.n_inputs());
    for attr in &schema.attributes {
        let column = x.column(&attr.name)?;
        let values = match &attr.kind {
            AttributeKind::Numeric { .. } => numeric_values(column)?
                .into_iter()
                .map(|v| v.unwrap_or(f64::NAN))
                .collect(),
            AttributeKind::Nominal { .. } => string_values(column)?
                .into_iter()
                .enumerate()
                .map(|(row, v)| match v {
                    None => Ok(f64::NAN),
                    Some(s) => attr
                        .nominal_code(&s)
                        .map(|code| code as f64)
                        .ok_or_else(|| ChiError::InvalidInstance {
                            partition: 0,
                            row,
                            reason: format!("unknown value '{}' for '{}'", s, attr.name),
                        }),
                })
                .collect::<Result<Vec<f64>>>()?,
        };
        encoded.push(values);
    }

    string_values(target)?
        .into_iter()
        .enumerate()
        .map(|(row, class)| {
            let label = class
                .as_deref()
                .and_then(|c| schema.class_index(c))
                .ok_or_else(|| ChiError::InvalidInstance {
                    partition: 0,
                    row,
                    reason: format!("unknown class {:?}", class),
                })?;
            let values = encoded.iter().map(|col| col[row]).collect();
            Ok(Instance::new(values, label))
        })
        .collect()
}
