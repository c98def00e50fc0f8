//! Tabular data handed to an exporter

use crate::error::{ViewError, ViewResult};
use serde::Serialize;
use serde_json::{Map, Value};

/// Ordered columns over positional rows. A `None` cell is a missing value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
  columns: Vec<String>,
  rows: Vec<Vec<Option<String>>>,
}

impl Dataset {
  /// Join columns side by side by row position.
  ///
  /// Row N of every column lands in row N of the result. Columns shorter than
  /// the longest one are padded with missing cells.
  pub fn from_columns(columns: Vec<(String, Vec<String>)>) -> Self {
    let height = columns.iter().map(|(_, values)| values.len()).max().unwrap_or(0);
    let mut rows = vec![Vec::with_capacity(columns.len()); height];

    for (_, values) in &columns {
      for (idx, row) in rows.iter_mut().enumerate() {
        row.push(values.get(idx).cloned());
      }
    }

    Self { columns: columns.into_iter().map(|(label, _)| label).collect(), rows }
  }

  /// One row per record, one column per serialized field.
  ///
  /// Column order follows field declaration order of the first record.
  pub fn from_records<T: Serialize>(records: &[T]) -> ViewResult<Self> {
    let mut columns: Vec<String> = Vec::new();
    let mut objects = Vec::with_capacity(records.len());

    for record in records {
      match serde_json::to_value(record)? {
        Value::Object(object) => {
          if columns.is_empty() {
            columns = object.keys().cloned().collect();
          }
          objects.push(object);
        }
        other => {
          return Err(ViewError::Export(format!("Record is not an object: {}", other)));
        }
      }
    }

    let rows = objects
      .iter()
      .map(|object| columns.iter().map(|col| object.get(col).and_then(cell_text)).collect())
      .collect();

    Ok(Self { columns, rows })
  }

  pub fn columns(&self) -> &[String] {
    &self.columns
  }

  pub fn rows(&self) -> &[Vec<Option<String>>] {
    &self.rows
  }

  pub fn len(&self) -> usize {
    self.rows.len()
  }

  pub fn is_empty(&self) -> bool {
    self.rows.is_empty()
  }

  /// Column oriented JSON: `{column: {row index: value}}`
  pub fn to_json(&self) -> Value {
    let mut by_column = Map::new();
    for (col_idx, column) in self.columns.iter().enumerate() {
      let mut cells = Map::new();
      for (row_idx, row) in self.rows.iter().enumerate() {
        let value = row[col_idx].clone().map(Value::String).unwrap_or(Value::Null);
        cells.insert(row_idx.to_string(), value);
      }
      by_column.insert(column.clone(), Value::Object(cells));
    }
    Value::Object(by_column)
  }
}

fn cell_text(value: &Value) -> Option<String> {
  match value {
    Value::Null => None,
    Value::String(s) => Some(s.clone()),
    other => Some(other.to_string()),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[derive(Serialize)]
  struct Row {
    id: i64,
    #[serde(rename = "publishedAt")]
    published_at: String,
    note: Option<String>,
  }

  #[test]
  fn test_from_columns_pads_shorter_columns() {
    let data = Dataset::from_columns(vec![
      ("2021-10-27".to_string(), vec!["Apple".to_string(), "Boeing".to_string()]),
      ("2021-10-28".to_string(), vec!["Coca-Cola".to_string()]),
    ]);

    assert_eq!(data.columns(), &["2021-10-27", "2021-10-28"]);
    assert_eq!(data.len(), 2);
    assert_eq!(data.rows()[0], vec![Some("Apple".to_string()), Some("Coca-Cola".to_string())]);
    assert_eq!(data.rows()[1], vec![Some("Boeing".to_string()), None]);
  }

  #[test]
  fn test_from_columns_empty() {
    let data = Dataset::from_columns(Vec::new());
    assert!(data.is_empty());
    assert!(data.columns().is_empty());
  }

  #[test]
  fn test_from_records_keeps_field_order() {
    let rows = vec![
      Row { id: 7, published_at: "2021-10-05T08:14:27-04:00".to_string(), note: None },
      Row { id: 8, published_at: "2021-10-05T09:00:00-04:00".to_string(), note: Some("x".into()) },
    ];

    let data = Dataset::from_records(&rows).unwrap();
    assert_eq!(data.columns(), &["id", "publishedAt", "note"]);
    assert_eq!(data.rows()[0][0].as_deref(), Some("7"));
    assert_eq!(data.rows()[0][2], None);
    assert_eq!(data.rows()[1][2].as_deref(), Some("x"));
  }

  #[test]
  fn test_to_json_is_column_oriented() {
    let data = Dataset::from_columns(vec![
      ("b".to_string(), vec!["1".to_string(), "2".to_string()]),
      ("a".to_string(), vec!["3".to_string()]),
    ]);

    let value = data.to_json();
    assert_eq!(value, json!({"b": {"0": "1", "1": "2"}, "a": {"0": "3", "1": null}}));
    let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["b", "a"]);
  }
}
