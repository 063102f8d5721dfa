use crate::core::value::Value;
use serde::{Deserialize, Serialize};

/// Positional row values. The number of values may differ from the size of
/// the schema describing the row; short rows are "under-run".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RowData {
    pub values: Vec<Value>,
}

impl RowData {
    pub fn new(values: Vec<Value>) -> Self {
        RowData { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }
}

impl From<Vec<Value>> for RowData {
    fn from(values: Vec<Value>) -> Self {
        RowData { values }
    }
}
