use serde::{Deserialize, Serialize};

/// Ordered names of the fields a row is expected to carry.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RowMeta {
    names: Vec<String>,
}

impl RowMeta {
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = names
            .into_iter()
            .map(|name| name.as_ref().to_string())
            .collect();
        RowMeta { names }
    }

    pub fn size(&self) -> usize {
        self.names.len()
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.names.iter().map(String::as_str).collect()
    }
}
