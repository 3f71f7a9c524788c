//! Feature-name-to-column mapping for the output matrix.

use std::collections::HashMap;
use std::fmt;

/// Column carrying the step index in every row.
pub const INTERVAL_INDEX: &str = "interval_index";

/// Column carrying the step start time in every row.
pub const INTERVAL_START_TIME: &str = "interval_start_time";

/// Maps feature names to column offsets in the feature matrix.
///
/// The mapping defines the matrix layout: one column per entry. It also
/// decides which features survive aggregation, because extractor output
/// keys absent from the mapping are dropped silently, for every family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureColumns {
    index: HashMap<String, usize>,
}

impl FeatureColumns {
    /// Create a mapping from explicit name→offset entries.
    ///
    /// The mapping must be non-empty, contain [`INTERVAL_INDEX`] and
    /// [`INTERVAL_START_TIME`], and every offset must be below the entry
    /// count. Offsets are not required to be distinct.
    pub fn new(index: HashMap<String, usize>) -> Result<Self, ColumnsError> {
        if index.is_empty() {
            return Err(ColumnsError::Empty);
        }
        for key in [INTERVAL_INDEX, INTERVAL_START_TIME] {
            if !index.contains_key(key) {
                return Err(ColumnsError::MissingKey(key));
            }
        }
        let columns = index.len();
        if let Some((name, &offset)) = index.iter().find(|(_, &offset)| offset >= columns) {
            return Err(ColumnsError::OffsetOutOfRange {
                name: name.clone(),
                offset,
                columns,
            });
        }
        Ok(Self { index })
    }

    /// Create a mapping from a name list, assigning offsets in order.
    pub fn from_names<I, S>(names: I) -> Result<Self, ColumnsError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let index = names
            .into_iter()
            .enumerate()
            .map(|(offset, name)| (name.into(), offset))
            .collect();
        Self::new(index)
    }

    /// Number of columns in the matrix this mapping lays out.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Always false; an empty mapping cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Column offset for a feature name, if the name is mapped.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }
}

/// Column mapping construction errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnsError {
    /// The mapping contains no entries
    Empty,
    /// A mandatory key is absent
    MissingKey(&'static str),
    /// An offset does not fit the matrix width
    OffsetOutOfRange {
        name: String,
        offset: usize,
        columns: usize,
    },
}

impl fmt::Display for ColumnsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnsError::Empty => write!(f, "column mapping is empty"),
            ColumnsError::MissingKey(key) => write!(f, "column mapping is missing \"{key}\""),
            ColumnsError::OffsetOutOfRange {
                name,
                offset,
                columns,
            } => write!(
                f,
                "column offset {offset} for \"{name}\" exceeds the {columns}-column layout"
            ),
        }
    }
}

impl std::error::Error for ColumnsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_names_assigns_sequential_offsets() {
        let columns =
            FeatureColumns::from_names([INTERVAL_INDEX, INTERVAL_START_TIME, "mean_nni"]).unwrap();
        assert_eq!(columns.len(), 3);
        assert_eq!(columns.column(INTERVAL_INDEX), Some(0));
        assert_eq!(columns.column("mean_nni"), Some(2));
        assert_eq!(columns.column("sdnn"), None);
    }

    #[test]
    fn test_mandatory_keys_enforced() {
        let result = FeatureColumns::from_names([INTERVAL_INDEX, "mean_nni"]);
        assert_eq!(
            result.unwrap_err(),
            ColumnsError::MissingKey(INTERVAL_START_TIME)
        );
    }

    #[test]
    fn test_empty_mapping_rejected() {
        let result = FeatureColumns::new(HashMap::new());
        assert_eq!(result.unwrap_err(), ColumnsError::Empty);
    }

    #[test]
    fn test_offset_must_fit_layout() {
        let mut index = HashMap::new();
        index.insert(INTERVAL_INDEX.to_string(), 0);
        index.insert(INTERVAL_START_TIME.to_string(), 1);
        index.insert("mean_nni".to_string(), 7);
        let result = FeatureColumns::new(index);
        assert_eq!(
            result.unwrap_err(),
            ColumnsError::OffsetOutOfRange {
                name: "mean_nni".to_string(),
                offset: 7,
                columns: 3,
            }
        );
    }

    #[test]
    fn test_duplicate_offsets_are_legal() {
        let mut index = HashMap::new();
        index.insert(INTERVAL_INDEX.to_string(), 0);
        index.insert(INTERVAL_START_TIME.to_string(), 1);
        index.insert("sdnn".to_string(), 2);
        index.insert("sdrr".to_string(), 2);
        let columns = FeatureColumns::new(index).unwrap();
        assert_eq!(columns.len(), 4);
        assert_eq!(columns.column("sdnn"), columns.column("sdrr"));
    }
}
