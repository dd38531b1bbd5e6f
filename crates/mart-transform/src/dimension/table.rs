use mart_model::{RawTable, SourceKind, TableDim, ValidationError, require};

/// Project raw tables into `DimTable`, keeping `table_id` as the key.
///
/// Output has one row per input row; every field is required.
pub fn build_table_dimension(raw: &[RawTable]) -> Result<Vec<TableDim>, ValidationError> {
    raw.iter()
        .enumerate()
        .map(|(row, table)| {
            Ok(TableDim {
                table_key: require(table.table_id, SourceKind::Tables, row, "table_id")?,
                table_number: require(table.table_number, SourceKind::Tables, row, "table_number")?,
                section: require(table.section.clone(), SourceKind::Tables, row, "section")?,
                capacity: require(table.max_capacity, SourceKind::Tables, row, "max_capacity")?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_table(id: i64) -> RawTable {
        RawTable {
            table_id: Some(id),
            table_number: Some(id + 10),
            section: Some("Patio".to_string()),
            max_capacity: Some(4),
        }
    }

    #[test]
    fn keys_pass_through_unchanged() {
        let dims = build_table_dimension(&[raw_table(7), raw_table(3)]).expect("build");
        let keys: Vec<i64> = dims.iter().map(|dim| dim.table_key).collect();
        assert_eq!(keys, vec![7, 3]);
        assert_eq!(dims[0].table_number, 17);
        assert_eq!(dims[0].capacity, 4);
    }

    #[test]
    fn missing_capacity_is_reported_with_row() {
        let mut broken = raw_table(2);
        broken.max_capacity = None;
        let error = build_table_dimension(&[raw_table(1), broken]).unwrap_err();
        assert_eq!(error, ValidationError::new(SourceKind::Tables, 1, "max_capacity"));
    }
}
