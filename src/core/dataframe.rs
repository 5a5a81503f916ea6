use polars::prelude::*;

use crate::encode::TupleTable;

/// Trait for converting normalized output into Polars DataFrames.
pub trait ToDataFrame {
    /// Converts the object into a Polars DataFrame.
    ///
    /// # Errors
    ///
    /// Propagates any error Polars raises while assembling the frame.
    fn to_dataframe(&self) -> PolarsResult<DataFrame>;
}

/// One UTF-8 column per header field; cells keep the table's text form.
impl ToDataFrame for TupleTable {
    fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let columns = self
            .header()
            .iter()
            .enumerate()
            .map(|(idx, name)| {
                let values: Vec<&str> = self
                    .rows()
                    .iter()
                    .map(|row| row.get(idx).map_or("", String::as_str))
                    .collect();
                Column::new(name.as_str().into(), values)
            })
            .collect::<Vec<_>>();
        DataFrame::new(columns)
    }
}
