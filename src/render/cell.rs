//! Column-driven cell rendering

use crate::error::FieldError;
use crate::model::CellSource;
use crate::model::Column;
use crate::model::Record;
use crate::model::RenderedCell;

/// Turns a column definition plus a record into cell content.
///
/// A plain field column reads the named field verbatim as text; a computed
/// column calls its function and returns the result unmodified (text or raw
/// markup, as the function decided).
///
/// # Errors
///
/// A missing field propagates as [`FieldError`]; nothing here catches it.
pub fn render_cell(column: &Column, record: &Record) -> Result<RenderedCell, FieldError> {
    match &column.value {
        CellSource::Field(name) => Ok(RenderedCell::Text(record.display(name)?)),
        CellSource::Computed(compute) => Ok(compute(record)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::InputSpec;

    #[test]
    fn test_field_column_reads_verbatim() {
        let column = Column::field("Name", "name", InputSpec::text());
        let record = Record::new().set("name", "Taras");
        assert_eq!(
            render_cell(&column, &record).unwrap(),
            RenderedCell::Text("Taras".to_string())
        );
    }

    #[test]
    fn test_missing_field_propagates() {
        let column = Column::field("Name", "name", InputSpec::text());
        let record = Record::new();
        assert!(matches!(
            render_cell(&column, &record),
            Err(FieldError::Missing { .. })
        ));
    }

    #[test]
    fn test_computed_column_returns_unmodified() {
        fn swatch(record: &Record) -> RenderedCell {
            let color = record.get_string("color").ok().flatten().unwrap_or("#000");
            RenderedCell::html(format!(
                "<div style=\"width:100px; height:100px; background-color:{color};\"></div>"
            ))
        }

        let column = Column::computed("Color", swatch, InputSpec::color().name("color"));
        let record = Record::new().set("color", "#ff8800");
        let cell = render_cell(&column, &record).unwrap();
        assert!(cell.to_markup().contains("background-color:#ff8800"));
    }
}
