//! In-place edit session

use chrono::NaiveDate;

use crate::error::Error;
use crate::form::FieldState;
use crate::form::edit_value;
use crate::form::split_positional;
use crate::model::Record;
use crate::model::TableConfig;
use crate::render::render_cell;

/// One row's open edit session.
///
/// Only one session may exist per table instance at a time; the controller
/// rejects a second `BeginEdit` while one is open. Initial field values come
/// from the currently displayed cells, converted back to raw form: multi-
/// input columns split the displayed text on whitespace and assign tokens
/// positionally, then each sub-input applies its own kind conversion (hex
/// extraction, age inversion, URL extraction).
#[derive(Debug, Clone)]
pub struct EditSession {
    /// Key of the record being edited.
    pub key: String,
    /// Field states in column order, sub-inputs flattened in spec order.
    pub fields: Vec<FieldState>,
}

impl EditSession {
    /// Opens a session for the given record, pre-filling every field from
    /// its rendered cells.
    pub fn begin(
        config: &TableConfig,
        key: impl Into<String>,
        record: &Record,
        today: NaiveDate,
    ) -> Result<Self, Error> {
        let mut fields = Vec::new();

        for column in &config.columns {
            let cell = render_cell(column, record)?;
            let specs = column.input.as_slice();
            let raw_values = if column.input.is_multi() {
                split_positional(cell.source_text(), specs.len())
            } else {
                vec![cell.source_text().to_string()]
            };

            for (spec, raw) in specs.iter().zip(raw_values) {
                let mut field = FieldState::from_spec(spec, column)?;
                field.value = edit_value(&field.kind, &raw, today);
                fields.push(field);
            }
        }

        Ok(Self {
            key: key.into(),
            fields,
        })
    }

    /// Returns the field with the given submitted name, if present.
    pub fn field(&self, name: &str) -> Option<&FieldState> {
        self.fields.iter().find(|f| f.name == name)
    }
}
