//! Add-item modal form

use crate::error::Error;
use crate::form::FieldState;
use crate::model::InputKind;
use crate::model::TableConfig;

/// Default value a cleared color input falls back to.
const COLOR_RESET: &str = "#000000";

/// State of the overlay form used to create a new record.
///
/// The form holds one labeled field per input spec, in column order. A
/// failed validation leaves it open with offending fields border-marked; a
/// successful submit clears and hides it.
#[derive(Debug, Clone)]
pub struct ModalForm {
    open: bool,
    /// Field states in column order, sub-inputs flattened in spec order.
    pub fields: Vec<FieldState>,
}

impl ModalForm {
    /// Builds the form from the table configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when any input spec lacks a resolvable
    /// field name, so a bad configuration fails at construction rather than
    /// on first submit.
    pub fn from_config(config: &TableConfig) -> Result<Self, Error> {
        let mut fields = Vec::new();
        for column in &config.columns {
            for spec in column.input.as_slice() {
                fields.push(FieldState::from_spec(spec, column)?);
            }
        }

        let mut form = Self {
            open: false,
            fields,
        };
        form.clear();
        Ok(form)
    }

    /// Returns `true` while the overlay is shown.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Shows the overlay.
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Hides the overlay and clears the form.
    pub fn close(&mut self) {
        self.open = false;
        self.clear();
    }

    /// Resets every field: color inputs to `#000000`, everything else to
    /// empty, and drops any validation marks.
    pub fn clear(&mut self) {
        for field in &mut self.fields {
            field.value = if field.kind == InputKind::Color {
                COLOR_RESET.to_string()
            } else {
                String::new()
            };
            field.invalid = false;
        }
    }

    /// Returns the field with the given submitted name, if present.
    pub fn field(&self, name: &str) -> Option<&FieldState> {
        self.fields.iter().find(|f| f.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Column;
    use crate::model::InputSpec;

    fn config() -> TableConfig {
        TableConfig::new("#products", "http://api/products")
            .column(Column::field("Title", "title", InputSpec::text()))
            .column(Column::field("Color", "color", InputSpec::color()))
    }

    #[test]
    fn test_clear_resets_color_to_black() {
        let mut form = ModalForm::from_config(&config()).unwrap();
        for field in &mut form.fields {
            field.value = "something".to_string();
            field.invalid = true;
        }
        form.clear();
        assert_eq!(form.field("title").unwrap().value, "");
        assert_eq!(form.field("color").unwrap().value, "#000000");
        assert!(form.fields.iter().all(|f| !f.invalid));
    }

    #[test]
    fn test_close_hides_and_clears() {
        let mut form = ModalForm::from_config(&config()).unwrap();
        form.open();
        assert!(form.is_open());
        form.close();
        assert!(!form.is_open());
    }
}
