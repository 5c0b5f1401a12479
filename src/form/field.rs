//! Form field factory
//!
//! Turns an [`InputSpec`] into a concrete input/select/textarea element.
//! Two presentation modes exist: labeled (the add-item modal) and bare
//! (in-row editing). Both produce functionally equivalent elements.

use crate::error::Error;
use crate::model::Column;
use crate::model::InputKind;
use crate::model::InputSpec;
use crate::render::html::Element;

/// Inline style applied to a field that failed validation.
const INVALID_BORDER: &str = "border-color:red";

/// One form field with its resolved defaults and current state.
///
/// Resolution applies the spec defaults once, at construction: `name` falls
/// back to the column's field key, `label` to the column title, `required`
/// to true. A computed column whose spec carries no explicit name has no
/// field to submit under, which is a configuration error.
#[derive(Debug, Clone)]
pub struct FieldState {
    /// Field name submitted with the form.
    pub name: String,
    /// Control kind.
    pub kind: InputKind,
    /// Label text for the labeled presentation mode.
    pub label: String,
    /// Whether the field must be non-empty on submit.
    pub required: bool,
    /// Select options (value equals display text).
    pub options: Vec<String>,
    /// Extra HTML attributes copied verbatim.
    pub attrs: Vec<(String, String)>,
    /// Current raw value.
    pub value: String,
    /// Set when the last submit found this field empty.
    pub invalid: bool,
}

impl FieldState {
    /// Resolves a spec against its column.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when neither the spec nor the column yields
    /// a field name.
    pub fn from_spec(spec: &InputSpec, column: &Column) -> Result<Self, Error> {
        let name = spec
            .name
            .clone()
            .or_else(|| column.field_key().map(str::to_string))
            .ok_or_else(|| {
                Error::config(format!(
                    "column '{}': computed column input needs an explicit name",
                    column.title
                ))
            })?;

        Ok(Self {
            name,
            kind: spec.kind.clone(),
            label: spec.label.clone().unwrap_or_else(|| column.title.clone()),
            required: spec.required.unwrap_or(true),
            options: spec.options.clone(),
            attrs: spec.attrs.clone(),
            value: String::new(),
            invalid: false,
        })
    }

    /// Renders the field wrapped in its labeled container (modal mode).
    pub fn labeled_markup(&self) -> String {
        Element::new("label")
            .attr("for", &self.name)
            .text(&self.label)
            .child(self.element())
            .build()
    }

    /// Renders the bare field (in-row editing mode).
    pub fn bare_markup(&self) -> String {
        self.element().build()
    }

    fn element(&self) -> Element {
        match self.kind {
            InputKind::Select => self.select_element(),
            InputKind::Textarea => self.common_attrs(Element::new("textarea")).text(&self.value),
            _ => self
                .common_attrs(Element::new("input"))
                .attr("type", self.kind.as_str())
                .attr("value", &self.value),
        }
    }

    fn select_element(&self) -> Element {
        // Expand to a short list on focus, collapse after blur or a pick.
        let mut select = self
            .common_attrs(Element::new("select"))
            .attr("onfocus", "this.size=3")
            .attr("onblur", "this.size=1")
            .attr("onchange", "this.size=1;this.blur()");
        for option in &self.options {
            let mut element = Element::new("option").attr("value", option);
            if *option == self.value {
                element = element.flag("selected");
            }
            select = select.child(element.text(option));
        }
        select
    }

    fn common_attrs(&self, mut element: Element) -> Element {
        element = element.attr("name", &self.name);
        if self.required {
            element = element.flag("required");
        }
        for (key, value) in &self.attrs {
            element = element.attr(key, value);
        }
        if self.invalid {
            element = element.attr("style", INVALID_BORDER);
        }
        element
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_column() -> Column {
        Column::field("Surname", "surname", InputSpec::text())
    }

    #[test]
    fn test_defaults_resolve_from_column() {
        let column = text_column();
        let field = FieldState::from_spec(&InputSpec::text(), &column).unwrap();
        assert_eq!(field.name, "surname");
        assert_eq!(field.label, "Surname");
        assert!(field.required);
    }

    #[test]
    fn test_explicit_name_and_label_win() {
        let column = text_column();
        let spec = InputSpec::text().name("lastname").label("Last name").optional();
        let field = FieldState::from_spec(&spec, &column).unwrap();
        assert_eq!(field.name, "lastname");
        assert_eq!(field.label, "Last name");
        assert!(!field.required);
    }

    #[test]
    fn test_computed_column_needs_explicit_name() {
        let column = Column::computed(
            "Age",
            |_| crate::model::RenderedCell::text(""),
            InputSpec::date(),
        );
        let spec = InputSpec::date();
        assert!(matches!(
            FieldState::from_spec(&spec, &column),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_input_markup() {
        let column = text_column();
        let mut field = FieldState::from_spec(&InputSpec::text(), &column).unwrap();
        field.value = "Danylo".to_string();
        let markup = field.bare_markup();
        assert!(markup.contains("type=\"text\""));
        assert!(markup.contains("name=\"surname\""));
        assert!(markup.contains("required"));
        assert!(markup.contains("value=\"Danylo\""));
        assert!(!markup.contains("</input>"));
    }

    #[test]
    fn test_labeled_wraps_bare() {
        let column = text_column();
        let field = FieldState::from_spec(&InputSpec::text(), &column).unwrap();
        let markup = field.labeled_markup();
        assert!(markup.starts_with("<label for=\"surname\">Surname<input"));
    }

    #[test]
    fn test_select_markup_preselects_and_toggles_size() {
        let column = Column::field("Currency", "currency", InputSpec::select(["$", "€"]));
        let mut field =
            FieldState::from_spec(&InputSpec::select(["$", "€"]), &column).unwrap();
        field.value = "€".to_string();
        let markup = field.bare_markup();
        assert!(markup.contains("onfocus=\"this.size=3\""));
        assert!(markup.contains("onblur=\"this.size=1\""));
        assert!(markup.contains("<option value=\"$\">$</option>"));
        assert!(markup.contains("<option value=\"€\" selected>€</option>"));
    }

    #[test]
    fn test_invalid_field_gets_red_border() {
        let column = text_column();
        let mut field = FieldState::from_spec(&InputSpec::text(), &column).unwrap();
        field.invalid = true;
        assert!(field.bare_markup().contains("style=\"border-color:red\""));
    }

    #[test]
    fn test_textarea_holds_value_as_content() {
        let column = Column::field("Notes", "notes", InputSpec::textarea());
        let mut field = FieldState::from_spec(&InputSpec::textarea(), &column).unwrap();
        field.value = "line".to_string();
        let markup = field.bare_markup();
        assert!(markup.contains("<textarea"));
        assert!(markup.ends_with("line</textarea>"));
    }
}
