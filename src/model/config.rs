//! Declarative table configuration

use super::Record;
use super::RenderedCell;

/// Configuration for one table instance.
///
/// This is the entire public surface an embedding page consumes: where the
/// widget mounts, which columns it shows, and which REST endpoint backs it.
///
/// # Example
///
/// ```
/// use datagrid::model::{TableConfig, Column, InputSpec};
///
/// let config = TableConfig::new("#usersTable", "https://api.example.com/users")
///     .column(Column::field("Name", "name", InputSpec::text()))
///     .column(Column::field("Surname", "surname", InputSpec::text()));
/// ```
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// CSS selector of the element the embedder mounts the widget into.
    pub parent_selector: String,
    /// Columns in display order.
    pub columns: Vec<Column>,
    /// Base URL of the REST endpoint.
    pub api_url: String,
}

impl TableConfig {
    /// Creates a configuration with no columns.
    pub fn new(parent_selector: impl Into<String>, api_url: impl Into<String>) -> Self {
        Self {
            parent_selector: parent_selector.into(),
            columns: Vec::new(),
            api_url: api_url.into(),
        }
    }

    /// Appends a column (builder pattern).
    pub fn column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }
}

/// One configured table column: a title, a cell accessor, and the edit
/// control(s) backing it.
#[derive(Debug, Clone)]
pub struct Column {
    /// Header text.
    pub title: String,
    /// How cell content is produced from a record.
    pub value: CellSource,
    /// How the column is edited.
    pub input: InputSpecs,
}

impl Column {
    /// Creates a column reading the named record field verbatim.
    pub fn field(
        title: impl Into<String>,
        field: impl Into<String>,
        input: impl Into<InputSpecs>,
    ) -> Self {
        Self {
            title: title.into(),
            value: CellSource::Field(field.into()),
            input: input.into(),
        }
    }

    /// Creates a column whose cells are computed from the whole record.
    pub fn computed(
        title: impl Into<String>,
        value: fn(&Record) -> RenderedCell,
        input: impl Into<InputSpecs>,
    ) -> Self {
        Self {
            title: title.into(),
            value: CellSource::Computed(value),
            input: input.into(),
        }
    }

    /// Returns the record field this column reads directly, if any.
    pub fn field_key(&self) -> Option<&str> {
        match &self.value {
            CellSource::Field(name) => Some(name),
            CellSource::Computed(_) => None,
        }
    }
}

/// How a column derives cell content from a record.
#[derive(Debug, Clone)]
pub enum CellSource {
    /// Read the named field from the record verbatim.
    Field(String),
    /// Compute derived/display content (an age string, an image tag,
    /// a color swatch). The function decides text vs raw markup.
    Computed(fn(&Record) -> RenderedCell),
}

/// The edit control(s) backing one column.
///
/// Most columns map to a single field; a column whose display cell
/// serializes several underlying fields (price amount + currency code) lists
/// one spec per field, in display order.
#[derive(Debug, Clone)]
pub enum InputSpecs {
    /// One field, one control.
    Single(InputSpec),
    /// Several underlying fields behind one display cell.
    Multi(Vec<InputSpec>),
}

impl InputSpecs {
    /// Returns the specs as a slice, regardless of arity.
    pub fn as_slice(&self) -> &[InputSpec] {
        match self {
            Self::Single(spec) => std::slice::from_ref(spec),
            Self::Multi(specs) => specs,
        }
    }

    /// Returns `true` when one display cell maps to several fields.
    pub fn is_multi(&self) -> bool {
        matches!(self, Self::Multi(_))
    }
}

impl From<InputSpec> for InputSpecs {
    fn from(spec: InputSpec) -> Self {
        Self::Single(spec)
    }
}

impl From<Vec<InputSpec>> for InputSpecs {
    fn from(specs: Vec<InputSpec>) -> Self {
        Self::Multi(specs)
    }
}

/// The kind of control an [`InputSpec`] produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKind {
    /// Plain text input.
    Text,
    /// Numeric input; values coerce to floating point on submit.
    Number,
    /// Date input; cells holding an age string invert back to a date.
    Date,
    /// URL input; cells holding markup yield their first href/src.
    Url,
    /// Color input; cells holding markup yield their first hex code.
    Color,
    /// Multi-line text area.
    Textarea,
    /// Dropdown over a fixed option list.
    Select,
    /// Any other HTML input type, passed through as-is.
    Other(String),
}

impl InputKind {
    /// Returns the HTML `type` attribute value for this kind.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Date => "date",
            Self::Url => "url",
            Self::Color => "color",
            Self::Textarea => "textarea",
            Self::Select => "select",
            Self::Other(t) => t,
        }
    }
}

/// Declarative description of one edit control.
///
/// `name` defaults to the column's field key when absent, `required`
/// defaults to true, and `options` is only meaningful for selects. Extra
/// attributes are copied verbatim onto the element.
#[derive(Debug, Clone)]
pub struct InputSpec {
    /// Control kind.
    pub kind: InputKind,
    /// Field name submitted with the form; defaults to the column's field key.
    pub name: Option<String>,
    /// Label text in the add-item modal; defaults to the column title.
    pub label: Option<String>,
    /// Whether the field must be filled in; defaults to true.
    pub required: Option<bool>,
    /// Option list for selects (option value equals display text).
    pub options: Vec<String>,
    /// Extra HTML attributes copied onto the element.
    pub attrs: Vec<(String, String)>,
}

impl InputSpec {
    /// Creates a spec of the given kind with every property defaulted.
    pub fn new(kind: InputKind) -> Self {
        Self {
            kind,
            name: None,
            label: None,
            required: None,
            options: Vec::new(),
            attrs: Vec::new(),
        }
    }

    /// Creates a text input spec.
    pub fn text() -> Self {
        Self::new(InputKind::Text)
    }

    /// Creates a number input spec.
    pub fn number() -> Self {
        Self::new(InputKind::Number)
    }

    /// Creates a date input spec.
    pub fn date() -> Self {
        Self::new(InputKind::Date)
    }

    /// Creates a URL input spec.
    pub fn url() -> Self {
        Self::new(InputKind::Url)
    }

    /// Creates a color input spec.
    pub fn color() -> Self {
        Self::new(InputKind::Color)
    }

    /// Creates a textarea spec.
    pub fn textarea() -> Self {
        Self::new(InputKind::Textarea)
    }

    /// Creates a select spec over the given options.
    pub fn select(options: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let mut spec = Self::new(InputKind::Select);
        spec.options = options.into_iter().map(Into::into).collect();
        spec
    }

    /// Sets the submitted field name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the modal label text.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Marks the field as optional (required defaults to true).
    pub fn optional(mut self) -> Self {
        self.required = Some(false);
        self
    }

    /// Adds an extra HTML attribute copied verbatim onto the element.
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((key.into(), value.into()));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_field_key() {
        let column = Column::field("Name", "name", InputSpec::text());
        assert_eq!(column.field_key(), Some("name"));

        let column = Column::computed("Age", |_| RenderedCell::text(""), InputSpec::date());
        assert_eq!(column.field_key(), None);
    }

    #[test]
    fn test_input_specs_arity() {
        let single: InputSpecs = InputSpec::text().into();
        assert_eq!(single.as_slice().len(), 1);
        assert!(!single.is_multi());

        let multi: InputSpecs = vec![
            InputSpec::number().name("price"),
            InputSpec::select(["$", "€"]).name("currency"),
        ]
        .into();
        assert_eq!(multi.as_slice().len(), 2);
        assert!(multi.is_multi());
    }
}
