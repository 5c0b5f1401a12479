//! Table controller
//!
//! Orchestrates fetch → render → row actions → re-render on mutation. The
//! widget holds no diffable client state: every mutation is followed by a
//! full re-fetch and re-render, trivially consistent at O(rows) per action.

use std::sync::Arc;

use chrono::Local;
use serde::Deserialize;
use serde_json::Value as Json;

use super::EditSession;
use super::ModalForm;
use crate::error::Error;
use crate::error::ValidationError;
use crate::form::FieldState;
use crate::model::InputKind;
use crate::model::Record;
use crate::model::TableConfig;
use crate::render::widget_markup;
use crate::transport::Transport;

/// Submitted form values: `(field name, raw value)` pairs in form order.
pub type FormValues = Vec<(String, String)>;

/// A user action against one table instance.
///
/// Commands are explicit so the whole controller is drivable without a live
/// DOM: each dispatch runs its transport calls and leaves the widget ready
/// to produce a fresh render from `(rows, editing, modal)` state.
#[derive(Debug, Clone)]
pub enum Command {
    /// Submit the add-item modal form.
    Add(FormValues),
    /// Delete the record with the given key.
    Delete(String),
    /// Replace the row's cells with pre-filled edit inputs.
    BeginEdit(String),
    /// Submit the row's edit inputs.
    SaveEdit(String, FormValues),
    /// Discard the open edit session.
    CancelEdit(String),
}

/// One loaded record with its server-assigned key.
#[derive(Debug, Clone)]
pub struct Row {
    /// Opaque identifier used for delete/edit targeting.
    pub key: String,
    /// The record's field values.
    pub record: Record,
}

/// JSON envelope the GET endpoint answers with.
#[derive(Debug, Deserialize)]
struct Envelope {
    data: serde_json::Map<String, Json>,
}

/// One declaratively-configured table instance.
///
/// Constructed explicitly from a [`TableConfig`] and a [`Transport`] — no
/// ambient singletons. `dispatch` takes `&mut self`, so operations are
/// serialized per table instance: overlapping in-flight requests against the
/// same widget cannot be issued, which is this crate's resolution of the
/// event-ordering race a naive event-handler wiring would allow.
///
/// # Example
///
/// ```no_run
/// # async fn demo() -> Result<(), datagrid::error::Error> {
/// use std::sync::Arc;
/// use datagrid::controller::{Command, TableWidget};
/// use datagrid::model::{Column, InputSpec, TableConfig};
/// use datagrid::transport::HttpTransport;
///
/// let config = TableConfig::new("#usersTable", "https://api.example.com/users")
///     .column(Column::field("Name", "name", InputSpec::text()));
///
/// let mut widget = TableWidget::new(config, Arc::new(HttpTransport::new()))?;
/// widget.load().await?;
/// let _markup = widget.render()?;
/// widget.dispatch(Command::Delete("k7".to_string())).await?;
/// # Ok(())
/// # }
/// ```
pub struct TableWidget {
    config: TableConfig,
    transport: Arc<dyn Transport>,
    rows: Vec<Row>,
    editing: Option<EditSession>,
    modal: ModalForm,
}

impl TableWidget {
    /// Creates a widget for one table instance.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when an input spec has no resolvable field
    /// name, so configuration mistakes surface before any network traffic.
    pub fn new(config: TableConfig, transport: Arc<dyn Transport>) -> Result<Self, Error> {
        let modal = ModalForm::from_config(&config)?;
        Ok(Self {
            config,
            transport,
            rows: Vec::new(),
            editing: None,
            modal,
        })
    }

    /// Returns the configuration this widget was built from.
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Returns the loaded rows in fetch order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Returns the open edit session, if any.
    pub fn editing(&self) -> Option<&EditSession> {
        self.editing.as_ref()
    }

    /// Returns the add-item modal form state.
    pub fn modal(&self) -> &ModalForm {
        &self.modal
    }

    /// Shows the add-item modal.
    pub fn show_modal(&mut self) {
        self.modal.open();
    }

    /// Hides and clears the add-item modal.
    pub fn hide_modal(&mut self) {
        self.modal.close();
    }

    /// Fetches the table contents fresh from the endpoint.
    ///
    /// Expects `{ "data": { key: record } }`; rows keep the envelope's
    /// order. Any open edit session is discarded — a load is a full render
    /// from server state.
    pub async fn load(&mut self) -> Result<(), Error> {
        let body = self.transport.get(&self.config.api_url).await?;
        let envelope: Envelope = serde_json::from_value(body)?;

        let mut rows = Vec::with_capacity(envelope.data.len());
        for (key, value) in envelope.data {
            let record: Record = serde_json::from_value(value)?;
            rows.push(Row { key, record });
        }

        self.rows = rows;
        self.editing = None;
        Ok(())
    }

    /// Executes one user action, reloading the table after any mutation.
    pub async fn dispatch(&mut self, command: Command) -> Result<(), Error> {
        match command {
            Command::Add(values) => self.add(values).await,
            Command::Delete(key) => self.delete(&key).await,
            Command::BeginEdit(key) => self.begin_edit(key),
            Command::SaveEdit(key, values) => self.save_edit(&key, values).await,
            Command::CancelEdit(key) => self.cancel_edit(&key).await,
        }
    }

    /// Renders the whole widget (add button, table, modal overlay).
    pub fn render(&self) -> Result<String, Error> {
        widget_markup(&self.config, &self.rows, self.editing.as_ref(), &self.modal)
    }

    /// Renders against an embedder-reported mount check.
    ///
    /// The embedder resolves `parent_selector` in its document; when the
    /// target is missing the render call aborts. This is the only
    /// user-facing configuration error path.
    pub fn render_into(&self, parent_exists: bool) -> Result<String, Error> {
        if !parent_exists {
            tracing::error!(
                selector = %self.config.parent_selector,
                "mount target not found, aborting render"
            );
            return Err(Error::ParentNotFound(self.config.parent_selector.clone()));
        }
        self.render()
    }

    async fn add(&mut self, values: FormValues) -> Result<(), Error> {
        let payload = match collect_payload(&mut self.modal.fields, &values) {
            Ok(payload) => payload,
            Err(validation) => {
                // Never reaches the server; the modal stays open with the
                // offending fields border-marked.
                tracing::warn!(fields = ?validation.fields, "add aborted, required fields empty");
                return Err(validation.into());
            }
        };

        self.transport
            .post(&self.config.api_url, &Json::Object(payload))
            .await?;
        self.modal.close();
        self.load().await
    }

    async fn delete(&mut self, key: &str) -> Result<(), Error> {
        // A failed delete aborts here without reloading.
        let response = self.transport.delete(&self.item_url(key)).await?;
        if is_falsy(&response) {
            // Some endpoints refuse a delete with a 2xx and an empty/false
            // body rather than an error status; keep the rows as they are.
            tracing::warn!(key, "delete refused by endpoint, skipping reload");
            return Ok(());
        }
        self.load().await
    }

    fn begin_edit(&mut self, key: String) -> Result<(), Error> {
        if let Some(session) = &self.editing {
            return Err(Error::EditInProgress(session.key.clone()));
        }
        let row = self
            .rows
            .iter()
            .find(|row| row.key == key)
            .ok_or_else(|| Error::UnknownKey(key.clone()))?;

        let today = Local::now().date_naive();
        self.editing = Some(EditSession::begin(&self.config, key, &row.record, today)?);
        Ok(())
    }

    async fn save_edit(&mut self, key: &str, values: FormValues) -> Result<(), Error> {
        let session = match &mut self.editing {
            Some(session) if session.key == key => session,
            _ => return Err(Error::NotEditing(key.to_string())),
        };

        let payload = match collect_payload(&mut session.fields, &values) {
            Ok(payload) => payload,
            Err(validation) => {
                tracing::warn!(fields = ?validation.fields, "save aborted, required fields empty");
                return Err(validation.into());
            }
        };

        self.transport
            .put(&self.item_url(key), &Json::Object(payload))
            .await?;
        self.load().await
    }

    async fn cancel_edit(&mut self, key: &str) -> Result<(), Error> {
        match &self.editing {
            Some(session) if session.key == key => {}
            _ => return Err(Error::NotEditing(key.to_string())),
        }
        // Discard is a full reload, same as the post-save path.
        self.load().await
    }

    fn item_url(&self, key: &str) -> String {
        format!("{}/{}", self.config.api_url, key)
    }
}

/// Returns `true` for JSON bodies that count as a refused action despite a
/// success status: null, false, zero, or an empty string.
fn is_falsy(value: &Json) -> bool {
    match value {
        Json::Null => true,
        Json::Bool(b) => !b,
        Json::Number(n) => n.as_f64() == Some(0.0),
        Json::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Overlays submitted values onto the field states, validates, and builds
/// the JSON object to send.
///
/// Every required field must be non-empty; offenders are border-marked and
/// the submit aborts with zero network calls. Number fields coerce to
/// floating point (an unparsable number counts as invalid); everything else
/// submits as a string. The assembled object carries every field, not just
/// changed ones. Optional fields left empty are omitted.
fn collect_payload(
    fields: &mut [FieldState],
    values: &FormValues,
) -> Result<serde_json::Map<String, Json>, ValidationError> {
    for field in fields.iter_mut() {
        if let Some((_, value)) = values.iter().find(|(name, _)| *name == field.name) {
            field.value = value.clone();
        }
    }

    let mut empty = Vec::new();
    let mut payload = serde_json::Map::new();

    for field in fields.iter_mut() {
        field.invalid = false;
        if field.value.is_empty() {
            if field.required {
                field.invalid = true;
                empty.push(field.name.clone());
            }
            continue;
        }

        let value = if field.kind == InputKind::Number {
            match field.value.parse::<f64>().ok().and_then(serde_json::Number::from_f64) {
                Some(number) => Json::Number(number),
                None => {
                    field.invalid = true;
                    empty.push(field.name.clone());
                    continue;
                }
            }
        } else {
            Json::String(field.value.clone())
        };
        payload.insert(field.name.clone(), value);
    }

    if empty.is_empty() {
        Ok(payload)
    } else {
        Err(ValidationError::new(empty))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Column;
    use crate::model::InputSpec;

    fn fields() -> Vec<FieldState> {
        let title = Column::field("Title", "title", InputSpec::text());
        let price = Column::field("Price", "price", InputSpec::number());
        let note = Column::field("Note", "note", InputSpec::textarea().optional());
        vec![
            FieldState::from_spec(&InputSpec::text(), &title).unwrap(),
            FieldState::from_spec(&InputSpec::number(), &price).unwrap(),
            FieldState::from_spec(&InputSpec::textarea().optional(), &note).unwrap(),
        ]
    }

    #[test]
    fn test_falsy_bodies() {
        assert!(is_falsy(&Json::Null));
        assert!(is_falsy(&serde_json::json!(false)));
        assert!(is_falsy(&serde_json::json!(0)));
        assert!(is_falsy(&serde_json::json!("")));
        assert!(!is_falsy(&serde_json::json!(true)));
        assert!(!is_falsy(&serde_json::json!({ "ok": true })));
        assert!(!is_falsy(&serde_json::json!(1)));
    }

    #[test]
    fn test_payload_coerces_numbers() {
        let mut fields = fields();
        let values = vec![
            ("title".to_string(), "Chair".to_string()),
            ("price".to_string(), "19.99".to_string()),
            ("note".to_string(), "oak".to_string()),
        ];
        let payload = collect_payload(&mut fields, &values).unwrap();
        assert_eq!(payload["title"], Json::String("Chair".to_string()));
        assert_eq!(payload["price"], serde_json::json!(19.99));
        assert_eq!(payload["note"], Json::String("oak".to_string()));
    }

    #[test]
    fn test_empty_required_field_aborts_and_marks() {
        let mut fields = fields();
        let values = vec![
            ("title".to_string(), String::new()),
            ("price".to_string(), "19.99".to_string()),
        ];
        let err = collect_payload(&mut fields, &values).unwrap_err();
        assert_eq!(err.fields, vec!["title"]);
        assert!(fields[0].invalid);
        assert!(!fields[1].invalid);
    }

    #[test]
    fn test_empty_optional_field_is_omitted() {
        let mut fields = fields();
        let values = vec![
            ("title".to_string(), "Chair".to_string()),
            ("price".to_string(), "5".to_string()),
        ];
        let payload = collect_payload(&mut fields, &values).unwrap();
        assert!(!payload.contains_key("note"));
    }

    #[test]
    fn test_unparsable_number_is_invalid() {
        let mut fields = fields();
        let values = vec![
            ("title".to_string(), "Chair".to_string()),
            ("price".to_string(), "cheap".to_string()),
        ];
        let err = collect_payload(&mut fields, &values).unwrap_err();
        assert_eq!(err.fields, vec!["price"]);
    }

    #[test]
    fn test_validation_resets_previous_marks() {
        let mut fields = fields();
        fields[1].invalid = true;
        let values = vec![
            ("title".to_string(), "Chair".to_string()),
            ("price".to_string(), "5".to_string()),
        ];
        collect_payload(&mut fields, &values).unwrap();
        assert!(!fields[1].invalid);
    }
}
