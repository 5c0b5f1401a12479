//! Full-widget markup
//!
//! Produces the DOM surface the embedder injects: an Add button, a
//! `<table>` with a row-number column, one column per configuration entry
//! and an actions column, and the overlay modal form as a sibling of the
//! table. The row in an open edit session renders bare inputs and
//! Save/Close buttons in place of its cells.

use super::cell::render_cell;
use super::html::Element;
use crate::controller::EditSession;
use crate::controller::ModalForm;
use crate::controller::Row;
use crate::error::Error;
use crate::model::Column;
use crate::model::TableConfig;

/// Renders the whole widget for one table instance.
///
/// Invariant: every body row carries `columns.len() + 2` cells (row number,
/// one per column, actions), in head-row order.
pub fn widget_markup(
    config: &TableConfig,
    rows: &[Row],
    editing: Option<&EditSession>,
    modal: &ModalForm,
) -> Result<String, Error> {
    let mut body = Element::new("tbody");
    for (index, row) in rows.iter().enumerate() {
        let tr = match editing {
            Some(session) if session.key == row.key => {
                editing_row(index + 1, row, session, &config.columns)
            }
            _ => viewing_row(index + 1, row, &config.columns)?,
        };
        body = body.child(tr);
    }

    let table = Element::new("table")
        .child(table_head(&config.columns))
        .child(body);

    let mut markup = Element::new("button")
        .class("btn-add-data")
        .text("Add")
        .build();
    markup.push_str(&table.build());
    markup.push_str(&modal_markup(modal));
    Ok(markup)
}

/// Head row: row-number column, one `<th>` per configured column, actions.
fn table_head(columns: &[Column]) -> Element {
    let mut tr = Element::new("tr").child(Element::new("th").text("#"));
    for column in columns {
        tr = tr.child(Element::new("th").text(&column.title));
    }
    tr = tr.child(Element::new("th").text("Actions"));
    Element::new("thead").child(tr)
}

fn viewing_row(number: usize, row: &Row, columns: &[Column]) -> Result<Element, Error> {
    let mut tr = Element::new("tr").child(Element::new("td").text(&number.to_string()));
    for column in columns {
        let cell = render_cell(column, &row.record)?;
        tr = tr.child(Element::new("td").raw(&cell.to_markup()));
    }

    let actions = Element::new("td")
        .child(action_button("btn-delete", "Delete", &row.key))
        .child(action_button("btn-edit", "Edit", &row.key));
    Ok(tr.child(actions))
}

fn editing_row(number: usize, row: &Row, session: &EditSession, columns: &[Column]) -> Element {
    let mut tr = Element::new("tr").child(Element::new("td").text(&number.to_string()));

    // Session fields are flat; regroup them per column by spec arity.
    let mut fields = session.fields.iter();
    for column in columns {
        let mut td = Element::new("td");
        for _ in column.input.as_slice() {
            if let Some(field) = fields.next() {
                td = td.raw(&field.bare_markup());
            }
        }
        tr = tr.child(td);
    }

    let actions = Element::new("td")
        .child(action_button("btn-delete", "Close", &row.key))
        .child(action_button("btn-save-edit", "Save", &row.key));
    tr.child(actions)
}

fn action_button(class: &str, text: &str, key: &str) -> Element {
    Element::new("button")
        .class(class)
        .attr("data-key", key)
        .text(text)
}

fn modal_markup(modal: &ModalForm) -> String {
    let mut form = Element::new("form");
    for field in &modal.fields {
        form = form.raw(&field.labeled_markup());
    }

    let buttons = Element::new("div")
        .class("form-btn-container")
        .child(Element::new("button").class("btn-close-modal").text("Close"))
        .child(
            Element::new("button")
                .class("btn-send-form-modal")
                .text("Add"),
        );
    form = form.child(buttons);

    let display = if modal.is_open() { "flex" } else { "none" };
    Element::new("div")
        .class("modal-overlay")
        .attr("style", format!("display:{display}"))
        .child(Element::new("div").class("modal").child(form))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::InputSpec;
    use crate::model::Record;

    fn config() -> TableConfig {
        TableConfig::new("#usersTable", "http://api/users")
            .column(Column::field("Name", "name", InputSpec::text()))
            .column(Column::field("Surname", "surname", InputSpec::text()))
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                key: "a1".to_string(),
                record: Record::new().set("name", "Ivan").set("surname", "Koval"),
            },
            Row {
                key: "b2".to_string(),
                record: Record::new().set("name", "Olha").set("surname", "Bondar"),
            },
        ]
    }

    #[test]
    fn test_cells_per_row_is_columns_plus_two() {
        let config = config();
        let modal = ModalForm::from_config(&config).unwrap();
        let markup = widget_markup(&config, &rows(), None, &modal).unwrap();

        // 2 body rows, each with 2 column cells + row number + actions.
        assert_eq!(markup.matches("<td").count(), 2 * (2 + 2));
        assert_eq!(markup.matches("<th").count(), 2 + 2);
    }

    #[test]
    fn test_row_numbers_follow_fetch_order() {
        let config = config();
        let modal = ModalForm::from_config(&config).unwrap();
        let markup = widget_markup(&config, &rows(), None, &modal).unwrap();

        let first = markup.find("<td>1</td>").unwrap();
        let second = markup.find("<td>2</td>").unwrap();
        assert!(first < second);
        assert!(markup.find("Ivan").unwrap() < markup.find("Olha").unwrap());
    }

    #[test]
    fn test_head_order_matches_config() {
        let markup = table_head(&config().columns).build();
        assert_eq!(
            markup,
            "<thead><tr><th>#</th><th>Name</th><th>Surname</th><th>Actions</th></tr></thead>"
        );
    }

    #[test]
    fn test_editing_row_swaps_cells_for_inputs() {
        let config = config();
        let modal = ModalForm::from_config(&config).unwrap();
        let rows = rows();
        let today = chrono::NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let session =
            EditSession::begin(&config, "b2", &rows[1].record, today).unwrap();

        let markup = widget_markup(&config, &rows, Some(&session), &modal).unwrap();
        assert!(markup.contains("value=\"Olha\""));
        assert!(markup.contains(">Save</button>"));
        assert!(markup.contains(">Close</button>"));
        // The other row still renders plain cells with Delete/Edit.
        assert!(markup.contains("<td>Ivan</td>"));
        assert!(markup.contains(">Edit</button>"));
    }

    #[test]
    fn test_modal_visibility_follows_state() {
        let config = config();
        let mut modal = ModalForm::from_config(&config).unwrap();
        let hidden = widget_markup(&config, &[], None, &modal).unwrap();
        assert!(hidden.contains("display:none"));

        modal.open();
        let shown = widget_markup(&config, &[], None, &modal).unwrap();
        assert!(shown.contains("display:flex"));
        assert!(shown.contains("<label for=\"name\">Name"));
    }
}
