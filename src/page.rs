//! The page surface the front-end draws on: a users table, a popup form and
//! the clickable elements events are raised from.

use serde::Serialize;

use crate::router::{ActionTag, Region};
use crate::types::{RecordId, UserFields, UserRecord};

pub const ADD_LABEL: &str = "Add user";
pub const EDIT_LABEL: &str = "Edit user";

/// One rendered table row, tagged with the record id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub id: RecordId,
    pub name: String,
    pub lastname: String,
    pub phone: String,
}

impl From<&UserRecord> for Row {
    fn from(record: &UserRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            lastname: record.lastname.clone(),
            phone: record.phone.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableBody {
    pub rows: Vec<Row>,
}

impl TableBody {
    pub fn find(&self, id: &RecordId) -> Option<&Row> {
        self.rows.iter().find(|row| &row.id == id)
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Popup {
    pub hidden: bool,
    pub submit_label: &'static str,
}

impl Default for Popup {
    fn default() -> Self {
        Self {
            hidden: true,
            submit_label: ADD_LABEL,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub table: TableBody,
    pub form: UserFields,
    pub popup: Popup,
}

impl Page {
    /// The delete/edit control inside the row for `id`, if that row is rendered.
    pub fn row_control(&self, id: &RecordId, tag: ActionTag) -> Option<Element> {
        self.table
            .find(id)
            .map(|row| Element::in_row(tag.class(), row.id.clone()))
    }
}

/// Minimal view of a DOM node: its class and the id of the enclosing row, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub class: String,
    pub row: Option<RecordId>,
}

impl Element {
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            row: None,
        }
    }

    pub fn in_row(class: impl Into<String>, row: RecordId) -> Self {
        Self {
            class: class.into(),
            row: Some(row),
        }
    }
}

/// A click as seen by the listener registered on `region`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    pub region: Region,
    pub target: Element,
    pub current_target: Element,
}

impl ClickEvent {
    /// A click on `target`, bubbled up to the root element of `region`.
    pub fn on(region: Region, target: Element) -> Self {
        Self {
            region,
            target,
            current_target: region.root(),
        }
    }

    /// A click directly on the root element of `region`.
    pub fn on_root(region: Region) -> Self {
        Self::on(region, region.root())
    }
}
