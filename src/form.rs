//! Form session state and the popup form it drives.

use crate::page::{Page, ADD_LABEL, EDIT_LABEL};
use crate::types::{RecordId, UserFields, UserRecord};

/// Add/edit mode of the popup form. Only `Edit` carries a target id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormSession {
    #[default]
    Idle,
    Create,
    Edit(RecordId),
}

impl FormSession {
    #[allow(dead_code)]
    pub fn is_edit(&self) -> bool {
        matches!(self, FormSession::Edit(_))
    }

    #[allow(dead_code)]
    pub fn target(&self) -> Option<&RecordId> {
        match self {
            FormSession::Edit(id) => Some(id),
            FormSession::Idle | FormSession::Create => None,
        }
    }
}

pub fn begin_add(page: &mut Page) -> FormSession {
    page.form = UserFields::default();
    page.popup.hidden = false;
    page.popup.submit_label = ADD_LABEL;
    FormSession::Create
}

/// Opens the popup in edit mode; fields are filled later by [`populate`].
pub fn begin_edit(page: &mut Page, id: RecordId) -> FormSession {
    page.popup.hidden = false;
    page.popup.submit_label = EDIT_LABEL;
    FormSession::Edit(id)
}

pub fn populate(page: &mut Page, record: &UserRecord) {
    page.form = record.fields();
}

pub fn read_form_values(page: &Page) -> UserFields {
    page.form.clone()
}

pub fn reset(page: &mut Page) -> FormSession {
    page.popup.hidden = true;
    page.form = UserFields::default();
    FormSession::Idle
}
