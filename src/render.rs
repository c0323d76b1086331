//! Table renderer: record-to-row markup and in-place patches of the table body.

use crate::page::{Row, TableBody};
use crate::types::{RecordId, UserRecord};

/// Replace every row. `None` leaves the body untouched; an empty list clears it.
pub fn render_all(body: &mut TableBody, records: Option<&[UserRecord]>) {
    let Some(records) = records else {
        return;
    };
    body.rows = records.iter().map(Row::from).collect();
}

pub fn append_row(body: &mut TableBody, record: &UserRecord) {
    body.rows.push(Row::from(record));
}

/// Overwrite the three display cells of the row for `id`. Returns false when no row matched.
pub fn update_row(body: &mut TableBody, id: &RecordId, record: &UserRecord) -> bool {
    match body.rows.iter_mut().find(|row| &row.id == id) {
        Some(row) => {
            row.name = record.name.clone();
            row.lastname = record.lastname.clone();
            row.phone = record.phone.clone();
            true
        }
        None => false,
    }
}

pub fn remove_row(body: &mut TableBody, id: &RecordId) -> bool {
    let before = body.rows.len();
    body.rows.retain(|row| &row.id != id);
    body.rows.len() != before
}

pub fn row_markup(row: &Row) -> String {
    format!(
        r#"<tr data-id="{id}">
    <td class="name">{name}</td>
    <td class="lastname">{lastname}</td>
    <td class="phone">{phone}</td>
    <td>
        <button class="delete">Delete</button>
        <button class="edit">Edit</button>
    </td>
</tr>
"#,
        id = escape(row.id.as_str()),
        name = escape(&row.name),
        lastname = escape(&row.lastname),
        phone = escape(&row.phone),
    )
}

pub fn body_markup(body: &TableBody) -> String {
    body.rows.iter().map(row_markup).collect()
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, name: &str) -> UserRecord {
        UserRecord {
            id: RecordId::new(id),
            name: name.to_string(),
            lastname: "Lee".to_string(),
            phone: "555-0100".to_string(),
        }
    }

    fn body_with(ids: &[&str]) -> TableBody {
        let mut body = TableBody::default();
        let records: Vec<UserRecord> = ids.iter().map(|id| record(id, "Ann")).collect();
        render_all(&mut body, Some(records.as_slice()));
        body
    }

    #[test]
    fn test_render_all_none_is_noop() {
        let mut body = body_with(&["1", "2"]);
        render_all(&mut body, None);
        assert_eq!(body.len(), 2);
    }

    #[test]
    fn test_render_all_empty_list_clears() {
        let mut body = body_with(&["1", "2"]);
        render_all(&mut body, Some(&[][..]));
        assert!(body.is_empty());
    }

    #[test]
    fn test_render_all_replaces_rows() {
        let mut body = body_with(&["1", "2"]);
        render_all(&mut body, Some(&[record("3", "Bo")][..]));
        assert_eq!(body.len(), 1);
        assert_eq!(body.rows[0].id, RecordId::new("3"));
    }

    #[test]
    fn test_append_row_keeps_existing() {
        let mut body = body_with(&["1"]);
        append_row(&mut body, &record("2", "Bo"));
        assert_eq!(body.len(), 2);
        assert_eq!(body.rows[1].name, "Bo");
    }

    #[test]
    fn test_update_row_patches_cells() {
        let mut body = body_with(&["1", "2"]);
        let updated = UserRecord {
            id: RecordId::new("2"),
            name: "Cy".to_string(),
            lastname: "Park".to_string(),
            phone: "555-0199".to_string(),
        };
        assert!(update_row(&mut body, &RecordId::new("2"), &updated));
        let row = body.find(&RecordId::new("2")).unwrap();
        assert_eq!(
            (row.name.as_str(), row.lastname.as_str(), row.phone.as_str()),
            ("Cy", "Park", "555-0199")
        );
        assert_eq!(body.rows[0].name, "Ann");
        assert!(!update_row(&mut body, &RecordId::new("9"), &updated));
    }

    #[test]
    fn test_remove_row() {
        let mut body = body_with(&["41", "42"]);
        assert!(remove_row(&mut body, &RecordId::new("42")));
        assert!(body.find(&RecordId::new("42")).is_none());
        assert!(!remove_row(&mut body, &RecordId::new("42")));
        assert_eq!(body.len(), 1);
    }

    #[test]
    fn test_row_markup_tags_id_and_escapes() {
        let row = Row::from(&record("42", "<b>Ann</b>"));
        let html = row_markup(&row);
        assert!(html.starts_with(r#"<tr data-id="42">"#));
        assert!(html.contains(r#"<td class="name">&lt;b&gt;Ann&lt;/b&gt;</td>"#));
        assert!(html.contains(r#"<button class="delete">"#));
        assert!(html.contains(r#"<button class="edit">"#));
    }

    #[test]
    fn test_body_markup_has_one_row_per_record() {
        let body = body_with(&["1", "2", "3"]);
        assert_eq!(body_markup(&body).matches("<tr ").count(), 3);
    }
}
