use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use crate::cli::OutputFormat;
use crate::page::{Row, TableBody};
use crate::render;
use crate::types::UserRecord;

static FORMAT: OnceLock<OutputFormat> = OnceLock::new();
static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set_format(format: OutputFormat) {
    let _ = FORMAT.set(format);
}

pub fn format() -> OutputFormat {
    FORMAT.get().copied().unwrap_or_default()
}

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

#[derive(Tabled)]
struct UserRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Last name")]
    lastname: String,
    #[tabled(rename = "Phone")]
    phone: String,
}

impl From<&Row> for UserRow {
    fn from(row: &Row) -> Self {
        Self {
            id: row.id.to_string(),
            name: row.name.clone(),
            lastname: row.lastname.clone(),
            phone: row.phone.clone(),
        }
    }
}

/// Print the table body in the selected format
pub fn print_users(body: &TableBody) {
    match format() {
        OutputFormat::Table => {
            if body.is_empty() {
                println!("No users.");
                return;
            }
            let rows: Vec<UserRow> = body.rows.iter().map(UserRow::from).collect();
            let table = Table::new(rows).with(Style::rounded()).to_string();
            println!("{table}");
        }
        OutputFormat::Json => print_json(&body.rows),
        OutputFormat::Html => print!("{}", render::body_markup(body)),
    }
}

/// Print a single record
pub fn print_user(user: &UserRecord) {
    match format() {
        OutputFormat::Table => {
            println!("{} {}", user.name.bold(), user.lastname.bold());
            println!("  {}  {}", "ID:".bright_black(), user.id);
            println!("  {}  {}", "Phone:".bright_black(), user.phone);
        }
        OutputFormat::Json => print_json(user),
        OutputFormat::Html => print!("{}", render::row_markup(&Row::from(user))),
    }
}

/// Print a success message (skipped when quiet, a simple object in JSON mode)
pub fn print_message(message: &str) {
    if QUIET.load(Ordering::Relaxed) {
        return;
    }
    if let Some(line) = message_line(format(), message) {
        println!("{line}");
    }
}

fn message_line(format: OutputFormat, message: &str) -> Option<String> {
    match format {
        OutputFormat::Table => Some(message.green().to_string()),
        OutputFormat::Json => Some(serde_json::json!({ "message": message }).to_string()),
        // Markup output stays pasteable.
        OutputFormat::Html => None,
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}
