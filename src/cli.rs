use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::types::RecordId;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Html,
}

#[derive(Parser)]
#[command(name = "userdesk")]
#[command(about = "View, add, edit and delete users in a REST collection", version)]
#[command(after_help = "EXAMPLES:
    userdesk list                                   Show all users
    userdesk add --name Ann --lastname Lee --phone 555-0100
    userdesk edit 42 --phone 555-0199               Change one field
    userdesk delete 42                              Remove a user")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json, html)
    #[arg(long, short = 'o', global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Output as JSON (alias for --format json)
    #[arg(long, global = true, hide = true)]
    pub json: bool,

    /// Suppress success messages
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Show debug logs and the full error chain
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Fail with a non-zero exit code when a request fails instead of only logging it
    #[arg(long, global = true)]
    pub strict: bool,
}

impl Cli {
    /// Get the effective output format, considering --json flag
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.format
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all users
    #[command(alias = "ls")]
    List,
    /// Show a single user fetched from the API
    #[command(after_help = "EXAMPLES:
    userdesk show 42
    userdesk show 42 --format json")]
    Show {
        /// User id
        id: RecordId,
    },
    /// Add a user
    #[command(after_help = "EXAMPLES:
    userdesk add --name Ann --lastname Lee --phone 555-0100")]
    Add(AddArgs),
    /// Edit a user; omitted fields keep their current value
    #[command(after_help = "EXAMPLES:
    userdesk edit 42 --phone 555-0199
    userdesk edit 42 --name Ann --lastname Lee")]
    Edit(EditArgs),
    /// Delete a user
    #[command(alias = "rm")]
    Delete {
        /// User id
        id: RecordId,
    },
    /// Print the users table body as HTML
    Render,
    /// Generate shell completions
    #[command(after_help = "EXAMPLES:
    userdesk completions bash > ~/.bash_completion.d/userdesk
    userdesk completions zsh > ~/.zfunc/_userdesk")]
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
    /// Initialize configuration file interactively
    Init,
}

#[derive(Args)]
pub struct AddArgs {
    /// First name
    #[arg(long, short)]
    pub name: String,

    /// Last name
    #[arg(long, short)]
    pub lastname: String,

    /// Phone number
    #[arg(long, short)]
    pub phone: String,
}

#[derive(Args)]
pub struct EditArgs {
    /// User id
    pub id: RecordId,

    /// New first name
    #[arg(long, short)]
    pub name: Option<String>,

    /// New last name
    #[arg(long, short)]
    pub lastname: Option<String>,

    /// New phone number
    #[arg(long, short)]
    pub phone: Option<String>,
}
