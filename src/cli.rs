use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Compact,
}

#[derive(Parser)]
#[command(name = "employees")]
#[command(about = "Manage employee records on a remote employee service", version)]
#[command(after_help = "EXAMPLES:
    employees list                          List everyone, first page
    employees list --search ada --page 2    Page 2 of a name search
    employees add -n \"Ada Lovelace\" -e ada@example.com -d Engineering
    employees edit 7 --department Research  Change one field
    employees delete 7                      Delete and show the refreshed list")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json, compact)
    #[arg(long, short = 'o', global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Output as JSON (alias for --format json)
    #[arg(long, global = true, hide = true)]
    pub json: bool,

    /// Suppress success messages
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Show detailed error information and debug logs
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Base URL of the employee service (overrides EMPLOYEES_API_URL and config)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Rows per page in list views (default: 10)
    #[arg(long, global = true)]
    pub page_size: Option<usize>,
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
    /// List employees, paged locally over the full result set
    #[command(after_help = "EXAMPLES:
    employees list
    employees list --page 3
    employees list --search lovelace")]
    List(ListArgs),
    /// Show one employee
    #[command(after_help = "EXAMPLES:
    employees show 7")]
    Show {
        /// Employee ID
        id: String,
    },
    /// Add a new employee
    #[command(after_help = "EXAMPLES:
    employees add -n \"Ada Lovelace\" -e ada@example.com -d Engineering")]
    Add(AddArgs),
    /// Edit an existing employee; omitted fields keep their current value
    #[command(after_help = "EXAMPLES:
    employees edit 7 --email ada@lovelace.dev
    employees edit 7 -n \"Ada King\" -d Research")]
    Edit(EditArgs),
    /// Delete an employee, then show the refreshed list
    #[command(after_help = "EXAMPLES:
    employees delete 7
    employees delete 7 --search ada")]
    Delete(DeleteArgs),
    /// Run one server-side search page by name or department
    #[command(after_help = "EXAMPLES:
    employees search ada
    employees search engineering --field department --page 1 --size 20")]
    Search(SearchArgs),
    /// Fetch one server-side page of all employees
    #[command(after_help = "EXAMPLES:
    employees pages
    employees pages --page 2 --size 25")]
    Pages(PageArgs),
    /// Generate shell completions
    #[command(after_help = "EXAMPLES:
    employees completions bash > ~/.bash_completion.d/employees
    employees completions zsh > ~/.zfunc/_employees")]
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
    /// Initialize configuration file interactively
    Init,
}

#[derive(Args, Clone)]
pub struct ListArgs {
    /// Only show employees whose name contains this text
    #[arg(long, short)]
    pub search: Option<String>,

    /// Page to show (1-based)
    #[arg(long, short, default_value = "1")]
    pub page: usize,
}

#[derive(Args)]
pub struct AddArgs {
    /// Full name
    #[arg(long, short)]
    pub name: String,

    /// Email address
    #[arg(long, short)]
    pub email: String,

    /// Department
    #[arg(long, short)]
    pub department: String,
}

#[derive(Args)]
pub struct EditArgs {
    /// Employee ID
    pub id: String,

    /// New name
    #[arg(long, short)]
    pub name: Option<String>,

    /// New email address
    #[arg(long, short)]
    pub email: Option<String>,

    /// New department
    #[arg(long, short)]
    pub department: Option<String>,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// Employee ID
    pub id: String,

    #[command(flatten)]
    pub view: ListArgs,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Text the field must contain
    pub term: String,

    /// Field to search: name or department
    #[arg(long, short, default_value = "name")]
    pub field: String,

    #[command(flatten)]
    pub paging: PageArgs,
}

#[derive(Args)]
pub struct PageArgs {
    /// Server page (0-based)
    #[arg(long, short, default_value = "0")]
    pub page: u32,

    /// Server page size
    #[arg(long, short, default_value = "10")]
    pub size: u32,
}
