use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cadastro", version)]
#[command(about = "Keep a list of people in a plain CSV file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// CSV data file (overrides the configured one)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Directory holding config.json (defaults to the user config dir)
    #[arg(long, global = true, value_name = "DIR", hide = true)]
    pub config_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the data file if it does not exist
    Init,

    /// List everyone
    #[command(alias = "ls")]
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show every field of one or more people
    #[command(alias = "v")]
    View {
        /// Ids of the people (e.g. 1 3)
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Register a new person
    #[command(alias = "n")]
    Add {
        /// First name
        first_name: String,

        /// Last name
        last_name: String,

        #[command(flatten)]
        details: DetailArgs,
    },

    /// Change fields of an existing person (an empty value clears a field)
    #[command(alias = "e")]
    Edit {
        /// Id of the person
        id: String,

        #[arg(long)]
        first_name: Option<String>,

        #[arg(long)]
        last_name: Option<String>,

        #[command(flatten)]
        details: DetailArgs,
    },

    /// Delete one or more people
    #[command(alias = "rm")]
    Delete {
        /// Ids of the people (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Print the id the next new person will get
    NextId,

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., data-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

/// Optional fields shared by `add` and `edit`.
#[derive(Args, Debug, Default)]
pub struct DetailArgs {
    #[arg(long)]
    pub street: Option<String>,

    /// House number (digits only)
    #[arg(long)]
    pub number: Option<String>,

    #[arg(long)]
    pub neighborhood: Option<String>,

    #[arg(long)]
    pub city: Option<String>,

    #[arg(long)]
    pub state: Option<String>,

    #[arg(long)]
    pub country: Option<String>,

    /// Phone, 8 to 11 digits
    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub email: Option<String>,
}
