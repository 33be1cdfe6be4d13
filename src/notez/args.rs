use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, with git hash and commit date for dev builds.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "notez", version = get_version())]
#[command(about = "A small local note keeper", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding notes and config (defaults to $NOTEZ_HOME or the platform data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new note (starts as "Untitled")
    #[command(alias = "n")]
    New {
        /// Title to set right away
        #[arg(short, long)]
        title: Option<String>,

        /// Content to set right away
        #[arg(short, long)]
        content: Option<String>,
    },

    /// List all notes
    #[command(alias = "ls")]
    List,

    /// Show a note
    #[command(alias = "v")]
    View {
        /// Id of the note
        id: String,
    },

    /// Change a note's title and/or content
    #[command(alias = "u")]
    Update {
        /// Id of the note
        id: String,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New content
        #[arg(short, long)]
        content: Option<String>,
    },

    /// Edit a note in $EDITOR
    #[command(alias = "e")]
    Edit {
        /// Id of the note
        id: String,
    },

    /// Delete one or more notes
    #[command(alias = "rm")]
    Delete {
        /// Ids of the notes
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Print the path of the notes file
    Path,

    /// Get or set configuration
    Config {
        /// Configuration key (slot-key, id-length, on-corrupt)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
