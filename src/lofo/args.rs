use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "lofo")]
#[command(about = "A campus lost & found board for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in with your registration number (e.g. 22BCE9126)
    Login {
        reg_no: String,
    },

    /// Log out
    Logout,

    /// Show the logged-in registration number
    Whoami,

    /// Post a lost/found item
    #[command(alias = "post")]
    Add {
        /// Short title (e.g. "iPhone 15 Pro")
        title: String,

        /// What it looks like, where it was last seen, etc.
        #[arg(short, long)]
        description: String,

        /// Category (see `lofo categories`)
        #[arg(short, long)]
        category: String,

        /// Campus location (see `lofo locations`)
        #[arg(short, long)]
        location: String,

        /// lost or found
        #[arg(short, long)]
        status: String,

        /// Contact phone (10 digits, separators allowed)
        #[arg(short, long)]
        phone: String,

        /// Optional image reference (URL or path)
        #[arg(long)]
        image: Option<String>,
    },

    /// List items, optionally filtered
    #[command(alias = "ls")]
    List {
        /// lost or found
        #[arg(short, long)]
        status: Option<String>,

        /// Category filter
        #[arg(short, long)]
        category: Option<String>,

        /// Location filter
        #[arg(short, long)]
        location: Option<String>,

        /// Free-text filter across title/description/category/location
        #[arg(long)]
        search: Option<String>,
    },

    /// Smart search: ranks categories and items by relevance
    Search {
        term: String,
    },

    /// Show the most recently posted items
    Recent {
        /// How many (defaults to the recent-limit config value)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Delete one of your own posts by id
    #[command(alias = "rm")]
    Delete {
        id: String,
    },

    /// Print the category taxonomy
    Categories,

    /// Print campus locations, grouped by zone
    Locations,

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., recent-limit)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
