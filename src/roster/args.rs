use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(about = "Local employee records with search and pagination", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List employees, one page at a time
    #[command(alias = "ls")]
    List {
        /// Only show employees matching this text
        #[arg(short, long)]
        search: Option<String>,

        /// Page to show (out of range pages are ignored)
        #[arg(short, long)]
        page: Option<usize>,

        /// Layout: table or list
        #[arg(long)]
        view: Option<String>,
    },

    /// Show one employee
    #[command(alias = "v")]
    Show { id: String },

    /// Add an employee
    #[command(alias = "n")]
    Add {
        #[command(flatten)]
        fields: EmployeeFields,
    },

    /// Change fields of an employee; fields not given keep their value
    #[command(alias = "e")]
    Edit {
        id: String,

        #[command(flatten)]
        fields: EmployeeFields,
    },

    /// Delete an employee after confirmation
    #[command(alias = "rm")]
    Delete {
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Print how a phone number is masked
    Phone { input: String },

    /// Show or change the interface language (tr, en)
    Lang { code: Option<String> },

    /// Add generated sample employees
    Seed {
        /// How many to add
        #[arg(short, long, default_value_t = 20)]
        count: usize,

        /// Generator seed, same seed same records
        #[arg(long, default_value_t = 1)]
        seed: u64,
    },
}

#[derive(Args, Debug, Default)]
pub struct EmployeeFields {
    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,

    /// Date of employment (YYYY-MM-DD)
    #[arg(long)]
    pub employed: Option<String>,

    /// Date of birth (YYYY-MM-DD)
    #[arg(long)]
    pub born: Option<String>,

    /// Phone number, digits are masked as +(90) 5XX XXX XX XX
    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    /// analytics or tech
    #[arg(long)]
    pub department: Option<String>,

    /// junior, medior or senior
    #[arg(long)]
    pub position: Option<String>,
}
