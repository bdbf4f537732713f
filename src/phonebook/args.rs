use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "phonebook", version)]
#[command(about = "Store and retrieve contact, phone number, and address information", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// The data store to use (defaults to the first registered backend)
    #[arg(long, global = true)]
    pub data_store: Option<String>,

    /// The backing file for the data store (defaults to the backend's path)
    #[arg(long, global = true)]
    pub path: Option<PathBuf>,

    /// Increase the verbosity of the output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Get a record from the phonebook by its name
    Get {
        /// The name of the record to get the information for
        name: String,

        /// Specify the desired manner of output
        #[arg(long, value_enum, default_value_t)]
        output_format: OutputFormat,
    },

    /// Get records matching glob-style filters; with no filters, all records
    Read {
        /// The glob expression to filter record names by
        #[arg(short, long)]
        name: Option<String>,

        /// The glob expression to filter phone numbers by
        #[arg(short, long)]
        phone: Option<String>,

        /// The glob expression to filter addresses by
        #[arg(short, long)]
        address: Option<String>,

        /// Specify the desired manner of output
        #[arg(long, value_enum, default_value_t)]
        output_format: OutputFormat,
    },

    /// Create a new record in the phonebook
    Create {
        /// The name of the record to create
        name: String,

        /// The phone number of the record to create
        phone: String,

        /// The address of the record to create
        address: String,
    },

    /// Delete a record from the phonebook by its name
    Delete {
        /// The name of the record to delete
        name: String,
    },

    /// Update fields of an existing record
    Update {
        /// The name of the record to update
        #[arg(value_name = "NAME")]
        record_name: String,

        /// The name to update the record to
        #[arg(short, long)]
        name: Option<String>,

        /// The phone number to update the record to
        #[arg(short, long)]
        phone: Option<String>,

        /// The address to update the record to
        #[arg(short, long)]
        address: Option<String>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}
