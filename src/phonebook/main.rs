use clap::Parser;
use phonebook::error::Result;
use phonebook::model::Fields;
use phonebook::store::{self, DataStore, Filters};
use serde::Serialize;

mod args;
use args::{Cli, Commands, OutputFormat};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut store = store::open(cli.data_store.as_deref(), cli.path.clone())?;

    match cli.command {
        Commands::Get {
            name,
            output_format,
        } => handle_get(store.as_ref(), &name, output_format),
        Commands::Read {
            name,
            phone,
            address,
            output_format,
        } => handle_read(store.as_ref(), name, phone, address, output_format),
        Commands::Create {
            name,
            phone,
            address,
        } => handle_create(store.as_mut(), name, phone, address),
        Commands::Delete { name } => store.delete(&name),
        Commands::Update {
            record_name,
            name,
            phone,
            address,
        } => handle_update(store.as_mut(), &record_name, name, phone, address),
    }
}

fn init_logging(verbose: bool) {
    let env = env_logger::Env::default().default_filter_or(if verbose { "debug" } else { "info" });
    let mut builder = env_logger::Builder::from_env(env);
    if !verbose {
        builder.format_timestamp(None);
    }
    builder.init();
}

fn handle_get(store: &dyn DataStore, name: &str, format: OutputFormat) -> Result<()> {
    let record = store.get(name)?;
    print_result(&record, format)
}

fn handle_read(
    store: &dyn DataStore,
    name: Option<String>,
    phone: Option<String>,
    address: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let mut filters = Filters::new();
    if let Some(pattern) = name {
        filters.insert("name".to_string(), pattern);
    }
    if let Some(pattern) = phone {
        filters.insert("phone".to_string(), pattern);
    }
    if let Some(pattern) = address {
        filters.insert("address".to_string(), pattern);
    }

    let records = store.read(&filters)?;
    print_result(&records, format)
}

fn handle_create(
    store: &mut dyn DataStore,
    name: String,
    phone: String,
    address: String,
) -> Result<()> {
    let fields = Fields::from([
        ("name".to_string(), name),
        ("phone".to_string(), phone),
        ("address".to_string(), address),
    ]);
    store.create(&fields)
}

fn handle_update(
    store: &mut dyn DataStore,
    record_name: &str,
    name: Option<String>,
    phone: Option<String>,
    address: Option<String>,
) -> Result<()> {
    // only supplied flags become patch keys; absent keys keep their values
    let mut fields = Fields::new();
    if let Some(value) = name {
        fields.insert("name".to_string(), value);
    }
    if let Some(value) = phone {
        fields.insert("phone".to_string(), value);
    }
    if let Some(value) = address {
        fields.insert("address".to_string(), value);
    }

    store.update(record_name, &fields)
}

fn print_result<T: Serialize>(value: &T, format: OutputFormat) -> Result<()> {
    let output = match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
    };
    println!("{}", output.trim_end());
    Ok(())
}
