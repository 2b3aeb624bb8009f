use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use roster::api::{ListRequest, RosterApi, RosterPaths};
use roster::config::RosterConfig;
use roster::error::{Result, RosterError};
use roster::listing::ViewMode;
use roster::store::fs::FileStore;
use roster::validation::Field;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod args;
mod print;
use args::{Cli, Commands, EmployeeFields};
use print::{print_employee, print_employees, print_messages, print_page_summary};

/// Overrides the platform data directory.
const HOME_ENV: &str = "ROSTER_HOME";

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "roster=debug" } else { "roster=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let mut api = init_api()?;

    match cli.command {
        Some(Commands::List { search, page, view }) => handle_list(&mut api, search, page, view),
        Some(Commands::Show { id }) => handle_show(&api, &id),
        Some(Commands::Add { fields }) => handle_add(&mut api, fields),
        Some(Commands::Edit { id, fields }) => handle_edit(&mut api, &id, fields),
        Some(Commands::Delete { id, yes }) => handle_delete(&mut api, &id, yes),
        Some(Commands::Phone { input }) => {
            println!("{}", api.format_phone(&input));
            Ok(())
        }
        Some(Commands::Lang { code }) => handle_lang(&mut api, code),
        Some(Commands::Seed { count, seed }) => {
            let result = api.seed(count, seed)?;
            print_messages(&result.messages);
            Ok(())
        }
        None => handle_list(&mut api, None, None, None),
    }
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    let dirs = ProjectDirs::from("com", "roster", "roster")
        .ok_or_else(|| RosterError::Api("Could not determine data directory".to_string()))?;
    Ok(dirs.data_dir().to_path_buf())
}

fn init_api() -> Result<RosterApi<FileStore>> {
    let data_dir = data_dir()?;
    tracing::debug!(dir = %data_dir.display(), "using data directory");
    let config = RosterConfig::load(&data_dir)?;
    let store = FileStore::new(data_dir.clone());
    Ok(RosterApi::new(store, RosterPaths::new(data_dir), &config))
}

fn handle_list(
    api: &mut RosterApi<FileStore>,
    search: Option<String>,
    page: Option<usize>,
    view: Option<String>,
) -> Result<()> {
    if let Some(view) = view {
        let mode: ViewMode = view.parse().map_err(RosterError::Api)?;
        api.list_state_mut().set_view_mode(mode);
    }

    let result = api.list_employees(ListRequest {
        query: search,
        page,
    })?;
    let view_mode = api.list_state().view_mode();
    print_employees(&result.listed_employees, view_mode, api.translator());
    if let Some(page) = &result.page {
        print_page_summary(page, api.translator());
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(api: &RosterApi<FileStore>, id: &str) -> Result<()> {
    let result = api.get_employee(id)?;
    for employee in &result.listed_employees {
        print_employee(employee, api.translator());
    }
    Ok(())
}

fn handle_add(api: &mut RosterApi<FileStore>, fields: EmployeeFields) -> Result<()> {
    let values = field_values(fields);
    let result = api
        .create_employee(&values)
        .inspect_err(|e| print_validation(api, e))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(api: &mut RosterApi<FileStore>, id: &str, fields: EmployeeFields) -> Result<()> {
    let values = field_values(fields);
    let result = api
        .update_employee(id, &values)
        .inspect_err(|e| print_validation(api, e))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(api: &mut RosterApi<FileStore>, id: &str, yes: bool) -> Result<()> {
    let dialog = api.request_delete(id)?;

    let result = if yes {
        api.resolve_delete(roster::dialog::DialogOutcome::Confirmed)?
    } else {
        println!("{}", dialog.title.bold());
        println!("{}", dialog.message);
        print!(
            "{} / {} [y/N] ",
            dialog.confirm_text.green(),
            dialog.cancel_text
        );
        io::stdout().flush()?;

        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        api.answer_delete(&answer)?
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_lang(api: &mut RosterApi<FileStore>, code: Option<String>) -> Result<()> {
    let result = api.set_language(code.as_deref())?;
    if let Some(config) = &result.config {
        println!("language = {}", config.language);
    }
    print_messages(&result.messages);
    Ok(())
}

/// Per-field messages for a rejected form, in the interface language.
fn print_validation(api: &RosterApi<FileStore>, error: &RosterError) {
    if let RosterError::Validation(errors) = error {
        for (field, field_error) in errors.iter() {
            eprintln!(
                "  {}: {}",
                api.translator().translate(field.name()).yellow(),
                api.translator().translate(field_error.message_key())
            );
        }
    }
}

fn field_values(fields: EmployeeFields) -> Vec<(Field, String)> {
    [
        (Field::FirstName, fields.first_name),
        (Field::LastName, fields.last_name),
        (Field::DateOfEmployment, fields.employed),
        (Field::DateOfBirth, fields.born),
        (Field::Phone, fields.phone),
        (Field::Email, fields.email),
        (Field::Department, fields.department),
        (Field::Position, fields.position),
    ]
    .into_iter()
    .filter_map(|(field, value)| value.map(|v| (field, v)))
    .collect()
}
