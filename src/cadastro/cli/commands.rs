use super::args::{Cli, Commands, DetailArgs};
use super::print::{print_config, print_messages, print_people, print_person_details};
use cadastro::api::{CadastroApi, ConfigAction, MessageLevel, PersonChanges};
use cadastro::config::CadastroConfig;
use cadastro::error::{CadastroError, Result};
use cadastro::logging::{init_logging, Verbosity};
use cadastro::model::{Person, PersonFields};
use cadastro::store::fs::FileStore;
use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::debug;

struct AppContext {
    api: CadastroApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(Verbosity::from_flag(cli.verbose));

    let mut ctx = init_context(&cli)?;

    match cli.command {
        None => handle_list(&ctx, false),
        Some(Commands::Init) => handle_init(&mut ctx),
        Some(Commands::List { json }) => handle_list(&ctx, json),
        Some(Commands::View { ids, json }) => handle_view(&ctx, &ids, json),
        Some(Commands::Add {
            first_name,
            last_name,
            details,
        }) => handle_add(&mut ctx, first_name, last_name, details),
        Some(Commands::Edit {
            id,
            first_name,
            last_name,
            details,
        }) => {
            let changes = PersonChanges {
                first_name,
                last_name,
                ..changes_from(details)
            };
            handle_edit(&mut ctx, &id, &changes)
        }
        Some(Commands::Delete { ids }) => handle_delete(&mut ctx, &ids),
        Some(Commands::NextId) => handle_next_id(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = match &cli.config_dir {
        Some(dir) => dir.clone(),
        None => default_config_dir()?,
    };

    // --file wins over the configured data file
    let data_file = match &cli.file {
        Some(path) => path.clone(),
        None => {
            let cwd = std::env::current_dir()?;
            CadastroConfig::load(&config_dir)?.resolve_data_file(&cwd)
        }
    };
    debug!(
        data_file = %data_file.display(),
        config_dir = %config_dir.display(),
        "resolved paths"
    );

    let store = FileStore::new(data_file);
    Ok(AppContext {
        api: CadastroApi::new(store, config_dir),
    })
}

fn default_config_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "cadastro", "cadastro")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| CadastroError::Api("Could not determine a config directory".to_string()))
}

fn fields_from(first_name: String, last_name: String, details: DetailArgs) -> PersonFields {
    PersonFields {
        street: details.street.unwrap_or_default(),
        number: details.number.unwrap_or_default(),
        neighborhood: details.neighborhood.unwrap_or_default(),
        city: details.city.unwrap_or_default(),
        state: details.state.unwrap_or_default(),
        country: details.country.unwrap_or_default(),
        phone: details.phone.unwrap_or_default(),
        email: details.email.unwrap_or_default(),
        ..PersonFields::new(first_name, last_name)
    }
}

fn changes_from(details: DetailArgs) -> PersonChanges {
    PersonChanges {
        street: details.street,
        number: details.number,
        neighborhood: details.neighborhood,
        city: details.city,
        state: details.state,
        country: details.country,
        phone: details.phone,
        email: details.email,
        ..PersonChanges::default()
    }
}

fn handle_init(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, json: bool) -> Result<()> {
    let result = ctx.api.list_people()?;
    if json {
        return print_json(&result.listed_people);
    }
    print_people(&result.listed_people);
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, ids: &[String], json: bool) -> Result<()> {
    let result = ctx.api.view_people(ids)?;
    if json {
        print_json(&result.listed_people)?;
    } else {
        print_person_details(&result.listed_people);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(
    ctx: &mut AppContext,
    first_name: String,
    last_name: String,
    details: DetailArgs,
) -> Result<()> {
    let fields = fields_from(first_name, last_name, details);
    let result = ctx.api.create_person(fields)?;
    print_messages(&result.messages);
    print_people(&result.listed_people);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, id: &str, changes: &PersonChanges) -> Result<()> {
    let result = ctx.api.edit_person(id, changes)?;
    print_messages(&result.messages);
    print_people(&result.listed_people);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, ids: &[String]) -> Result<()> {
    let result = ctx.api.delete_people(ids)?;
    print_messages(&result.messages);
    print_people(&result.listed_people);
    Ok(())
}

fn handle_next_id(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.next_id()?;
    if let Some(id) = result.next_id {
        println!("{}", id);
    }
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let Some(error) = result
        .messages
        .iter()
        .find(|m| m.level == MessageLevel::Error)
    {
        return Err(CadastroError::Api(error.content.clone()));
    }
    print_messages(&result.messages);
    if let (Some(config), true) = (&result.config, result.messages.is_empty()) {
        print_config(config);
    }
    Ok(())
}

fn print_json(people: &[Person]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(people)?);
    Ok(())
}
