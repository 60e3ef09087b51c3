use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use entity_store::config::Config;
use entity_store::logging::init_tracing;
use entity_store::store::{EntityContainer, EntityState, EntityStores, Refetch, Sort};
use entity_store::view::EditForm;

/// Console front-end for the Items, Treatement and Appointment resources.
#[derive(Debug, Parser)]
#[command(name = "entity-store", version)]
struct Cli {
    /// Config file to use instead of the platform default.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    entity: EntityCommand,
}

#[derive(Debug, Subcommand)]
enum EntityCommand {
    Items {
        #[command(subcommand)]
        action: Action,
    },
    Treatement {
        #[command(subcommand)]
        action: Action,
    },
    Appointment {
        #[command(subcommand)]
        action: Action,
    },
}

#[derive(Debug, Subcommand)]
enum Action {
    /// List all records.
    List {
        /// Sort criterion, e.g. `name,asc`.
        #[arg(long)]
        sort: Option<Sort>,
    },
    /// Show one record.
    Get { id: i32 },
    /// Create a record from `--set field=value` pairs.
    Create {
        #[arg(long = "set", value_name = "FIELD=VALUE")]
        set: Vec<String>,
    },
    /// Load a record, apply `--set` pairs and replace it.
    Update {
        id: i32,
        #[arg(long = "set", value_name = "FIELD=VALUE")]
        set: Vec<String>,
    },
    /// Send only the `--set` fields to a record.
    Patch {
        id: i32,
        #[arg(long = "set", value_name = "FIELD=VALUE")]
        set: Vec<String>,
    },
    /// Delete a record.
    Delete { id: i32 },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let stores = EntityStores::from_config(&config).context("Failed to set up entity stores")?;

    match cli.entity {
        EntityCommand::Items { action } => run(&stores.items, action).await,
        EntityCommand::Treatement { action } => run(&stores.treatement, action).await,
        EntityCommand::Appointment { action } => run(&stores.appointment, action).await,
    }
}

async fn run<E: EditForm>(container: &EntityContainer<E>, action: Action) -> Result<()> {
    match action {
        Action::List { sort } => {
            container.fetch_list(sort).await;
            let state = loaded(container)?;
            for entity in &state.entities {
                print_detail(entity);
                println!();
            }
        }
        Action::Get { id } => {
            container.fetch_one(id).await;
            print_detail(&loaded(container)?.entity);
        }
        Action::Create { set } => {
            container.reset();
            let mut entity = container.snapshot().entity;
            apply_all(&mut entity, &set)?;
            let refetch = container.create(entity).await;
            saved(container, refetch).await?;
        }
        Action::Update { id, set } => {
            container.fetch_one(id).await;
            let mut entity = loaded(container)?.entity;
            apply_all(&mut entity, &set)?;
            let refetch = container.update(entity).await;
            saved(container, refetch).await?;
        }
        Action::Patch { id, set } => {
            let mut entity = E::default();
            entity.apply_input("id", &id.to_string())?;
            apply_all(&mut entity, &set)?;
            let refetch = container.partial_update(entity).await;
            saved(container, refetch).await?;
        }
        Action::Delete { id } => {
            let refetch = container.delete(id).await;
            mutated(container)?;
            if let Some(refetch) = refetch {
                refetch.settled().await;
            }
            println!("Deleted {} {}", E::RESOURCE, id);
        }
    }
    Ok(())
}

fn apply_all<E: EditForm>(entity: &mut E, assignments: &[String]) -> Result<()> {
    for assignment in assignments {
        entity.apply_assignment(assignment)?;
    }
    Ok(())
}

/// Snapshot after a fetch, or the recorded error.
fn loaded<E: EditForm>(container: &EntityContainer<E>) -> Result<EntityState<E>> {
    let state = container.snapshot();
    if state.has_error() {
        bail!("{}", state.error_message.unwrap_or_default());
    }
    Ok(state)
}

/// Snapshot after a mutation, or the recorded error.
fn mutated<E: EditForm>(container: &EntityContainer<E>) -> Result<EntityState<E>> {
    let state = container.snapshot();
    if !state.update_success {
        let message = state.error_message.as_deref().unwrap_or("Request failed");
        bail!("{}", message);
    }
    Ok(state)
}

async fn saved<E: EditForm>(container: &EntityContainer<E>, refetch: Option<Refetch>) -> Result<()> {
    let state = mutated(container)?;
    print_detail(&state.entity);
    if let Some(refetch) = refetch {
        refetch.settled().await;
    }
    Ok(())
}

fn print_detail<E: EditForm>(entity: &E) {
    for (label, value) in entity.detail_rows() {
        println!("{:<12} {}", label, value);
    }
}
