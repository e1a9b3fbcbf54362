mod output;
mod source;

use source::Source;

use anyhow::{Context, Result};
use clap::Parser;
use quarry::{descriptor::LeafNode, QueryDescriptor};
use std::path::{Path, PathBuf};

/// Parse and execute CLI commands from command-line arguments
pub async fn parse_and_run() -> Result<()> {
    run(Cli::parse()).await
}

/// Parse and execute CLI commands from an iterator of arguments
pub async fn parse_from<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    run(Cli::parse_from(args)).await
}

#[derive(Parser, Debug)]
#[command(name = "quarry")]
#[command(about = "Quarry CLI - validate and compile record queries")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    source: Source,

    /// JSON file holding engine settings
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser, Debug)]
enum Command {
    /// Print the schema catalog
    Catalog,

    /// Compile a query descriptor, optionally running it
    Compile(CompileCommand),

    /// Compile a single-column keyword search, optionally running it
    Search(SearchCommand),
}

#[derive(Parser, Debug)]
struct CompileCommand {
    /// Table to query
    #[arg(long)]
    table: String,

    /// Owner the query is scoped to
    #[arg(long)]
    owner: String,

    /// Descriptor as JSON, or `@path` to read it from a file
    descriptor: String,

    /// Threshold conditions as a JSON array of leaves
    #[arg(long)]
    threshold: Option<String>,

    /// Run the compiled query against the database
    #[arg(long)]
    execute: bool,
}

#[derive(Parser, Debug)]
struct SearchCommand {
    #[arg(long)]
    table: String,

    #[arg(long)]
    owner: String,

    #[arg(long)]
    column: String,

    #[arg(long)]
    keyword: String,

    #[arg(long, default_value_t = 1)]
    page: i64,

    /// Run the compiled query against the database
    #[arg(long)]
    execute: bool,
}

async fn run(cli: Cli) -> Result<()> {
    let config = source::config(cli.config.as_deref())?;
    let (engine, driver) = cli.source.engine(config).await?;

    let (query, execute) = match cli.command {
        Command::Catalog => {
            let catalog = engine.catalog()?;
            return output::print(&output::catalog(&catalog));
        }
        Command::Compile(cmd) => {
            let descriptor = QueryDescriptor::from_json(&read_arg(&cmd.descriptor)?)?;

            let query = match &cmd.threshold {
                Some(conditions) => {
                    let conditions: Vec<LeafNode> = serde_json::from_str(&read_arg(conditions)?)
                        .context("invalid threshold conditions")?;
                    engine.compile_threshold(&descriptor, &cmd.table, &cmd.owner, &conditions)?
                }
                None => engine.compile(&descriptor, &cmd.table, &cmd.owner)?,
            };

            (query, cmd.execute)
        }
        Command::Search(cmd) => {
            let query = engine.search(&cmd.table, &cmd.column, &cmd.keyword, cmd.page, &cmd.owner)?;
            (query, cmd.execute)
        }
    };

    if !execute {
        return output::print(&output::query(&query));
    }

    let Some(driver) = driver else {
        anyhow::bail!("--execute requires a database; pass --url");
    };

    let results = driver.search(&query).await?;
    output::print(&output::results(&results))
}

/// Reads an argument that is either inline text or `@path`.
fn read_arg(arg: &str) -> Result<String> {
    match arg.strip_prefix('@') {
        Some(path) => source::read(Path::new(path)),
        None => Ok(arg.to_string()),
    }
}
