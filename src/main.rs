use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lightbnb_store::{
    application::{Application, ApplicationBuilder},
    dto::{PastReservationsRequest, PropertySearchFilter, SearchPropertiesRequest},
    entities::{NewProperty, NewUser},
    infrastructure::persistence::PropertyQuery,
    value_objects::UserId,
    Config,
};

#[derive(Parser)]
#[command(name = "lightbnb", about = "Run LightBnB store operations from the shell")]
struct Cli {
    /// Overrides DATABASE_URL and the config file
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// TOML config file; environment variables are used when absent
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the search SQL and bind parameters without running them
    Explain(SearchArgs),
    #[command(flatten)]
    Store(StoreCommand),
}

/// Commands that run against the database
#[derive(Subcommand)]
enum StoreCommand {
    /// Look up a user by email; prints null when there is none
    UserByEmail { email: String },
    /// Look up a user by id; prints null when there is none
    UserById { id: i32 },
    /// Register a user
    CreateUser {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Filtered property search
    Search(SearchArgs),
    /// Create a property from a JSON file (cost_per_night in dollars)
    CreateProperty { file: PathBuf },
    /// A guest's finished reservations
    PastReservations {
        guest_id: i32,
        #[arg(long)]
        limit: Option<i64>,
    },
    /// Check the database is reachable
    Health,
}

#[derive(Args)]
struct SearchArgs {
    #[arg(long)]
    city: Option<String>,
    #[arg(long)]
    owner_id: Option<i32>,
    /// Dollars
    #[arg(long)]
    min_price: Option<f64>,
    /// Dollars
    #[arg(long)]
    max_price: Option<f64>,
    #[arg(long)]
    min_rating: Option<f64>,
    #[arg(long)]
    limit: Option<i64>,
}

impl SearchArgs {
    fn into_request(self) -> SearchPropertiesRequest {
        SearchPropertiesRequest {
            filter: PropertySearchFilter {
                city: self.city,
                owner_id: self.owner_id,
                minimum_price_per_night: self.min_price,
                maximum_price_per_night: self.max_price,
                minimum_rating: self.min_rating,
            },
            limit: self.limit,
        }
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path).map_err(anyhow::Error::msg)?,
        None => Config::from_env(),
    };
    if let Some(url) = &cli.database_url {
        config.database_url = url.clone();
    }
    config.validate().map_err(anyhow::Error::msg)?;
    Ok(config)
}

fn render_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", render_json(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let config = load_config(&cli)?;
    let default_limit = config.default_limit;

    match cli.command {
        Command::Explain(args) => explain(args, default_limit),
        Command::Store(command) => {
            let app = ApplicationBuilder::new(config)
                .with_database()
                .await?
                .build()?;
            info!("Connected");

            let result = run(&app, command).await;
            app.shutdown().await;
            result
        }
    }
}

fn explain(args: SearchArgs, default_limit: i64) -> anyhow::Result<()> {
    let request = args.into_request();
    let limit = request.limit.unwrap_or(default_limit);
    let query = PropertyQuery::build(&request.filter, limit)?;
    print_json(&query)
}

async fn run(app: &Application, command: StoreCommand) -> anyhow::Result<()> {
    match command {
        StoreCommand::UserByEmail { email } => print_json(&app.get_user.by_email(&email).await?),
        StoreCommand::UserById { id } => print_json(&app.get_user.by_id(UserId::new(id)).await?),
        StoreCommand::CreateUser {
            name,
            email,
            password,
        } => {
            let user = app
                .create_user
                .execute(NewUser::new(name, email, password))
                .await?;
            print_json(&user)
        }
        StoreCommand::Search(args) => {
            let response = app.search_properties.execute(args.into_request()).await?;
            print_json(&response)
        }
        StoreCommand::CreateProperty { file } => {
            let contents = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let property: NewProperty = serde_json::from_str(&contents)
                .with_context(|| format!("Invalid property JSON in {}", file.display()))?;
            let created = app.create_property.execute(property).await?;
            print_json(&created)
        }
        StoreCommand::PastReservations { guest_id, limit } => {
            let response = app
                .past_reservations
                .execute(PastReservationsRequest { guest_id, limit })
                .await?;
            print_json(&response)
        }
        StoreCommand::Health => {
            app.database.health_check().await?;
            println!("ok");
            Ok(())
        }
    }
}
