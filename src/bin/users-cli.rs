use clap::{Parser, Subcommand};
use serde::Serialize;
use users_sdk::{NewUser, UserPatch, UsersClient};

#[derive(Parser)]
#[command(name = "users-cli")]
#[command(about = "Command-line client for the users API", long_about = None)]
struct Cli {
    #[arg(short, long, env = "USERS_API_URL", default_value = "http://localhost:3000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show service name and version
    Info,
    /// Check service health
    Health,
    /// List all users
    List,
    /// Show one user
    Get { id: u64 },
    /// Create a user
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },
    /// Change a user's name and/or email
    Update {
        id: u64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
    /// Delete a user
    Delete { id: u64 },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = UsersClient::new(&cli.url);

    match cli.command {
        Commands::Info => print_json(&client.info().await?)?,
        Commands::Health => print_json(&client.health().await?)?,
        Commands::List => print_json(&client.list_users().await?)?,
        Commands::Get { id } => print_json(&client.get_user(id).await?)?,
        Commands::Create { name, email } => {
            print_json(&client.create_user(&NewUser { name, email }).await?)?
        }
        Commands::Update { id, name, email } => {
            print_json(&client.update_user(id, &UserPatch { name, email }).await?)?
        }
        Commands::Delete { id } => {
            client.delete_user(id).await?;
            println!("Deleted user {id}");
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
