use anyhow::Result;
use chef_core::{Config, OpenRouterClient, Role, Transcript, chef};
use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};
use tracing::info;

#[derive(Parser)]
#[command(name = "chef")]
#[command(about = "AI Master Chef - recipe chat CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Get a recipe for a single dish and exit
    Recipe {
        /// Dish name, e.g. "Jollof Rice"
        dish: String,

        /// Override the chat model
        #[arg(short, long)]
        model: Option<String>,
    },

    /// Interactive recipe chat (/clear resets, /quit exits)
    Chat,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    // Load .env
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Missing credential is fatal here, unlike a failed turn
    let config = Config::from_env()?;

    match cli.command {
        Commands::Recipe { dish, model } => {
            recipe_command(&config, &dish, model).await;
        }
        Commands::Chat => {
            chat_command(&config).await?;
        }
    }

    Ok(())
}

async fn recipe_command(config: &Config, dish: &str, model: Option<String>) {
    let model = model.unwrap_or_else(|| config.model.clone());
    info!(model = %model, "Requesting recipe");

    let reply = chef::handle(dish, &config.openrouter_api_key, &model).await;
    println!("{reply}");
}

async fn chat_command(config: &Config) -> Result<()> {
    let client = OpenRouterClient::new(&config.openrouter_api_key, &config.model);
    let mut transcript = Transcript::new();

    print_turns(transcript.turns());

    let stdin = std::io::stdin();
    loop {
        print!("you> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let input = line.trim();

        match input {
            "" => continue,
            "/quit" => break,
            "/clear" => {
                transcript.clear();
                print_turns(transcript.turns());
                continue;
            }
            _ => {}
        }

        transcript.push_user(input);
        let reply = chef::handle_with(&client, input).await;

        // Only the new assistant turn needs printing; the user just typed theirs
        println!("chef> {}\n", reply);
        transcript.push_assistant(reply);
    }

    Ok(())
}

fn print_turns(turns: &[chef_core::Turn]) {
    for turn in turns {
        match turn.role {
            Role::User => println!("you> {}", turn.text),
            Role::Assistant => println!("chef> {}\n", turn.text),
        }
    }
}
