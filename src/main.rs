use clap::{Parser, Subcommand};
use dotenv::dotenv;
use kinetic_branch::config::EvaluatorConfig;
use kinetic_branch::loader::DocumentLoader;
use kinetic_branch::ConditionEvaluator;

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to an evaluator config file (YAML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate a condition and print true or false
    Eval {
        /// Path to the condition file
        #[arg(long)]
        condition: PathBuf,

        /// Path to the variables file
        #[arg(long)]
        variables: Option<PathBuf>,
    },
    /// Route through a condition block and print the decision as JSON
    Route {
        /// Path to the condition block file
        #[arg(long)]
        block: PathBuf,

        /// Path to the variables file
        #[arg(long)]
        variables: Option<PathBuf>,
    },
    /// Serve evaluation over HTTP
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
}

fn load_config(
    path: Option<&PathBuf>,
) -> Result<EvaluatorConfig, Box<dyn std::error::Error + Send + Sync>> {
    let config = match path {
        Some(path) => {
            log::info!("Loading config from {}", path.display());
            EvaluatorConfig::from_file(path)?.with_env_overrides()?
        }
        None => EvaluatorConfig::from_env()?,
    };
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenv().ok();
    env_logger::init();

    let args = Args::parse();
    let config = load_config(args.config.as_ref())?;
    let loader = DocumentLoader::new();

    match args.command {
        Commands::Eval {
            condition,
            variables,
        } => {
            let condition = loader.load_condition(&condition)?;
            let variables = match variables {
                Some(path) => loader.load_variables(&path)?,
                None => Vec::new(),
            };

            let evaluator = ConditionEvaluator::new(config);
            println!("{}", evaluator.evaluate(&condition, &variables));
        }
        Commands::Route { block, variables } => {
            let block = loader.load_block(&block)?;
            let variables = match variables {
                Some(path) => loader.load_variables(&path)?,
                None => Vec::new(),
            };

            let evaluator = ConditionEvaluator::new(config);
            let decision = block.route(&evaluator, &variables);
            println!("{}", decision.to_json()?);
        }
        Commands::Serve { port } => {
            let subscriber = tracing_subscriber::fmt().with_target(false).finish();
            if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
                log::warn!("Request tracing disabled: {}", e);
            }

            kinetic_branch::server::serve(port, config).await?;
        }
    }

    Ok(())
}
