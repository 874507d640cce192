use anyhow::Result;
use aws_credentials_tools::commands::{self, check::Scope, new_key::NewKeyOptions};
use aws_credentials_tools::iam_api::AwsIamClient;
use aws_credentials_tools::keys::report::{ReportSettings, DEFAULT_MAX_AGE_DAYS};
use aws_credentials_tools::keys::table::OutputFormat;
use aws_credentials_tools::utils::credentials_file::{credentials_path, profile_or_default};
use aws_credentials_tools::utils::logging;
use aws_credentials_tools::BIN_NAME;
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use std::io;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "aws-credentials")]
#[command(about = "Manage AWS IAM access keys", long_about = None)]
#[command(version)]
struct Cli {
    /// Maximum access key age in days before a key is flagged as stale
    #[arg(
        short,
        long,
        global = true,
        default_value_t = DEFAULT_MAX_AGE_DAYS,
        value_parser = clap::value_parser!(i64).range(0..)
    )]
    max_age: i64,

    /// AWS profile for the API session (default: $AWS_PROFILE)
    #[arg(long, global = true)]
    profile: Option<String>,

    /// Increase diagnostic logging (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show access keys of the current identity or a given user (default)
    List {
        /// User whose keys to list (default: the current identity)
        #[arg(short, long)]
        username: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Show access keys of every user in the account
    All {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Print only stale keys and exit with status 1 if there are any
    Check {
        /// Check every user in the account
        #[arg(long, conflicts_with = "username")]
        all: bool,

        /// User whose keys to check (default: the current identity)
        #[arg(short, long)]
        username: Option<String>,
    },

    /// Create a new access key
    New {
        /// Append the new key to the shared credentials file as [<profile>.new]
        #[arg(short, long)]
        write: bool,

        /// User to create the key for (default: the current identity)
        #[arg(short, long)]
        username: Option<String>,
    },

    /// Delete an access key
    Delete {
        /// Access key id
        access_key_id: String,

        /// Owner of the key (default: the current identity)
        #[arg(short, long)]
        username: Option<String>,
    },

    /// Deactivate an access key
    Disable {
        /// Access key id
        access_key_id: String,

        /// Owner of the key (default: the current identity)
        #[arg(short, long)]
        username: Option<String>,
    },

    /// Activate an access key
    Enable {
        /// Access key id
        access_key_id: String,

        /// Owner of the key (default: the current identity)
        #[arg(short, long)]
        username: Option<String>,
    },

    /// Generate shell completion scripts
    GenerateCompletion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("⚠️  {:#}", e);
    }

    match run(cli).await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<u8> {
    let command = cli.command.unwrap_or(Commands::List {
        username: None,
        format: OutputFormat::Table,
    });

    let settings = ReportSettings::new(cli.max_age);
    let profile = cli.profile;
    let connect = || AwsIamClient::from_options(profile.as_deref());
    let mut out = io::stdout().lock();

    match command {
        Commands::List { username, format } => {
            let client = connect().await;
            commands::list::run(&client, username.as_deref(), &settings, format, &mut out)
                .await?;
        }
        Commands::All { format } => {
            let client = connect().await;
            commands::list::run_all(&client, &settings, format, &mut out).await?;
        }
        Commands::Check { all, username } => {
            let client = connect().await;
            let scope = if all {
                Scope::AllUsers
            } else {
                Scope::User(username.as_deref())
            };
            return commands::check::run(&client, scope, &settings, &mut out).await;
        }
        Commands::New { write, username } => {
            let client = connect().await;
            let path = if write { Some(credentials_path()?) } else { None };
            let profile = profile_or_default(client.profile().map(|p| p.to_string()));
            let options = NewKeyOptions {
                user_name: username.as_deref(),
                credentials_file: path.as_deref(),
                profile: &profile,
            };
            commands::new_key::run(&client, options, &mut out).await?;
        }
        Commands::Delete {
            access_key_id,
            username,
        } => {
            let client = connect().await;
            commands::lifecycle::delete(&client, &access_key_id, username.as_deref(), &mut out)
                .await?;
        }
        Commands::Disable {
            access_key_id,
            username,
        } => {
            let client = connect().await;
            commands::lifecycle::disable(&client, &access_key_id, username.as_deref(), &mut out)
                .await?;
        }
        Commands::Enable {
            access_key_id,
            username,
        } => {
            let client = connect().await;
            commands::lifecycle::enable(&client, &access_key_id, username.as_deref(), &mut out)
                .await?;
        }
        Commands::GenerateCompletion { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, BIN_NAME, &mut out);
        }
    }

    Ok(0)
}
