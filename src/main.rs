use std::io::BufRead;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pwd_rules::{StrengthResult, evaluate_password_strength, generate_password, tips};
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Score passwords against four simple rules and generate random ones.
#[derive(Parser)]
#[command(name = "pwd-rules", version, about)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a password (reads one line from stdin when omitted)
    Evaluate {
        password: Option<String>,

        /// Number of random tips to print
        #[arg(long, default_value = "2")]
        tips: usize,
    },

    /// Generate a random password
    Generate {
        /// Password length (default: PWD_GENERATE_LENGTH or 12)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        length: Option<u32>,

        /// Also score the generated password
        #[arg(long)]
        evaluate: bool,
    },
}

fn init_logging(debug_flag: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if debug_flag {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn read_password_from_stdin() -> Result<SecretString> {
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read password from stdin")?;
    let trimmed = line.trim_end_matches(['\n', '\r']).to_string();
    Ok(SecretString::from(trimmed))
}

fn print_evaluation(evaluation: &StrengthResult) {
    println!("Strength: {}", evaluation.score);
    println!("{}", evaluation.tier);
    for reason in &evaluation.reasons {
        println!("  - {reason}");
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    match cli.command {
        Commands::Evaluate { password, tips: tip_count } => {
            let password = match password {
                Some(p) => SecretString::from(p),
                None => read_password_from_stdin()?,
            };
            let evaluation = evaluate_password_strength(&password);
            debug!(score = evaluation.score.value(), "Evaluated password");
            print_evaluation(&evaluation);

            let picked = tips::sample(&mut rand::thread_rng(), tip_count);
            if !picked.is_empty() {
                println!("Tips:");
                for tip in picked {
                    println!("  - {tip}");
                }
            }
        }

        Commands::Generate { length, evaluate } => {
            let length = match length {
                Some(n) => usize::try_from(n).context("Length does not fit in usize")?,
                None => pwd_rules::default_length()?,
            };
            let password = generate_password(length)?;
            println!("{}", password.expose_secret());

            if evaluate {
                print_evaluation(&evaluate_password_strength(&password));
            }
        }
    }

    Ok(())
}
