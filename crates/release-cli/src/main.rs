mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::{publish::PublishArgs, ConfigOverrides};
use release_core::ReleaseError;
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser)]
#[command(
    name = "npm-release",
    about = "Verify a release tag against package.json and publish it to the npm registry",
    version,
    propagate_version = true
)]
struct Cli {
    /// Package root (default: nearest directory with a package.json)
    #[arg(long, global = true, env = "NPM_RELEASE_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the tag against package.json, write ~/.npmrc, run `npm publish`, remove ~/.npmrc
    Publish {
        /// Release tag
        #[arg(long, env = "TRAVIS_TAG")]
        tag: Option<String>,

        /// Registry auth token
        #[arg(long, env = "NPM_AUTH_TOKEN", hide_env_values = true)]
        token: Option<String>,

        /// Registry URL written to ~/.npmrc
        #[arg(long, env = "NPM_RELEASE_REGISTRY")]
        registry: Option<String>,

        /// npm executable
        #[arg(long, env = "NPM_RELEASE_NPM")]
        npm: Option<String>,

        /// Pass --dry-run to npm publish
        #[arg(long)]
        dry_run: bool,

        #[command(flatten)]
        overrides: ConfigOverrides,

        /// Extra arguments for npm publish (after --)
        #[arg(last = true)]
        npm_args: Vec<String>,
    },

    /// Only check that the tag matches the package.json version
    Check {
        /// Release tag
        #[arg(long, env = "TRAVIS_TAG")]
        tag: Option<String>,

        #[command(flatten)]
        overrides: ConfigOverrides,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let root = root::resolve_root(cli.root.as_deref());
    tracing::debug!(root = %root.display(), "resolved package root");

    let result = match cli.command {
        Commands::Publish {
            tag,
            token,
            registry,
            npm,
            dry_run,
            overrides,
            npm_args,
        } => cmd::publish::run(
            &root,
            PublishArgs {
                tag,
                token,
                registry,
                npm,
                dry_run,
                npm_args,
                overrides,
            },
            cli.json,
        ),
        Commands::Check { tag, overrides } => cmd::check::run(&root, tag, overrides, cli.json),
    };

    if let Err(e) = result {
        // A failed subprocess surfaces its own output instead of our message.
        if let Some(ReleaseError::CommandFailed { stdout, stderr, .. }) =
            e.downcast_ref::<ReleaseError>()
        {
            println!("Process has been failed.\n{}", stdout.trim_end());
            if !stderr.trim().is_empty() {
                eprintln!("{}", stderr.trim_end());
            }
            std::process::exit(1);
        }
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
