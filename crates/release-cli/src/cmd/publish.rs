use super::{load_config, ConfigOverrides};
use crate::output::print_json;
use anyhow::Context;
use release_core::env::ReleaseEnv;
use release_core::paths;
use release_core::publish::{self, PublishOptions};
use std::path::Path;

pub struct PublishArgs {
    pub tag: Option<String>,
    pub token: Option<String>,
    pub registry: Option<String>,
    pub npm: Option<String>,
    pub dry_run: bool,
    pub npm_args: Vec<String>,
    pub overrides: ConfigOverrides,
}

pub fn run(root: &Path, args: PublishArgs, json: bool) -> anyhow::Result<()> {
    let env = ReleaseEnv::resolve(args.tag, args.token)?;
    let mut config = load_config(root, args.overrides)?;
    if let Some(registry) = args.registry {
        config.registry = registry;
    }
    if let Some(npm) = args.npm {
        config.npm_bin = npm;
    }
    let home = paths::home_dir().context("cannot locate ~/.npmrc")?;

    let opts = PublishOptions {
        dry_run: args.dry_run,
        extra_args: args.npm_args,
    };
    let report = publish::publish(root, &config, &env, &home, &opts)?;

    if json {
        return print_json(&report);
    }
    print!("{}", report.stdout);
    let suffix = if report.dry_run { " (dry run)" } else { "" };
    println!("Published {}{suffix}", report.manifest_version);
    Ok(())
}
