use super::{load_config, ConfigOverrides};
use crate::output::print_json;
use release_core::{env, publish};
use std::path::Path;

pub fn run(
    root: &Path,
    tag: Option<String>,
    overrides: ConfigOverrides,
    json: bool,
) -> anyhow::Result<()> {
    let tag = env::require_tag(tag)?;
    let config = load_config(root, overrides)?;
    let check = publish::verify_version(root, &config, &tag)?;

    if json {
        return print_json(&check);
    }
    println!(
        "Tag {} matches {} version",
        check.tag,
        config.manifest.display()
    );
    Ok(())
}
