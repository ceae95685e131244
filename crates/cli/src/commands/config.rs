// Path: crates/cli/src/commands/config.rs

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use hlink_types::config::ConsoleConfig;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct ConfigCmdArgs {
    #[clap(subcommand)]
    pub command: ConfigSubCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubCommands {
    /// Write a configuration file holding the defaults.
    New {
        #[clap(long, default_value = "hlink.toml")]
        out: PathBuf,
        /// Overwrite an existing file.
        #[clap(long)]
        force: bool,
    },
}

pub fn run(args: ConfigCmdArgs) -> Result<()> {
    match args.command {
        ConfigSubCommands::New { out, force } => {
            if out.exists() && !force {
                bail!("{} already exists (use --force to overwrite)", out.display());
            }
            if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            let text = ConsoleConfig::default().to_toml_string()?;
            fs::write(&out, text).with_context(|| format!("Failed to write {}", out.display()))?;
            println!("Wrote {}", out.display());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_cmd(out: PathBuf, force: bool) -> ConfigCmdArgs {
        ConfigCmdArgs {
            command: ConfigSubCommands::New { out, force },
        }
    }

    #[test]
    fn writes_loadable_defaults_and_refuses_to_clobber() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested").join("hlink.toml");

        run(new_cmd(out.clone(), false)).unwrap();
        let text = fs::read_to_string(&out).unwrap();
        assert_eq!(
            ConsoleConfig::from_toml_str(&text).unwrap(),
            ConsoleConfig::default()
        );

        assert!(run(new_cmd(out.clone(), false)).is_err());
        run(new_cmd(out, true)).unwrap();
    }
}
