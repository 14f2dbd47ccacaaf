//! Init command implementation.
//!
//! Writes a starter `identicon.yaml` manifest.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::error::{IdenticonError, Result};
use crate::manifest::{Manifest, MANIFEST_FILENAME};
use crate::output::{display_path, Printer};

/// Create a starter identicon.yaml manifest
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to create the manifest in
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite an existing identicon.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(IdenticonError::Build {
            message: format!("{} already exists", MANIFEST_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    let manifest = Manifest {
        output: PathBuf::from("avatars"),
        inputs: vec!["identicon".to_string()],
        force: false,
    };

    fs::write(&manifest_path, manifest.to_yaml()?).map_err(|e| IdenticonError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    printer.info("Created", &display_path(&manifest_path));
    Ok(())
}
