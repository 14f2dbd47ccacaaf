//! Generate command implementation.
//!
//! Renders each input string and writes `<output>/<name>.png`.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::error::{IdenticonError, Result};
use crate::identicon::Identicon;
use crate::manifest::{Manifest, MANIFEST_FILENAME};
use crate::output::{display_path, plural, Printer};

/// Render identicons to PNG files
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Strings to render (reads the manifest when omitted)
    pub inputs: Vec<String>,

    /// Output directory
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Overwrite existing files
    #[arg(long)]
    pub force: bool,

    /// Manifest to read inputs from
    #[arg(long)]
    pub manifest: Option<PathBuf>,
}

pub fn run(args: GenerateArgs, printer: &Printer) -> Result<()> {
    let plan = resolve(args)?;
    let written = generate_all(&plan, printer)?;

    printer.status(
        "Finished",
        &format!(
            "{} in {}",
            plural(written.len(), "identicon", "identicons"),
            display_path(&plan.output)
        ),
    );
    Ok(())
}

/// What to render and where, after merging flags with the manifest.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub inputs: Vec<String>,
    pub output: PathBuf,
    pub force: bool,
}

/// Merge command-line flags with the manifest. Flags win.
fn resolve(args: GenerateArgs) -> Result<Plan> {
    let manifest = if !args.inputs.is_empty() && args.manifest.is_none() {
        Manifest::default()
    } else {
        let path = args
            .manifest
            .clone()
            .unwrap_or_else(|| PathBuf::from(MANIFEST_FILENAME));
        if !path.exists() {
            return Err(IdenticonError::Build {
                message: "No inputs given".to_string(),
                help: Some(format!(
                    "Pass strings to render, or create {} with `identicon init`",
                    MANIFEST_FILENAME
                )),
            });
        }
        Manifest::load(&path)?
    };

    let inputs = if args.inputs.is_empty() {
        manifest.inputs
    } else {
        args.inputs
    };

    Ok(Plan {
        inputs,
        output: args.output.unwrap_or(manifest.output),
        force: args.force || manifest.force,
    })
}

/// Render every input in the plan. Returns the paths written.
pub fn generate_all(plan: &Plan, printer: &Printer) -> Result<Vec<PathBuf>> {
    if !plan.output.exists() {
        fs::create_dir_all(&plan.output).map_err(|e| IdenticonError::Io {
            path: plan.output.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    let targets = plan_targets(plan, printer);
    check_existing(&targets, plan.force)?;

    let mut written = Vec::with_capacity(targets.len());
    for (input, path) in targets {
        written.push(Identicon::new(input).save(&path)?);
        log::info!("rendered {:?} to {}", input, path.display());
        printer.status("Wrote", &printer.cyan(&display_path(&path)));
    }

    Ok(written)
}

/// Pair each input with its output path, skipping inputs whose file name
/// was already taken earlier in the batch.
fn plan_targets<'a>(plan: &'a Plan, printer: &Printer) -> Vec<(&'a str, PathBuf)> {
    let mut seen = HashSet::new();
    let mut targets = Vec::new();

    for input in &plan.inputs {
        let file_name = output_file_name(input);
        if !seen.insert(file_name.clone()) {
            printer.warning("Skipping", &format!("{:?} (duplicate of {})", input, file_name));
            continue;
        }
        targets.push((input.as_str(), plan.output.join(file_name)));
    }

    targets
}

/// Refuse the whole batch if any target exists, before anything is written.
fn check_existing(targets: &[(&str, PathBuf)], force: bool) -> Result<()> {
    if force {
        return Ok(());
    }

    let existing: Vec<String> = targets
        .iter()
        .filter(|(_, path)| path.exists())
        .map(|(_, path)| path.display().to_string())
        .collect();

    if existing.is_empty() {
        return Ok(());
    }

    Err(IdenticonError::Build {
        message: format!("{} already exists", existing.join(", ")),
        help: Some("Use --force to overwrite".to_string()),
    })
}

/// File name for an input: unsafe characters become `_`.
pub fn output_file_name(input: &str) -> String {
    let mut stem: String = input
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | '@') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if stem.is_empty() {
        stem.push_str("_empty");
    } else if stem.starts_with('.') {
        stem.insert(0, '_');
    }

    format!("{}.png", stem)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use tempfile::tempdir;

    fn plan(dir: &Path, inputs: &[&str], force: bool) -> Plan {
        Plan {
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            output: dir.to_path_buf(),
            force,
        }
    }

    #[test]
    fn test_output_file_name() {
        assert_eq!(output_file_name("identicon"), "identicon.png");
        assert_eq!(output_file_name("alice@example.com"), "alice@example.com.png");
        assert_eq!(output_file_name("../etc/passwd"), "_.._etc_passwd.png");
        assert_eq!(output_file_name("a b/c"), "a_b_c.png");
        assert_eq!(output_file_name(""), "_empty.png");
    }

    #[test]
    fn test_generate_writes_png() {
        let dir = tempdir().unwrap();
        let written =
            generate_all(&plan(dir.path(), &["identicon"], false), &Printer::new()).unwrap();

        assert_eq!(written, vec![dir.path().join("identicon.png")]);
        let img = image::open(&written[0]).unwrap().to_rgba8();
        assert_eq!(img.width(), 250);
        assert_eq!(img.get_pixel(2, 52).0, [173, 43, 65, 255]);
    }

    #[test]
    fn test_generate_creates_output_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("avatars").join("users");

        generate_all(&plan(&nested, &["bob"], false), &Printer::new()).unwrap();
        assert!(nested.join("bob.png").exists());
    }

    #[test]
    fn test_generate_refuses_overwrite() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("bob.png"), b"keep").unwrap();

        let result = generate_all(&plan(dir.path(), &["bob"], false), &Printer::new());
        assert!(matches!(result, Err(IdenticonError::Build { .. })));
        assert_eq!(fs::read(dir.path().join("bob.png")).unwrap(), b"keep");
    }

    #[test]
    fn test_generate_force_overwrites() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("bob.png"), b"stale").unwrap();

        generate_all(&plan(dir.path(), &["bob"], true), &Printer::new()).unwrap();
        assert!(image::open(dir.path().join("bob.png")).is_ok());
    }

    #[test]
    fn test_generate_skips_duplicate_names() {
        let dir = tempdir().unwrap();
        let written =
            generate_all(&plan(dir.path(), &["a b", "a/b"], false), &Printer::new()).unwrap();
        assert_eq!(written.len(), 1);
    }

    #[test]
    fn test_resolve_uses_manifest() {
        let dir = tempdir().unwrap();
        let manifest_path = dir.path().join(MANIFEST_FILENAME);
        fs::write(&manifest_path, "output: out\ninputs:\n  - carol\n").unwrap();

        let resolved = resolve(GenerateArgs {
            inputs: vec![],
            output: None,
            force: false,
            manifest: Some(manifest_path),
        })
        .unwrap();

        assert_eq!(resolved.inputs, vec!["carol"]);
        assert_eq!(resolved.output, PathBuf::from("out"));
        assert!(!resolved.force);
    }

    #[test]
    fn test_resolve_flags_override_manifest() {
        let dir = tempdir().unwrap();
        let manifest_path = dir.path().join(MANIFEST_FILENAME);
        fs::write(&manifest_path, "output: out\ninputs:\n  - carol\n").unwrap();

        let resolved = resolve(GenerateArgs {
            inputs: vec!["dave".to_string()],
            output: Some(dir.path().to_path_buf()),
            force: true,
            manifest: Some(manifest_path),
        })
        .unwrap();

        assert_eq!(resolved.inputs, vec!["dave"]);
        assert_eq!(resolved.output, dir.path());
        assert!(resolved.force);
    }

    #[test]
    fn test_resolve_missing_manifest() {
        let dir = tempdir().unwrap();
        let result = resolve(GenerateArgs {
            inputs: vec![],
            output: None,
            force: false,
            manifest: Some(dir.path().join(MANIFEST_FILENAME)),
        });
        assert!(matches!(result, Err(IdenticonError::Build { .. })));
    }

    #[test]
    fn test_generate_checks_whole_batch_before_writing() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("bob.png"), b"keep").unwrap();

        let result = generate_all(
            &plan(dir.path(), &["alice", "bob", "carol"], false),
            &Printer::new(),
        );

        match result {
            Err(IdenticonError::Build { message, .. }) => assert!(message.contains("bob.png")),
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(!dir.path().join("alice.png").exists());
        assert!(!dir.path().join("carol.png").exists());
        assert_eq!(fs::read(dir.path().join("bob.png")).unwrap(), b"keep");
    }
}
