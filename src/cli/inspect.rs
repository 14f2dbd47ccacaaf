//! Inspect command implementation.
//!
//! Prints the intermediate values behind an identicon to stdout.

use std::fmt::Write as _;

use clap::Args;
use serde::Serialize;

use crate::error::{IdenticonError, Result};
use crate::identicon::Identicon;
use crate::types::PixelRegion;

/// Show the digest, colour and grid behind an identicon
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// String to inspect
    pub input: String,

    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: InspectArgs) -> Result<()> {
    let icon = Identicon::new(&args.input);

    if args.json {
        println!("{}", to_json(&icon)?);
    } else {
        print!("{}", to_text(&icon));
    }

    Ok(())
}

#[derive(Serialize)]
struct Report<'a> {
    input: &'a str,
    digest: String,
    colour: String,
    rows: Vec<Vec<u8>>,
    painted: Vec<usize>,
    regions: &'a [PixelRegion],
}

impl<'a> Report<'a> {
    fn new(icon: &'a Identicon) -> Self {
        Self {
            input: &icon.input,
            digest: icon.digest.to_hex(),
            colour: icon.colour.to_string(),
            rows: icon
                .grid
                .rows()
                .map(|row| row.iter().map(|c| c.value).collect())
                .collect(),
            painted: icon.painted.iter().map(|c| c.index).collect(),
            regions: &icon.regions,
        }
    }
}

fn to_json(icon: &Identicon) -> Result<String> {
    serde_json::to_string_pretty(&Report::new(icon)).map_err(|e| IdenticonError::Encode {
        message: format!("Failed to serialize report: {}", e),
    })
}

fn to_text(icon: &Identicon) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "input:   {:?}", icon.input);
    let _ = writeln!(out, "digest:  {}", icon.digest);
    let _ = writeln!(out, "colour:  {}", icon.colour);
    let _ = writeln!(out, "painted: {} of {} cells", icon.painted.len(), icon.grid.len());
    out.push('\n');

    for (row, cells) in icon.grid.preview().lines().zip(icon.grid.rows()) {
        let values: Vec<String> = cells.iter().map(|c| format!("{:3}", c.value)).collect();
        let _ = writeln!(out, "  {}  {}", row, values.join(" "));
    }
    out.push('\n');

    for (cell, region) in icon.painted.iter().zip(&icon.regions) {
        let _ = writeln!(
            out,
            "  cell {:2}: ({}, {}) -> ({}, {})",
            cell.index,
            region.top_left.x,
            region.top_left.y,
            region.bottom_right.x,
            region.bottom_right.y
        );
    }

    out
}
