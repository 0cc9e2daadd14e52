use std::fs;
use std::io;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{debug, info};

use idcard_model::BatchSummary;
use idcard_validate::region::AREA_CODES;
use idcard_validate::{generate_check_code, validate_text};

use crate::cli::{GenArgs, ValidateArgs};
use crate::summary::apply_table_style;

pub fn run_validate(args: &ValidateArgs) -> Result<BatchSummary> {
    let text = gather_input(args)?;
    debug!(bytes = text.len(), "collected batch input");
    let summary = validate_text(&text);
    info!(
        total = summary.total,
        valid = summary.valid_count,
        invalid = summary.invalid_count,
        "batch validated"
    );
    Ok(summary)
}

/// Inputs come from positional args, a file, or stdin, in that order of
/// preference. Line splitting and trimming happen in the core's batch
/// helper, so a single argument holding multiple lines also works.
fn gather_input(args: &ValidateArgs) -> Result<String> {
    if !args.ids.is_empty() {
        return Ok(args.ids.join("\n"));
    }
    if let Some(path) = &args.file {
        return fs::read_to_string(path)
            .with_context(|| format!("read input file {}", path.display()));
    }
    io::read_to_string(io::stdin()).context("read stdin")
}

pub fn run_gen(args: &GenArgs) -> Result<String> {
    let check = generate_check_code(&args.prefix).context("generate check code")?;
    Ok(format!("{}{check}", args.prefix))
}

pub fn run_regions() {
    let mut table = Table::new();
    table.set_header(vec!["Code", "Region"]);
    apply_table_style(&mut table);
    for (code, name) in AREA_CODES {
        table.add_row(vec![*code, *name]);
    }
    println!("{table}");
}
