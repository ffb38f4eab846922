use crate::ccd::CcdParser;
use crate::cdt::write_cdt;
use crate::commands::Cli;
use crate::convert::{ccd2cdt, ccd2cue};
use crate::cue::write_cue;
use anyhow::Result;
use clap::Parser;
use log::{debug, info};

mod ccd;
mod cdt;
mod commands;
mod convert;
mod cue;
mod util;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    run(cli).await
}

async fn run(cli: Cli) -> Result<()> {
    let reference = util::reference_name(&cli.input, cli.absolute_file_name);
    let cue_path = cli
        .output
        .unwrap_or_else(|| reference.with_extension("cue"));
    let cdt_path = cli
        .cd_text
        .unwrap_or_else(|| reference.with_extension("cdt"));
    let img_name = cli
        .image
        .unwrap_or_else(|| reference.with_extension("img").to_string_lossy().into_owned());

    debug!("Parsing CCD sheet: {:?}", cli.input);
    let ccd = CcdParser::new(&cli.input).parse().await?;
    debug!(
        "Parsed {} session(s), {} TOC entr(ies), {} track(s), {} CD-Text record(s)",
        ccd.disc.sessions,
        ccd.disc.toc_entries,
        ccd.tracks.len(),
        ccd.cd_text.entries
    );

    let cdt_name = cdt_path.to_string_lossy();
    let cue = ccd2cue(&ccd, &img_name, &cdt_name)?;
    let cdt = ccd2cdt(&ccd);

    let mut cue_out = Vec::new();
    write_cue(&cue, &mut cue_out)?;
    tokio::fs::write(&cue_path, cue_out).await?;
    info!("Wrote CUE sheet: {:?}", cue_path);

    if !cdt.entries.is_empty() {
        let mut cdt_out = Vec::new();
        write_cdt(&cdt, &mut cdt_out)?;
        tokio::fs::write(&cdt_path, cdt_out).await?;
        info!(
            "Wrote CD-Text file: {:?} ({} records)",
            cdt_path,
            cdt.entries.len()
        );
    }

    Ok(())
}
