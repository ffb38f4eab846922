use clap::Parser;
use std::path::PathBuf;

/// Convert CloneCD disc descriptions (CCD) to CUE sheets and CD-Text (CDT) files
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the input CCD sheet
    #[arg(value_name = "CCD_FILE")]
    pub input: PathBuf,

    /// Output CUE sheet path; defaults to the input name with a .cue extension
    #[arg(value_name = "OUTPUT", long, short = 'o')]
    pub output: Option<PathBuf>,

    /// CD-Text file path referenced by the CDTEXTFILE entry; defaults to the
    /// input name with a .cdt extension. Only written when the sheet carries
    /// CD-Text data
    #[arg(value_name = "CDT_FILE", long = "cd-text", short = 'c')]
    pub cd_text: Option<PathBuf>,

    /// Disc image file name embedded in the FILE entry; defaults to the
    /// input name with a .img extension
    #[arg(value_name = "IMAGE", long, short = 'i')]
    pub image: Option<String>,

    /// Keep directory components when deriving output names from the input
    /// path instead of using only its base name
    #[arg(long, short = 'a', default_value = "false")]
    pub absolute_file_name: bool,
}
