use std::sync::Arc;

use lostscript::CharsetVocab;

use crate::commands::{
    decode::DecodeArgs,
    detokenize::DetokenizeArgs,
    encode::EncodeArgs,
    list::ListArgs,
    process::ProcessArgs,
};

pub mod decode;
pub mod detokenize;
pub mod encode;
pub mod list;
pub mod process;

/// Subcommands for lostscript.
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// List registered charsets.
    List(ListArgs),

    /// Encode words into symbol ids.
    Encode(EncodeArgs),

    /// Decode a nested JSON array of ids into symbols.
    Decode(DecodeArgs),

    /// Reconstruct tokens from a padded rank 2 or rank 3 id grid.
    Detokenize(DetokenizeArgs),

    /// Normalize words into per-character annotations.
    Process(ProcessArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::List(cmd) => cmd.run(),
            Commands::Encode(cmd) => cmd.run(),
            Commands::Decode(cmd) => cmd.run(),
            Commands::Detokenize(cmd) => cmd.run(),
            Commands::Process(cmd) => cmd.run(),
        }
    }
}

/// Charset selector arg group.
#[derive(clap::Args, Debug)]
pub struct LangArgs {
    /// Language identifier of the charset.
    #[arg(long, short, default_value = "en")]
    lang: String,
}

impl LangArgs {
    /// Load the charset from the global registry.
    pub fn load(&self) -> Result<Arc<CharsetVocab>, Box<dyn std::error::Error>> {
        log::info!("loading charset '{}'", self.lang);
        Ok(lostscript::get_charset(&self.lang)?)
    }
}
