use lostscript::{Nested, json::nested_to_json};

use crate::{
    commands::LangArgs,
    input_output::{InputArgs, OutputArgs},
};

/// Args for the encode command.
#[derive(clap::Args, Debug)]
pub struct EncodeArgs {
    #[command(flatten)]
    lang: LangArgs,

    /// Frame each word with ``<SOW>`` / ``<EOW>``.
    #[arg(long)]
    framed: bool,

    /// Words to encode; read one per line from the input when absent.
    words: Vec<String>,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl EncodeArgs {
    /// Run the encode command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let vocab = self.lang.load()?;

        let rows = self
            .input
            .words(&self.words)?
            .iter()
            .map(|word| {
                if self.framed {
                    vocab.encode_framed_word::<u32>(word)
                } else {
                    vocab.encode_word::<u32>(word)
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        self.output
            .write_json(&nested_to_json(&Nested::from_rows(rows)))
    }
}
