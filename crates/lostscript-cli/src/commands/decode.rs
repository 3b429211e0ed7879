use lostscript::json::{nested_to_json, parse_ids};

use crate::{
    commands::LangArgs,
    input_output::{InputArgs, OutputArgs},
};

/// Args for the decode command.
#[derive(clap::Args, Debug)]
pub struct DecodeArgs {
    #[command(flatten)]
    lang: LangArgs,

    /// JSON ids, e.g. ``[[1, 4, 2]]``; read from the input when absent.
    ids: Option<String>,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl DecodeArgs {
    /// Run the decode command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let vocab = self.lang.load()?;

        let text = match &self.ids {
            Some(ids) => ids.clone(),
            None => self.input.read_all()?,
        };
        let symbols = vocab.decode(&parse_ids(&text)?)?;

        self.output.write_json(&nested_to_json(&symbols))
    }
}
