use lostscript::{
    decoders::{DetokenizeOptions, GridRank},
    json::{nested_to_json, parse_ids},
    vocab::specials::DEFAULT_PLACEHOLDER,
};

use crate::{
    commands::LangArgs,
    input_output::{InputArgs, OutputArgs},
};

/// Args for the detokenize command.
#[derive(clap::Args, Debug)]
pub struct DetokenizeArgs {
    #[command(flatten)]
    lang: LangArgs,

    /// Rendering for stray special symbols.
    #[arg(long, default_value_t = DEFAULT_PLACEHOLDER)]
    placeholder: char,

    /// Decode rows in parallel.
    #[arg(long)]
    parallel: bool,

    /// Grid rank; detected from the first leaf when absent.
    #[arg(long, value_parser = clap::value_parser!(u8).range(2..=3))]
    rank: Option<u8>,

    /// JSON id grid of rank 2 or 3; read from the input when absent.
    ids: Option<String>,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl DetokenizeArgs {
    /// Run the detokenize command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let vocab = self.lang.load()?;

        let text = match &self.ids {
            Some(ids) => ids.clone(),
            None => self.input.read_all()?,
        };
        let grid = parse_ids(&text)?;

        let options = DetokenizeOptions::default()
            .with_placeholder(self.placeholder)
            .with_parallel(self.parallel);
        let decoder = options.build(&vocab);
        let tokens = match self.rank {
            Some(2) => decoder.decode_with_rank(&grid, GridRank::Rank2)?,
            Some(_) => decoder.decode_with_rank(&grid, GridRank::Rank3)?,
            None => decoder.decode(&grid)?,
        };

        self.output.write_json(&nested_to_json(&tokens))
    }
}
