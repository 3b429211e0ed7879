use serde_json::{Map, Value};

use crate::{
    commands::LangArgs,
    input_output::{InputArgs, OutputArgs},
};

/// Args for the process command.
#[derive(clap::Args, Debug)]
pub struct ProcessArgs {
    #[command(flatten)]
    lang: LangArgs,

    /// Words to normalize; read one per line from the input when absent.
    words: Vec<String>,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl ProcessArgs {
    /// Run the process command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let vocab = self.lang.load()?;

        let mut words = Vec::new();
        for word in self.input.words(&self.words)? {
            let chars = vocab
                .process(&word)?
                .iter()
                .map(|ann| {
                    let mut obj = Map::new();
                    obj.insert("grapheme".to_string(), ann.grapheme().into());
                    for (name, value) in ann.flags() {
                        obj.insert(name.clone(), (*value).into());
                    }
                    Value::Object(obj)
                })
                .collect();
            words.push(Value::Array(chars));
        }

        self.output.write_json(&Value::Array(words))
    }
}
