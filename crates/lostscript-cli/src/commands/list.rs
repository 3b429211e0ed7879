/// Args for the charset listing command.
#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Only print identifiers; do not build the charsets.
    #[arg(long)]
    names_only: bool,
}

impl ListArgs {
    /// Run the charset listing command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        for lang in lostscript::list_charsets() {
            if self.names_only {
                println!("{lang}");
                continue;
            }

            let vocab = lostscript::get_charset(&lang)?;
            let policy = if vocab.normalizer().is_some() {
                "normalized"
            } else {
                "raw"
            };
            println!("\"{lang}\" - {} symbols, {policy}", vocab.size());

            let features = vocab.feature_schema().names();
            if !features.is_empty() {
                println!("  features: {}", features.join(", "));
            }
        }

        Ok(())
    }
}
