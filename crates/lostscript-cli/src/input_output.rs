use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Read, Write},
};

fn squash_standard_io(path: &Option<String>) -> Option<String> {
    match path {
        Some(p) if p == "-" => None,
        Some(p) => Some(p.clone()),
        None => None,
    }
}

/// Input argument group.
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Optional input file; "-" may be used to indicate stdin.
    ///
    /// Ignored when values are given on the command line.
    #[clap(long, default_value = None)]
    pub input: Option<String>,
}

impl InputArgs {
    /// Open a reader for the input.
    pub fn open_reader(&self) -> Result<Box<dyn BufRead>, Box<dyn std::error::Error>> {
        Ok(match squash_standard_io(&self.input) {
            None => Box::new(BufReader::new(std::io::stdin().lock())),
            Some(p) => Box::new(BufReader::new(File::open(p)?)),
        })
    }

    /// Read the whole input.
    pub fn read_all(&self) -> Result<String, Box<dyn std::error::Error>> {
        let mut text = String::new();
        self.open_reader()?.read_to_string(&mut text)?;
        Ok(text)
    }

    /// The words to operate on: `inline` if non-empty, else one per input line.
    pub fn words(
        &self,
        inline: &[String],
    ) -> Result<Vec<String>, Box<dyn std::error::Error>> {
        if !inline.is_empty() {
            return Ok(inline.to_vec());
        }
        let mut words = Vec::new();
        for line in self.open_reader()?.lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() {
                words.push(word.to_string());
            }
        }
        Ok(words)
    }
}

/// Output argument group.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Optional output file; "-" may be used to indicate stdout.
    #[clap(long, default_value = None)]
    pub output: Option<String>,

    /// Pretty-print JSON output.
    #[clap(long)]
    pub pretty: bool,
}

impl OutputArgs {
    /// Open a writer for the output.
    pub fn open_writer(&self) -> Result<Box<dyn Write>, Box<dyn std::error::Error>> {
        Ok(match squash_standard_io(&self.output) {
            Some(p) => Box::new(BufWriter::new(File::create(p)?)),
            None => Box::new(BufWriter::new(std::io::stdout().lock())),
        })
    }

    /// Write one JSON document, newline terminated.
    pub fn write_json(
        &self,
        value: &serde_json::Value,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut writer = self.open_writer()?;
        if self.pretty {
            serde_json::to_writer_pretty(&mut writer, value)?;
        } else {
            serde_json::to_writer(&mut writer, value)?;
        }
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}
