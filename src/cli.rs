use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for carlot
#[derive(Parser, Debug)]
#[command(version, about = "Explore used-vehicle listings")]
pub struct Args {
    /// Listings file with price, model_year, model, condition, odometer, type and days_listed columns
    #[arg(default_value = "vehicles_us.csv")]
    pub path: PathBuf,

    /// Field delimiter of the listings file
    #[arg(long = "delimiter", default_value_t = ',')]
    pub delimiter: char,

    /// Start with the days-listed histogram shown
    #[arg(long = "show-days-listed", action)]
    pub show_days_listed: bool,
}

impl Args {
    /// The delimiter as the single byte the CSV reader expects.
    pub fn delimiter_byte(&self) -> anyhow::Result<u8> {
        if !self.delimiter.is_ascii() {
            anyhow::bail!("delimiter must be a single ASCII character");
        }
        Ok(self.delimiter as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::parse_from(["carlot"]);
        assert_eq!(args.path, PathBuf::from("vehicles_us.csv"));
        assert_eq!(args.delimiter_byte().unwrap(), b',');
        assert!(!args.show_days_listed);
    }

    #[test]
    fn explicit_options() {
        let args = Args::parse_from(["carlot", "data.tsv", "--delimiter", "\t", "--show-days-listed"]);
        assert_eq!(args.path, PathBuf::from("data.tsv"));
        assert_eq!(args.delimiter_byte().unwrap(), b'\t');
        assert!(args.show_days_listed);
    }

    #[test]
    fn non_ascii_delimiter_is_rejected() {
        let args = Args::parse_from(["carlot", "--delimiter", "é"]);
        assert!(args.delimiter_byte().is_err());
    }
}
