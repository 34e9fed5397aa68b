use std::env;
use std::path::PathBuf;

/// Default command file when neither `GYM_INPUT_FILE` nor an argument is given
pub const DEFAULT_INPUT_FILE: &str = "input.txt";

/// Default report file when neither `GYM_OUTPUT_FILE` nor an argument is given
pub const DEFAULT_OUTPUT_FILE: &str = "output.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            input_path: lookup("GYM_INPUT_FILE")
                .unwrap_or_else(|| DEFAULT_INPUT_FILE.to_string())
                .into(),
            output_path: lookup("GYM_OUTPUT_FILE")
                .unwrap_or_else(|| DEFAULT_OUTPUT_FILE.to_string())
                .into(),
        }
    }

    /// Override paths with positional `[input] [output]` arguments
    pub fn with_args<I>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        if let Some(input) = args.next() {
            self.input_path = input.into();
        }
        if let Some(output) = args.next() {
            self.output_path = output.into();
        }
        self
    }
}
