//! CLI argument parsing with clap.

use clap::Parser;

/// AI image generation adapter - prompt in, saved image file out.
#[derive(Parser, Debug)]
#[command(name = "pixgen", version, about)]
pub struct Cli {
    /// Text prompt describing the desired image.
    #[arg(conflicts_with = "prompt_file")]
    pub prompt: Option<String>,

    /// Path to a file containing the prompt text.
    #[arg(short = 'p', long, conflicts_with = "prompt")]
    pub prompt_file: Option<String>,

    /// Model identifier (overrides config and `OPENAI_IMAGE_MODEL`).
    #[arg(short, long)]
    pub model: Option<String>,

    /// Output file path (auto-generated `.png` name if not specified).
    #[arg(short, long)]
    pub output: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Resolve the prompt from either the positional argument or the file flag.
    ///
    /// # Errors
    ///
    /// Returns an error if neither prompt nor prompt-file is provided,
    /// or if the file cannot be read.
    pub fn resolve_prompt(&self) -> Result<String, std::io::Error> {
        if let Some(ref text) = self.prompt {
            Ok(text.clone())
        } else if let Some(ref path) = self.prompt_file {
            std::fs::read_to_string(path)
        } else {
            Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Provide a prompt string or use -p/--prompt-file",
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_prompt() {
        let cli = Cli::parse_from(["pixgen", "a cat"]);
        assert_eq!(cli.prompt.as_deref(), Some("a cat"));
        assert!(cli.prompt_file.is_none());
        assert_eq!(cli.resolve_prompt().unwrap(), "a cat");
    }

    #[test]
    fn prompt_file_flag() {
        let dir = std::env::temp_dir().join("pixgen_cli_pf_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("prompt.txt");
        std::fs::write(&path, "prompt from file").unwrap();

        let cli = Cli::parse_from(["pixgen", "-p", path.to_str().unwrap()]);
        assert!(cli.prompt.is_none());
        assert!(cli.prompt_file.is_some());
        assert_eq!(cli.resolve_prompt().unwrap(), "prompt from file");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn default_values() {
        let cli = Cli::parse_from(["pixgen", "a cat"]);
        assert!(cli.model.is_none());
        assert!(cli.output.is_none());
        assert!(cli.config.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn all_options() {
        let cli = Cli::parse_from([
            "pixgen",
            "-m",
            "gpt-image-1-mini",
            "-o",
            "out/img.png",
            "-v",
            "a landscape",
        ]);
        assert_eq!(cli.model.as_deref(), Some("gpt-image-1-mini"));
        assert_eq!(cli.output.as_deref(), Some("out/img.png"));
        assert!(cli.verbose);
        assert_eq!(cli.prompt.as_deref(), Some("a landscape"));
    }

    #[test]
    fn no_prompt_errors() {
        let cli = Cli::parse_from(["pixgen"]);
        assert!(cli.resolve_prompt().is_err());
    }
}
