use clap::{Parser, Subcommand};
use std::convert::Infallible;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

// CLI argument structure
#[derive(Parser, Debug, Clone)]
#[command(name = "code-compare")]
#[command(about = "Ask a chat-completion model how submitted code differs from a reference")]
pub struct Args {
    // Bearer token for the completion service, never logged
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: ApiKey,

    // Chat completions endpoint
    #[arg(long, default_value = DEFAULT_ENDPOINT, global = true)]
    pub endpoint: String,

    #[arg(long, default_value = DEFAULT_MODEL, global = true)]
    pub model: String,

    // Sampling temperature
    #[arg(long, default_value_t = 0.5, global = true)]
    pub temperature: f64,

    // Output token cap
    #[arg(long, default_value_t = 150, global = true)]
    pub max_tokens: u32,

    // Send the prompt as plain text instead of form-encoding it
    #[arg(long, global = true)]
    pub raw_prompt: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Compare two files once and print the feedback
    Compare {
        // Reference solution
        #[arg(long)]
        correct: PathBuf,

        // Code under review
        #[arg(long)]
        submitted: PathBuf,

        // Also write the feedback to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Run the local HTTP front end
    Serve {
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        #[arg(short, long, default_value_t = 8080)]
        port: u16,
    },
}

impl Args {
    pub fn completion_settings(&self) -> CompletionSettings {
        CompletionSettings {
            endpoint: self.endpoint.clone(),
            model: self.model.clone(),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            api_key: self.api_key.clone(),
            encode_prompt: !self.raw_prompt,
        }
    }
}

/// Secret bearer token. Formatting never reveals the value.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl FromStr for ApiKey {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().to_string()))
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}

/// Everything the completion client needs; fixed for the life of a client.
#[derive(Debug, Clone)]
pub struct CompletionSettings {
    pub endpoint: String,
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
    pub api_key: ApiKey,
    pub encode_prompt: bool,
}

impl CompletionSettings {
    /// Reference defaults pointed at `endpoint`.
    pub fn new(endpoint: impl Into<String>, api_key: ApiKey) -> Self {
        Self {
            endpoint: endpoint.into(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.5,
            max_tokens: 150,
            api_key,
            encode_prompt: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_is_redacted() {
        let key = ApiKey::new("sk-secret-value");
        assert_eq!(format!("{key:?}"), "ApiKey(***)");
        assert_eq!(key.to_string(), "***");
        assert_eq!(key.expose(), "sk-secret-value");
    }

    #[test]
    fn parses_compare_with_defaults() {
        let args = Args::try_parse_from([
            "code-compare",
            "--api-key",
            "sk-test",
            "compare",
            "--correct",
            "a.py",
            "--submitted",
            "b.py",
        ])
        .unwrap();

        let settings = args.completion_settings();
        assert_eq!(settings.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(settings.model, "gpt-3.5-turbo");
        assert_eq!(settings.temperature, 0.5);
        assert_eq!(settings.max_tokens, 150);
        assert!(settings.encode_prompt);
        assert!(!format!("{args:?}").contains("sk-test"));
        match args.command {
            Command::Compare { correct, output, .. } => {
                assert_eq!(correct, PathBuf::from("a.py"));
                assert!(output.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_serve_overrides() {
        let args = Args::try_parse_from([
            "code-compare",
            "--api-key",
            "sk-test",
            "serve",
            "--port",
            "9000",
            "--raw-prompt",
            "--max-tokens",
            "300",
        ])
        .unwrap();

        assert!(!args.completion_settings().encode_prompt);
        assert_eq!(args.max_tokens, 300);
        match args.command {
            Command::Serve { host, port } => {
                assert_eq!(host, "127.0.0.1");
                assert_eq!(port, 9000);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
