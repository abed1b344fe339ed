//! Command-line surface of the client
//!
//! Mirrors the actions of the original interface: upload-and-translate,
//! history listing, artifact download, supported-language listing, and the
//! UI language switch.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "po-prevoditelj", version, about = "Translate PO localization files via the translation backend")]
pub struct Cli {
    /// Backend origin, overriding the configured one
    #[arg(long, env = "PO_PREVODITELJ_BACKEND")]
    pub backend: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Upload a PO file and follow the translation live
    Translate {
        /// Path of the .po file to translate
        file: PathBuf,

        /// Source language code ("auto" detects it)
        #[arg(long = "from", default_value = crate::domain::constants::AUTO_SOURCE)]
        source_lang: String,

        /// Target language code
        #[arg(long = "to", default_value = crate::domain::constants::DEFAULT_TARGET)]
        target_lang: String,

        /// Directory the translated file is written to (defaults to the
        /// configured output directory)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },

    /// List previous translations
    History,

    /// Download the artifact of a previous translation
    Download {
        /// Id of the history record
        id: String,

        /// Directory the file is written to (defaults to the configured
        /// output directory)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },

    /// List languages the backend can translate into
    Languages,

    /// Switch the interface language and persist the choice
    SetLanguage {
        /// Interface language code
        #[arg(value_parser = ["hr", "en"])]
        code: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_translate_with_language_pair() {
        let cli = Cli::parse_from([
            "po-prevoditelj",
            "translate",
            "theme.po",
            "--from",
            "en",
            "--to",
            "de",
        ]);
        match cli.command {
            Commands::Translate {
                file,
                source_lang,
                target_lang,
                output_dir,
            } => {
                assert_eq!(file, PathBuf::from("theme.po"));
                assert_eq!(source_lang, "en");
                assert_eq!(target_lang, "de");
                assert!(output_dir.is_none());
            }
            _ => panic!("Expected translate subcommand"),
        }
    }

    #[test]
    fn test_translate_defaults_to_auto_detect_and_croatian() {
        let cli = Cli::parse_from(["po-prevoditelj", "translate", "theme.po"]);
        match cli.command {
            Commands::Translate {
                source_lang,
                target_lang,
                ..
            } => {
                assert_eq!(source_lang, "auto");
                assert_eq!(target_lang, "hr");
            }
            _ => panic!("Expected translate subcommand"),
        }
    }

    #[test]
    fn test_set_language_rejects_unknown_codes() {
        let outcome = Cli::try_parse_from(["po-prevoditelj", "set-language", "de"]);
        assert!(outcome.is_err());
    }

    #[test]
    fn test_backend_override_flag() {
        let cli = Cli::parse_from([
            "po-prevoditelj",
            "--backend",
            "http://translate.example:9000",
            "history",
        ]);
        assert_eq!(
            cli.backend.as_deref(),
            Some("http://translate.example:9000")
        );
        assert!(matches!(cli.command, Commands::History));
    }
}
