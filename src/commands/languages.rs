//! Supported-language listing command

use anyhow::Result;
use console::style;

use crate::application::i18n::Localizer;
use crate::application::session::TranslationSession;

/// Fetch and print the backend's supported languages, sorted by display
/// name for stable output.
pub async fn run(session: &mut TranslationSession, localizer: &Localizer) -> Result<()> {
    session.refresh_languages().await;

    if session.languages().is_empty() {
        println!("{}", localizer.text("languages.failed"));
        return Ok(());
    }

    println!("{}", style(localizer.text("languages.title")).bold());

    let mut languages: Vec<(&String, &String)> = session.languages().iter().collect();
    languages.sort_by(|a, b| a.1.cmp(b.1));
    for (code, name) in languages {
        println!("  {:<6} {}", style(code).cyan(), name);
    }

    Ok(())
}
