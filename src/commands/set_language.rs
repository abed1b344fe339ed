//! Interface-language switch command
//!
//! The one write path for the persisted UI-language preference.

use anyhow::Result;

use crate::application::i18n::{Localizer, UiLanguage};
use crate::infrastructure::config::ConfigManager;

/// Persist the chosen interface language and confirm in that language.
pub async fn run(manager: &ConfigManager, code: &str) -> Result<()> {
    manager.save_ui_language(code).await?;

    let localizer = Localizer::new(UiLanguage::from_code(code));
    println!("{} ✓", localizer.text("app.title"));
    Ok(())
}
