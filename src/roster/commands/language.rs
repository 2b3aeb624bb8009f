use crate::commands::{CmdMessage, CmdResult, RosterPaths};
use crate::config::RosterConfig;
use crate::error::Result;
use crate::i18n::Translator;

/// Shows the configured language, or switches to `code` and persists it.
pub fn run(paths: &RosterPaths, translator: &mut Translator, code: Option<&str>) -> Result<CmdResult> {
    let mut config = RosterConfig::load(&paths.data_dir)?;
    let mut result = CmdResult::default();

    if let Some(code) = code {
        config.set_language(code)?;
        translator.set_language(config.language);
        config.save(&paths.data_dir)?;
        result.add_message(CmdMessage::success(format!(
            "{}: {}",
            translator.translate("languageChanged"),
            config.language
        )));
    }

    Ok(result.with_config(config))
}
