use crate::commands::{CmdMessage, CmdResult};
use crate::config::CadastroConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Show or change configuration. Key errors come back as error messages and
/// leave config.json as it was.
pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = CadastroConfig::load(config_dir)?;

    let message = match action {
        ConfigAction::ShowAll => None,
        ConfigAction::ShowKey(key) => Some(
            config
                .get(&key)
                .map(CmdMessage::info)
                .unwrap_or_else(|| CmdMessage::error(format!("Unknown config key: {}", key))),
        ),
        ConfigAction::Set(key, value) => Some(match config.set(&key, &value) {
            Ok(()) => {
                config.save(config_dir)?;
                let shown = config.get(&key).unwrap_or(value);
                CmdMessage::success(format!("{} set to {}", key, shown))
            }
            Err(e) => CmdMessage::error(e),
        }),
    };

    let mut result = CmdResult::default().with_config(config);
    result.messages.extend(message);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn set_then_show() {
        let dir = TempDir::new().unwrap();
        let set = run(
            dir.path(),
            ConfigAction::Set("data-file".into(), "agenda.csv".into()),
        )
        .unwrap();
        assert_eq!(set.messages[0].content, "data-file set to agenda.csv");

        let shown = run(dir.path(), ConfigAction::ShowKey("data-file".into())).unwrap();
        assert_eq!(shown.messages[0].content, "agenda.csv");

        let all = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(all.config.unwrap().data_file, PathBuf::from("agenda.csv"));
    }

    #[test]
    fn unknown_key_is_an_error_message() {
        let dir = TempDir::new().unwrap();
        let result = run(dir.path(), ConfigAction::ShowKey("color".into())).unwrap();
        assert!(result.has_errors());

        let result = run(dir.path(), ConfigAction::Set("color".into(), "red".into())).unwrap();
        assert!(result.has_errors());
        assert!(!dir.path().join("config.json").exists());
    }
}
