use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::path::Path;
use std::process::Command;

/// `$EDITOR`, then `$VISUAL`, then the platform default.
fn default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".into()
            } else {
                "nano".into()
            }
        })
}

fn open_in(editor: &str, path: &Path) -> bool {
    Command::new(editor)
        .arg(path)
        .status()
        .is_ok_and(|s| s.success())
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    else {
        return Ok(());
    };

    let path = Config::config_file();

    if *print_config {
        info(format!("Current configuration ({}):\n", path.display()));
        println!("{}", cfg.to_yaml()?);
    }

    if !*edit_config {
        return Ok(());
    }

    let fallback = default_editor();
    let chosen = editor.clone().unwrap_or_else(|| fallback.clone());

    if open_in(&chosen, &path) {
        success(format!("Configuration edited with '{chosen}'"));
        return Ok(());
    }

    if chosen != fallback {
        warning(format!("Editor '{chosen}' failed, trying '{fallback}'"));
        if open_in(&fallback, &path) {
            success(format!("Configuration edited with '{fallback}'"));
            return Ok(());
        }
    }

    Err(AppError::Config(format!(
        "could not edit {} with '{chosen}'",
        path.display()
    )))
}
