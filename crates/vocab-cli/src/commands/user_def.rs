//! The `vocab user-def` command.

use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result};

use vocab_sources::overrides::OverrideSource;
use vocab_sources::VocabConfig;

pub fn execute(config: &VocabConfig, word: &str) -> Result<()> {
    let path = OverrideSource::new(&config.overrides_dir)
        .touch(word)
        .with_context(|| {
            format!(
                "failed to create user definition for \"{word}\" in {}",
                config.overrides_dir.display()
            )
        })?;

    println!("User definition file: {}", path.display());
    open_in_editor(&path)
}

/// Open `path` in `$VISUAL`/`$EDITOR`, falling back to the platform opener.
fn open_in_editor(path: &Path) -> Result<()> {
    let mut command = match std::env::var_os("VISUAL").or_else(|| std::env::var_os("EDITOR")) {
        Some(editor) => editor_command(&editor),
        None if cfg!(target_os = "macos") => Command::new("open"),
        None if cfg!(target_os = "windows") => {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", ""]);
            cmd
        }
        None => Command::new("xdg-open"),
    };

    let status = command
        .arg(path)
        .status()
        .with_context(|| format!("failed to launch an editor for {}", path.display()))?;
    anyhow::ensure!(status.success(), "editor exited with {status}");

    Ok(())
}

/// `EDITOR` may carry arguments, e.g. `code --wait`.
fn editor_command(editor: &OsString) -> Command {
    let editor = editor.to_string_lossy();
    let mut parts = editor.split_whitespace();
    let mut command = Command::new(parts.next().unwrap_or("vi"));
    command.args(parts);
    command
}
