//! Editor integration for composing entry content

use crate::error::{JournalyzeError, Result};
use std::fs;
use std::path::Path;
use std::process::Command;

/// Session for composing text in an external editor
pub struct EditorSession {
    command: String,
}

impl EditorSession {
    /// Create a new editor session with the given command
    pub fn new(editor_command: String) -> Self {
        EditorSession {
            command: editor_command,
        }
    }

    /// Open a scratch file in the editor, wait for it to close, and return
    /// what was written. The scratch file lives in `dir` and is removed
    /// afterwards.
    pub fn compose(&self, dir: &Path) -> Result<String> {
        let scratch = dir.join(format!(".journalyze-compose-{}.txt", std::process::id()));
        fs::write(&scratch, "")?;

        let result = self.open_and_wait(&scratch);
        let content = fs::read_to_string(&scratch).unwrap_or_default();
        let _ = fs::remove_file(&scratch);

        result?;
        Ok(content)
    }

    /// Open a file in the editor and block until the editor exits
    fn open_and_wait(&self, file_path: &Path) -> Result<()> {
        let (program, args) = self.parse_command();

        // Add file path as final argument
        let mut all_args = args;
        all_args.push(file_path.to_string_lossy().to_string());

        // On Windows, use cmd /c to ensure .bat and .cmd files are found
        #[cfg(windows)]
        let status = Command::new("cmd")
            .arg("/C")
            .arg(&program)
            .args(&all_args)
            .status();

        // On Unix, use the program directly
        #[cfg(not(windows))]
        let status = Command::new(&program).args(&all_args).status();

        let status = status.map_err(|e| {
            JournalyzeError::Editor(format!("Failed to launch editor '{}': {}", program, e))
        })?;

        if !status.success() {
            return Err(JournalyzeError::Editor(format!(
                "Editor '{}' exited with {}",
                program, status
            )));
        }

        Ok(())
    }

    /// Parse command into program and arguments
    fn parse_command(&self) -> (String, Vec<String>) {
        let parts: Vec<&str> = self.command.split_whitespace().collect();

        if parts.is_empty() {
            // Fallback to notepad if command is empty
            return ("notepad".to_string(), vec![]);
        }

        let program = parts[0].to_string();
        let args = parts[1..].iter().map(|s| s.to_string()).collect();

        (program, args)
    }
}
