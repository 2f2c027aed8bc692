// Displaying a converted image.
//
// The whole viewing contract is: hand the file to the platform opener and
// return. The viewer process is not waited on, and a launch failure is never
// fatal to a conversion.

use std::path::Path;
use std::process::Command;

use crate::error::{ConvertError, ConvertResult};

/// Open `path` with the platform's default image viewer.
pub fn show(path: &Path) -> ConvertResult<()> {
    if !path.exists() {
        return Err(ConvertError::missing_file(path));
    }
    opener_command(path)
        .spawn()
        .map_err(|source| ConvertError::ViewerLaunch { source })?;
    Ok(())
}

#[cfg(target_os = "windows")]
fn opener_command(path: &Path) -> Command {
    let mut command = Command::new("cmd");
    command.arg("/C").arg("start").arg("").arg(path);
    command
}

#[cfg(target_os = "macos")]
fn opener_command(path: &Path) -> Command {
    let mut command = Command::new("open");
    command.arg(path);
    command
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn opener_command(path: &Path) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(path);
    command
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_rejects_a_missing_file() {
        let result = show(Path::new("/definitely/not/here.tiff"));
        assert!(matches!(result, Err(ConvertError::MissingInput { .. })));
    }
}
