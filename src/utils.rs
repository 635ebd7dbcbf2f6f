use std::fs;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::Path;

use dialoguer::Input;

/// Create `path` and its parents if missing. An empty path means the
/// current directory and is left alone.
pub fn ensure_dir(path: &Path) -> io::Result<()> {
    if !path.as_os_str().is_empty() && !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Read one answer line. A terminal gets a dialoguer prompt; piped input is
/// read as a plain line so `echo name | ct_harvest` works.
pub fn prompt_line(prompt: &str) -> io::Result<String> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Input::<String>::new()
            .with_prompt(prompt)
            .interact_text()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e));
    }
    print!("{}: ", prompt);
    io::stdout().flush()?;
    read_answer(&mut stdin.lock())
}

/// Next line from `reader` without its line terminator. End of input is an error.
pub fn read_answer<R: BufRead>(reader: &mut R) -> io::Result<String> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "no input"));
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
