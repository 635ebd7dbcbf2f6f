use std::collections::HashSet;
use std::io::Write;

use crate::output::writer_txt::sorted_names;

/// Write the collected names under a header, one per line.
pub fn display_names<W: Write>(out: &mut W, names: &HashSet<String>) -> std::io::Result<()> {
    writeln!(out, "[+] Collected certificate names ({}):", names.len())?;
    for name in sorted_names(names) {
        writeln!(out, "{}", name)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_lists_every_name() {
        let names: HashSet<String> = ["api.example.com", "example.com"].iter().map(|s| s.to_string()).collect();
        let mut buf = Vec::new();
        display_names(&mut buf, &names).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "[+] Collected certificate names (2):\napi.example.com\nexample.com\n");
    }
}
