//! Plain text rendering of build commands

use std::io::{self, Write};

use crate::build::command::{BuildCommand, Section};

/// Comment line describing the registry state of a command's image
pub fn comment_line(command: &BuildCommand) -> String {
    let tag = command.tag();
    match (command.section, command.in_dockerhub) {
        (_, true) => format!("# * {} already in dockerhub :", tag),
        (Section::WithoutPiic, false) => format!("# * {} not in dockerhub", tag),
        (Section::WithPiic, false) => format!("# * {} not in dockerhub launch :", tag),
    }
}

/// Write every non-empty section: header, then a comment and a command line
/// per entry, keeping the order of `commands` within a section
pub fn write_commands<W: Write>(out: &mut W, commands: &[BuildCommand]) -> io::Result<()> {
    for section in Section::ALL {
        let mut entries = commands.iter().filter(|c| c.section == section).peekable();
        if entries.peek().is_none() {
            continue;
        }

        writeln!(out, "{}", section.header())?;
        for command in entries {
            writeln!(out, "{}", comment_line(command))?;
            writeln!(out, "{}", command.command)?;
        }
    }
    Ok(())
}
