//! Table of expected templates.

use std::io::{self, Write};

use crate::config::ReporterConfig;

pub fn run(config: &ReporterConfig, out: &mut impl Write) -> io::Result<()> {
    let rows: Vec<(&str, &str, &str)> = config
        .templates
        .iter()
        .map(|t| {
            (
                t.file_name.as_str(),
                t.display_name.as_str(),
                t.dashboard_url.as_str(),
            )
        })
        .collect();
    print_table(out, &rows)
}

fn print_table(out: &mut impl Write, rows: &[(&str, &str, &str)]) -> io::Result<()> {
    let file_w = rows.iter().map(|(f, _, _)| f.len()).max().unwrap_or(0);
    let name_w = rows.iter().map(|(_, n, _)| n.len()).max().unwrap_or(0);
    for (file, name, url) in rows {
        writeln!(
            out,
            "  {:<file_w$}  {:<name_w$}  {}",
            file,
            name,
            url,
            file_w = file_w,
            name_w = name_w
        )?;
    }
    Ok(())
}
