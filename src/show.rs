//! Print a template's HTML so it can be pasted into the dashboard.

use anyhow::{Context, Result, bail};
use std::io::Write;

use crate::config::ReporterConfig;
use crate::reporter::{TemplateStatus, check_template};

/// Write the contents of the template matching `name` to `out`.
pub fn run(config: &ReporterConfig, name: &str, out: &mut impl Write) -> Result<()> {
    let template = config.find_template(name)?;
    let path = config.template_dir.join(&template.file_name);

    match check_template(&config.template_dir, &template.file_name) {
        TemplateStatus::Found { .. } => {}
        TemplateStatus::Missing => bail!(
            "{} not found at {}",
            template.display_name,
            path.display()
        ),
        TemplateStatus::Unreadable { reason } => bail!(
            "{} at {} is unreadable: {}",
            template.display_name,
            path.display(),
            reason
        ),
    }

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    out.write_all(content.as_bytes())?;
    if !content.ends_with('\n') {
        writeln!(out)?;
    }
    Ok(())
}
