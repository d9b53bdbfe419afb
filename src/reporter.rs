//! Configuration reporter: desired settings, template inventory, closing checklist.
//!
//! Everything is written to a caller-supplied sink so output can be captured.
//! The reporter only stats and never writes template files.

use std::io::{self, Write};
use std::path::Path;

use tracing::{debug, warn};

use crate::config::{ReporterConfig, TemplateDescriptor};

const RULE_WIDTH: usize = 50;

/// Result of checking one expected template on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateStatus {
    Found { size: u64 },
    Missing,
    /// The path exists (or may exist) but could not be inspected.
    Unreadable { reason: String },
}

impl TemplateStatus {
    pub fn is_found(&self) -> bool {
        matches!(self, TemplateStatus::Found { .. })
    }
}

/// Stat `template_dir/file_name`.
///
/// A missing file and a missing directory are both `Missing`. Any other
/// failure, or a path that is not a regular file, is `Unreadable`.
pub fn check_template(template_dir: &Path, file_name: &str) -> TemplateStatus {
    let path = template_dir.join(file_name);
    match std::fs::metadata(&path) {
        Ok(meta) if meta.is_file() => TemplateStatus::Found { size: meta.len() },
        Ok(_) => {
            warn!(path = %path.display(), "template path is not a regular file");
            TemplateStatus::Unreadable {
                reason: "not a regular file".to_string(),
            }
        }
        // NotADirectory: template_dir is itself a file
        Err(e) if matches!(e.kind(), io::ErrorKind::NotFound | io::ErrorKind::NotADirectory) => {
            TemplateStatus::Missing
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to stat template");
            TemplateStatus::Unreadable {
                reason: e.to_string(),
            }
        }
    }
}

pub struct Reporter {
    config: ReporterConfig,
}

impl Reporter {
    pub fn new(config: ReporterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReporterConfig {
        &self.config
    }

    /// Full report: banner, settings, template inventory, closing checklist.
    pub fn run(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out)?;
        heading(out, &format!("🧠 {}", self.config.title))?;
        writeln!(out)?;

        self.report_desired_settings(out)?;
        self.report_template_inventory(out)?;
        self.print_closing_checklist(out)
    }

    pub fn report_desired_settings(&self, out: &mut impl Write) -> io::Result<()> {
        let auth = &self.config.auth;

        heading(out, "⚙️  Auth Configuration Settings")?;
        writeln!(out, "Site URL: {}", auth.site_url)?;
        writeln!(out, "Redirect URLs: {}", auth.redirect_urls.join(", "))?;
        writeln!(out)?;

        writeln!(out, "ℹ️  Configuration Update Required:")?;
        writeln!(out)?;
        writeln!(
            out,
            "Due to {} API limitations, please update these settings manually:",
            self.config.provider
        )?;
        writeln!(out)?;
        writeln!(out, "1. Go to: {}", self.config.settings_dashboard_url())?;
        writeln!(out, "2. Set 'Site URL' to: {}", auth.site_url)?;
        writeln!(out, "3. Add to 'Redirect URLs':")?;
        for url in &auth.redirect_urls {
            writeln!(out, "   - {}", url)?;
        }
        writeln!(out)?;
        Ok(())
    }

    /// Check every expected template without printing anything.
    pub fn inventory(&self) -> Vec<(&TemplateDescriptor, TemplateStatus)> {
        self.config
            .templates
            .iter()
            .map(|t| (t, check_template(&self.config.template_dir, &t.file_name)))
            .collect()
    }

    /// Print the template inventory. Returns how many templates were not found.
    pub fn report_template_inventory(&self, out: &mut impl Write) -> io::Result<usize> {
        heading(out, "📧 Email Templates Created")?;
        writeln!(out)?;
        writeln!(out, "Email templates are located in:")?;
        writeln!(out, "  {}", self.config.template_dir.display())?;
        writeln!(out)?;

        let mut not_found = 0;
        for (template, status) in self.inventory() {
            debug!(file = %template.file_name, ?status, "checked template");
            match status {
                TemplateStatus::Found { size } => {
                    writeln!(out, "✓ {}", template.display_name)?;
                    writeln!(out, "  File: {}", template.file_name)?;
                    writeln!(out, "  Size: {} bytes", size)?;
                }
                TemplateStatus::Missing => {
                    not_found += 1;
                    writeln!(out, "✗ {} - Not found", template.display_name)?;
                }
                TemplateStatus::Unreadable { reason } => {
                    not_found += 1;
                    writeln!(out, "✗ {} - Unreadable ({})", template.display_name, reason)?;
                }
            }
            writeln!(out)?;
        }

        writeln!(out, "To apply these templates:")?;
        writeln!(out, "1. Visit: {}", self.config.templates_dashboard_url())?;
        writeln!(out, "2. For each template, copy the HTML content from the files above")?;
        writeln!(out, "3. Paste into the corresponding template in the dashboard")?;
        writeln!(out)?;
        Ok(not_found)
    }

    pub fn print_closing_checklist(&self, out: &mut impl Write) -> io::Result<()> {
        let provider = &self.config.provider;

        writeln!(out, "✅ Next Steps:")?;
        writeln!(out)?;
        writeln!(out, "1. Update auth settings in {} dashboard", provider)?;
        writeln!(out, "2. Copy email templates to {} auth templates", provider)?;
        writeln!(out, "3. Test authentication flow at {}", self.config.auth.site_url)?;
        writeln!(out)?;
        writeln!(out, "📚 Documentation:")?;
        writeln!(out, "   {}", self.config.docs_url)?;
        writeln!(out)?;
        Ok(())
    }
}

fn heading(out: &mut impl Write, text: &str) -> io::Result<()> {
    writeln!(out, "{}", text)?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))
}
