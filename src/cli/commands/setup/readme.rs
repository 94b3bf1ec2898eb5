//! README generation for the Replit project page

use std::io::Write;

use crate::config::SetupEnvironment;
use crate::errors::SetupError;

use super::SetupCommand;

/// Full README text for the given environment.
pub fn render_readme(environment: &SetupEnvironment) -> String {
    let webhook_url = environment.webhook_url();

    format!(
        r##"# 🕌 Masjid AI Assistant - Replit Ready

This project runs n8n with a pre-configured Islamic AI assistant workflow.

## 🚀 Quick Start

1. The project will auto-start n8n
2. Import the workflow from `n8n_masjid_workflow_replit.json`
3. Update WhatsApp API key in "WhatsApp Sender" node
4. Activate workflow
5. Use webhook URL in your WhatsApp provider

## 📱 Webhook URL
```
{webhook_url}
```

## 🎯 Features
- 14 Islamic services (no health services)
- AI chat with OpenRouter
- Supabase analytics
- Multi-provider WhatsApp support

## 🔧 Configuration
All API keys are pre-configured in the workflow JSON file.
Only WhatsApp API key needs to be updated.
"##
    )
}

/// Overwrite the README with freshly rendered content.
///
/// Returns whether the file was written (false only in dry-run mode).
pub async fn write_readme(
    setup_command: &SetupCommand,
    out: &mut dyn Write,
) -> Result<bool, SetupError> {
    let path = setup_command.readme_path();

    if setup_command.dry_run {
        writeln!(out, "\nWould write {}", path.display())?;
        return Ok(false);
    }

    let contents = render_readme(setup_command.environment());
    setup_command
        .fs_ops()
        .write(path, contents.as_bytes())
        .await
        .map_err(|source| SetupError::Write {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::info!(path = %path.display(), bytes = contents.len(), "README written");
    writeln!(out, "\n✅ Created README.md for Replit")?;
    Ok(true)
}
