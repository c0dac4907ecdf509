//! Document validation command.

use anyhow::Context;

use tempo_core::upload::validate_upload;

use crate::cli::ValidateArgs;

/// Validate each file independently; one bad file does not stop the
/// batch, but any failure makes the command exit non-zero.
pub fn run(args: &ValidateArgs) -> anyhow::Result<()> {
    let mut invalid = 0usize;

    for path in &args.files {
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;

        let validation = validate_upload(name, &content);
        if validation.is_valid() {
            let document = validation.document.expect("valid uploads carry a document");
            println!(
                "{}: ok ({} entities{})",
                path.display(),
                document.entities.len(),
                if document.dct.is_some() { ", dct" } else { "" },
            );
        } else {
            invalid += 1;
            println!("{}: invalid", path.display());
            for error in &validation.errors {
                println!("  - {error}");
            }
        }
    }

    if invalid > 0 {
        anyhow::bail!("{invalid} of {} file(s) failed validation", args.files.len());
    }
    Ok(())
}
