use crate::email::ParsedEmail;
use crate::error::{MailAssertError, Result};
use log::{debug, trace, warn};
use std::fs;
use std::path::Path;

/// File name marker the Zend file transport gives its mail dumps.
pub const DEFAULT_ARTIFACT_PREFIX: &str = "ZendMail_";

/// What to do with an artifact whose header block cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedPolicy {
    #[default]
    Fail,
    Skip,
}

#[cfg(test)]
#[path = "./store_tests.rs"]
mod store_tests;

/// Reads every mail artifact currently in `dir`.
///
/// Only regular files whose name starts with `prefix` are considered. The
/// directory is scanned afresh on each call.
pub fn list_generated_emails(
    dir: &Path,
    prefix: &str,
    policy: MalformedPolicy,
) -> Result<Vec<ParsedEmail>> {
    let entries = fs::read_dir(dir).map_err(|e| MailAssertError::io(dir, e))?;

    let mut emails = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| MailAssertError::io(dir, e))?;
        let path = entry.path();

        let recognized = entry
            .file_name()
            .as_encoded_bytes()
            .starts_with(prefix.as_bytes());
        if !recognized || !path.is_file() {
            continue;
        }

        let raw = fs::read(&path).map_err(|e| MailAssertError::io(&path, e))?;
        match ParsedEmail::parse(&path, &raw) {
            Ok(email) => {
                trace!("Parsed mail artifact {} (to: {})", path.display(), email.to);
                emails.push(email);
            }
            Err(reason) if policy == MalformedPolicy::Skip => {
                warn!("Skipping malformed mail artifact {}: {}", path.display(), reason);
            }
            Err(reason) => return Err(MailAssertError::Parse { path, reason }),
        }
    }

    emails.sort_by(|a, b| a.path.cmp(&b.path));

    debug!(
        "Found {} mail artifacts in {}",
        emails.len(),
        dir.display()
    );
    Ok(emails)
}
