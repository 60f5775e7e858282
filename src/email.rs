/*!
 * Copyright (c) 2026 Ming Lyu, aka mingcheng
 *
 * This source code is licensed under the MIT License,
 * which is located in the LICENSE file in the source tree's root directory.
 *
 * File: email.rs
 * Author: mingcheng <mingcheng@apache.org>
 * File Created: 2026-03-02 11:40:07
 *
 * Modified By: mingcheng <mingcheng@apache.org>
 * Last Modified: 2026-03-05 09:21:44
 */

use mail_parser::{Header, MessageParser};
use std::path::{Path, PathBuf};

/// The headers of one generated email that assertions compare against.
///
/// Optional headers that are missing from the artifact are `None`. A header
/// that is present with an empty value is `Some("")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEmail {
    pub path: PathBuf,
    pub to: String,
    pub cc: Option<String>,
    /// Blind copy recipients, from `Ccn:` or else `Bcc:`.
    pub ccn: Option<String>,
    pub subject: Option<String>,
}

impl ParsedEmail {
    /// Parses the header block of a raw artifact.
    ///
    /// Returns the reason as an error string when the artifact has no header
    /// block or no non-empty `To:` header.
    pub fn parse(path: impl Into<PathBuf>, raw: &[u8]) -> Result<Self, String> {
        let path = path.into();
        let message = MessageParser::default()
            .parse(raw)
            .ok_or_else(|| "no header block found".to_string())?;
        let headers = message.headers();

        let to = header_text(raw, headers, "To").ok_or_else(|| "missing To header".to_string())?;
        if to.is_empty() {
            return Err("empty To header".to_string());
        }
        let cc = header_text(raw, headers, "Cc");
        let ccn = header_text(raw, headers, "Ccn").or_else(|| header_text(raw, headers, "Bcc"));

        // prefer the decoded form so encoded words compare as plain text
        let subject = header_text(raw, headers, "Subject").map(|unfolded| {
            message
                .subject()
                .map_or(unfolded, |decoded| decoded.trim().to_string())
        });

        Ok(Self {
            path,
            to,
            cc,
            ccn,
            subject,
        })
    }

    pub fn file_name(&self) -> &Path {
        self.path.file_name().map_or(self.path.as_path(), Path::new)
    }
}

// First header with a matching name, unfolded and trimmed.
fn header_text(raw: &[u8], headers: &[Header<'_>], name: &str) -> Option<String> {
    let header = headers
        .iter()
        .find(|h| h.name().eq_ignore_ascii_case(name))?;
    let start = header.offset_start as usize;
    let end = header.offset_end as usize;

    let value = raw.get(start..end).unwrap_or_default();
    Some(unfold(&String::from_utf8_lossy(value)))
}

fn unfold(value: &str) -> String {
    value
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
