/*!
 * Copyright (c) 2026 Ming Lyu, aka mingcheng
 *
 * This source code is licensed under the MIT License,
 * which is located in the LICENSE file in the source tree's root directory.
 *
 * File: assertions.rs
 * Author: mingcheng <mingcheng@apache.org>
 * File Created: 2026-03-02 14:03:29
 *
 * Modified By: mingcheng <mingcheng@apache.org>
 * Last Modified: 2026-03-06 16:47:12
 */

use crate::config::MailAssertConfig;
use crate::email::ParsedEmail;
use crate::error::{MailAssertError, Result};
use crate::pattern::SubjectPattern;
use crate::store::{self, DEFAULT_ARTIFACT_PREFIX, MalformedPolicy};
use crate::traits::MailPath;
use log::debug;

/// Assertions over the emails the code under test has written to disk.
///
/// Every call rescans the mail directory; nothing is cached between calls.
/// `check_*` methods report the outcome as a `Result`, `assert_*` methods
/// panic with the diagnostic message.
pub struct MailAssertions<P: MailPath> {
    source: P,
    prefix: String,
    policy: MalformedPolicy,
}

#[cfg(test)]
#[path = "./assertions_tests.rs"]
mod assertions_tests;

impl<P: MailPath> MailAssertions<P> {
    pub fn new(source: P) -> Self {
        Self {
            source,
            prefix: DEFAULT_ARTIFACT_PREFIX.to_string(),
            policy: MalformedPolicy::default(),
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_malformed_policy(mut self, policy: MalformedPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn generated_emails(&self) -> Result<Vec<ParsedEmail>> {
        let dir = self.source.mail_path();
        store::list_generated_emails(&dir, &self.prefix, self.policy)
    }

    pub fn check_email_sent_count(&self, expected: usize) -> Result<()> {
        let count = self.generated_emails()?.len();
        if count != expected {
            return Err(MailAssertError::assertion(format!(
                "Expected {expected} emails, but {count} found"
            )));
        }
        Ok(())
    }

    /// Checks every email addressed to `to`.
    ///
    /// Each of them must carry exactly the given `cc` and `ccn` (`None`
    /// expects the header to be absent) and, when a pattern is given, a
    /// subject matching it.
    pub fn check_email_sent_by_recipient(
        &self,
        to: &str,
        cc: Option<&str>,
        ccn: Option<&str>,
        subject_pattern: Option<&str>,
    ) -> Result<()> {
        let pattern = subject_pattern.map(SubjectPattern::new).transpose()?;
        let emails = self.generated_emails()?;

        let matches: Vec<&ParsedEmail> = emails.iter().filter(|e| e.to == to).collect();
        if matches.is_empty() {
            return Err(MailAssertError::assertion(format!(
                "Email to '{to}' not sent"
            )));
        }

        debug!("{} emails sent to '{}'", matches.len(), to);
        for email in matches {
            expect_field("CC", email.cc.as_deref(), cc)?;
            expect_field("CCN", email.ccn.as_deref(), ccn)?;

            if let Some(pattern) = &pattern {
                expect_subject(email, pattern)?;
            }
        }

        Ok(())
    }

    /// Checks every email whose subject matches `subject_pattern`.
    ///
    /// `to` is only compared when given; `cc` and `ccn` are always compared,
    /// with `None` expecting the header to be absent.
    pub fn check_email_sent_by_subject(
        &self,
        subject_pattern: &str,
        to: Option<&str>,
        cc: Option<&str>,
        ccn: Option<&str>,
    ) -> Result<()> {
        let pattern = SubjectPattern::new(subject_pattern)?;
        let emails = self.generated_emails()?;

        let matches: Vec<&ParsedEmail> = emails
            .iter()
            .filter(|e| e.subject.as_deref().is_some_and(|s| pattern.is_match(s)))
            .collect();
        if matches.is_empty() {
            return Err(MailAssertError::assertion(format!(
                "Email subjects doesn't match '{pattern}'"
            )));
        }

        debug!("{} emails match subject '{}'", matches.len(), pattern);
        for email in matches {
            if let Some(to) = to {
                expect_field("TO", Some(email.to.as_str()), Some(to))?;
            }
            expect_field("CC", email.cc.as_deref(), cc)?;
            expect_field("CCN", email.ccn.as_deref(), ccn)?;
        }

        Ok(())
    }

    #[track_caller]
    pub fn assert_email_sent_count(&self, expected: usize) {
        report(self.check_email_sent_count(expected));
    }

    #[track_caller]
    pub fn assert_email_sent_by_recipient(
        &self,
        to: &str,
        cc: Option<&str>,
        ccn: Option<&str>,
        subject_pattern: Option<&str>,
    ) {
        report(self.check_email_sent_by_recipient(to, cc, ccn, subject_pattern));
    }

    #[track_caller]
    pub fn assert_email_sent_by_subject(
        &self,
        subject_pattern: &str,
        to: Option<&str>,
        cc: Option<&str>,
        ccn: Option<&str>,
    ) {
        report(self.check_email_sent_by_subject(subject_pattern, to, cc, ccn));
    }
}

impl MailAssertions<MailAssertConfig> {
    pub fn from_config(config: MailAssertConfig) -> Self {
        let prefix = config.artifact_prefix.clone();
        let policy = config.malformed_policy();
        Self::new(config)
            .with_prefix(prefix)
            .with_malformed_policy(policy)
    }
}

fn expect_field(field: &str, actual: Option<&str>, expected: Option<&str>) -> Result<()> {
    if actual == expected {
        return Ok(());
    }
    Err(MailAssertError::assertion(format!(
        "Email field {field} [{}] doesn't match [{}]",
        display_value(actual),
        display_value(expected)
    )))
}

fn expect_subject(email: &ParsedEmail, pattern: &SubjectPattern) -> Result<()> {
    let subject = email.subject.as_deref();
    if subject.is_some_and(|s| pattern.is_match(s)) {
        return Ok(());
    }
    Err(MailAssertError::assertion(format!(
        "Subject [{}] doesn't contain [{pattern}]",
        display_value(subject)
    )))
}

fn display_value(value: Option<&str>) -> &str {
    value.unwrap_or("(none)")
}

#[track_caller]
fn report(outcome: Result<()>) {
    if let Err(e) = outcome {
        panic!("{e}");
    }
}
