/*!
 * Copyright (c) 2026 Ming Lyu, aka mingcheng
 *
 * This source code is licensed under the MIT License,
 * which is located in the LICENSE file in the source tree's root directory.
 *
 * File: lib.rs
 * Author: mingcheng <mingcheng@apache.org>
 * File Created: 2026-03-02 10:02:18
 *
 * Modified By: mingcheng <mingcheng@apache.org>
 * Last Modified: 2026-03-06 17:10:35
 */

//! Test assertions over the emails an application writes to a directory
//! instead of handing them to an SMTP server.
//!
//! ```no_run
//! use mail_assertions::MailAssertions;
//!
//! let mails = MailAssertions::new("/tmp/app-mails");
//! mails.assert_email_sent_count(1);
//! mails.assert_email_sent_by_recipient("a@x.com", None, None, Some(r"/Order #\d+/"));
//! mails.assert_email_sent_by_subject("/Welcome/i", Some("a@x.com"), None, None);
//! ```

pub mod assertions;
pub mod config;
pub mod email;
pub mod error;
pub mod logging;
pub mod pattern;
pub mod store;
pub mod traits;

pub use assertions::MailAssertions;
pub use crate::config::MailAssertConfig;
pub use email::ParsedEmail;
pub use error::{MailAssertError, Result};
pub use pattern::SubjectPattern;
pub use store::{DEFAULT_ARTIFACT_PREFIX, MalformedPolicy, list_generated_emails};
pub use traits::MailPath;
