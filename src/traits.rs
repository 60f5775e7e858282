use std::path::{Path, PathBuf};

/// Supplies the directory the code under test writes its mail artifacts to.
#[cfg_attr(test, mockall::automock)]
pub trait MailPath {
    fn mail_path(&self) -> PathBuf;
}

impl MailPath for Path {
    fn mail_path(&self) -> PathBuf {
        self.to_path_buf()
    }
}

impl MailPath for PathBuf {
    fn mail_path(&self) -> PathBuf {
        self.clone()
    }
}

impl MailPath for str {
    fn mail_path(&self) -> PathBuf {
        PathBuf::from(self)
    }
}

impl MailPath for String {
    fn mail_path(&self) -> PathBuf {
        PathBuf::from(self)
    }
}

impl<T: MailPath + ?Sized> MailPath for &T {
    fn mail_path(&self) -> PathBuf {
        (**self).mail_path()
    }
}
