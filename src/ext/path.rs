use std::path::{Component, Path};

use crate::error::{Error, Result};

/// Extension trait for Path used when turning rendered templates into targets
pub trait PathExt {
    /// Converts a path to a string slice, returning an error if the path contains
    /// invalid Unicode characters.
    ///
    /// # Returns
    /// * `Ok(&str)` - A string slice representing the path
    /// * `Err(Error)` - If the path contains invalid Unicode characters
    ///
    /// # Examples
    /// ```
    /// use codecraft::ext::PathExt;
    /// use std::path::Path;
    ///
    /// let path = Path::new("test");
    /// assert_eq!(path.to_str_checked().unwrap(), "test");
    /// ```
    fn to_str_checked(&self) -> Result<&str>;

    /// Whether joining this path onto a root keeps the result inside that root.
    ///
    /// Absolute paths, drive prefixes and `..` segments escape the root; an empty
    /// path is treated as the root itself.
    ///
    /// # Examples
    /// ```
    /// use codecraft::ext::PathExt;
    /// use std::path::Path;
    ///
    /// assert!(Path::new("src/app/main.py").is_contained());
    /// assert!(!Path::new("../outside").is_contained());
    /// ```
    fn is_contained(&self) -> bool;

    /// Whether the path is exactly one normal component, usable as a file or directory name.
    fn is_plain_name(&self) -> bool;
}

impl PathExt for Path {
    fn to_str_checked(&self) -> Result<&str> {
        self.to_str().ok_or_else(|| {
            Error::Other(anyhow::anyhow!(
                "Path '{}' contains invalid Unicode characters",
                self.display()
            ))
        })
    }

    fn is_contained(&self) -> bool {
        self.components()
            .all(|component| matches!(component, Component::Normal(_) | Component::CurDir))
    }

    fn is_plain_name(&self) -> bool {
        let mut components = self.components();
        matches!((components.next(), components.next()), (Some(Component::Normal(_)), None))
    }
}
