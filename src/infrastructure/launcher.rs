// SPDX-License-Identifier: MPL-2.0
//! Opening URLs in the user's default browser.
//!
//! Fire-and-forget: the browser process is detached and nothing is read
//! back from it.

use crate::error::{Error, Result};

/// Asks the OS to open `url` in a new browser window or tab.
pub fn open_in_browser(url: &str) -> Result<()> {
    if !url.starts_with("https://") {
        return Err(Error::Launch(format!("refusing to open non-https url: {url}")));
    }
    open::that_detached(url).map_err(|err| Error::Launch(err.to_string()))?;
    tracing::info!(url, "opened external map");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_https_urls() {
        let err = open_in_browser("file:///etc/passwd").expect_err("must be rejected");
        assert!(matches!(err, Error::Launch(message) if message.contains("non-https")));
    }
}
