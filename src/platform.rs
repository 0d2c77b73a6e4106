use crate::error::{Error, Result};

pub const SUPPORTED_OS: &str = "macos";

/// Operating system this binary was built for.
pub fn host_os() -> &'static str {
    std::env::consts::OS
}

pub fn ensure_supported(os: &str) -> Result<()> {
    if os == SUPPORTED_OS {
        Ok(())
    } else {
        Err(Error::UnsupportedPlatform { os: os.to_owned() })
    }
}
