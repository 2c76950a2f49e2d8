use serde::{Deserialize, Serialize};

/// Host platform; gates the IME-parity spellings that differ per OS.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatingSystem {
    #[default]
    None,
    Windows,
    Mac,
}

impl OperatingSystem {
    /// Platform this binary was compiled for.
    pub fn host() -> Self {
        if cfg!(target_os = "windows") {
            OperatingSystem::Windows
        } else if cfg!(target_os = "macos") {
            OperatingSystem::Mac
        } else {
            OperatingSystem::None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OperatingSystem::None => "none",
            OperatingSystem::Windows => "windows",
            OperatingSystem::Mac => "mac",
        }
    }
}

impl std::str::FromStr for OperatingSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(OperatingSystem::None),
            "windows" => Ok(OperatingSystem::Windows),
            "mac" | "macos" => Ok(OperatingSystem::Mac),
            other => Err(format!("unknown operating system: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names() {
        assert_eq!("windows".parse::<OperatingSystem>(), Ok(OperatingSystem::Windows));
        assert_eq!("MacOS".parse::<OperatingSystem>(), Ok(OperatingSystem::Mac));
        assert_eq!("none".parse::<OperatingSystem>(), Ok(OperatingSystem::None));
        assert!("linux".parse::<OperatingSystem>().is_err());
    }

    #[test]
    fn as_str_parses_back() {
        for os in [OperatingSystem::None, OperatingSystem::Windows, OperatingSystem::Mac] {
            assert_eq!(os.as_str().parse::<OperatingSystem>(), Ok(os));
        }
    }
}
