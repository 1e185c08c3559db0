use crate::shared::error::AuditError;
use crate::shared::Result;
use std::fmt;

/// A build target configuration, i.e. one `GOOS` value
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TargetConfig(String);

impl TargetConfig {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(AuditError::InvalidArgument {
                argument: format!("{:?}", name),
                reason: "target configuration names must not be empty".to_string(),
                hint: "Pass a comma-separated list without empty entries, e.g. --goos linux,darwin"
                    .to_string(),
            }
            .into());
        }
        Ok(Self(name))
    }

    /// Parses a comma-separated list such as `linux,darwin,windows`
    pub fn parse_list(list: &str) -> Result<Vec<Self>> {
        list.split(',').map(Self::new).collect()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Column marker: the uppercased first character of the name
    pub fn marker(&self) -> char {
        self.0
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or(' ')
    }
}

impl fmt::Display for TargetConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
