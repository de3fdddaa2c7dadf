// ABOUTME: Custom serde deserializers for config types.
// ABOUTME: Accepts command lines as a single string or as an argument list.

use nonempty::NonEmpty;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CommandEntry {
    Simple(String),
    Detailed(Vec<String>),
}

impl CommandEntry {
    fn into_argv(self) -> Result<NonEmpty<String>, String> {
        let argv = match self {
            // Split on whitespace; use the list form for arguments with spaces.
            CommandEntry::Simple(s) => s.split_whitespace().map(ToString::to_string).collect(),
            CommandEntry::Detailed(args) => args,
        };

        NonEmpty::from_vec(argv).ok_or_else(|| "command cannot be empty".to_string())
    }
}

pub fn deserialize_command<'de, D>(deserializer: D) -> Result<NonEmpty<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    CommandEntry::deserialize(deserializer)?
        .into_argv()
        .map_err(serde::de::Error::custom)
}

pub fn deserialize_non_blank<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(serde::de::Error::custom("value cannot be blank"));
    }
    Ok(trimmed.to_string())
}
