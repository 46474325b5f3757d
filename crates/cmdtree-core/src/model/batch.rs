use serde::{Deserialize, Serialize};

use super::path::CommandPath;

/// Commands that enter configuration context before a create or remove path
pub const CONFIG_CONTEXT: [&str; 2] = ["enable", "configure"];

/// Commands that read back the running configuration
pub const DEFAULT_OBSERVE: [&str; 2] = ["enable", "show running-config"];

/// CommandBatch - commands sent to the remote system as one unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommandBatch(Vec<String>);

impl CommandBatch {
    pub fn new<I, S>(commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(commands.into_iter().map(Into::into).collect())
    }

    /// Configuration-context entry followed by `path`
    pub fn in_config_context(path: &CommandPath) -> Self {
        Self::new(
            CONFIG_CONTEXT
                .iter()
                .map(|s| s.to_string())
                .chain(path.iter().cloned()),
        )
    }

    /// The observe batch used when the caller supplies none
    pub fn default_observe() -> Self {
        Self::new(DEFAULT_OBSERVE)
    }

    pub fn commands(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Commands after the configuration-context entry
    pub fn configure_segment(&self) -> &[String] {
        if self.0.len() >= CONFIG_CONTEXT.len()
            && self.0.iter().zip(CONFIG_CONTEXT).all(|(a, b)| a == b)
        {
            &self.0[CONFIG_CONTEXT.len()..]
        } else {
            &self.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_config_context_prefixes_path() {
        let path = CommandPath::new(["interface Ethernet1", "description uplink"]).unwrap();
        let batch = CommandBatch::in_config_context(&path);

        assert_eq!(
            batch.commands(),
            ["enable", "configure", "interface Ethernet1", "description uplink"]
        );
        assert_eq!(batch.configure_segment(), path.segments());
    }

    #[test]
    fn test_configure_segment_without_context_is_whole_batch() {
        let batch = CommandBatch::default_observe();
        assert_eq!(batch.configure_segment(), batch.commands());
    }

    #[test]
    fn test_serializes_as_plain_list() {
        let batch = CommandBatch::new(["show version"]);
        assert_eq!(serde_json::to_string(&batch).unwrap(), r#"["show version"]"#);
    }
}
