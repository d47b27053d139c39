//! Saving the endpoint configuration through the server-side write script

use super::transport::Transport;
use crate::{Result, codec, config::Settings, types::Configuration};
use tracing::{debug, info};

/// Default location of the write script, relative to the base URL
pub const DEFAULT_WRITE_PATH: &str = "js/write.php";

/// File name the write script stores the configuration in
pub const DEFAULT_TARGET_FILE: &str = "config.txt";

/// Encodes a configuration and posts it to the write script
#[derive(Debug)]
pub struct ConfigSaver<T> {
    transport: T,
    write_path: String,
    target_file: String,
}

impl<T: Transport> ConfigSaver<T> {
    /// Create a saver using the default write path and target file
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            write_path: DEFAULT_WRITE_PATH.to_string(),
            target_file: DEFAULT_TARGET_FILE.to_string(),
        }
    }

    /// Create a saver using the paths named in the settings
    pub fn from_settings(transport: T, settings: &Settings) -> Self {
        Self {
            transport,
            write_path: settings.remote.write_path.clone(),
            target_file: settings.remote.target_file.clone(),
        }
    }

    /// Override the write script path
    pub fn with_write_path(mut self, write_path: impl Into<String>) -> Self {
        self.write_path = write_path.into();
        self
    }

    /// Override the target file name
    pub fn with_target_file(mut self, target_file: impl Into<String>) -> Self {
        self.target_file = target_file.into();
        self
    }

    /// Send the configuration and return the server's raw answer.
    ///
    /// Invalid values are rejected before anything is sent.
    pub async fn save_config(&self, config: &Configuration) -> Result<String> {
        let message = codec::encode(config)?;
        debug!(
            "Saving endpoint configuration to {} via {}",
            self.target_file, self.write_path
        );

        let answer = self
            .transport
            .submit_form(
                &self.write_path,
                &[("message", message.as_str()), ("file", self.target_file.as_str())],
            )
            .await?;

        info!("Write script answered: {}", answer.trim());
        Ok(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;

    type Submission = (String, Vec<(String, String)>);

    /// Records submissions and answers with a fixed reply
    #[derive(Debug, Default)]
    struct RecordingTransport {
        submissions: Mutex<Vec<Submission>>,
    }

    #[async_trait::async_trait]
    impl Transport for RecordingTransport {
        async fn fetch_text(&self, _path: &str) -> Result<String> {
            unreachable!("saver never reads")
        }

        async fn submit_form(&self, path: &str, fields: &[(&str, &str)]) -> Result<String> {
            let fields = fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            self.submissions
                .lock()
                .unwrap()
                .push((path.to_string(), fields));
            Ok("gespeichert".to_string())
        }
    }

    #[tokio::test]
    async fn test_save_config_payload() {
        let saver = ConfigSaver::new(RecordingTransport::default());

        let answer = saver
            .save_config(&Configuration::new("a", "b", "c"))
            .await
            .unwrap();

        assert_eq!(answer, "gespeichert");
        let submissions = saver.transport.submissions.lock().unwrap();
        assert_eq!(submissions.len(), 1);

        let (path, fields) = &submissions[0];
        assert_eq!(path, "js/write.php");
        assert_eq!(
            fields,
            &vec![
                (
                    "message".to_string(),
                    "ipLogin:a;\nipChat:b;\nipRegister:c;".to_string()
                ),
                ("file".to_string(), "config.txt".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_save_config_custom_target() {
        let saver = ConfigSaver::new(RecordingTransport::default())
            .with_write_path("admin/write.php")
            .with_target_file("endpoints.txt");

        saver
            .save_config(&Configuration::new("a", "b", "c"))
            .await
            .unwrap();

        let submissions = saver.transport.submissions.lock().unwrap();
        assert_eq!(submissions[0].0, "admin/write.php");
        assert_eq!(submissions[0].1[1].1, "endpoints.txt");
    }

    #[tokio::test]
    async fn test_save_config_rejects_invalid_value_before_sending() {
        let saver = ConfigSaver::new(RecordingTransport::default());

        let err = saver
            .save_config(&Configuration::new("a", "b", "c;d"))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::InvalidValue { .. }));
        assert!(saver.transport.submissions.lock().unwrap().is_empty());
    }
}
