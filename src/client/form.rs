//! The settings form: three input fields, a save action and user notification

use super::{saver::ConfigSaver, transport::Transport};
use crate::{
    Result,
    error::format_error_for_logging,
    types::{Configuration, EndpointField},
};
use tracing::error;

/// Message shown to the user when saving fails, whatever the cause
pub const SAVE_FAILED_MESSAGE: &str = "es ist ein Fehler aufgetreten";

/// User-visible notification channel
pub trait Notifier {
    /// Show a message to the user
    fn notify(&self, message: &str);
}

/// Raw contents of the three endpoint input fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndpointForm {
    /// `inputIpLogin`
    pub input_ip_login: String,
    /// `inputIpChat`
    pub input_ip_chat: String,
    /// `inputIpRegister`
    pub input_ip_register: String,
}

impl EndpointForm {
    /// Create a form with the given field contents
    pub fn new(
        login: impl Into<String>,
        chat: impl Into<String>,
        register: impl Into<String>,
    ) -> Self {
        Self {
            input_ip_login: login.into(),
            input_ip_chat: chat.into(),
            input_ip_register: register.into(),
        }
    }

    /// Current text of an input field
    pub fn value(&self, field: EndpointField) -> &str {
        match field {
            EndpointField::Login => &self.input_ip_login,
            EndpointField::Chat => &self.input_ip_chat,
            EndpointField::Register => &self.input_ip_register,
        }
    }

    /// Replace the text of an input field
    pub fn set_value(&mut self, field: EndpointField, value: impl Into<String>) {
        let slot = match field {
            EndpointField::Login => &mut self.input_ip_login,
            EndpointField::Chat => &mut self.input_ip_chat,
            EndpointField::Register => &mut self.input_ip_register,
        };
        *slot = value.into();
    }

    /// Configuration described by the current field contents
    pub fn to_configuration(&self) -> Configuration {
        Configuration::new(
            self.input_ip_login.clone(),
            self.input_ip_chat.clone(),
            self.input_ip_register.clone(),
        )
    }
}

impl From<&Configuration> for EndpointForm {
    fn from(config: &Configuration) -> Self {
        Self::new(
            config.login.clone(),
            config.chat.clone(),
            config.register.clone(),
        )
    }
}

/// Save the form and tell the user how it went.
///
/// The user is notified exactly once: with the server's raw answer on success,
/// or with [`SAVE_FAILED_MESSAGE`] on any failure. The detailed error is logged
/// and returned to the caller.
pub async fn submit_form<T, N>(
    saver: &ConfigSaver<T>,
    form: &EndpointForm,
    notifier: &N,
) -> Result<String>
where
    T: Transport,
    N: Notifier + ?Sized,
{
    match saver.save_config(&form.to_configuration()).await {
        Ok(answer) => {
            notifier.notify(&answer);
            Ok(answer)
        }
        Err(e) => {
            error!(details = %format_error_for_logging(&e), "Saving endpoint configuration failed");
            notifier.notify(SAVE_FAILED_MESSAGE);
            Err(e)
        }
    }
}
