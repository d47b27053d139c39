//! Endpoint configuration type definitions
//!
//! Defines the `Configuration` value object exchanged with the web server and
//! the fixed set of fields it carries.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three server roles in the configuration.
///
/// The variant order is the order in which fields appear in the serialized form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndpointField {
    /// Login server
    Login,
    /// Chat server
    Chat,
    /// Registration server
    Register,
}

impl EndpointField {
    /// All fields in serialized order
    pub const ALL: [EndpointField; 3] = [Self::Login, Self::Chat, Self::Register];

    /// Label used in the serialized form
    pub fn label(self) -> &'static str {
        match self {
            Self::Login => "ipLogin",
            Self::Chat => "ipChat",
            Self::Register => "ipRegister",
        }
    }

    /// Identifier of the input field that edits this value
    pub fn input_id(self) -> &'static str {
        match self {
            Self::Login => "inputIpLogin",
            Self::Chat => "inputIpChat",
            Self::Register => "inputIpRegister",
        }
    }

    /// Look up a field by its serialized label
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.label() == label)
    }
}

impl fmt::Display for EndpointField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The endpoints the messenger client talks to.
///
/// Built once by a load (or from the settings form) and never mutated in place;
/// a newer load produces a new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// Login server address
    #[serde(rename = "ipLogin")]
    pub login: String,

    /// Chat server address
    #[serde(rename = "ipChat")]
    pub chat: String,

    /// Registration server address
    #[serde(rename = "ipRegister")]
    pub register: String,
}

impl Configuration {
    /// Create a configuration from the three addresses
    pub fn new(
        login: impl Into<String>,
        chat: impl Into<String>,
        register: impl Into<String>,
    ) -> Self {
        Self {
            login: login.into(),
            chat: chat.into(),
            register: register.into(),
        }
    }

    /// Value of a single field
    pub fn get(&self, field: EndpointField) -> &str {
        match field {
            EndpointField::Login => &self.login,
            EndpointField::Chat => &self.chat,
            EndpointField::Register => &self.register,
        }
    }

    /// Fields and values in serialized order
    pub fn entries(&self) -> impl Iterator<Item = (EndpointField, &str)> {
        EndpointField::ALL
            .into_iter()
            .map(move |field| (field, self.get(field)))
    }
}
