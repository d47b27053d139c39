//! Serialized form of the endpoint configuration
//!
//! The web server stores the configuration as `label:value;` records joined by
//! newlines, always in the order login, chat, register:
//!
//! ```text
//! ipLogin:1.2.3.4:8080;
//! ipChat:1.2.3.4:8081;
//! ipRegister:1.2.3.4:8082;
//! ```
//!
//! Values may contain `:` but never `;` or a line break.

pub mod decode;
pub mod encode;

pub use decode::decode;
pub use encode::{encode, validate_value};

/// Terminates every record
pub const RECORD_TERMINATOR: char = ';';

/// Separates a label from its value
pub const LABEL_SEPARATOR: char = ':';

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Configuration;
    use rstest::rstest;

    #[rstest]
    #[case("1.2.3.4:8080", "1.2.3.4:8081", "1.2.3.4:8082")]
    #[case("", "", "")]
    #[case("http://login.example.org:5001/", "ws://chat:5000", "register-server")]
    #[case(" padded ", "\ttab", "ünïcödé:1")]
    #[case("a:b:c", "::", ":")]
    fn test_round_trip(#[case] login: &str, #[case] chat: &str, #[case] register: &str) {
        let config = Configuration::new(login, chat, register);
        let encoded = encode(&config).unwrap();

        assert_eq!(decode(&encoded).unwrap(), config);
    }
}
