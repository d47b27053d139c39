//! Writing a configuration in the serialized form

use super::{LABEL_SEPARATOR, RECORD_TERMINATOR};
use crate::{
    Error, Result,
    types::{Configuration, EndpointField},
};

/// Serialize a configuration.
///
/// Every value is validated first so that nothing is produced that the
/// decoder would read back differently. `\r` counts as a line break, like
/// `\n`, since the records are edited and stored as text lines.
pub fn encode(config: &Configuration) -> Result<String> {
    let mut out = String::new();

    for (index, (field, value)) in config.entries().enumerate() {
        validate_value(field, value)?;

        if index > 0 {
            out.push('\n');
        }
        out.push_str(field.label());
        out.push(LABEL_SEPARATOR);
        out.push_str(value);
        out.push(RECORD_TERMINATOR);
    }

    Ok(out)
}

/// Reject values that would break the record structure: `;`, `\n` or `\r`
pub fn validate_value(field: EndpointField, value: &str) -> Result<()> {
    match value
        .chars()
        .find(|c| *c == RECORD_TERMINATOR || *c == '\n' || *c == '\r')
    {
        Some(c) => Err(Error::invalid_value(
            field.label(),
            value,
            format!("must not contain {:?}", c),
        )),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_encode_literal() {
        let config = Configuration::new("a", "b", "c");
        assert_eq!(
            encode(&config).unwrap(),
            "ipLogin:a;\nipChat:b;\nipRegister:c;"
        );
    }

    #[test]
    fn test_encode_host_port_values() {
        let config = Configuration::new("10.0.0.1:5001", "10.0.0.1:5000", "10.0.0.1:5002");
        assert_eq!(
            encode(&config).unwrap(),
            "ipLogin:10.0.0.1:5001;\nipChat:10.0.0.1:5000;\nipRegister:10.0.0.1:5002;"
        );
    }

    #[test]
    fn test_encode_rejects_semicolon() {
        let config = Configuration::new("a", "b;c", "d");
        let err = encode(&config).unwrap_err();

        match err {
            Error::InvalidValue { field, value, .. } => {
                assert_eq!(field, "ipChat");
                assert_eq!(value, "b;c");
            }
            other => panic!("Expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn test_encode_rejects_line_breaks() {
        assert!(encode(&Configuration::new("a\n", "b", "c")).is_err());
        assert!(encode(&Configuration::new("a", "b", "c\r")).is_err());
    }

    #[test]
    fn test_validate_value_rejects_inner_carriage_return() {
        let err = validate_value(EndpointField::Register, "a\rb").unwrap_err();
        assert!(err.to_string().contains("'\\r'"));
    }

    #[test]
    fn test_validate_value_accepts_colons() {
        assert!(validate_value(EndpointField::Login, "http://host:80/path").is_ok());
    }
}
