//! Reading a configuration from the serialized form

use super::{LABEL_SEPARATOR, RECORD_TERMINATOR};
use crate::{
    Error, Result,
    types::{Configuration, EndpointField},
};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Parse the serialized form into a configuration.
///
/// Records are split on `;` and each record on its first `:`. Whitespace before
/// a label (the newline between records) is ignored, values are kept verbatim.
/// Unknown labels are skipped; a repeated or missing label is an error.
pub fn decode(input: &str) -> Result<Configuration> {
    let mut fragments: Vec<&str> = input.split(RECORD_TERMINATOR).collect();

    // Whatever follows the last terminator is not a record
    let tail = fragments.pop().unwrap_or_default();
    if !tail.trim().is_empty() {
        return Err(Error::parse(
            tail.trim(),
            "record is not terminated by ';'",
        ));
    }

    let mut values: HashMap<EndpointField, String> = HashMap::with_capacity(3);

    for fragment in fragments {
        let record = fragment.trim_start();
        let Some((label, value)) = record.split_once(LABEL_SEPARATOR) else {
            return Err(Error::parse(record, "expected ':' between label and value"));
        };
        let label = label.trim();

        match EndpointField::from_label(label) {
            Some(field) => {
                if values.insert(field, value.to_string()).is_some() {
                    return Err(Error::duplicate_field(label));
                }
            }
            None => warn!("Skipping unknown field '{}' in endpoint configuration", label),
        }
    }

    let mut take = |field: EndpointField| {
        values
            .remove(&field)
            .ok_or_else(|| Error::missing_field(field.label()))
    };

    let config = Configuration {
        login: take(EndpointField::Login)?,
        chat: take(EndpointField::Chat)?,
        register: take(EndpointField::Register)?,
    };

    debug!("Decoded endpoint configuration: {:?}", config);
    Ok(config)
}
