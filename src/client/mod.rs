//! Client side of the endpoint configuration
//!
//! Loads the configuration file from the web server, saves edited values back
//! through the write script and reports the outcome to the user.

pub mod form;
pub mod loader;
pub mod saver;
pub mod transport;

pub use form::{EndpointForm, Notifier, SAVE_FAILED_MESSAGE, submit_form};
pub use loader::ConfigLoader;
pub use saver::ConfigSaver;
pub use transport::{HttpTransport, Transport};
