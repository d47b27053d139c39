//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

#![allow(dead_code)]

use messenger_endpoints::{
    Configuration, Settings,
    client::{ConfigLoader, ConfigSaver, HttpTransport},
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Body of the configuration file used across tests
pub const SAMPLE_BODY: &str =
    "ipLogin:1.2.3.4:8080;\nipChat:1.2.3.4:8081;\nipRegister:1.2.3.4:8082;";

/// Test settings pointing at a mock server
pub fn settings_for(server: &MockServer) -> Settings {
    let mut settings = Settings::default();
    settings.remote.base_url = format!("{}/secure_messenger/", server.uri());
    settings.network.request_timeout = 5;
    settings.network.connect_timeout = 2;
    settings
}

/// Loader talking to the mock server
pub fn loader_for(server: &MockServer) -> ConfigLoader<HttpTransport> {
    let settings = settings_for(server);
    ConfigLoader::from_settings(HttpTransport::new(&settings).unwrap(), &settings)
}

/// Saver talking to the mock server
pub fn saver_for(server: &MockServer) -> ConfigSaver<HttpTransport> {
    let settings = settings_for(server);
    ConfigSaver::from_settings(HttpTransport::new(&settings).unwrap(), &settings)
}

/// Sample configuration matching `SAMPLE_BODY`
pub fn sample_configuration() -> Configuration {
    Configuration::new("1.2.3.4:8080", "1.2.3.4:8081", "1.2.3.4:8082")
}

/// Mock server factory
pub struct MockServerFactory;

impl MockServerFactory {
    /// Serve a configuration file body
    pub async fn serve_config(server: &MockServer, body: &str) {
        Mock::given(method("GET"))
            .and(path("/secure_messenger/js/config.txt"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(server)
            .await;
    }

    /// Accept writes with a plain-text acknowledgment
    pub async fn accept_writes(server: &MockServer, answer: &str) {
        Mock::given(method("POST"))
            .and(path("/secure_messenger/js/write.php"))
            .respond_with(ResponseTemplate::new(200).set_body_string(answer))
            .mount(server)
            .await;
    }

    /// Fail every write
    pub async fn reject_writes(server: &MockServer) {
        Mock::given(method("POST"))
            .and(path("/secure_messenger/js/write.php"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .mount(server)
            .await;
    }
}

/// Form fields of a received request
pub fn form_fields(request: &wiremock::Request) -> Vec<(String, String)> {
    url::form_urlencoded::parse(&request.body)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

/// Initialize test logging
pub fn init_logger() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("debug")
        .try_init();
}
