pub mod configuration;
pub mod domain;
pub mod fixture;
pub mod petstore_client;
pub mod telemetry;
