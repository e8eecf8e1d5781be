// Blog generation request handler and its cloud adapters
pub mod blog;
pub mod config;
pub mod models;

// HTTP Server modules
pub mod handlers;
pub mod routes;

// Vertex AI / Cloud Storage
pub mod gcp;
pub mod llm;
pub mod storage;
