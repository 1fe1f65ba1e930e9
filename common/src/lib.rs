//! Shared core of the QueueDroid dashboard.
//!
//! - `model` - queue, exchange and message records exchanged with the API
//! - `csv` - recipient-file validation, preview and bulk-send payloads
//! - `cache` - the client-side queue overlay merged onto exchange listings
//! - `requests` - response envelopes of the REST API
//! - `config` - storage keys and upload limits
//!
//! Nothing here touches the browser directly: file reading and key-value
//! storage come in through the `CsvSource` and `KeyValueStorage` traits.

pub mod cache;
pub mod config;
pub mod csv;
pub mod model;
pub mod requests;
