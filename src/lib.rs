//! Pixgen - AI image generation adapter.
//!
//! One public operation: [`ImageService::generate_and_save_image`] turns a
//! text prompt into a saved image file by calling a remote generation API,
//! decoding the returned base64 payload, and writing it to a caller-supplied
//! path (creating parent directories as needed).

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod output;
pub mod ports;
pub mod service;

pub use config::Config;
pub use context::ServiceContext;
pub use error::ImageError;
pub use service::ImageService;
