//! FunTranslations client.

pub mod client;

pub use client::{FunTranslationsClient, FunTranslationsClientConfig};
