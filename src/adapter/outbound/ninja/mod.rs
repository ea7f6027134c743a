//! poe.ninja adapters: the currency-overview client and the icon downloader.

pub mod client;
pub mod dto;
pub mod icon;

pub use client::NinjaClient;
pub use icon::HttpIconSource;
