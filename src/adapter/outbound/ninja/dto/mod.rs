//! poe.ninja data transfer objects.

pub mod response;
