//! Infrastructure configuration modules.

pub mod icons;
pub mod logging;
pub mod market;
pub mod settings;
pub mod site;
