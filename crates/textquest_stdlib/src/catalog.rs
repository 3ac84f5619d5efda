//! Plugins by name.

use std::rc::Rc;

use textquest_engine::{Plugin, PluginRegistry};
use textquest_foundation::{Error, Result};
use tracing::debug;

use crate::dialogue::DialoguePlugin;
use crate::light::LightPlugin;

/// Names of the bundled plugins.
#[must_use]
pub fn names() -> &'static [&'static str] {
    &["light", "dialogue"]
}

/// Creates a bundled plugin by name.
///
/// # Errors
///
/// Returns [`textquest_foundation::ErrorKind::UnknownPlugin`] for names not in [`names`].
pub fn plugin(name: &str) -> Result<Rc<dyn Plugin>> {
    match name {
        "light" => Ok(Rc::new(LightPlugin::default())),
        "dialogue" => Ok(Rc::new(DialoguePlugin::new())),
        other => Err(Error::unknown_plugin(other)),
    }
}

/// Builds a registry from plugin names, keeping the first occurrence of each.
///
/// # Errors
///
/// Returns an error for the first unknown name.
pub fn registry<I, S>(requested: I) -> Result<PluginRegistry>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut registry = PluginRegistry::new();
    let mut seen: Vec<String> = Vec::new();
    for name in requested {
        let name = name.as_ref();
        if seen.iter().any(|s| s == name) {
            debug!(plugin = name, "skipping duplicate plugin");
            continue;
        }
        registry.register(plugin(name)?);
        seen.push(name.to_string());
    }
    Ok(registry)
}
