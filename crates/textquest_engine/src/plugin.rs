//! Plugin contract and binding.
//!
//! A plugin declares which events it wants through [`Hooks`] and answers
//! them through the `on_*` methods. Binding subscribes those methods on a
//! dispatcher in a fixed order: `pre_action`, `post_action`, then one
//! `command_<name>` per declared command. Plugins that need to subscribe
//! more callbacks later carry a [`PluginLink`].

use std::cell::OnceCell;
use std::fmt;
use std::rc::Rc;

use textquest_foundation::{Error, ErrorKind, Result};
use textquest_parser::Action;
use textquest_world::{State, World};
use tracing::{debug, info};

use crate::bus::{POST_ACTION, PRE_ACTION, WeakEventBus, command_event};
use crate::dispatcher::EventDispatcher;

/// Events a plugin subscribes to when bound.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Hooks {
    /// Subscribe [`Plugin::on_pre_action`]
    pub pre_action: bool,
    /// Subscribe [`Plugin::on_post_action`]
    pub post_action: bool,
    /// Command names routed to [`Plugin::on_command`]
    pub commands: Vec<String>,
}

impl Hooks {
    /// No hooks.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Adds the pre-action hook.
    #[must_use]
    pub fn with_pre_action(mut self) -> Self {
        self.pre_action = true;
        self
    }

    /// Adds the post-action hook.
    #[must_use]
    pub fn with_post_action(mut self) -> Self {
        self.post_action = true;
        self
    }

    /// Adds a command hook.
    #[must_use]
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.commands.push(command.into());
        self
    }
}

/// A unit of extra game behaviour.
///
/// Every hook defaults to declining (`None`).
pub trait Plugin {
    /// Name used in logs and errors.
    fn name(&self) -> &str;

    /// Events to subscribe when bound.
    fn hooks(&self) -> Hooks {
        Hooks::none()
    }

    /// Runs before every turn. `Some` vetoes the turn and is shown instead.
    fn on_pre_action(&self, _action: &Action, _state: &mut State, _world: &mut World) -> Option<String> {
        None
    }

    /// Runs after every dispatched turn. The reply is ignored.
    fn on_post_action(&self, _action: &Action, _state: &mut State, _world: &mut World) -> Option<String> {
        None
    }

    /// Runs before the built-in handler of a declared command.
    fn on_command(
        &self,
        _command: &str,
        _action: &Action,
        _state: &mut State,
        _world: &mut World,
    ) -> Option<String> {
        None
    }

    /// Link attached during binding, for plugins that subscribe on their own.
    fn link(&self) -> Option<&PluginLink> {
        None
    }

    /// Called once binding has subscribed the declared hooks.
    ///
    /// # Errors
    ///
    /// Returns an error if the plugin cannot finish setting up.
    fn on_bind(&self) -> Result<()> {
        Ok(())
    }
}

/// A plugin's handle on the dispatcher it is bound to.
///
/// Subscribing before binding fails with [`ErrorKind::PluginNotBound`].
pub struct PluginLink {
    plugin: String,
    bus: OnceCell<WeakEventBus>,
}

impl PluginLink {
    /// Creates an unattached link for the named plugin.
    #[must_use]
    pub fn new(plugin: impl Into<String>) -> Self {
        Self {
            plugin: plugin.into(),
            bus: OnceCell::new(),
        }
    }

    /// Returns true once the link has been attached.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.bus.get().is_some()
    }

    /// Attaches the link to a dispatcher.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::PluginAlreadyBound`] if already attached.
    pub fn attach(&self, dispatcher: &EventDispatcher) -> Result<()> {
        self.bus
            .set(dispatcher.bus().downgrade())
            .map_err(|_| Error::plugin_already_bound(&self.plugin))
    }

    /// Subscribes a callback on the attached dispatcher.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::PluginNotBound`] before binding, or an internal
    /// error if the dispatcher has since been dropped.
    pub fn subscribe<F>(&self, event: impl Into<String>, callback: F) -> Result<()>
    where
        F: Fn(&Action, &mut State, &mut World) -> Option<String> + 'static,
    {
        let weak = self
            .bus
            .get()
            .ok_or_else(|| Error::plugin_not_bound(&self.plugin))?;
        let bus = weak.upgrade().ok_or_else(|| {
            Error::new(ErrorKind::Internal(format!(
                "dispatcher for plugin '{}' no longer exists",
                self.plugin
            )))
        })?;
        bus.subscribe(event, callback);
        Ok(())
    }
}

impl fmt::Debug for PluginLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginLink")
            .field("plugin", &self.plugin)
            .field("bound", &self.is_bound())
            .finish()
    }
}

/// Binds one plugin to a dispatcher.
///
/// # Errors
///
/// Returns an error if the plugin's link is already attached or its
/// [`Plugin::on_bind`] fails.
pub fn bind(plugin: &Rc<dyn Plugin>, dispatcher: &EventDispatcher) -> Result<()> {
    if let Some(link) = plugin.link() {
        link.attach(dispatcher)?;
    }

    let hooks = plugin.hooks();
    if hooks.pre_action {
        let plugin = Rc::clone(plugin);
        dispatcher.subscribe(PRE_ACTION, move |action, state, world| {
            plugin.on_pre_action(action, state, world)
        });
    }
    if hooks.post_action {
        let plugin = Rc::clone(plugin);
        dispatcher.subscribe(POST_ACTION, move |action, state, world| {
            plugin.on_post_action(action, state, world)
        });
    }
    for command in hooks.commands {
        let plugin = Rc::clone(plugin);
        let event = command_event(&command);
        debug!(plugin = plugin.name(), event = %event, "binding command hook");
        dispatcher.subscribe(event, move |action, state, world| {
            plugin.on_command(&command, action, state, world)
        });
    }

    plugin.on_bind()?;
    info!(plugin = plugin.name(), "bound plugin");
    Ok(())
}

/// Ordered plugin list. Earlier plugins answer first.
#[derive(Clone, Default)]
pub struct PluginRegistry {
    plugins: Vec<Rc<dyn Plugin>>,
}

impl PluginRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a plugin, builder style.
    #[must_use]
    pub fn with(mut self, plugin: impl Plugin + 'static) -> Self {
        self.register(Rc::new(plugin));
        self
    }

    /// Appends a plugin.
    pub fn register(&mut self, plugin: Rc<dyn Plugin>) {
        self.plugins.push(plugin);
    }

    /// Number of plugins.
    #[must_use]
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Returns true if no plugins are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Plugin names in priority order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.plugins.iter().map(|p| p.name()).collect()
    }

    /// Binds every plugin in order.
    ///
    /// # Errors
    ///
    /// Stops at the first plugin that fails to bind.
    pub fn bind_all(&self, dispatcher: &EventDispatcher) -> Result<()> {
        for plugin in &self.plugins {
            bind(plugin, dispatcher)?;
        }
        Ok(())
    }
}

impl fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
