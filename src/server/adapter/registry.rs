use std::{collections::BTreeMap, sync::Arc};

use crate::server::adapter::handler::{
    EventHandler, EventStyle, FetchHandler, FetchStyle, Handler,
};

/// Immutable mapping from endpoint name to handler.
///
/// Built once at startup through [`HandlerRegistryBuilder`] and shared by cloning; clones
/// share the same underlying map, which nothing can mutate after `build()`.
#[derive(Clone, Default)]
pub struct HandlerRegistry {
    handlers: Arc<BTreeMap<String, Arc<dyn Handler>>>,
}

impl HandlerRegistry {
    pub fn builder() -> HandlerRegistryBuilder {
        HandlerRegistryBuilder::default()
    }

    /// Looks up the handler registered under `name`.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Handler>> {
        self.handlers.get(name).cloned()
    }

    /// Registered endpoint names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }
}

/// Collects handlers before freezing them into a [`HandlerRegistry`].
#[derive(Default)]
pub struct HandlerRegistryBuilder {
    handlers: BTreeMap<String, Arc<dyn Handler>>,
}

impl HandlerRegistryBuilder {
    /// Registers `handler` under `name`.
    ///
    /// Registering the same name twice keeps the later handler and logs a warning.
    ///
    /// # Arguments
    /// - `name` - Endpoint name as it appears in `/api/{name}`
    /// - `handler` - Handler to dispatch to
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn register(mut self, name: impl Into<String>, handler: impl Handler + 'static) -> Self {
        let name = name.into();

        if self
            .handlers
            .insert(name.clone(), Arc::new(handler))
            .is_some()
        {
            tracing::warn!("Replaced previously registered API handler: {}", name);
        } else {
            tracing::info!("Registered API handler: {}", name);
        }

        self
    }

    /// Registers a handler written against the event convention.
    pub fn register_event<H>(self, name: impl Into<String>, handler: H) -> Self
    where
        H: EventHandler + 'static,
    {
        self.register(name, EventStyle(handler))
    }

    /// Registers a handler written against the Fetch convention.
    pub fn register_fetch<H>(self, name: impl Into<String>, handler: H) -> Self
    where
        H: FetchHandler + 'static,
    {
        self.register(name, FetchStyle(handler))
    }

    pub fn build(self) -> HandlerRegistry {
        HandlerRegistry {
            handlers: Arc::new(self.handlers),
        }
    }
}
