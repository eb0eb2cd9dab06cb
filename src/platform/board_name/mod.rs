//! Optional board-naming capabilities.
//!
//! Some boards are only recognisable through a vendor hardware-abstraction
//! layer. Providers are resolved by name from a registry; a provider that
//! is not registered, disabled, or fails to load resolves to
//! [`NullBoardNameProvider`] instead of an error.

mod mraa;

pub use mraa::{MraaBoardNameProvider, MRAA_GPIO_BINARY};

use crate::error::{PlatformError, Result};
use std::collections::HashMap;
use std::path::PathBuf;

/// Name under which the MRAA provider is registered
pub const MRAA: &str = "mraa";

/// A source of the board's platform name.
pub trait BoardNameProvider: Send + Sync {
    /// Provider name, as registered
    fn name(&self) -> &str;

    /// Board name reported by the capability, if any
    fn platform_name(&self) -> Option<String>;
}

/// Fallback used when a capability cannot be resolved
#[derive(Debug, Default, Clone, Copy)]
pub struct NullBoardNameProvider;

impl BoardNameProvider for NullBoardNameProvider {
    fn name(&self) -> &str {
        "null"
    }

    fn platform_name(&self) -> Option<String> {
        None
    }
}

/// Board name fixed up front, for captured environments and tests
#[derive(Debug, Clone)]
pub struct StaticBoardNameProvider {
    name: String,
    platform_name: Option<String>,
}

impl StaticBoardNameProvider {
    pub fn new<S: Into<String>>(name: S, platform_name: Option<String>) -> Self {
        Self {
            name: name.into(),
            platform_name,
        }
    }
}

impl BoardNameProvider for StaticBoardNameProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn platform_name(&self) -> Option<String> {
        self.platform_name.clone()
    }
}

type Loader = Box<dyn Fn() -> Result<Box<dyn BoardNameProvider>> + Send + Sync>;

/// Named, lazily loaded board-name providers.
pub struct BoardNameRegistry {
    loaders: HashMap<String, Loader>,
}

impl BoardNameRegistry {
    /// Registry with no providers; every lookup resolves to the null provider
    pub fn empty() -> Self {
        Self {
            loaders: HashMap::new(),
        }
    }

    /// Registry with the built-in providers, using `mraa_gpio` as an explicit
    /// tool path when given.
    pub fn with_defaults(mraa_gpio: Option<PathBuf>) -> Self {
        let mut registry = Self::empty();
        registry.register(MRAA, move || {
            let provider = match &mraa_gpio {
                Some(path) => MraaBoardNameProvider::at(path.clone())?,
                None => MraaBoardNameProvider::locate()?,
            };
            Ok(Box::new(provider) as Box<dyn BoardNameProvider>)
        });
        registry
    }

    /// Register (or replace) the loader for `name`.
    pub fn register<F>(&mut self, name: &str, loader: F)
    where
        F: Fn() -> Result<Box<dyn BoardNameProvider>> + Send + Sync + 'static,
    {
        self.loaders.insert(name.to_string(), Box::new(loader));
    }

    /// Register a provider that is already loaded.
    pub fn register_provider<P>(&mut self, provider: P)
    where
        P: BoardNameProvider + Clone + 'static,
    {
        let name = provider.name().to_string();
        self.register(&name, move || {
            Ok(Box::new(provider.clone()) as Box<dyn BoardNameProvider>)
        });
    }

    pub fn remove(&mut self, name: &str) -> bool {
        self.loaders.remove(name).is_some()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.loaders.contains_key(name)
    }

    /// Load the provider registered as `name`.
    pub fn try_resolve(&self, name: &str) -> Result<Box<dyn BoardNameProvider>> {
        let loader = self.loaders.get(name).ok_or_else(|| {
            PlatformError::capability_missing(format!("no provider registered as '{}'", name))
        })?;
        loader()
    }

    /// Load the provider registered as `name`, or the null provider.
    pub fn resolve(&self, name: &str) -> Box<dyn BoardNameProvider> {
        match self.try_resolve(name) {
            Ok(provider) => provider,
            Err(e) => {
                log::debug!("Board name capability '{}' unavailable: {}", name, e);
                Box::new(NullBoardNameProvider)
            }
        }
    }
}

impl Default for BoardNameRegistry {
    fn default() -> Self {
        Self::with_defaults(None)
    }
}

impl std::fmt::Debug for BoardNameRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&String> = self.loaders.keys().collect();
        names.sort();
        f.debug_struct("BoardNameRegistry")
            .field("providers", &names)
            .finish()
    }
}
