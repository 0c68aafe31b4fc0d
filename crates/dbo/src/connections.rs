use crate::{Db, Error, Model, Result};

use std::{any::TypeId, collections::HashMap, sync::Arc};

/// Default databases keyed by model type.
///
/// Built once at application start and handed to the code that creates
/// records. A model only ever uses its own default; there is no fallback to
/// another model's entry.
#[derive(Debug, Clone, Default)]
pub struct Connections {
    defaults: HashMap<TypeId, Arc<Db>>,
}

impl Connections {
    pub fn new() -> Connections {
        Connections::default()
    }

    /// Registers `db` as the default database for `M`, replacing any
    /// previous default.
    pub fn set_default<M: Model>(&mut self, db: Arc<Db>) -> &mut Self {
        self.defaults.insert(TypeId::of::<M>(), db);
        self
    }

    pub fn default_for<M: Model>(&self) -> Option<Arc<Db>> {
        self.defaults.get(&TypeId::of::<M>()).cloned()
    }

    /// Like [`default_for`](Self::default_for) but fails when no default
    /// was registered.
    pub fn resolve<M: Model>(&self) -> Result<Arc<Db>> {
        self.default_for::<M>().ok_or_else(|| {
            Error::not_configured(format!(
                "default database is not set for `{}`",
                std::any::type_name::<M>()
            ))
        })
    }

    pub fn remove<M: Model>(&mut self) -> Option<Arc<Db>> {
        self.defaults.remove(&TypeId::of::<M>())
    }
}
