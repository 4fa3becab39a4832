use std::{any::type_name, collections::HashMap, fmt::Debug, sync::Arc};

use crate::{
    errors::RequireError,
    types::{Injectable, Instance},
};

/// Container holding all constructed components by name
#[derive(Clone)]
pub struct DiContainer(pub Arc<DiContainerInner>);
pub struct DiContainerInner {
    instances: HashMap<String, Instance>,
}
impl Debug for DiContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<_> = self.0.instances.iter().collect();
        names.sort_by(|a, b| a.0.cmp(b.0));

        let mut map = f.debug_struct("DiContainer");
        for (name, instance) in names {
            map.field(name, &instance.info.type_name);
        }
        map.finish()
    }
}

impl DiContainer {
    pub(crate) fn new(instances: HashMap<String, Instance>) -> Self {
        Self(Arc::new(DiContainerInner { instances }))
    }

    /// Attempts to get the named component as `T`
    pub fn require<T: Injectable>(&self, name: &str) -> Result<Arc<T>, RequireError> {
        self.instance(name)?
            .downcast()
            .map_err(|actual_type| RequireError::DowncastFailed {
                component: name.to_string(),
                required_type: type_name::<T>(),
                actual_type,
            })
    }

    /// Returns a capability view of the named component, `None` if it does not expose one
    pub fn view<View: ?Sized + Send + Sync + 'static>(
        &self,
        name: &str,
    ) -> Result<Option<Arc<View>>, RequireError> {
        Ok(self.instance(name)?.view::<View>())
    }

    pub fn instance(&self, name: &str) -> Result<&Instance, RequireError> {
        self.0
            .instances
            .get(name)
            .ok_or_else(|| RequireError::ComponentMissing(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.instances.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.instances.is_empty()
    }
}
