//! Property injection
//!
//! Applies the property settings of an `ObjectConfig` to a constructed
//! instance, in declaration order. Settings naming a property the type
//! does not declare, or declares read-only, are skipped. A failing
//! conversion stops injection; settings applied before it stay applied.

use ioc_domain::{
    Error, Instance, ObjectConfig, PropertySetting, PropertySource, PropertyType, PropertyValue,
    Result,
};
use tracing::debug;

use super::conversion::convert_value;
use super::resolver::ReferenceResolver;

/// Assigns configured properties to instances
pub struct PropertyInjector<'a> {
    references: &'a dyn ReferenceResolver,
}

impl<'a> PropertyInjector<'a> {
    /// Create an injector resolving reference-valued settings through `references`
    pub fn new(references: &'a dyn ReferenceResolver) -> Self {
        Self { references }
    }

    /// Apply every property setting of `config` to `instance`
    pub fn apply(&self, config: &ObjectConfig, instance: &Instance) -> Result<()> {
        for setting in &config.properties {
            self.apply_one(config, setting, instance)?;
        }
        Ok(())
    }

    fn apply_one(
        &self,
        config: &ObjectConfig,
        setting: &PropertySetting,
        instance: &Instance,
    ) -> Result<()> {
        let Some(property) = instance
            .find_property(&setting.name)
            .filter(|property| property.writable)
        else {
            debug!(
                id = %config.id,
                class = %instance.class_name(),
                property = %setting.name,
                "No writable property, skipping"
            );
            return Ok(());
        };

        let value = match setting.source() {
            Some(PropertySource::Ref(target_id)) => {
                if property.ty != PropertyType::Object {
                    return Err(Error::conversion(
                        property.name,
                        property.ty.to_string(),
                        format!("reference '{target_id}'"),
                    ));
                }
                PropertyValue::Object(self.references.resolve(target_id)?)
            }
            Some(PropertySource::Value(literal)) => convert_value(property, literal)?,
            None => {
                return Err(Error::config(format!(
                    "Property '{}' of '{}' has neither a value nor a reference",
                    setting.name, config.id
                )));
            }
        };

        instance.set_property(property.name, value)
    }
}
