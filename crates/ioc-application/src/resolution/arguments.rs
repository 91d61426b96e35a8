//! Constructor argument building
//!
//! Literal parameters come first, in declaration order. Reference
//! descriptors are then inserted at their declared index, lowest index
//! first, so every declared index names a position in the final vector:
//!
//! ```text
//! literals  [a, b, c]          refs at 4, 0, 2 (any declaration order)
//! insert 0  [R0, a, b, c]
//! insert 2  [R0, a, R2, b, c]
//! insert 4  [R0, a, R2, b, R4, c]
//! ```

use std::sync::Arc;

use ioc_domain::{Arg, Error, Instance, ObjectConfig, RefParam, Result};
use tracing::debug;

use super::resolver::ReferenceResolver;

/// Builds the constructor argument vector of an `ObjectConfig`
pub struct ArgumentBuilder<'a> {
    references: &'a dyn ReferenceResolver,
}

impl<'a> ArgumentBuilder<'a> {
    /// Create a builder resolving references through `references`
    pub fn new(references: &'a dyn ReferenceResolver) -> Self {
        Self { references }
    }

    /// Build the final argument vector
    ///
    /// The result has `config.arg_count()` elements. Indices are validated
    /// before any reference is resolved: they must be distinct and each must
    /// fall inside the vector as it stands when that reference is inserted.
    pub fn build(&self, config: &ObjectConfig) -> Result<Vec<Arg>> {
        let mut args: Vec<Arg> = config
            .constructor_params
            .iter()
            .cloned()
            .map(Arg::Literal)
            .collect();

        if config.ref_constructor_params.is_empty() {
            return Ok(args);
        }

        let ordered = ordered_references(config)?;
        for reference in ordered {
            let value = self.materialize(reference)?;
            args.insert(reference.index(), value);
        }

        debug!(
            id = %config.id,
            count = args.len(),
            "Built constructor arguments"
        );
        Ok(args)
    }

    fn materialize(&self, reference: &RefParam) -> Result<Arg> {
        match reference {
            RefParam::Single { target_id, .. } => {
                Ok(Arg::Object(self.references.resolve(target_id)?))
            }
            RefParam::List {
                target_ids,
                is_array,
                ..
            } => {
                let items = target_ids
                    .iter()
                    .map(|id| self.references.resolve(id))
                    .collect::<Result<Vec<Instance>>>()?;
                if *is_array {
                    Ok(Arg::Array(Arc::from(items)))
                } else {
                    Ok(Arg::List(items))
                }
            }
        }
    }
}

/// Reference descriptors sorted by ascending index, after bounds checks
fn ordered_references(config: &ObjectConfig) -> Result<Vec<&RefParam>> {
    let mut ordered: Vec<&RefParam> = config.ref_constructor_params.iter().collect();
    ordered.sort_by_key(|reference| reference.index());

    let literals = config.constructor_params.len();
    for (inserted, reference) in ordered.iter().enumerate() {
        let index = reference.index();
        let len = literals + inserted;
        if index > len {
            return Err(Error::invalid_reference_index(&config.id, index, len));
        }
    }

    if let Some(pair) = ordered.windows(2).find(|w| w[0].index() == w[1].index()) {
        return Err(Error::config(format!(
            "'{}' declares more than one reference at index {}",
            config.id,
            pair[0].index()
        )));
    }

    Ok(ordered)
}
