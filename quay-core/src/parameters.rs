use crate::{DataType, Error, Parameter, Result, Value, normalize_name};
use std::{collections::HashMap, slice};

/// Ordered collection of statement parameters with a name index.
///
/// The sequence keeps caller-insertion order, which is also the positional
/// binding order when the statement has no named placeholders. The index maps
/// a normalized name (marker stripped, case-folded) to the position of the
/// *last* parameter added under that normalized name: later additions
/// silently supersede earlier ones. Two raw names that differ only by marker
/// or case are indistinguishable to the index, which is what lets SQL text
/// say `@id` while the caller binds `?id` or plain `id`.
#[derive(Debug, Clone, Default)]
pub struct ParameterSet {
    parameters: Vec<Parameter>,
    name_to_index: HashMap<String, usize>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Append a parameter with a declared type and no value bound yet.
    /// Returns the created parameter so the caller can keep configuring it.
    pub fn add(&mut self, name: &str, data_type: DataType) -> &mut Parameter {
        self.push(Parameter::typed(name, data_type))
    }

    /// Append a parameter carrying a value.
    pub fn add_with_value(&mut self, name: &str, value: impl Into<Value>) -> &mut Parameter {
        self.push(Parameter::with_value(name, value))
    }

    /// Append an already constructed parameter, updating the name index.
    pub fn push(&mut self, parameter: Parameter) -> &mut Parameter {
        self.parameters.push(parameter);
        let index = self.parameters.len() - 1;
        if let Some(key) = self.parameters[index].normalized_name() {
            self.name_to_index.insert(key.to_owned(), index);
        }
        &mut self.parameters[index]
    }

    pub fn get(&self, index: usize) -> Result<&Parameter> {
        self.parameters.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.parameters.len(),
        })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut Parameter> {
        let len = self.parameters.len();
        self.parameters
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })
    }

    pub fn by_name(&self, name: &str) -> Result<&Parameter> {
        let index = self.require(name)?;
        Ok(&self.parameters[index])
    }

    pub fn by_name_mut(&mut self, name: &str) -> Result<&mut Parameter> {
        let index = self.require(name)?;
        Ok(&mut self.parameters[index])
    }

    /// Position of the parameter whose normalized name matches, provided the
    /// raw query also case-insensitively equals the stored display name.
    ///
    /// Normalization discards the marker, so two different raw names can
    /// normalize to the same key; the second comparison rejects those false
    /// positives. Unknown names yield `None`, never an error.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        let index = self.normalized_index_of(name)?;
        let stored = self.parameters[index].name();
        (name.to_lowercase() == stored.to_lowercase()).then_some(index)
    }

    /// Position for the normalized name, regardless of whether the query or
    /// the stored display name carries a leading `?` or `@`.
    pub fn normalized_index_of(&self, name: &str) -> Option<usize> {
        self.name_to_index.get(&normalize_name(name)).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    /// Remove the parameter at `index`, dropping its name mapping and
    /// shifting every mapping past it down by one.
    pub fn remove_at(&mut self, index: usize) -> Result<Parameter> {
        if index >= self.parameters.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.parameters.len(),
            });
        }
        let removed = self.parameters.remove(index);
        if let Some(key) = removed.normalized_name() {
            self.name_to_index.remove(key);
        }
        for position in self.name_to_index.values_mut() {
            if *position > index {
                *position -= 1;
            }
        }
        Ok(removed)
    }

    /// Remove by name. Unknown names fail with `InvalidArgument`.
    pub fn remove(&mut self, name: &str) -> Result<Parameter> {
        let index = self.require(name)?;
        self.remove_at(index)
    }

    /// Swap the parameter at `index`, repairing both the removed and the
    /// newly inserted mapping entries. Returns the replaced parameter.
    pub fn replace(&mut self, index: usize, parameter: Parameter) -> Result<Parameter> {
        if index >= self.parameters.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.parameters.len(),
            });
        }
        let old = std::mem::replace(&mut self.parameters[index], parameter);
        if let Some(key) = old.normalized_name() {
            self.name_to_index.remove(key);
        }
        if let Some(key) = self.parameters[index].normalized_name() {
            self.name_to_index.insert(key.to_owned(), index);
        }
        Ok(old)
    }

    /// Swap the parameter currently resolved by `name`.
    pub fn set_by_name(&mut self, name: &str, parameter: Parameter) -> Result<Parameter> {
        let index = self.require(name)?;
        self.replace(index, parameter)
    }

    /// Empty the sequence and the name index together.
    pub fn clear(&mut self) {
        self.parameters.clear();
        self.name_to_index.clear();
    }

    pub fn iter(&self) -> slice::Iter<'_, Parameter> {
        self.parameters.iter()
    }

    fn require(&self, name: &str) -> Result<usize> {
        self.index_of(name).ok_or_else(|| {
            Error::invalid_argument(format!("parameter '{name}' not found in the collection"))
        })
    }
}

impl<'a> IntoIterator for &'a ParameterSet {
    type Item = &'a Parameter;
    type IntoIter = slice::Iter<'a, Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.parameters.iter()
    }
}
