use crate::{DataType, Value};

/// Characters recognized as a placeholder marker in front of a parameter name.
pub const NAME_MARKERS: [char; 2] = ['?', '@'];

/// Strips one optional leading marker character and case-folds the rest.
///
/// The fold is locale independent. The result is used solely as an index
/// key: an empty result means the name cannot be indexed and the parameter
/// is positional-only.
pub fn normalize_name(name: &str) -> String {
    name.strip_prefix(NAME_MARKERS).unwrap_or(name).to_lowercase()
}

/// One bound value: the display name as given by the caller (possibly
/// `?`/`@`-prefixed), its derived normalized name, the value and an optional
/// declared type.
#[derive(Debug, Clone, Default)]
pub struct Parameter {
    name: String,
    normalized_name: Option<String>,
    value: Value,
    data_type: Option<DataType>,
}

impl Parameter {
    /// A parameter with no value bound yet. An empty name (or a bare marker)
    /// makes it positional-only: it will never enter a name index.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let normalized = normalize_name(&name);
        Self {
            normalized_name: (!normalized.is_empty()).then_some(normalized),
            name,
            value: Value::Null,
            data_type: None,
        }
    }

    pub fn typed(name: impl Into<String>, data_type: DataType) -> Self {
        let mut parameter = Self::new(name);
        parameter.data_type = Some(data_type);
        parameter
    }

    pub fn with_value(name: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut parameter = Self::new(name);
        parameter.value = value.into();
        parameter
    }

    /// The name exactly as the caller supplied it, marker included.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The index key, or `None` for a positional-only parameter.
    pub fn normalized_name(&self) -> Option<&str> {
        self.normalized_name.as_deref()
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<Value>) -> &mut Self {
        self.value = value.into();
        self
    }

    /// The declared type, falling back to the type of the bound value.
    pub fn data_type(&self) -> Option<DataType> {
        self.data_type.or_else(|| self.value.data_type())
    }

    pub fn set_data_type(&mut self, data_type: DataType) -> &mut Self {
        self.data_type = Some(data_type);
        self
    }

    pub fn is_positional(&self) -> bool {
        self.normalized_name.is_none()
    }
}
