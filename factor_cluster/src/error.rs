/// Identity fields every update request must carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequiredField {
    Cause,
    Index,
}

impl RequiredField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cause => "cause",
            Self::Index => "index",
        }
    }
}

impl std::fmt::Display for RequiredField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request was constructed without one of its required identity fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructionError {
    field: RequiredField,
}

impl ConstructionError {
    pub fn new(field: RequiredField) -> Self {
        Self { field }
    }

    pub fn field(&self) -> RequiredField {
        self.field
    }
}

impl std::fmt::Display for ConstructionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Invalid update request: required field '{}' is missing or empty",
            self.field
        )
    }
}

impl std::error::Error for ConstructionError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidIndexState {
    value: String,
}

impl InvalidIndexState {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl std::fmt::Display for InvalidIndexState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Invalid index state '{}': expected 'open' or 'close'",
            self.value
        )
    }
}

impl std::error::Error for InvalidIndexState {}

/// A setting value could not be converted to the requested type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidSettingValue {
    key: String,
    value: String,
    message: String,
}

impl InvalidSettingValue {
    pub fn new(
        key: impl Into<String>,
        value: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            message: message.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for InvalidSettingValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Invalid value '{}' for setting '{}': {}",
            self.value, self.key, self.message
        )
    }
}

impl std::error::Error for InvalidSettingValue {}

/// A settings document did not have a shape that can be flattened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidSettingsSource {
    message: String,
}

impl InvalidSettingsSource {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for InvalidSettingsSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid settings source: {}", self.message)
    }
}

impl std::error::Error for InvalidSettingsSource {}
