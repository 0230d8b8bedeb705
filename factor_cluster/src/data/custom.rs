/// Opaque, extension-defined metadata attached to an index.
///
/// The request only carries the value; interpreting it is left to the
/// extension that registered the custom metadata type.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(transparent)]
pub struct IndexCustom(serde_json::Value);

impl IndexCustom {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    pub fn from_typed<T: serde::Serialize>(value: &T) -> Result<Self, serde_json::Error> {
        serde_json::to_value(value).map(Self)
    }

    pub fn to_typed<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        T::deserialize(&self.0)
    }

    pub fn value(&self) -> &serde_json::Value {
        &self.0
    }

    pub fn into_value(self) -> serde_json::Value {
        self.0
    }
}

impl From<serde_json::Value> for IndexCustom {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}
