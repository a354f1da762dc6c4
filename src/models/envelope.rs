use serde::Deserialize;

/// Response envelope used by every backend endpoint: `{ success, data? }`.
/// A `success: false` body carries no usable record regardless of `data`.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// Returns the record only when the backend vouched for it.
    pub fn into_data(self) -> Option<T> {
        if self.success { self.data } else { None }
    }
}
