use serde::Deserialize;

///
/// Update body that carries id of the record next to its fields
///
#[derive(Debug, Deserialize)]
pub struct WithId<T> {
    pub id: String,
    #[serde(flatten)]
    pub data: T,
}
