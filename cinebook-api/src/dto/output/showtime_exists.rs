use serde::Serialize;

#[derive(Debug, PartialEq, Serialize)]
pub struct ShowtimeExists {
    pub exists: bool,
}
