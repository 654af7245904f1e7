use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct TitleQuery {
    pub titulo: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DateQuery {
    pub data: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    pub status: Option<String>,
}
