
//---------------------------------------
pub mod web_api {
    pub mod api_error;
    pub mod routes;
    pub mod controllers;
}

pub use web_api::api_error;
pub use web_api::routes::*;
pub use web_api::controllers::*;
//---------------------------------------

//---------------------------------------
pub mod shared {
    pub mod models;
    pub mod dto;
    pub mod validation;
}

pub use shared::models::*;
pub use shared::dto::*;
pub use shared::validation;
//---------------------------------------

//---------------------------------------
pub mod data_access {
    pub mod task_store;
    pub mod memory_task_store;
    pub mod data_context;
}
//---------------------------------------
