use axum::{
    routing::{get, post},
    Router,
};

use crate::{app_state::SharedState, task_controller::TaskController};

pub const ROUTER_PATH: &str = "/Tarefa";

pub fn get_router(app_state: SharedState) -> Router {
    Router::new()
        .route(ROUTER_PATH, post(TaskController::create))
        .route(format!("{}/ObterTodos", ROUTER_PATH).as_str(), get(TaskController::get_all))
        .route(format!("{}/ObterPorTitulo", ROUTER_PATH).as_str(), get(TaskController::get_by_title))
        .route(format!("{}/ObterPorData", ROUTER_PATH).as_str(), get(TaskController::get_by_date))
        .route(format!("{}/ObterPorStatus", ROUTER_PATH).as_str(), get(TaskController::get_by_status))
        .route(
            format!("{}/:id", ROUTER_PATH).as_str(),
            get(TaskController::get_by_id)
                .put(TaskController::update)
                .delete(TaskController::delete),
        )
        .with_state(app_state)
}
