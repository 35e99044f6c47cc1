use std::sync::Arc;

use crate::application::login_router::LoginRouter;

pub(crate) mod handlers;
pub(crate) mod middleware;
pub(crate) mod openapi;
pub(crate) mod routes;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) login_router: Arc<LoginRouter>,
}

impl AppState {
    pub(crate) fn new(login_router: Arc<LoginRouter>) -> Self {
        Self { login_router }
    }
}
