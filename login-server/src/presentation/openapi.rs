use utoipa::OpenApi;

use crate::domain::error::ErrorBody;
use crate::domain::http::{AccessTokenBody, LoginBody};

#[derive(OpenApi)]
#[openapi(
    paths(crate::presentation::handlers::auth::login),
    components(schemas(LoginBody, AccessTokenBody, ErrorBody)),
    tags((name = "auth", description = "Login endpoint"))
)]
pub(crate) struct ApiDoc;

#[cfg(test)]
mod tests {
    use utoipa::OpenApi;

    use super::ApiDoc;

    #[test]
    fn document_lists_login_path() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/auth/login"));
    }
}
