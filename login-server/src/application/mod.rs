pub(crate) mod authenticator;
pub(crate) mod login_router;
