pub(crate) mod http_authenticator;
pub(crate) mod logging;
pub(crate) mod settings;
