pub mod api;
pub mod appstate;
pub mod authclient;
pub mod config;
pub mod roles;
pub mod session;

#[cfg(test)]
pub(crate) mod testlog;

#[cfg(test)]
pub(crate) mod testserver;
