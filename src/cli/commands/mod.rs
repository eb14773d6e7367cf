pub mod members;
pub mod server;
pub mod workgroups;
