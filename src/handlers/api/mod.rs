// handlers/api/mod.rs - Entity and hierarchy endpoints under /api
//
// Each submodule maps HTTP verbs onto one service call. Bodies are
// validated by the ValidJson extractor before any database access.
pub mod attendance;
pub mod logbook;
pub mod meetings;
pub mod members;
pub mod memberships;
pub mod workgroups;
