// handlers/mod.rs - Handler tiers
//
// Public (service info, health) → API (/api/* entity and hierarchy routes).
// There is no authentication tier; access control belongs to the
// deployment in front of this service.
pub mod public; // Tier 1: status endpoints
pub mod api;    // Tier 2: /api/* CRUD and hierarchy endpoints
