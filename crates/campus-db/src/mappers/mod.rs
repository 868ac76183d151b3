//! Model to entity mappers
//!
//! This module provides conversions from database rows (models) to the
//! domain objects defined in campus-core, via `From<Model> for Entity`.

mod comment;
mod meal_rating;
mod message;
mod topic;
