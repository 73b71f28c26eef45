//! Postgres query modules, one file per entity. All functions are free
//! functions over a [`sqlx::PgPool`]; no query builder layer, no caching.

pub mod documents;
pub mod members;
pub mod milestones;
pub mod projects;
pub mod tasks;
pub mod transactions;
pub mod users;

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
