//! Project membership handlers; routes live under `/projects/:id/members`
//! in the projects router.

pub(in crate::api) mod add_member;
pub(in crate::api) mod get_members;
pub(in crate::api) mod remove_member;
pub(in crate::api) mod update_member;
