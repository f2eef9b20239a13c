//! Wire contracts shared between the CMS admin frontend and the REST backend.

pub mod domain;
pub mod shared;
pub mod system;
