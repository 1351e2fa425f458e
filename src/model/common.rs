/// Database-generated surrogate key shared by every entity.
pub type Id = i32;
