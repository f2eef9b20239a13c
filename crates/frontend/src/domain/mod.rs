pub mod a001_category;
pub mod a002_comment;
pub mod a003_contact_form;
pub mod a004_marketing_publication;
