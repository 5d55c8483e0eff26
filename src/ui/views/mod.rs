pub mod lesson;
pub mod map;
pub mod notebook;
pub mod quiz;
pub mod victory;
