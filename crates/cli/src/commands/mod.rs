pub mod info;
pub mod list;

pub use info::info_command;
pub use list::list_command;
pub use test::test_command;
