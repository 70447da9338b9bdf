mod navbar;
mod todo_list;

pub use navbar::Navbar;
pub use todo_list::TodoList;
