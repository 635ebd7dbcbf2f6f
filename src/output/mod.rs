pub mod console;
pub mod writer_txt;

pub use console::display_names;
pub use writer_txt::write_name_list;
