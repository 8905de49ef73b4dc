pub mod aliases;
pub mod generate;
pub mod info;
pub mod list;
pub mod load;
pub mod new_meta;
pub mod repl;
pub mod select;
pub mod size;
