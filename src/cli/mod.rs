pub mod console;
pub mod menu;
pub mod menus;
pub mod output;
pub mod prompts;
pub mod table;
