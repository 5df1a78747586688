pub mod migrate;
pub mod server;
pub mod shopping_list;
