pub mod authors;
