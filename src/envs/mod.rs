pub mod simple_golf;
