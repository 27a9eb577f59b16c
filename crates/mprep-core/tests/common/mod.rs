pub mod tiny_server;
