// Application layer: wires configuration, the HTTP client and the dispatcher together.

pub mod runner;
