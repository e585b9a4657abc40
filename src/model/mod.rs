pub mod leaf;
pub mod node;
pub mod policy;
pub mod profile;
pub mod stage;
