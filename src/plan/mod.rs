pub mod column_id;
pub use column_id::*;

pub mod sort_order;
pub use sort_order::*;

pub mod plan_node;
pub use plan_node::*;

pub mod plan_cost;
pub use plan_cost::*;
