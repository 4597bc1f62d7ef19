pub mod match_error;
pub use match_error::*;

pub mod match_outcome;
pub use match_outcome::*;

pub mod alias_bindings;
pub use alias_bindings::*;

pub mod symbolic_reference;
pub use symbolic_reference::*;

pub mod plan_matcher;
pub use plan_matcher::*;

pub mod top_n_matcher;
pub use top_n_matcher::*;

pub mod limit_matcher;
pub use limit_matcher::*;

pub mod scan_matcher;
pub use scan_matcher::*;
