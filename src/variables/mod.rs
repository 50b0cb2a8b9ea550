pub mod replay;
pub mod table;
pub mod variable;

pub use replay::replay_variables;
pub use table::{VariableTable, missing_spelling, normalize_name};
pub use variable::Variable;
