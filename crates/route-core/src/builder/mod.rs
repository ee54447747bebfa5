pub mod format_clause;

pub use format_clause::DataFormatClause;
