mod advisory_precedence;

pub use advisory_precedence::AdvisoryPrecedence;
