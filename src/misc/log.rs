/*!
Targets for the [log] macros called throughout the library.

No log implementation is provided by the library, the binary installs `env_logger`.
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [assembly](crate::encoder) of the whole formula
    pub const ENCODER: &str = "encoder";

    /// Logs related to [subject coverage](crate::encoder::coverage)
    pub const COVERAGE: &str = "coverage";

    /// Logs related to [cardinality](crate::encoder::cardinality) clauses
    pub const CARDINALITY: &str = "cardinality";

    /// Logs related to the [oracles](crate::oracle)
    pub const ORACLE: &str = "oracle";

    /// Logs related to [decoding](crate::decoder) a verdict
    pub const DECODER: &str = "decoder";
}
