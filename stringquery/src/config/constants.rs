pub mod compile_time {
    pub mod lexical {
        /// Maximum query input size (64KB)
        /// SECURITY: Prevents DoS attacks via enormous query strings
        pub const MAX_INPUT_LENGTH: usize = 64 * 1024;

        /// Maximum quoted string value size (8KB)
        /// SECURITY: Prevents memory exhaustion via huge quoted values
        pub const MAX_QUOTED_STRING_SIZE: usize = 8 * 1024;

        /// Maximum field name length (255 characters)
        /// SECURITY: Prevents parser complexity attacks
        pub const MAX_IDENTIFIER_LENGTH: usize = 255;
    }

    pub mod syntax {
        /// Default bound on group nesting depth
        /// SECURITY: Prevents stack overflow via deeply nested groups
        pub const DEFAULT_MAX_NESTING_LEVEL: usize = 100;

        /// Default bound on direct sibling sub-groups per group
        /// SECURITY: Prevents DoS via group explosion
        pub const DEFAULT_MAX_GROUP_COUNT: usize = 100;

        /// Hard cap on the configurable nesting level
        /// SECURITY: Bounds parser recursion regardless of caller config
        pub const MAX_NESTING_LEVEL_CAP: usize = 500;
    }

    pub mod values {
        /// Default bound on accepted entries per field value list
        /// SECURITY: Prevents memory exhaustion via value explosion
        pub const DEFAULT_MAX_VALUES_PER_FIELD: usize = 1000;
    }

    pub mod errors {
        /// Maximum semantic errors collected per process call
        /// RESOURCE: Prevents unbounded error accumulation
        pub const MAX_ERROR_COLLECTION: usize = 1000;
    }
}
