//! Configuration for field construction

/// Default ceiling on the field order for which discrete-log tables are built
pub const DEFAULT_MAX_TABLE_ORDER: u64 = 1 << 24;

/// Configuration for building a [`Field`](crate::galois::Field)
#[derive(Debug, Clone)]
pub struct FieldConfig {
    /// Search for a primitive element and build log/antilog tables
    pub find_primitive_elem: bool,
    /// Whether to test primitive-element candidates in parallel
    pub parallel: bool,
    /// Number of threads for the search (0 = auto-detect)
    pub threads: usize,
    /// Largest field order for which tables are built
    pub max_table_order: u64,
    /// Known primitive element, coefficients lowest degree first. Replaces
    /// the search and implies tables.
    pub primitive_element: Option<Vec<u32>>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            find_primitive_elem: true,
            parallel: true,
            threads: 0, // Auto-detect CPU cores
            max_table_order: DEFAULT_MAX_TABLE_ORDER,
            primitive_element: None,
        }
    }
}

impl FieldConfig {
    pub fn new(find_primitive_elem: bool, parallel: bool) -> Self {
        Self {
            find_primitive_elem,
            parallel,
            ..Self::default()
        }
    }

    /// Sequential configuration, tables on
    pub fn sequential() -> Self {
        Self::new(true, false)
    }

    pub fn from_args(matches: &clap::ArgMatches) -> Self {
        let threads = matches
            .get_one::<String>("threads")
            .and_then(|s| s.parse().ok())
            .unwrap_or(0);

        Self {
            find_primitive_elem: !matches.get_flag("no-tables"),
            parallel: !matches.get_flag("no-parallel"),
            threads,
            ..Self::default()
        }
    }

    /// Get effective thread count (auto-detect if 0)
    pub fn effective_threads(&self) -> usize {
        match (self.parallel, self.threads) {
            (false, _) => 1,
            (true, 0) => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4),
            (true, n) => n,
        }
    }
}
