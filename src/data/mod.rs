/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  kicks.csv            fixtures.csv (optional)
///      │                      │
///      ▼                      ▼
///   ┌────────────────────────────┐
///   │  loader                    │  parse files → KickTable / FixtureTable
///   └────────────────────────────┘
///      │
///      ▼
///   ┌────────────────────────────┐
///   │  store                     │  load once, read-only afterwards
///   └────────────────────────────┘
///      │           FilterSpec
///      ▼               │
///   ┌──────────┐       │      ┌───────────┐
///   │  filter   │◄─────┴─────►│ cross_ref  │
///   └──────────┘              └───────────┘
///   kick indices               fixture indices + games with kicks
/// ```

pub mod cross_ref;
pub mod filter;
pub mod loader;
pub mod model;
pub mod store;
