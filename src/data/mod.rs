/// Data layer: core types, loading, filtering, and aggregation.
///
/// Architecture:
/// ```text
///  pizza_sales.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file once → Table (cached for the process)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Table    │  typed columns, row-major cells
///   └──────────┘
///        │
///        ├────────────┬──────────────┐
///        ▼            ▼              ▼
///   ┌──────────┐ ┌──────────┐ ┌───────────┐
///   │  filter   │ │  stats    │ │ aggregate  │
///   │ range →   │ │ describe  │ │ pie slices │
///   │ indices   │ │ view      │ │ (group-by) │
///   └──────────┘ └──────────┘ └───────────┘
/// ```

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
pub mod stats;
