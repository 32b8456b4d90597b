/// Data layer: core types, loading, filtering, and headline metrics.
///
/// Architecture:
/// ```text
///  vehicles_us.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  Vec<ListingRecord>, observed ranges, category sets
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  apply FilterSelection → FilteredView (row indices)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ metrics   │  count + means over the view
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod filter;
pub mod metrics;
